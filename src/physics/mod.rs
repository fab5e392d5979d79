pub mod electron;
pub mod elements;
pub mod nucleus;
pub mod particle;

pub use electron::{Electron, Shell, ShellDistribution, distribute_shells, shell_count};
pub use elements::{ElementIdentity, identify};
pub use nucleus::{Nucleon, NucleusBuilder, NucleusLayout, layout_nucleus};
pub use particle::{Particle, ParticleKind};
