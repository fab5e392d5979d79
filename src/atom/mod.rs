pub mod concepts;
pub mod model;

pub use model::{AtomConfiguration, ControlRanges, IonKind, Preset};
