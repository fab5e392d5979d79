use crate::constants::{ELECTRON_COLOR, NEUTRON_COLOR, PROTON_COLOR};
use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticleKind {
    Proton,
    Neutron,
    Electron,
}

impl ParticleKind {
    /// Charge in units of the elementary charge.
    pub const fn charge(self) -> i32 {
        match self {
            ParticleKind::Proton => 1,
            ParticleKind::Neutron => 0,
            ParticleKind::Electron => -1,
        }
    }

    pub const fn color(self) -> u32 {
        match self {
            ParticleKind::Proton => PROTON_COLOR,
            ParticleKind::Neutron => NEUTRON_COLOR,
            ParticleKind::Electron => ELECTRON_COLOR,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ParticleKind::Proton => "Protons",
            ParticleKind::Neutron => "Neutrons",
            ParticleKind::Electron => "Electrons",
        }
    }
}

/// Shared behaviour for placed protons, neutrons, and electrons.
pub trait Particle {
    fn kind(&self) -> ParticleKind;
    /// Position relative to the nucleus centre.
    fn position(&self) -> Vec2;

    fn charge(&self) -> i32 {
        self.kind().charge()
    }
}
