use crate::constants::{ELECTRON_MAX, NEUTRON_MAX, PROTON_MAX};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Particle counts chosen on the control surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtomConfiguration {
    pub protons: u32,
    pub neutrons: u32,
    pub electrons: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IonKind {
    Neutral,
    Cation,
    Anion,
}

impl IonKind {
    pub fn label(self) -> &'static str {
        match self {
            IonKind::Neutral => "Neutral",
            IonKind::Cation => "Positive (Cation)",
            IonKind::Anion => "Negative (Anion)",
        }
    }
}

impl AtomConfiguration {
    pub const fn new(protons: u32, neutrons: u32, electrons: u32) -> Self {
        Self {
            protons,
            neutrons,
            electrons,
        }
    }

    /// Target of the Reset action.
    pub const fn hydrogen() -> Self {
        Self::new(1, 0, 1)
    }

    pub fn atomic_number(&self) -> u32 {
        self.protons
    }

    pub fn mass_number(&self) -> u32 {
        self.protons.saturating_add(self.neutrons)
    }

    pub fn net_charge(&self) -> i64 {
        i64::from(self.protons) - i64::from(self.electrons)
    }

    pub fn ion_kind(&self) -> IonKind {
        match self.protons.cmp(&self.electrons) {
            std::cmp::Ordering::Equal => IonKind::Neutral,
            std::cmp::Ordering::Greater => IonKind::Cation,
            std::cmp::Ordering::Less => IonKind::Anion,
        }
    }

    pub fn is_ion(&self) -> bool {
        self.ion_kind() != IonKind::Neutral
    }

    pub fn neutralized(self) -> Self {
        Self {
            electrons: self.protons,
            ..self
        }
    }

    pub fn clamped(self, ranges: &ControlRanges) -> Self {
        Self {
            protons: clamp_to(self.protons, &ranges.protons),
            neutrons: clamp_to(self.neutrons, &ranges.neutrons),
            electrons: clamp_to(self.electrons, &ranges.electrons),
        }
    }
}

impl Default for AtomConfiguration {
    fn default() -> Self {
        Self::new(6, 6, 6)
    }
}

impl From<&Preset> for AtomConfiguration {
    fn from(preset: &Preset) -> Self {
        Self::new(preset.protons, preset.neutrons, preset.electrons)
    }
}

fn clamp_to(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

/// Slider bounds of the control surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlRanges {
    pub protons: RangeInclusive<u32>,
    pub neutrons: RangeInclusive<u32>,
    pub electrons: RangeInclusive<u32>,
}

impl Default for ControlRanges {
    fn default() -> Self {
        Self {
            protons: 0..=PROTON_MAX,
            neutrons: 0..=NEUTRON_MAX,
            electrons: 0..=ELECTRON_MAX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub protons: u32,
    pub neutrons: u32,
    pub electrons: u32,
}

const PRESETS: [Preset; 8] = [
    Preset::new("Hydrogen", 1, 0, 1),
    Preset::new("Helium", 2, 2, 2),
    Preset::new("Carbon", 6, 6, 6),
    Preset::new("Oxygen", 8, 8, 8),
    Preset::new("Neon", 10, 10, 10),
    Preset::new("Sodium", 11, 12, 11),
    Preset::new("Magnesium", 12, 12, 12),
    Preset::new("Chlorine", 17, 18, 17),
];

impl Preset {
    pub const fn new(name: &'static str, protons: u32, neutrons: u32, electrons: u32) -> Self {
        Self {
            name,
            protons,
            neutrons,
            electrons,
        }
    }

    pub fn all() -> &'static [Preset] {
        &PRESETS
    }

    pub fn configuration(&self) -> AtomConfiguration {
        AtomConfiguration::from(self)
    }
}
