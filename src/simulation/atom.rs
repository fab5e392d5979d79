use crate::atom::AtomConfiguration;
use crate::physics::electron::{ShellDistribution, distribute_shells};
use crate::physics::elements::{ElementIdentity, identify};
use crate::physics::nucleus::{NucleusBuilder, NucleusLayout};

/// Everything drawn for one configuration, derived in a single pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Atom {
    config: AtomConfiguration,
    element: ElementIdentity,
    nucleus: NucleusLayout,
    shells: ShellDistribution,
}

impl Atom {
    pub fn new(config: AtomConfiguration) -> Self {
        Self {
            config,
            element: identify(config.protons),
            nucleus: NucleusBuilder::new(config.protons, config.neutrons).build(),
            shells: distribute_shells(config.electrons),
        }
    }

    pub fn config(&self) -> AtomConfiguration {
        self.config
    }

    pub fn element(&self) -> &ElementIdentity {
        &self.element
    }

    pub fn nucleus(&self) -> &NucleusLayout {
        &self.nucleus
    }

    pub fn shells(&self) -> &ShellDistribution {
        &self.shells
    }

    pub fn atomic_number(&self) -> u32 {
        self.config.atomic_number()
    }

    pub fn mass_number(&self) -> u32 {
        self.config.mass_number()
    }

    /// Rebuilds the derived layouts. Returns `false` when nothing changed.
    pub fn set_configuration(&mut self, config: AtomConfiguration) -> bool {
        if config == self.config {
            return false;
        }
        *self = Self::new(config);
        true
    }
}

impl Default for Atom {
    fn default() -> Self {
        Self::new(AtomConfiguration::default())
    }
}
