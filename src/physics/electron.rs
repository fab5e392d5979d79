use crate::constants::{MAX_SHELLS, SHELL_BASE_RADIUS, SHELL_CAPACITIES, SHELL_RADIUS_STEP};
use crate::physics::particle::{Particle, ParticleKind};
use glam::Vec2;
use std::f32::consts::TAU;

/// An electron placed on its shell at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Electron {
    angle: f32,
    position: Vec2,
}

impl Electron {
    fn on_shell(radius: f32, angle: f32) -> Self {
        Self {
            angle,
            position: Vec2::from_angle(angle) * radius,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }
}

impl Particle for Electron {
    fn kind(&self) -> ParticleKind {
        ParticleKind::Electron
    }

    fn position(&self) -> Vec2 {
        self.position
    }
}

/// One occupied electron shell. Shells are only emitted when they hold at
/// least one electron.
#[derive(Clone, Debug, PartialEq)]
pub struct Shell {
    index: usize,
    electrons: Vec<Electron>,
}

impl Shell {
    fn fill(index: usize, occupants: u32) -> Self {
        let radius = shell_radius(index);
        let electrons = (0..occupants)
            .map(|j| Electron::on_shell(radius, TAU * j as f32 / occupants as f32))
            .collect();
        Self { index, electrons }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// K, L or M.
    pub fn label(&self) -> char {
        ['K', 'L', 'M'][self.index]
    }

    pub fn radius(&self) -> f32 {
        shell_radius(self.index)
    }

    pub fn electrons(&self) -> &[Electron] {
        &self.electrons
    }

    pub fn occupancy(&self) -> usize {
        self.electrons.len()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShellDistribution {
    shells: Vec<Shell>,
    unrendered: u32,
}

impl ShellDistribution {
    pub fn shells(&self) -> &[Shell] {
        &self.shells
    }

    pub fn len(&self) -> usize {
        self.shells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shells.is_empty()
    }

    pub fn occupancy(&self) -> Vec<usize> {
        self.shells.iter().map(Shell::occupancy).collect()
    }

    pub fn rendered_electrons(&self) -> usize {
        self.shells.iter().map(Shell::occupancy).sum()
    }

    /// Electrons past the M shell. They have no placement.
    pub fn unrendered(&self) -> u32 {
        self.unrendered
    }

    pub fn electrons(&self) -> impl Iterator<Item = &Electron> {
        self.shells.iter().flat_map(|shell| shell.electrons.iter())
    }
}

/// Fills K, L and M in order with capacities 2, 8 and 8.
pub fn distribute_shells(electrons: u32) -> ShellDistribution {
    let mut remaining = electrons;
    let mut shells = Vec::with_capacity(MAX_SHELLS);

    for (index, &capacity) in SHELL_CAPACITIES.iter().enumerate() {
        if remaining == 0 {
            break;
        }
        let occupants = remaining.min(capacity);
        shells.push(Shell::fill(index, occupants));
        remaining -= occupants;
    }

    ShellDistribution {
        shells,
        unrendered: remaining,
    }
}

/// Number of occupied shells for the given electron count.
pub fn shell_count(electrons: u32) -> usize {
    let mut remaining = electrons;
    SHELL_CAPACITIES
        .iter()
        .take_while(|&&capacity| {
            let occupied = remaining > 0;
            remaining = remaining.saturating_sub(capacity);
            occupied
        })
        .count()
}

pub fn shell_radius(index: usize) -> f32 {
    SHELL_BASE_RADIUS + SHELL_RADIUS_STEP * index as f32
}
