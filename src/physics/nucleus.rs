use crate::constants::{NUCLEUS_LAYOUT_MAX_RADIUS, NUCLEUS_LAYOUT_RADIUS_PER_PARTICLE};
use crate::physics::particle::{Particle, ParticleKind};
use glam::Vec2;
use std::f32::consts::TAU;

/// A proton or neutron placed on the nucleus ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nucleon {
    kind: ParticleKind,
    angle: f32,
    position: Vec2,
}

impl Nucleon {
    pub fn angle(&self) -> f32 {
        self.angle
    }
}

impl Particle for Nucleon {
    fn kind(&self) -> ParticleKind {
        self.kind
    }

    fn position(&self) -> Vec2 {
        self.position
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NucleusLayout {
    radius: f32,
    nucleons: Vec<Nucleon>,
}

impl NucleusLayout {
    /// Placements in render order: every proton, then every neutron.
    pub fn nucleons(&self) -> &[Nucleon] {
        &self.nucleons
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn len(&self) -> usize {
        self.nucleons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nucleons.is_empty()
    }

    pub fn proton_count(&self) -> usize {
        self.count(ParticleKind::Proton)
    }

    pub fn neutron_count(&self) -> usize {
        self.count(ParticleKind::Neutron)
    }

    fn count(&self, kind: ParticleKind) -> usize {
        self.nucleons.iter().filter(|n| n.kind == kind).count()
    }
}

pub struct NucleusBuilder {
    proton_count: u32,
    neutron_count: u32,
}

impl NucleusBuilder {
    pub fn new(proton_count: u32, neutron_count: u32) -> Self {
        Self {
            proton_count,
            neutron_count,
        }
    }

    pub fn build(&self) -> NucleusLayout {
        let total = self.proton_count.saturating_add(self.neutron_count);
        if total == 0 {
            return NucleusLayout::default();
        }

        let radius = ring_radius(total);
        let nucleons = (0..total)
            .map(|i| {
                let kind = if i < self.proton_count {
                    ParticleKind::Proton
                } else {
                    ParticleKind::Neutron
                };
                let angle = TAU * i as f32 / total as f32;
                Nucleon {
                    kind,
                    angle,
                    position: Vec2::from_angle(angle) * radius,
                }
            })
            .collect();

        NucleusLayout { radius, nucleons }
    }
}

pub fn layout_nucleus(protons: u32, neutrons: u32) -> NucleusLayout {
    NucleusBuilder::new(protons, neutrons).build()
}

fn ring_radius(total: u32) -> f32 {
    (total as f32 * NUCLEUS_LAYOUT_RADIUS_PER_PARTICLE).min(NUCLEUS_LAYOUT_MAX_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_nucleus_has_no_placements() {
        let layout = layout_nucleus(0, 0);
        assert!(layout.is_empty());
        assert_eq!(layout.radius(), 0.0);
    }

    #[test]
    fn protons_come_before_neutrons() {
        for (p, n) in [(1, 0), (0, 3), (6, 6), (11, 12), (20, 25)] {
            let layout = layout_nucleus(p, n);
            assert_eq!(layout.len(), (p + n) as usize);
            let (head, tail) = layout.nucleons().split_at(p as usize);
            assert!(head.iter().all(|x| x.kind() == ParticleKind::Proton));
            assert!(tail.iter().all(|x| x.kind() == ParticleKind::Neutron));
            let charge: i32 = layout.nucleons().iter().map(Particle::charge).sum();
            assert_eq!(charge, p as i32);
        }
    }

    #[test]
    fn angles_are_evenly_spaced_and_distinct() {
        let layout = layout_nucleus(7, 5);
        let step = TAU / 12.0;
        for (i, nucleon) in layout.nucleons().iter().enumerate() {
            assert!((nucleon.angle() - step * i as f32).abs() < 1e-5);
        }
        for pair in layout.nucleons().windows(2) {
            assert!(pair[1].angle() > pair[0].angle());
        }
    }

    #[test]
    fn radius_grows_then_caps_at_twenty() {
        assert_eq!(layout_nucleus(1, 0).radius(), 2.0);
        assert_eq!(layout_nucleus(3, 2).radius(), 10.0);
        assert_eq!(layout_nucleus(6, 4).radius(), 20.0);
        assert_eq!(layout_nucleus(20, 25).radius(), 20.0);
    }

    #[test]
    fn positions_lie_on_the_ring() {
        let layout = layout_nucleus(2, 2);
        let first = layout.nucleons()[0].position();
        assert!((first - Vec2::new(8.0, 0.0)).length() < 1e-5);
        let second = layout.nucleons()[1].position();
        assert!((second - Vec2::new(0.0, 8.0)).length() < 1e-5);
        for nucleon in layout.nucleons() {
            assert!((nucleon.position().length() - 8.0).abs() < 1e-4);
        }
    }

    #[test]
    fn carbon_nucleus() {
        let layout = layout_nucleus(6, 6);
        assert_eq!(layout.len(), 12);
        assert_eq!(layout.proton_count(), 6);
        assert_eq!(layout.neutron_count(), 6);
    }

    #[test]
    fn layout_is_idempotent() {
        assert_eq!(layout_nucleus(11, 12), layout_nucleus(11, 12));
    }
}
