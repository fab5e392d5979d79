//! Translates an [`Atom`] into the flat list of circles the GPU draws.
//!
//! Everything here is plain data; the wgpu side only uploads
//! [`Scene::instances`] and clears to [`Palette::background`].

use crate::constants::{
    ELECTRON_RADIUS, GLOW_SCALE, NUCLEON_RADIUS, NUCLEUS_BODY_RADIUS, NUCLEUS_BORDER_WIDTH,
    ORBIT_BASE_PERIOD, ORBIT_LINE_WIDTH, ORBIT_PERIOD_STEP, rgba,
};
use crate::physics::electron::Shell;
use crate::physics::particle::{Particle, ParticleKind};
use crate::renderer::vertex::CircleInstance;
use crate::simulation::atom::Atom;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

const GLOW_ALPHA: f32 = 0.35;
const ORBIT_LINE_ALPHA: f32 = 0.3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette::dark(),
            Theme::Light => Palette::light(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: [f32; 4],
    pub nucleus_fill: [f32; 4],
    pub nucleus_border: [f32; 4],
    pub orbit_line: [f32; 4],
    pub text: [f32; 4],
}

impl Palette {
    pub const fn dark() -> Self {
        Self {
            background: rgba(0x1f2937, 1.0),
            nucleus_fill: rgba(0x374151, 1.0),
            nucleus_border: rgba(0x4b5563, 1.0),
            orbit_line: rgba(0x4b5563, ORBIT_LINE_ALPHA),
            text: rgba(0xffffff, 1.0),
        }
    }

    pub const fn light() -> Self {
        Self {
            background: rgba(0xf3f4f6, 1.0),
            nucleus_fill: rgba(0xd1d5db, 1.0),
            nucleus_border: rgba(0x9ca3af, 1.0),
            orbit_line: rgba(0xd1d5db, ORBIT_LINE_ALPHA),
            text: rgba(0x1f2937, 1.0),
        }
    }

    pub fn particle(&self, kind: ParticleKind) -> [f32; 4] {
        rgba(kind.color(), 1.0)
    }
}

/// Seconds for one revolution of the given shell.
pub fn orbit_period(shell_index: usize) -> f32 {
    ORBIT_BASE_PERIOD + ORBIT_PERIOD_STEP * shell_index as f32
}

/// Rotation already covered by a shell after `elapsed` seconds, in `[0, TAU)`.
pub fn orbit_phase(shell_index: usize, elapsed: f32) -> f32 {
    TAU * (elapsed.max(0.0) / orbit_period(shell_index)).fract()
}

/// Position of an electron on its shell once the orbit has advanced.
pub fn orbit_position<P: Particle>(electron: &P, shell: &Shell, elapsed: f32) -> Vec2 {
    Vec2::from_angle(orbit_phase(shell.index(), elapsed)).rotate(electron.position())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    background: [f32; 4],
    instances: Vec<CircleInstance>,
}

impl Scene {
    /// Draw order: nucleus body, nucleons, then each shell's orbit line and electrons.
    pub fn build(atom: &Atom, palette: &Palette, elapsed: f32) -> Self {
        let mut scene = Self {
            background: palette.background,
            instances: Vec::with_capacity(estimated_len(atom)),
        };

        scene
            .instances
            .push(CircleInstance::disc(Vec2::ZERO, NUCLEUS_BODY_RADIUS, palette.nucleus_fill));
        scene.instances.push(CircleInstance::ring(
            Vec2::ZERO,
            NUCLEUS_BODY_RADIUS,
            NUCLEUS_BORDER_WIDTH,
            palette.nucleus_border,
        ));

        for nucleon in atom.nucleus().nucleons() {
            scene.push_particle(palette, nucleon.kind(), nucleon.position(), NUCLEON_RADIUS);
        }

        for shell in atom.shells().shells() {
            scene.instances.push(CircleInstance::ring(
                Vec2::ZERO,
                shell.radius(),
                ORBIT_LINE_WIDTH,
                palette.orbit_line,
            ));
            for electron in shell.electrons() {
                let position = orbit_position(electron, shell, elapsed);
                scene.push_particle(palette, electron.kind(), position, ELECTRON_RADIUS);
            }
        }

        scene
    }

    /// A scene with nothing but the background.
    pub fn empty(palette: &Palette) -> Self {
        Self {
            background: palette.background,
            instances: Vec::new(),
        }
    }

    pub fn instances(&self) -> &[CircleInstance] {
        &self.instances
    }

    pub fn background(&self) -> [f32; 4] {
        self.background
    }

    fn push_particle(&mut self, palette: &Palette, kind: ParticleKind, position: Vec2, radius: f32) {
        let color = palette.particle(kind);
        let [r, g, b, _] = color;
        self.instances.push(CircleInstance::disc(
            position,
            radius * GLOW_SCALE,
            [r, g, b, GLOW_ALPHA],
        ));
        self.instances.push(CircleInstance::disc(position, radius, color));
    }
}

fn estimated_len(atom: &Atom) -> usize {
    2 + 2 * atom.nucleus().len() + atom.shells().len() + 2 * atom.shells().rendered_electrons()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::AtomConfiguration;
    use crate::constants::{ELECTRON_COLOR, NEUTRON_COLOR, PROTON_COLOR};

    fn atom(p: u32, n: u32, e: u32) -> Atom {
        Atom::new(AtomConfiguration::new(p, n, e))
    }

    fn solid(scene: &Scene, radius: f32) -> Vec<CircleInstance> {
        scene
            .instances()
            .iter()
            .filter(|c| !c.is_ring() && c.radius == radius)
            .copied()
            .collect()
    }

    #[test]
    fn primitive_counts() {
        let palette = Palette::dark();
        let empty = Scene::build(&atom(0, 0, 0), &palette, 0.0);
        assert_eq!(empty.instances().len(), 2);

        // body + border, 12 nucleons with glow, 2 orbit lines, 6 electrons with glow
        let carbon = Scene::build(&atom(6, 6, 6), &palette, 0.0);
        assert_eq!(carbon.instances().len(), 2 + 24 + 2 + 12);
        assert_eq!(carbon.instances().len(), estimated_len(&atom(6, 6, 6)));

        let overfull = Scene::build(&atom(20, 25, 20), &palette, 0.0);
        assert_eq!(solid(&overfull, ELECTRON_RADIUS).len(), 18);
        assert_eq!(overfull.instances().iter().filter(|c| c.is_ring()).count(), 4);
    }

    #[test]
    fn nucleons_keep_proton_first_coloring() {
        let scene = Scene::build(&atom(2, 3, 0), &Palette::light(), 0.0);
        let colors: Vec<[f32; 4]> = solid(&scene, NUCLEON_RADIUS).iter().map(|c| c.color).collect();
        let proton = rgba(PROTON_COLOR, 1.0);
        let neutron = rgba(NEUTRON_COLOR, 1.0);
        assert_eq!(colors, [proton, proton, neutron, neutron, neutron]);
    }

    #[test]
    fn static_frame_matches_layout() {
        let atom = atom(11, 12, 11);
        let scene = Scene::build(&atom, &Palette::dark(), 0.0);
        let drawn: Vec<[f32; 2]> = solid(&scene, ELECTRON_RADIUS).iter().map(|c| c.center).collect();
        let laid_out: Vec<[f32; 2]> = atom
            .shells()
            .electrons()
            .map(|e| e.position().to_array())
            .collect();
        assert_eq!(drawn, laid_out);
        assert!(
            solid(&scene, ELECTRON_RADIUS)
                .iter()
                .all(|c| c.color == rgba(ELECTRON_COLOR, 1.0))
        );
    }

    #[test]
    fn orbits_repeat_after_one_period() {
        let atom = atom(6, 6, 6);
        let palette = Palette::dark();
        let start = Scene::build(&atom, &palette, 0.0);
        let quarter = Scene::build(&atom, &palette, orbit_period(0) / 4.0);
        assert_ne!(start, quarter);

        for shell in atom.shells().shells() {
            for electron in shell.electrons() {
                let later = orbit_position(electron, shell, orbit_period(shell.index()));
                assert!((later - electron.position()).length() < 1e-3);
                let moved = orbit_position(electron, shell, 1.0);
                assert!((moved.length() - shell.radius()).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn outer_shells_orbit_slower() {
        assert_eq!(orbit_period(0), 3.0);
        assert_eq!(orbit_period(1), 3.5);
        assert_eq!(orbit_period(2), 4.0);
        assert_eq!(orbit_phase(0, 0.0), 0.0);
        assert!((orbit_phase(1, 1.75) - TAU / 2.0).abs() < 1e-5);
    }

    #[test]
    fn theme_switches_palette() {
        assert!(Theme::default().is_dark());
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        let light = Scene::build(&atom(1, 0, 1), &Theme::Light.palette(), 0.0);
        assert_eq!(light.background(), Palette::light().background);
        assert!(Scene::empty(&Palette::dark()).instances().is_empty());
    }
}
