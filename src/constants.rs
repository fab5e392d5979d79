// Scene units are logical points, y grows downwards, origin at the nucleus centre.

// Electron shells (K, L, M)
pub const SHELL_CAPACITIES: [u32; 3] = [2, 8, 8];
pub const MAX_SHELLS: usize = SHELL_CAPACITIES.len();
pub const SHELL_BASE_RADIUS: f32 = 80.0;
pub const SHELL_RADIUS_STEP: f32 = 40.0;

// Orbit period of shell s is ORBIT_BASE_PERIOD + s * ORBIT_PERIOD_STEP seconds
pub const ORBIT_BASE_PERIOD: f32 = 3.0;
pub const ORBIT_PERIOD_STEP: f32 = 0.5;

// Nucleus
pub const NUCLEUS_LAYOUT_MAX_RADIUS: f32 = 20.0;
pub const NUCLEUS_LAYOUT_RADIUS_PER_PARTICLE: f32 = 2.0;
pub const NUCLEUS_BODY_RADIUS: f32 = 32.0;
pub const NUCLEUS_BORDER_WIDTH: f32 = 2.0;
pub const NUCLEON_RADIUS: f32 = 8.0;
pub const ELECTRON_RADIUS: f32 = 6.0;
pub const ORBIT_LINE_WIDTH: f32 = 1.0;
pub const GLOW_SCALE: f32 = 1.6;

// Control surface ranges
pub const PROTON_MAX: u32 = 20;
pub const NEUTRON_MAX: u32 = 25;
pub const ELECTRON_MAX: u32 = 20;

// Palette (sRGB hex)
pub const PROTON_COLOR: u32 = 0xef4444;
pub const NEUTRON_COLOR: u32 = 0x3b82f6;
pub const ELECTRON_COLOR: u32 = 0xfbbf24;

pub const WINDOW_TITLE: &str = "Atomic Structure Explorer";
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 800;

/// Splits a 0xRRGGBB value into normalized RGBA.
pub const fn rgba(hex: u32, alpha: f32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        alpha,
    ]
}
