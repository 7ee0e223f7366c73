// Shared tuning constants used by the core and the web frontend.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

// Asset
pub const ARTIFACT_MODEL_PATH: &str = "models/artifact.glb";

// Artifact placement (tuned for the bundled model)
pub const ARTIFACT_SCALE: f32 = 0.03;
pub const ARTIFACT_INITIAL_YAW: f32 = FRAC_PI_4;
pub const ARTIFACT_Y_OFFSET: f32 = -2.0;

// Material override applied to every mesh on load
pub const MATERIAL_METALNESS: f32 = 0.8;
pub const MATERIAL_ROUGHNESS: f32 = 0.2;
pub const MATERIAL_ENV_INTENSITY: f32 = 2.0;

// Pointer -> orientation mapping
pub const POINTER_ANGLE_RANGE: f32 = FRAC_PI_2; // full-deflection angle
pub const ROTATION_SMOOTHING: f32 = 0.1; // fraction of remaining angle per frame

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START_DISTANCE: f32 = 15.0;
pub const ZOOM_STEP: f32 = 2.0;
pub const ZOOM_MIN: f32 = 8.0;
pub const ZOOM_MAX: f32 = 30.0;

// Lights
pub const AMBIENT_COLOR: u32 = 0x40_40_40;
pub const AMBIENT_INTENSITY: f32 = 2.0;
pub const POINT_LIGHT_COLOR: u32 = 0xff_e6_b3;
pub const POINT_LIGHT_INTENSITY: f32 = 3.0;
pub const POINT_LIGHT_RANGE: f32 = 50.0;
pub const POINT_LIGHT_POSITION: [f32; 3] = [5.0, 10.0, 15.0];

// Cursor trail
pub const PARTICLES_PER_MOVE: usize = 3;
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 3.0;
pub const PARTICLE_SPEED_MAX: f32 = 1.5; // per axis, symmetric
pub const PARTICLE_FADE_PER_FRAME: f32 = 0.03;
pub const PARTICLE_RGB: [u8; 3] = [192, 168, 110];
pub const PARTICLE_CAPACITY: usize = 4096;

// Floating glyphs
pub const GLYPH_SET: [char; 10] = ['鼎', '尊', '爵', '卣', '簋', '觥', '罍', '瓿', '斝', '盉'];
pub const GLYPH_INTERVAL_MS: i32 = 500;
pub const GLYPH_STARTUP_COUNT: usize = 10;
pub const GLYPH_DURATION_SEC: (f32, f32) = (5.0, 10.0);
pub const GLYPH_DELAY_SEC: (f32, f32) = (0.0, 2.0);
pub const GLYPH_FONT_PX: (f32, f32) = (20.0, 35.0);

// Diagnostics
pub const FRAME_STATS_INTERVAL_SEC: f32 = 5.0;

/// Unpack a `0xRRGGBB` color into linear-ish `[0, 1]` floats.
#[inline]
pub fn rgb_hex(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}
