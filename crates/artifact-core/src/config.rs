//! Startup configuration for the showcase.
//!
//! Every field defaults to the literal in `constants.rs`. The placement values
//! (yaw offset, vertical offset, scale) are tuning for the bundled model and
//! are kept as plain numbers rather than derived from the model bounds.

use crate::constants::*;

/// Where the artifact sits in the scene once loaded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArtifactPlacement {
    pub scale: f32,
    pub initial_yaw: f32,
    pub y_offset: f32,
}

impl Default for ArtifactPlacement {
    fn default() -> Self {
        Self {
            scale: ARTIFACT_SCALE,
            initial_yaw: ARTIFACT_INITIAL_YAW,
            y_offset: ARTIFACT_Y_OFFSET,
        }
    }
}

/// Physically-based material knobs forced onto every mesh of the artifact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialParams {
    pub metalness: f32,
    pub roughness: f32,
    pub env_intensity: f32,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            metalness: MATERIAL_METALNESS,
            roughness: MATERIAL_ROUGHNESS,
            env_intensity: MATERIAL_ENV_INTENSITY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    pub step: f32,
    pub min: f32,
    pub max: f32,
    pub start: f32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            step: ZOOM_STEP,
            min: ZOOM_MIN,
            max: ZOOM_MAX,
            start: CAMERA_START_DISTANCE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleParams {
    pub per_move: usize,
    pub size_range: (f32, f32),
    pub speed_max: f32,
    pub fade_per_frame: f32,
    pub rgb: [u8; 3],
    /// Upper bound on live particles; the oldest are dropped first.
    /// `None` keeps the field unbounded.
    pub capacity: Option<usize>,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            per_move: PARTICLES_PER_MOVE,
            size_range: (PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX),
            speed_max: PARTICLE_SPEED_MAX,
            fade_per_frame: PARTICLE_FADE_PER_FRAME,
            rgb: PARTICLE_RGB,
            capacity: Some(PARTICLE_CAPACITY),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphParams {
    pub interval_ms: i32,
    pub startup_count: usize,
    pub duration_sec: (f32, f32),
    pub delay_sec: (f32, f32),
    pub font_px: (f32, f32),
}

impl Default for GlyphParams {
    fn default() -> Self {
        Self {
            interval_ms: GLYPH_INTERVAL_MS,
            startup_count: GLYPH_STARTUP_COUNT,
            duration_sec: GLYPH_DURATION_SEC,
            delay_sec: GLYPH_DELAY_SEC,
            font_px: GLYPH_FONT_PX,
        }
    }
}

/// Everything tunable about the showcase, grouped per component.
#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseConfig {
    pub model_path: &'static str,
    pub placement: ArtifactPlacement,
    pub material: MaterialParams,
    pub zoom: ZoomLimits,
    pub smoothing: f32,
    pub particles: ParticleParams,
    pub glyphs: GlyphParams,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            model_path: ARTIFACT_MODEL_PATH,
            placement: ArtifactPlacement::default(),
            material: MaterialParams::default(),
            zoom: ZoomLimits::default(),
            smoothing: ROTATION_SMOOTHING,
            particles: ParticleParams::default(),
            glyphs: GlyphParams::default(),
        }
    }
}
