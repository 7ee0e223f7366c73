//! Per-frame orchestration.
//!
//! [`FrameDriver`] owns all render-side state (scene controller and particle
//! field) and is invoked once per display frame. Each invocation applies the
//! input queued since the previous frame, installs a finished model load,
//! advances the scene, renders it, and finally runs the particle pass so the
//! 2D overlay is drawn after the 3D scene.

use crate::config::ShowcaseConfig;
use crate::constants::FRAME_STATS_INTERVAL_SEC;
use crate::error::LoadError;
use crate::input::{InputState, SharedInput};
use crate::model::Artifact;
use crate::particles::{ParticleField, ParticleSurface};
use crate::scene::SceneController;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;

/// Slot the asynchronous loader drops its result into.
pub type LoadSlot = Rc<RefCell<Option<Result<Artifact, LoadError>>>>;

/// Draws the 3D scene (WebGPU on the web).
pub trait SceneRenderer {
    fn render(&mut self, scene: &SceneController) -> anyhow::Result<()>;
}

/// All mutable render state, constructed once at startup.
pub struct Showcase {
    pub scene: SceneController,
    pub particles: ParticleField,
}

impl Showcase {
    pub fn new(config: &ShowcaseConfig, aspect: f32) -> Self {
        Self {
            scene: SceneController::new(config, aspect),
            particles: ParticleField::new(config.particles),
        }
    }
}

struct FrameStats {
    last_report: Instant,
    frames: u32,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            last_report: Instant::now(),
            frames: 0,
        }
    }

    fn tick(&mut self, particles: usize) {
        self.frames += 1;
        let elapsed = self.last_report.elapsed().as_secs_f32();
        if elapsed >= FRAME_STATS_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps, {} particles",
                self.frames as f32 / elapsed,
                particles
            );
            self.frames = 0;
            self.last_report = Instant::now();
        }
    }
}

pub struct FrameDriver {
    showcase: Showcase,
    input: SharedInput,
    load: LoadSlot,
    stats: FrameStats,
    frame_index: u64,
}

impl FrameDriver {
    pub fn new(showcase: Showcase, input: SharedInput, load: LoadSlot) -> Self {
        Self {
            showcase,
            input,
            load,
            stats: FrameStats::new(),
            frame_index: 0,
        }
    }

    /// Run one frame. `renderer` is absent when no 3D backend is available.
    pub fn frame(
        &mut self,
        renderer: Option<&mut dyn SceneRenderer>,
        surface: &mut dyn ParticleSurface,
    ) {
        let queued = self.input.borrow_mut().take();
        self.apply_input(queued);

        if let Some(result) = self.load.borrow_mut().take() {
            self.showcase.scene.finish_load(result);
        }

        self.showcase.scene.advance();
        if let Some(r) = renderer {
            if let Err(e) = r.render(&self.showcase.scene) {
                log::error!("render error: {:?}", e);
            }
        }
        self.showcase.particles.advance_and_render(surface);

        self.frame_index += 1;
        self.stats.tick(self.showcase.particles.len());
    }

    fn apply_input(&mut self, input: InputState) {
        let Showcase { scene, particles } = &mut self.showcase;
        if let Some((w, h)) = input.viewport {
            scene.resize(w, h);
        }
        for delta in input.wheel {
            scene.set_zoom_delta(delta);
        }
        if let Some([nx, ny]) = input.pointer_ndc {
            scene.set_pointer_target(nx, ny);
        }
        for [x, y] in input.trail {
            particles.spawn_trail(x, y);
        }
    }

    pub fn showcase(&self) -> &Showcase {
        &self.showcase
    }

    pub fn showcase_mut(&mut self) -> &mut Showcase {
        &mut self.showcase
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}
