//! Scene graph controller: camera, lights and the (eventually) loaded artifact.
//!
//! Orientation is eased toward a pointer-derived target each frame; zoom is a
//! clamped additive step. The model arrives asynchronously, so the artifact is
//! tracked as a [`LoadState`] and `advance` does nothing until it is loaded.

use crate::config::{ArtifactPlacement, MaterialParams, ShowcaseConfig, ZoomLimits};
use crate::error::LoadError;
use crate::model::Artifact;
use crate::state::{Camera, Lights, Orientation};

/// Lifecycle of an asynchronously produced value.
#[derive(Debug)]
pub enum LoadState<T> {
    Pending,
    Loaded(T),
    Failed(LoadError),
}

impl<T> LoadState<T> {
    pub fn as_loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadState::Loaded(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }
}

pub struct SceneController {
    camera: Camera,
    lights: Lights,
    artifact: LoadState<Artifact>,
    target: Orientation,
    smoothing: f32,
    zoom: ZoomLimits,
    material: MaterialParams,
    placement: ArtifactPlacement,
}

impl SceneController {
    pub fn new(config: &ShowcaseConfig, aspect: f32) -> Self {
        Self {
            camera: Camera::looking_at_origin(config.zoom.start, aspect),
            lights: Lights::default(),
            artifact: LoadState::Pending,
            target: Orientation::default(),
            smoothing: config.smoothing,
            zoom: config.zoom,
            material: config.material,
            placement: config.placement,
        }
    }

    /// Aim the artifact from a pointer position in normalized device coords.
    pub fn set_pointer_target(&mut self, nx: f32, ny: f32) {
        self.target = Orientation::from_pointer(nx, ny);
    }

    /// One wheel tick; only the sign of `direction` matters.
    pub fn set_zoom_delta(&mut self, direction: f32) {
        self.camera.zoom(direction, &self.zoom);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    /// Ease the artifact toward the pointer target. No-op until loaded.
    pub fn advance(&mut self) {
        let (target, factor) = (self.target, self.smoothing);
        if let Some(artifact) = self.artifact.as_loaded_mut() {
            artifact.orientation.approach(target, factor);
        }
    }

    /// Install the result of the asynchronous model load.
    pub fn finish_load(&mut self, result: Result<Artifact, LoadError>) {
        self.artifact = match result {
            Ok(mut artifact) => {
                artifact.apply_material(self.material);
                artifact.place(self.placement);
                log::info!("[scene] artifact ready ({} meshes)", artifact.meshes.len());
                LoadState::Loaded(artifact)
            }
            Err(e) => {
                log::error!("[scene] artifact failed to load: {}", e);
                LoadState::Failed(e)
            }
        };
    }

    pub fn artifact(&self) -> Option<&Artifact> {
        self.artifact.as_loaded()
    }

    pub fn load_state(&self) -> &LoadState<Artifact> {
        &self.artifact
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn lights(&self) -> &Lights {
        &self.lights
    }

    pub fn target(&self) -> Orientation {
        self.target
    }
}
