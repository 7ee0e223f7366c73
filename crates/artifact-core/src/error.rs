use thiserror::Error;

/// Why the artifact model never became available.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch {path}: {reason}")]
    Fetch { path: String, reason: String },
    #[error("failed to decode glb: {0}")]
    Decode(#[from] gltf::Error),
    #[error("model contains no triangle geometry")]
    NoGeometry,
}
