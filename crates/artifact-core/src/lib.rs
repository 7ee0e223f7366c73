pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod glyphs;
pub mod input;
pub mod model;
pub mod particles;
pub mod scene;
pub mod state;

pub use config::*;
pub use constants::*;
pub use driver::*;
pub use error::*;
pub use glyphs::*;
pub use input::*;
pub use model::*;
pub use particles::*;
pub use scene::*;
pub use state::*;

pub static ARTIFACT_WGSL: &str = include_str!("../shaders/artifact.wgsl");
