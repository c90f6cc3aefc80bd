//! WebGPU rendering module
//!
//! GPU context acquisition, the free-fly camera, per-mesh pipelines and the
//! frame orchestrating renderer.

pub mod camera;
pub mod context;
pub mod error;
pub mod mesh;
pub mod pipeline;
pub mod renderer;

pub use camera::Camera;
pub use context::GpuContext;
pub use error::{InitError, RenderError};
pub use mesh::Mesh;
pub use pipeline::{CameraUniform, MeshPipeline, ModelUniform, DEPTH_FORMAT};
pub use renderer::{FrameStatus, Renderer, RendererState};
