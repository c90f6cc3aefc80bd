//! # wgpu-flycam
//!
//! A minimal real-time 3D rendering frontend on top of wgpu.
//!
//! ## Features
//! - Device, surface and backing-texture lifecycle behind one [`Renderer`]
//! - Free-fly [`Camera`] with bounded relative movement
//! - Per-mesh GPU buffers and pipelines built from plain [`MeshData`]
//! - Cross-platform: Native + WASM support, plus a headless target
//!
//! ## Example
//! ```rust,ignore
//! use wgpu_flycam::{geometry, Camera, Renderer};
//!
//! let mut renderer = Renderer::headless();
//! pollster::block_on(renderer.init())?;
//! renderer.resize_backings(800, 800)?;
//! renderer.add_mesh(&geometry::make_box(0.7))?;
//!
//! let camera = Camera::default();
//! renderer.encode_commands(&camera)?;
//! ```

pub mod config;
pub mod geometry;
pub mod input;
pub mod math;
pub mod render;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{CameraSettings, DemoSettings, InputSettings, Shape};
pub use geometry::MeshData;
pub use input::{InputEvent, InputManager, Key, WinitInput};
pub use math::Transform;
pub use render::{Camera, FrameStatus, InitError, Mesh, RenderError, Renderer, RendererState};

/// Builds the demo geometry for `shape`.
pub fn demo_mesh(shape: Shape, scale: f32) -> MeshData {
    match shape {
        Shape::Triangle => geometry::make_triangle(scale),
        Shape::Square => geometry::make_square(scale),
        Shape::Box => geometry::make_box(scale),
    }
}

/// Adds the demo mesh, tilted by the configured rotation, to `renderer`.
pub fn populate_demo(renderer: &mut Renderer, settings: &DemoSettings) -> Result<(), RenderError> {
    let data = demo_mesh(settings.shape, settings.scale);
    let mesh = renderer.add_mesh(&data)?;
    mesh.set_transform(Transform::from_euler(settings.model_rotation));
    Ok(())
}
