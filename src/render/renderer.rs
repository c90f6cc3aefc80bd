use std::sync::Arc;

use winit::window::Window;

use super::camera::Camera;
use super::context::GpuContext;
use super::error::{InitError, RenderError};
use super::mesh::Mesh;
use super::pipeline::DEPTH_FORMAT;
use crate::geometry::MeshData;

/// Lifecycle of a [`Renderer`]. `FrameEncoded` repeats once per submitted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererState {
    Uninitialized,
    DeviceReady,
    BackingsSized,
    FrameEncoded,
}

/// Outcome of one [`Renderer::encode_commands`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Submitted,
    /// The swapchain image was unavailable; the surface was reconfigured if needed.
    Skipped,
}

/// Attachments sized to the canvas. Replaced wholesale on every resize.
struct Backings {
    width: u32,
    height: u32,
    surface_config: Option<wgpu::SurfaceConfiguration>,
    offscreen_color: Option<(wgpu::Texture, wgpu::TextureView)>,
    depth_texture: wgpu::Texture,
    depth_view: wgpu::TextureView,
}

impl Backings {
    fn release(self) {
        if let Some((texture, _)) = &self.offscreen_color {
            texture.destroy();
        }
        self.depth_texture.destroy();
    }
}

fn create_attachment(
    device: &wgpu::Device,
    label: &str,
    format: wgpu::TextureFormat,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

/// Owns the device, the drawing target and its backings, and every mesh it draws.
pub struct Renderer {
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    backings: Option<Backings>,
    meshes: Vec<Mesh>,
    state: RendererState,
}

impl Renderer {
    /// Renderer presenting to `window`'s surface.
    pub fn new(window: Arc<Window>) -> Self {
        Self::with_target(Some(window))
    }

    /// Renderer drawing into an offscreen color texture.
    pub fn headless() -> Self {
        Self::with_target(None)
    }

    fn with_target(window: Option<Arc<Window>>) -> Self {
        Self {
            window,
            gpu: None,
            backings: None,
            meshes: Vec::new(),
            state: RendererState::Uninitialized,
        }
    }

    /// Acquires the device and queue. On error the renderer stays
    /// `Uninitialized` and every other operation reports `NotInitialized`.
    pub async fn init(&mut self) -> Result<(), InitError> {
        if self.gpu.is_some() {
            return Ok(());
        }
        match GpuContext::new(self.window.clone()).await {
            Ok(gpu) => {
                self.gpu = Some(gpu);
                self.state = RendererState::DeviceReady;
                Ok(())
            }
            Err(err) => {
                log::error!("renderer init failed: {err}");
                Err(err)
            }
        }
    }

    /// Reconfigures the surface and recreates the attachments for a
    /// `width` x `height` canvas. The previous textures are destroyed first.
    pub fn resize_backings(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        let gpu = self.gpu.as_ref().ok_or(RenderError::NotInitialized)?;
        if width == 0 || height == 0 {
            log::debug!("ignoring resize to {width}x{height}");
            return Ok(());
        }

        if let Some(old) = self.backings.take() {
            old.release();
        }

        let surface_config = gpu.surface.as_ref().map(|surface| {
            let config = gpu.surface_config(width, height);
            surface.configure(&gpu.device, &config);
            config
        });
        let offscreen_color = match surface_config {
            Some(_) => None,
            None => Some(create_attachment(
                &gpu.device,
                "Color Texture",
                gpu.color_format,
                width,
                height,
            )),
        };
        let (depth_texture, depth_view) =
            create_attachment(&gpu.device, "Depth Texture", DEPTH_FORMAT, width, height);

        log::debug!("backings resized to {width}x{height}");
        self.backings = Some(Backings {
            width,
            height,
            surface_config,
            offscreen_color,
            depth_texture,
            depth_view,
        });
        self.state = RendererState::BackingsSized;
        Ok(())
    }

    /// Uploads `data` into a new [`Mesh`] and appends it to the draw list.
    pub fn add_mesh(&mut self, data: &MeshData) -> Result<&mut Mesh, RenderError> {
        let gpu = self.gpu.as_ref().ok_or(RenderError::NotInitialized)?;
        self.meshes
            .push(Mesh::new(&gpu.device, gpu.color_format, data));
        let index = self.meshes.len() - 1;
        Ok(&mut self.meshes[index])
    }

    /// Encodes and submits one frame: clear, viewport, scissor, then every mesh.
    pub fn encode_commands(&mut self, camera: &Camera) -> Result<FrameStatus, RenderError> {
        let gpu = self.gpu.as_ref().ok_or(RenderError::NotInitialized)?;
        let backings = self.backings.as_ref().ok_or(RenderError::BackingsNotSized)?;

        let surface_frame = match (&gpu.surface, &backings.surface_config) {
            (Some(surface), Some(config)) => match surface.get_current_texture() {
                Ok(frame) => Some(frame),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("surface lost or outdated, reconfiguring");
                    surface.configure(&gpu.device, config);
                    return Ok(FrameStatus::Skipped);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    return Err(RenderError::Surface(wgpu::SurfaceError::OutOfMemory));
                }
                Err(e) => {
                    log::warn!("skipping frame: {e}");
                    return Ok(FrameStatus::Skipped);
                }
            },
            _ => None,
        };
        let surface_view = surface_frame.as_ref().map(|frame| {
            frame
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default())
        });
        let color_view = match (&surface_view, &backings.offscreen_color) {
            (Some(view), _) => view,
            (None, Some((_, view))) => view,
            (None, None) => return Err(RenderError::BackingsNotSized),
        };

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Frame Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &backings.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(0),
                        store: wgpu::StoreOp::Store,
                    }),
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_viewport(
                0.0,
                0.0,
                backings.width as f32,
                backings.height as f32,
                0.0,
                1.0,
            );
            pass.set_scissor_rect(0, 0, backings.width, backings.height);

            for mesh in &self.meshes {
                mesh.render(&mut pass, &gpu.queue, camera);
            }
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        if let Some(frame) = surface_frame {
            frame.present();
        }

        self.state = RendererState::FrameEncoded;
        Ok(FrameStatus::Submitted)
    }

    pub fn state(&self) -> RendererState {
        self.state
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn gpu(&self) -> Option<&GpuContext> {
        self.gpu.as_ref()
    }

    pub fn backing_size(&self) -> Option<(u32, u32)> {
        self.backings.as_ref().map(|b| (b.width, b.height))
    }

    pub fn depth_texture(&self) -> Option<&wgpu::Texture> {
        self.backings.as_ref().map(|b| &b.depth_texture)
    }

    /// Offscreen color attachment; `None` when presenting to a window surface.
    pub fn color_texture(&self) -> Option<&wgpu::Texture> {
        self.backings
            .as_ref()
            .and_then(|b| b.offscreen_color.as_ref())
            .map(|(texture, _)| texture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::make_box;

    #[test]
    fn operations_before_init_are_rejected() {
        let mut renderer = Renderer::headless();
        assert_eq!(renderer.state(), RendererState::Uninitialized);

        assert!(matches!(
            renderer.resize_backings(800, 800),
            Err(RenderError::NotInitialized)
        ));
        assert!(matches!(
            renderer.add_mesh(&make_box(0.7)),
            Err(RenderError::NotInitialized)
        ));
        assert!(matches!(
            renderer.encode_commands(&Camera::default()),
            Err(RenderError::NotInitialized)
        ));

        assert_eq!(renderer.state(), RendererState::Uninitialized);
        assert!(renderer.meshes().is_empty());
        assert!(renderer.backing_size().is_none());
    }
}
