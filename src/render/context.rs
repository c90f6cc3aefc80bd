use std::sync::Arc;

use winit::window::Window;

use super::error::InitError;

/// Color format used when rendering without a window surface.
pub const OFFSCREEN_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Device, queue and (optionally) the window surface they present to.
pub struct GpuContext {
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: Option<wgpu::Surface<'static>>,
    pub color_format: wgpu::TextureFormat,
    alpha_mode: wgpu::CompositeAlphaMode,
}

impl GpuContext {
    /// Entry point, then adapter, then device and queue. Pass `None` for a
    /// headless context that renders into offscreen textures.
    pub async fn new(window: Option<Arc<Window>>) -> Result<Self, InitError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = match window {
            Some(window) => Some(instance.create_surface(window)?),
            None => None,
        };

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: surface.as_ref(),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(InitError::NoAdapter)?;

        let info = adapter.get_info();
        log::info!("using adapter {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await?;

        let (color_format, alpha_mode) = match &surface {
            Some(surface) => {
                let caps = surface.get_capabilities(&adapter);
                let format = caps.formats.first().copied().unwrap_or(OFFSCREEN_FORMAT);
                let alpha = caps
                    .alpha_modes
                    .first()
                    .copied()
                    .unwrap_or(wgpu::CompositeAlphaMode::Auto);
                (format, alpha)
            }
            None => (OFFSCREEN_FORMAT, wgpu::CompositeAlphaMode::Auto),
        };
        log::info!("device ready, color format {color_format:?}");

        Ok(Self {
            adapter,
            device,
            queue,
            surface,
            color_format,
            alpha_mode,
        })
    }

    pub fn surface_config(&self, width: u32, height: u32) -> wgpu::SurfaceConfiguration {
        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: self.color_format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: self.alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }
}
