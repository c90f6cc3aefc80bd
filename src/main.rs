#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::sync::Arc;

    use anyhow::Context;
    use clap::Parser;
    use wgpu_flycam::{
        populate_demo, Camera, DemoSettings, FrameStatus, InputManager, RenderError, Renderer,
        Shape, WinitInput,
    };
    use winit::application::ApplicationHandler;
    use winit::event::WindowEvent;
    use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
    use winit::keyboard::{KeyCode, PhysicalKey};
    use winit::window::{Window, WindowId};

    #[derive(Debug, Parser)]
    #[command(name = "flycam-demo", about = "Free-fly camera around a single mesh")]
    struct Args {
        /// Width and height of the square canvas in pixels
        #[arg(long, default_value_t = 800)]
        size: u32,
        #[arg(long, value_enum, default_value_t = Shape::Box)]
        shape: Shape,
        #[arg(long, default_value_t = 0.7)]
        scale: f32,
    }

    struct App {
        settings: DemoSettings,
        window: Option<Arc<Window>>,
        renderer: Option<Renderer>,
        camera: Camera,
        input: InputManager,
        translator: WinitInput,
    }

    impl App {
        fn new(settings: DemoSettings) -> Self {
            Self {
                settings,
                window: None,
                renderer: None,
                camera: Camera::default(),
                input: InputManager::default(),
                translator: WinitInput::new(),
            }
        }

        fn start(&mut self, window: Arc<Window>) -> anyhow::Result<()> {
            let mut renderer = Renderer::new(window.clone());
            pollster::block_on(renderer.init()).context("acquiring GPU device")?;

            let size = window.inner_size();
            renderer.resize_backings(size.width, size.height)?;
            populate_demo(&mut renderer, &self.settings)?;

            self.renderer = Some(renderer);
            self.window = Some(window);
            Ok(())
        }

        fn render(&mut self) -> Result<(), RenderError> {
            let Some(renderer) = self.renderer.as_mut() else {
                return Ok(());
            };
            if renderer.encode_commands(&self.camera)? == FrameStatus::Skipped {
                log::debug!("frame skipped");
            }
            Ok(())
        }
    }

    impl ApplicationHandler for App {
        fn resumed(&mut self, event_loop: &ActiveEventLoop) {
            if self.window.is_some() {
                return;
            }
            let size = self.settings.canvas_size;
            let window_attrs = Window::default_attributes()
                .with_title("wgpu flycam")
                .with_inner_size(winit::dpi::PhysicalSize::new(size, size));

            let result = event_loop
                .create_window(window_attrs)
                .context("creating window")
                .and_then(|window| self.start(Arc::new(window)));
            match result {
                Ok(()) => {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
                Err(e) => {
                    log::error!("{e:#}");
                    event_loop.exit();
                }
            }
        }

        fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
            if let Some(input) = self.translator.translate(&event) {
                self.input.handle(&input, &mut self.camera);
            }

            match event {
                WindowEvent::CloseRequested => event_loop.exit(),
                WindowEvent::KeyboardInput { event, .. }
                    if event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
                {
                    event_loop.exit();
                }
                WindowEvent::Resized(size) => {
                    if let Some(renderer) = &mut self.renderer {
                        if let Err(e) = renderer.resize_backings(size.width, size.height) {
                            log::error!("resize failed: {e}");
                        }
                    }
                    if size.height > 0 {
                        self.camera.set_aspect(size.width as f32 / size.height as f32);
                    }
                }
                WindowEvent::RedrawRequested => {
                    if let Err(e) = self.render() {
                        log::error!("render failed: {e}");
                        event_loop.exit();
                        return;
                    }
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
                _ => {}
            }
        }
    }

    pub fn run() -> anyhow::Result<()> {
        env_logger::init();
        let args = Args::parse();
        let settings = DemoSettings {
            canvas_size: args.size,
            shape: args.shape,
            scale: args.scale,
            ..DemoSettings::default()
        };

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(settings);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

// The web build starts from `wgpu_flycam::web::main` instead.
#[cfg(target_arch = "wasm32")]
fn main() {}
