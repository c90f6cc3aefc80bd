//! WASM entry point: free-fly camera on the `mainCanvas` element

use crate::{populate_demo, Camera, DemoSettings, InputManager, Renderer, WinitInput};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::web::EventLoopExtWebSys;
use winit::platform::web::WindowAttributesExtWebSys;
use winit::window::{Window, WindowId};

const CANVAS_ID: &str = "mainCanvas";

struct App {
    window: Option<Arc<Window>>,
    // Filled in by the async init task once a device is available.
    renderer: Rc<RefCell<Option<Renderer>>>,
    settings: DemoSettings,
    camera: Camera,
    input: InputManager,
    translator: WinitInput,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            renderer: Rc::new(RefCell::new(None)),
            settings: DemoSettings::default(),
            camera: Camera::default(),
            input: InputManager::default(),
            translator: WinitInput::new(),
        }
    }

    fn find_canvas() -> Option<HtmlCanvasElement> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CANVAS_ID))
            .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let Some(canvas) = Self::find_canvas() else {
            log::error!("no canvas element with id '{CANVAS_ID}'");
            return;
        };
        let size = self.settings.canvas_size;
        canvas.set_width(size);
        canvas.set_height(size);

        let window_attrs = Window::default_attributes()
            .with_canvas(Some(canvas))
            .with_inner_size(PhysicalSize::new(size, size));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                return;
            }
        };
        self.window = Some(window.clone());

        let slot = self.renderer.clone();
        let settings = self.settings;
        wasm_bindgen_futures::spawn_local(async move {
            let mut renderer = Renderer::new(window.clone());
            if renderer.init().await.is_err() {
                return;
            }
            let setup = renderer
                .resize_backings(size, size)
                .and_then(|()| populate_demo(&mut renderer, &settings));
            if let Err(e) = setup {
                log::error!("renderer setup failed: {e}");
                return;
            }

            *slot.borrow_mut() = Some(renderer);
            window.request_redraw();
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(input) = self.translator.translate(&event) {
            self.input.handle(&input, &mut self.camera);
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.borrow_mut().as_mut() {
                    if let Err(e) = renderer.resize_backings(size.width, size.height) {
                        log::error!("resize failed: {e}");
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(renderer) = self.renderer.borrow_mut().as_mut() {
                    if let Err(e) = renderer.encode_commands(&self.camera) {
                        log::error!("render failed: {e}");
                        return;
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("failed to create event loop: {e}");
            return;
        }
    };
    event_loop.spawn_app(App::new());
}
