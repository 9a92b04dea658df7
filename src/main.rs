//! Bounce Box entry point
//!
//! Handles platform-specific initialization and runs the render loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_shell {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlButtonElement, HtmlCanvasElement, HtmlInputElement, MouseEvent};

    use bounce_box::MotionConfig;
    use bounce_box::renderer::SdfRenderState;
    use bounce_box::sim::{Color, Direction, Engine};

    /// Everything the frame loop touches.
    struct App {
        engine: Engine,
        render_state: Option<SdfRenderState>,
        last_time: f64,
    }

    impl App {
        fn new(config: MotionConfig) -> Self {
            Self {
                engine: Engine::new(config),
                render_state: None,
                last_time: 0.0,
            }
        }

        /// Feed the frame's elapsed wall-clock time into the engine.
        fn update(&mut self, time: f64) {
            let elapsed = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            self.last_time = time;
            self.engine.advance(elapsed);
        }

        /// Render the current frame
        fn render(&mut self) {
            let viewport = self.engine.config.viewport;
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.engine.disc, viewport) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bounce Box starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("viewport")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Optional startup tuning carried on the canvas element
        let config = match canvas.get_attribute("data-config") {
            Some(json) => MotionConfig::from_json_str(&json),
            None => MotionConfig::default(),
        };
        log::info!(
            "Engine config: step {} every {}s in {}x{}",
            config.step,
            config.tick_interval,
            config.viewport.width,
            config.viewport.height
        );

        // Physical canvas size from CSS size and device pixel ratio
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let app = Rc::new(RefCell::new(App::new(config)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = SdfRenderState::new(surface, &adapter, width, height).await;
        app.borrow_mut().render_state = Some(render_state);

        setup_controls(&document, app.clone());

        // Start frame loop
        request_animation_frame(app);

        log::info!("Bounce Box running!");
    }

    fn setup_controls(document: &Document, app: Rc<RefCell<App>>) {
        // Direction radios: horizontal travel starts rightward, vertical
        // travel starts upward
        wire_direction_radio(document, "dir-horizontal", Direction::Right, app.clone());
        wire_direction_radio(document, "dir-vertical", Direction::Up, app.clone());

        setup_start_stop(document, app.clone());

        // Reverse button (the engine ignores it until a direction exists)
        if let Some(btn) = document.get_element_by_id("reverse-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().engine.reverse();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("Missing #reverse-btn control");
        }

        // Color picker recolors live while dragging
        let picker = document
            .get_element_by_id("color-picker")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        if let Some(picker) = picker {
            let app = app.clone();
            let input = picker.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                match Color::from_hex(&input.value()) {
                    Some(color) => app.borrow_mut().engine.set_color(color),
                    None => log::warn!("Unparseable color value {:?}", input.value()),
                }
            });
            let _ =
                picker.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("Missing #color-picker control");
        }
    }

    fn wire_direction_radio(
        document: &Document,
        id: &str,
        direction: Direction,
        app: Rc<RefCell<App>>,
    ) {
        if let Some(radio) = document.get_element_by_id(id) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().engine.set_direction(direction);
            });
            let _ = radio.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("Missing #{id} control");
        }
    }

    fn setup_start_stop(document: &Document, app: Rc<RefCell<App>>) {
        let start: Option<HtmlButtonElement> = document
            .get_element_by_id("start-btn")
            .and_then(|el| el.dyn_into().ok());
        let stop: Option<HtmlButtonElement> = document
            .get_element_by_id("stop-btn")
            .and_then(|el| el.dyn_into().ok());
        let (Some(start), Some(stop)) = (start, stop) else {
            log::warn!("Missing #start-btn/#stop-btn controls");
            return;
        };

        // Start: refuse (with a blocking warning) until a direction exists,
        // then arm the engine and swap which button is clickable
        {
            let app = app.clone();
            let start_btn = start.clone();
            let stop_btn = stop.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let undirected = app.borrow().engine.current_direction().is_none();
                if undirected {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("Select a direction");
                    }
                    return;
                }
                app.borrow_mut().engine.play();
                start_btn.set_disabled(true);
                stop_btn.set_disabled(false);
            });
            let _ =
                start.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let start_btn = start.clone();
            let stop_btn = stop.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().engine.stop();
                start_btn.set_disabled(false);
                stop_btn.set_disabled(true);
            });
            let _ = stop.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.update(time);
            a.render();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_shell::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bounce Box (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    println!("\nRunning scripted motion demo...");
    run_motion_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn run_motion_demo() {
    use bounce_box::sim::{Direction, Engine};

    let mut engine = Engine::default();
    engine.set_direction(Direction::Right);
    engine.play();

    // One simulated second per step; the disc reaches the right wall and
    // bounces back with the one-step overshoot
    for second in 1..=8 {
        engine.advance(1.0);
        println!("t={second}s center={}", engine.disc.center);
    }
    assert_eq!(engine.disc.center.x, 500.0);
    assert_eq!(engine.current_direction(), Some(Direction::Left));

    engine.reverse();
    engine.advance(1.0);
    engine.stop();
    assert_eq!(engine.disc.center.x, 550.0);
    assert_eq!(engine.advance(1.0), 0);

    println!("✓ Motion demo passed!");
}
