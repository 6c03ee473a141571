//! Webcat entry point
//!
//! Wires the session controller to the DOM in the browser, or runs a headless
//! autoplay session natively.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, PointerEvent};

    use webcat::Settings;
    use webcat::audio::AudioManager;
    use webcat::platform::{IntervalScheduler, Task};
    use webcat::renderer::CanvasSurface;
    use webcat::sim::{CanvasRect, PointerOutcome, SessionController, ToyKind};
    use webcat::ui::{self, screen_visibility};

    /// Game instance holding all state
    struct Game {
        controller: SessionController,
        scheduler: IntervalScheduler,
        surface: CanvasSurface,
        audio: AudioManager,
        window: web_sys::Window,
        document: Document,
    }

    impl Game {
        fn on_task(&mut self, task: Task) {
            let Game {
                controller,
                scheduler,
                surface,
                audio,
                ..
            } = self;
            controller.dispatch(task, scheduler, surface, audio);
            if task == Task::Countdown {
                self.update_hud();
            }
        }

        fn start(&mut self) {
            self.controller.start();
            self.update_hud();
        }

        fn pick(&mut self, kind: ToyKind) {
            let Game {
                controller,
                scheduler,
                ..
            } = self;
            controller.pick(kind, scheduler);
            self.update_hud();
        }

        fn restart(&mut self) {
            let Game {
                controller,
                scheduler,
                ..
            } = self;
            controller.restart(scheduler);
            self.update_hud();
        }

        fn pointer_down(&mut self, event: &PointerEvent) {
            let rect = self.surface.canvas().get_bounding_client_rect();
            let mapping = CanvasRect::new(
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.width() as f32, rect.height() as f32),
                self.surface.size(),
            );
            let client = Vec2::new(event.client_x() as f32, event.client_y() as f32);
            let outcome = self
                .controller
                .pointer_down(client, &mapping, &mut self.audio);
            if outcome == PointerOutcome::Hit {
                self.update_hud();
            }
        }

        /// Fit the canvas to the viewport
        fn resize(&mut self) {
            let viewport = self
                .window
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(0.0) as f32;
            let side = self.controller.settings().canvas_side(viewport);
            self.surface.set_side(side);
            self.controller.resize(self.surface.size().x);
        }

        /// Sync screens, restart control and HUD text with the controller
        fn update_hud(&self) {
            for (screen, visible) in screen_visibility(self.controller.screen()) {
                set_display(&self.document, screen.element_id(), if visible { "flex" } else { "none" });
            }

            let hud = self.controller.hud();
            set_display(
                &self.document,
                ui::RESTART_BUTTON_ID,
                if hud.restart_visible { "block" } else { "none" },
            );
            if let Some(el) = self.document.get_element_by_id(ui::SCORE_ID) {
                el.set_text_content(Some(&hud.score_text()));
            }
            if let Some(el) = self.document.get_element_by_id(ui::TIMER_ID) {
                el.set_text_content(Some(&hud.time_text()));
            }
        }
    }

    fn set_display(document: &Document, id: &str, display: &str) {
        let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            log::warn!("Missing element #{}", id);
            return;
        };
        let _ = el.style().set_property("display", display);
    }

    /// Attach a listener for the lifetime of the page
    fn listen<E>(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
    where
        E: wasm_bindgen::convert::FromWasmAbi + 'static,
    {
        let closure = Closure::<dyn FnMut(E)>::new(handler);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Webcat starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(ui::CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("not a canvas"))?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("not a 2d context"))?;

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let audio = AudioManager::new(&settings);
        let surface = CanvasSurface::new(canvas.clone(), ctx);

        let game = Rc::new_cyclic(|weak: &Weak<RefCell<Game>>| {
            let weak = weak.clone();
            let dispatch: Rc<dyn Fn(Task)> = Rc::new(move |task| {
                if let Some(game) = weak.upgrade() {
                    game.borrow_mut().on_task(task);
                }
            });
            RefCell::new(Game {
                controller: SessionController::new(settings, seed, 0.0),
                scheduler: IntervalScheduler::new(window.clone(), dispatch),
                surface,
                audio,
                window: window.clone(),
                document: document.clone(),
            })
        });

        {
            let mut g = game.borrow_mut();
            g.resize();
            g.update_hud();
        }
        log::info!("Game initialized with seed: {}", seed);

        setup_buttons(&document, &game)?;
        setup_canvas(&canvas, &game);
        setup_resize(&window, &game);

        log::info!("Webcat running!");
        Ok(())
    }

    fn setup_buttons(document: &Document, game: &Rc<RefCell<Game>>) -> Result<(), JsValue> {
        if let Some(btn) = document.get_element_by_id(ui::START_BUTTON_ID) {
            let game = game.clone();
            listen(&btn, "click", move |_: web_sys::MouseEvent| {
                game.borrow_mut().start();
            });
        }

        let toy_buttons = document.query_selector_all(ui::TOY_BUTTON_SELECTOR)?;
        for i in 0..toy_buttons.length() {
            let Some(btn) = toy_buttons
                .item(i)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            let Some(kind) = btn.dataset().get("toy").as_deref().and_then(ToyKind::from_str)
            else {
                log::warn!("Toy button {} has no usable data-toy", i);
                continue;
            };
            let game = game.clone();
            listen(&btn, "click", move |_: web_sys::MouseEvent| {
                game.borrow_mut().pick(kind);
            });
        }

        if let Some(btn) = document.get_element_by_id(ui::RESTART_BUTTON_ID) {
            let game = game.clone();
            listen(&btn, "click", move |_: web_sys::MouseEvent| {
                game.borrow_mut().restart();
            });
        }
        Ok(())
    }

    fn setup_canvas(canvas: &HtmlCanvasElement, game: &Rc<RefCell<Game>>) {
        let game = game.clone();
        listen(canvas, "pointerdown", move |event: PointerEvent| {
            game.borrow_mut().pointer_down(&event);
        });
    }

    fn setup_resize(window: &web_sys::Window, game: &Rc<RefCell<Game>>) {
        let game = game.clone();
        listen(window, "resize", move |_: web_sys::Event| {
            game.borrow_mut().resize();
        });
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Webcat (native) starting...");
    log::info!("Native mode plays one headless session - run with `trunk serve` for the web version");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let report = autoplay::run(webcat::Settings::load(), seed);
    println!(
        "\nAutoplay: {} taps, {} hits, {} frames drawn",
        report.taps, report.hits, report.frames
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless session with a simulated player
#[cfg(not(target_arch = "wasm32"))]
mod autoplay {
    use glam::Vec2;

    use webcat::Settings;
    use webcat::audio::CueLog;
    use webcat::platform::VirtualClock;
    use webcat::renderer::HeadlessSurface;
    use webcat::sim::{CanvasRect, Phase, PointerOutcome, SessionController, ToyKind};

    /// Simulated reaction time between taps
    const TAP_INTERVAL_MS: u64 = 450;

    pub struct Report {
        pub taps: u32,
        pub hits: u32,
        pub frames: u64,
    }

    pub fn run(settings: Settings, seed: u64) -> Report {
        let side = settings.canvas_max_side;
        let mut game = SessionController::new(settings, seed, side);
        let mut clock = VirtualClock::new();
        let mut surface = HeadlessSurface::new();
        let mut cues = CueLog::new();
        let rect = CanvasRect::identity(Vec2::splat(side));

        game.start();
        game.pick(ToyKind::Fish, &mut clock);

        let mut taps = 0;
        let mut hits = 0;
        while game.phase() == Phase::Playing {
            clock.advance(TAP_INTERVAL_MS, |task, clock| {
                game.dispatch(task, clock, &mut surface, &mut cues)
            });

            // Tap the centre of the toy as last drawn
            let Some(target) = surface.last_glyph_pos() else {
                continue;
            };
            let size = game.session().map(|s| s.toy.size).unwrap_or(0.0);
            taps += 1;
            if game.pointer_down(target + Vec2::splat(size / 2.0), &rect, &mut cues)
                == PointerOutcome::Hit
            {
                hits += 1;
            }
        }

        log::info!(
            "Autoplay finished after {}ms, {} end cue(s)",
            clock.now_ms(),
            cues.count(webcat::audio::Cue::SessionEnd)
        );
        Report {
            taps,
            hits,
            frames: surface.frames,
        }
    }
}
