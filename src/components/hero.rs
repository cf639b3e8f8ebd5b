use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, PointerEvent};
use yew::prelude::*;

use crate::components::subtitle::Subtitle;
use crate::config;
use crate::motion::parallax;
use crate::motion::tween::Tween;

/// Duration of one backdrop glide. Every pointer sample restarts it.
const BACKDROP_TWEEN_MS: f64 = 400.0;

/// Owns the backdrop's animation state between pointer events.
///
/// `animate_to` replaces the current tween with one that departs from the
/// last rendered position, and the frame loop runs only while a tween is
/// in flight.
struct BackdropAnimator {
    backdrop: NodeRef,
    position: Cell<(f64, f64)>,
    tween: RefCell<Option<Tween>>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl BackdropAnimator {
    fn new(backdrop: NodeRef) -> Self {
        Self {
            backdrop,
            position: Cell::new(parallax::REST_SHIFT),
            tween: RefCell::new(None),
            frame: RefCell::new(None),
        }
    }

    fn animate_to(self: &Rc<Self>, target: (f64, f64)) {
        if self.backdrop.cast::<HtmlElement>().is_none() {
            return;
        }
        let Some(now) = now_ms() else {
            return;
        };
        *self.tween.borrow_mut() =
            Some(Tween::new(now, self.position.get(), target, BACKDROP_TWEEN_MS));
        self.ensure_frame();
    }

    fn ensure_frame(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let animator = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            animator.on_frame(timestamp);
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        let Some(tween) = *self.tween.borrow() else {
            return;
        };
        let (x, y) = tween.sample(timestamp);
        self.position.set((x, y));
        if let Some(element) = self.backdrop.cast::<HtmlElement>() {
            let _ = element.style().set_property(
                "transform",
                &format!("translate3d({x:.2}px, {y:.2}px, 0) scale(1.25)"),
            );
        }
        if tween.finished(timestamp) {
            self.tween.borrow_mut().take();
        } else {
            self.ensure_frame();
        }
    }

    /// Cancels the pending frame and the in-flight tween. The frame's
    /// closure holds an `Rc` back to this animator; dropping the handle
    /// breaks that cycle.
    fn stop(&self) {
        self.frame.borrow_mut().take();
        self.tween.borrow_mut().take();
    }
}

fn now_ms() -> Option<f64> {
    Some(web_sys::window()?.performance()?.now())
}

/// Full-viewport hero with the pointer-driven parallax backdrop.
#[function_component(Hero)]
pub fn hero() -> Html {
    let section = use_node_ref();
    let backdrop = use_node_ref();

    // Pointer listeners for the backdrop parallax.
    {
        let section = section.clone();
        let backdrop = backdrop.clone();
        use_effect_with_deps(
            move |_| {
                let animator = Rc::new(BackdropAnimator::new(backdrop));
                let mut listeners = Vec::new();
                if let Some(window) = web_sys::window() {
                    let move_animator = Rc::clone(&animator);
                    listeners.push(EventListener::new(&window, "pointermove", move |event| {
                        let Some(event) = event.dyn_ref::<PointerEvent>() else {
                            return;
                        };
                        // No hero geometry yet, nothing to move.
                        if section.cast::<HtmlElement>().is_none() {
                            return;
                        }
                        let Some(win) = web_sys::window() else {
                            return;
                        };
                        let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                        let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                        let (x, y) = parallax::shift(
                            event.client_x() as f64,
                            event.client_y() as f64,
                            width,
                            height,
                        );
                        log::debug!(
                            "hero parallax pointer=({}, {}) shift=({x:.1}, {y:.1})",
                            event.client_x(),
                            event.client_y(),
                        );
                        move_animator.animate_to((x, y));
                    }));

                    let leave_animator = Rc::clone(&animator);
                    listeners.push(EventListener::new(&window, "pointerleave", move |_| {
                        leave_animator.animate_to(parallax::REST_SHIFT);
                    }));
                }
                move || {
                    drop(listeners);
                    animator.stop();
                }
            },
            (),
        );
    }

    let hero_css = r#"
        .hero-backdrop {
            pointer-events: none;
            position: fixed;
            inset: 0;
            z-index: -1;
            overflow: hidden;
        }
        .hero-backdrop img {
            width: 100%;
            height: 100%;
            object-fit: cover;
            opacity: 0.7;
            transform: scale(1.25);
            will-change: transform;
        }
        .hero {
            position: relative;
            display: flex;
            min-height: 100vh;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            overflow: hidden;
            padding: 8rem 1.5rem;
            text-align: center;
            color: #FFFEED;
        }
        .hero-inner {
            position: relative;
            z-index: 10;
            display: flex;
            max-width: 64rem;
            flex-direction: column;
            align-items: center;
            gap: 2rem;
        }
        .hero-title {
            margin: 0;
            font-family: 'Elianto', 'Montserrat', sans-serif;
            font-size: 6rem;
            letter-spacing: 0.7em;
            color: #fff;
            text-shadow: 0 4px 12px rgba(0, 0, 0, 0.5);
        }
        .hero-release {
            margin: 0;
            font-size: 0.875rem;
            text-transform: uppercase;
            letter-spacing: 0.3em;
            color: #a5b4fc;
        }
        .hero-headline {
            margin: 0;
            font-family: 'Elianto', 'Montserrat', sans-serif;
            font-size: 3.75rem;
            font-weight: bold;
            line-height: 1.2;
            color: #fff;
        }
        .hero-blurb {
            margin: 0;
            max-width: 42rem;
            font-size: 1.25rem;
            color: #e0e7ff;
        }
        .hero-actions {
            display: flex;
            flex-wrap: wrap;
            align-items: center;
            justify-content: center;
            gap: 1rem;
        }
        .hero-action {
            border-radius: 9999px;
            border: 1px solid rgba(199, 210, 254, 0.7);
            padding: 0.75rem 2rem;
            font-size: 1rem;
            font-weight: 600;
            color: #e0e7ff;
            text-decoration: none;
            transition: border-color 0.2s, color 0.2s, background 0.2s;
        }
        .hero-action:hover {
            border-color: #fff;
            color: #fff;
        }
        .hero-action.primary {
            background: #6366f1;
            border-color: #6366f1;
            color: #fff;
        }
        .hero-action.primary:hover {
            background: #818cf8;
            border-color: #818cf8;
        }
        .hero-platforms {
            margin: 0;
            font-size: 0.75rem;
            text-transform: uppercase;
            letter-spacing: 0.3em;
            color: #c7d2fe;
        }
        @media (max-width: 768px) {
            .hero-title {
                font-size: 4.5rem;
            }
            .hero-headline {
                font-size: 2.5rem;
            }
        }
        @media (max-width: 480px) {
            .hero-title {
                font-size: 3rem;
                letter-spacing: 0.4em;
            }
            .hero-headline {
                font-size: 1.875rem;
            }
        }
    "#;

    html! {
        <>
            <style>{hero_css}</style>
            <div aria-hidden="true" class="hero-backdrop">
                <img
                    ref={backdrop}
                    src={config::BACKDROP_IMAGE}
                    alt="Starry night sky background"
                    draggable="false"
                />
            </div>
            <section ref={section} class="hero">
                <div class="hero-inner">
                    <h1 class="hero-title">{"LUNARIS"}</h1>
                    <p class="hero-release">{"v0.1 pre-release"}</p>
                    <h2 class="hero-headline">{"Minimal core, infinite possibilities"}</h2>
                    <p class="hero-blurb">
                        {"Lunaris is a multimedia engine with a microkernel plugin \
                          architecture. Build a video editor, DAW, animation suite, or \
                          something entirely new by composing plugins."}
                    </p>
                    <div class="hero-actions">
                        <a href={config::RELEASES_URL} class="hero-action primary">{"Download v0.1"}</a>
                        <a href={config::ARCHITECTURE_URL} class="hero-action">{"Read Architecture"}</a>
                        <a href={config::PLUGINS_URL} class="hero-action">{"Write a Plugin"}</a>
                    </div>
                    <p class="hero-platforms">{"Free · Open Source · Built in Rust · Windows · macOS · Linux"}</p>
                </div>
                <Subtitle />
            </section>
        </>
    }
}
