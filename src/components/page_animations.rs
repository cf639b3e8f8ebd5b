use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};
use yew::prelude::*;

use crate::motion::reveal::{self, RevealSet};

/// How far a fade-in target starts below its resting place.
const RISE_PX: f64 = 60.0;
/// Fade-and-rise curve applied when a target is revealed.
const FADE_TRANSITION: &str = "opacity 0.8s ease-out, transform 0.8s ease-out";
/// Delay before the first visibility pass, giving layout a tick to settle.
const FIRST_SCAN_DELAY_MS: u32 = 100;

/// Drives the scroll-triggered fade-ins for every element carrying a
/// `data-fade` attribute.
///
/// On construction each target is hidden and pushed down; `scan` reveals
/// the ones whose top edge has crossed the reveal line. Each target plays
/// at most once, so scrolling back up never re-hides revealed content.
pub struct FadeController {
    elements: Vec<HtmlElement>,
    triggers: RevealSet,
}

impl FadeController {
    /// Collects all `[data-fade]` elements in the document and puts them
    /// into their pre-reveal state.
    pub fn collect(document: &Document) -> Self {
        let mut elements = Vec::new();
        if let Ok(list) = document.query_selector_all("[data-fade]") {
            for index in 0..list.length() {
                let Some(node) = list.item(index) else {
                    continue;
                };
                let Ok(element) = node.dyn_into::<HtmlElement>() else {
                    continue;
                };
                hide(&element);
                elements.push(element);
            }
        }
        let triggers = RevealSet::new(elements.len());
        Self { elements, triggers }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Reveals every armed target whose top edge has crossed the reveal
    /// line for the given viewport height.
    pub fn scan(&mut self, viewport_h: f64) {
        if !self.triggers.any_armed() {
            return;
        }
        for (index, element) in self.elements.iter().enumerate() {
            if !self.triggers.is_armed(index) {
                continue;
            }
            let top = element.get_bounding_client_rect().top();
            if reveal::crossed(top, viewport_h) && self.triggers.fire(index) {
                show(element);
            }
        }
    }
}

fn hide(element: &HtmlElement) {
    let style = element.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("visibility", "hidden");
    let _ = style.set_property("transform", &format!("translateY({RISE_PX}px)"));
}

fn show(element: &HtmlElement) {
    let style = element.style();
    let _ = style.set_property("transition", FADE_TRANSITION);
    let _ = style.set_property("opacity", "1");
    let _ = style.set_property("visibility", "inherit");
    let _ = style.set_property("transform", "translateY(0)");
}

fn scan_now(controller: &Rc<RefCell<FadeController>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    controller.borrow_mut().scan(viewport_h);
}

/// Headless component that owns the fade-in controller for the page it is
/// mounted on. Renders nothing.
#[function_component(PageAnimations)]
pub fn page_animations() -> Html {
    use_effect_with_deps(
        move |_| {
            let mut listeners = Vec::new();
            let mut first_scan = None;

            let controller = web_sys::window()
                .and_then(|window| window.document())
                .map(|document| Rc::new(RefCell::new(FadeController::collect(&document))))
                // A page with no fade targets needs no listeners.
                .filter(|controller| !controller.borrow().is_empty());

            if let (Some(controller), Some(window)) = (controller, web_sys::window()) {
                for event in ["scroll", "resize"] {
                    let controller = Rc::clone(&controller);
                    listeners.push(EventListener::new(&window, event, move |_| {
                        scan_now(&controller);
                    }));
                }
                // Reveal anything already on screen once layout settles.
                first_scan = Some(Timeout::new(FIRST_SCAN_DELAY_MS, move || {
                    scan_now(&controller);
                }));
            }

            move || {
                drop(first_scan);
                drop(listeners);
            }
        },
        (),
    );

    html! {}
}
