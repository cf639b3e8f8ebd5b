#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{window, Document, Event, HtmlElement};

use lunaris_site::components::page_animations::FadeController;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    window().expect("window").document().expect("document")
}

fn fade_target(document: &Document) -> HtmlElement {
    let element: HtmlElement = document
        .create_element("div")
        .expect("create div")
        .dyn_into()
        .expect("div is an html element");
    element
        .set_attribute("data-fade", "")
        .expect("set data-fade");
    document
        .body()
        .expect("body")
        .append_child(&element)
        .expect("append target");
    element
}

#[wasm_bindgen_test]
fn dropped_listener_stops_receiving_events() {
    let document = document();
    let target = document.create_element("div").expect("create div");
    let hits = Rc::new(Cell::new(0u32));

    let listener = {
        let hits = Rc::clone(&hits);
        EventListener::new(&target, "ping", move |_| hits.set(hits.get() + 1))
    };

    let event = Event::new("ping").expect("event");
    target.dispatch_event(&event).expect("dispatch");
    assert_eq!(hits.get(), 1);

    drop(listener);
    let event = Event::new("ping").expect("event");
    target.dispatch_event(&event).expect("dispatch");
    assert_eq!(hits.get(), 1, "listener fired after teardown");
}

#[wasm_bindgen_test]
fn fade_targets_start_hidden_and_reveal_once() {
    let document = document();
    let element = fade_target(&document);

    let mut controller = FadeController::collect(&document);
    assert!(controller.len() >= 1);
    assert_eq!(style_of(&element, "opacity"), "0");
    assert_eq!(style_of(&element, "visibility"), "hidden");

    // A viewport taller than the page puts every target past the line.
    controller.scan(10_000.0);
    assert_eq!(style_of(&element, "opacity"), "1");
    assert_eq!(style_of(&element, "visibility"), "inherit");

    // Played targets are never touched again.
    element
        .style()
        .set_property("opacity", "0.4")
        .expect("set opacity");
    controller.scan(10_000.0);
    assert_eq!(style_of(&element, "opacity"), "0.4");

    element.remove();
}

#[wasm_bindgen_test]
fn targets_below_the_reveal_line_stay_hidden() {
    let document = document();
    let element = fade_target(&document);
    element
        .style()
        .set_property("position", "absolute")
        .expect("position");
    element.style().set_property("top", "5000px").expect("top");

    let mut controller = FadeController::collect(&document);
    // The line for a 1000px viewport sits at 850px, far above the target.
    controller.scan(1_000.0);
    assert_eq!(style_of(&element, "opacity"), "0");

    controller.scan(6_000.0);
    assert_eq!(style_of(&element, "opacity"), "1");

    element.remove();
}

#[wasm_bindgen_test]
fn reveal_line_is_inclusive() {
    let document = document();
    let element = fade_target(&document);
    element
        .style()
        .set_property("position", "absolute")
        .expect("position");
    // The pre-reveal state drops targets 60px, so 790px measures as 850px.
    element.style().set_property("top", "790px").expect("top");

    let mut controller = FadeController::collect(&document);
    controller.scan(1_000.0);
    assert_eq!(style_of(&element, "opacity"), "1");

    element.remove();
}

#[wasm_bindgen_test]
fn pages_without_fade_targets_collect_nothing() {
    let controller = FadeController::collect(&document());
    assert!(controller.is_empty());
}

fn style_of(element: &HtmlElement, property: &str) -> String {
    element
        .style()
        .get_property_value(property)
        .unwrap_or_else(|_| panic!("read {property}"))
}
