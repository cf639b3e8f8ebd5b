use yew::prelude::*;

/// Resets the window scroll position once when the page mounts, so a
/// reload halfway down the page still opens on the hero.
#[function_component(ScrollTop)]
pub fn scroll_top() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {}
}
