use gloo_events::EventListener;
use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::motion::scroll::HeaderVisibility;
use crate::Route;

/// Fixed top bar that slides in while scrolling up and hides otherwise.
#[function_component(Header)]
pub fn header() -> Html {
    let visible = use_state_eq(|| false);

    // Track scroll direction for the slide in/out.
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let mut tracker = HeaderVisibility::new();
                let listener = web_sys::window().map(|window| {
                    EventListener::new(&window, "scroll", move |_| {
                        let Some(win) = web_sys::window() else {
                            return;
                        };
                        if let Ok(y) = win.scroll_y() {
                            visible.set(tracker.observe(y));
                        }
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    let header_css = r#"
        .site-header {
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            z-index: 50;
            display: flex;
            align-items: center;
            justify-content: center;
            height: 5rem;
            padding: 0 1.5rem;
            background: #0A0514;
            color: #FFFEED;
            box-shadow: 0 2px 8px rgba(0, 0, 0, 0.5);
            transform: translateY(-5rem);
            opacity: 0;
            transition: transform 0.3s ease-in-out, opacity 0.3s ease-in-out;
        }
        .site-header.visible {
            transform: translateY(0);
            opacity: 1;
        }
        .site-header .header-logo {
            flex-grow: 1;
            font-family: 'Elianto', 'Montserrat', sans-serif;
            font-size: 2.25rem;
            letter-spacing: 0.2em;
            color: #FFFEED;
            text-decoration: none;
        }
        .site-header .header-repo {
            flex-grow: 1;
            text-align: right;
            font-family: 'Montserrat', sans-serif;
            font-size: 1.875rem;
            color: #FFFEED;
            text-decoration: none;
        }
        .site-header .header-repo:hover {
            color: #a5b4fc;
        }
    "#;

    let header_class = if *visible {
        "site-header visible"
    } else {
        "site-header"
    };

    html! {
        <header class={header_class}>
            <style>{header_css}</style>
            <Link<Route> to={Route::Home} classes="header-logo">
                {"LUNARIS"}
            </Link<Route>>
            <a href={config::GITHUB_URL} class="header-repo">{"GitHub"}</a>
        </header>
    }
}
