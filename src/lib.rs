//! Marketing site for the Lunaris multimedia engine.
//!
//! A small Yew single-page app: the landing page with its scroll and
//! pointer driven effects, plus a catch-all route. The interaction math
//! lives in [`motion`] so it stays testable off the browser.

pub mod components;
pub mod config;
pub mod motion;
pub mod pages;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::Header;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
