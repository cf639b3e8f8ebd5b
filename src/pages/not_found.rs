use yew::prelude::*;
use yew_router::components::Link;

use crate::components::content::Content;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let not_found_css = r#"
        .not-found {
            min-height: 60vh;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            gap: 1rem;
            text-align: center;
            color: #FFFEED;
        }
        .not-found h1 {
            margin: 0;
            font-family: 'Elianto', 'Montserrat', sans-serif;
            font-size: 3rem;
            letter-spacing: 0.3em;
        }
        .not-found p {
            margin: 0;
            color: #e0e7ff;
        }
        .not-found a {
            color: #a5b4fc;
        }
    "#;

    html! {
        <Content class="not-found">
            <style>{not_found_css}</style>
            <h1>{"404"}</h1>
            <p>{"This page drifted out of orbit."}</p>
            <Link<Route> to={Route::Home}>{"Back to Lunaris"}</Link<Route>>
        </Content>
    }
}
