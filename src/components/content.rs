use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContentProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Plain content block on the site background, used by secondary pages.
#[function_component(Content)]
pub fn content(props: &ContentProps) -> Html {
    let content_css = r#"
        .content-block {
            margin: 5rem;
            background: #0A0514;
            font-family: 'Inter', sans-serif;
        }
    "#;

    html! {
        <div class={classes!("content-block", props.class.clone())}>
            <style>{content_css}</style>
            { for props.children.iter() }
        </div>
    }
}
