use yew::prelude::*;

use crate::motion::stagger;

const SUBTITLE_TEXT: &str = "The video editor that makes you shine.";

/// Hero tagline revealed letter by letter. Each letter is its own span
/// with a delay that grows with its position, so the line sweeps in from
/// the left while every letter plays the same fade-and-rise.
#[function_component(Subtitle)]
pub fn subtitle() -> Html {
    let subtitle_css = format!(
        r#"
        .hero-subtitle {{
            position: absolute;
            left: 50%;
            transform: translateX(-50%);
            top: 60%;
            margin: 0;
            font-size: 1.875rem;
            color: #d1d5db;
            font-family: 'Inter', sans-serif;
            white-space: nowrap;
        }}
        .hero-subtitle span {{
            display: inline-block;
            opacity: 0;
            animation: subtitle-letter {duration}ms ease-out forwards;
        }}
        @keyframes subtitle-letter {{
            from {{
                opacity: 0;
                transform: translateY(10px);
            }}
            to {{
                opacity: 1;
                transform: translateY(0);
            }}
        }}
        @media (max-width: 768px) {{
            .hero-subtitle {{
                font-size: 1.25rem;
            }}
        }}
        @media (max-width: 480px) {{
            .hero-subtitle {{
                font-size: 1rem;
            }}
        }}
    "#,
        duration = stagger::LETTER_DURATION_MS
    );

    html! {
        <>
            <style>{subtitle_css}</style>
            <p class="hero-subtitle">
                {
                    stagger::letters(SUBTITLE_TEXT)
                        .into_iter()
                        .enumerate()
                        .map(|(index, letter)| {
                            let delay = format!("animation-delay: {}ms;", stagger::letter_delay_ms(index));
                            html! {
                                <span key={index} style={delay}>{letter.to_string()}</span>
                            }
                        })
                        .collect::<Html>()
                }
            </p>
        </>
    }
}
