use yew::prelude::*;

use crate::i18n::Lang;
use crate::scroll_to_section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub lang: Lang,
    pub on_open_booking: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let t = &props.lang.bundle().hero;

    let open_booking = {
        let on_open_booking = props.on_open_booking.clone();
        Callback::from(move |_: MouseEvent| on_open_booking.emit(()))
    };
    let to_about = Callback::from(|_: MouseEvent| scroll_to_section("about"));

    html! {
        <section class="hero">
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    padding-top: 6rem;
                    overflow: hidden;
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.4rem 1rem;
                    border-radius: 999px;
                    border: 1px solid rgba(204, 255, 0, 0.3);
                    background: rgba(204, 255, 0, 0.05);
                    color: #CCFF00;
                    font-size: 0.7rem;
                    font-weight: 800;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    margin-bottom: 2rem;
                    animation: rise 0.6s ease-out;
                }
                .hero h1 {
                    font-size: clamp(2rem, 7vw, 5.5rem);
                    font-weight: 900;
                    line-height: 1.1;
                    text-transform: uppercase;
                    font-style: italic;
                    letter-spacing: -0.03em;
                    margin: 0 0 2rem;
                    max-width: 16ch;
                    animation: rise 0.6s ease-out 0.1s backwards;
                }
                .hero-subtitle {
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 1.1rem;
                    max-width: 36rem;
                    line-height: 1.6;
                    margin: 0 0 3rem;
                    animation: rise 0.6s ease-out 0.2s backwards;
                }
                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                @keyframes rise {
                    from { opacity: 0; transform: translateY(24px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
            <div class="container">
                <div class="hero-badge">{"⚡ "}{t.badge}</div>
                <h1>{t.title}</h1>
                <p class="hero-subtitle">{t.subtitle}</p>
                <div class="hero-cta-group">
                    <button class="btn btn-primary" onclick={open_booking}>
                        {t.cta_primary}{" →"}
                    </button>
                    <button class="btn btn-secondary" onclick={to_about}>
                        {t.cta_secondary}
                    </button>
                </div>
            </div>
        </section>
    }
}
