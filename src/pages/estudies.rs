use yew::prelude::*;

use crate::i18n::Lang;

#[derive(Properties, PartialEq)]
pub struct EstudiesProps {
    pub lang: Lang,
    pub on_open_booking: Callback<()>,
}

#[function_component(Estudies)]
pub fn estudies(props: &EstudiesProps) -> Html {
    let t = &props.lang.bundle().estudies;
    let open_booking = {
        let on_open_booking = props.on_open_booking.clone();
        Callback::from(move |_: MouseEvent| on_open_booking.emit(()))
    };

    html! {
        <section id="estudies" class="estudies-section">
            <style>
                {r#"
                .estudies-section {
                    padding: 6rem 0;
                }
                .estudies-panel {
                    position: relative;
                    padding: 4rem 3rem;
                    border-radius: 48px;
                    border: 1px solid rgba(204, 255, 0, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                    overflow: hidden;
                }
                @media (max-width: 768px) {
                    .estudies-panel {
                        padding: 2rem 1.5rem;
                        border-radius: 24px;
                    }
                }
                .estudies-badge {
                    position: absolute;
                    top: 2rem;
                    right: 2rem;
                    background: #CCFF00;
                    color: #000;
                    padding: 0.5rem 1.5rem;
                    border-radius: 999px;
                    font-size: 0.7rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    box-shadow: 0 0 20px rgba(204, 255, 0, 0.4);
                }
                @media (max-width: 768px) {
                    .estudies-badge { display: none; }
                }
                .estudies-panel h2 {
                    font-size: clamp(1.6rem, 5vw, 3.5rem);
                    font-weight: 900;
                    text-transform: uppercase;
                    font-style: italic;
                    margin: 0 0 1.2rem;
                }
                .estudies-intro {
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 1.15rem;
                    line-height: 1.6;
                    max-width: 44rem;
                    margin: 0 0 2.5rem;
                }
                .estudies-points {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.4rem;
                    margin-bottom: 2.8rem;
                    max-width: 44rem;
                }
                @media (max-width: 640px) {
                    .estudies-points { grid-template-columns: 1fr; }
                }
                .estudies-point {
                    display: flex;
                    gap: 0.8rem;
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.9rem;
                    line-height: 1.5;
                }
                .estudies-point span {
                    color: #CCFF00;
                    flex-shrink: 0;
                }
                "#}
            </style>
            <div class="container">
                <div class="estudies-panel">
                    <div class="estudies-badge">{t.badge}</div>
                    <h2>{t.title}</h2>
                    <p class="estudies-intro">{t.intro}</p>
                    <div class="estudies-points">
                        {
                            for t.points.iter().map(|point| html! {
                                <div class="estudies-point" key={*point}>
                                    <span>{"✓"}</span>
                                    <p>{*point}</p>
                                </div>
                            })
                        }
                    </div>
                    <button class="btn btn-primary" onclick={open_booking}>
                        {t.cta}{" →"}
                    </button>
                </div>
            </div>
        </section>
    }
}
