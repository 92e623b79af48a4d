use yew::prelude::*;

use crate::components::section_title::SectionTitle;
use crate::i18n::Lang;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub lang: Lang,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let t = &props.lang.bundle().about;

    html! {
        <section id="about" class="about-section">
            <style>
                {r#"
                .about-section {
                    padding: 6rem 0;
                }
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                @media (max-width: 1024px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                }
                .about-text {
                    color: rgba(255, 255, 255, 0.7);
                    line-height: 1.7;
                    margin: 0 0 2rem;
                }
                .about-highlight {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.2rem;
                    border: 1px solid rgba(204, 255, 0, 0.2);
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.03);
                }
                .about-highlight-icon {
                    background: #CCFF00;
                    color: #000;
                    width: 2.6rem;
                    height: 2.6rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }
                .about-highlight span {
                    color: #CCFF00;
                    font-weight: 700;
                    text-transform: uppercase;
                    font-style: italic;
                    letter-spacing: 0.05em;
                    font-size: 0.85rem;
                }
                .about-photo {
                    border-radius: 32px;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .about-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    display: block;
                }
                "#}
            </style>
            <div class="container">
                <div class="about-grid">
                    <div>
                        <SectionTitle title={t.title} left={true} />
                        <p class="about-text">{t.text}</p>
                        <div class="about-highlight">
                            <div class="about-highlight-icon">{"⚡"}</div>
                            <span>{t.highlight}</span>
                        </div>
                    </div>
                    <div class="about-photo">
                        <img src="/assets/images/parmums.jpg" alt={t.title} loading="lazy" />
                    </div>
                </div>
            </div>
        </section>
    }
}
