use yew::prelude::*;

use crate::components::section_title::SectionTitle;
use crate::i18n::Lang;

const PORTRAITS: [&str; 4] = [
    "/assets/images/janka.jpg",
    "/assets/images/seeja.jpg",
    "/assets/images/miks.jpg",
    "/assets/images/jaunais.jpg",
];

#[derive(Properties, PartialEq)]
struct CardProps {
    name: AttrValue,
    role: AttrValue,
    portrait: &'static str,
}

#[function_component(InstructorCard)]
fn instructor_card(props: &CardProps) -> Html {
    // Swap a missing portrait for the first one instead of a broken image.
    let failed = use_state(|| false);
    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };
    let src = if *failed { PORTRAITS[0] } else { props.portrait };

    html! {
        <div class="instructor-card">
            <img src={src} alt={props.name.clone()} loading="lazy" {onerror} />
            <div class="instructor-overlay"></div>
            <div class="instructor-info">
                <span class="instructor-cert">{"✓ Sertificēts"}</span>
                <h4>{props.name.clone()}</h4>
                <p>{props.role.clone()}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InstructorsProps {
    pub lang: Lang,
}

#[function_component(Instructors)]
pub fn instructors(props: &InstructorsProps) -> Html {
    let t = &props.lang.bundle().instructors;
    if t.list.is_empty() {
        return html! {};
    }

    html! {
        <section id="instructors" class="instructors-section">
            <style>
                {r#"
                .instructors-section {
                    padding: 6rem 0;
                }
                .instructors-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }
                @media (max-width: 1024px) {
                    .instructors-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                .instructor-card {
                    position: relative;
                    aspect-ratio: 4 / 5;
                    border-radius: 28px;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    transition: border-color 0.5s;
                }
                .instructor-card:hover {
                    border-color: rgba(204, 255, 0, 0.5);
                }
                .instructor-card img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: grayscale(1);
                    opacity: 0.6;
                    transition: all 0.7s;
                }
                .instructor-card:hover img {
                    filter: grayscale(0);
                    opacity: 1;
                    transform: scale(1.05);
                }
                .instructor-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #000, rgba(0, 0, 0, 0.2), transparent);
                }
                .instructor-info {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    width: 100%;
                    padding: 1.5rem;
                    box-sizing: border-box;
                }
                .instructor-cert {
                    display: block;
                    color: #CCFF00;
                    font-size: 0.6rem;
                    font-weight: 800;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    opacity: 0;
                    transition: opacity 0.5s;
                    margin-bottom: 0.4rem;
                }
                .instructor-card:hover .instructor-cert {
                    opacity: 1;
                }
                .instructor-info h4 {
                    margin: 0 0 0.2rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    font-size: 1.1rem;
                }
                .instructor-info p {
                    margin: 0;
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 0.65rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                "#}
            </style>
            <div class="container">
                <SectionTitle title={t.title} subtitle={t.subtitle} />
                <div class="instructors-grid">
                    {
                        for t.list.iter().enumerate().map(|(i, instructor)| {
                            let portrait = PORTRAITS.get(i).copied().unwrap_or(PORTRAITS[0]);
                            html! {
                                <InstructorCard
                                    key={instructor.name}
                                    name={instructor.name}
                                    role={instructor.role}
                                    portrait={portrait}
                                />
                            }
                        })
                    }
                </div>
            </div>
        </section>
    }
}
