use yew::prelude::*;

use crate::components::section_title::SectionTitle;
use crate::components::tilt::TiltCard;
use crate::i18n::Lang;

struct Platform {
    name: &'static str,
    glyph: &'static str,
    href: &'static str,
    class: &'static str,
}

const PLATFORMS: &[Platform] = &[
    Platform {
        name: "TikTok",
        glyph: "♪",
        href: "https://www.tiktok.com/@rigasautoskola",
        class: "social-tiktok",
    },
    Platform {
        name: "Instagram",
        glyph: "◎",
        href: "https://www.instagram.com/rigasautoskola/",
        class: "social-instagram",
    },
    Platform {
        name: "Facebook",
        glyph: "f",
        href: "https://www.facebook.com/rigasautoskola/",
        class: "social-facebook",
    },
    Platform {
        name: "YouTube",
        glyph: "▶",
        href: "https://www.youtube.com/@rigasautoskola",
        class: "social-youtube",
    },
];

#[derive(Properties, PartialEq)]
pub struct SocialFollowProps {
    pub lang: Lang,
}

#[function_component(SocialFollow)]
pub fn social_follow(props: &SocialFollowProps) -> Html {
    let t = &props.lang.bundle().social;

    html! {
        <section id="social" class="social-section">
            <style>
                {r#"
                .social-section {
                    padding: 6rem 0;
                    position: relative;
                    overflow: hidden;
                }
                .social-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }
                @media (max-width: 768px) {
                    .social-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                .social-grid .tilt-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    padding: 3rem 1rem;
                    border-radius: 40px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                    color: #fff;
                    text-decoration: none;
                    transition: background 0.3s, box-shadow 0.3s;
                    will-change: transform;
                }
                .social-glyph {
                    font-size: 2rem;
                }
                .social-name {
                    font-size: 0.7rem;
                    font-weight: 800;
                    text-transform: uppercase;
                    letter-spacing: 0.25em;
                    opacity: 0.4;
                    transition: opacity 0.3s;
                }
                .tilt-card:hover .social-name {
                    opacity: 1;
                }
                .social-tiktok:hover {
                    background: rgba(0, 242, 234, 0.1);
                    box-shadow: 0 0 50px rgba(0, 242, 234, 0.4);
                }
                .social-instagram:hover {
                    background: rgba(219, 39, 119, 0.1);
                    box-shadow: 0 0 50px rgba(219, 39, 119, 0.4);
                }
                .social-facebook:hover {
                    background: rgba(24, 119, 242, 0.1);
                    box-shadow: 0 0 50px rgba(24, 119, 242, 0.4);
                }
                .social-youtube:hover {
                    background: rgba(255, 0, 0, 0.1);
                    box-shadow: 0 0 50px rgba(255, 0, 0, 0.4);
                }
                "#}
            </style>
            <div class="container">
                <SectionTitle title={t.title} subtitle={t.subtitle} />
                <div class="social-grid">
                    {
                        for PLATFORMS.iter().map(|platform| html! {
                            <TiltCard key={platform.name} href={platform.href} class={classes!(platform.class)}>
                                <span class="social-glyph">{platform.glyph}</span>
                                <span class="social-name">{platform.name}</span>
                            </TiltCard>
                        })
                    }
                </div>
            </div>
        </section>
    }
}
