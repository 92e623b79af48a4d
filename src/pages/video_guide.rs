//! Training-video gallery: thumbnail cards with quality fallback and an
//! in-page lightbox playing the privacy-enhanced embed.

use yew::prelude::*;

use crate::components::modal::Modal;
use crate::components::section_title::SectionTitle;
use crate::i18n::Lang;
use crate::video::{embed_url, thumbnail_urls, VideoItem, TRAINING_VIDEOS};

const MOBILE_INITIAL: usize = 3;
const DESKTOP_INITIAL: usize = 8;

#[derive(Properties, PartialEq)]
struct CardProps {
    video: VideoItem,
    featured: bool,
    on_open: Callback<VideoItem>,
}

#[function_component(VideoCard)]
fn video_card(props: &CardProps) -> Html {
    // Walk down the thumbnail quality ladder until one loads.
    let thumb_step = use_state(|| 0usize);
    let thumbs = thumbnail_urls(props.video.url);

    let onerror = {
        let thumb_step = thumb_step.clone();
        Callback::from(move |_: Event| {
            if *thumb_step + 1 < 4 {
                thumb_step.set(*thumb_step + 1);
            }
        })
    };
    let onclick = {
        let on_open = props.on_open.clone();
        let video = props.video;
        Callback::from(move |_: MouseEvent| on_open.emit(video))
    };

    html! {
        <button
            type="button"
            class={classes!("video-card", props.featured.then_some("video-card-featured"))}
            {onclick}
            aria-label={format!("Skatīties: {}", props.video.title)}
        >
            {
                if let Some(thumbs) = &thumbs {
                    html! { <img src={thumbs[*thumb_step].clone()} alt={props.video.title} loading="lazy" {onerror} /> }
                } else {
                    html! {}
                }
            }
            <div class="video-card-shade"></div>
            <div class="video-card-body">
                <div class="video-card-meta">
                    <span class="video-play">{"▶"}</span>
                    {
                        if let Some(tag) = props.video.tag {
                            html! { <span class="video-tag">{tag}</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <h4>{props.video.title}</h4>
                <div class="video-card-foot">
                    <span>{"youtube.com"}</span>
                    <span>{"Skatīties →"}</span>
                </div>
            </div>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoGuideProps {
    pub lang: Lang,
}

#[function_component(VideoGuide)]
pub fn video_guide(props: &VideoGuideProps) -> Html {
    let t = &props.lang.bundle().video_guide;
    let more_labels = &props.lang.bundle().reviews;
    let expanded = use_state(|| false);
    let playing = use_state(|| None::<VideoItem>);

    let on_open = {
        let playing = playing.clone();
        Callback::from(move |video: VideoItem| playing.set(Some(video)))
    };
    let on_close_player = {
        let playing = playing.clone();
        Callback::from(move |_| playing.set(None))
    };
    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    let grid = |initial: usize| {
        let visible = if *expanded {
            TRAINING_VIDEOS
        } else {
            &TRAINING_VIDEOS[..initial.min(TRAINING_VIDEOS.len())]
        };
        html! {
            <div class="video-grid">
                {
                    for visible.iter().enumerate().map(|(i, video)| html! {
                        <VideoCard
                            key={video.url}
                            video={*video}
                            featured={i == 0}
                            on_open={on_open.clone()}
                        />
                    })
                }
            </div>
        }
    };

    html! {
        <section id="video" class="video-section">
            <style>
                {r#"
                .video-section {
                    padding: 6rem 0;
                    background: rgba(0, 0, 0, 0.4);
                }
                .video-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    margin-top: 2rem;
                }
                .video-card {
                    position: relative;
                    display: block;
                    text-align: left;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 28px;
                    background: rgba(255, 255, 255, 0.03);
                    aspect-ratio: 3 / 4;
                    padding: 0;
                    cursor: pointer;
                    color: inherit;
                    font: inherit;
                    transition: border-color 0.3s;
                }
                .video-card:hover {
                    border-color: rgba(204, 255, 0, 0.3);
                }
                .video-card-featured {
                    grid-column: span 2;
                    aspect-ratio: 16 / 10;
                }
                .video-card img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.35;
                    transition: all 0.7s;
                }
                .video-card:hover img {
                    opacity: 0.55;
                    transform: scale(1.1);
                }
                .video-card-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #000, rgba(0, 0, 0, 0.35), transparent);
                }
                .video-card-body {
                    position: absolute;
                    inset: 0;
                    z-index: 1;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 1.4rem;
                }
                .video-card-meta {
                    display: flex;
                    align-items: center;
                    gap: 0.8rem;
                    margin-bottom: 0.9rem;
                }
                .video-play {
                    width: 2.8rem;
                    height: 2.8rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: all 0.3s;
                }
                .video-card:hover .video-play {
                    background: #CCFF00;
                    color: #000;
                }
                .video-tag {
                    padding: 0.2rem 0.8rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.6rem;
                    font-weight: 800;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }
                .video-card h4 {
                    margin: 0 0 0.5rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: -0.02em;
                    line-height: 1.25;
                    font-size: 1rem;
                }
                .video-card:hover h4 {
                    color: #CCFF00;
                }
                .video-card-foot {
                    display: flex;
                    justify-content: space-between;
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 0.6rem;
                    font-weight: 800;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }
                .video-more {
                    margin-top: 2.5rem;
                    display: flex;
                    justify-content: center;
                }
                .video-grid-mobile { display: none; }
                @media (max-width: 1024px) {
                    .video-grid-desktop { display: none; }
                    .video-grid-mobile { display: block; }
                    .video-grid { grid-template-columns: 1fr; }
                    .video-card, .video-card-featured {
                        grid-column: span 1;
                        aspect-ratio: 16 / 10;
                    }
                }
                .video-player-head {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 0 0 1rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    margin-bottom: 1rem;
                }
                .video-player-head .eyebrow {
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 0.6rem;
                    font-weight: 800;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }
                .video-player-head .title {
                    font-weight: 700;
                    font-size: 0.95rem;
                }
                .video-player-head a {
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 0.6rem;
                    font-weight: 800;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    text-decoration: none;
                    white-space: nowrap;
                }
                .video-frame {
                    position: relative;
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    background: #000;
                    border-radius: 12px;
                    overflow: hidden;
                }
                .video-frame iframe {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    border: 0;
                }
                "#}
            </style>
            <div class="container">
                <SectionTitle title={t.title} subtitle={t.subtitle} />

                <div class="video-grid-mobile">
                    { grid(MOBILE_INITIAL) }
                    {
                        if TRAINING_VIDEOS.len() > MOBILE_INITIAL {
                            html! {
                                <div class="video-more">
                                    <button class="btn btn-outline" onclick={toggle.clone()}>
                                        { if *expanded { more_labels.show_less } else { more_labels.show_more } }
                                    </button>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="video-grid-desktop">
                    { grid(DESKTOP_INITIAL) }
                    {
                        if TRAINING_VIDEOS.len() > DESKTOP_INITIAL {
                            html! {
                                <div class="video-more">
                                    <button class="btn btn-outline" onclick={toggle}>
                                        { if *expanded { more_labels.show_less } else { more_labels.show_more } }
                                    </button>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>

            {
                if let Some(video) = *playing {
                    if let Some(embed) = embed_url(video.url) {
                        html! {
                            <Modal wide={true} on_close={on_close_player}>
                                <div class="video-player-head">
                                    <div>
                                        <div class="eyebrow">{"Video"}</div>
                                        <div class="title">{video.title}</div>
                                    </div>
                                    <a href={video.url} target="_blank" rel="noreferrer">
                                        {"Atvērt YouTube ↗"}
                                    </a>
                                </div>
                                <div class="video-frame">
                                    <iframe
                                        src={embed}
                                        title={video.title}
                                        allow="autoplay; encrypted-media; picture-in-picture"
                                        allowfullscreen=true
                                    />
                                </div>
                            </Modal>
                        }
                    } else {
                        html! {}
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}
