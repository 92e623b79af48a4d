use yew::prelude::*;

use crate::i18n::Lang;

const PHONE: &str = "+371 263 88885";
const PHONE_HREF: &str = "tel:+37126388885";
const EMAIL: &str = "info@rigasautoskola.lv";

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub lang: Lang,
    pub on_open_booking: Callback<()>,
}

#[function_component(ContactCta)]
pub fn contact_cta(props: &ContactProps) -> Html {
    let t = &props.lang.bundle().contact;
    let open_booking = {
        let on_open_booking = props.on_open_booking.clone();
        Callback::from(move |_: MouseEvent| on_open_booking.emit(()))
    };

    html! {
        <section id="contact" class="contact-section">
            <style>
                {r#"
                .contact-section {
                    padding: 7rem 0;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    background: linear-gradient(to bottom, transparent, #000);
                }
                .contact-panel {
                    position: relative;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                    padding: 4rem;
                    border-radius: 56px;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    background: rgba(255, 255, 255, 0.03);
                    overflow: hidden;
                }
                @media (max-width: 1024px) {
                    .contact-panel {
                        grid-template-columns: 1fr;
                        padding: 2rem 1.5rem;
                        border-radius: 28px;
                        gap: 2.5rem;
                    }
                }
                .contact-panel::after {
                    content: '';
                    position: absolute;
                    right: -10rem;
                    bottom: -10rem;
                    width: 26rem;
                    height: 26rem;
                    background: rgba(204, 255, 0, 0.1);
                    border-radius: 50%;
                    filter: blur(140px);
                    pointer-events: none;
                }
                .contact-panel h2 {
                    font-size: clamp(2rem, 6vw, 4.5rem);
                    font-weight: 900;
                    letter-spacing: -0.03em;
                    font-style: italic;
                    text-transform: uppercase;
                    margin: 0 0 1.6rem;
                }
                .contact-lede {
                    color: rgba(255, 255, 255, 0.6);
                    line-height: 1.7;
                    max-width: 34rem;
                    margin: 0 0 2.4rem;
                }
                .contact-channel {
                    display: flex;
                    align-items: center;
                    gap: 1.2rem;
                    color: inherit;
                    text-decoration: none;
                    margin-bottom: 1.6rem;
                }
                .contact-channel-icon {
                    width: 3.4rem;
                    height: 3.4rem;
                    border-radius: 18px;
                    background: rgba(255, 255, 255, 0.05);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: all 0.3s;
                    flex-shrink: 0;
                }
                .contact-channel:hover .contact-channel-icon {
                    background: #CCFF00;
                    color: #000;
                }
                .contact-channel-label {
                    display: block;
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 0.6rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    margin-bottom: 0.2rem;
                }
                .contact-channel-value {
                    font-size: 1.3rem;
                    font-weight: 700;
                    letter-spacing: -0.01em;
                    word-break: break-all;
                }
                .contact-apply {
                    display: flex;
                    flex-direction: column;
                    gap: 1.6rem;
                    align-items: flex-start;
                }
                .contact-apply .btn {
                    height: 4.2rem;
                    padding: 0 3rem;
                    font-size: 1rem;
                    box-shadow: 0 0 50px rgba(204, 255, 0, 0.35);
                }
                .contact-note {
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 0.85rem;
                    max-width: 26rem;
                    margin: 0;
                }
                "#}
            </style>
            <div class="container">
                <div class="contact-panel">
                    <div>
                        <h2>{t.cta_title}</h2>
                        <p class="contact-lede">{t.cta_text}</p>

                        <a href={PHONE_HREF} class="contact-channel">
                            <div class="contact-channel-icon">{"✆"}</div>
                            <div>
                                <span class="contact-channel-label">{t.cta_call}</span>
                                <span class="contact-channel-value">{PHONE}</span>
                            </div>
                        </a>
                        <a href={format!("mailto:{}", EMAIL)} class="contact-channel">
                            <div class="contact-channel-icon">{"✉"}</div>
                            <div>
                                <span class="contact-channel-label">{t.cta_write}</span>
                                <span class="contact-channel-value">{EMAIL}</span>
                            </div>
                        </a>
                    </div>

                    <div class="contact-apply">
                        <button class="btn btn-primary" onclick={open_booking}>
                            {t.cta_button}
                        </button>
                        <p class="contact-note">{t.cta_note}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
