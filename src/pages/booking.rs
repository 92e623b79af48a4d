//! Booking modal: the lead form with its validation and submission flow.
//!
//! The component is mounted only while the modal is open, so every open
//! starts from an empty draft in `Idle` and a response that arrives after
//! closing has nothing left to mutate.

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::i18n::Lang;
use crate::lead::{self, LeadDraft, SubmitStatus};

const AUTO_CLOSE_MS: u32 = 2_200;

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub lang: Lang,
    pub on_close: Callback<()>,
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let t = &props.lang.bundle().contact;
    let draft = use_state(LeadDraft::default);
    let status = use_state(SubmitStatus::default);
    // Pending auto-close after a success. Dropping the handle cancels the
    // timer, so a manual close or unmount can never fire it twice.
    let auto_close = use_mut_ref(|| None::<Timeout>);
    // Synchronous single-flight guard: the status handle only reflects the
    // last render, which a same-tick double submit would slip past.
    let in_flight = use_mut_ref(|| false);

    let edit = {
        let draft = draft.clone();
        move |apply: fn(&mut LeadDraft, String)| {
            let draft = draft.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*draft).clone();
                apply(&mut next, input.value());
                draft.set(next);
            })
        }
    };
    let oninput_name = edit(|d, v| d.name = v);
    let oninput_phone = edit(|d, v| d.phone = v);
    let oninput_code = edit(|d, v| d.code = v);
    let oninput_email = edit(|d, v| d.email = v);
    let oninput_comment = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.comment = area.value();
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let status = status.clone();
        let auto_close = auto_close.clone();
        let on_close = props.on_close.clone();
        let in_flight = in_flight.clone();
        let lang = props.lang;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *in_flight.borrow() || !status.can_submit(&draft) {
                return;
            }
            *in_flight.borrow_mut() = true;
            status.set(SubmitStatus::Loading);
            let submitted = (*draft).clone();
            let status = status.clone();
            let auto_close = auto_close.clone();
            let in_flight = in_flight.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                let outcome = lead::submit(&submitted, lang).await;
                *in_flight.borrow_mut() = false;
                match outcome {
                    Ok(()) => {
                        status.set(SubmitStatus::Success);
                        let on_close = on_close.clone();
                        let pending = Timeout::new(AUTO_CLOSE_MS, move || on_close.emit(()));
                        *auto_close.borrow_mut() = Some(pending);
                    }
                    Err(err) => {
                        status.set(SubmitStatus::Error(err.message(&lang.bundle().contact)));
                    }
                }
            });
        })
    };

    let submit_disabled = !status.can_submit(&draft);

    html! {
        <Modal on_close={props.on_close.clone()}>
            <style>
                {r#"
                .booking-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.9rem;
                }
                .booking-form h3 {
                    font-size: 1.8rem;
                    text-transform: uppercase;
                    font-style: italic;
                    margin: 0 0 0.2rem;
                }
                .booking-subtitle {
                    color: rgba(255, 255, 255, 0.4);
                    text-transform: uppercase;
                    font-size: 0.7rem;
                    letter-spacing: 0.2em;
                    margin: 0 0 1.2rem;
                }
                .booking-form input,
                .booking-form textarea {
                    width: 100%;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 1rem;
                    border-radius: 14px;
                    color: #fff;
                    font-size: 0.9rem;
                    outline: none;
                    transition: border-color 0.3s;
                    box-sizing: border-box;
                }
                .booking-form input:focus,
                .booking-form textarea:focus {
                    border-color: #CCFF00;
                }
                .booking-form textarea {
                    min-height: 90px;
                    resize: vertical;
                }
                .booking-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.9rem;
                }
                @media (max-width: 640px) {
                    .booking-row {
                        grid-template-columns: 1fr;
                    }
                }
                .booking-error {
                    display: flex;
                    gap: 0.7rem;
                    align-items: flex-start;
                    padding: 0.8rem;
                    border-radius: 12px;
                    border: 1px solid rgba(239, 68, 68, 0.3);
                    background: rgba(239, 68, 68, 0.1);
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.85rem;
                }
                .booking-submit {
                    width: 100%;
                    height: 3.2rem;
                    border: none;
                    border-radius: 14px;
                    background: #CCFF00;
                    color: #000;
                    font-weight: 800;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.95rem;
                    cursor: pointer;
                }
                .booking-submit:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .booking-consent {
                    color: rgba(255, 255, 255, 0.3);
                    font-size: 0.7rem;
                    margin: 0;
                }
                .booking-success {
                    text-align: center;
                    padding: 1.8rem 0;
                }
                .booking-success-badge {
                    width: 5rem;
                    height: 5rem;
                    border-radius: 50%;
                    background: #CCFF00;
                    color: #000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    margin: 0 auto 1.4rem;
                    box-shadow: 0 0 40px rgba(204, 255, 0, 0.5);
                }
                .booking-success h3 {
                    font-size: 1.6rem;
                    text-transform: uppercase;
                    font-style: italic;
                    margin: 0 0 0.5rem;
                }
                .booking-success p {
                    color: rgba(255, 255, 255, 0.5);
                    margin: 0;
                }
                "#}
            </style>
            {
                if *status == SubmitStatus::Success {
                    html! {
                        <div class="booking-success">
                            <div class="booking-success-badge">{"✓"}</div>
                            <h3>{t.success_title}</h3>
                            <p>{t.success_text}</p>
                        </div>
                    }
                } else {
                    html! {
                        <form class="booking-form" {onsubmit}>
                            <h3>{t.form_title}</h3>
                            <p class="booking-subtitle">{t.form_subtitle}</p>

                            <input
                                type="text"
                                name="name"
                                placeholder={t.form_name}
                                value={draft.name.clone()}
                                oninput={oninput_name}
                            />
                            <div class="booking-row">
                                <input
                                    type="tel"
                                    name="phone"
                                    placeholder={t.form_phone}
                                    value={draft.phone.clone()}
                                    oninput={oninput_phone}
                                />
                                <input
                                    type="text"
                                    name="code"
                                    placeholder={t.form_code}
                                    value={draft.code.clone()}
                                    oninput={oninput_code}
                                />
                            </div>
                            <input
                                type="email"
                                name="email"
                                placeholder={t.form_email}
                                value={draft.email.clone()}
                                oninput={oninput_email}
                            />
                            <textarea
                                name="message"
                                placeholder={t.form_comment}
                                value={draft.comment.clone()}
                                oninput={oninput_comment}
                            />

                            {
                                if let SubmitStatus::Error(message) = &*status {
                                    html! {
                                        <div class="booking-error">
                                            <span>{"⚠"}</span>
                                            <p>{message}</p>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }

                            <button type="submit" class="booking-submit" disabled={submit_disabled}>
                                {
                                    if status.is_loading() {
                                        t.form_sending
                                    } else {
                                        t.form_submit
                                    }
                                }
                            </button>

                            <p class="booking-consent">{t.form_consent}</p>
                        </form>
                    }
                }
            }
        </Modal>
    }
}
