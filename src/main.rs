use log::{info, Level};
use stylist::yew::Global;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

mod config;
mod i18n;
mod lead;
mod video;
mod components {
    pub mod footer;
    pub mod modal;
    pub mod section_title;
    pub mod tilt;
}
mod pages {
    pub mod about;
    pub mod booking;
    pub mod contact;
    pub mod estudies;
    pub mod hero;
    pub mod instructors;
    pub mod pricing;
    pub mod reviews;
    pub mod social;
    pub mod video_guide;
}

use components::footer::Footer;
use i18n::Lang;
use pages::{
    about::About, booking::BookingModal, contact::ContactCta, estudies::Estudies, hero::Hero,
    instructors::Instructors, pricing::Pricing, reviews::Reviews, social::SocialFollow,
    video_guide::VideoGuide,
};

const HEADER_OFFSET: f64 = 70.0;

/// Smooth-scrolls to an in-page section, compensating for the fixed header.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
        return;
    };
    let top = element.get_bounding_client_rect().top()
        + window.page_y_offset().unwrap_or(0.0)
        - HEADER_OFFSET;
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub lang: Lang,
    pub on_select_lang: Callback<Lang>,
    pub on_open_booking: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let t = &props.lang.bundle().nav;
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 30.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let entries: [(&'static str, &'static str); 5] = [
        ("about", t.about),
        ("video", t.video),
        ("instructors", t.instructors),
        ("reviews", t.reviews),
        ("pricing", t.pricing),
    ];

    let nav_links = entries.map(|(id, label)| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(id);
            menu_open.set(false);
        });
        html! {
            <a key={id} href={format!("#{}", id)} class="nav-link" {onclick}>{label}</a>
        }
    });

    let lang_buttons = Lang::ALL.map(|lang| {
        let on_select = props.on_select_lang.clone();
        let active = lang == props.lang;
        let onclick = Callback::from(move |_: MouseEvent| on_select.emit(lang));
        html! {
            <button
                key={lang.code()}
                class={classes!("lang-btn", active.then_some("active"))}
                {onclick}
            >
                {lang.label()}
            </button>
        }
    });

    let apply_click = {
        let menu_open = menu_open.clone();
        let on_open_booking = props.on_open_booking.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_open_booking.emit(());
        })
    };

    let to_top = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <img
                    src="/assets/images/logo.png"
                    alt="Rīgas Autoskola"
                    class="nav-logo"
                    onclick={to_top}
                    draggable="false"
                />

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={menu_class}>
                    <div class="lang-switch">{ for lang_buttons }</div>
                    { for nav_links }
                    <button class="nav-apply" onclick={apply_click}>{t.apply}</button>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Banner)]
fn banner() -> Html {
    let line = "RĪGAS AUTOSKOLA PIEDĀVĀ PĀRREĢISTRĀCIJU NO JEBKURAS AUTOSKOLAS! • NEGAIDI - PIESAKIES! • KVALITATĪVA APMĀCĪBA • PROFESIONĀLI INSTRUKTORI • MODERNS AUTOPARKS • ";
    html! {
        <section class="marquee">
            <div class="marquee-track">
                { for (0..6).map(|i| html! { <span key={i}>{line}</span> }) }
            </div>
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    let lang = use_state(Lang::default);
    let booking_open = use_state(|| false);

    let on_select_lang = {
        let lang = lang.clone();
        Callback::from(move |next: Lang| lang.set(next))
    };
    let open_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_| booking_open.set(true))
    };
    let close_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_| booking_open.set(false))
    };

    html! {
        <>
            <Global css={GLOBAL_CSS} />
            <Nav lang={*lang} {on_select_lang} on_open_booking={open_booking.clone()} />
            <main>
                <Hero lang={*lang} on_open_booking={open_booking.clone()} />
                <About lang={*lang} />
                <Banner />
                <Instructors lang={*lang} />
                <VideoGuide lang={*lang} />
                <Reviews lang={*lang} />
                <SocialFollow lang={*lang} />
                <Estudies lang={*lang} on_open_booking={open_booking.clone()} />
                <Pricing lang={*lang} />
                <ContactCta lang={*lang} on_open_booking={open_booking} />
            </main>
            <Footer />
            {
                if *booking_open {
                    html! { <BookingModal lang={*lang} on_close={close_booking} /> }
                } else {
                    html! {}
                }
            }
        </>
    }
}

const GLOBAL_CSS: &str = r#"
* {
    box-sizing: border-box;
}
html {
    scroll-behavior: smooth;
}
body {
    margin: 0;
    background: #0A0A0A;
    color: #fff;
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    overflow-x: hidden;
}
::selection {
    background: #CCFF00;
    color: #000;
}
.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
}
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.9rem 1.8rem;
    border-radius: 16px;
    border: none;
    font-weight: 700;
    font-size: 0.95rem;
    cursor: pointer;
    text-decoration: none;
    white-space: nowrap;
    transition: all 0.3s;
}
.btn-primary {
    background: #CCFF00;
    color: #000;
    box-shadow: 0 10px 30px rgba(204, 255, 0, 0.2);
}
.btn-primary:hover {
    filter: brightness(1.1);
}
.btn-secondary {
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    color: #fff;
}
.btn-secondary:hover {
    background: rgba(255, 255, 255, 0.1);
}
.btn-outline {
    background: transparent;
    border: 1px solid rgba(255, 255, 255, 0.2);
    color: #fff;
}
.btn-outline:hover {
    border-color: #CCFF00;
    color: #CCFF00;
}
.section-title {
    text-align: center;
    margin-bottom: 3.5rem;
}
.section-title.left {
    text-align: left;
}
.section-title h2 {
    font-size: clamp(1.6rem, 4vw, 3rem);
    font-weight: 800;
    letter-spacing: -0.03em;
    text-transform: uppercase;
    font-style: italic;
    line-height: 1.15;
    margin: 0 0 1rem;
}
.section-title p {
    color: rgba(255, 255, 255, 0.5);
    max-width: 42rem;
    margin: 0 auto;
    line-height: 1.6;
}
.section-title.left p {
    margin: 0;
}
.section-title-accent {
    width: 4rem;
    height: 4px;
    background: #CCFF00;
    margin: 1.4rem auto 0;
}
.section-title.left .section-title-accent {
    margin-left: 0;
}
.top-nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    padding: 1.6rem 0;
    transition: all 0.5s;
}
.top-nav.scrolled {
    padding: 0.7rem 0;
    background: rgba(10, 10, 10, 0.8);
    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
}
.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.nav-logo {
    width: 4.5rem;
    cursor: pointer;
}
.nav-right {
    display: flex;
    align-items: center;
    gap: 1.6rem;
}
.nav-link {
    color: #fff;
    text-decoration: none;
    font-size: 0.65rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    transition: color 0.3s;
}
.nav-link:hover {
    color: #CCFF00;
}
.lang-switch {
    display: flex;
    gap: 0.7rem;
    padding-right: 1rem;
    border-right: 1px solid rgba(255, 255, 255, 0.1);
}
.lang-btn {
    background: none;
    border: none;
    color: rgba(255, 255, 255, 0.4);
    font-size: 0.65rem;
    font-weight: 900;
    cursor: pointer;
    letter-spacing: 0.1em;
}
.lang-btn:hover {
    color: #fff;
}
.lang-btn.active {
    color: #CCFF00;
    text-decoration: underline;
}
.nav-apply {
    background: transparent;
    border: 1px solid rgba(255, 255, 255, 0.2);
    color: #fff;
    padding: 0.45rem 1.1rem;
    border-radius: 12px;
    font-size: 0.6rem;
    font-weight: 800;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    cursor: pointer;
    transition: all 0.3s;
}
.nav-apply:hover {
    border-color: #CCFF00;
    color: #CCFF00;
}
.burger-menu {
    display: none;
    background: none;
    border: none;
    cursor: pointer;
    padding: 0.5rem;
    flex-direction: column;
    gap: 5px;
}
.burger-menu span {
    display: block;
    width: 24px;
    height: 2px;
    background: #fff;
}
@media (max-width: 1024px) {
    .burger-menu {
        display: flex;
    }
    .nav-right {
        display: none;
    }
    .nav-right.mobile-menu-open {
        display: flex;
        position: fixed;
        top: 0;
        right: 0;
        width: 100%;
        height: 100vh;
        background: rgba(0, 0, 0, 0.98);
        flex-direction: column;
        justify-content: center;
        gap: 2rem;
    }
    .nav-right.mobile-menu-open .nav-link {
        font-size: 1.2rem;
    }
    .nav-right.mobile-menu-open .lang-switch {
        border-right: none;
        padding-right: 0;
    }
}
.marquee {
    padding: 4rem 0;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
    background: rgba(0, 0, 0, 0.2);
    overflow: hidden;
}
.marquee-track {
    display: flex;
    gap: 4rem;
    white-space: nowrap;
    opacity: 0.2;
    animation: marquee 60s linear infinite;
}
.marquee-track span {
    font-size: 2rem;
    font-weight: 900;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    font-style: italic;
}
@keyframes marquee {
    from { transform: translateX(0); }
    to { transform: translateX(-50%); }
}
.modal-overlay {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    bottom: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    background: rgba(0, 0, 0, 0.92);
    animation: overlay-in 0.25s ease-out;
}
@keyframes overlay-in {
    from { opacity: 0; }
    to { opacity: 1; }
}
.modal-box {
    position: relative;
    width: 100%;
    max-width: 36rem;
    max-height: 90vh;
    overflow-y: auto;
    padding: 2.5rem;
    border-radius: 36px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(20, 20, 20, 0.95);
    box-shadow: 0 24px 80px rgba(0, 0, 0, 0.6);
    animation: box-in 0.25s ease-out;
}
@keyframes box-in {
    from { opacity: 0; transform: scale(0.94); }
    to { opacity: 1; transform: scale(1); }
}
.modal-box-wide {
    max-width: 64rem;
    padding: 1.5rem;
    border-radius: 24px;
}
.modal-close {
    position: absolute;
    top: 1.4rem;
    right: 1.4rem;
    background: none;
    border: none;
    color: rgba(255, 255, 255, 0.4);
    font-size: 1.1rem;
    cursor: pointer;
    transition: color 0.3s;
}
.modal-close:hover {
    color: #fff;
}
.site-footer {
    border-top: 1px solid rgba(255, 255, 255, 0.05);
    background: #000;
    padding: 4rem 0 2rem;
}
.footer-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 3rem;
    align-items: start;
}
@media (max-width: 768px) {
    .footer-grid {
        grid-template-columns: 1fr;
    }
}
.footer-logo {
    width: 5.5rem;
    margin-bottom: 1rem;
}
.footer-tagline {
    color: rgba(255, 255, 255, 0.35);
    font-size: 0.85rem;
    line-height: 1.6;
    max-width: 22rem;
    margin: 0 0 1rem;
}
.footer-legal {
    color: rgba(255, 255, 255, 0.25);
    font-size: 0.6rem;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    font-weight: 900;
    margin: 0;
}
.footer-heading {
    color: rgba(255, 255, 255, 0.5);
    font-size: 0.6rem;
    font-weight: 900;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    margin-bottom: 1rem;
}
.footer-contacts a,
.footer-contacts span {
    display: block;
    color: rgba(255, 255, 255, 0.7);
    text-decoration: none;
    font-size: 0.9rem;
    font-weight: 600;
    margin-bottom: 0.7rem;
    word-break: break-all;
    transition: color 0.3s;
}
.footer-contacts a:hover {
    color: #CCFF00;
}
.footer-social-links {
    display: flex;
    gap: 0.7rem;
}
.footer-social-links a {
    width: 2.7rem;
    height: 2.7rem;
    border-radius: 14px;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    display: flex;
    align-items: center;
    justify-content: center;
    color: rgba(255, 255, 255, 0.7);
    text-decoration: none;
    font-size: 0.7rem;
    font-weight: 900;
    transition: all 0.3s;
}
.footer-social-links a:hover {
    background: #CCFF00;
    color: #000;
}
.footer-bottom {
    margin-top: 2.5rem;
    padding-top: 1.5rem;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
    display: flex;
    justify-content: space-between;
    gap: 1rem;
    flex-wrap: wrap;
    color: rgba(255, 255, 255, 0.25);
    font-size: 0.6rem;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    font-weight: 900;
}
"#;

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
