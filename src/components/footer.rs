use yew::prelude::*;

const PHONE: &str = "+371 263 88885";
const PHONE_HREF: &str = "tel:+37126388885";
const EMAIL: &str = "info@rigasautoskola.lv";

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <img src="/assets/images/logo.png" alt="Rīgas Autoskola" class="footer-logo" draggable="false" />
                        <p class="footer-tagline">
                            {"Profesionāla apmācība, mierīga pieeja un reāli eksāmenu padomi — lai tiesības būtu kabatā ar pārliecību."}
                        </p>
                        <p class="footer-legal">{"© SIA Rīgas Autoskola"}</p>
                    </div>

                    <div class="footer-contacts">
                        <div class="footer-heading">{"Kontakti"}</div>
                        <a href={PHONE_HREF}>{PHONE}</a>
                        <a href={format!("mailto:{}", EMAIL)}>{EMAIL}</a>
                        <span>{"Rīga, Latvija"}</span>
                    </div>

                    <div class="footer-social">
                        <div class="footer-heading">{"Seko mums"}</div>
                        <div class="footer-social-links">
                            <a href="https://www.facebook.com/rigasautoskola/" target="_blank" rel="noreferrer" aria-label="Facebook">{"FB"}</a>
                            <a href="https://www.instagram.com/rigasautoskola/" target="_blank" rel="noreferrer" aria-label="Instagram">{"IG"}</a>
                            <a href="https://www.youtube.com/@rigasautoskola" target="_blank" rel="noreferrer" aria-label="YouTube">{"YT"}</a>
                            <a href="https://www.tiktok.com/@rigasautoskola" target="_blank" rel="noreferrer" aria-label="TikTok">{"TT"}</a>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <span>{"Visas tiesības aizsargātas"}</span>
                    <span>{"Made with ♥ in Riga"}</span>
                </div>
            </div>
        </footer>
    }
}
