use yew::prelude::*;

use crate::components::section_title::SectionTitle;
use crate::i18n::Lang;

struct Review {
    name: &'static str,
    date: &'static str,
    text: &'static str,
}

// Anonymised Facebook reviews, newest first.
const REVIEWS: &[Review] = &[
    Review {
        name: "Anna K.",
        date: "8. decembris",
        text: "Vislielākais paldies Rīgas autoskolai un instruktoram Jānim. Ļoti saprotamas un mierīgas braukšanas. Nevaru iedomāties, ka būtu dabūjusi tiesības bez šīs pieejas.",
    },
    Review {
        name: "Besi G.",
        date: "4. decembris",
        text: "Ļoti laba autoskola ar profesionālu instruktoru – mierīgs, saprotams un palīdz izlabot kļūdas. Pēc katras nodarbības tiek atsūtītas vizuālas shēmas un Google Maps bildes, kas ļoti palīdz saprast situācijas uz ceļa. Noteikti iesaku!",
    },
    Review {
        name: "Beate K.",
        date: "20. novembris",
        text: "Pieteicos autoskolā pēc radinieka ieteikuma. Sākotnēji biju ļoti nobijusies, taču instruktors skaidri, mierīgi un pacietīgi mācīja. Tagad tiesības ir kabatā, un autoskolu iesaku ar lielāko pārliecību.",
    },
    Review {
        name: "Augusts P.",
        date: "10. novembris",
        text: "Uzsāku autoskolu ar ideju, ka visu jau zinu, bet instruktori iedeva daudz jaunus padomus. Varēju brīvi jautāt visu, ko nesapratu, bez uztraukuma.",
    },
    Review {
        name: "Markuss B.",
        date: "14. oktobris",
        text: "Lieliski apmāca, izskaidro saprotoši un viegli māca 👍",
    },
    Review {
        name: "Krists H.",
        date: "8. septembris",
        text: "Paldies instruktoram Jānim. Ar viņa mācīšanas prasmēm ātri tiku līdz CSDD braukšanas eksāmenam un nokārtoju. 10/10",
    },
    Review {
        name: "Liene B.",
        date: "31. augusts",
        text: "Instruktors Jānis – ļoti pozitīva attieksme, mierīgs un nosvērts. Iedeva daudz vērtīgu padomu. Kvalitāte – kā diena pret nakti!",
    },
];

const FACEBOOK_URL: &str = "https://www.facebook.com/rigasautoskola/";
const MOBILE_INITIAL: usize = 3;
const DESKTOP_INITIAL: usize = 6;

fn review_card(review: &Review) -> Html {
    html! {
        <div class="review-card" key={review.name}>
            <div class="review-head">
                <div class="review-stars">{"★★★★★"}</div>
                <span class="review-date">{review.date}</span>
            </div>
            <p class="review-text">{review.text}</p>
            <div class="review-name">{review.name}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ReviewsProps {
    pub lang: Lang,
}

#[function_component(Reviews)]
pub fn reviews(props: &ReviewsProps) -> Html {
    let t = &props.lang.bundle().reviews;
    let expanded = use_state(|| false);

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    let grid = |initial: usize| {
        let visible = if *expanded {
            REVIEWS
        } else {
            &REVIEWS[..initial.min(REVIEWS.len())]
        };
        html! {
            <div class="reviews-grid">
                { for visible.iter().map(review_card) }
            </div>
        }
    };

    html! {
        <section id="reviews" class="reviews-section">
            <style>
                {r#"
                .reviews-section {
                    padding: 6rem 0;
                    overflow: hidden;
                }
                .reviews-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .review-card {
                    padding: 1.8rem;
                    border-radius: 28px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                    transition: border-color 0.3s;
                }
                .review-card:hover {
                    border-color: rgba(255, 255, 255, 0.2);
                }
                .review-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1rem;
                }
                .review-stars {
                    color: #CCFF00;
                    letter-spacing: 0.2em;
                }
                .review-date {
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 0.75rem;
                }
                .review-text {
                    color: rgba(255, 255, 255, 0.7);
                    line-height: 1.6;
                    font-size: 0.9rem;
                    margin: 0 0 1.2rem;
                }
                .review-name {
                    font-weight: 800;
                    text-transform: uppercase;
                    font-size: 0.8rem;
                    letter-spacing: 0.05em;
                }
                .reviews-actions {
                    margin-top: 2.5rem;
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                .reviews-grid-mobile { display: none; }
                @media (max-width: 768px) {
                    .reviews-grid-desktop { display: none; }
                    .reviews-grid-mobile { display: block; }
                    .reviews-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="container">
                <SectionTitle title={t.title} subtitle={t.subtitle} />

                <div class="reviews-grid-desktop">{ grid(DESKTOP_INITIAL) }</div>
                <div class="reviews-grid-mobile">{ grid(MOBILE_INITIAL) }</div>

                <div class="reviews-actions">
                    <button class="btn btn-outline" onclick={toggle}>
                        { if *expanded { t.show_less } else { t.show_more } }
                    </button>
                    <a class="btn btn-secondary" href={FACEBOOK_URL} target="_blank" rel="noreferrer">
                        {t.cta}
                    </a>
                </div>
            </div>
        </section>
    }
}
