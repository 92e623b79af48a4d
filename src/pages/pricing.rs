use yew::prelude::*;

use crate::components::section_title::SectionTitle;
use crate::i18n::Lang;

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub lang: Lang,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let t = &props.lang.bundle().pricing;
    let rows: [(&str, &str, &str); 4] = [
        ("ℹ", t.theory, t.theory_price),
        ("🚗", t.manual, t.manual_price),
        ("⚡", t.auto, t.auto_price),
        ("💳", t.exam, t.exam_detail),
    ];

    html! {
        <section id="pricing" class="pricing-section">
            <style>
                {r#"
                .pricing-section {
                    padding: 6rem 0;
                    background: rgba(0, 0, 0, 0.4);
                }
                .pricing-rows {
                    max-width: 56rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .pricing-row {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                    padding: 1.6rem 2rem;
                    border-radius: 24px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                    transition: border-color 0.3s;
                }
                .pricing-row:hover {
                    border-color: rgba(204, 255, 0, 0.4);
                }
                @media (max-width: 640px) {
                    .pricing-row {
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 0.8rem;
                    }
                }
                .pricing-label {
                    display: flex;
                    align-items: center;
                    gap: 1.2rem;
                }
                .pricing-icon {
                    width: 2.8rem;
                    height: 2.8rem;
                    border-radius: 12px;
                    background: rgba(204, 255, 0, 0.1);
                    color: #CCFF00;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }
                .pricing-row:hover .pricing-icon {
                    background: #CCFF00;
                    color: #000;
                }
                .pricing-label span {
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: -0.01em;
                }
                .pricing-amount {
                    font-size: 1.6rem;
                    font-weight: 900;
                    font-style: italic;
                    color: #CCFF00;
                    white-space: nowrap;
                }
                "#}
            </style>
            <div class="container">
                <SectionTitle title={t.title} subtitle={t.subtitle} />
                <div class="pricing-rows">
                    {
                        for rows.iter().map(|(icon, label, amount)| html! {
                            <div class="pricing-row" key={*label}>
                                <div class="pricing-label">
                                    <div class="pricing-icon">{*icon}</div>
                                    <span>{*label}</span>
                                </div>
                                <div class="pricing-amount">{*amount}</div>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}
