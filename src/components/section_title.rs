use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Left-aligned variant, used by the about section.
    #[prop_or(false)]
    pub left: bool,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class={classes!("section-title", props.left.then_some("left"))}>
            <h2>{props.title.clone()}</h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p>{subtitle.clone()}</p> }
                } else {
                    html! {}
                }
            }
            <div class="section-title-accent"></div>
        </div>
    }
}
