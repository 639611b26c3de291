use yew::prelude::*;

use crate::carousel::use_slide_index;

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub slides: &'static [Slide],
    pub title: AttrValue,
    pub subtitle: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let current = use_slide_index(props.slides.len());

    html! {
        <section class="hero">
            { for props.slides.iter().enumerate().map(|(i, slide)| html! {
                <img
                    key={slide.src}
                    class={classes!("hero-slide", (i == current).then(|| "active"))}
                    src={slide.src}
                    alt={slide.alt}
                    aria-hidden={(i != current).to_string()}
                />
            }) }
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <h1>{props.title.clone()}</h1>
                <p class="hero-subtitle">{props.subtitle.clone()}</p>
                { for props.children.iter() }
            </div>
        </section>
    }
}
