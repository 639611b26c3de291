use yew::prelude::*;

use crate::components::fallback_image::{initials, FallbackImage};

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub avatar: Option<&'static str>,
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub title: AttrValue,
    pub entries: &'static [Testimonial],
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    html! {
        <section id="testimonials" class="testimonials">
            <h2>{props.title.clone()}</h2>
            <div class="testimonial-grid">
                { for props.entries.iter().map(|t| html! {
                    <div key={t.name} class="testimonial-card">
                        <div class="testimonial-author">
                            <FallbackImage
                                src={t.avatar.map(AttrValue::from)}
                                alt={format!("{} photo", t.name)}
                                fallback={initials(t.name)}
                            />
                            <div>
                                <div class="testimonial-name">{t.name}</div>
                                <div class="testimonial-role">{t.role}</div>
                            </div>
                        </div>
                        <p class="testimonial-quote">{format!("“{}”", t.quote)}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
