use yew::prelude::*;

use crate::config::use_site;
use crate::links::whatsapp_href;

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub desc: &'static str,
    pub emoji: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct FeatureGridProps {
    pub id: AttrValue,
    pub title: AttrValue,
    pub aside: AttrValue,
    pub features: &'static [Feature],
    pub primary_action: AttrValue,
}

#[function_component(FeatureGrid)]
pub fn feature_grid(props: &FeatureGridProps) -> Html {
    let site = use_site();
    let chat = whatsapp_href(site.whatsapp());

    html! {
        <section id={props.id.clone()} class="feature-grid">
            <div class="section-heading">
                <h2>{props.title.clone()}</h2>
                <a target="_blank" href={chat.clone()}>{props.aside.clone()}</a>
            </div>
            <div class="feature-cards">
                { for props.features.iter().map(|f| html! {
                    <article key={f.title} class="feature-card">
                        <div class="feature-emoji">{f.emoji}</div>
                        <h3>{f.title}</h3>
                        <p>{f.desc}</p>
                        <div class="feature-actions">
                            <a class="feature-primary" target="_blank" href={chat.clone()}>
                                {props.primary_action.clone()}
                            </a>
                            <a class="feature-secondary" target="_blank" href={chat.clone()}>
                                {"Ask now"}
                            </a>
                        </div>
                    </article>
                }) }
            </div>
        </section>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ShieldCheck,
    Smiley,
    ChatBubble,
}

impl Icon {
    fn render(self) -> Html {
        match self {
            Icon::ShieldCheck => html! {
                <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
                    <path d="M12 3l7 3v5c0 5-3.5 8-7 10-3.5-2-7-5-7-10V6l7-3z" stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round" />
                    <path d="M9 12l2.2 2.2L15 10.5" stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round" />
                </svg>
            },
            Icon::Smiley => html! {
                <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
                    <circle cx="12" cy="12" r="9" stroke-width="1.8" />
                    <circle cx="9" cy="10" r="1" fill="currentColor" />
                    <circle cx="15" cy="10" r="1" fill="currentColor" />
                    <path d="M8 14.5c1.2 1.2 2.6 1.8 4 1.8s2.8-.6 4-1.8" stroke-width="1.8" stroke-linecap="round" />
                </svg>
            },
            Icon::ChatBubble => html! {
                <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
                    <path d="M5 16l-1 4 4-1h9a3 3 0 003-3V7a3 3 0 00-3-3H7a3 3 0 00-3 3v9z" stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round" />
                    <path d="M8 9h8M8 12h6" stroke-width="1.8" stroke-linecap="round" />
                </svg>
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct WhyUsProps {
    pub highlights: &'static [Highlight],
}

#[function_component(WhyUs)]
pub fn why_us(props: &WhyUsProps) -> Html {
    html! {
        <section id="why" class="why-us">
            <div class="why-us-grid">
                { for props.highlights.iter().map(|h| html! {
                    <div key={h.title} class="why-us-card">
                        <div class="why-us-icon">{h.icon.render()}</div>
                        <h4>{h.title}</h4>
                        <p>{h.text}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub note: &'static str,
    pub items: &'static [&'static str],
    pub badge: Option<&'static str>,
}

#[derive(Properties, PartialEq)]
pub struct PricingGridProps {
    pub title: AttrValue,
    pub plans: &'static [PricingPlan],
}

#[function_component(PricingGrid)]
pub fn pricing_grid(props: &PricingGridProps) -> Html {
    let site = use_site();
    let chat = whatsapp_href(site.whatsapp());

    html! {
        <section id="pricing" class="pricing">
            <h2>{props.title.clone()}</h2>
            <div class="pricing-grid">
                { for props.plans.iter().map(|plan| html! {
                    <div key={plan.name} class="pricing-card">
                        if let Some(badge) = plan.badge {
                            <div class="pricing-badge">{badge}</div>
                        }
                        <div class="pricing-name">{plan.name}</div>
                        <div class="pricing-price">{plan.price}</div>
                        <div class="pricing-note">{plan.note}</div>
                        <ul class="pricing-items">
                            { for plan.items.iter().map(|item| html! {
                                <li key={*item}><span class="pricing-dot"></span>{*item}</li>
                            }) }
                        </ul>
                        <a class="pricing-book" target="_blank" href={chat.clone()}>{"Book now"}</a>
                    </div>
                }) }
            </div>
        </section>
    }
}
