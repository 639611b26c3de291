use yew::prelude::*;

use crate::components::cards::{Feature, FeatureGrid, Highlight, Icon, PricingGrid, PricingPlan, WhyUs};
use crate::components::contact::ContactBlock;
use crate::components::faq::{FaqList, QuestionAnswer};
use crate::components::hero::{Hero, Slide};
use crate::components::layout::{Layout, NavLink};
use crate::components::results::{Metric, ResultsStrip};
use crate::components::tabs::{TabGroup, TabbedList};
use crate::components::testimonials::{Testimonial, Testimonials};
use crate::config::use_site;
use crate::links::whatsapp_href;

const NAV: &[NavLink] = &[
    NavLink { anchor: "menu", label: "Menu" },
    NavLink { anchor: "treatments", label: "Treatments" },
    NavLink { anchor: "why", label: "Why Us" },
    NavLink { anchor: "pricing", label: "Packages" },
    NavLink { anchor: "testimonials", label: "Reviews" },
    NavLink { anchor: "faq", label: "FAQ" },
    NavLink { anchor: "contact", label: "Contact" },
];

const SLIDES: &[Slide] = &[
    Slide { src: "/templates/spa-hero.jpg", alt: "Calm treatment room with candles" },
    Slide { src: "/templates/spa-massage.jpg", alt: "Therapist giving a back massage" },
    Slide { src: "/templates/spa-nails.jpg", alt: "Manicure station" },
];

const MENU: &[TabGroup] = &[
    TabGroup {
        key: "Massage",
        items: &["Swedish", "Deep Tissue", "Hot Stone", "Aromatherapy", "Couples Massage"],
    },
    TabGroup {
        key: "Facials",
        items: &["Hydrating Facial", "Anti-Ageing", "Acne Clarifying", "Express Glow"],
    },
    TabGroup {
        key: "Nails & Beauty",
        items: &["Gel Manicure", "Spa Pedicure", "Lash Lift", "Brow Shaping", "Waxing"],
    },
];

const TREATMENTS: &[Feature] = &[
    Feature { title: "Signature Massage", desc: "90 minutes of full-body relaxation", emoji: "💆" },
    Feature { title: "Glow Facial", desc: "Deep cleanse, exfoliation and hydration", emoji: "✨" },
    Feature { title: "Hot Stone Therapy", desc: "Warm basalt stones melt away tension", emoji: "🪨" },
    Feature { title: "Mani & Pedi", desc: "Long-lasting gel finish, hygienic tools", emoji: "💅" },
    Feature { title: "Steam & Sauna", desc: "Detox sessions before any treatment", emoji: "♨️" },
    Feature { title: "Bridal Packages", desc: "Group pampering for the big day", emoji: "💐" },
];

const RESULTS: &[Metric] = &[
    Metric { label: "Average rating", value: "4.9★" },
    Metric { label: "Guests who return", value: "85%" },
    Metric { label: "Treatments delivered", value: "15,000+" },
];

const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: Icon::ShieldCheck,
        title: "Certified Therapists",
        text: "Trained, licensed and hygiene-first in every room.",
    },
    Highlight {
        icon: Icon::Smiley,
        title: "Tailored Treatments",
        text: "A short consultation shapes every session to you.",
    },
    Highlight {
        icon: Icon::ChatBubble,
        title: "Same-day Booking",
        text: "Message us on WhatsApp and get a slot in minutes.",
    },
];

const PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Express",
        price: "KES 2,500",
        note: "45 minutes",
        items: &["Back & shoulder massage", "Hot towel", "Herbal tea"],
        badge: None,
    },
    PricingPlan {
        name: "Relax",
        price: "KES 4,500",
        note: "90 minutes",
        items: &["Full-body massage", "Steam session", "Foot soak"],
        badge: Some("Popular"),
    },
    PricingPlan {
        name: "Glow",
        price: "KES 5,500",
        note: "2 hours",
        items: &["Facial", "Gel manicure", "Scalp massage"],
        badge: None,
    },
    PricingPlan {
        name: "Full Day Retreat",
        price: "KES 12,000",
        note: "5 hours",
        items: &["Massage + facial", "Mani & pedi", "Lunch included"],
        badge: Some("Best value"),
    },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Wanjiru M.",
        role: "Westlands",
        quote: "The hot stone massage was the best I have had in Nairobi. Booking on WhatsApp took two minutes.",
        avatar: Some("/avatars/wanjiru.jpg"),
    },
    Testimonial {
        name: "Daniel O.",
        role: "Regular guest",
        quote: "Spotless rooms and therapists who actually listen. I come every month now.",
        avatar: Some("/avatars/daniel.jpg"),
    },
    Testimonial {
        name: "Grace A.",
        role: "Bride, Karen",
        quote: "They handled my whole bridal party without a hitch. Everyone left glowing.",
        avatar: None,
    },
];

const FAQ: &[QuestionAnswer] = &[
    QuestionAnswer {
        question: "Do I need to book in advance?",
        answer: "Walk-ins are welcome, but a quick WhatsApp message guarantees your slot, often the same day.",
    },
    QuestionAnswer {
        question: "What should I bring?",
        answer: "Nothing. Robes, slippers, towels and lockers are provided.",
    },
    QuestionAnswer {
        question: "Do you offer couples or group sessions?",
        answer: "Yes. We have a couples suite and bridal or birthday group packages.",
    },
    QuestionAnswer {
        question: "How do I pay?",
        answer: "M-Pesa, card or cash at the front desk after your treatment.",
    },
];

#[function_component(SpaPage)]
pub fn spa_page() -> Html {
    let site = use_site();

    html! {
        <Layout nav={NAV}>
            <Hero
                slides={SLIDES}
                title="Unwind in the heart of Nairobi"
                subtitle="Massages, facials, nails and wellness packages by certified therapists. Same-day appointments."
            >
                <a class="hero-cta" target="_blank" href={whatsapp_href(site.whatsapp())}>
                    {"Book on WhatsApp"}
                </a>
            </Hero>
            <TabbedList id="menu" title="Treatment Menu" groups={MENU} item_hint="Book →" />
            <FeatureGrid
                id="treatments"
                title="Signature Treatments"
                aside="Something else in mind? Ask on WhatsApp →"
                features={TREATMENTS}
                primary_action="Book this"
            />
            <ResultsStrip metrics={RESULTS} />
            <WhyUs highlights={HIGHLIGHTS} />
            <PricingGrid title="Wellness packages" plans={PLANS} />
            <Testimonials title="What our guests say" entries={TESTIMONIALS} />
            <FaqList entries={FAQ} />
            <ContactBlock heading="Visit the lounge or chat now" map_title="Spa location" />
        </Layout>
    }
}
