use yew::prelude::*;

use crate::components::cards::{Feature, FeatureGrid, Highlight, Icon, PricingGrid, PricingPlan, WhyUs};
use crate::components::contact::ContactBlock;
use crate::components::faq::{FaqList, QuestionAnswer};
use crate::components::hero::{Hero, Slide};
use crate::components::layout::{Layout, NavLink};
use crate::components::results::{Metric, ResultsStrip};
use crate::components::tabs::{TabGroup, TabbedList};
use crate::components::testimonials::{Testimonial, Testimonials};

const NAV: &[NavLink] = &[
    NavLink { anchor: "curriculum", label: "Curriculum" },
    NavLink { anchor: "subjects", label: "Subjects" },
    NavLink { anchor: "why", label: "Why Us" },
    NavLink { anchor: "pricing", label: "Pricing" },
    NavLink { anchor: "testimonials", label: "Testimonials" },
    NavLink { anchor: "faq", label: "FAQ" },
    NavLink { anchor: "contact", label: "Contact" },
];

const SLIDES: &[Slide] = &[Slide {
    src: "/templates/education-hero.jpg",
    alt: "Students learning with a tutor",
}];

const CURRICULA: &[TabGroup] = &[
    TabGroup {
        key: "KCSE",
        items: &[
            "Mathematics",
            "English",
            "Kiswahili",
            "Physics",
            "Chemistry",
            "Biology",
            "Business",
            "Computer Studies",
            "History",
        ],
    },
    TabGroup {
        key: "IGCSE",
        items: &[
            "Maths",
            "English First/Second Language",
            "Physics",
            "Chemistry",
            "Biology",
            "Business Studies",
            "ICT",
            "Economics",
        ],
    },
    TabGroup {
        key: "Primary",
        items: &["Math", "English", "Kiswahili", "Science", "Social Studies"],
    },
];

const SUBJECTS: &[Feature] = &[
    Feature { title: "Mathematics", desc: "From basics to past papers & exam drills", emoji: "➗" },
    Feature { title: "English & Kiswahili", desc: "Reading, writing, comprehension & speaking", emoji: "🗣️" },
    Feature { title: "Chemistry", desc: "Clear explanations + lab concepts made easy", emoji: "⚗️" },
    Feature { title: "Biology", desc: "Diagrams, processes, and memory techniques", emoji: "🧬" },
    Feature { title: "Physics", desc: "Problem-solving with step-by-step breakdowns", emoji: "🧪" },
    Feature { title: "Business & Accounting", desc: "Core ideas + simplified methods", emoji: "📊" },
];

const RESULTS: &[Metric] = &[
    Metric { label: "Avg. grade boost", value: "1–2 letters" },
    Metric { label: "Parents who’d recommend", value: "97%" },
    Metric { label: "Sessions delivered", value: "10,000+" },
];

const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: Icon::ShieldCheck,
        title: "Vetted Tutors",
        text: "ID & background checks, quality you can trust.",
    },
    Highlight {
        icon: Icon::Smiley,
        title: "Personalized Plans",
        text: "Baseline assessment + a clear weekly improvement plan.",
    },
    Highlight {
        icon: Icon::ChatBubble,
        title: "Instant Support",
        text: "Ask on WhatsApp and get answers in minutes, not days.",
    },
];

const PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Trial Lesson",
        price: "KES 0",
        note: "30 minutes online",
        items: &["Assessment", "Learning plan", "Tutor match"],
        badge: Some("Start here"),
    },
    PricingPlan {
        name: "Standard",
        price: "KES 1,999",
        note: "per session",
        items: &["1 hour", "Any subject", "Homework help"],
        badge: None,
    },
    PricingPlan {
        name: "Exam Prep",
        price: "KES 2,499",
        note: "per session",
        items: &["1.5 hours", "Past papers", "Exam strategy"],
        badge: Some("Popular"),
    },
    PricingPlan {
        name: "Online Intensive",
        price: "KES 1,699",
        note: "per session",
        items: &["1 hour online", "Flexible schedule", "Parent updates"],
        badge: None,
    },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah K.",
        role: "Parent, Kilimani",
        quote: "Our son jumped from a C to an A- in Math within a term. Weekly updates kept us confident.",
        avatar: Some("/avatars/sarah.jpg"),
    },
    Testimonial {
        name: "Brian M.",
        role: "Student, KCSE",
        quote: "Chemistry finally clicked. The tutor broke concepts down and drilled past papers with me.",
        avatar: Some("/avatars/brian.jpg"),
    },
    Testimonial {
        name: "Aisha N.",
        role: "IGCSE Student",
        quote: "English writing improved fast. I loved the practical tips and clear feedback.",
        avatar: Some("/avatars/aisha.jpg"),
    },
];

const FAQ: &[QuestionAnswer] = &[
    QuestionAnswer {
        question: "Do you teach at home or online?",
        answer: "Both. We cover Nairobi for in-person sessions and offer online lessons across Kenya.",
    },
    QuestionAnswer {
        question: "How do you select tutors?",
        answer: "Interviews, subject tests, reference checks and ongoing feedback from parents.",
    },
    QuestionAnswer {
        question: "Can you help with exam past papers?",
        answer: "Yes. KCSE & IGCSE/GCSE past papers are part of Exam Prep with marking schemes.",
    },
    QuestionAnswer {
        question: "How do parents track progress?",
        answer: "We share a short summary after each session and a weekly progress update.",
    },
];

const LEVELS: &[&str] = &["Primary", "Secondary", "IGCSE / GCSE", "KCSE", "University"];

#[function_component(TutoringPage)]
pub fn tutoring_page() -> Html {
    html! {
        <Layout nav={NAV}>
            <Hero
                slides={SLIDES}
                title="Unlock better grades with 1-to-1 tutoring"
                subtitle="Personalized lessons for Primary, Secondary, KCSE & IGCSE/GCSE. Vetted tutors. Weekly progress updates."
            >
                <div class="tutor-search">
                    <input placeholder="Subject (e.g., Math, Chemistry)" />
                    <select>
                        <option disabled=true selected=true>{"Level"}</option>
                        { for LEVELS.iter().map(|level| html! { <option key={*level}>{*level}</option> }) }
                    </select>
                    <a class="tutor-search-cta" href="#curriculum">{"Find Tutors"}</a>
                </div>
                <p class="hero-tip">{"Tip: Try “Math KCSE” or “English IGCSE”."}</p>
            </Hero>
            <TabbedList id="curriculum" title="Curriculum" groups={CURRICULA} item_hint="Ask tutor →" />
            <FeatureGrid
                id="subjects"
                title="Popular Subjects"
                aside="Not listed? Ask on WhatsApp →"
                features={SUBJECTS}
                primary_action="Request a tutor"
            />
            <ResultsStrip metrics={RESULTS} />
            <WhyUs highlights={HIGHLIGHTS} />
            <PricingGrid title="Simple, transparent pricing" plans={PLANS} />
            <Testimonials title="Parent & Student Feedback" entries={TESTIMONIALS} />
            <FaqList entries={FAQ} />
            <ContactBlock heading="Visit us or chat now" map_title="Office location" />
        </Layout>
    }
}
