use yew::prelude::*;

use crate::reveal::{reveal_classes, stagger_duration_ms, use_reveal};

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct ResultsStripProps {
    pub metrics: &'static [Metric],
}

/// Metric cards that fade in one after another once the strip scrolls
/// into view.
#[function_component(ResultsStrip)]
pub fn results_strip(props: &ResultsStripProps) -> Html {
    let strip_ref = use_node_ref();
    let revealed = use_reveal(strip_ref.clone());

    html! {
        <section ref={strip_ref} class="results-strip" aria-label="Results metrics">
            <div class="results-grid">
                { for props.metrics.iter().enumerate().map(|(i, m)| html! {
                    <div
                        key={m.label}
                        class={classes!("metric-card", reveal_classes(revealed))}
                        style={format!("transition-duration: {}ms;", stagger_duration_ms(i))}
                    >
                        <div class="metric-value">{m.value}</div>
                        <div class="metric-label">{m.label}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}
