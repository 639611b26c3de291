use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionAnswer {
    pub question: &'static str,
    pub answer: &'static str,
}

fn disclosure(expanded: bool) -> (&'static str, &'static str) {
    if expanded {
        ("faq-entry expanded", "▾")
    } else {
        ("faq-entry", "▸")
    }
}

#[derive(Properties, PartialEq)]
struct FaqEntryProps {
    entry: QuestionAnswer,
}

#[function_component(FaqEntry)]
fn faq_entry(props: &FaqEntryProps) -> Html {
    let expanded = use_bool_toggle(false);
    let (class, marker) = disclosure(*expanded);

    let onclick = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.toggle())
    };

    html! {
        <article {class}>
            <h3>
                <button type="button" class="faq-entry-toggle" aria-expanded={(*expanded).to_string()} {onclick}>
                    <span class="faq-entry-marker" aria-hidden="true">{marker}</span>
                    {props.entry.question}
                </button>
            </h3>
            if *expanded {
                <p class="faq-entry-answer">{props.entry.answer}</p>
            }
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: &'static [QuestionAnswer],
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    html! {
        <section id="faq" class="faq-section">
            <h2>{"Frequently asked questions"}</h2>
            <div class="faq-grid">
                { for props.entries.iter().map(|qa| html! {
                    <FaqEntry key={qa.question} entry={qa.clone()} />
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disclosure_tracks_expansion() {
        assert_eq!(disclosure(false), ("faq-entry", "▸"));
        assert_eq!(disclosure(true), ("faq-entry expanded", "▾"));
    }
}
