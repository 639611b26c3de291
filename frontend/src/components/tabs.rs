use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::use_site;
use crate::links::whatsapp_href;

/// One tab and the items listed under it.
#[derive(Debug, Clone, PartialEq)]
pub struct TabGroup {
    pub key: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Properties, PartialEq)]
pub struct TabbedListProps {
    pub id: AttrValue,
    pub title: AttrValue,
    pub groups: &'static [TabGroup],
    pub item_hint: AttrValue,
}

/// Tab strip over `groups`; each item opens a WhatsApp chat.
#[function_component(TabbedList)]
pub fn tabbed_list(props: &TabbedListProps) -> Html {
    let site = use_site();
    let selected = use_state(|| 0usize);
    let chat = whatsapp_href(site.whatsapp());

    let items = props
        .groups
        .get(*selected)
        .map(|group| group.items)
        .unwrap_or_default();

    html! {
        <section id={props.id.clone()} class="tabbed-list">
            <div class="tabbed-list-header">
                <h2>{props.title.clone()}</h2>
                <div class="tab-strip">
                    { for props.groups.iter().enumerate().map(|(i, group)| {
                        let onclick = {
                            let selected = selected.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                selected.set(i);
                            })
                        };
                        html! {
                            <button
                                key={group.key}
                                class={classes!("tab", (i == *selected).then(|| "active"))}
                                {onclick}
                            >
                                {group.key}
                            </button>
                        }
                    }) }
                </div>
            </div>
            <div class="tab-items">
                { for items.iter().map(|item| html! {
                    <a key={*item} class="tab-item" target="_blank" href={chat.clone()}>
                        <span>{*item}</span>
                        <span class="tab-item-hint">{props.item_hint.clone()}</span>
                    </a>
                }) }
            </div>
        </section>
    }
}
