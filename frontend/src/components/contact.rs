use yew::prelude::*;

use crate::config::use_site;
use crate::links::{directions_url, map_embed_url, tel_href, whatsapp_href};

#[derive(Properties, PartialEq)]
pub struct ContactBlockProps {
    pub heading: AttrValue,
    pub map_title: AttrValue,
}

/// Embedded map next to the address and the three contact actions.
#[function_component(ContactBlock)]
pub fn contact_block(props: &ContactBlockProps) -> Html {
    let site = use_site();

    html! {
        <section id="contact" class="contact">
            <div class="contact-grid">
                <div class="contact-map">
                    <iframe
                        title={props.map_title.clone()}
                        src={map_embed_url(site.address())}
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                    />
                </div>
                <div class="contact-info">
                    <h3>{props.heading.clone()}</h3>
                    <p>{format!("{} · {} · {}", site.address(), site.phone(), site.email())}</p>
                    <div class="contact-actions">
                        <a class="contact-whatsapp" target="_blank" href={whatsapp_href(site.whatsapp())}>
                            {"WhatsApp Us"}
                        </a>
                        <a class="contact-call" target="_blank" href={tel_href(site.phone())}>
                            {"Call Now"}
                        </a>
                        <a class="contact-directions" target="_blank" href={directions_url(site.address())}>
                            {"Get Directions"}
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
