use chrono::{Datelike, Local};
use log::warn;
use stylist::Style;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::fallback_image::LogoMark;
use crate::config::{use_site, Theme};
use crate::links::{directions_url, mailto_href, tel_href, whatsapp_href};

/// In-page anchor shown in the header navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub anchor: &'static str,
    pub label: &'static str,
}

fn theme_css(theme: &Theme) -> String {
    format!(
        r#"
        --accent: {accent};
        --cta: {cta};

        h2, h3, .brand-name, .pricing-price {{
            color: var(--accent);
        }}
        .top-bar, .results-strip, .tab.active {{
            background: var(--accent);
            color: #fff;
        }}
        .pricing-badge, .pricing-dot {{
            background: var(--accent);
        }}
        .hero-cta, .tutor-search-cta, .pricing-book, .contact-whatsapp, .floating-whatsapp {{
            background: var(--cta);
            color: #fff;
        }}

        .reveal-item {{
            opacity: 0;
            transform: translateY(0.5rem);
            transition-property: opacity, transform;
        }}
        .reveal-item.revealed {{
            opacity: 1;
            transform: translateY(0);
        }}
        .avatar-badge {{
            width: 56px;
            height: 56px;
            border-radius: 50%;
            overflow: hidden;
            display: grid;
            place-items: center;
        }}
        "#,
        accent = theme.accent,
        cta = theme.cta,
    )
}

fn theme_class(theme: &Theme) -> Option<Style> {
    match Style::new(theme_css(theme)) {
        Ok(style) => Some(style),
        Err(e) => {
            warn!("Theme style rejected, rendering unthemed: {}", e);
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub nav: &'static [NavLink],
    pub children: Children,
}

/// Shared shell around every page: contact bar, header, footer and the
/// floating chat button.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let site = use_site();
    let title = if site.meta_title.trim().is_empty() {
        site.brand().to_string()
    } else {
        site.meta_title.clone()
    };
    use_title(title);
    let theme = theme_class(&site.theme).map(|style| style.get_class_name().to_string());

    html! {
        <main class={classes!("site", theme)}>
            <TopBar />
            <SiteHeader nav={props.nav} />
            { for props.children.iter() }
            <Footer />
            <FloatingWhatsApp />
        </main>
    }
}

#[function_component(TopBar)]
fn top_bar() -> Html {
    let site = use_site();

    html! {
        <div class="top-bar">
            <div class="top-bar-content">
                <div class="top-bar-contacts">
                    <span>{"📞 "}<a href={tel_href(site.phone())}>{site.phone()}</a></span>
                    <span>{"📍 "}<a target="_blank" href={directions_url(site.address())}>{site.address()}</a></span>
                    <span>{"✉️ "}<a href={mailto_href(site.email())}>{site.email()}</a></span>
                </div>
                <div class="top-bar-actions">
                    <a class="top-bar-chat" target="_blank" href={whatsapp_href(site.whatsapp())}>
                        {"Chat on WhatsApp"}
                    </a>
                    <a class="top-bar-directions" target="_blank" href={directions_url(site.address())}>
                        {"Get Directions"}
                    </a>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SiteHeaderProps {
    nav: &'static [NavLink],
}

#[function_component(SiteHeader)]
fn site_header(props: &SiteHeaderProps) -> Html {
    let site = use_site();
    let (_, scroll_y) = use_window_scroll();

    html! {
        <header class={classes!("site-header", (scroll_y > 40.0).then(|| "scrolled"))}>
            <div class="site-header-content">
                <a href="/" class="brand">
                    {
                        match &site.logo {
                            Some(logo) => html! { <LogoMark src={logo.clone()} alt={site.brand().to_string()} /> },
                            None => html! {},
                        }
                    }
                    <div class="brand-text">
                        <div class="brand-name">{site.brand()}</div>
                        <div class="brand-tagline">{&site.tagline}</div>
                    </div>
                </a>
                <nav class="site-nav">
                    { for props.nav.iter().map(|link| html! {
                        <a href={format!("#{}", link.anchor)}>{link.label}</a>
                    }) }
                </nav>
            </div>
        </header>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let site = use_site();
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            {format!("© {} {}. Powered by Tech24.", year, site.brand())}
        </footer>
    }
}

#[function_component(FloatingWhatsApp)]
fn floating_whatsapp() -> Html {
    let site = use_site();

    html! {
        <a
            class="floating-whatsapp"
            target="_blank"
            aria-label="Chat on WhatsApp"
            href={whatsapp_href(site.whatsapp())}
        >
            <img src="/icons/whatsapp.svg" alt="WhatsApp" width="26" height="26" />
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_colours_are_consumed() {
        let css = theme_css(&Theme {
            accent: "#7A5C6A".to_string(),
            cta: "#25D366".to_string(),
        });
        assert!(css.contains("--accent: #7A5C6A;"));
        assert!(css.contains("--cta: #25D366;"));
        assert!(css.contains("color: var(--accent);"));
        assert!(css.contains("background: var(--accent);"));
        assert!(css.contains("background: var(--cta);"));
    }
}
