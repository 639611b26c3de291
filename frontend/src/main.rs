use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod carousel;
mod config;
mod links;
mod reveal;
mod components {
    pub mod cards;
    pub mod contact;
    pub mod fallback_image;
    pub mod faq;
    pub mod hero;
    pub mod layout;
    pub mod results;
    pub mod tabs;
    pub mod testimonials;
}
mod pages {
    pub mod not_found;
    pub mod spa;
    pub mod tutoring;
}

use config::{SiteConfig, Variant};
use pages::{not_found::NotFound, spa::SpaPage, tutoring::TutoringPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => match Variant::current() {
            Variant::Tutoring => {
                info!("Rendering tutoring page");
                html! { <TutoringPage /> }
            }
            Variant::Spa => {
                info!("Rendering spa page");
                html! { <SpaPage /> }
            }
        },
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub site: Rc<SiteConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<SiteConfig>> context={props.site.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteConfig>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let site = Rc::new(SiteConfig::load());
    info!("Starting {} ({:?})", site.brand(), site.variant);
    yew::Renderer::<App>::with_props(AppProps { site }).render();
}
