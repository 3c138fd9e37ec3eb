use yew::prelude::*;
use yew_router::prelude::*;
use log::{debug, info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

mod config;
mod analytics;
mod diagram;
mod modal;
mod components {
    pub mod counter;
    pub mod footer;
    pub mod header;
    pub mod reveal;
    pub mod scheduler_modal;
}
mod sections {
    pub mod about;
    pub mod faq;
    pub mod final_cta;
    pub mod hero;
    pub mod integrations;
    pub mod process;
    pub mod stats;
    pub mod testimonials;
    pub mod why;
}
mod pages {
    pub mod landing;
    pub mod termsprivacy;
}

use analytics::AnalyticsBridge;
use components::{footer::Footer, header::Header};
use pages::{
    landing::{Landing, NotFound},
    termsprivacy::{PrivacyPolicy, TermsOfService},
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


/// Element id named by a URL fragment, if any.
fn hash_target(hash: &str) -> Option<String> {
    let raw = hash.trim_start_matches('#');
    if raw.is_empty() {
        return None;
    }
    let id = urlencoding::decode(raw).map(|s| s.into_owned()).unwrap_or_else(|_| raw.to_string());
    Some(id)
}

/// After every navigation, smooth-scrolls to the fragment target once the
/// new page has painted.
#[function_component(HashScroll)]
fn hash_scroll() -> Html {
    let location = use_location();
    let key = location
        .as_ref()
        .map(|l| (l.path().to_string(), l.hash().to_string()))
        .unwrap_or_default();

    use_effect_with_deps(
        move |(_, hash): &(String, String)| {
            let window = web_sys::window();
            let mut pending: Option<(i32, Closure<dyn FnMut()>)> = None;

            if let (Some(window), Some(id)) = (window.clone(), hash_target(hash)) {
                let frame = Closure::wrap(Box::new(move || {
                    let target = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.get_element_by_id(&id));
                    match target {
                        Some(el) => {
                            let mut opts = ScrollIntoViewOptions::new();
                            opts.behavior(ScrollBehavior::Smooth);
                            opts.block(ScrollLogicalPosition::Start);
                            el.scroll_into_view_with_scroll_into_view_options(&opts);
                        }
                        None => debug!("no element for #{}", id),
                    }
                }) as Box<dyn FnMut()>);

                if let Ok(handle) = window.request_animation_frame(frame.as_ref().unchecked_ref()) {
                    pending = Some((handle, frame));
                }
            }

            move || {
                if let (Some(window), Some((handle, _frame))) = (window, pending) {
                    let _ = window.cancel_animation_frame(handle);
                }
            }
        },
        key,
    );

    html! {}
}

/// Everything inside the router: needs the current route for the header.
#[function_component(Shell)]
fn shell() -> Html {
    let route = use_route::<Route>();
    let on_home = matches!(route, Some(Route::Home) | None);

    html! {
        <>
            <Header show_nav={on_home} />
            <Switch<Route> render={switch} />
            <Footer />
            <AnalyticsBridge />
            <HashScroll />
        </>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Shell />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting {} site at {}", config::BRAND, config::get_site_url());
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fragment_has_no_target() {
        assert_eq!(hash_target(""), None);
        assert_eq!(hash_target("#"), None);
    }

    #[test]
    fn fragment_names_the_section() {
        assert_eq!(hash_target("#faq"), Some("faq".to_string()));
        assert_eq!(hash_target("#why%20optimion"), Some("why optimion".to_string()));
    }
}
