//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use studio_core::{StudioConfig, StudioPage};

use crate::layout::{SiteFooter, SiteHeader, Toaster};
use crate::pages::HomePage;
use crate::timer::spawn_toast_sweeper;

const CONFIG_JSON: &str = include_str!("../studio.json");

/// Build the page model from the embedded config, falling back to defaults
fn load_page() -> Option<(StudioConfig, StudioPage)> {
    let parsed = StudioConfig::from_json(CONFIG_JSON)
        .and_then(|config| StudioPage::new(&config).map(|page| (config, page)));

    match parsed {
        Ok(loaded) => Some(loaded),
        Err(e) => {
            leptos::logging::warn!("Invalid studio.json, using defaults: {e}");
            let config = StudioConfig::default();
            StudioPage::new(&config).ok().map(|page| (config, page))
        }
    }
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let Some((config, page)) = load_page() else {
        return view! { <p>"Failed to load page"</p> }.into_any();
    };

    let page = RwSignal::new(page);
    provide_context(page);
    provide_context(config);
    spawn_toast_sweeper(page);

    view! {
        <Router>
            <div class="flex flex-col min-h-screen">
                <SiteHeader />
                <main class="flex-1">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <SiteFooter />
            </div>
            <Toaster />
        </Router>
    }
    .into_any()
}
