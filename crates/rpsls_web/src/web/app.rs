use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use rpsls::endpoints::Endpoints;

use super::computer::ComputerPage;
use super::home::HomePage;
use super::menu::GamePage;
use super::opponent::OpponentPage;
use super::storage;

/// Identity, passed to pages explicitly instead of being read from ambient
/// storage at point of use. Loaded once at mount; written by the entry page.
#[derive(Clone, Copy)]
pub(super) struct PlayerContext {
    pub(super) name: RwSignal<Option<String>>,
}

impl PlayerContext {
    fn load() -> Self {
        Self {
            name: RwSignal::new(storage::load_player_name()),
        }
    }

    pub(super) fn display_name(&self) -> String {
        self.name.get().unwrap_or_else(|| "Unknown".to_string())
    }
}

/// The API origin for this session: stored override, else the compiled
/// default.
pub(super) fn use_endpoints() -> Endpoints {
    storage::load_api_base()
        .map(Endpoints::new)
        .unwrap_or_default()
}

#[component]
pub(super) fn App() -> impl IntoView {
    provide_context(PlayerContext::load());

    view! {
        <Router>
            <Routes fallback=|| view! { <p style="padding: 18px;">"Not found"</p> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/home") view=HomePage />
                <Route path=path!("/game") view=GamePage />
                <Route path=path!("/computer") view=ComputerPage />
                <Route path=path!("/opponent") view=OpponentPage />
            </Routes>
        </Router>
    }
}
