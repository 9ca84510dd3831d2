use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::ui_model::{GameMode, Page};

use super::results::ResultsPanel;

/// Mode select, with the shared results panel alongside.
#[component]
pub(super) fn GamePage() -> impl IntoView {
    let navigate = use_navigate();
    // The menu never plays a round itself, so its panel refreshes only on
    // entry.
    let (refresh, _set_refresh) = signal(0u64);

    view! {
        <div style="font-family: system-ui, sans-serif; display: flex; gap: 24px; padding: 18px; align-items: flex-start;">
            <div style="flex: 1;">
                <h1 style="margin: 0 0 16px 0;">{Page::Game.title()}</h1>
                <div style="display: flex; flex-direction: column; gap: 10px; max-width: 250px;">
                    {GameMode::all()
                        .iter()
                        .map(|&mode| {
                            let navigate = navigate.clone();
                            view! {
                                <button on:click=move |_| navigate(mode.page().path(), Default::default())>
                                    {mode.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div style="width: 400px; border-left: 1px solid #ccc; padding-left: 16px;">
                <ResultsPanel refresh=refresh />
            </div>
        </div>
    }
}
