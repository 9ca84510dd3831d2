use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use rpsls::model::{selected_player, ScoreRecord};
use rpsls::projection::Projection;

use super::api;
use super::app::use_endpoints;

/// Recent results: the global leaderboard plus the selected player's, with
/// a destructive reset for the latter.
///
/// `refresh` is a counter owned by the embedding page; any change re-runs
/// the global fetch, and the per-player fetch follows the derived name.
/// Completions write through `try_*` so a response landing after the page
/// is gone is dropped on the floor.
#[component]
pub(super) fn ResultsPanel(refresh: ReadSignal<u64>) -> impl IntoView {
    let (global, set_global) = signal(Projection::<Vec<ScoreRecord>>::default());
    let (player_scores, set_player_scores) = signal(Projection::<Vec<ScoreRecord>>::default());
    // Name on the most recent global record; drives the second table.
    let (selected, set_selected) = signal(String::new());

    let fetch_global = move || {
        let api = use_endpoints();
        set_global.try_update(|p| p.begin());
        spawn_local(async move {
            match api::fetch_recent_results(&api).await {
                Ok(mut records) => {
                    records.truncate(10);
                    let name = selected_player(&records).unwrap_or_default().to_string();
                    set_global.try_update(|p| p.succeed(records));
                    // Only a changed name should re-trigger the per-player
                    // table.
                    if selected.try_get_untracked() != Some(name.clone()) {
                        set_selected.try_set(name);
                    }
                }
                Err(e) => {
                    log::error!("failed to load scores: {e}");
                    set_global.try_update(|p| p.fail("Failed to load scores"));
                }
            }
        });
    };

    let fetch_player = move |name: String| {
        if name.is_empty() {
            set_player_scores.try_update(|p| p.succeed(Vec::new()));
            return;
        }
        let api = use_endpoints();
        set_player_scores.try_update(|p| p.begin());
        spawn_local(async move {
            match api::fetch_recent_results_for(&api, &name).await {
                Ok(mut records) => {
                    records.truncate(10);
                    set_player_scores.try_update(|p| p.succeed(records));
                }
                Err(e) => {
                    log::error!("failed to load player scores: {e}");
                    set_player_scores.try_update(|p| p.fail("Failed to load player scores"));
                }
            }
        });
    };

    // Initial load, and every refresh bump, re-run the global fetch.
    Effect::new(move |_| {
        refresh.track();
        fetch_global();
    });

    // The per-player table follows the derived name and the counter.
    Effect::new(move |_| {
        refresh.track();
        fetch_player(selected.get());
    });

    let reset_selected = move |_| {
        let api = use_endpoints();
        let name = selected.get_untracked();
        spawn_local(async move {
            if let Err(e) = api::reset_player(&api, &name).await {
                log::error!("reset failed: {e}");
            }
            // Re-run both fetches unconditionally so the view reflects the
            // deletion.
            fetch_global();
            fetch_player(name);
        });
    };

    view! {
        <div>
            <ScoreTable
                title=Signal::derive(|| "Recent Results".to_string())
                scores=global
            />
            <ScoreTable
                title=Signal::derive(move || {
                    let name = selected.get();
                    let name = if name.is_empty() { "None selected".to_string() } else { name };
                    format!("Recent Results for Player: {name}")
                })
                scores=player_scores
            />
            <div style="display: flex; justify-content: center; margin-top: 10px;">
                <button on:click=reset_selected>"Refresh Tables"</button>
            </div>
        </div>
    }
}

#[component]
fn ScoreTable(
    #[prop(into)] title: Signal<String>,
    scores: ReadSignal<Projection<Vec<ScoreRecord>>>,
) -> impl IntoView {
    view! {
        <div style="margin-bottom: 16px;">
            <h3 style="margin: 0 0 6px 0;">{move || title.get()}</h3>
            <Show when=move || scores.get().loading>
                <p>"Loading..."</p>
            </Show>
            {move || scores.get().error.map(|e| view! { <p style="color: red;">{e}</p> })}
            <Show when=move || scores.get().ready()>
                <table style="border-collapse: collapse; width: 100%;">
                    <thead>
                        <tr>
                            <th style="text-align: left; padding: 4px 10px;">"Player"</th>
                            <th style="text-align: left; padding: 4px 10px;">"Result"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || scores.get().data.is_empty()>
                            <tr>
                                <td colspan="2" style="padding: 4px 10px; text-align: center;">
                                    "No results"
                                </td>
                            </tr>
                        </Show>
                        <For
                            each=move || scores.get().data.into_iter().enumerate()
                            key=|(i, _)| *i
                            children=|(_, record)| {
                                view! {
                                    <tr>
                                        <td style="padding: 4px 10px;">{record.player_name}</td>
                                        <td style="padding: 4px 10px;">{record.result}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
