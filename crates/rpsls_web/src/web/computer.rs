use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use rpsls::model::{ChoiceSet, PlayResult};
use rpsls::projection::Projection;
use rpsls::window::{TrailingWindow, RECENT_WINDOW};

use crate::ui_model::Page;

use super::api;
use super::app::{use_endpoints, PlayerContext};
use super::results::ResultsPanel;
use super::shell::{ChoiceTable, ErrorText};

/// Solo play against the server-chosen opponent.
#[component]
pub(super) fn ComputerPage() -> impl IntoView {
    let player = expect_context::<PlayerContext>();
    let navigate = use_navigate();

    let (choices, set_choices) = signal(Projection::<ChoiceSet>::default());
    let (history, set_history) = signal(TrailingWindow::<PlayResult>::new(RECENT_WINDOW));
    let (refresh, set_refresh) = signal(0u64);

    let load_choices = move |_| {
        let api = use_endpoints();
        set_choices.try_update(|p| p.begin());
        spawn_local(async move {
            match api::fetch_choices(&api).await {
                Ok(list) => {
                    set_choices.try_update(|p| p.succeed(ChoiceSet::new(list)));
                }
                Err(e) => {
                    log::error!("failed to load choices: {e}");
                    set_choices.try_update(|p| p.fail("Failed to load choices"));
                }
            }
        });
    };

    let play_choice = Callback::new(move |choice_id: u32| {
        let api = use_endpoints();
        let name = player.display_name();
        spawn_local(async move {
            match api::play(&api, choice_id, &name).await {
                Ok(result) => {
                    set_history.try_update(|h| h.push(result));
                    // Tell the results panel a round just landed.
                    set_refresh.try_update(|n| *n += 1);
                }
                Err(e) => log::error!("play failed: {e}"),
            }
        });
    });

    view! {
        <div style="font-family: system-ui, sans-serif; display: flex; gap: 24px; padding: 18px; align-items: flex-start;">
            <div style="flex: 1;">
                <h2 style="margin: 0 0 12px 0;">
                    {Page::Computer.title()}" as "{move || player.display_name()}
                </h2>

                <div style="display: flex; gap: 10px; margin-bottom: 12px;">
                    <button on:click={
                        let navigate = navigate.clone();
                        move |_| navigate("/", Default::default())
                    }>
                        "Back to Game Page"
                    </button>
                    <button on:click=load_choices>"Load Choices"</button>
                </div>

                <Show when=move || choices.get().loading>
                    <p>"Loading..."</p>
                </Show>
                <ErrorText message=Signal::derive(move || choices.get().error) />

                <ChoiceTable
                    choices=choices
                    on_play=play_choice
                    play_disabled=Signal::derive(|| false)
                />

                <Show when=move || !history.get().is_empty()>
                    <div style="margin-top: 14px;">
                        <p style="margin: 0 0 6px 0; font-weight: 600;">"Last 5 Results"</p>
                        <table style="border-collapse: collapse; min-width: 300px;">
                            <thead>
                                <tr>
                                    <th style="text-align: left; padding: 4px 10px;">"Player Choice"</th>
                                    <th style="text-align: left; padding: 4px 10px;">"Computer Choice"</th>
                                    <th style="text-align: left; padding: 4px 10px;">"Result"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || {
                                        history.get().as_slice().to_vec().into_iter().enumerate()
                                    }
                                    key=|(i, _)| *i
                                    children=move |(_, play)| {
                                        let catalog = move || choices.get().data;
                                        view! {
                                            <tr>
                                                <td style="padding: 4px 10px;">
                                                    {move || catalog().name_of(play.player)}
                                                </td>
                                                <td style="padding: 4px 10px;">
                                                    {move || catalog().name_of(play.computer)}
                                                </td>
                                                <td style="padding: 4px 10px;">{play.results.clone()}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>

            <div style="width: 400px;">
                <ResultsPanel refresh=refresh />
            </div>
        </div>
    }
}
