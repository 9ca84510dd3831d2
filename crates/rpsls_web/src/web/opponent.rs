use std::cell::RefCell;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use rpsls::live::{LiveEffect, LiveMatch, LivePhase};
use rpsls::model::{ChoiceSet, RoundRecord};
use rpsls::projection::Projection;
use rpsls::protocol::ServerEvent;

use crate::ui_model::Page;

use super::api;
use super::app::{use_endpoints, PlayerContext};
use super::hub::{HubConnection, HubHandlers};
use super::results::ResultsPanel;
use super::shell::ChoiceTable;

thread_local! {
    // The socket handle is not Send/Sync, so it cannot be captured by view
    // closures; it lives beside the reactive graph instead.
    static HUB: RefCell<Option<HubConnection>> = RefCell::new(None);
}

fn drop_hub() {
    HUB.with(|hub| {
        if let Some(conn) = hub.borrow_mut().take() {
            conn.stop();
        }
    });
}

/// Live play against a real opponent over the game hub.
///
/// The rules live in [`LiveMatch`]; this page forwards actions and hub
/// events into it and mirrors the machine back into signals after every
/// poke.
#[component]
pub(super) fn OpponentPage() -> impl IntoView {
    let player = expect_context::<PlayerContext>();
    let navigate = use_navigate();

    let machine = StoredValue::new(LiveMatch::new());

    let (phase, set_phase) = signal(LivePhase::Disconnected);
    let (status, set_status) = signal("Not connected".to_string());
    let (round_status, set_round_status) = signal(None::<String>);
    let (pending_move, set_pending_move) = signal(None::<u32>);
    let (rounds, set_rounds) = signal(Vec::<RoundRecord>::new());
    let (choices, set_choices) = signal(Projection::<ChoiceSet>::default());
    let (refresh, set_refresh) = signal(0u64);

    let sync_ui = move || {
        machine.try_with_value(|m| {
            set_phase.try_set(m.phase());
            set_status.try_set(m.status().to_string());
            set_round_status.try_set(m.round_status().map(str::to_string));
            set_pending_move.try_set(m.pending_move());
            set_rounds.try_set(m.rounds().as_slice().to_vec());
        });
    };

    let load_choices = move || {
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

    let apply_effects = move |effects: Vec<LiveEffect>| {
        for effect in effects {
            match effect {
                LiveEffect::ReloadChoices => load_choices(),
                LiveEffect::BumpRefresh => {
                    set_refresh.try_update(|n| *n += 1);
                }
            }
        }
    };

    let join_game = move |_| {
        let joined = machine.try_update_value(|m| m.join()).unwrap_or(false);
        if !joined {
            return;
        }
        sync_ui();

        let handlers = HubHandlers {
            on_open: Box::new(move || {
                machine.try_update_value(|m| m.opened());
                sync_ui();
            }),
            on_event: Box::new(move |event: ServerEvent| {
                let effects = machine.try_update_value(|m| m.on_event(event));
                sync_ui();
                apply_effects(effects.unwrap_or_default());
            }),
            on_handshake_error: Box::new(move |e| {
                log::error!("hub: {e}");
                drop_hub();
                machine.try_update_value(|m| m.handshake_failed());
                sync_ui();
            }),
        };

        let api = use_endpoints();
        match HubConnection::connect(api.game_hub(), handlers) {
            Ok(conn) => HUB.with(|hub| *hub.borrow_mut() = Some(conn)),
            Err(e) => {
                log::error!("hub: {e}");
                machine.try_update_value(|m| m.handshake_failed());
                sync_ui();
            }
        }
    };

    let play_choice = Callback::new(move |choice_id: u32| {
        let name = player.display_name();
        let command = machine
            .try_update_value(|m| m.send_move(choice_id, &name))
            .flatten();
        let Some(command) = command else { return };
        sync_ui();
        HUB.with(|hub| {
            if let Some(conn) = hub.borrow().as_ref() {
                if let Err(e) = conn.send(&command) {
                    log::error!("failed to send move: {e}");
                }
            }
        });
    });

    let return_to_main = {
        let navigate = navigate.clone();
        move |_| {
            drop_hub();
            machine.try_update_value(|m| m.leave());
            sync_ui();
            set_choices.try_set(Projection::default());
            navigate("/", Default::default());
        }
    };

    // Leaving the page by any route tears the channel down with it.
    on_cleanup(drop_hub);

    view! {
        <div style="font-family: system-ui, sans-serif; display: flex; gap: 24px; padding: 18px; align-items: flex-start;">
            <div style="flex: 1;">
                <h2 style="margin: 0 0 12px 0;">
                    {Page::Opponent.title()}" as "{move || player.display_name()}
                </h2>

                <div style="display: flex; gap: 10px; margin-bottom: 12px;">
                    <button on:click=return_to_main>"Return to Game Page"</button>
                    <Show when=move || phase.get() == LivePhase::Disconnected>
                        <button on:click=join_game>"Join Game"</button>
                    </Show>
                </div>

                <p style="margin: 6px 0;">{move || status.get()}</p>
                {move || {
                    round_status
                        .get()
                        .map(|s| view! { <p style="margin: 6px 0; color: green;">{s}</p> })
                }}

                <Show when=move || choices.get().loading>
                    <p>"Loading..."</p>
                </Show>

                <ChoiceTable
                    choices=choices
                    on_play=play_choice
                    play_disabled=Signal::derive(move || pending_move.get().is_some())
                />

                <Show when=move || !rounds.get().is_empty()>
                    <div style="margin-top: 14px;">
                        <p style="margin: 0 0 6px 0; font-weight: 600;">"Last 5 Rounds"</p>
                        <table style="border-collapse: collapse; min-width: 300px;">
                            <thead>
                                <tr>
                                    <th style="text-align: left; padding: 4px 10px;">"Player Choice"</th>
                                    <th style="text-align: left; padding: 4px 10px;">"Opponent Choice"</th>
                                    <th style="text-align: left; padding: 4px 10px;">"Result"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || rounds.get().into_iter().enumerate()
                                    key=|(i, _)| *i
                                    children=move |(_, round)| {
                                        let catalog = move || choices.get().data;
                                        view! {
                                            <tr>
                                                <td style="padding: 4px 10px;">
                                                    {move || catalog().name_of(round.player_choice)}
                                                </td>
                                                <td style="padding: 4px 10px;">
                                                    {move || catalog().name_of_opt(round.opponent_choice)}
                                                </td>
                                                <td style="padding: 4px 10px;">{round.result.clone()}</td>
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
