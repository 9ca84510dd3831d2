//! Small shared view pieces.

use leptos::prelude::*;

use rpsls::model::ChoiceSet;
use rpsls::projection::Projection;

#[component]
pub(super) fn ErrorText(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|m| view! { <p style="color: red;">{m}</p> })}
    }
}

/// The choice table both match pages pick from: ID / Name / Play.
#[component]
pub(super) fn ChoiceTable(
    choices: ReadSignal<Projection<ChoiceSet>>,
    on_play: Callback<u32>,
    #[prop(into)] play_disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || !choices.get().data.is_empty()>
            <div style="margin-top: 14px;">
                <p style="margin: 0 0 6px 0; font-weight: 600;">"Pick your choice"</p>
                <table style="border-collapse: collapse; min-width: 300px;">
                    <thead>
                        <tr>
                            <th style="text-align: left; padding: 4px 10px;">"ID"</th>
                            <th style="text-align: left; padding: 4px 10px;">"Name"</th>
                            <th style="text-align: left; padding: 4px 10px;">"Play"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || choices.get().data.into_vec()
                            key=|choice| choice.id
                            children=move |choice| {
                                let id = choice.id;
                                view! {
                                    <tr>
                                        <td style="padding: 4px 10px;">{choice.id}</td>
                                        <td style="padding: 4px 10px;">{choice.name}</td>
                                        <td style="padding: 4px 10px;">
                                            <button
                                                prop:disabled=move || play_disabled.get()
                                                on:click=move |_| on_play.run(id)
                                            >
                                                "Play"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
