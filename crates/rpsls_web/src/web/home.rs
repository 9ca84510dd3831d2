use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::ui_model::Page;

use super::app::PlayerContext;
use super::storage;

/// Name entry. A stored name skips the form and goes straight to the menu;
/// otherwise the flow stays here until a non-blank name is submitted.
#[component]
pub(super) fn HomePage() -> impl IntoView {
    let player = expect_context::<PlayerContext>();
    let navigate = use_navigate();
    let (draft, set_draft) = signal(String::new());

    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            if player.name.get().is_some() {
                navigate(Page::Game.path(), Default::default());
            }
        }
    });

    let submit = {
        let navigate = navigate.clone();
        move || {
            let draft = draft.get_untracked();
            let name = draft.trim();
            if name.is_empty() {
                // Nothing stored, nothing to advance to.
                return;
            }
            storage::store_player_name(name);
            player.name.set(Some(name.to_string()));
            navigate(Page::Game.path(), Default::default());
        }
    };
    let submit_click = submit.clone();

    view! {
        <main style="font-family: system-ui, sans-serif; padding: 18px; max-width: 480px; margin: 0 auto;">
            <h1 style="margin: 0 0 8px 0;">{Page::Home.title()}</h1>
            <p style="margin: 0 0 16px 0; color: #555;">
                "Enter your name to start playing."
            </p>
            <div style="display: flex; gap: 8px;">
                <input
                    type="text"
                    placeholder="Your name"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
                <button on:click=move |_| submit_click()>"Continue"</button>
            </div>
        </main>
    }
}
