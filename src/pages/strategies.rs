//! Strategy workspace page: generate, review, save, toggle, delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the single screen of the client. It fetches the strategy listing
//! once on mount and drives every store operation from interaction events;
//! persistence state lives entirely in `StrategiesState`, the page holds
//! only transient input signals.

#[cfg(test)]
#[path = "strategies_test.rs"]
mod strategies_test;

use leptos::prelude::*;

use crate::components::strategy_card::StrategyCard;
use crate::net::actions;
use crate::net::types::StrategyStatus;
use crate::state::strategies::StrategiesState;

/// Generate is allowed only while no generation is in flight and the
/// description has content.
fn can_generate(generate_pending: bool, description: &str) -> bool {
    !generate_pending && !description.trim().is_empty()
}

/// Saving requires both a non-empty name and a non-empty generation buffer.
fn can_save(name: &str, code: &str) -> bool {
    !name.trim().is_empty() && !code.is_empty()
}

/// Single guard for the save dialog's button and its Enter handler.
///
/// The buffer stays staged until the save confirms, so the input checks
/// alone would pass while a save is in flight; the pending flag is what
/// blocks a duplicate submit.
fn can_submit_save(save_pending: bool, name: &str, code: &str) -> bool {
    !save_pending && can_save(name, code)
}

/// The strategy workspace page.
#[component]
pub fn StrategiesPage() -> impl IntoView {
    let state = expect_context::<RwSignal<StrategiesState>>();

    // Transient inputs; cleared after a successful save.
    let description = RwSignal::new(String::new());
    let save_name = RwSignal::new(String::new());
    let show_save = RwSignal::new(false);
    let delete_id = RwSignal::new(None::<String>);

    // One listing fetch on mount.
    let requested_list = RwSignal::new(false);
    Effect::new(move || {
        if requested_list.get() {
            return;
        }
        actions::fetch_strategies(state);
        requested_list.set(true);
    });

    // A successful save bumps `save_seq`; close the dialog and clear every
    // transient input when that lands.
    let seen_save_seq = RwSignal::new(0u64);
    Effect::new(move || {
        let seq = state.get().save_seq;
        if seq == seen_save_seq.get_untracked() {
            return;
        }
        seen_save_seq.set(seq);
        show_save.set(false);
        save_name.set(String::new());
        description.set(String::new());
    });

    let on_generate = move |_| {
        let text = description.get();
        if !can_generate(state.get().pending.generate, &text) {
            return;
        }
        actions::generate_strategy(state, text.trim().to_owned());
    };

    let on_copy = move |_| {
        #[cfg(feature = "hydrate")]
        copy_to_clipboard(state.get_untracked().generated_code);
    };

    let on_discard = move |_| actions::clear_generated_code(state);

    let on_save_open = move |_| {
        show_save.set(true);
        save_name.set(String::new());
    };

    let on_save_cancel = Callback::new(move |()| show_save.set(false));
    let on_delete_cancel = Callback::new(move |()| delete_id.set(None));
    let on_delete_request = Callback::new(move |id: String| delete_id.set(Some(id)));
    let on_toggle = Callback::new(move |(id, status): (String, StrategyStatus)| {
        actions::toggle_strategy(state, id, status);
    });

    view! {
        <div class="strategies-page">
            <header class="strategies-page__header toolbar">
                <span class="toolbar__title">"Quant Strategies"</span>
                <span class="toolbar__spacer"></span>
                <Show when=move || state.get().pending.list>
                    <span class="toolbar__loading">"Refreshing..."</span>
                </Show>
            </header>

            <section class="strategies-page__generate">
                <label class="generate__label">
                    "Describe a strategy"
                    <textarea
                        class="generate__input"
                        placeholder="e.g. buy when MA5 crosses above MA20, sell on the cross back"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button
                    class="btn btn--primary generate__submit"
                    prop:disabled=move || !can_generate(state.get().pending.generate, &description.get())
                    on:click=on_generate
                >
                    {move || if state.get().pending.generate { "Generating..." } else { "Generate" }}
                </button>
            </section>

            <Show when=move || !state.get().generated_code.is_empty()>
                <section class="strategies-page__preview">
                    <h2>"Generated Code"</h2>
                    <pre class="preview__code">
                        <code>{move || state.get().generated_code}</code>
                    </pre>
                    <div class="preview__actions">
                        <button class="btn" on:click=on_copy>
                            "Copy"
                        </button>
                        <button class="btn" on:click=on_discard>
                            "Discard"
                        </button>
                        <button class="btn btn--primary" on:click=on_save_open>
                            "Save Strategy"
                        </button>
                    </div>
                </section>
            </Show>

            <section class="strategies-page__list">
                <h2>"Saved Strategies"</h2>
                <Show
                    when=move || !(state.get().pending.list && state.get().strategies.is_empty())
                    fallback=move || view! { <p>"Loading strategies..."</p> }
                >
                    <Show
                        when=move || !state.get().strategies.is_empty()
                        fallback=move || view! { <p class="strategies-page__empty">"No saved strategies yet."</p> }
                    >
                        <div class="strategies-page__cards">
                            {move || {
                                state
                                    .get()
                                    .strategies
                                    .into_iter()
                                    .map(|s| {
                                        view! {
                                            <StrategyCard
                                                id=s.id
                                                name=s.name
                                                description=s.description
                                                code=s.code
                                                status=s.status
                                                created_at=s.created_at
                                                on_toggle=on_toggle
                                                on_delete=on_delete_request
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </section>

            <Show when=move || show_save.get()>
                <SaveStrategyDialog
                    name=save_name
                    description=description
                    on_cancel=on_save_cancel
                    state=state
                />
            </Show>
            <Show when=move || delete_id.get().is_some()>
                <DeleteStrategyDialog strategy_id=delete_id on_cancel=on_delete_cancel state=state />
            </Show>
        </div>
    }
}

/// Modal dialog naming and persisting the staged generation buffer.
#[component]
fn SaveStrategyDialog(
    name: RwSignal<String>,
    description: RwSignal<String>,
    on_cancel: Callback<()>,
    state: RwSignal<StrategiesState>,
) -> impl IntoView {
    // The dialog stays open on failure; the success path closes it via the
    // page's `save_seq` effect.
    let submit = Callback::new(move |()| {
        let strategy_name = name.get_untracked();
        let snapshot = state.get_untracked();
        let code = snapshot.generated_code;
        if !can_submit_save(snapshot.pending.save, &strategy_name, &code) {
            return;
        }
        actions::save_strategy(
            state,
            strategy_name.trim().to_owned(),
            description.get_untracked().trim().to_owned(),
            code,
        );
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Save Strategy"</h2>
                <label class="dialog__label">
                    "Strategy Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        prop:disabled=move || {
                            !can_submit_save(state.get().pending.save, &name.get(), &state.get().generated_code)
                        }
                        on:click=move |_| submit.run(())
                    >
                        {move || if state.get().pending.save { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog shown before any strategy delete is issued.
#[component]
fn DeleteStrategyDialog(
    strategy_id: RwSignal<Option<String>>,
    on_cancel: Callback<()>,
    state: RwSignal<StrategiesState>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let Some(id) = strategy_id.get_untracked() else {
            return;
        };
        actions::delete_strategy(state, id);
        on_cancel.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Strategy"</h2>
                <p class="dialog__danger">"This will permanently delete this strategy."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn copy_to_clipboard(text: String) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let clipboard = window.navigator().clipboard();
    leptos::task::spawn_local(async move {
        let _ = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await;
    });
}
