//! Card component for one saved strategy in the workspace list.
//!
//! DESIGN
//! ======
//! The card renders cached server state only; both controls delegate to the
//! page through callbacks so the card never talks to the store itself.

#[cfg(test)]
#[path = "strategy_card_test.rs"]
mod strategy_card_test;

use leptos::prelude::*;

use crate::net::types::StrategyStatus;

/// Button label for the status toggle control.
fn toggle_label(status: StrategyStatus) -> &'static str {
    if status.is_active() { "Deactivate" } else { "Activate" }
}

/// Date portion of a server ISO 8601 timestamp, for compact display.
fn created_date(created_at: &str) -> &str {
    created_at.get(..10).unwrap_or(created_at)
}

/// A card showing one strategy with status toggle and delete controls.
#[component]
pub fn StrategyCard(
    id: String,
    name: String,
    description: String,
    code: String,
    status: StrategyStatus,
    created_at: String,
    on_toggle: Callback<(String, StrategyStatus)>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let toggle_id = id.clone();
    let delete_id = id;
    let inactive = !status.is_active();

    view! {
        <div class="strategy-card" class:strategy-card--inactive=inactive>
            <div class="strategy-card__header">
                <span class="strategy-card__name">{name}</span>
                <span class="strategy-card__status">{status.as_str()}</span>
            </div>
            <p class="strategy-card__description">{description}</p>
            <details class="strategy-card__code">
                <summary>"Code"</summary>
                <pre class="strategy-card__code-block">
                    <code>{code}</code>
                </pre>
            </details>
            <div class="strategy-card__footer">
                <span class="strategy-card__created">{created_date(&created_at).to_owned()}</span>
                <button
                    class="btn strategy-card__toggle"
                    on:click=move |_| on_toggle.run((toggle_id.clone(), status.toggled()))
                >
                    {toggle_label(status)}
                </button>
                <button
                    class="btn btn--danger strategy-card__delete"
                    on:click=move |_| on_delete.run(delete_id.clone())
                    title="Delete strategy"
                    aria-label="Delete strategy"
                >
                    "✕"
                </button>
            </div>
        </div>
    }
}
