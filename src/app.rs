//! Root application shell.
//!
//! Provides the shared strategy state as context so the page tree and any
//! future sibling views read and mutate one store.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::strategies::StrategiesPage;
use crate::state::strategies::StrategiesState;

/// Application root: shared state context plus the strategy workspace.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(StrategiesState::default()));

    view! {
        <Title text="Quant Strategies" />
        <StrategiesPage />
    }
}
