//! Store operations: each performs one HTTP request against the quant API
//! and applies the outcome to the shared [`StrategiesState`].
//!
//! DESIGN
//! ======
//! The cache is reconciled per the [`CachePolicy`] each mutation declares:
//! revalidating mutations refetch the full listing after success and leave
//! the cache untouched on failure; the write-through mutation applies its
//! change locally first, then rolls back and resyncs if the server rejects
//! it. One generic runner consumes the policy so no operation is
//! special-cased by name. Failures are logged and otherwise swallowed; the
//! view only ever observes pending flags and last-known-good state.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use leptos::prelude::*;

use crate::net::types::StrategyStatus;
use crate::state::strategies::StrategiesState;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::strategies::{CachePolicy, Mutation};

#[cfg(any(test, feature = "hydrate"))]
fn needs_revalidate(policy: CachePolicy, succeeded: bool) -> bool {
    match policy {
        CachePolicy::Revalidate => succeeded,
        CachePolicy::WriteThrough => !succeeded,
    }
}

/// Refetch the strategy listing and replace the cache wholesale.
///
/// The list pending flag clears regardless of outcome; a failed fetch
/// leaves the cache stale but consistent.
#[cfg(feature = "hydrate")]
async fn revalidate(state: RwSignal<StrategiesState>) {
    state.update(|s| s.pending.list = true);
    match super::quant_api::list_strategies().await {
        Ok(items) => state.update(|s| s.replace_strategies(items)),
        Err(err) => log::error!("{err}"),
    }
    state.update(|s| s.pending.list = false);
}

/// Run one mutating request under its declared cache policy.
///
/// `undo` reverses any optimistic local write; it is only applied when a
/// write-through mutation fails, immediately before the corrective resync,
/// so the cache never shows an unconfirmed value while the refetch is in
/// flight (or if that refetch itself fails).
#[cfg(feature = "hydrate")]
async fn run_mutation<Req, Undo>(
    state: RwSignal<StrategiesState>,
    mutation: Mutation,
    request: Req,
    undo: Undo,
) -> bool
where
    Req: Future<Output = Result<(), String>>,
    Undo: FnOnce(&mut StrategiesState),
{
    state.update(|s| s.pending.begin(mutation));
    let outcome = request.await;
    state.update(|s| s.pending.finish(mutation));

    if let Err(err) = &outcome {
        log::error!("{}: {err}", mutation.label());
    }
    let succeeded = outcome.is_ok();
    if !succeeded && mutation.cache_policy() == CachePolicy::WriteThrough {
        state.update(undo);
    }
    if needs_revalidate(mutation.cache_policy(), succeeded) {
        revalidate(state).await;
    }
    succeeded
}

/// Fetch the full strategy collection and replace the cache verbatim.
pub fn fetch_strategies(state: RwSignal<StrategiesState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        revalidate(state).await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = state;
}

/// Request generated code for `description` and stage it in the generation
/// buffer. Any unsaved previous buffer is overwritten on success; on failure
/// the buffer is left unchanged.
pub fn generate_strategy(state: RwSignal<StrategiesState>, description: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        state.update(|s| s.pending.generate = true);
        match super::quant_api::generate_code(&description).await {
            Ok(code) => state.update(|s| s.set_generated_code(code)),
            Err(err) => log::error!("{err}"),
        }
        state.update(|s| s.pending.generate = false);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (state, description);
}

/// Persist a new strategy, then reconcile the cache by refetching.
///
/// No optimistic insert: the server assigns `id` and `created_at`, and
/// guessing them client-side is exactly what the revalidate policy avoids.
/// On success the generation buffer is cleared and `save_seq` bumps so the
/// view can close its dialog.
pub fn save_strategy(state: RwSignal<StrategiesState>, name: String, description: String, code: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let request = super::quant_api::create_strategy(&name, &description, &code);
        if run_mutation(state, Mutation::Save, request, |_| {}).await {
            state.update(|s| {
                s.clear_generated_code();
                s.save_seq += 1;
            });
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (state, name, description, code);
}

/// Delete a strategy, then reconcile the cache by refetching.
///
/// A failed delete leaves the item visible, which is correct: it was not
/// removed server-side.
pub fn delete_strategy(state: RwSignal<StrategiesState>, id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let request = super::quant_api::delete_strategy(&id);
        run_mutation(state, Mutation::Delete, request, |_| {}).await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (state, id);
}

/// Flip one strategy's status, optimistically rewriting the cached entry
/// before the server confirms. The prior value is recorded so a rejected
/// request rolls the entry back before the corrective resync.
pub fn toggle_strategy(state: RwSignal<StrategiesState>, id: String, new_status: StrategyStatus) {
    #[cfg(feature = "hydrate")]
    {
        let Some(prior) = state.try_update(|s| s.apply_status(&id, new_status)).flatten() else {
            log::warn!("status toggle for unknown strategy {id}");
            return;
        };
        leptos::task::spawn_local(async move {
            let request = super::quant_api::update_status(&id, new_status);
            let undo_id = id.clone();
            run_mutation(state, Mutation::Toggle, request, move |s| {
                s.restore_status(&undo_id, prior);
            })
            .await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (state, id, new_status);
}

/// Empty the generation buffer. Synchronous; issues no network call.
pub fn clear_generated_code(state: RwSignal<StrategiesState>) {
    state.update(|s| s.clear_generated_code());
}
