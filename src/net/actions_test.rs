use super::*;

// =============================================================
// Policy-driven reconciliation
// =============================================================

#[test]
fn revalidate_policy_refetches_only_after_success() {
    assert!(needs_revalidate(CachePolicy::Revalidate, true));
    assert!(!needs_revalidate(CachePolicy::Revalidate, false));
}

#[test]
fn write_through_policy_resyncs_only_after_failure() {
    assert!(!needs_revalidate(CachePolicy::WriteThrough, true));
    assert!(needs_revalidate(CachePolicy::WriteThrough, false));
}

#[test]
fn every_mutation_reconciles_on_exactly_one_outcome() {
    for mutation in [Mutation::Save, Mutation::Delete, Mutation::Toggle] {
        let policy = mutation.cache_policy();
        assert_ne!(
            needs_revalidate(policy, true),
            needs_revalidate(policy, false),
            "{} must refetch on success or on failure, never both",
            mutation.label()
        );
    }
}
