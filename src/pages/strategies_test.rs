use super::*;

// =============================================================
// Generate gating
// =============================================================

#[test]
fn can_generate_requires_a_description() {
    assert!(!can_generate(false, ""));
    assert!(!can_generate(false, "   \n\t"));
    assert!(can_generate(false, "buy when MA5 crosses MA20"));
}

#[test]
fn can_generate_blocks_while_a_generation_is_pending() {
    assert!(!can_generate(true, "momentum breakout"));
}

#[test]
fn can_generate_is_independent_of_other_pending_operations() {
    // Only the generate flag gates the button; a listing refresh in flight
    // must not disable generation.
    let pending = crate::state::strategies::PendingOps {
        list: true,
        ..Default::default()
    };
    assert!(can_generate(pending.generate, "mean reversion on RSI"));
}

// =============================================================
// Save gating
// =============================================================

#[test]
fn can_save_requires_name_and_staged_code() {
    assert!(can_save("MA Cross", "def signal(df): ..."));
    assert!(!can_save("", "def signal(df): ..."));
    assert!(!can_save("   ", "def signal(df): ..."));
    assert!(!can_save("MA Cross", ""));
    assert!(!can_save("", ""));
}

#[test]
fn can_submit_save_passes_valid_input_when_idle() {
    assert!(can_submit_save(false, "MA Cross", "def signal(df): ..."));
    assert!(!can_submit_save(false, "", "def signal(df): ..."));
    assert!(!can_submit_save(false, "MA Cross", ""));
}

#[test]
fn can_submit_save_blocks_resubmits_while_a_save_is_in_flight() {
    // The buffer is only cleared once the save confirms, so the input
    // checks still pass mid-flight; repeated Enter presses must not issue
    // a second create for the same payload.
    assert!(can_save("MA Cross", "def signal(df): ..."));
    assert!(!can_submit_save(true, "MA Cross", "def signal(df): ..."));
}
