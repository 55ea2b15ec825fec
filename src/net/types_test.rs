use super::*;

// =============================================================
// StrategyStatus
// =============================================================

#[test]
fn status_serializes_to_lowercase_wire_strings() {
    assert_eq!(serde_json::to_string(&StrategyStatus::Active).unwrap(), "\"active\"");
    assert_eq!(serde_json::to_string(&StrategyStatus::Inactive).unwrap(), "\"inactive\"");
}

#[test]
fn status_deserializes_only_the_two_wire_values() {
    let active: StrategyStatus = serde_json::from_str("\"active\"").unwrap();
    let inactive: StrategyStatus = serde_json::from_str("\"inactive\"").unwrap();
    assert_eq!(active, StrategyStatus::Active);
    assert_eq!(inactive, StrategyStatus::Inactive);
    assert!(serde_json::from_str::<StrategyStatus>("\"paused\"").is_err());
    assert!(serde_json::from_str::<StrategyStatus>("\"ACTIVE\"").is_err());
}

#[test]
fn status_toggled_flips_both_ways() {
    assert_eq!(StrategyStatus::Active.toggled(), StrategyStatus::Inactive);
    assert_eq!(StrategyStatus::Inactive.toggled(), StrategyStatus::Active);
}

#[test]
fn status_as_str_matches_wire_strings() {
    assert_eq!(StrategyStatus::Active.as_str(), "active");
    assert_eq!(StrategyStatus::Inactive.as_str(), "inactive");
}

#[test]
fn status_is_active_only_for_active() {
    assert!(StrategyStatus::Active.is_active());
    assert!(!StrategyStatus::Inactive.is_active());
}

// =============================================================
// Strategy
// =============================================================

#[test]
fn strategy_deserializes_from_server_listing_shape() {
    let payload = serde_json::json!({
        "id": "a1b2c3d4",
        "name": "MA Cross",
        "description": "buy when MA5 crosses MA20",
        "code": "def signal(df): ...",
        "status": "active",
        "created_at": "2026-08-01T09:30:00"
    });
    let strategy: Strategy = serde_json::from_value(payload).unwrap();
    assert_eq!(strategy.id, "a1b2c3d4");
    assert_eq!(strategy.name, "MA Cross");
    assert_eq!(strategy.status, StrategyStatus::Active);
    assert_eq!(strategy.created_at, "2026-08-01T09:30:00");
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn generate_request_serializes_description_only() {
    let body = GenerateCodeRequest {
        description: "momentum breakout".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "description": "momentum breakout" })
    );
}

#[test]
fn create_request_carries_name_description_code() {
    let body = CreateStrategyRequest {
        name: "MA Cross".to_owned(),
        description: "crossover".to_owned(),
        code: "pass".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "name": "MA Cross", "description": "crossover", "code": "pass" })
    );
}

#[test]
fn update_status_request_serializes_enum_as_wire_string() {
    let body = UpdateStatusRequest {
        status: StrategyStatus::Inactive,
    };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "status": "inactive" }));
}
