use super::*;

#[test]
fn collection_endpoints_are_rooted_at_the_quant_base_path() {
    assert_eq!(STRATEGIES_ENDPOINT, "/api/v1/quant/strategies");
    assert_eq!(GENERATE_ENDPOINT, "/api/v1/quant/strategies/generate");
}

#[test]
fn strategy_endpoint_formats_expected_path() {
    assert_eq!(strategy_endpoint("a1b2c3d4"), "/api/v1/quant/strategies/a1b2c3d4");
}

#[test]
fn status_endpoint_formats_expected_path() {
    assert_eq!(status_endpoint("a1b2c3d4"), "/api/v1/quant/strategies/a1b2c3d4/status");
}

#[test]
fn list_failed_message_formats_status() {
    assert_eq!(list_failed_message(500), "strategy list failed: 500");
}

#[test]
fn generate_failed_message_formats_status() {
    assert_eq!(generate_failed_message(502), "code generation failed: 502");
}

#[test]
fn create_failed_message_formats_status() {
    assert_eq!(create_failed_message(400), "strategy create failed: 400");
}

#[test]
fn delete_failed_message_formats_status() {
    assert_eq!(delete_failed_message(404), "strategy delete failed: 404");
}

#[test]
fn status_update_failed_message_formats_status() {
    assert_eq!(status_update_failed_message(404), "status update failed: 404");
}
