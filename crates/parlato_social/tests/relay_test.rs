//! Tests for relay construction.

use parlato_core::SkillConfig;
use parlato_error::RelayError;
use parlato_social::SlackRelay;

#[test]
fn relay_requires_webhook_url() {
    let config = SkillConfig::builder().api_key("sk-test").build().unwrap();
    let result = SlackRelay::new(&config);
    assert!(matches!(result, Err(RelayError::NotConfigured(_))));
}

#[test]
fn relay_builds_with_webhook_url() {
    let config = SkillConfig::builder()
        .api_key("sk-test")
        .slack_url("https://hooks.slack.example/services/T0/B0/x".to_string())
        .build()
        .unwrap();
    assert!(SlackRelay::new(&config).is_ok());
}
