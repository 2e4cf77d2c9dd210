//! Tests for error kind conversion and rendering.
//!
//! Transport failures route through the provider enums: reqwest
//! errors become `GenerationError::Http` / `RelayError::Http`, parse
//! failures become `GenerationError::ResponseParsing`. The crate
//! error carries no separate HTTP or JSON kinds.

use parlato_error::{
    ConfigError, GenerationError, MissingSlotError, ParlatoError, ParlatoErrorKind, RelayError,
};

#[test]
fn transport_failure_converts_to_generation_kind() {
    let err: ParlatoError = GenerationError::Http("Request failed: connection refused".to_string()).into();
    assert!(matches!(
        err.kind(),
        ParlatoErrorKind::Generation(GenerationError::Http(_))
    ));
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn parse_failure_converts_to_generation_kind() {
    let err: ParlatoError =
        GenerationError::ResponseParsing("Failed to parse JSON: EOF".to_string()).into();
    assert!(matches!(
        err.kind(),
        ParlatoErrorKind::Generation(GenerationError::ResponseParsing(_))
    ));
}

#[test]
fn webhook_transport_failure_converts_to_relay_kind() {
    let err: ParlatoError = RelayError::Http("Request failed: timed out".to_string()).into();
    assert!(matches!(
        err.kind(),
        ParlatoErrorKind::Relay(RelayError::Http(_))
    ));
}

#[test]
fn api_error_renders_status_and_message() {
    let err = GenerationError::Api {
        status: 429,
        message: "rate limited".to_string(),
    };
    let rendered = err.to_string();
    assert!(rendered.contains("429"));
    assert!(rendered.contains("rate limited"));
}

#[test]
fn config_error_records_source_location() {
    let err = ConfigError::new("MAX_TOKENS must be positive");
    assert!(err.file.ends_with("error_kind_test.rs"));
    assert!(err.to_string().contains("MAX_TOKENS"));
}

#[test]
fn missing_slot_names_intent_and_slot() {
    let err: ParlatoError = MissingSlotError::new("ChatGPTIntent", "question").into();
    let rendered = err.to_string();
    assert!(rendered.contains("ChatGPTIntent"));
    assert!(rendered.contains("question"));
}
