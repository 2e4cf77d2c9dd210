//! Tests for handler precedence, prompt shaping, and failure
//! degradation.

mod test_utils;

use parlato::{APOLOGY, Skill, UnconfiguredRelay};
use parlato_core::{Delivery, RequestEnvelope, SkillConfig};
use std::sync::Arc;
use test_utils::{FailingTextGenerator, MockImageGenerator, MockRelay, MockTextGenerator};

fn test_config() -> SkillConfig {
    SkillConfig::builder().api_key("sk-test").build().unwrap()
}

fn build_skill(
    text: Arc<MockTextGenerator>,
    image: Arc<MockImageGenerator>,
    relay: Arc<MockRelay>,
) -> Skill {
    Skill::with_default_handlers(&test_config(), text, image, relay)
}

fn default_mocks() -> (Arc<MockTextGenerator>, Arc<MockImageGenerator>, Arc<MockRelay>) {
    (
        Arc::new(MockTextGenerator::new("A measure of disorder.")),
        Arc::new(MockImageGenerator::new("https://images.example/1.png")),
        Arc::new(MockRelay::new(Delivery::Success)),
    )
}

#[tokio::test]
async fn launch_greets_and_keeps_session_open() {
    let (text, image, relay) = default_mocks();
    let skill = build_skill(text, image, relay);

    let response = skill.handle_request(&RequestEnvelope::launch()).await;
    assert_eq!(response.speech(), Some("ChatGPT here"));
    assert_eq!(response.reprompt(), Some("ChatGPT here"));
    assert!(!response.should_end_session());
}

#[tokio::test]
async fn generic_intent_speaks_completion() {
    let (text, image, relay) = default_mocks();
    let skill = build_skill(text.clone(), image, relay);

    let envelope = RequestEnvelope::intent("ChatGPTIntent", [("question", "what is entropy")]);
    let response = skill.handle_request(&envelope).await;

    assert_eq!(response.speech(), Some("A measure of disorder."));
    assert_eq!(response.reprompt(), Some("Do you have any other questions?"));
    assert!(!response.should_end_session());
    assert_eq!(text.prompts(), vec!["what is entropy"]);
}

#[tokio::test]
async fn trigger_word_prefixes_the_prompt() {
    let (text, image, relay) = default_mocks();
    let skill = build_skill(text.clone(), image, relay);

    let envelope = RequestEnvelope::intent("ChatGPTDefineIntent", [("question", "entropy")]);
    skill.handle_request(&envelope).await;

    assert_eq!(text.prompts(), vec!["Define entropy"]);
}

#[tokio::test]
async fn relay_intent_strips_addressee_and_posts_body() {
    let (text, image, relay) = default_mocks();
    let skill = build_skill(text.clone(), image, relay.clone());

    let envelope = RequestEnvelope::intent(
        "ChatGPTSlackHandler",
        [("question", "Slack me about the weather")],
    );
    let response = skill.handle_request(&envelope).await;

    // The first whitespace-delimited token is always stripped.
    assert_eq!(text.prompts(), vec!["me about the weather"]);

    let sent = relay.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].header(), "me about the weather");
    assert_eq!(sent[0].body().as_deref(), Some("A measure of disorder."));
    assert!(sent[0].image_url().is_none());
    assert_eq!(sent[0].channel(), "#chatgpt");

    assert_eq!(response.speech(), Some("success sending to slack"));
    assert!(!response.should_end_session());
}

#[tokio::test]
async fn relay_intent_outranks_generic_prefix_handler() {
    let (text, image, relay) = default_mocks();
    let skill = build_skill(text, image, relay.clone());

    let envelope = RequestEnvelope::intent("ChatGPTSlackHandler", [("question", "Slack me hi")]);
    let response = skill.handle_request(&envelope).await;

    // The generic handler would have spoken the completion itself.
    assert_eq!(response.speech(), Some("success sending to slack"));
    assert_eq!(relay.sent().len(), 1);
}

#[tokio::test]
async fn image_intent_posts_image_without_stripping() {
    let (text, image, relay) = default_mocks();
    let skill = build_skill(text.clone(), image.clone(), relay.clone());

    let envelope = RequestEnvelope::intent("ImageHandler", [("question", "a lighthouse at dusk")]);
    let response = skill.handle_request(&envelope).await;

    assert_eq!(image.prompts(), vec!["a lighthouse at dusk"]);
    assert!(text.prompts().is_empty());

    let sent = relay.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].header(), "a lighthouse at dusk");
    assert_eq!(
        sent[0].image_url().as_deref(),
        Some("https://images.example/1.png")
    );
    assert!(sent[0].body().is_none());

    assert_eq!(response.speech(), Some("success sending to slack"));
}

#[tokio::test]
async fn failed_webhook_is_spoken_not_raised() {
    let text = Arc::new(MockTextGenerator::new("reply"));
    let image = Arc::new(MockImageGenerator::new("https://images.example/1.png"));
    let relay = Arc::new(MockRelay::new(Delivery::Failed(500)));
    let skill = build_skill(text, image, relay);

    let envelope =
        RequestEnvelope::intent("ChatGPTSlackHandler", [("question", "Slack me hello")]);
    let response = skill.handle_request(&envelope).await;
    assert_eq!(response.speech(), Some("failed sending to slack"));
    assert!(!response.should_end_session());

    let envelope = RequestEnvelope::intent("ImageHandler", [("question", "a cat")]);
    let response = skill.handle_request(&envelope).await;
    assert_eq!(response.speech(), Some("failed sending to slack"));
}

#[tokio::test]
async fn generation_failure_degrades_to_apology() {
    let image = Arc::new(MockImageGenerator::new("https://images.example/1.png"));
    let relay = Arc::new(MockRelay::new(Delivery::Success));
    let skill = Skill::with_default_handlers(
        &test_config(),
        Arc::new(FailingTextGenerator),
        image,
        relay,
    );

    let envelope = RequestEnvelope::intent("ChatGPTIntent", [("question", "anything")]);
    let response = skill.handle_request(&envelope).await;

    assert_eq!(response.speech(), Some(APOLOGY));
    assert_eq!(response.reprompt(), Some(APOLOGY));
    assert!(!response.should_end_session());
}

#[tokio::test]
async fn missing_question_slot_degrades_to_apology() {
    let (text, image, relay) = default_mocks();
    let skill = build_skill(text, image, relay);

    let envelope = RequestEnvelope::intent("ChatGPTIntent", []);
    let response = skill.handle_request(&envelope).await;
    assert_eq!(response.speech(), Some(APOLOGY));
    assert!(!response.should_end_session());
}

#[tokio::test]
async fn unconfigured_relay_degrades_to_apology() {
    let text = Arc::new(MockTextGenerator::new("reply"));
    let image = Arc::new(MockImageGenerator::new("https://images.example/1.png"));
    let skill = Skill::with_default_handlers(
        &test_config(),
        text,
        image,
        Arc::new(UnconfiguredRelay),
    );

    let envelope = RequestEnvelope::intent("ChatGPTSlackHandler", [("question", "Slack me hi")]);
    let response = skill.handle_request(&envelope).await;
    assert_eq!(response.speech(), Some(APOLOGY));
}

#[tokio::test]
async fn cancel_and_stop_say_goodbye_and_end_session() {
    let (text, image, relay) = default_mocks();
    let skill = build_skill(text, image, relay);

    for intent in ["AMAZON.CancelIntent", "AMAZON.StopIntent"] {
        let envelope = RequestEnvelope::intent(intent, []);
        let response = skill.handle_request(&envelope).await;
        assert_eq!(response.speech(), Some("Goodbye!"));
        assert_eq!(response.reprompt(), None);
        assert!(response.should_end_session());
    }
}

#[tokio::test]
async fn session_end_is_empty_with_no_side_effects() {
    let (text, image, relay) = default_mocks();
    let skill = build_skill(text.clone(), image.clone(), relay.clone());

    let response = skill.handle_request(&RequestEnvelope::session_ended()).await;
    assert_eq!(response.speech(), None);
    assert_eq!(response.reprompt(), None);
    assert!(response.should_end_session());

    assert!(text.prompts().is_empty());
    assert!(image.prompts().is_empty());
    assert!(relay.sent().is_empty());
}

#[tokio::test]
async fn help_is_idempotent_and_makes_no_external_calls() {
    let (text, image, relay) = default_mocks();
    let skill = build_skill(text.clone(), image.clone(), relay.clone());

    let envelope = RequestEnvelope::intent("AMAZON.HelpIntent", []);
    let first = skill.handle_request(&envelope).await;
    let second = skill.handle_request(&envelope).await;

    assert_eq!(first, second);
    assert_eq!(first.speech(), Some("You can say hello to me! How can I help?"));
    assert!(text.prompts().is_empty());
    assert!(image.prompts().is_empty());
    assert!(relay.sent().is_empty());
}

#[tokio::test]
async fn unknown_intent_falls_through_to_reflector() {
    let (text, image, relay) = default_mocks();
    let skill = build_skill(text.clone(), image, relay);

    let envelope = RequestEnvelope::intent("WeatherIntent", []);
    let response = skill.handle_request(&envelope).await;

    assert_eq!(response.speech(), Some("You just triggered WeatherIntent."));
    assert_eq!(response.reprompt(), None);
    assert!(response.should_end_session());
    assert!(text.prompts().is_empty());
}
