//! Tests for the generation API wire formats.

use parlato_models::{CompletionRequest, CompletionResponse, ImageRequest, ImageResponse};

#[test]
fn completion_request_body_shape() -> Result<(), anyhow::Error> {
    let request = CompletionRequest::builder()
        .model("text-davinci-003")
        .prompt("Define entropy")
        .max_tokens(3000u32)
        .temperature(0.1f32)
        .build()?;

    let json = serde_json::to_value(&request)?;
    assert_eq!(json["model"], "text-davinci-003");
    assert_eq!(json["prompt"], "Define entropy");
    assert_eq!(json["max_tokens"], 3000);
    Ok(())
}

#[test]
fn image_request_body_shape() -> Result<(), anyhow::Error> {
    let request = ImageRequest::builder()
        .prompt("a lighthouse at dusk")
        .n(1u8)
        .size("1024x1024")
        .response_format("url")
        .build()?;

    let json = serde_json::to_value(&request)?;
    assert_eq!(json["n"], 1);
    assert_eq!(json["size"], "1024x1024");
    assert_eq!(json["response_format"], "url");
    Ok(())
}

#[test]
fn completion_response_first_choice() -> Result<(), anyhow::Error> {
    let json = r#"{
        "choices": [
            {"text": "A measure of disorder.", "finish_reason": "stop"},
            {"text": "ignored"}
        ]
    }"#;

    let response: CompletionResponse = serde_json::from_str(json)?;
    assert_eq!(response.choices[0].text, "A measure of disorder.");
    Ok(())
}

#[test]
fn image_response_first_url() -> Result<(), anyhow::Error> {
    let json = r#"{"data": [{"url": "https://images.example/1.png"}]}"#;

    let response: ImageResponse = serde_json::from_str(json)?;
    assert_eq!(response.data[0].url, "https://images.example/1.png");
    Ok(())
}

#[test]
fn empty_choice_list_parses() -> Result<(), anyhow::Error> {
    // The client turns this into a ResponseParsing error.
    let response: CompletionResponse = serde_json::from_str(r#"{"choices": []}"#)?;
    assert!(response.choices.is_empty());
    Ok(())
}
