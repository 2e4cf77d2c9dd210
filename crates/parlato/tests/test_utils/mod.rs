//! Test utilities: mock client implementations of the interface
//! traits, so dispatch tests run without network access.

use async_trait::async_trait;
use parlato_core::{ChatMessage, ChatRelay, Delivery, ImageGenerator, TextGenerator};
use parlato_error::{GenerationError, ParlatoResult};
use std::sync::Mutex;

/// Text generator returning a canned reply and recording prompts.
pub struct MockTextGenerator {
    pub reply: String,
    pub prompts: Mutex<Vec<String>>,
}

impl MockTextGenerator {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn complete(&self, prompt: &str) -> ParlatoResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

/// Text generator that always fails with an API error.
pub struct FailingTextGenerator;

#[async_trait]
impl TextGenerator for FailingTextGenerator {
    async fn complete(&self, _prompt: &str) -> ParlatoResult<String> {
        Err(GenerationError::Api {
            status: 500,
            message: "upstream unavailable".to_string(),
        }
        .into())
    }
}

/// Image generator returning a canned URL and recording prompts.
pub struct MockImageGenerator {
    pub url: String,
    pub prompts: Mutex<Vec<String>>,
}

impl MockImageGenerator {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn render(&self, prompt: &str) -> ParlatoResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.url.clone())
    }
}

/// Relay reporting a fixed delivery outcome and recording messages.
pub struct MockRelay {
    pub delivery: Delivery,
    pub sent: Mutex<Vec<ChatMessage>>,
}

impl MockRelay {
    pub fn new(delivery: Delivery) -> Self {
        Self {
            delivery,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<ChatMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatRelay for MockRelay {
    async fn post(&self, message: &ChatMessage) -> ParlatoResult<Delivery> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(self.delivery)
    }
}
