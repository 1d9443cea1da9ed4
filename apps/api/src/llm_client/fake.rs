use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionClient, CompletionOptions, LlmError};

/// Canned `CompletionClient` that records every call.
pub struct FakeCompletionClient {
    configured: bool,
    reply: Option<String>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
    last_options: Mutex<Option<CompletionOptions>>,
}

impl FakeCompletionClient {
    fn build(configured: bool, reply: Option<String>) -> Self {
        Self {
            configured,
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_options: Mutex::new(None),
        }
    }

    pub fn replying(reply: impl Into<String>) -> Self {
        Self::build(true, Some(reply.into()))
    }

    pub fn unconfigured() -> Self {
        Self::build(false, Some("should never be returned".to_string()))
    }

    /// Configured, but every call fails like an upstream 500.
    pub fn failing() -> Self {
        Self::build(true, None)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }

    pub fn last_options(&self) -> Option<CompletionOptions> {
        *self.last_options.lock().unwrap()
    }
}

#[async_trait]
impl CompletionClient for FakeCompletionClient {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        *self.last_options.lock().unwrap() = Some(*options);

        self.reply.clone().ok_or(LlmError::Api {
            status: 500,
            message: "upstream exploded".to_string(),
        })
    }
}
