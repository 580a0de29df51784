use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{RecognitionFailure, TranscriptionClient};
use crate::domain::LanguageTag;

/// Canned backend for scaffold-mode runs and tests.
pub struct MockTranscriptionClient {
    response: String,
    delay: Duration,
}

impl MockTranscriptionClient {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(response: impl Into<String>, delay: Duration) -> Self {
        Self {
            response: response.into(),
            delay,
        }
    }
}

#[async_trait]
impl TranscriptionClient for MockTranscriptionClient {
    async fn recognize(
        &self,
        _audio: &[u8],
        _language: &LanguageTag,
    ) -> Result<String, RecognitionFailure> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.response.clone())
    }
}
