use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{RecognitionFailure, TranscriptionClient};
use crate::domain::LanguageTag;

const DEFAULT_BASE_URL: &str = "http://www.google.com/speech-api/v2/recognize";

/// Google Web Speech backend. Takes the WAV chunk buffer as the request
/// body and the language tag as a query parameter.
pub struct GoogleSpeechClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GoogleSpeechClient {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

#[derive(Deserialize)]
struct RecognitionResponse {
    #[serde(default)]
    result: Vec<RecognitionResult>,
}

#[derive(Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternative: Vec<RecognitionAlternative>,
}

#[derive(Deserialize)]
struct RecognitionAlternative {
    transcript: String,
}

#[async_trait]
impl TranscriptionClient for GoogleSpeechClient {
    async fn recognize(
        &self,
        audio: &[u8],
        language: &LanguageTag,
    ) -> Result<String, RecognitionFailure> {
        tracing::debug!(
            bytes = audio.len(),
            language = %language,
            "Sending chunk to Google Speech API"
        );

        let response = self
            .client
            .post(&self.base_url)
            .query(&[
                ("client", "chromium"),
                ("lang", language.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .header(reqwest::header::CONTENT_TYPE, "audio/wav")
            .body(audio.to_vec())
            .send()
            .await
            .map_err(|e| RecognitionFailure::ServiceUnavailable(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RecognitionFailure::ServiceUnavailable(format!(
                "status {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RecognitionFailure::ServiceUnavailable(format!("body: {}", e)))?;

        // The endpoint streams one JSON document per line; empty result
        // sets precede the line carrying the hypothesis.
        for line in body.lines() {
            let parsed: RecognitionResponse = match serde_json::from_str(line) {
                Ok(parsed) => parsed,
                Err(_) => continue,
            };

            let transcript = parsed
                .result
                .iter()
                .filter_map(|r| r.alternative.first())
                .map(|alt| alt.transcript.trim())
                .find(|t| !t.is_empty());

            if let Some(transcript) = transcript {
                tracing::debug!(chars = transcript.len(), "Google Speech recognition completed");
                return Ok(transcript.to_string());
            }
        }

        Err(RecognitionFailure::Unintelligible)
    }
}
