use std::sync::Arc;

use crate::application::ports::TranscriptionClient;
use crate::presentation::config::{SttProviderSetting, SttSettings};

use super::google_speech_client::GoogleSpeechClient;
use super::mock_client::MockTranscriptionClient;

pub struct TranscriptionClientFactory;

impl TranscriptionClientFactory {
    pub fn create(
        settings: &SttSettings,
    ) -> Result<Arc<dyn TranscriptionClient>, ClientFactoryError> {
        match settings.provider {
            SttProviderSetting::Google => {
                let api_key = settings
                    .api_key
                    .clone()
                    .ok_or(ClientFactoryError::MissingApiKey)?;
                Ok(Arc::new(GoogleSpeechClient::new(
                    api_key,
                    settings.base_url.clone(),
                )))
            }
            SttProviderSetting::Mock => {
                Ok(Arc::new(MockTranscriptionClient::new("scaffold transcript")))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientFactoryError {
    #[error("api key required for the Google Speech provider")]
    MissingApiKey,
}
