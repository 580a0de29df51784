use async_trait::async_trait;

use crate::domain::{ChunkFailure, LanguageTag};

/// Speech-to-text backend capability. The single external dependency the
/// pipeline treats as a black box; any backend must conform to the
/// two-outcome contract below.
#[async_trait]
pub trait TranscriptionClient: Send + Sync {
    async fn recognize(
        &self,
        audio: &[u8],
        language: &LanguageTag,
    ) -> Result<String, RecognitionFailure>;
}

/// The only failure distinctions a caller is allowed to observe.
#[derive(Debug, thiserror::Error)]
pub enum RecognitionFailure {
    /// The backend understood the signal but could not map it to text.
    #[error("speech not recognized")]
    Unintelligible,
    /// Transport, network or backend error.
    #[error("recognition service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl From<RecognitionFailure> for ChunkFailure {
    fn from(failure: RecognitionFailure) -> Self {
        match failure {
            RecognitionFailure::Unintelligible => ChunkFailure::Unintelligible,
            RecognitionFailure::ServiceUnavailable(_) => ChunkFailure::ServiceUnavailable,
        }
    }
}
