use crate::domain::Waveform;

/// Decodes a compressed audio container into an in-memory waveform.
///
/// A decode failure is fatal to the whole request: without a waveform
/// there is nothing to chunk.
pub trait AudioDecoder: Send + Sync {
    fn decode(&self, data: &[u8]) -> Result<Waveform, AudioDecoderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioDecoderError {
    #[error("unsupported audio container: {0}")]
    UnsupportedFormat(String),
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
}
