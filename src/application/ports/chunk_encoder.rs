use crate::domain::AudioChunk;

/// Re-encodes one chunk into the uncompressed buffer the recognition
/// backend requires. Pure per-chunk transformation; a failure here is
/// recorded against that chunk only.
pub trait ChunkEncoder: Send + Sync {
    fn encode(&self, chunk: &AudioChunk) -> Result<Vec<u8>, ChunkEncoderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChunkEncoderError {
    #[error("unsupported sample layout: {0}")]
    UnsupportedLayout(String),
    #[error("encoding failed: {0}")]
    EncodingFailed(String),
}
