use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;

use crate::application::ports::{
    AudioDecoder, AudioDecoderError, ChunkEncoder, StagingStore, StagingStoreError,
    TranscriptionClient,
};
use crate::domain::{
    chunker, AudioChunk, ChunkFailure, ChunkResult, ChunkerError, LanguageTag, StoragePath,
    Transcript,
};

/// Drives the transcription pipeline for one uploaded recording:
/// decode once, split into fixed-duration chunks, then convert and
/// recognize every chunk independently before assembling the transcript
/// in chunk-index order.
pub struct TranscriptionService {
    decoder: Arc<dyn AudioDecoder>,
    encoder: Arc<dyn ChunkEncoder>,
    client: Arc<dyn TranscriptionClient>,
    staging_store: Arc<dyn StagingStore>,
    language: LanguageTag,
    chunk_duration_ms: u64,
    max_concurrency: usize,
    recognition_timeout: Duration,
}

impl TranscriptionService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        decoder: Arc<dyn AudioDecoder>,
        encoder: Arc<dyn ChunkEncoder>,
        client: Arc<dyn TranscriptionClient>,
        staging_store: Arc<dyn StagingStore>,
        language: LanguageTag,
        chunk_duration_ms: u64,
        max_concurrency: usize,
        recognition_timeout: Duration,
    ) -> Self {
        Self {
            decoder,
            encoder,
            client,
            staging_store,
            language,
            chunk_duration_ms,
            max_concurrency,
            recognition_timeout,
        }
    }

    /// Transcribes a staged upload. The staged file is removed on every
    /// exit path, including errors and cancellation.
    pub async fn transcribe_upload(
        &self,
        path: &StoragePath,
    ) -> Result<Transcript, TranscribeError> {
        let staged = StagedUpload::new(Arc::clone(&self.staging_store), path.clone());

        let result = match self.staging_store.fetch(path).await {
            Ok(data) => self.transcribe_bytes(&data).await,
            Err(e) => Err(TranscribeError::Staging(e)),
        };

        staged.remove().await;
        result
    }

    pub async fn transcribe_bytes(&self, data: &[u8]) -> Result<Transcript, TranscribeError> {
        let waveform = self.decoder.decode(data)?;
        tracing::debug!(
            duration_ms = waveform.duration_ms(),
            sample_rate = waveform.sample_rate(),
            "Audio decoded"
        );

        let chunks = chunker::split(&waveform, self.chunk_duration_ms).map_err(|e| match e {
            ChunkerError::EmptyInput => TranscribeError::EmptyInput,
            ChunkerError::InvalidChunkDuration => TranscribeError::InvalidChunkDuration,
        })?;
        let chunk_count = chunks.len();

        tracing::info!(
            chunks = chunk_count,
            chunk_duration_ms = self.chunk_duration_ms,
            language = %self.language,
            "Waveform split for recognition"
        );

        let mut indexed: Vec<(usize, ChunkResult)> =
            futures::stream::iter(chunks.into_iter().map(|chunk| self.process_chunk(chunk)))
                .buffer_unordered(self.max_concurrency.max(1))
                .collect()
                .await;

        // Completion order is arbitrary under concurrent recognition; the
        // transcript must follow chunk index.
        indexed.sort_by_key(|(index, _)| *index);
        let results: Vec<ChunkResult> = indexed.into_iter().map(|(_, result)| result).collect();

        let transcript = Transcript::from_results(results);
        tracing::info!(
            lines = transcript.line_count(),
            "Transcription pipeline completed"
        );

        Ok(transcript)
    }

    async fn process_chunk(&self, chunk: AudioChunk) -> (usize, ChunkResult) {
        let index = chunk.index;

        let buffer = match self.encoder.encode(&chunk) {
            Ok(buffer) => buffer,
            Err(e) => {
                tracing::warn!(chunk = index, error = %e, "Chunk conversion failed");
                return (index, ChunkResult::Failure(ChunkFailure::ConversionFailed));
            }
        };

        let outcome = tokio::time::timeout(
            self.recognition_timeout,
            self.client.recognize(&buffer, &self.language),
        )
        .await;

        let result = match outcome {
            Ok(Ok(text)) => ChunkResult::Text(text),
            Ok(Err(failure)) => {
                tracing::warn!(chunk = index, error = %failure, "Chunk recognition failed");
                ChunkResult::Failure(failure.into())
            }
            Err(_) => {
                tracing::warn!(
                    chunk = index,
                    timeout_ms = self.recognition_timeout.as_millis() as u64,
                    "Chunk recognition timed out"
                );
                ChunkResult::Failure(ChunkFailure::ServiceUnavailable)
            }
        };

        (index, result)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    #[error("audio decoding: {0}")]
    Decode(#[from] AudioDecoderError),
    #[error("audio input has zero duration")]
    EmptyInput,
    #[error("chunk duration must be greater than zero")]
    InvalidChunkDuration,
    #[error("staging store: {0}")]
    Staging(#[from] StagingStoreError),
}

/// Scoped handle on a staged upload. Normal completion removes the file
/// via [`StagedUpload::remove`]; if the request future is dropped first
/// (caller abort), `Drop` schedules the delete instead.
struct StagedUpload {
    store: Arc<dyn StagingStore>,
    path: StoragePath,
    removed: bool,
}

impl StagedUpload {
    fn new(store: Arc<dyn StagingStore>, path: StoragePath) -> Self {
        Self {
            store,
            path,
            removed: false,
        }
    }

    async fn remove(mut self) {
        self.removed = true;
        if let Err(e) = self.store.delete(&self.path).await {
            tracing::warn!(error = %e, path = %self.path, "Failed to delete staged upload");
        }
    }
}

impl Drop for StagedUpload {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        let store = Arc::clone(&self.store);
        let path = self.path.clone();
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                if let Err(e) = store.delete(&path).await {
                    tracing::warn!(error = %e, path = %path, "Failed to delete staged upload");
                }
            });
        }
    }
}
