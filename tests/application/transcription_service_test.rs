use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use shruti::application::ports::{
    AudioDecoder, AudioDecoderError, ChunkEncoder, ChunkEncoderError, RecognitionFailure,
    StagingStore, TranscriptionClient,
};
use shruti::application::services::{TranscribeError, TranscriptionService};
use shruti::domain::{AudioChunk, LanguageTag, StoragePath, UploadId, Waveform};
use shruti::infrastructure::storage::MockStagingStore;

/// Ignores its input and produces a fixed-duration waveform at 1 kHz, so
/// one sample equals one millisecond.
struct FixedDecoder {
    duration_ms: usize,
}

impl AudioDecoder for FixedDecoder {
    fn decode(&self, _data: &[u8]) -> Result<Waveform, AudioDecoderError> {
        Ok(Waveform::new(vec![0.0; self.duration_ms], 1000))
    }
}

struct FailingDecoder;

impl AudioDecoder for FailingDecoder {
    fn decode(&self, _data: &[u8]) -> Result<Waveform, AudioDecoderError> {
        Err(AudioDecoderError::DecodingFailed("corrupt input".to_string()))
    }
}

/// Encodes a chunk as its own index so the scripted client can tell
/// chunks apart.
struct IndexTaggingEncoder;

impl ChunkEncoder for IndexTaggingEncoder {
    fn encode(&self, chunk: &AudioChunk) -> Result<Vec<u8>, ChunkEncoderError> {
        Ok(vec![chunk.index as u8])
    }
}

struct FailingEncoderAt {
    failing_index: usize,
}

impl ChunkEncoder for FailingEncoderAt {
    fn encode(&self, chunk: &AudioChunk) -> Result<Vec<u8>, ChunkEncoderError> {
        if chunk.index == self.failing_index {
            Err(ChunkEncoderError::UnsupportedLayout(
                "scripted failure".to_string(),
            ))
        } else {
            Ok(vec![chunk.index as u8])
        }
    }
}

enum Script {
    Text(&'static str),
    DelayedText(&'static str, Duration),
    Unintelligible,
    ServiceUnavailable,
    Hang,
}

/// Backend scripted per chunk index (the index arrives as the single
/// encoded byte).
struct ScriptedClient {
    scripts: HashMap<u8, Script>,
}

impl ScriptedClient {
    fn new(scripts: Vec<(u8, Script)>) -> Self {
        Self {
            scripts: scripts.into_iter().collect(),
        }
    }
}

#[async_trait::async_trait]
impl TranscriptionClient for ScriptedClient {
    async fn recognize(
        &self,
        audio: &[u8],
        _language: &LanguageTag,
    ) -> Result<String, RecognitionFailure> {
        let index = audio[0];
        match self.scripts.get(&index) {
            Some(Script::Text(text)) => Ok(text.to_string()),
            Some(Script::DelayedText(text, delay)) => {
                tokio::time::sleep(*delay).await;
                Ok(text.to_string())
            }
            Some(Script::Unintelligible) => Err(RecognitionFailure::Unintelligible),
            Some(Script::ServiceUnavailable) => Err(RecognitionFailure::ServiceUnavailable(
                "scripted outage".to_string(),
            )),
            Some(Script::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                unreachable!("hanging backend must be cut off by the timeout")
            }
            None => panic!("no script for chunk {}", index),
        }
    }
}

fn service(
    decoder: impl AudioDecoder + 'static,
    encoder: impl ChunkEncoder + 'static,
    client: impl TranscriptionClient + 'static,
    store: Arc<MockStagingStore>,
    max_concurrency: usize,
    timeout: Duration,
) -> TranscriptionService {
    TranscriptionService::new(
        Arc::new(decoder),
        Arc::new(encoder),
        Arc::new(client),
        store,
        LanguageTag::new("bn-BD").unwrap(),
        60_000,
        max_concurrency,
        timeout,
    )
}

fn default_timeout() -> Duration {
    Duration::from_secs(5)
}

#[tokio::test]
async fn given_150s_audio_with_failing_middle_chunk_then_transcript_keeps_order_and_marker() {
    let service = service(
        FixedDecoder {
            duration_ms: 150_000,
        },
        IndexTaggingEncoder,
        ScriptedClient::new(vec![
            (1, Script::Text("a")),
            (2, Script::ServiceUnavailable),
            (3, Script::Text("c")),
        ]),
        Arc::new(MockStagingStore::new()),
        1,
        default_timeout(),
    );

    let transcript = service.transcribe_bytes(&[0]).await.unwrap();

    assert_eq!(transcript.render(), "a\n[API error or network issue]\nc");
}

#[tokio::test]
async fn given_concurrent_recognition_when_late_chunks_finish_first_then_order_follows_index() {
    // Chunk 1 completes last; the transcript must still lead with it.
    let service = service(
        FixedDecoder {
            duration_ms: 150_000,
        },
        IndexTaggingEncoder,
        ScriptedClient::new(vec![
            (1, Script::DelayedText("first", Duration::from_millis(80))),
            (2, Script::DelayedText("second", Duration::from_millis(40))),
            (3, Script::DelayedText("third", Duration::from_millis(5))),
        ]),
        Arc::new(MockStagingStore::new()),
        3,
        default_timeout(),
    );

    let transcript = service.transcribe_bytes(&[0]).await.unwrap();

    assert_eq!(transcript.render(), "first\nsecond\nthird");
}

#[tokio::test]
async fn given_unintelligible_chunk_then_marker_replaces_text() {
    let service = service(
        FixedDecoder { duration_ms: 60_000 },
        IndexTaggingEncoder,
        ScriptedClient::new(vec![(1, Script::Unintelligible)]),
        Arc::new(MockStagingStore::new()),
        1,
        default_timeout(),
    );

    let transcript = service.transcribe_bytes(&[0]).await.unwrap();

    assert_eq!(transcript.render(), "[Unrecognized speech]");
}

#[tokio::test]
async fn given_conversion_failure_on_one_chunk_then_other_chunks_still_transcribe() {
    let service = service(
        FixedDecoder {
            duration_ms: 150_000,
        },
        FailingEncoderAt { failing_index: 2 },
        ScriptedClient::new(vec![(1, Script::Text("a")), (3, Script::Text("c"))]),
        Arc::new(MockStagingStore::new()),
        1,
        default_timeout(),
    );

    let transcript = service.transcribe_bytes(&[0]).await.unwrap();

    assert_eq!(transcript.render(), "a\n[Audio conversion failed]\nc");
}

#[tokio::test]
async fn given_hanging_backend_when_timeout_elapses_then_chunk_reports_service_unavailable() {
    let service = service(
        FixedDecoder { duration_ms: 60_000 },
        IndexTaggingEncoder,
        ScriptedClient::new(vec![(1, Script::Hang)]),
        Arc::new(MockStagingStore::new()),
        1,
        Duration::from_millis(50),
    );

    let transcript = service.transcribe_bytes(&[0]).await.unwrap();

    assert_eq!(transcript.render(), "[API error or network issue]");
}

#[tokio::test]
async fn given_many_chunks_then_line_count_equals_chunk_count() {
    let scripts = (1u8..=10).map(|i| (i, Script::Text("line"))).collect();
    let service = service(
        FixedDecoder {
            duration_ms: 600_000,
        },
        IndexTaggingEncoder,
        ScriptedClient::new(scripts),
        Arc::new(MockStagingStore::new()),
        4,
        default_timeout(),
    );

    let transcript = service.transcribe_bytes(&[0]).await.unwrap();

    assert_eq!(transcript.line_count(), 10);
}

#[tokio::test]
async fn given_zero_duration_audio_then_empty_input_error() {
    let service = service(
        FixedDecoder { duration_ms: 0 },
        IndexTaggingEncoder,
        ScriptedClient::new(vec![]),
        Arc::new(MockStagingStore::new()),
        1,
        default_timeout(),
    );

    let result = service.transcribe_bytes(&[0]).await;

    assert!(matches!(result, Err(TranscribeError::EmptyInput)));
}

#[tokio::test]
async fn given_decode_failure_when_transcribing_upload_then_error_and_staged_file_removed() {
    let store = Arc::new(MockStagingStore::new());
    let path = StoragePath::new(&UploadId::new(), "clip.mp3");
    store
        .store(&path, Bytes::from_static(b"not really audio"))
        .await
        .unwrap();

    let service = service(
        FailingDecoder,
        IndexTaggingEncoder,
        ScriptedClient::new(vec![]),
        Arc::clone(&store),
        1,
        default_timeout(),
    );

    let result = service.transcribe_upload(&path).await;

    assert!(matches!(result, Err(TranscribeError::Decode(_))));
    assert!(!store.contains(&path));
}

#[tokio::test]
async fn given_successful_pipeline_when_transcribing_upload_then_staged_file_removed() {
    let store = Arc::new(MockStagingStore::new());
    let path = StoragePath::new(&UploadId::new(), "clip.mp3");
    store
        .store(&path, Bytes::from_static(b"audio"))
        .await
        .unwrap();

    let service = service(
        FixedDecoder { duration_ms: 60_000 },
        IndexTaggingEncoder,
        ScriptedClient::new(vec![(1, Script::Text("hello world"))]),
        Arc::clone(&store),
        1,
        default_timeout(),
    );

    let transcript = service.transcribe_upload(&path).await.unwrap();

    assert_eq!(transcript.render(), "hello world");
    assert!(!store.contains(&path));
}

#[tokio::test]
async fn given_missing_staged_object_when_transcribing_upload_then_staging_error() {
    let store = Arc::new(MockStagingStore::new());
    let path = StoragePath::new(&UploadId::new(), "missing.mp3");

    let service = service(
        FixedDecoder { duration_ms: 60_000 },
        IndexTaggingEncoder,
        ScriptedClient::new(vec![]),
        Arc::clone(&store),
        1,
        default_timeout(),
    );

    let result = service.transcribe_upload(&path).await;

    assert!(matches!(result, Err(TranscribeError::Staging(_))));
}
