mod audio_decoder;
mod chunk_encoder;
mod staging_store;
mod transcription_client;

pub use audio_decoder::{AudioDecoder, AudioDecoderError};
pub use chunk_encoder::{ChunkEncoder, ChunkEncoderError};
pub use staging_store::{StagingStore, StagingStoreError};
pub use transcription_client::{RecognitionFailure, TranscriptionClient};
