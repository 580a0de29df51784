mod chunk;
mod chunk_result;
pub mod chunker;
mod language_tag;
mod storage_path;
mod transcript;
mod upload_id;
mod waveform;

pub use chunk::AudioChunk;
pub use chunk_result::{ChunkFailure, ChunkResult};
pub use chunker::ChunkerError;
pub use language_tag::{LanguageTag, LanguageTagError};
pub use storage_path::StoragePath;
pub use transcript::Transcript;
pub use upload_id::UploadId;
pub use waveform::Waveform;
