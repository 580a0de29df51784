use std::io::Cursor;

use crate::application::ports::{ChunkEncoder, ChunkEncoderError};
use crate::domain::AudioChunk;

/// Encodes a chunk as 16-bit PCM WAV, the wire format the recognition
/// backend expects. Mono, at the chunk's own sample rate.
pub struct WavChunkEncoder;

impl ChunkEncoder for WavChunkEncoder {
    fn encode(&self, chunk: &AudioChunk) -> Result<Vec<u8>, ChunkEncoderError> {
        if chunk.sample_rate == 0 {
            return Err(ChunkEncoderError::UnsupportedLayout(
                "sample rate is zero".to_string(),
            ));
        }
        if chunk.samples.is_empty() {
            return Err(ChunkEncoderError::UnsupportedLayout(
                "chunk contains no samples".to_string(),
            ));
        }

        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: chunk.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::new());
        let mut writer = hound::WavWriter::new(&mut cursor, spec)
            .map_err(|e| ChunkEncoderError::EncodingFailed(format!("writer: {}", e)))?;

        for &sample in &chunk.samples {
            let scaled = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            writer
                .write_sample(scaled)
                .map_err(|e| ChunkEncoderError::EncodingFailed(format!("sample: {}", e)))?;
        }

        writer
            .finalize()
            .map_err(|e| ChunkEncoderError::EncodingFailed(format!("finalize: {}", e)))?;

        Ok(cursor.into_inner())
    }
}
