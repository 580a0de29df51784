use super::chunk::AudioChunk;
use super::waveform::Waveform;

/// Partitions `[0, duration)` into consecutive windows of `chunk_duration_ms`.
///
/// The final window covers `[k * chunk_duration_ms, duration)` and may be
/// shorter than the configured length; it is never dropped or merged into
/// the previous window. Output is fully determined by the waveform and the
/// window length.
pub fn split(
    waveform: &Waveform,
    chunk_duration_ms: u64,
) -> Result<Vec<AudioChunk>, ChunkerError> {
    if chunk_duration_ms == 0 {
        return Err(ChunkerError::InvalidChunkDuration);
    }

    let total_ms = waveform.duration_ms();
    if total_ms == 0 {
        // A zero-chunk pipeline would render as an ambiguous empty string.
        return Err(ChunkerError::EmptyInput);
    }

    let samples = waveform.samples();
    let mut chunks = Vec::with_capacity(total_ms.div_ceil(chunk_duration_ms) as usize);

    let mut start_ms = 0u64;
    while start_ms < total_ms {
        let end_ms = (start_ms + chunk_duration_ms).min(total_ms);
        let start_sample = waveform.sample_at_ms(start_ms);
        let end_sample = if end_ms == total_ms {
            samples.len()
        } else {
            waveform.sample_at_ms(end_ms)
        };

        chunks.push(AudioChunk::new(
            chunks.len() + 1,
            samples[start_sample..end_sample].to_vec(),
            waveform.sample_rate(),
            start_ms,
            end_ms - start_ms,
        ));

        start_ms = end_ms;
    }

    Ok(chunks)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChunkerError {
    #[error("audio input has zero duration")]
    EmptyInput,
    #[error("chunk duration must be greater than zero")]
    InvalidChunkDuration,
}
