/// Decoded audio: mono PCM samples with a known sample rate.
///
/// Built once per request by the audio decoder and immutable afterwards;
/// every downstream step (chunking, encoding) reads slices of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl Waveform {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Total duration in whole milliseconds, rounded down.
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        self.samples.len() as u64 * 1000 / self.sample_rate as u64
    }

    /// Sample index for a millisecond offset. Boundaries are sample-accurate:
    /// the same offset always maps to the same sample.
    pub fn sample_at_ms(&self, offset_ms: u64) -> usize {
        let idx = offset_ms * self.sample_rate as u64 / 1000;
        (idx as usize).min(self.samples.len())
    }
}
