/// A contiguous time-bounded window of a waveform, processed independently.
///
/// `index` is 1-based and determines final transcript ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioChunk {
    pub index: usize,
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    pub start_ms: u64,
    pub duration_ms: u64,
}

impl AudioChunk {
    pub fn new(
        index: usize,
        samples: Vec<f32>,
        sample_rate: u32,
        start_ms: u64,
        duration_ms: u64,
    ) -> Self {
        Self {
            index,
            samples,
            sample_rate,
            start_ms,
            duration_ms,
        }
    }
}
