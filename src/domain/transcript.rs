use super::chunk_result::ChunkResult;

/// The final chunk-ordered rendering of all chunk results.
///
/// Invariant: one line per chunk, in chunk-index order, regardless of
/// individual failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    results: Vec<ChunkResult>,
}

impl Transcript {
    /// `results` must already be in chunk-index order.
    pub fn from_results(results: Vec<ChunkResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[ChunkResult] {
        &self.results
    }

    pub fn line_count(&self) -> usize {
        self.results.len()
    }

    /// Newline-joined transcript text, one line per chunk.
    pub fn render(&self) -> String {
        self.results
            .iter()
            .map(ChunkResult::display_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
