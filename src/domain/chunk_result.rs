use std::fmt;

/// Outcome of transcribing one chunk: recognized text or a typed failure.
///
/// Exactly one result exists per chunk, matched by chunk index. Failures
/// degrade that chunk's transcript line only; they never abort the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkResult {
    Text(String),
    Failure(ChunkFailure),
}

impl ChunkResult {
    /// The text rendered for this chunk's transcript line. Recognized text
    /// is passed through verbatim; failures render a fixed marker.
    pub fn display_line(&self) -> &str {
        match self {
            ChunkResult::Text(text) => text,
            ChunkResult::Failure(failure) => failure.marker(),
        }
    }
}

/// Recoverable per-chunk failure categories, distinct from request-fatal
/// errors (decode failure, empty input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkFailure {
    /// Re-encoding the chunk for the recognition backend failed.
    ConversionFailed,
    /// The backend understood the audio signal but produced no text.
    Unintelligible,
    /// Transport, backend or timeout error.
    ServiceUnavailable,
}

impl ChunkFailure {
    pub fn marker(&self) -> &'static str {
        match self {
            ChunkFailure::ConversionFailed => "[Audio conversion failed]",
            ChunkFailure::Unintelligible => "[Unrecognized speech]",
            ChunkFailure::ServiceUnavailable => "[API error or network issue]",
        }
    }
}

impl fmt::Display for ChunkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}
