//! Result types produced by the screening pipeline.

use serde::{Deserialize, Serialize};

/// Outcome of scoring one resume against the job description.
///
/// `score: 0` doubles as the failure/unparsed default — a reply that never
/// produced a parseable `SCORE:` line and a failed completion call both land
/// here, distinguished only by what `raw_reply` carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Match score in 0–100 as reported by the model.
    pub score: u32,
    /// Full trimmed reply (or the error text when the call failed),
    /// preserved verbatim for manual inspection.
    pub raw_reply: String,
    /// Matched-qualification lines, in reply order, prefix included.
    pub matches: Vec<String>,
    /// Missing-qualification lines, in reply order, prefix included.
    pub gaps: Vec<String>,
}

impl ScoreResult {
    /// Zero-score placeholder carrying an explanation instead of a reply.
    pub fn degraded(reason: impl Into<String>) -> Self {
        Self {
            score: 0,
            raw_reply: reason.into(),
            matches: Vec::new(),
            gaps: Vec::new(),
        }
    }
}

/// One entry of the ranked output collection. Only resumes whose extraction
/// succeeded ever become a `RankedResult`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResult {
    pub filename: String,
    pub score: u32,
    pub matches: Vec<String>,
    pub gaps: Vec<String>,
    pub raw_reply: String,
}

impl RankedResult {
    pub fn new(filename: String, scored: ScoreResult) -> Self {
        Self {
            filename,
            score: scored.score,
            matches: scored.matches,
            gaps: scored.gaps,
            raw_reply: scored.raw_reply,
        }
    }
}

/// A file dropped from the batch at extraction time, reported to the caller
/// alongside the ranked collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFile {
    pub filename: String,
    pub reason: String,
}
