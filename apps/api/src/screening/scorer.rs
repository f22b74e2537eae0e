//! Scorer — sends one resume plus the job description to the completion
//! backend and parses the free-text reply into a `ScoreResult`.
//!
//! The reply parser is intentionally lenient: a reply that omits a marker or
//! reorders sections silently degrades to a partial (or zero-score) result
//! instead of erroring. The raw reply is always preserved so a human can
//! inspect what the model actually said. Scoring never fails outward — the
//! batch must survive any single bad reply.

use std::sync::Arc;

use tracing::warn;

use crate::llm_client::CompletionBackend;
use crate::models::screening::ScoreResult;
use crate::screening::prompts::{build_user_message, SCREENING_SYSTEM};

enum Backend {
    Ready(Arc<dyn CompletionBackend>),
    /// Credential missing or client construction failed at startup. The
    /// reason is echoed into every result's `raw_reply`.
    Disabled(String),
}

/// The scoring component. Holds the completion backend handed in at startup;
/// when disabled it returns zero-score placeholders without any network I/O.
pub struct Scorer {
    backend: Backend,
}

impl Scorer {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            backend: Backend::Ready(backend),
        }
    }

    pub fn disabled(reason: impl Into<String>) -> Self {
        Self {
            backend: Backend::Disabled(reason.into()),
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self.backend, Backend::Disabled(_))
    }

    /// Scores one resume against the job description.
    pub async fn score(&self, job_description: &str, resume_text: &str) -> ScoreResult {
        let backend = match &self.backend {
            Backend::Ready(backend) => backend,
            Backend::Disabled(reason) => return ScoreResult::degraded(reason.clone()),
        };

        let user = build_user_message(job_description, resume_text);
        match backend.complete(SCREENING_SYSTEM, &user).await {
            Ok(reply) => parse_reply(&reply),
            Err(e) => {
                warn!("completion call failed: {e}");
                ScoreResult::degraded(format!("Error: {e}"))
            }
        }
    }
}

/// Parses the model's reply into score, matches, and gaps.
///
/// Rules:
/// - first line starting with `SCORE:` wins; `%` stripped; parse failure → 0
/// - matches are the `- MATCH:`-prefixed lines strictly between the first
///   `MATCHES:` line and the first `GAPS:` line; both markers must exist
/// - gaps are the `- GAP:`-prefixed lines after the first `GAPS:` line,
///   independent of `MATCHES:`
/// - anything else in the reply is dropped, but the trimmed reply is kept
///   whole in `raw_reply`
pub fn parse_reply(reply: &str) -> ScoreResult {
    let raw_reply = reply.trim().to_string();
    let lines: Vec<&str> = raw_reply
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut score = 0;
    for line in &lines {
        if let Some(rest) = line.strip_prefix("SCORE:") {
            score = rest.replace('%', "").trim().parse().unwrap_or(0);
            break;
        }
    }

    let matches_at = lines.iter().position(|line| *line == "MATCHES:");
    let gaps_at = lines.iter().position(|line| *line == "GAPS:");

    let matches = match (matches_at, gaps_at) {
        // A GAPS: marker at or before MATCHES: leaves nothing between them.
        (Some(m), Some(g)) if g > m => lines[m + 1..g]
            .iter()
            .filter(|line| line.starts_with("- MATCH:"))
            .map(|line| line.to_string())
            .collect(),
        _ => Vec::new(),
    };

    let gaps = match gaps_at {
        Some(g) => lines[g + 1..]
            .iter()
            .filter(|line| line.starts_with("- GAP:"))
            .map(|line| line.to_string())
            .collect(),
        None => Vec::new(),
    };

    ScoreResult {
        score,
        raw_reply,
        matches,
        gaps,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;

    const DOCUMENTED_REPLY: &str =
        "SCORE: 82%\nMATCHES:\n- MATCH: Python\n- MATCH: SQL\nGAPS:\n- GAP: Docker";

    /// Returns a fixed reply and counts how many times it was asked.
    struct CannedBackend {
        reply: String,
        calls: AtomicUsize,
    }

    impl CannedBackend {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CompletionBackend for CannedBackend {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl CompletionBackend for FailingBackend {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 500,
                message: "upstream unavailable".to_string(),
            })
        }
    }

    #[test]
    fn test_documented_reply_round_trips() {
        let result = parse_reply(DOCUMENTED_REPLY);
        assert_eq!(result.score, 82);
        assert_eq!(result.matches, vec!["- MATCH: Python", "- MATCH: SQL"]);
        assert_eq!(result.gaps, vec!["- GAP: Docker"]);
        assert_eq!(result.raw_reply, DOCUMENTED_REPLY);
    }

    #[test]
    fn test_missing_score_line_defaults_to_zero() {
        let result = parse_reply("MATCHES:\n- MATCH: Rust\nGAPS:\n- GAP: Go");
        assert_eq!(result.score, 0);
        assert_eq!(result.matches, vec!["- MATCH: Rust"]);
        assert_eq!(result.gaps, vec!["- GAP: Go"]);
    }

    #[test]
    fn test_unparseable_score_defaults_to_zero() {
        let result = parse_reply("SCORE: high%\nMATCHES:\nGAPS:");
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_first_score_line_wins() {
        let result = parse_reply("SCORE: 40%\nSCORE: 90%");
        assert_eq!(result.score, 40);
    }

    #[test]
    fn test_percent_signs_and_padding_stripped() {
        let result = parse_reply("  SCORE:  73 %% \n");
        assert_eq!(result.score, 73);
    }

    #[test]
    fn test_gaps_without_matches_marker() {
        let result = parse_reply("SCORE: 55%\nGAPS:\n- GAP: Kubernetes\n- GAP: Terraform");
        assert!(result.matches.is_empty());
        assert_eq!(result.gaps, vec!["- GAP: Kubernetes", "- GAP: Terraform"]);
    }

    #[test]
    fn test_matches_without_gaps_marker_yields_no_matches() {
        // Both markers are required to delimit the matches block.
        let result = parse_reply("SCORE: 70%\nMATCHES:\n- MATCH: Python");
        assert!(result.matches.is_empty());
        assert!(result.gaps.is_empty());
    }

    #[test]
    fn test_gaps_marker_before_matches_marker() {
        let result = parse_reply("GAPS:\n- GAP: Docker\nMATCHES:\n- MATCH: SQL");
        assert!(result.matches.is_empty());
        // Lines after GAPS: include the stray MATCH line, which the prefix
        // filter drops; the GAP line survives.
        assert_eq!(result.gaps, vec!["- GAP: Docker"]);
    }

    #[test]
    fn test_unprefixed_lines_between_markers_are_dropped() {
        let reply = "SCORE: 60%\nMATCHES:\nHere are the matches:\n- MATCH: SQL\n* MATCH: Java\nGAPS:\n- GAP: AWS";
        let result = parse_reply(reply);
        assert_eq!(result.matches, vec!["- MATCH: SQL"]);
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let reply = "SCORE: 50%\nMATCHES:\n- MATCH: SQL\n- MATCH: SQL\n- MATCH: Python\nGAPS:";
        let result = parse_reply(reply);
        assert_eq!(
            result.matches,
            vec!["- MATCH: SQL", "- MATCH: SQL", "- MATCH: Python"]
        );
    }

    #[test]
    fn test_raw_reply_is_trimmed_original() {
        let result = parse_reply("\n  gibberish that matches nothing  \n");
        assert_eq!(result.score, 0);
        assert_eq!(result.raw_reply, "gibberish that matches nothing");
        assert!(result.matches.is_empty());
        assert!(result.gaps.is_empty());
    }

    #[tokio::test]
    async fn test_score_parses_backend_reply() {
        let backend = Arc::new(CannedBackend::new(DOCUMENTED_REPLY));
        let scorer = Scorer::new(backend.clone());
        let result = scorer.score("Looking for a data engineer", "resume text").await;
        assert_eq!(result.score, 82);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_call_degrades_to_zero_score() {
        let scorer = Scorer::new(Arc::new(FailingBackend));
        let result = scorer.score("jd", "resume").await;
        assert_eq!(result.score, 0);
        assert!(result.raw_reply.starts_with("Error:"));
        assert!(result.raw_reply.contains("upstream unavailable"));
        assert!(result.matches.is_empty());
        assert!(result.gaps.is_empty());
    }

    #[tokio::test]
    async fn test_disabled_scorer_returns_reason_without_io() {
        let scorer = Scorer::disabled("No Groq connection available: GROQ_API_KEY is not set");
        let result = scorer.score("jd", "resume").await;
        assert_eq!(result.score, 0);
        assert!(result.raw_reply.contains("No Groq connection available"));
        assert!(result.matches.is_empty());
        assert!(result.gaps.is_empty());
        assert!(scorer.is_disabled());
    }
}
