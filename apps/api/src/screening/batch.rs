//! The per-batch screening loop: extract, score, rank.
//!
//! Files are processed strictly in upload order, one at a time. Nothing
//! escalates past the per-file boundary — an unreadable PDF or a failed
//! completion call degrades that file alone and the batch carries on.

use bytes::Bytes;
use tracing::{info, warn};

use crate::models::screening::{RankedResult, SkippedFile};
use crate::screening::extract::ResumeExtractor;
use crate::screening::scorer::Scorer;

/// One uploaded resume, held fully in memory for the duration of the run.
pub struct UploadedResume {
    pub filename: String,
    pub bytes: Bytes,
}

/// Everything one screening run produces: the ranked collection plus the
/// files that never made it past extraction.
pub struct ScreeningOutcome {
    pub ranked: Vec<RankedResult>,
    pub skipped: Vec<SkippedFile>,
}

/// Runs the full pipeline over a batch of uploads.
///
/// The ranked collection is sorted by score descending; `sort_by` is stable,
/// so ties keep the order the files were processed in.
pub async fn run_screening(
    scorer: &Scorer,
    extractor: &dyn ResumeExtractor,
    job_description: &str,
    uploads: Vec<UploadedResume>,
) -> ScreeningOutcome {
    let mut ranked = Vec::new();
    let mut skipped = Vec::new();

    for upload in uploads {
        let resume_text = match extractor.extract(&upload.bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!(filename = %upload.filename, "skipping resume: {e}");
                skipped.push(SkippedFile {
                    filename: upload.filename,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let scored = scorer.score(job_description, &resume_text).await;
        ranked.push(RankedResult::new(upload.filename, scored));
    }

    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    info!(
        processed = ranked.len(),
        skipped = skipped.len(),
        "screening run complete"
    );

    ScreeningOutcome { ranked, skipped }
}
