//! CSV export of the ranked collection.
//!
//! One row per ranked resume with columns `filename, score, matches, gaps`;
//! the match/gap lists are serialized as their textual list representation.

use crate::models::screening::RankedResult;

/// Filename offered to the client in the Content-Disposition header.
pub const EXPORT_FILENAME: &str = "resume_screening_results.csv";

/// Serializes the ranked collection into CSV bytes.
pub fn results_to_csv(results: &[RankedResult]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["filename", "score", "matches", "gaps"])?;

    for result in results {
        writer.write_record([
            result.filename.as_str(),
            &result.score.to_string(),
            &format!("{:?}", result.matches),
            &format!("{:?}", result.gaps),
        ])?;
    }

    Ok(writer.into_inner().map_err(|e| e.into_error())?)
}
