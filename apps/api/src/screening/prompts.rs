//! Prompts for the screening scorer. The reply format mandated here is what
//! `scorer::parse_reply` understands — change them together or not at all.

/// System instruction for resume scoring. Llama follows this format reliably
/// at low temperature.
pub const SCREENING_SYSTEM: &str = "\
You are a senior HR recruiter with 10+ years of experience.
Follow these instructions EXACTLY:
1. Give a MATCH SCORE from 0-100% (whole number only)
2. List 3-5 KEY MATCHES (start with \"MATCH: \")
3. List 2-3 KEY GAPS (start with \"GAP: \")
FORMAT YOUR RESPONSE LIKE THIS:
SCORE: [NUMBER]%
MATCHES:
- MATCH: [Skill 1]
- MATCH: [Skill 2]
GAPS:
- GAP: [Missing Skill 1]
- GAP: [Missing Skill 2]";

/// User message pairing the job description with one resume's text.
pub fn build_user_message(job_description: &str, resume_text: &str) -> String {
    format!("JOB DESCRIPTION: {job_description}\nRESUME: {resume_text}")
}
