//! The resume-to-score pipeline: PDF text extraction, prompt construction,
//! remote completion invocation, and structured-field extraction from the
//! model's free-text reply.

pub mod batch;
pub mod export;
pub mod extract;
pub mod handlers;
pub mod prompts;
pub mod scorer;
