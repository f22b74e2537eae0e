//! Shortlist — screens candidate resumes against a job description.
//!
//! The pipeline extracts text from uploaded PDFs, sends each resume with the
//! job description to Groq's completion endpoint, parses the reply into a
//! match score with matched/missing qualifications, and ranks the batch by
//! score. A thin axum surface drives the pipeline and serves the results.

pub mod config;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod screening;
pub mod state;
