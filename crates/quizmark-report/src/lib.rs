//! quizmark-report — file emission for generated quiz reports.
//!
//! Report records are computed by `quizmark-core`; this crate owns the
//! on-disk formats: the three CSV export files and a JSON bundle that
//! round-trips the whole report set.

pub mod csv;
pub mod json;
