//! Translate spreadsheet workbooks into SQL INSERT statements.
#![warn(missing_docs)]

/// The error taxonomy shared across the pipeline.
pub mod error;
/// SQL text generation: literals, row value lists, and INSERT statements.
pub mod generator;
/// Cell normalization and column selection.
pub mod normalizer;
/// Output-target resolution and writing.
pub mod output;
/// Workbook loading: sheet selection and raw-cell extraction.
pub mod reader;
