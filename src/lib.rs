//! EquationShot - Batch LaTeX equation to Word document conversion.
//!
//! This crate accepts equation batches (raw LaTeX lines or JSONL records)
//! over HTTP, sanitizes and assembles them into a TeX document, and
//! converts it to a downloadable .docx via an external Pandoc process.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
