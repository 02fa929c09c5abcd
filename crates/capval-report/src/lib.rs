//! Report generation for capval valuations.
//!
//! A report is first assembled as a format-independent [`ReportDocument`]
//! (an ordered list of title, heading and paragraph blocks) and then rendered
//! to a `.docx` byte stream. Writing the bytes anywhere is left to the caller.
//!
//! # Examples
//!
//! ```rust,ignore
//! use capval_report::{ReportBuilder, report_filename};
//! use capval_types::ReportMetadata;
//!
//! let metadata = ReportMetadata::new("Project A").with_assumptions("Flat margins");
//! let bytes = ReportBuilder::default().build(&metadata, &result)?;
//! std::fs::write(report_filename(&metadata.project_name), bytes)?;
//! ```

mod builder;
mod document;
pub mod format;

// Re-export main types
pub use builder::{ReportBuilder, ReportConfig, ReportFile, report_filename};
pub use document::{ReportBlock, ReportDocument};
pub use format::{format_currency, format_percent};
