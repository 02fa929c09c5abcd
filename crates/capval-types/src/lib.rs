#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types for the capval valuation toolkit.
//!
//! Every value here is constructed fresh for a single valuation run and is
//! never mutated once built.

/// The version of the capval-types crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod types;

pub use error::{CapvalError, Result};
pub use types::{ReportMetadata, ValuationInputs, ValuationResult, YearInputs};
