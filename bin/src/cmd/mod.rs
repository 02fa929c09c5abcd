//! CLI subcommand modules.
//!
//! This module contains the implementations for all capval CLI subcommands.

pub(crate) mod compute;
pub(crate) mod report;
pub(crate) mod template;
