//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - search inputs (`Bases`, `SearchInput`)
//! - search outputs (`SearchResult`, `Report`)
//! - run configuration (`SearchConfig`, `OutputFormat`)

pub mod types;

pub use types::*;
