//! `dejager` library crate.
//!
//! Approximates a positive constant as `w^a * x^b * y^c * z^d`, where `w..z`
//! are four personal numbers and `a..d` come from a fixed table of 17 small
//! exponents. The binary (`dejager`) is a thin wrapper around this library so
//! the search and the prompt/report plumbing are testable without spawning
//! processes.

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod input;
pub mod logging;
pub mod report;
pub mod search;
