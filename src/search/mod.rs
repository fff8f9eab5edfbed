//! Exponent combination search.
//!
//! Responsibilities:
//!
//! - hold the fixed candidate exponent table
//! - enumerate every exponent tuple over that table (in a fixed order)
//! - pick the tuple whose product of powers lands closest to the target

pub mod candidates;
pub mod grid;
pub mod guesser;

pub use candidates::*;
pub use grid::*;
pub use guesser::*;
