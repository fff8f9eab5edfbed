//! Reading and validating user-supplied numbers.
//!
//! - value checks shared by the CLI, the prompt loop and `SearchInput::new` (`validate`)
//! - line-oriented interactive prompting (`prompt`)

pub mod prompt;
pub mod validate;

pub use prompt::*;
pub use validate::*;
