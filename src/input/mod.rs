//! # Input Validator
//!
//! Prompts that keep asking until the operator gives an acceptable answer.
//!
//! - [`validate`] - the re-prompting readers and the pure predicates behind them
//! - [`error`] - [`InputError`] for failures that cannot be fixed by asking again

pub mod error;
pub mod validate;

pub use error::*;
pub use validate::*;
