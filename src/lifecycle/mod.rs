//! # Session Lifecycle
//!
//! This module runs the order desk from the welcome banner to the farewell.
//!
//! ## The Session Pattern
//!
//! The [`Session`] owns everything a run needs: the [`Console`](crate::console::Console)
//! it talks through, the [`OrderStore`](crate::store::OrderStore) and the
//! [`Menu`](crate::menu::Menu). Nothing is global.
//!
//! One order cycle is an explicit state machine. Each call to
//! [`Session::step`] performs one state's work and returns the next state:
//!
//! ```text
//! AwaitOrderType -> CollectCustomer -> CollectPizzas -> Summarize
//!     -> KitchenDisplay -> OfferCancel -> OfferModify -> OfferContinue
//!     -> AwaitOrderType | Terminate
//! ```
//!
//! Two transitions leave the happy path early:
//! - an unknown order type goes back to `AwaitOrderType`
//! - a pizza count over the limit abandons the order and goes back to `AwaitOrderType`
//!
//! ## Errors
//!
//! Bad answers are handled inside the states by asking again or by skipping
//! ahead. Only [`SessionError`] escapes `step`, and it ends the run.
//!
//! ## Observability & Tracing
//!
//! [`setup_tracing`] installs the log subscriber. Logs go to stderr so they
//! never interleave with the prompts on stdout.
//!
//! ```bash
//! RUST_LOG=info cargo run      # order created / cancelled / modified
//! RUST_LOG=debug cargo run     # every transition and payload
//! ```

pub mod error;
pub mod session;
pub mod tracing;

pub use error::*;
pub use session::*;
pub use self::tracing::*;
