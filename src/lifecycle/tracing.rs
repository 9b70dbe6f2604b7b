//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Verbosity comes from the `RUST_LOG` environment variable. With it unset only
//! errors are logged, which keeps an operator's terminal quiet.
//!
//! - **Compact format** with the crate/module prefix hidden (`with_target(false)`)
//! - **stderr output** so log lines never mix with prompts
//!
//! ## What Gets Traced
//!
//! - **Session**: start, every state transition (debug), farewell
//! - **Orders**: stored, cancelled, modified, abandoned
//! - **Input**: rejected names, phone numbers and menu selections (debug)
//!
//! ## Usage Examples
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run
//! RUST_LOG=crusty_pizza::store=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a cancelled delivery looks like:
//!
//! ```text
//! INFO step: Order created number=1 pizzas=2 total=$19.50 state="Summarize"
//! INFO step:append: Order stored number=1 size=1 state="Summarize" customer=Amy
//! INFO step:remove_last: Last order removed size=0 state="OfferCancel"
//! INFO step: Order cancelled customer=Amy state="OfferCancel"
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
