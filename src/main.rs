//! # Crusty's Pizza
//!
//! Entry point for the interactive order desk.
//!
//! 1. Sets up tracing (controlled by `RUST_LOG`, written to stderr).
//! 2. Runs a [`Session`] on the terminal until the operator declines another order.
//!
//! Input that cannot be recovered from (end of input, a word where a number
//! was expected) ends the run with a non-zero exit status.

use crusty_pizza::console::StdConsole;
use crusty_pizza::lifecycle::{setup_tracing, Session};
use tracing::{error, info};

fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting order desk");
    let mut session = Session::new(StdConsole::new());

    if let Err(e) = session.run() {
        error!(error = %e, "Session ended with an error");
        return Err(e.to_string());
    }

    info!("Order desk closed");
    Ok(())
}
