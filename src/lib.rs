//! # Crusty's Pizza Order Desk
//!
//! > **An interactive order-taking loop for a single pizza shop.**
//!
//! An operator answers prompts to take pickup and delivery orders. The desk
//! prices each order, shows it to the kitchen, and lets the operator cancel
//! or modify orders before moving on. Orders live in memory for one run.
//!
//! ## 🏗️ Design Philosophy
//!
//! - **Explicit state machine**: one order cycle is a sequence of named
//!   [`SessionState`](lifecycle::SessionState)s, and each transition is a plain
//!   function call that tests can drive one step at a time.
//! - **Owned session state**: the [`OrderStore`](store::OrderStore) belongs to
//!   the [`Session`](lifecycle::Session). There is no global list.
//! - **Typed records**: [`Order`](model::Order) and [`LineItem`](model::LineItem)
//!   carry named fields; money is whole cents so totals are exact.
//! - **I/O behind a trait**: the session only sees a
//!   [`Console`](console::Console), so tests replay a scripted operator.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`], [`menu`])
//! - **Role**: Orders, line items, money, and the fixed pizza catalog.
//! - **Key items**: [`Order`](model::Order), [`OrderUpdate`](model::OrderUpdate), [`Menu`](menu::Menu).
//!
//! ### 2. The Input ([`console`], [`input`])
//! - **Role**: Line I/O and the prompts that re-ask until the answer is valid.
//! - **Key items**: [`read_valid_name`](input::read_valid_name), [`read_valid_phone`](input::read_valid_phone), [`read_yes_no`](input::read_yes_no).
//!
//! ### 3. The Work ([`builder`], [`store`], [`render`])
//! - **Role**: Turning menu numbers into priced items, holding orders, and formatting them.
//! - **Key items**: [`collect_line_items`](builder::collect_line_items), [`OrderStore`](store::OrderStore).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: Runs the session loop and sets up logging.
//! - **Key items**: [`Session`](lifecycle::Session), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! cargo run
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod builder;
pub mod console;
pub mod input;
pub mod lifecycle;
pub mod menu;
pub mod model;
pub mod render;
pub mod store;
