//! Terminal client for the Hall of the Mountain King.
//!
//! The binary wires these pieces together:
//! - [`ClientConfig`] reads `MK_*` environment variables
//! - [`logging`] installs the tracing subscriber
//! - [`Console`] narrates to the terminal and reads menu answers
//! - [`Campaign`] plays scenes in order with the premade party
pub mod campaign;
pub mod config;
pub mod console;
pub mod logging;

pub use campaign::{Campaign, CampaignResult};
pub use config::ClientConfig;
pub use console::Console;
