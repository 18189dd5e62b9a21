//! Composition root: wires entities, providers and contexts together and
//! runs one explicit demo per design principle.

pub mod billing;
pub mod config;
pub mod demos;

pub use billing::BillingDesk;
pub use config::{ConfigError, PlaygroundConfig};
