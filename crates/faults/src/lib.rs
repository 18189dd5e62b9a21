//! Error handling as a capability.
//!
//! Every variant implements [`HandleError`] independently; a specialized
//! variant reuses the standard report by composition instead of overriding it.
//! [`verify_substitutable`] checks that a variant still produces the report
//! callers rely on.

pub mod handling;
pub mod reporter;

pub use handling::{CriticalError, HandleError, StandardError, handled_line, verify_substitutable};
pub use reporter::ErrorReporter;
