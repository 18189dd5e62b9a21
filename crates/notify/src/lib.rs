//! Notifications that depend on a message-service abstraction, not on a
//! concrete transport.

pub mod notifier;
pub mod service;

pub use notifier::Notifier;
pub use service::{EmailSender, MessageService, SmsSender};
