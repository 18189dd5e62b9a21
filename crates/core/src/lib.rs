//! `solidkit-core` — shared building blocks for entities, capabilities and providers.
//!
//! This crate contains **pure** primitives plus the effect sink abstraction that
//! every provider writes its side effects through.

pub mod effect;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use effect::{Capability, ConsoleSink, Effect, EffectSink, RecordingSink};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
