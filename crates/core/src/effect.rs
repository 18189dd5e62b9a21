//! Side-effect records and the sinks they are written to.
//!
//! Providers in this workspace do not talk to databases, mail servers or
//! touch screens. Each operation instead produces an [`Effect`] describing
//! exactly what it would have done, and hands it to an [`EffectSink`].
//!
//! ## Determinism
//!
//! An `Effect` is a pure function of the call parameters: no counters, no
//! timestamps. Invoking the same provider twice with the same parameters yields
//! two equal, independent records.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// The capability an effect was produced through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Print,
    Persist,
    Notify,
    Gesture,
    ErrorHandling,
}

impl Capability {
    pub fn as_str(self) -> &'static str {
        match self {
            Capability::Print => "print",
            Capability::Persist => "persist",
            Capability::Notify => "notify",
            Capability::Gesture => "gesture",
            Capability::ErrorHandling => "error_handling",
        }
    }
}

impl core::fmt::Display for Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of one stub side effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub capability: Capability,
    /// Stable name of the provider that produced the effect (e.g. "email").
    pub provider: String,
    /// Human-readable output lines, in emission order.
    pub lines: Vec<String>,
}

impl Effect {
    pub fn new(capability: Capability, provider: impl Into<String>) -> Self {
        Self {
            capability,
            provider: provider.into(),
            lines: Vec::new(),
        }
    }

    /// Single-line effect.
    pub fn line(
        capability: Capability,
        provider: impl Into<String>,
        line: impl Into<String>,
    ) -> Self {
        Self::new(capability, provider).with_line(line)
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn contains_line(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }
}

/// Destination for provider side effects.
///
/// Emission is infallible: providers model no failure paths.
pub trait EffectSink: Send + Sync {
    fn emit(&self, effect: &Effect);
}

impl<S> EffectSink for Arc<S>
where
    S: EffectSink + ?Sized,
{
    fn emit(&self, effect: &Effect) {
        (**self).emit(effect)
    }
}

/// Writes every effect line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }

    pub fn shared() -> Arc<dyn EffectSink> {
        Arc::new(Self)
    }
}

impl EffectSink for ConsoleSink {
    fn emit(&self, effect: &Effect) {
        tracing::debug!(
            capability = %effect.capability,
            provider = %effect.provider,
            lines = effect.lines.len(),
            "effect emitted"
        );
        for line in &effect.lines {
            println!("{line}");
        }
    }
}

/// In-memory sink for tests/dev.
///
/// Effects are kept in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    effects: Mutex<Vec<Effect>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn effects(&self) -> Vec<Effect> {
        self.effects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain recorded effects.
    pub fn take(&self) -> Vec<Effect> {
        core::mem::take(&mut *self.effects.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// All recorded lines, flattened across effects.
    pub fn lines(&self) -> Vec<String> {
        self.effects()
            .into_iter()
            .flat_map(|effect| effect.lines)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.effects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EffectSink for RecordingSink {
    fn emit(&self, effect: &Effect) {
        self.effects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(effect.clone());
    }
}
