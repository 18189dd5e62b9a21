use thiserror::Error;

use solidkit_core::{Capability, DomainError, DomainResult, Effect, EffectSink, RecordingSink};

/// Handle one error.
///
/// Postcondition: handling emits, to the given sink, an effect containing
/// [`handled_line`] for the error's message. Variants may add lines, never
/// drop it.
pub trait HandleError: Send + Sync {
    fn message(&self) -> &str;

    /// Emit the handling effect to `sink` and return it.
    fn handle_error(&self, sink: &dyn EffectSink) -> Effect;
}

/// The line every handled error must report.
pub fn handled_line(message: &str) -> String {
    format!("Handling error: {message}")
}

/// Plain error with a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StandardError {
    message: String,
}

impl StandardError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn report_lines(&self) -> Vec<String> {
        vec![handled_line(&self.message)]
    }
}

impl HandleError for StandardError {
    fn message(&self) -> &str {
        &self.message
    }

    fn handle_error(&self, sink: &dyn EffectSink) -> Effect {
        let effect =
            Effect::new(Capability::ErrorHandling, "standard").with_lines(self.report_lines());
        sink.emit(&effect);
        effect
    }
}

/// Error carrying a numeric code. Reports like [`StandardError`], then the code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{base} (code {code})")]
pub struct CriticalError {
    base: StandardError,
    code: u16,
}

impl CriticalError {
    pub fn new(message: impl Into<String>, code: u16) -> Self {
        Self {
            base: StandardError::new(message),
            code,
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }
}

impl HandleError for CriticalError {
    fn message(&self) -> &str {
        self.base.message()
    }

    fn handle_error(&self, sink: &dyn EffectSink) -> Effect {
        let effect = Effect::new(Capability::ErrorHandling, "critical")
            .with_lines(self.base.report_lines())
            .with_line(format!("Critical error code: {}", self.code));
        sink.emit(&effect);
        effect
    }
}

/// Check that `handler`, used through the shared interface, still emits the
/// base report for `expected_message` (the message the error was built with).
///
/// Only what reaches the sink counts; the return value is not trusted.
/// Returns the recorded effect on success.
pub fn verify_substitutable(
    handler: &dyn HandleError,
    expected_message: &str,
) -> DomainResult<Effect> {
    let sink = RecordingSink::new();
    handler.handle_error(&sink);

    let expected = handled_line(expected_message);
    sink.take()
        .into_iter()
        .find(|effect| effect.contains_line(&expected))
        .ok_or_else(|| {
            DomainError::invariant(format!("error handler did not report `{expected}`"))
        })
}
