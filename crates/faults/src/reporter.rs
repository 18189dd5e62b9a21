use std::sync::Arc;

use solidkit_core::{Effect, EffectSink};

use crate::handling::HandleError;

/// Context: hands any error variant the injected sink to report through.
///
/// Works only against [`HandleError`], so every variant is used the same way.
#[derive(Clone)]
pub struct ErrorReporter {
    sink: Arc<dyn EffectSink>,
}

impl ErrorReporter {
    pub fn new(sink: Arc<dyn EffectSink>) -> Self {
        Self { sink }
    }

    pub fn report(&self, error: &dyn HandleError) -> Effect {
        tracing::debug!(error_message = error.message(), "handling error");
        error.handle_error(&*self.sink)
    }
}
