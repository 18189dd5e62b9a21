//! Invoice rendering, kept apart from the entity it renders.

use std::sync::Arc;

use solidkit_core::{Capability, Effect, EffectSink};

use crate::invoice::Invoice;

const RULE: &str = "-----------------";

/// Prints invoices to an effect sink.
#[derive(Clone)]
pub struct InvoicePrinter {
    sink: Arc<dyn EffectSink>,
}

impl InvoicePrinter {
    pub fn new(sink: Arc<dyn EffectSink>) -> Self {
        Self { sink }
    }

    /// Pure rendering: the lines `print` would emit.
    pub fn render(invoice: &Invoice) -> Vec<String> {
        vec![
            RULE.to_string(),
            format!("Invoice {}", invoice.id_typed()),
            format!("Discount {}", invoice.discount()),
            format!("Total {}", invoice.total()),
            RULE.to_string(),
        ]
    }

    pub fn print(&self, invoice: &Invoice) -> Effect {
        let effect = Effect::new(Capability::Print, "printer").with_lines(Self::render(invoice));
        tracing::debug!(invoice_id = %invoice.id_typed(), "printing invoice");
        self.sink.emit(&effect);
        effect
    }
}

impl core::fmt::Debug for InvoicePrinter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InvoicePrinter").finish_non_exhaustive()
    }
}
