use std::sync::Arc;

use solidkit_core::Effect;
use solidkit_invoicing::{Invoice, InvoicePersistence};
use solidkit_notify::MessageService;

/// Context combining two capabilities: store an invoice, then tell the
/// customer what they owe.
#[derive(Clone)]
pub struct BillingDesk {
    persistence: Arc<dyn InvoicePersistence>,
    messages: Arc<dyn MessageService>,
}

impl BillingDesk {
    pub fn new(persistence: Arc<dyn InvoicePersistence>, messages: Arc<dyn MessageService>) -> Self {
        Self {
            persistence,
            messages,
        }
    }

    /// The notification text sent for `invoice`.
    pub fn notice(invoice: &Invoice) -> String {
        format!("Invoice {} total {}", invoice.id_typed(), invoice.total())
    }

    /// Save `invoice`, then notify `to`. Effects are returned in that order.
    pub fn settle(&self, invoice: &Invoice, to: &str) -> Vec<Effect> {
        tracing::info!(invoice_id = %invoice.id_typed(), recipient = to, "settling invoice");
        let saved = self.persistence.save(invoice);
        let sent = self.messages.send_message(to, &Self::notice(invoice));
        vec![saved, sent]
    }
}
