//! Invoice persistence behind a single-purpose capability.
//!
//! New backends are added by implementing [`InvoicePersistence`]; neither
//! [`InvoiceArchive`] nor [`Invoice`] changes when one is added.

use std::sync::Arc;

use serde_json::json;

use solidkit_core::{Capability, Effect, EffectSink};

use crate::invoice::Invoice;

/// Persist one invoice.
pub trait InvoicePersistence: Send + Sync {
    fn save(&self, invoice: &Invoice) -> Effect;
}

impl<P> InvoicePersistence for Arc<P>
where
    P: InvoicePersistence + ?Sized,
{
    fn save(&self, invoice: &Invoice) -> Effect {
        (**self).save(invoice)
    }
}

/// On-device store (stub).
pub struct LocalStore {
    sink: Arc<dyn EffectSink>,
}

impl LocalStore {
    pub fn new(sink: Arc<dyn EffectSink>) -> Self {
        Self { sink }
    }
}

impl InvoicePersistence for LocalStore {
    fn save(&self, invoice: &Invoice) -> Effect {
        let effect = Effect::line(
            Capability::Persist,
            "local",
            format!("save to local store {}", invoice.id_typed()),
        );
        self.sink.emit(&effect);
        effect
    }
}

/// Remote document store (stub). Ships the invoice as a JSON document.
pub struct RemoteStore {
    endpoint: String,
    sink: Arc<dyn EffectSink>,
}

impl RemoteStore {
    pub fn new(endpoint: impl Into<String>, sink: Arc<dyn EffectSink>) -> Self {
        Self {
            endpoint: endpoint.into(),
            sink,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The document body sent for `invoice`.
    pub fn document(invoice: &Invoice) -> serde_json::Value {
        let prices: Vec<f64> = invoice.products().iter().map(|p| p.price()).collect();
        json!({
            "id": invoice.id_typed().to_string(),
            "prices": prices,
            "discount": invoice.discount().percent(),
            "total": invoice.total(),
        })
    }
}

impl InvoicePersistence for RemoteStore {
    fn save(&self, invoice: &Invoice) -> Effect {
        let effect = Effect::new(Capability::Persist, "remote")
            .with_line(format!(
                "save to remote store {} {}",
                self.endpoint,
                invoice.id_typed()
            ))
            .with_line(Self::document(invoice).to_string());
        self.sink.emit(&effect);
        effect
    }
}

/// Context: saves invoices through whichever backend was injected.
#[derive(Clone)]
pub struct InvoiceArchive {
    persistence: Arc<dyn InvoicePersistence>,
}

impl InvoiceArchive {
    pub fn new(persistence: Arc<dyn InvoicePersistence>) -> Self {
        Self { persistence }
    }

    pub fn save(&self, invoice: &Invoice) -> Effect {
        tracing::debug!(invoice_id = %invoice.id_typed(), "archiving invoice");
        self.persistence.save(invoice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solidkit_core::RecordingSink;

    fn sample_invoice() -> Invoice {
        Invoice::from_prices(&[10.0, 30.0, 100.0], 10.0).unwrap()
    }

    #[test]
    fn archive_forwards_to_local_store() {
        let sink = Arc::new(RecordingSink::new());
        let archive = InvoiceArchive::new(Arc::new(LocalStore::new(sink.clone())));
        let invoice = sample_invoice();

        let effect = archive.save(&invoice);

        assert_eq!(effect.provider, "local");
        assert_eq!(
            effect.lines,
            vec![format!("save to local store {}", invoice.id_typed())]
        );
        assert_eq!(sink.effects(), vec![effect]);
    }

    #[test]
    fn remote_store_sends_json_document() {
        let sink = Arc::new(RecordingSink::new());
        let store = RemoteStore::new("https://store.invalid/invoices", sink.clone());
        let invoice = sample_invoice();

        let effect = InvoiceArchive::new(Arc::new(store)).save(&invoice);

        assert_eq!(effect.lines.len(), 2);
        assert!(effect.lines[0].starts_with("save to remote store https://store.invalid/invoices"));
        let doc: serde_json::Value = serde_json::from_str(&effect.lines[1]).unwrap();
        assert_eq!(doc["id"], invoice.id_typed().to_string());
        assert_eq!(doc["total"], 126.0);
        assert_eq!(doc["prices"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn empty_invoice_document_has_positive_zero_total() {
        let invoice = Invoice::from_prices(&[], 0.0).unwrap();

        let doc = RemoteStore::document(&invoice).to_string();

        assert!(doc.contains("\"total\":0.0"), "{doc}");
        assert!(!doc.contains("-0.0"), "{doc}");
    }

    #[test]
    fn repeated_saves_produce_identical_independent_records() {
        let sink = Arc::new(RecordingSink::new());
        let store = LocalStore::new(sink.clone());
        let invoice = sample_invoice();

        let first = store.save(&invoice);
        let second = store.save(&invoice);

        assert_eq!(first, second);
        assert_eq!(sink.effects(), vec![first, second]);
    }

    #[test]
    fn swapping_backend_leaves_invoice_untouched() {
        let sink = Arc::new(RecordingSink::new());
        let invoice = sample_invoice();
        let before = invoice.clone();

        let local = InvoiceArchive::new(Arc::new(LocalStore::new(sink.clone())));
        let remote = InvoiceArchive::new(Arc::new(RemoteStore::new("r", sink.clone())));
        let a = local.save(&invoice);
        let b = remote.save(&invoice);

        assert_ne!(a.provider, b.provider);
        assert_eq!(invoice, before);
    }
}
