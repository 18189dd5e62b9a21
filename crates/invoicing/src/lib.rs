//! Invoicing: the invoice entity and the providers that act on it.
//!
//! The `Invoice` itself only computes; rendering lives in [`InvoicePrinter`] and
//! storage behind the [`InvoicePersistence`] capability, so each has exactly one
//! reason to change.

pub mod invoice;
pub mod persistence;
pub mod printer;
pub mod product;

pub use invoice::{Discount, Invoice, InvoiceId};
pub use persistence::{InvoiceArchive, InvoicePersistence, LocalStore, RemoteStore};
pub use printer::InvoicePrinter;
pub use product::Product;
