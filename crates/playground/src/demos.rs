//! One entry point per principle. Nothing runs at load time; callers pick
//! what to run and which sink receives the output.

use std::sync::Arc;

use solidkit_core::{DomainResult, Effect, EffectSink};
use solidkit_faults::{CriticalError, ErrorReporter, StandardError, verify_substitutable};
use solidkit_gestures::{
    Button, DoubleTapHandler, Gesture, GestureRouter, LongPressHandler, TapHandler,
};
use solidkit_invoicing::{Invoice, InvoiceArchive, InvoicePrinter, LocalStore, RemoteStore};
use solidkit_notify::{EmailSender, Notifier, SmsSender};

use crate::billing::BillingDesk;
use crate::config::PlaygroundConfig;

/// Signature shared by every demo. The invoice is built once by the caller
/// and shared, so every step refers to the same id.
pub type Demo = fn(&PlaygroundConfig, &Invoice, Arc<dyn EffectSink>) -> DomainResult<Vec<Effect>>;

/// The invoice every demo works on.
pub fn invoice_from(config: &PlaygroundConfig) -> DomainResult<Invoice> {
    Invoice::from_prices(&config.prices, config.discount)
}

/// Rendering is the printer's job, not the invoice's.
pub fn single_responsibility(
    _config: &PlaygroundConfig,
    invoice: &Invoice,
    sink: Arc<dyn EffectSink>,
) -> DomainResult<Vec<Effect>> {
    tracing::info!("single responsibility");
    let printer = InvoicePrinter::new(sink);
    Ok(vec![printer.print(invoice)])
}

/// The archive saves through whichever backend it is given.
pub fn open_closed(
    config: &PlaygroundConfig,
    invoice: &Invoice,
    sink: Arc<dyn EffectSink>,
) -> DomainResult<Vec<Effect>> {
    tracing::info!("open/closed");
    let local = InvoiceArchive::new(Arc::new(LocalStore::new(sink.clone())));
    let remote = InvoiceArchive::new(Arc::new(RemoteStore::new(
        config.remote_endpoint.clone(),
        sink,
    )));
    Ok(vec![local.save(invoice), remote.save(invoice)])
}

/// A critical error handled through the shared interface still reports.
pub fn liskov_substitution(
    _config: &PlaygroundConfig,
    _invoice: &Invoice,
    sink: Arc<dyn EffectSink>,
) -> DomainResult<Vec<Effect>> {
    tracing::info!("liskov substitution");
    const MESSAGE: &str = "Something went wrong";

    let reporter = ErrorReporter::new(sink);
    let standard = StandardError::new(MESSAGE);
    let critical = CriticalError::new(MESSAGE, 500);

    verify_substitutable(&critical, MESSAGE)?;
    Ok(vec![reporter.report(&standard), reporter.report(&critical)])
}

/// Handlers only implement the gestures they care about.
pub fn interface_segregation(
    _config: &PlaygroundConfig,
    _invoice: &Invoice,
    sink: Arc<dyn EffectSink>,
) -> DomainResult<Vec<Effect>> {
    tracing::info!("interface segregation");
    let button = Arc::new(Button::new("button", sink.clone()));
    let full = GestureRouter::new()
        .with_tap(button.clone())
        .with_double_tap(button.clone())
        .with_long_press(button);
    let split = GestureRouter::new()
        .with_tap(Arc::new(TapHandler::new("tap handler", sink.clone())))
        .with_double_tap(Arc::new(DoubleTapHandler::new(
            "double tap handler",
            sink.clone(),
        )))
        .with_long_press(Arc::new(LongPressHandler::new("long press handler", sink)));

    let effects = Gesture::ALL
        .into_iter()
        .flat_map(|gesture| [full.dispatch(gesture), split.dispatch(gesture)])
        .flatten()
        .collect();
    Ok(effects)
}

/// The notifier and billing desk depend on abstractions chosen here.
pub fn dependency_inversion(
    config: &PlaygroundConfig,
    invoice: &Invoice,
    sink: Arc<dyn EffectSink>,
) -> DomainResult<Vec<Effect>> {
    tracing::info!("dependency inversion");
    let email = Notifier::new(Arc::new(EmailSender::new(sink.clone())));
    let sms = Notifier::new(Arc::new(SmsSender::new(sink.clone())));

    let mut effects = vec![
        email.send_notification(&config.recipient, "You have a new email"),
        sms.send_notification(&config.recipient, "You have a new SMS"),
    ];

    let desk = BillingDesk::new(
        Arc::new(LocalStore::new(sink.clone())),
        Arc::new(EmailSender::new(sink)),
    );
    effects.extend(desk.settle(invoice, &config.recipient));
    Ok(effects)
}

/// Build the invoice once, then run every demo in order against it,
/// collecting all effects.
pub fn run_all(config: &PlaygroundConfig, sink: Arc<dyn EffectSink>) -> DomainResult<Vec<Effect>> {
    const DEMOS: [Demo; 5] = [
        single_responsibility,
        open_closed,
        liskov_substitution,
        interface_segregation,
        dependency_inversion,
    ];

    let invoice = invoice_from(config)?;
    let mut effects = Vec::new();
    for demo in DEMOS {
        effects.extend(demo(config, &invoice, sink.clone())?);
    }
    Ok(effects)
}
