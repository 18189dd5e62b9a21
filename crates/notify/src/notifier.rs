use std::sync::Arc;

use solidkit_core::Effect;

use crate::service::MessageService;

/// Context: sends notifications through the injected message service.
///
/// `Notifier` never picks a transport itself; the caller decides at the
/// composition boundary.
#[derive(Clone)]
pub struct Notifier {
    service: Arc<dyn MessageService>,
}

impl Notifier {
    pub fn new(service: Arc<dyn MessageService>) -> Self {
        Self { service }
    }

    pub fn send_notification(&self, to: &str, message: &str) -> Effect {
        tracing::debug!(recipient = to, "sending notification");
        self.service.send_message(to, message)
    }
}
