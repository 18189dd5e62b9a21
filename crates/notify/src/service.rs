use std::sync::Arc;

use solidkit_core::{Capability, Effect, EffectSink};

/// Send one message to one recipient.
pub trait MessageService: Send + Sync {
    fn send_message(&self, to: &str, message: &str) -> Effect;
}

impl<S> MessageService for Arc<S>
where
    S: MessageService + ?Sized,
{
    fn send_message(&self, to: &str, message: &str) -> Effect {
        (**self).send_message(to, message)
    }
}

/// Email transport (stub).
pub struct EmailSender {
    sink: Arc<dyn EffectSink>,
}

impl EmailSender {
    pub fn new(sink: Arc<dyn EffectSink>) -> Self {
        Self { sink }
    }
}

impl MessageService for EmailSender {
    fn send_message(&self, to: &str, message: &str) -> Effect {
        let effect = Effect::line(
            Capability::Notify,
            "email",
            format!("Sending email to {to} with message: {message}"),
        );
        self.sink.emit(&effect);
        effect
    }
}

/// SMS transport (stub).
pub struct SmsSender {
    sink: Arc<dyn EffectSink>,
}

impl SmsSender {
    pub fn new(sink: Arc<dyn EffectSink>) -> Self {
        Self { sink }
    }
}

impl MessageService for SmsSender {
    fn send_message(&self, to: &str, message: &str) -> Effect {
        let effect = Effect::line(
            Capability::Notify,
            "sms",
            format!("Sending SMS to {to} with message: {message}"),
        );
        self.sink.emit(&effect);
        effect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solidkit_core::RecordingSink;

    #[test]
    fn email_sender_formats_recipient_and_message() {
        let sink = Arc::new(RecordingSink::new());
        let effect = EmailSender::new(sink.clone()).send_message("user@example.com", "hi");

        assert_eq!(effect.provider, "email");
        assert_eq!(
            effect.lines,
            vec!["Sending email to user@example.com with message: hi"]
        );
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn identical_sends_yield_identical_independent_records() {
        let sink = Arc::new(RecordingSink::new());
        let sms = SmsSender::new(sink.clone());

        let first = sms.send_message("+15550100", "code 1234");
        let second = sms.send_message("+15550100", "code 1234");

        assert_eq!(first, second);
        assert_eq!(sink.effects(), vec![first.clone(), first]);
    }
}
