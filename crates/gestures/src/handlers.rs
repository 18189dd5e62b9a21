//! Concrete gesture handlers. Each one emits its own effect.

use std::sync::Arc;

use solidkit_core::{Capability, Effect, EffectSink};

use crate::gesture::{Gesture, OnDoubleTap, OnLongPress, OnTap};

fn handle(sink: &dyn EffectSink, provider: &str, label: &str, gesture: Gesture) -> Effect {
    let effect = Effect::line(
        Capability::Gesture,
        provider,
        format!("{label} handled {gesture}"),
    );
    sink.emit(&effect);
    effect
}

/// Reacts to single taps only.
#[derive(Clone)]
pub struct TapHandler {
    label: String,
    sink: Arc<dyn EffectSink>,
}

impl TapHandler {
    pub fn new(label: impl Into<String>, sink: Arc<dyn EffectSink>) -> Self {
        Self {
            label: label.into(),
            sink,
        }
    }
}

impl OnTap for TapHandler {
    fn did_tap(&self) -> Effect {
        handle(&*self.sink, "tap", &self.label, Gesture::Tap)
    }
}

/// Reacts to double taps only.
#[derive(Clone)]
pub struct DoubleTapHandler {
    label: String,
    sink: Arc<dyn EffectSink>,
}

impl DoubleTapHandler {
    pub fn new(label: impl Into<String>, sink: Arc<dyn EffectSink>) -> Self {
        Self {
            label: label.into(),
            sink,
        }
    }
}

impl OnDoubleTap for DoubleTapHandler {
    fn did_double_tap(&self) -> Effect {
        handle(&*self.sink, "double_tap", &self.label, Gesture::DoubleTap)
    }
}

/// Reacts to long presses only.
#[derive(Clone)]
pub struct LongPressHandler {
    label: String,
    sink: Arc<dyn EffectSink>,
}

impl LongPressHandler {
    pub fn new(label: impl Into<String>, sink: Arc<dyn EffectSink>) -> Self {
        Self {
            label: label.into(),
            sink,
        }
    }
}

impl OnLongPress for LongPressHandler {
    fn did_long_press(&self) -> Effect {
        handle(&*self.sink, "long_press", &self.label, Gesture::LongPress)
    }
}

/// A control that reacts to every gesture kind.
#[derive(Clone)]
pub struct Button {
    label: String,
    sink: Arc<dyn EffectSink>,
}

impl Button {
    pub fn new(label: impl Into<String>, sink: Arc<dyn EffectSink>) -> Self {
        Self {
            label: label.into(),
            sink,
        }
    }
}

impl OnTap for Button {
    fn did_tap(&self) -> Effect {
        handle(&*self.sink, "button", &self.label, Gesture::Tap)
    }
}

impl OnDoubleTap for Button {
    fn did_double_tap(&self) -> Effect {
        handle(&*self.sink, "button", &self.label, Gesture::DoubleTap)
    }
}

impl OnLongPress for Button {
    fn did_long_press(&self) -> Effect {
        handle(&*self.sink, "button", &self.label, Gesture::LongPress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solidkit_core::RecordingSink;

    // Each helper demands exactly one capability.
    fn tap<H: OnTap>(h: &H) -> Effect {
        h.did_tap()
    }

    fn double_tap<H: OnDoubleTap>(h: &H) -> Effect {
        h.did_double_tap()
    }

    fn long_press<H: OnLongPress>(h: &H) -> Effect {
        h.did_long_press()
    }

    #[test]
    fn single_capability_handlers_satisfy_only_their_bound() {
        let sink = Arc::new(RecordingSink::new());

        assert_eq!(
            tap(&TapHandler::new("ok", sink.clone())).lines,
            vec!["ok handled tap"]
        );
        assert_eq!(
            double_tap(&DoubleTapHandler::new("zoom", sink.clone())).lines,
            vec!["zoom handled double tap"]
        );
        assert_eq!(
            long_press(&LongPressHandler::new("menu", sink.clone())).lines,
            vec!["menu handled long press"]
        );
        assert_eq!(sink.len(), 3);
    }

    #[test]
    fn button_satisfies_every_bound() {
        let sink = Arc::new(RecordingSink::new());
        let button = Button::new("submit", sink.clone());

        assert_eq!(tap(&button).lines, vec!["submit handled tap"]);
        assert_eq!(double_tap(&button).lines, vec!["submit handled double tap"]);
        assert_eq!(long_press(&button).lines, vec!["submit handled long press"]);
        assert!(sink.effects().iter().all(|e| e.provider == "button"));
    }

    #[test]
    fn handler_emits_its_own_effect() {
        let sink = Arc::new(RecordingSink::new());
        let effect = TapHandler::new("ok", sink.clone()).did_tap();

        assert_eq!(sink.effects(), vec![effect]);
    }

    #[test]
    fn handling_twice_records_two_equal_effects() {
        let sink = Arc::new(RecordingSink::new());
        let handler = DoubleTapHandler::new("zoom", sink.clone());

        let first = handler.did_double_tap();
        let second = handler.did_double_tap();

        assert_eq!(first, second);
        assert_eq!(sink.effects(), vec![first, second]);
    }
}
