use std::sync::Arc;

use solidkit_core::Effect;

use crate::gesture::{Gesture, OnDoubleTap, OnLongPress, OnTap};

/// Context: routes gestures to whichever handlers were injected.
///
/// Gesture kinds with no handler are simply not handled.
#[derive(Clone, Default)]
pub struct GestureRouter {
    tap: Option<Arc<dyn OnTap>>,
    double_tap: Option<Arc<dyn OnDoubleTap>>,
    long_press: Option<Arc<dyn OnLongPress>>,
}

impl GestureRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tap(mut self, handler: Arc<dyn OnTap>) -> Self {
        self.tap = Some(handler);
        self
    }

    pub fn with_double_tap(mut self, handler: Arc<dyn OnDoubleTap>) -> Self {
        self.double_tap = Some(handler);
        self
    }

    pub fn with_long_press(mut self, handler: Arc<dyn OnLongPress>) -> Self {
        self.long_press = Some(handler);
        self
    }

    pub fn handles(&self, gesture: Gesture) -> bool {
        match gesture {
            Gesture::Tap => self.tap.is_some(),
            Gesture::DoubleTap => self.double_tap.is_some(),
            Gesture::LongPress => self.long_press.is_some(),
        }
    }

    pub fn dispatch(&self, gesture: Gesture) -> Option<Effect> {
        let effect = match gesture {
            Gesture::Tap => self.tap.as_ref().map(|h| h.did_tap()),
            Gesture::DoubleTap => self.double_tap.as_ref().map(|h| h.did_double_tap()),
            Gesture::LongPress => self.long_press.as_ref().map(|h| h.did_long_press()),
        };
        if effect.is_none() {
            tracing::debug!(%gesture, "no handler registered");
        }
        effect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Button, DoubleTapHandler, TapHandler};
    use solidkit_core::RecordingSink;

    #[test]
    fn unregistered_gesture_is_not_handled() {
        let sink = Arc::new(RecordingSink::new());
        let router = GestureRouter::new()
            .with_double_tap(Arc::new(DoubleTapHandler::new("zoom", sink.clone())));

        assert!(router.handles(Gesture::DoubleTap));
        assert!(!router.handles(Gesture::Tap));
        assert_eq!(router.dispatch(Gesture::Tap), None);
        assert_eq!(router.dispatch(Gesture::LongPress), None);
        assert!(sink.is_empty());
    }

    #[test]
    fn dispatched_gesture_is_recorded_by_the_handler() {
        let sink = Arc::new(RecordingSink::new());
        let router = GestureRouter::new().with_tap(Arc::new(TapHandler::new("ok", sink.clone())));

        let effect = router.dispatch(Gesture::Tap).unwrap();

        assert_eq!(effect.lines, vec!["ok handled tap"]);
        assert_eq!(sink.effects(), vec![effect]);
    }

    #[test]
    fn one_button_can_serve_every_gesture() {
        let sink = Arc::new(RecordingSink::new());
        let button = Arc::new(Button::new("submit", sink.clone()));
        let router = GestureRouter::new()
            .with_tap(button.clone())
            .with_double_tap(button.clone())
            .with_long_press(button);

        for gesture in Gesture::ALL {
            let effect = router.dispatch(gesture).unwrap();
            assert_eq!(effect.lines, vec![format!("submit handled {gesture}")]);
        }
        assert_eq!(sink.len(), 3);
    }
}
