//! Gesture handling split into one capability per gesture kind.
//!
//! A handler implements only the gestures it reacts to; there is no broad
//! "gesture handler" trait forcing empty methods for the rest.

pub mod gesture;
pub mod handlers;
pub mod router;

pub use gesture::{Gesture, OnDoubleTap, OnLongPress, OnTap};
pub use handlers::{Button, DoubleTapHandler, LongPressHandler, TapHandler};
pub use router::GestureRouter;
