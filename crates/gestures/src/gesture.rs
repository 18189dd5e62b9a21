use serde::{Deserialize, Serialize};

use solidkit_core::Effect;

/// Gesture kinds a router can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    Tap,
    DoubleTap,
    LongPress,
}

impl Gesture {
    pub const ALL: [Gesture; 3] = [Gesture::Tap, Gesture::DoubleTap, Gesture::LongPress];

    pub fn as_str(self) -> &'static str {
        match self {
            Gesture::Tap => "tap",
            Gesture::DoubleTap => "double tap",
            Gesture::LongPress => "long press",
        }
    }
}

impl core::fmt::Display for Gesture {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait OnTap: Send + Sync {
    fn did_tap(&self) -> Effect;
}

pub trait OnDoubleTap: Send + Sync {
    fn did_double_tap(&self) -> Effect;
}

pub trait OnLongPress: Send + Sync {
    fn did_long_press(&self) -> Effect;
}
