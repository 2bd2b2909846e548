//! Classifier module - rule-based rock / paper / scissors
//!
//! Flexion comes from the geometry module; this module turns the four
//! flags into a gesture and owns the tunable configuration.

mod config;
mod gesture;
mod reading;
mod rules;

pub use config::{
    FingerThresholds, GestureConfig,
    DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH, DEFAULT_MAX_HANDS, MAX_HANDS_LIMIT,
};
pub use gesture::{Gesture, GESTURE_NAMES};
pub use reading::{read_hand, FingerFlexion, HandReading};
pub use rules::classify;
