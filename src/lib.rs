//! RPS Web - rock / paper / scissors from MediaPipe hand landmarks
//! 
//! The hand-landmark model runs in JavaScript; this module receives its
//! output and decides the gesture:
//! - `hand`: 21-point landmark sets, finger table, multi-hand frames
//! - `geometry`: per-finger flexion from the tip / mid joint / knuckle triangle
//! - `classifier`: flexion flags -> rock, paper or scissors
//! - `bridge`: wasm_bindgen entry points

mod bridge;
mod utils;

pub mod classifier;
pub mod error;
pub mod geometry;
pub mod hand;

use wasm_bindgen::prelude::*;

pub use bridge::{
    classify_hand, configure, current_config, finger_flexion, read_frame_hand, reset_config,
    set_bent_threshold,
};
pub use classifier::{classify, read_hand, FingerFlexion, Gesture, GestureConfig, HandReading};
pub use error::{GestureError, LandmarkSetFault, Result, Segment};
pub use geometry::{is_bent, DEFAULT_BENT_THRESHOLD};
pub use hand::{Finger, FingerSpec, HandFrame, HandLandmarkSet, Landmark};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    utils::logging::init(log::LevelFilter::Info);
}

/// Set console verbosity ("error", "warn", "info", "debug" or "trace")
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> std::result::Result<(), JsValue> {
    let filter: log::LevelFilter = level
        .parse()
        .map_err(|_| JsValue::from_str(&format!("unknown log level '{}'", level)))?;
    utils::logging::init(filter);
    Ok(())
}
