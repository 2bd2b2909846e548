//! Classifier integration - configuration store for the JS side
//!
//! JS tunes thresholds and frame size between frames; every classification
//! call reads a copy of the current config. The store only holds settings,
//! never landmark data.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::classifier::GestureConfig;
use crate::error::{GestureError, Result};
use crate::hand::Finger;

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static CONFIG: RefCell<GestureConfig> = RefCell::new(GestureConfig::default());
}

/// Snapshot of the active configuration
pub fn current() -> GestureConfig {
    CONFIG.with(|cell| cell.borrow().clone())
}

fn replace_from_json(json: &str) -> Result<()> {
    let config = GestureConfig::from_json(json)?;
    CONFIG.with(|cell| *cell.borrow_mut() = config);
    Ok(())
}

fn update_threshold(finger: &str, value: f32) -> Result<()> {
    let finger = Finger::from_name(finger)
        .ok_or_else(|| GestureError::InvalidConfig(format!("unknown finger '{}'", finger)))?;
    CONFIG.with(|cell| cell.borrow_mut().set_bent_threshold(finger, value))
}

fn reset() {
    CONFIG.with(|cell| *cell.borrow_mut() = GestureConfig::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Replace the whole configuration from JSON (missing fields use defaults)
#[wasm_bindgen]
pub fn configure(json: &str) -> std::result::Result<(), JsValue> {
    replace_from_json(json).map_err(|e| {
        log::warn!("configuration rejected: {}", e);
        JsValue::from(e)
    })?;
    log::info!("gesture config updated");
    Ok(())
}

/// Set one finger's bent threshold ("index", "middle", "ring" or "pinky")
#[wasm_bindgen]
pub fn set_bent_threshold(finger: &str, value: f32) -> std::result::Result<(), JsValue> {
    update_threshold(finger, value).map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn reset_config() {
    reset();
}

/// Active configuration as JSON
#[wasm_bindgen]
pub fn current_config() -> std::result::Result<String, JsValue> {
    current().to_json().map_err(JsValue::from)
}
