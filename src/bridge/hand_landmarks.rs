//! Hand landmark entry points
//!
//! JS passes the detector output for the current frame (flat Float32Array,
//! 21 landmarks × 3 values per hand) and gets a gesture back. Nothing is
//! kept between calls: the frame goes in, the reading comes out.

use wasm_bindgen::prelude::*;
use crate::classifier::{read_hand, GestureConfig, HandReading};
use crate::error::Result;
use crate::hand::HandFrame;
use super::classifier_integration;

/// Parse the frame, pick `hand_no` and read it
pub fn read_frame_hand(
    flat_data: &[f32],
    num_hands: usize,
    hand_no: usize,
    config: &GestureConfig,
) -> Result<HandReading> {
    let frame = HandFrame::from_flat(
        flat_data,
        num_hands,
        config.max_hands,
        config.frame_width,
        config.frame_height,
    )?;
    read_hand(frame.hand(hand_no)?, &config.bent_thresholds)
}

fn read_with_current_config(flat_data: &[f32], num_hands: usize, hand_no: usize) -> std::result::Result<HandReading, JsValue> {
    read_frame_hand(flat_data, num_hands, hand_no, &classifier_integration::current()).map_err(|e| {
        log::warn!("hand {} not classified: {}", hand_no, e);
        JsValue::from(e)
    })
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Gesture code for one hand: 0 = rock, 1 = paper, 2 = scissors
#[wasm_bindgen]
pub fn classify_hand(flat_data: &[f32], num_hands: usize, hand_no: usize) -> std::result::Result<u8, JsValue> {
    read_with_current_config(flat_data, num_hands, hand_no).map(|reading| reading.gesture.code())
}

/// Flexion flags for one hand as [index, middle, ring, pinky], 1 = bent
#[wasm_bindgen]
pub fn finger_flexion(flat_data: &[f32], num_hands: usize, hand_no: usize) -> std::result::Result<Vec<u8>, JsValue> {
    read_with_current_config(flat_data, num_hands, hand_no)
        .map(|reading| reading.flexion.as_array().iter().map(|&bent| bent as u8).collect())
}
