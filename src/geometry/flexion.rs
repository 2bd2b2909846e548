//! Finger flexion from the tip / mid joint / knuckle triangle
//!
//! With a = |tip - mid|, b = |mid - knuckle| and c = |tip - knuckle| the
//! law of cosines gives
//!
//! ```text
//! cos = (a² + b² - c²) / (2ab)
//! ```
//!
//! A straight finger puts the three points on a line, c = a + b and
//! cos = -1. Curling the finger shortens c and pushes cos toward 1. The
//! bent threshold (-0.65 by default) is calibrated against this exact
//! expression, so it must not be rewritten as a conventional joint angle.

use crate::error::{GestureError, LandmarkSetFault, Result, Segment};
use crate::hand::{Finger, HandLandmarkSet, LANDMARK_COUNT};

/// Default cosine threshold above which a finger counts as bent
pub const DEFAULT_BENT_THRESHOLD: f32 = -0.65;

/// Segments shorter than this are treated as collapsed
const MIN_SEGMENT_LENGTH: f32 = 1e-6;

/// Reject thresholds that are not a cosine
pub fn check_threshold(value: f32) -> Result<f32> {
    if value.is_finite() && (-1.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(GestureError::InvalidThreshold { value })
    }
}

/// Cosine of the measuring triangle for the finger ending at `tip_id`
pub fn knuckle_cosine(landmarks: &HandLandmarkSet, tip_id: usize) -> Result<f32> {
    if tip_id < 3 || tip_id >= LANDMARK_COUNT {
        return Err(GestureError::landmarks(LandmarkSetFault::TipOutOfRange { tip: tip_id }));
    }
    let lookup = |id: usize| {
        landmarks
            .get(id)
            .ok_or(GestureError::landmarks(LandmarkSetFault::TipOutOfRange { tip: tip_id }))
    };
    let tip = lookup(tip_id)?;
    let mid = lookup(tip_id - 2)?;
    let knuckle = lookup(tip_id - 3)?;

    let a = tip.distance_to(mid);
    let b = mid.distance_to(knuckle);
    let c = tip.distance_to(knuckle);

    if a < MIN_SEGMENT_LENGTH {
        return Err(GestureError::DegenerateGeometry { finger_tip: tip_id, segment: Segment::TipMid });
    }
    if b < MIN_SEGMENT_LENGTH {
        return Err(GestureError::DegenerateGeometry { finger_tip: tip_id, segment: Segment::MidKnuckle });
    }

    Ok((b * b + a * a - c * c) / (2.0 * a * b))
}

/// Whether the finger ending at `tip_id` is bent
pub fn is_bent(landmarks: &HandLandmarkSet, tip_id: usize, bent_threshold: f32) -> Result<bool> {
    let threshold = check_threshold(bent_threshold)?;
    let cos_angle = knuckle_cosine(landmarks, tip_id)?;
    log::trace!("tip {}: cos={:.3} threshold={:.3}", tip_id, cos_angle, threshold);
    Ok(cos_angle > threshold)
}

/// `is_bent` through the finger table
pub fn is_finger_bent(landmarks: &HandLandmarkSet, finger: Finger, bent_threshold: f32) -> Result<bool> {
    is_bent(landmarks, finger.spec().tip, bent_threshold)
}
