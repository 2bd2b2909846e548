//! One video frame worth of detected hands
//!
//! The detector hands over every hand as a flat Float32Array:
//! 21 landmarks × (x, y, z) per hand, hands back to back, normalized to
//! [0, 1]. z is not used for flexion.

use crate::error::{GestureError, LandmarkSetFault, Result};
use super::landmarks::{HandLandmarkSet, LANDMARK_COUNT};

/// Floats per landmark in the flat buffer (x, y, z)
pub const VALUES_PER_LANDMARK: usize = 3;

/// Floats per hand in the flat buffer
pub const VALUES_PER_HAND: usize = LANDMARK_COUNT * VALUES_PER_LANDMARK;

/// Hands detected in a single frame, converted to pixel coordinates
#[derive(Clone, Debug, Default)]
pub struct HandFrame {
    hands: Vec<HandLandmarkSet>,
}

impl HandFrame {
    /// Parse `num_hands` hands from the flat buffer, keeping at most `max_hands`
    pub fn from_flat(
        flat_data: &[f32],
        num_hands: usize,
        max_hands: usize,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let actual_hands = num_hands.min(max_hands);
        if actual_hands < num_hands {
            log::debug!("{} hands detected, keeping first {}", num_hands, actual_hands);
        }

        let needed = actual_hands
            .checked_mul(VALUES_PER_HAND)
            .ok_or(GestureError::landmarks(LandmarkSetFault::TooManyHands { hands: actual_hands }))?;
        if flat_data.len() < needed {
            return Err(GestureError::landmarks(LandmarkSetFault::Truncated {
                got: flat_data.len(),
                needed,
            }));
        }

        let hands = flat_data[..needed]
            .chunks_exact(VALUES_PER_HAND)
            .map(|hand| {
                let points: Vec<(f32, f32)> = hand
                    .chunks_exact(VALUES_PER_LANDMARK)
                    .map(|lm| (lm[0], lm[1]))
                    .collect();
                HandLandmarkSet::from_normalized(&points, width, height)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { hands })
    }

    pub fn from_hands(hands: Vec<HandLandmarkSet>) -> Self {
        Self { hands }
    }

    pub fn hand_count(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// Select one hand by detection order
    pub fn hand(&self, hand_no: usize) -> Result<&HandLandmarkSet> {
        self.hands.get(hand_no).ok_or(GestureError::HandNotFound {
            requested: hand_no,
            detected: self.hands.len(),
        })
    }
}
