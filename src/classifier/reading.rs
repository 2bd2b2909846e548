//! Full hand reading - flexion for every finger, then the gesture

use serde::Serialize;

use crate::error::Result;
use crate::geometry::is_finger_bent;
use crate::hand::{Finger, HandLandmarkSet};
use super::config::FingerThresholds;
use super::gesture::Gesture;
use super::rules::classify;

/// Bent flag per finger (true = bent)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FingerFlexion {
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerFlexion {
    pub fn measure(landmarks: &HandLandmarkSet, thresholds: &FingerThresholds) -> Result<Self> {
        let bent = |finger: Finger| is_finger_bent(landmarks, finger, thresholds.get(finger));
        Ok(Self {
            index: bent(Finger::Index)?,
            middle: bent(Finger::Middle)?,
            ring: bent(Finger::Ring)?,
            pinky: bent(Finger::Pinky)?,
        })
    }

    /// [index, middle, ring, pinky]
    pub fn as_array(&self) -> [bool; 4] {
        [self.index, self.middle, self.ring, self.pinky]
    }

    pub fn extended_count(&self) -> usize {
        self.as_array().iter().filter(|bent| !**bent).count()
    }

    pub fn gesture(&self) -> Gesture {
        classify(self.index, self.middle, self.ring, self.pinky)
    }
}

/// Gesture plus the flexion vector it was decided from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HandReading {
    pub flexion: FingerFlexion,
    pub gesture: Gesture,
}

pub fn read_hand(landmarks: &HandLandmarkSet, thresholds: &FingerThresholds) -> Result<HandReading> {
    let flexion = FingerFlexion::measure(landmarks, thresholds)?;
    Ok(HandReading {
        flexion,
        gesture: flexion.gesture(),
    })
}
