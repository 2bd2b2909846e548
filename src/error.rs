//! Error types shared by the landmark, geometry and classifier modules
//!
//! Every failure is per call: the caller can skip the frame, keep the last
//! gesture, or re-run detection on the next frame.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why a landmark set was rejected
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LandmarkSetFault {
    /// Landmark count differs from the 21-point hand skeleton
    WrongCount { got: usize, expected: usize },
    /// Landmark at `index` carries identifier `id`
    IdMismatch { index: usize, id: usize },
    /// Coordinate is NaN or infinite
    NonFinite { id: usize },
    /// Finger tip cannot address tip-2 / tip-3 inside the skeleton
    TipOutOfRange { tip: usize },
    /// Flat frame buffer too short for the announced number of hands
    Truncated { got: usize, needed: usize },
    /// Announced hand count does not fit in a frame buffer
    TooManyHands { hands: usize },
}

impl std::fmt::Display for LandmarkSetFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LandmarkSetFault::WrongCount { got, expected } => {
                write!(f, "got {} landmarks, expected {}", got, expected)
            }
            LandmarkSetFault::IdMismatch { index, id } => {
                write!(f, "landmark at position {} has identifier {}", index, id)
            }
            LandmarkSetFault::NonFinite { id } => {
                write!(f, "landmark {} has a non-finite coordinate", id)
            }
            LandmarkSetFault::TipOutOfRange { tip } => {
                write!(f, "finger tip {} is outside 3..=20", tip)
            }
            LandmarkSetFault::Truncated { got, needed } => {
                write!(f, "frame buffer holds {} values, needs {}", got, needed)
            }
            LandmarkSetFault::TooManyHands { hands } => {
                write!(f, "{} hands cannot fit in a frame buffer", hands)
            }
        }
    }
}

/// Which side of the measuring triangle collapsed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    /// tip -> mid joint
    TipMid,
    /// mid joint -> knuckle
    MidKnuckle,
}

#[derive(Debug, Error, PartialEq)]
pub enum GestureError {
    #[error("invalid landmark set: {reason}")]
    InvalidLandmarkSet { reason: LandmarkSetFault },

    #[error("degenerate geometry for finger tip {finger_tip}: zero-length {segment:?} segment")]
    DegenerateGeometry { finger_tip: usize, segment: Segment },

    #[error("bent threshold {value} is not a cosine in [-1, 1]")]
    InvalidThreshold { value: f32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("hand {requested} requested but only {detected} detected")]
    HandNotFound { requested: usize, detected: usize },
}

impl GestureError {
    pub(crate) fn landmarks(reason: LandmarkSetFault) -> Self {
        GestureError::InvalidLandmarkSet { reason }
    }
}

impl From<serde_json::Error> for GestureError {
    fn from(err: serde_json::Error) -> Self {
        GestureError::InvalidConfig(err.to_string())
    }
}

impl From<GestureError> for JsValue {
    fn from(err: GestureError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GestureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_fault() {
        let err = GestureError::landmarks(LandmarkSetFault::WrongCount { got: 20, expected: 21 });
        assert_eq!(err.to_string(), "invalid landmark set: got 20 landmarks, expected 21");

        let err = GestureError::DegenerateGeometry { finger_tip: 8, segment: Segment::TipMid };
        assert!(err.to_string().contains("finger tip 8"));
    }

    #[test]
    fn test_json_errors_become_config_errors() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        assert!(matches!(GestureError::from(json_err), GestureError::InvalidConfig(_)));
    }
}
