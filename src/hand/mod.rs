//! Hand module - landmark sets, finger table and per-frame hand parsing
//!
//! Re-exports only. All logic in submodules.

mod landmarks;
mod fingers;
mod frame;

pub use landmarks::{
    HandLandmarkSet,
    Landmark,
    LANDMARK_COUNT,
    // Skeleton indices
    WRIST,
    THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP,
    INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP,
    MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP,
    RING_MCP, RING_PIP, RING_DIP, RING_TIP,
    PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP,
};
pub use fingers::{Finger, FingerSpec, FINGER_SPECS};
pub use frame::{HandFrame, VALUES_PER_HAND, VALUES_PER_LANDMARK};
