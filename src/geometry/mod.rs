//! Geometry module - finger flexion estimation
//!
//! Re-exports only. All logic in submodules.

mod flexion;

pub use flexion::{
    check_threshold,
    is_bent,
    is_finger_bent,
    knuckle_cosine,
    DEFAULT_BENT_THRESHOLD,
};
