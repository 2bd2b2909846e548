//! Rule-based gesture decision over the four finger flexion flags
//!
//! Rules are checked in order and overlap on purpose:
//! 1. all four fingers extended -> paper
//! 2. index and middle extended, ring and pinky ignored -> scissors
//! 3. anything else -> rock

use super::gesture::Gesture;

pub fn classify(index_bent: bool, middle_bent: bool, ring_bent: bool, pinky_bent: bool) -> Gesture {
    let gesture = if !index_bent && !middle_bent && !ring_bent && !pinky_bent {
        Gesture::Paper
    } else if !index_bent && !middle_bent {
        Gesture::Scissors
    } else {
        Gesture::Rock
    };
    log::debug!(
        "flexion [{}, {}, {}, {}] -> {}",
        index_bent, middle_bent, ring_bent, pinky_bent, gesture
    );
    gesture
}
