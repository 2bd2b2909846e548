//! Bridge module - JS ↔ Rust communication
//! 
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod classifier_integration;
mod hand_landmarks;

pub use classifier_integration::{
    // WASM entry points
    configure,
    set_bent_threshold,
    reset_config,
    current_config,
};

pub use hand_landmarks::{
    // WASM entry points
    classify_hand,
    finger_flexion,
    // Internal API
    read_frame_hand,
};
