//! Classifier configuration with tunable thresholds

use serde::{Deserialize, Serialize};

use crate::error::{GestureError, Result};
use crate::geometry::{check_threshold, DEFAULT_BENT_THRESHOLD};
use crate::hand::Finger;

/// Default number of hands accepted per frame
pub const DEFAULT_MAX_HANDS: usize = 2;

/// Largest `max_hands` a config may ask for
pub const MAX_HANDS_LIMIT: usize = 16;

/// Default camera frame size used to turn normalized landmarks into pixels
pub const DEFAULT_FRAME_WIDTH: u32 = 640;
pub const DEFAULT_FRAME_HEIGHT: u32 = 480;

/// Cosine above which each finger counts as bent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerThresholds {
    pub index: f32,
    pub middle: f32,
    pub ring: f32,
    pub pinky: f32,
}

impl FingerThresholds {
    pub fn uniform(value: f32) -> Self {
        Self {
            index: value,
            middle: value,
            ring: value,
            pinky: value,
        }
    }

    pub fn get(&self, finger: Finger) -> f32 {
        match finger {
            Finger::Index => self.index,
            Finger::Middle => self.middle,
            Finger::Ring => self.ring,
            Finger::Pinky => self.pinky,
        }
    }

    pub fn set(&mut self, finger: Finger, value: f32) {
        match finger {
            Finger::Index => self.index = value,
            Finger::Middle => self.middle = value,
            Finger::Ring => self.ring = value,
            Finger::Pinky => self.pinky = value,
        }
    }
}

impl Default for FingerThresholds {
    fn default() -> Self {
        Self::uniform(DEFAULT_BENT_THRESHOLD)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Per-finger bent thresholds
    pub bent_thresholds: FingerThresholds,

    /// Hands beyond this count are dropped from the frame
    pub max_hands: usize,

    /// Pixel size of the camera frame
    pub frame_width: u32,
    pub frame_height: u32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            bent_thresholds: FingerThresholds::default(),
            max_hands: DEFAULT_MAX_HANDS,
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
        }
    }
}

impl GestureConfig {
    /// Parse from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GestureConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        for finger in Finger::ALL {
            check_threshold(self.bent_thresholds.get(finger))?;
        }
        if self.max_hands == 0 || self.max_hands > MAX_HANDS_LIMIT {
            return Err(GestureError::InvalidConfig(format!(
                "max_hands {} is outside 1..={}",
                self.max_hands, MAX_HANDS_LIMIT
            )));
        }
        if self.frame_width == 0 || self.frame_height == 0 {
            return Err(GestureError::InvalidConfig(format!(
                "frame size {}x{} is empty",
                self.frame_width, self.frame_height
            )));
        }
        Ok(())
    }

    /// Replace one finger's threshold, rejecting values that are not a cosine
    pub fn set_bent_threshold(&mut self, finger: Finger, value: f32) -> Result<()> {
        self.bent_thresholds.set(finger, check_threshold(value)?);
        Ok(())
    }
}
