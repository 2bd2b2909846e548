//! Gesture labels

use serde::{Deserialize, Serialize};

/// Gesture labels (order matches the integer codes the game loop uses)
pub const GESTURE_NAMES: [&str; 3] = ["rock", "paper", "scissors"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
}

impl Gesture {
    /// Integer code: rock = 0, paper = 1, scissors = 2
    pub fn code(&self) -> u8 {
        match self {
            Gesture::Rock => 0,
            Gesture::Paper => 1,
            Gesture::Scissors => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Gesture::Rock),
            1 => Some(Gesture::Paper),
            2 => Some(Gesture::Scissors),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        GESTURE_NAMES[self.code() as usize]
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
