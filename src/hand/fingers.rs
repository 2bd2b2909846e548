//! Finger table - which three landmarks measure each finger
//!
//! Every finger is measured from its tip, the joint two landmarks down
//! (PIP) and the knuckle three landmarks down (MCP). The table is checked
//! against the skeleton at compile time.

use super::landmarks::{INDEX_TIP, LANDMARK_COUNT, MIDDLE_TIP, PINKY_TIP, RING_TIP};

/// The four fingers that take part in the gesture decision
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    pub fn spec(&self) -> &'static FingerSpec {
        &FINGER_SPECS[*self as usize]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Finger::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// Landmark identifiers used to measure one finger
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FingerSpec {
    pub finger: Finger,
    pub tip: usize,
    pub mid: usize,
    pub knuckle: usize,
}

impl FingerSpec {
    /// Derive mid joint and knuckle from the tip
    pub const fn from_tip(finger: Finger, tip: usize) -> Self {
        Self {
            finger,
            tip,
            mid: tip - 2,
            knuckle: tip - 3,
        }
    }

    /// tip > mid > knuckle, all inside the 21-point skeleton
    pub const fn is_valid(&self) -> bool {
        self.tip < LANDMARK_COUNT && self.tip > self.mid && self.mid > self.knuckle
    }
}

/// Indexed by `Finger as usize`
pub const FINGER_SPECS: [FingerSpec; 4] = [
    FingerSpec::from_tip(Finger::Index, INDEX_TIP),
    FingerSpec::from_tip(Finger::Middle, MIDDLE_TIP),
    FingerSpec::from_tip(Finger::Ring, RING_TIP),
    FingerSpec::from_tip(Finger::Pinky, PINKY_TIP),
];

const _: () = {
    let mut i = 0;
    while i < FINGER_SPECS.len() {
        assert!(FINGER_SPECS[i].is_valid());
        assert!(FINGER_SPECS[i].finger as usize == i);
        i += 1;
    }
};
