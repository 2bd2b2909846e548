//! Hand landmark set - the 21-point MediaPipe hand skeleton
//!
//! A `HandLandmarkSet` is built fresh for every detected hand in every frame
//! and handed to the geometry code by reference. Construction is the only
//! place the skeleton layout is checked; once built, every identifier in
//! 0..21 is guaranteed to resolve.

use crate::error::{GestureError, LandmarkSetFault, Result};

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single landmark in image pixel coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub id: usize,
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub fn new(id: usize, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }

    /// Planar position as a tuple
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Euclidean distance to another landmark
    pub fn distance_to(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Exactly 21 landmarks, landmark `i` has identifier `i`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLandmarkSet {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarkSet {
    /// Build from (identifier, x, y) triples as the detector emits them
    pub fn from_triples(triples: &[(usize, f32, f32)]) -> Result<Self> {
        if triples.len() != LANDMARK_COUNT {
            return Err(GestureError::landmarks(LandmarkSetFault::WrongCount {
                got: triples.len(),
                expected: LANDMARK_COUNT,
            }));
        }

        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        for (index, &(id, x, y)) in triples.iter().enumerate() {
            if id != index {
                return Err(GestureError::landmarks(LandmarkSetFault::IdMismatch { index, id }));
            }
            if !x.is_finite() || !y.is_finite() {
                return Err(GestureError::landmarks(LandmarkSetFault::NonFinite { id }));
            }
            landmarks[index] = Landmark::new(id, x, y);
        }

        Ok(Self { landmarks })
    }

    /// Build from pixel positions where the identifier is the slice position
    pub fn from_positions(positions: &[(f32, f32)]) -> Result<Self> {
        let triples: Vec<(usize, f32, f32)> = positions
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| (id, x, y))
            .collect();
        Self::from_triples(&triples)
    }

    /// Build from the detector's normalized [0, 1] coordinates.
    ///
    /// Pixel positions are truncated toward zero, so the thresholds stay
    /// calibrated against integer pixel coordinates.
    pub fn from_normalized(points: &[(f32, f32)], width: u32, height: u32) -> Result<Self> {
        let positions: Vec<(f32, f32)> = points
            .iter()
            .map(|&(x, y)| ((x * width as f32).trunc(), (y * height as f32).trunc()))
            .collect();
        Self::from_positions(&positions)
    }

    /// Landmark by identifier, None outside 0..21
    pub fn get(&self, id: usize) -> Option<&Landmark> {
        self.landmarks.get(id)
    }

    pub fn as_slice(&self) -> &[Landmark] {
        &self.landmarks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_triples() -> Vec<(usize, f32, f32)> {
        (0..LANDMARK_COUNT).map(|id| (id, id as f32, 2.0 * id as f32)).collect()
    }

    #[test]
    fn test_accepts_full_skeleton() {
        let set = HandLandmarkSet::from_triples(&straight_triples()).unwrap();
        assert_eq!(set.get(PINKY_TIP).unwrap().position(), (20.0, 40.0));
        assert!(set.get(LANDMARK_COUNT).is_none());
    }

    #[test]
    fn test_rejects_short_set() {
        let mut triples = straight_triples();
        triples.pop();
        let err = HandLandmarkSet::from_triples(&triples).unwrap_err();
        assert_eq!(
            err,
            GestureError::landmarks(LandmarkSetFault::WrongCount { got: 20, expected: 21 })
        );
    }

    #[test]
    fn test_rejects_extra_landmark() {
        let mut triples = straight_triples();
        triples.push((LANDMARK_COUNT, 0.0, 0.0));
        let err = HandLandmarkSet::from_triples(&triples).unwrap_err();
        assert_eq!(
            err,
            GestureError::landmarks(LandmarkSetFault::WrongCount { got: 22, expected: 21 })
        );
    }

    #[test]
    fn test_rejects_out_of_order_ids() {
        let mut triples = straight_triples();
        triples.swap(3, 4);
        let err = HandLandmarkSet::from_triples(&triples).unwrap_err();
        assert_eq!(err, GestureError::landmarks(LandmarkSetFault::IdMismatch { index: 3, id: 4 }));
    }

    #[test]
    fn test_rejects_nan() {
        let mut triples = straight_triples();
        triples[INDEX_TIP].2 = f32::NAN;
        assert!(matches!(
            HandLandmarkSet::from_triples(&triples),
            Err(GestureError::InvalidLandmarkSet { reason: LandmarkSetFault::NonFinite { id: INDEX_TIP } })
        ));
    }

    #[test]
    fn test_normalized_truncates_to_pixels() {
        let points = vec![(0.5, 0.999); LANDMARK_COUNT];
        let set = HandLandmarkSet::from_normalized(&points, 641, 480).unwrap();
        assert_eq!(set.get(WRIST).unwrap().position(), (320.0, 479.0));
    }

    #[test]
    fn test_distance() {
        let a = Landmark::new(0, 0.0, 0.0);
        let b = Landmark::new(1, 3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }
}
