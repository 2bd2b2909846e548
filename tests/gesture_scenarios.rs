/// End-to-end gesture scenarios through the public API
///
/// Run with: cargo test --test gesture_scenarios -- --nocapture

use rps_web::hand::{FINGER_SPECS, LANDMARK_COUNT, VALUES_PER_HAND, VALUES_PER_LANDMARK};
use rps_web::{
    classify, is_bent, read_frame_hand, read_hand, Finger, Gesture, GestureConfig, GestureError,
    HandLandmarkSet, DEFAULT_BENT_THRESHOLD,
};

/// Pixel-space hand with the knuckles on y = 300 and fingers pointing up.
/// `bent[i]` folds finger i back over its knuckle.
fn pixel_hand(bent: [bool; 4]) -> HandLandmarkSet {
    let mut triples: Vec<(usize, f32, f32)> = (0..LANDMARK_COUNT).map(|id| (id, 200.0, 400.0)).collect();
    for (spec, curled) in FINGER_SPECS.iter().zip(bent) {
        let x = 100.0 + 40.0 * spec.finger as usize as f32;
        triples[spec.knuckle] = (spec.knuckle, x, 300.0);
        triples[spec.mid] = (spec.mid, x, 240.0);
        triples[spec.tip - 1] = (spec.tip - 1, x, 210.0);
        triples[spec.tip] = if curled { (spec.tip, x + 8.0, 280.0) } else { (spec.tip, x, 180.0) };
    }
    HandLandmarkSet::from_triples(&triples).expect("valid hand")
}

#[test]
fn test_decision_scenarios() {
    println!("\n=== Test: Decision Scenarios ===");
    assert_eq!(classify(false, false, false, false), Gesture::Paper);
    assert_eq!(classify(true, true, true, true), Gesture::Rock);
    assert_eq!(classify(false, false, true, true), Gesture::Scissors);
    assert_eq!(classify(false, true, true, true), Gesture::Rock);
    println!("✓ Paper, rock, scissors and pointing all decided");
}

#[test]
fn test_straight_line_pins_formula() {
    println!("\n=== Test: Straight Line ===");
    // T = (0,0), M = (0,10), K = (0,20): a = 10, b = 10, c = 20 -> cos = -1
    let mut positions = vec![(50.0, 50.0); LANDMARK_COUNT];
    let index = Finger::Index.spec();
    positions[index.tip] = (0.0, 0.0);
    positions[index.mid] = (0.0, 10.0);
    positions[index.knuckle] = (0.0, 20.0);
    let hand = HandLandmarkSet::from_positions(&positions).unwrap();

    assert_eq!(rps_web::geometry::knuckle_cosine(&hand, index.tip).unwrap(), -1.0);
    assert!(!is_bent(&hand, index.tip, DEFAULT_BENT_THRESHOLD).unwrap());
    println!("✓ Straight finger reads as extended");
}

#[test]
fn test_tip_on_mid_joint_is_an_error() {
    println!("\n=== Test: Degenerate Geometry ===");
    let mut positions = vec![(50.0, 50.0); LANDMARK_COUNT];
    let index = Finger::Index.spec();
    positions[index.tip] = (0.0, 10.0);
    positions[index.mid] = (0.0, 10.0);
    positions[index.knuckle] = (0.0, 20.0);
    let hand = HandLandmarkSet::from_positions(&positions).unwrap();

    let result = is_bent(&hand, index.tip, DEFAULT_BENT_THRESHOLD);
    assert!(matches!(result, Err(GestureError::DegenerateGeometry { finger_tip: 8, .. })));
    println!("✓ Zero-length segment surfaced as {:?}", result);
}

#[test]
fn test_pixel_hands() {
    println!("\n=== Test: Pixel Hands ===");
    let thresholds = GestureConfig::default().bent_thresholds;
    let cases = [
        ([false; 4], Gesture::Paper),
        ([true; 4], Gesture::Rock),
        ([false, false, true, true], Gesture::Scissors),
        ([false, true, true, true], Gesture::Rock),
    ];
    for (bent, expected) in cases {
        let reading = read_hand(&pixel_hand(bent), &thresholds).unwrap();
        assert_eq!(reading.flexion.as_array(), bent);
        assert_eq!(reading.gesture, expected);
        println!("✓ {:?} -> {}", bent, reading.gesture);
    }
}

#[test]
fn test_short_landmark_list_rejected() {
    println!("\n=== Test: Short Landmark List ===");
    let triples: Vec<(usize, f32, f32)> = (0..20).map(|id| (id, 1.0, 1.0)).collect();
    assert!(matches!(
        HandLandmarkSet::from_triples(&triples),
        Err(GestureError::InvalidLandmarkSet { .. })
    ));
    println!("✓ 20 landmarks rejected");
}

#[test]
fn test_frame_from_detector_buffer() {
    println!("\n=== Test: Detector Buffer ===");
    let config = GestureConfig::from_json(r#"{"frame_width": 1000, "frame_height": 1000}"#).unwrap();

    // Same hand shape as `pixel_hand`, normalized against a 1000 x 1000 frame
    let hand = pixel_hand([false, false, true, true]);
    let mut data = vec![0.0; VALUES_PER_HAND];
    for lm in hand.as_slice() {
        data[lm.id * VALUES_PER_LANDMARK] = lm.x / 1000.0;
        data[lm.id * VALUES_PER_LANDMARK + 1] = lm.y / 1000.0;
    }

    let reading = read_frame_hand(&data, 1, 0, &config).unwrap();
    assert_eq!(reading.gesture, Gesture::Scissors);
    assert_eq!(reading.gesture.code(), 2);
    println!("✓ Detector buffer classified as {}", reading.gesture);
}
