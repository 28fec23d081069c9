//! Corridor geometry
//!
//! The shaft walls are a pure function of world y: a slow sine sets the width
//! and a faster, smaller sine shakes both walls sideways together.

use crate::consts::VIEW_WIDTH_PX;

/// Base corridor width before modulation
pub const BASE_WIDTH: f32 = 100.0;
/// Amplitude of the width modulation
pub const WIDTH_SWING: f32 = 20.0;
/// Wavelength divisor of the width modulation
pub const WIDTH_PERIOD: f32 = 30.0;
/// Amplitude of the sideways jitter
pub const JITTER_SWING: f32 = 5.0;
/// Wavelength divisor of the sideways jitter
pub const JITTER_PERIOD: f32 = 10.0;

/// Left/right wall x positions at a world y
#[inline]
pub fn bounds(world_y: f32) -> (i32, i32) {
    let width = (BASE_WIDTH + WIDTH_SWING * (world_y / WIDTH_PERIOD).sin()) as i32;
    let center = VIEW_WIDTH_PX / 2;
    let left = center - width / 2;
    let right = left + width;
    let jitter = (JITTER_SWING * (world_y / JITTER_PERIOD).sin()) as i32;
    (left + jitter, right + jitter)
}

/// Corridor width at a world y
#[inline]
pub fn width_at(world_y: f32) -> i32 {
    let (left, right) = bounds(world_y);
    right - left
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bounds_at_origin() {
        // sin(0) = 0: width 100 centred on x=80, no jitter
        assert_eq!(bounds(0.0), (30, 130));
    }

    #[test]
    fn test_bounds_are_pure() {
        for y in [0.0, 17.5, 123.0, 4567.25] {
            assert_eq!(bounds(y), bounds(y));
        }
    }

    #[test]
    fn test_jitter_shifts_both_walls() {
        // width = int(100 + 20 sin(1/3)) = 106, jitter = int(5 sin(1)) = 4
        assert_eq!(bounds(10.0), (31, 137));
        assert_eq!(width_at(10.0), 106);
    }

    proptest! {
        #[test]
        fn width_stays_in_range(y in -100_000.0f32..100_000.0) {
            let w = width_at(y);
            prop_assert!((80..=120).contains(&w), "width {} at y {}", w, y);
        }

        #[test]
        fn left_wall_is_left_of_right_wall(y in 0.0f32..50_000.0) {
            let (left, right) = bounds(y);
            prop_assert!(left < right);
        }
    }
}
