// This file is part of picker-kernel and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2023 Michael Ripley

//! Numeric utilities

/// Clamp `value` to `min..=max`: below `min` gives `min`, above `max` gives `max`.
///
/// Unlike [`f32::clamp`] this never panics, not even for `min > max` (where `min` wins for low
/// values and `max` for high ones) or NaN bounds. A NaN `value` is returned unchanged.
#[inline]
pub fn pin<T>(min: T, value: T, max: T) -> T
where
    T: PartialOrd,
{
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// `numerator / denominator` pinned to `0..=1`, or 0 when the denominator is not positive.
/// Used to turn an offset inside a picker into a fraction of its extent.
#[inline]
pub fn unit_fraction(numerator: f32, denominator: f32) -> f32 {
    if denominator > 0.0 {
        pin(0.0, numerator / denominator, 1.0)
    } else {
        0.0
    }
}
