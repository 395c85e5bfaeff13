// This file is part of picker-kernel and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2023 Michael Ripley

//! Precise implementations of various functions that are MUCH less performant than their optimized
//! alternatives. The theme here is to use floating point numbers for every pixel instead of
//! worrying about precomputation or integer rounding.
//!
//! These are retained for:
//!
//! 1. benchmarking comparisons
//! 2. unit testing known good output

use crate::color::HsvColor;
use crate::util::image::PixelBuffer;

use super::SQUARE_SIZE;

/// Per-pixel HSV -> ARGB version of [`super::synthesize_saturation_brightness_square`]
pub fn synthesize_saturation_brightness_square(hue: f32) -> PixelBuffer {
    let last = (SQUARE_SIZE - 1) as f32;

    let mut buffer = PixelBuffer::new(SQUARE_SIZE, SQUARE_SIZE);
    for (row_index, row) in buffer.rows_mut().enumerate() {
        let value = (last - row_index as f32) / last;
        for (column, pixel) in row.iter_mut().enumerate() {
            *pixel = HsvColor::new(hue, column as f32 / last, value).to_argb();
        }
    }

    buffer
}

/// blend implemented with f64 precision and rounding to nearest int
pub fn blend(value: u8, factor: u8) -> u8 {
    (value as f64 * factor as f64 / 255f64).round() as u8
}
