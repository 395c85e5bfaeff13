// This file is part of picker-kernel and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2023 Michael Ripley

//! Gradient bitmaps drawn by the color picker, and the mapping between a touch inside a picker
//! and the color under it.
//!
//! Generation assumes pinned input. Touch-derived fractions should go through [`pin`] (the
//! `pick_*` functions here already do) before they reach a color.

use crate::color::{HsvColor, HsvComponent, Rgb8, MAX_COLOR};
use crate::geometry::{Point, Rect};
use crate::util::image::PixelBuffer;
use crate::util::numeric::unit_fraction;

pub use crate::util::numeric::pin;

#[cfg(any(test, feature = "benchmark"))]
pub mod precise;

/// side-length of the saturation/brightness square
pub const SQUARE_SIZE: u32 = 256;

/// calculates `value * factor / 255`, rounded to nearest
///
/// Note that this cannot be done with u8 precision alone, an intermediate step in the math can be
/// up to 255 * 255 == 65025 inclusive. A u16 holds that, and integer division truncates towards
/// zero just like a float -> u8 cast would.
///
/// - "Integer division rounds towards zero" [source](https://doc.rust-lang.org/reference/expressions/operator-expr.html#arithmetic-and-logical-binary-operators)
///
/// Adding 255 / 2 ~= 127 to the dividend turns the truncation into round-to-nearest. There is no
/// tie to break, as `value * factor` is never exactly halfway between two multiples of 255.
#[inline(always)]
pub fn blend(value: u8, factor: u8) -> u8 {
    const MAX: u16 = MAX_COLOR as u16;
    const HALF: u16 = MAX / 2;

    ((value as u16 * factor as u16 + HALF) / MAX) as u8
}

/// Generate the 256x256 square for `hue` (in degrees). Saturation runs `0..1` left to right and
/// brightness runs `0..1` bottom to top, so brightness step `v` lives in row `255 - v`.
///
/// The fully saturated color for the hue is computed once, and the saturation blend once per
/// column. Each pixel is then a single brightness blend.
pub fn synthesize_saturation_brightness_square(hue: f32) -> PixelBuffer {
    let saturated = HsvColor::new(hue, 1.0, 1.0).to_rgb().to_rgb8();

    // index is the saturation step: step 0 is white, step 255 is `saturated`
    let columns: [Rgb8; SQUARE_SIZE as usize] = std::array::from_fn(|saturation| {
        let saturation = saturation as u8;
        saturated.map(|channel| MAX_COLOR - blend(MAX_COLOR - channel, saturation))
    });

    let mut buffer = PixelBuffer::new(SQUARE_SIZE, SQUARE_SIZE);
    for (row_index, row) in buffer.rows_mut().enumerate() {
        let brightness = MAX_COLOR - row_index as u8;
        for (pixel, column) in row.iter_mut().zip(columns.iter()) {
            *pixel = column.map(|channel| blend(channel, brightness)).to_argb();
        }
    }

    buffer
}

/// Generate a `width` x `height` bar sweeping `component` from 0 to its full range left to right,
/// with the other two components taken from `base`. Every row is identical.
///
/// The first column is exactly 0 and the last is exactly the full range. A zero sized bar is
/// returned empty.
pub fn synthesize_hue_bar(component: HsvComponent, base: HsvColor, width: u32, height: u32) -> PixelBuffer {
    let last_column = width.saturating_sub(1).max(1) as f32;
    let strip: Vec<u32> = (0..width)
        .map(|column| component.with_fraction(base, column as f32 / last_column).to_argb())
        .collect();

    let mut buffer = PixelBuffer::new(width, height);
    for row in buffer.rows_mut() {
        row.copy_from_slice(&strip);
    }

    buffer
}

/// calculate the color under `touch` on a saturation/brightness square drawn into `bounds`.
/// Touches outside the square are pinned to its nearest edge.
pub fn pick_from_square(hue: f32, touch: Point, bounds: Rect) -> HsvColor {
    let saturation = unit_fraction(touch.x - bounds.left(), bounds.width);
    let brightness = 1.0 - unit_fraction(touch.y - bounds.top(), bounds.height);
    HsvColor::new(hue, saturation, brightness)
}

/// Where the selection marker for `color` sits on a square drawn into `bounds`.
pub fn square_marker_position(color: HsvColor, bounds: Rect) -> Point {
    Point::new(
        bounds.left() + pin(0.0, color.saturation, 1.0) * bounds.width,
        bounds.top() + (1.0 - pin(0.0, color.value, 1.0)) * bounds.height,
    )
}

/// calculate the color under `touch` on a `component` bar drawn into `bounds`. Only the
/// horizontal position matters.
pub fn pick_from_bar(component: HsvComponent, base: HsvColor, touch: Point, bounds: Rect) -> HsvColor {
    component.with_fraction(base, unit_fraction(touch.x - bounds.left(), bounds.width))
}

/// Where the selection marker for `color` sits on a `component` bar drawn into `bounds`. The
/// marker is vertically centered.
pub fn bar_marker_position(component: HsvComponent, color: HsvColor, bounds: Rect) -> Point {
    Point::new(
        bounds.left() + pin(0.0, component.fraction_of(color), 1.0) * bounds.width,
        bounds.center().y,
    )
}

#[cfg(test)]
fn color_error(actual: u32, expected: u32) -> f64 {
    if actual == expected {
        return 0.0;
    }

    let actual = crate::color::unpack_argb(actual);
    let expected = crate::color::unpack_argb(expected);

    actual.iter()
        .zip(expected.iter())
        .map(|(&a, &e)| {
            let delta = a as f64 - e as f64;
            delta * delta
        })
        .sum::<f64>()
        .sqrt()
}
