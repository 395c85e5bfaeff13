// This file is part of picker-kernel and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2023 Michael Ripley

//! The portable part of a color picker: 2D geometry for layout and hit-testing, HSV/RGB color
//! conversion, and synthesis of the gradient bitmaps the picker draws.
//!
//! Everything in [`geometry`], [`color`] and [`gradient`] is pure. No function in those modules
//! fails: degenerate rectangles and achromatic colors are ordinary data, not errors. Range
//! checking of touch-derived input is the caller's job, see [`gradient::pin`].

pub mod color;
pub mod geometry;
pub mod gradient;
pub mod util;
