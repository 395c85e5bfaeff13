// This file is part of picker-kernel and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2023 Michael Ripley

//! Axis-aligned rectangles and their set algebra.

use serde::{Deserialize, Serialize};

use super::{Point, Size};

/// An origin plus a size, with the y axis pointing down.
///
/// Width and height may be negative. The edges are defined algebraically (`right = x + width`)
/// and are never normalized, so a rectangle with negative width has `right() < left()` and
/// contains no points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

// Component-wise arithmetic: adding two rects adds x, y, width and height independently.
impl_componentwise!(Rect { x, y, width, height });

impl Rect {
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Build a rect from its edges. Width and height are `right - left` and `bottom - top`, so
    /// reversed edges produce a negative size.
    #[inline]
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    #[inline]
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.y
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn top_left(self) -> Point {
        self.origin()
    }

    #[inline]
    pub fn bottom_right(self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    #[inline]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// `true` for zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Translate the origin. The size is unchanged.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Move the origin by `(-dw, -dh)` and grow the size by `(2 * dw, 2 * dh)`. Negative amounts
    /// shrink the rect and can leave it with a negative size.
    #[inline]
    pub fn inflate(self, dw: f32, dh: f32) -> Self {
        Self::new(self.x - dw, self.y - dh, self.width + 2.0 * dw, self.height + 2.0 * dh)
    }

    /// Inclusive on all four edges.
    #[inline]
    pub fn contains_point(self, point: Point) -> bool {
        let top_left = self.top_left();
        let bottom_right = self.bottom_right();
        point.is_between_horizontally(top_left, bottom_right)
            && point.is_between_vertically(top_left, bottom_right)
    }

    /// `true` if both the top-left and bottom-right corners of `other` are inside `self`.
    #[inline]
    pub fn contains_rect(self, other: Rect) -> bool {
        self.contains_point(other.top_left()) && self.contains_point(other.bottom_right())
    }

    /// `true` if the horizontal spans overlap and the vertical spans overlap. Touching edges count
    /// as overlapping.
    pub fn intersects_with(self, other: Rect) -> bool {
        // a span strictly inside the other has no end "between" in the corner test below
        if self.contains_rect(other) || other.contains_rect(self) {
            return true;
        }

        let (a0, a1) = (self.top_left(), self.bottom_right());
        let (b0, b1) = (other.top_left(), other.bottom_right());

        let horizontal = b0.is_between_horizontally(a0, a1)
            || b1.is_between_horizontally(a0, a1)
            || a0.is_between_horizontally(b0, b1)
            || a1.is_between_horizontally(b0, b1);

        let vertical = b0.is_between_vertically(a0, a1)
            || b1.is_between_vertically(a0, a1)
            || a0.is_between_vertically(b0, b1)
            || a1.is_between_vertically(b0, b1);

        horizontal && vertical
    }

    /// The overlap of two rects.
    ///
    /// - if `other` contains `self`, `self` is returned unchanged
    /// - if `self` contains `other`, `other` is returned
    /// - if they don't intersect at all the result is [`Rect::ZERO`]
    /// - otherwise the edges are `max` of the lefts/tops and `min` of the rights/bottoms
    pub fn intersect(self, other: Rect) -> Self {
        if other.contains_rect(self) {
            self
        } else if self.contains_rect(other) {
            other
        } else if !self.intersects_with(other) {
            Self::ZERO
        } else {
            Self::from_ltrb(
                self.left().max(other.left()),
                self.top().max(other.top()),
                self.right().min(other.right()),
                self.bottom().min(other.bottom()),
            )
        }
    }

    /// The smallest rect covering both.
    pub fn union(self, other: Rect) -> Self {
        Self::from_ltrb(
            self.left().min(other.left()),
            self.top().min(other.top()),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }
}
