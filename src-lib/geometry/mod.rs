// This file is part of picker-kernel and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2023 Michael Ripley

//! Point, size and rectangle value types used for picker layout, hit-testing and clipping.
//!
//! Arithmetic between two values of the same type is component-wise through the usual operator
//! traits. Ordering is not exposed through [`PartialOrd`]: the comparisons these
//! types support are conjunctions over every component (`a.all_lt(b)` means every component of
//! `a` is less than the matching component of `b`). That is a partial order where two values can
//! be neither `all_le` nor `all_ge` of each other, and `<=` from `PartialOrd` would have to agree
//! with `==` and `<`, which a conjunction does not.
//!
//! There are no implicit conversions between the types either. Going from a [`Point`] to a
//! [`Size`] and back is spelled out with [`Point::to_size`] and [`Size::to_point`] so x never
//! silently ends up as height.

use serde::{Deserialize, Serialize};

/// Implements component-wise `+ - * /` (with `Self` and with an `f32` scalar) and the
/// conjunctive comparisons for a struct of `f32` fields.
macro_rules! impl_componentwise {
    ($type:ident { $($field:ident),+ }) => {
        impl ::std::ops::Add for $type {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl ::std::ops::Sub for $type {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl ::std::ops::Mul for $type {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { $($field: self.$field * rhs.$field),+ }
            }
        }

        impl ::std::ops::Div for $type {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self { $($field: self.$field / rhs.$field),+ }
            }
        }

        impl ::std::ops::Mul<f32> for $type {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f32) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl ::std::ops::Div<f32> for $type {
            type Output = Self;

            #[inline]
            fn div(self, rhs: f32) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl $type {
            /// `true` if every component is strictly less than the matching component of `other`.
            /// This is a partial order: `!a.all_lt(b)` does not imply `a.all_ge(b)`.
            #[inline]
            pub fn all_lt(self, other: Self) -> bool {
                true $(&& self.$field < other.$field)+
            }

            /// `true` if every component is less than or equal to the matching component of `other`.
            #[inline]
            pub fn all_le(self, other: Self) -> bool {
                true $(&& self.$field <= other.$field)+
            }

            /// `true` if every component is strictly greater than the matching component of `other`.
            #[inline]
            pub fn all_gt(self, other: Self) -> bool {
                true $(&& self.$field > other.$field)+
            }

            /// `true` if every component is greater than or equal to the matching component of `other`.
            #[inline]
            pub fn all_ge(self, other: Self) -> bool {
                true $(&& self.$field >= other.$field)+
            }
        }
    };
}

mod rect;

pub use rect::Rect;

/// A position in picker coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl_componentwise!(Point { x, y });

impl Point {
    pub const ZERO: Point = Point::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Reinterpret as a size: `x` becomes `width`, `y` becomes `height`.
    #[inline]
    pub fn to_size(self) -> Size {
        Size::new(self.x, self.y)
    }

    /// Inclusive test of `self.x` against `a.x ..= b.x`. `a` is the low end; if `a.x > b.x`
    /// nothing is between them.
    #[inline]
    pub fn is_between_horizontally(self, a: Point, b: Point) -> bool {
        a.x <= self.x && self.x <= b.x
    }

    /// Inclusive test of `self.y` against `a.y ..= b.y`. `a` is the low end.
    #[inline]
    pub fn is_between_vertically(self, a: Point, b: Point) -> bool {
        a.y <= self.y && self.y <= b.y
    }
}

/// Width and height. Negative values are allowed and are produced by, for example, subtracting
/// a larger size or inflating by a negative amount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl_componentwise!(Size { width, height });

impl Size {
    pub const ZERO: Size = Size::new(0.0, 0.0);

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Reinterpret as a point: `width` becomes `x`, `height` becomes `y`.
    #[inline]
    pub fn to_point(self) -> Point {
        Point::new(self.width, self.height)
    }
}
