// This file is part of picker-kernel and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2023 Michael Ripley

//! The packed 32-bit color layout handed to the platform.
//!
//! Colors are packed as ARGB: `0xAARRGGBB` when read as a `u32`, which is `[b, g, r, a]` in
//! little-endian byte order. This is the only place that knows the layout, so retargeting a
//! platform with a different native order means changing these two functions.

pub const MAX_COLOR: u8 = 255;

/// Pack 8-bit channels into ARGB.
#[inline(always)]
pub fn pack_argb(red: u8, green: u8, blue: u8, alpha: u8) -> u32 {
    u32::from_le_bytes([blue, green, red, alpha])
}

/// Unpack ARGB into `[red, green, blue, alpha]`.
#[inline(always)]
pub fn unpack_argb(argb: u32) -> [u8; 4] {
    let [b, g, r, a] = argb.to_le_bytes();
    [r, g, b, a]
}
