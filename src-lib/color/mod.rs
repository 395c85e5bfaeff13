// This file is part of picker-kernel and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2023 Michael Ripley

//! HSV and RGB colors and the conversions between them.
//!
//! Nothing here clamps. A saturation of 1.3 or a hue of -20 goes through the math as-is; callers
//! that feed touch-derived values in should [pin](crate::gradient::pin) them first.

use serde::{Deserialize, Serialize};

pub use packed::{pack_argb, unpack_argb, MAX_COLOR};

mod packed;

/// A color in hue/saturation/value space.
///
/// `hue` is in degrees (`0..360`), `saturation` and `value` are in `0..1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HsvColor {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

/// A color with red, green and blue channels in `0..1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RgbColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

/// An 8-bit-per-channel color, the precision the gradient bitmaps are built in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// One of the three HSV components, as swept along a picker bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HsvComponent {
    Hue,
    Saturation,
    Brightness,
}

impl HsvColor {
    #[inline]
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self { hue, saturation, value }
    }

    /// see https://en.wikipedia.org/wiki/HSL_and_HSV#Color_conversion_formulae
    ///
    /// The hue circle is split into six 60° sectors, each `[low, high)`: a hue of exactly 60 is in
    /// the second sector, not the first. Hues at or past 300 (including 360 and anything larger)
    /// land in the last sector.
    pub fn to_rgb(self) -> RgbColor {
        let hue_prime = self.hue / 60.0;
        // the factor for whichever channel is neither the largest nor zero
        let x = 1.0 - (hue_prime % 2.0 - 1.0).abs();

        let [r, g, b] = match hue_prime {
            h if h < 1.0 => [1.0, x, 0.0],
            h if h < 2.0 => [x, 1.0, 0.0],
            h if h < 3.0 => [0.0, 1.0, x],
            h if h < 4.0 => [0.0, x, 1.0],
            h if h < 5.0 => [x, 0.0, 1.0],
            _ => [1.0, 0.0, x],
        };

        let chroma = self.value * self.saturation;
        let m = self.value - chroma;

        RgbColor::new(r * chroma + m, g * chroma + m, b * chroma + m)
    }

    #[inline]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        rgb.to_hsv()
    }

    /// Convert to an opaque packed ARGB color.
    #[inline]
    pub fn to_argb(self) -> u32 {
        self.to_rgb().to_argb()
    }

    /// Convert from a packed ARGB color. Alpha is ignored.
    #[inline]
    pub fn from_argb(argb: u32) -> Self {
        RgbColor::from_argb(argb).to_hsv()
    }
}

impl RgbColor {
    #[inline]
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Convert to HSV. Achromatic colors (any gray, including black and white) get a hue of 0,
    /// and black gets a saturation of 0.
    #[inline]
    pub fn to_hsv(self) -> HsvColor {
        self.to_hsv_impl(None)
    }

    /// Convert to HSV, keeping what `previous` knew that this color can't express.
    ///
    /// A picker dragged down to black or across to gray would otherwise snap its hue and
    /// saturation handles back to zero. With this:
    ///
    /// - black keeps the saturation of `previous`
    /// - any achromatic color keeps the hue of `previous`
    /// - a hue that differs from `previous` by exactly one full turn (0° vs 360°, the same red)
    ///   keeps the previous hue, so the hue handle doesn't jump across the seam
    #[inline]
    pub fn to_hsv_preserving(self, previous: HsvColor) -> HsvColor {
        self.to_hsv_impl(Some(previous))
    }

    fn to_hsv_impl(self, previous: Option<HsvColor>) -> HsvColor {
        let RgbColor { red, green, blue } = self;
        let value = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = value - min;

        let saturation = if value == 0.0 {
            previous.map_or(0.0, |previous| previous.saturation)
        } else {
            delta / value
        };

        // the delta check keeps a preserved saturation on black from dividing by zero
        let hue = if saturation == 0.0 || delta == 0.0 {
            previous.map_or(0.0, |previous| previous.hue)
        } else {
            let sector = if red == value {
                (green - blue) / delta
            } else if green == value {
                2.0 + (blue - red) / delta
            } else {
                4.0 + (red - green) / delta
            };

            let mut turns = sector / 6.0;
            if turns < 0.0 {
                turns += 1.0;
            }

            match previous {
                Some(previous) if (turns - previous.hue / 360.0).abs() == 1.0 => previous.hue,
                _ => turns * 360.0,
            }
        };

        HsvColor { hue, saturation, value }
    }

    /// Quantize to 8 bits per channel, rounding to nearest. Out of range channels saturate at
    /// 0 or 255.
    #[inline]
    pub fn to_rgb8(self) -> Rgb8 {
        // float -> int `as` casts saturate, and NaN becomes 0
        let channel = |c: f32| (c * MAX_COLOR as f32).round() as u8;
        Rgb8::new(channel(self.red), channel(self.green), channel(self.blue))
    }

    /// Convert to an opaque packed ARGB color.
    #[inline]
    pub fn to_argb(self) -> u32 {
        self.to_rgb8().to_argb()
    }

    /// Convert to a packed ARGB color with the given straight (not premultiplied) alpha.
    #[inline]
    pub fn to_argb_with_alpha(self, alpha: u8) -> u32 {
        let Rgb8 { red, green, blue } = self.to_rgb8();
        pack_argb(red, green, blue, alpha)
    }

    /// Convert from a packed ARGB color. Alpha is ignored.
    #[inline]
    pub fn from_argb(argb: u32) -> Self {
        let [r, g, b, _a] = unpack_argb(argb);
        let channel = |c: u8| c as f32 / MAX_COLOR as f32;
        Self::new(channel(r), channel(g), channel(b))
    }
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    pub const WHITE: Rgb8 = Rgb8::new(MAX_COLOR, MAX_COLOR, MAX_COLOR);

    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Apply `f` to every channel.
    #[inline(always)]
    pub fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(u8) -> u8,
    {
        Self::new(f(self.red), f(self.green), f(self.blue))
    }

    /// Pack as opaque ARGB.
    #[inline(always)]
    pub fn to_argb(self) -> u32 {
        pack_argb(self.red, self.green, self.blue, MAX_COLOR)
    }
}

impl HsvComponent {
    pub const ALL: [HsvComponent; 3] = [HsvComponent::Hue, HsvComponent::Saturation, HsvComponent::Brightness];

    /// Map `0`, `1`, `2` to hue, saturation and brightness.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            HsvComponent::Hue => "hue",
            HsvComponent::Saturation => "saturation",
            HsvComponent::Brightness => "brightness",
        }
    }

    /// This component of `color` as a fraction of its full range. Hue is divided by 360.
    #[inline]
    pub fn fraction_of(self, color: HsvColor) -> f32 {
        match self {
            HsvComponent::Hue => color.hue / 360.0,
            HsvComponent::Saturation => color.saturation,
            HsvComponent::Brightness => color.value,
        }
    }

    /// `color` with this component replaced by `fraction` of its full range. The other two
    /// components are left alone.
    #[inline]
    pub fn with_fraction(self, color: HsvColor, fraction: f32) -> HsvColor {
        match self {
            HsvComponent::Hue => HsvColor { hue: fraction * 360.0, ..color },
            HsvComponent::Saturation => HsvColor { saturation: fraction, ..color },
            HsvComponent::Brightness => HsvColor { value: fraction, ..color },
        }
    }
}

#[cfg(test)]
mod test_hsv_to_rgb {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_rgb_eq(actual: RgbColor, expected: RgbColor) {
        let close = (actual.red - expected.red).abs() < EPSILON
            && (actual.green - expected.green).abs() < EPSILON
            && (actual.blue - expected.blue).abs() < EPSILON;
        assert!(close, "{actual:?} != {expected:?}");
    }

    #[test]
    fn primaries() {
        assert_eq!(HsvColor::new(0.0, 1.0, 1.0).to_rgb(), RgbColor::new(1.0, 0.0, 0.0));
        assert_eq!(HsvColor::new(120.0, 1.0, 1.0).to_rgb(), RgbColor::new(0.0, 1.0, 0.0));
        assert_eq!(HsvColor::new(240.0, 1.0, 1.0).to_rgb(), RgbColor::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn full_circle_is_red() {
        assert_eq!(HsvColor::new(360.0, 1.0, 1.0).to_rgb(), RgbColor::new(1.0, 0.0, 0.0));
    }

    /// one channel at 1, one at 0, and the remaining one is the sector ramp
    #[test]
    fn saturated_colors_have_one_full_and_one_empty_channel() {
        for step in 0..360 {
            let hue = step as f32 + 0.5;
            let rgb = HsvColor::new(hue, 1.0, 1.0).to_rgb();
            let mut channels = [rgb.red, rgb.green, rgb.blue];
            channels.sort_by(f32::total_cmp);
            let expected_x = 1.0 - ((hue / 60.0) % 2.0 - 1.0).abs();

            assert_eq!(channels[0], 0.0, "no empty channel @ hue {hue}: {rgb:?}");
            assert_eq!(channels[2], 1.0, "no full channel @ hue {hue}: {rgb:?}");
            assert!((channels[1] - expected_x).abs() < EPSILON, "middle channel wrong @ hue {hue}: {rgb:?}");
        }
    }

    /// sectors are half-open on the low end, so 60° belongs to the yellow-to-green sector
    #[test]
    fn sector_boundary_tie_break() {
        assert_eq!(HsvColor::new(60.0, 1.0, 1.0).to_rgb(), RgbColor::new(1.0, 1.0, 0.0));
        assert_rgb_eq(HsvColor::new(59.9, 1.0, 1.0).to_rgb(), RgbColor::new(1.0, 59.9 / 60.0, 0.0));
    }

    #[test]
    fn zero_saturation_is_gray() {
        for hue in [0.0, 77.0, 200.0, 359.0] {
            assert_eq!(HsvColor::new(hue, 0.0, 0.5).to_rgb(), RgbColor::new(0.5, 0.5, 0.5));
        }
    }

    #[test]
    fn zero_value_is_black() {
        assert_eq!(HsvColor::new(123.0, 0.7, 0.0).to_rgb(), RgbColor::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn partial_saturation_and_value() {
        assert_rgb_eq(HsvColor::new(150.0, 0.75, 0.8).to_rgb(), RgbColor::new(0.2, 0.8, 0.5));
    }

    /// out of domain input is not clamped, and must not panic
    #[test]
    fn out_of_domain_input_passes_through() {
        let rgb = HsvColor::new(0.0, 2.0, 1.0).to_rgb();
        assert_eq!(rgb.red, 1.0);
        assert_eq!(rgb.green, -1.0);
        let _ = HsvColor::new(-90.0, 0.5, 0.5).to_rgb();
        let _ = HsvColor::new(f32::NAN, 0.5, 0.5).to_rgb();
    }
}

#[cfg(test)]
mod test_rgb_to_hsv {
    use super::*;

    #[test]
    fn round_trip_chromatic_colors() {
        let samples = [
            RgbColor::new(1.0, 0.5, 0.0),
            RgbColor::new(0.2, 0.8, 0.5),
            RgbColor::new(0.1, 0.2, 0.9),
            RgbColor::new(0.9, 0.1, 0.4),
            RgbColor::new(0.3, 0.3, 0.6),
            RgbColor::new(0.05, 0.04, 0.01),
        ];

        for rgb in samples {
            let round_trip = rgb.to_hsv().to_rgb();
            let error = (round_trip.red - rgb.red).abs()
                .max((round_trip.green - rgb.green).abs())
                .max((round_trip.blue - rgb.blue).abs());
            assert!(error < 1e-5, "{rgb:?} came back as {round_trip:?}");
        }
    }

    /// walk a coarse RGB grid, skipping achromatic colors
    #[test]
    fn round_trip_grid() {
        let steps = [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0];
        for r in steps {
            for g in steps {
                for b in steps {
                    if r == g && g == b {
                        continue;
                    }
                    let rgb = RgbColor::new(r, g, b);
                    let round_trip = rgb.to_hsv().to_rgb();
                    assert!((round_trip.red - r).abs() < 1e-5, "{rgb:?} -> {round_trip:?}");
                    assert!((round_trip.green - g).abs() < 1e-5, "{rgb:?} -> {round_trip:?}");
                    assert!((round_trip.blue - b).abs() < 1e-5, "{rgb:?} -> {round_trip:?}");
                }
            }
        }
    }

    #[test]
    fn hue_is_in_degrees() {
        for (rgb, expected_hue) in [
            (RgbColor::new(1.0, 0.0, 0.0), 0.0),
            (RgbColor::new(0.0, 1.0, 0.0), 120.0),
            (RgbColor::new(0.0, 0.0, 1.0), 240.0),
            (RgbColor::new(1.0, 0.0, 0.5), 330.0),
        ] {
            let hsv = rgb.to_hsv();
            assert!((hsv.hue - expected_hue).abs() < 1e-3, "{rgb:?} -> {hsv:?}");
        }
    }

    #[test]
    fn black_without_preserve() {
        assert_eq!(RgbColor::new(0.0, 0.0, 0.0).to_hsv(), HsvColor::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn gray_without_preserve() {
        assert_eq!(RgbColor::new(0.4, 0.4, 0.4).to_hsv(), HsvColor::new(0.0, 0.0, 0.4));
    }

    #[test]
    fn black_preserves_hue_and_saturation() {
        let previous = HsvColor::new(200.0, 0.6, 0.3);
        let hsv = RgbColor::new(0.0, 0.0, 0.0).to_hsv_preserving(previous);
        assert_eq!(hsv, HsvColor::new(200.0, 0.6, 0.0));
    }

    /// white has a real saturation of 0, only the hue is kept
    #[test]
    fn white_preserves_hue_only() {
        let previous = HsvColor::new(45.0, 0.8, 0.9);
        let hsv = RgbColor::new(1.0, 1.0, 1.0).to_hsv_preserving(previous);
        assert_eq!(hsv, HsvColor::new(45.0, 0.0, 1.0));
    }

    #[test]
    fn seam_keeps_previous_hue() {
        let previous = HsvColor::new(360.0, 1.0, 1.0);
        let hsv = RgbColor::new(1.0, 0.0, 0.0).to_hsv_preserving(previous);
        assert_eq!(hsv.hue, 360.0);

        let hsv = RgbColor::new(1.0, 0.0, 0.0).to_hsv();
        assert_eq!(hsv.hue, 0.0);
    }

    #[test]
    fn chromatic_color_ignores_previous() {
        let previous = HsvColor::new(10.0, 0.1, 0.1);
        let hsv = RgbColor::new(0.0, 1.0, 0.0).to_hsv_preserving(previous);
        assert!((hsv.hue - 120.0).abs() < 1e-3, "{hsv:?}");
        assert_eq!(hsv.saturation, 1.0);
        assert_eq!(hsv.value, 1.0);
    }
}
