// This file is part of simple-color-picker and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2024 Michael Ripley

//! RGB/HSV color conversions, plus the mapping between picker coordinates and color parameters.
//!
//! Colors are carried around as `f64` fractions. Bytes only show up at the edges: the
//! framebuffer, the title readout, and the config file. Scaling happens through the `From` impls
//! on [`Rgb8`] and [`Hsv8`] and nowhere else.

/// `max - min` below this is treated as zero, making the color achromatic
const ACHROMATIC_EPSILON: f64 = 1e-5;
const MAX_COLOR: f64 = 255.0;
const FULL_TURN: f64 = 360.0;
const SECTOR_DEGREES: f64 = 60.0;

/// RGB with each channel in `[0, 1]`
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RgbColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RgbColor {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        RgbColor { r, g, b }
    }

    /// Pack into the framebuffer's 0RGB pixel format
    #[inline(always)]
    pub fn to_pixel(self) -> u32 {
        Rgb8::from(self).to_pixel()
    }
}

/// RGB with each channel in `[0, 255]`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }

    /// Pack into the framebuffer's 0RGB pixel format. The top byte must stay zero.
    #[inline(always)]
    pub fn to_pixel(self) -> u32 {
        u32::from_le_bytes([self.b, self.g, self.r, 0]) // BE 0RGB == LE BGR0
    }

    pub fn from_pixel(pixel: u32) -> Self {
        let [b, g, r, _] = pixel.to_le_bytes();
        Rgb8 { r, g, b }
    }
}

impl From<RgbColor> for Rgb8 {
    fn from(color: RgbColor) -> Self {
        Rgb8 {
            r: fraction_to_u8(color.r),
            g: fraction_to_u8(color.g),
            b: fraction_to_u8(color.b),
        }
    }
}

impl From<Rgb8> for RgbColor {
    fn from(color: Rgb8) -> Self {
        RgbColor {
            r: color.r as f64 / MAX_COLOR,
            g: color.g as f64 / MAX_COLOR,
            b: color.b as f64 / MAX_COLOR,
        }
    }
}

/// HSV with hue in degrees `[0, 360)` and saturation/value in `[0, 1]`.
///
/// Hue is meaningless for achromatic colors, and is 0 whenever [`rgb_to_hsv`] produces one.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct HsvColor {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl HsvColor {
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        HsvColor {
            hue,
            saturation,
            value,
        }
    }
}

/// Byte-oriented HSV. Every component is in `[0, 255]`, and a hue of `h` means `h * 360 / 255`
/// degrees, so 255 is a full turn and lands back on red.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hsv8 {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv8 {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Hsv8 { h, s, v }
    }
}

impl From<HsvColor> for Hsv8 {
    fn from(color: HsvColor) -> Self {
        Hsv8 {
            h: fraction_to_u8(normalize_hue(color.hue) / FULL_TURN),
            s: fraction_to_u8(color.saturation),
            v: fraction_to_u8(color.value),
        }
    }
}

impl From<Hsv8> for HsvColor {
    fn from(color: Hsv8) -> Self {
        HsvColor {
            hue: normalize_hue(color.h as f64 * FULL_TURN / MAX_COLOR),
            saturation: color.s as f64 / MAX_COLOR,
            value: color.v as f64 / MAX_COLOR,
        }
    }
}

/// Scale a `[0, 1]` fraction to the nearest byte. Out of range input saturates, NaN becomes 0.
#[inline(always)]
fn fraction_to_u8(fraction: f64) -> u8 {
    // float -> int casts saturate and map NaN to 0, so no extra checks are needed
    (fraction.clamp(0.0, 1.0) * MAX_COLOR).round() as u8
}

/// Reduce any hue in degrees into `[0, 360)`. Non-finite hues become 0.
pub fn normalize_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }

    // rem_euclid can round up to exactly 360 for tiny negative inputs
    let hue = hue.rem_euclid(FULL_TURN);
    if hue >= FULL_TURN {
        0.0
    } else {
        hue
    }
}

/// see https://en.wikipedia.org/wiki/HSL_and_HSV#From_RGB
pub fn rgb_to_hsv(rgb: RgbColor) -> HsvColor {
    let RgbColor { r, g, b } = rgb;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    // gray, or black: hue is undefined so we call it 0
    if delta < ACHROMATIC_EPSILON || max <= 0.0 {
        return HsvColor {
            hue: 0.0,
            saturation: 0.0,
            value: max,
        };
    }

    let sector = if max == r {
        ((g - b) / delta) % 6.0
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        // max must therefore be b
        (r - g) / delta + 4.0
    };

    HsvColor {
        hue: normalize_hue(SECTOR_DEGREES * sector),
        saturation: delta / max,
        value: max,
    }
}

/// see https://en.wikipedia.org/wiki/HSL_and_HSV#HSV_to_RGB
pub fn hsv_to_rgb(hsv: HsvColor) -> RgbColor {
    let HsvColor {
        hue,
        saturation,
        value,
    } = hsv;

    if saturation <= 0.0 {
        return RgbColor::new(value, value, value);
    }

    let hh = normalize_hue(hue) / SECTOR_DEGREES;
    let sector = hh.floor();
    let ff = hh - sector;

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * ff);
    let t = value * (1.0 - saturation * (1.0 - ff));

    let (r, g, b) = match sector as u8 % 6 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    RgbColor { r, g, b }
}

pub fn rgb8_to_hsv8(rgb: Rgb8) -> Hsv8 {
    rgb_to_hsv(rgb.into()).into()
}

pub fn hsv8_to_rgb8(hsv: Hsv8) -> Rgb8 {
    hsv_to_rgb(hsv.into()).into()
}

/// The extent itself if it's a usable positive finite length, otherwise 0
#[inline(always)]
fn usable_extent(extent: f64) -> f64 {
    if extent.is_finite() && extent > 0.0 {
        extent
    } else {
        0.0
    }
}

/// `position / extent`, with `position` clamped into `[0, extent]`. A degenerate extent (zero,
/// negative, NaN or infinite) maps everything to 0 instead of producing NaN.
#[inline(always)]
fn unit_fraction(position: f64, extent: f64) -> f64 {
    let extent = usable_extent(extent);
    if extent == 0.0 || position.is_nan() {
        return 0.0;
    }
    position.clamp(0.0, extent) / extent
}

/// Map a point in the gradient square to `(saturation, value)`. Saturation grows left to right,
/// value grows bottom to top.
pub fn map_point_to_gradient(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    (unit_fraction(x, width), 1.0 - unit_fraction(y, height))
}

/// Inverse of [`map_point_to_gradient`]: where in the gradient square a color sits.
pub fn gradient_point(saturation: f64, value: f64, width: f64, height: f64) -> (f64, f64) {
    (
        unit_fraction(saturation, 1.0) * usable_extent(width),
        (1.0 - unit_fraction(value, 1.0)) * usable_extent(height),
    )
}

/// Map a point on the hue slider to a hue in degrees, `[0, 360]`
pub fn map_point_to_hue(x: f64, width: f64) -> f64 {
    unit_fraction(x, width) * FULL_TURN
}

/// Inverse of [`map_point_to_hue`]
pub fn hue_point(hue: f64, width: f64) -> f64 {
    unit_fraction(hue, FULL_TURN) * usable_extent(width)
}



#[cfg(test)]
mod test_mapping {
    use super::*;

    const WIDTH: f64 = 512.0;
    const HEIGHT: f64 = 300.0;

    #[test]
    fn gradient_corners() {
        assert_eq!(map_point_to_gradient(0.0, 0.0, WIDTH, HEIGHT), (0.0, 1.0));
        assert_eq!(map_point_to_gradient(WIDTH, HEIGHT, WIDTH, HEIGHT), (1.0, 0.0));
        assert_eq!(map_point_to_gradient(WIDTH, 0.0, WIDTH, HEIGHT), (1.0, 1.0));
        assert_eq!(map_point_to_gradient(0.0, HEIGHT, WIDTH, HEIGHT), (0.0, 0.0));
    }

    #[test]
    fn gradient_center() {
        assert_eq!(map_point_to_gradient(WIDTH / 2.0, HEIGHT / 2.0, WIDTH, HEIGHT), (0.5, 0.5));
    }

    #[test]
    fn gradient_clamps_out_of_range() {
        assert_eq!(map_point_to_gradient(-40.0, -3.0, WIDTH, HEIGHT), (0.0, 1.0));
        assert_eq!(map_point_to_gradient(WIDTH * 3.0, HEIGHT + 1.0, WIDTH, HEIGHT), (1.0, 0.0));
        assert_eq!(map_point_to_gradient(f64::NAN, f64::NAN, WIDTH, HEIGHT), (0.0, 1.0));
    }

    #[test]
    fn gradient_degenerate_extent() {
        assert_eq!(map_point_to_gradient(10.0, 10.0, 0.0, 0.0), (0.0, 1.0));
        assert_eq!(map_point_to_gradient(10.0, 10.0, -5.0, f64::NAN), (0.0, 1.0));
    }

    #[test]
    fn gradient_inverse() {
        for (x, y) in [(0.0, 0.0), (128.0, 75.0), (300.5, 299.0), (WIDTH, HEIGHT)] {
            let (saturation, value) = map_point_to_gradient(x, y, WIDTH, HEIGHT);
            let (actual_x, actual_y) = gradient_point(saturation, value, WIDTH, HEIGHT);
            assert!((actual_x - x).abs() < 1e-9 && (actual_y - y).abs() < 1e-9, "({x}, {y}) came back as ({actual_x}, {actual_y})");
        }
    }

    #[test]
    fn infinite_extent_stays_finite() {
        assert_eq!(map_point_to_gradient(f64::INFINITY, f64::INFINITY, f64::INFINITY, f64::INFINITY), (0.0, 1.0));
        assert_eq!(map_point_to_gradient(5.0, 5.0, f64::INFINITY, f64::NEG_INFINITY), (0.0, 1.0));
        assert_eq!(map_point_to_hue(f64::INFINITY, f64::INFINITY), 0.0);
        assert_eq!(gradient_point(0.0, 1.0, f64::INFINITY, f64::INFINITY), (0.0, 0.0));
        assert_eq!(hue_point(0.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn hue_ends() {
        assert_eq!(map_point_to_hue(0.0, WIDTH), 0.0);
        assert_eq!(map_point_to_hue(WIDTH, WIDTH), 360.0);
        assert_eq!(map_point_to_hue(WIDTH / 4.0, WIDTH), 90.0);
    }

    #[test]
    fn hue_clamps_out_of_range() {
        assert_eq!(map_point_to_hue(-1.0, WIDTH), 0.0);
        assert_eq!(map_point_to_hue(WIDTH + 100.0, WIDTH), 360.0);
        assert_eq!(map_point_to_hue(5.0, 0.0), 0.0);
    }

    #[test]
    fn hue_inverse() {
        assert_eq!(hue_point(0.0, WIDTH), 0.0);
        assert_eq!(hue_point(180.0, WIDTH), WIDTH / 2.0);
        assert_eq!(hue_point(360.0, WIDTH), WIDTH);
        assert_eq!(hue_point(400.0, WIDTH), WIDTH);
    }
}
