// This file is part of simple-color-picker and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2024 Michael Ripley

//! Screen regions of the picker window.
//!
//! ```text
//! +----------------------+
//! |                      |
//! |   gradient square    |
//! |                      |
//! +-----------------+----+
//! |   hue slider    | sw |
//! +-----------------+----+
//! ```
//!
//! The gradient is as wide as the window, and the strip underneath it is whatever height is left
//! over. The swatch is a square filling the right end of that strip.

use crate::private::util::color;

/// axis-aligned rectangle in window pixels
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// true if the point lies inside. The right and bottom edges are exclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let left = self.x as f64;
        let top = self.y as f64;
        x >= left && x < left + self.width as f64 && y >= top && y < top + self.height as f64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// The interactive parts of the window
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Region {
    Gradient,
    Slider,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub gradient: Rect,
    pub slider: Rect,
    pub swatch: Rect,
}

impl Layout {
    pub fn new(width: u32, height: u32) -> Self {
        let gradient_height = width.min(height);
        let strip = height - gradient_height;
        let swatch_size = strip.min(width);
        let slider_width = width - swatch_size;

        Layout {
            width,
            height,
            gradient: Rect::new(0, 0, width, gradient_height),
            slider: Rect::new(0, gradient_height, slider_width, strip),
            swatch: Rect::new(slider_width, gradient_height, swatch_size, strip),
        }
    }

    /// number of pixels in a framebuffer for this layout
    pub fn buffer_len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Which interactive region, if any, is under the given window coordinates
    pub fn hit(&self, x: f64, y: f64) -> Option<Region> {
        if self.gradient.contains(x, y) {
            Some(Region::Gradient)
        } else if self.slider.contains(x, y) {
            Some(Region::Slider)
        } else {
            None
        }
    }

    /// `(saturation, value)` under window coordinates, clamped onto the gradient square
    pub fn gradient_color(&self, x: f64, y: f64) -> (f64, f64) {
        let Rect {
            x: left,
            y: top,
            width,
            height,
        } = self.gradient;
        color::map_point_to_gradient(
            x - left as f64,
            y - top as f64,
            pixel_extent(width),
            pixel_extent(height),
        )
    }

    /// hue under a window x coordinate, clamped onto the slider
    pub fn slider_hue(&self, x: f64) -> f64 {
        color::map_point_to_hue(x - self.slider.x as f64, pixel_extent(self.slider.width))
    }
}

/// Distance between the centers of the first and last pixel of a run of `length` pixels.
///
/// Color mappings use this rather than the length itself so that the outermost pixel columns hit
/// the boundary colors exactly.
#[inline(always)]
pub fn pixel_extent(length: u32) -> f64 {
    length.saturating_sub(1) as f64
}
