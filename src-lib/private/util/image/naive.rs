// This file is part of simple-color-picker and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2024 Michael Ripley

//! Naive implementations of various functions that are less performant than their optimized
//! alternatives.
//!
//! These are retained for:
//!
//! 1. benchmarking comparisons
//! 2. unit testing known good output

use crate::private::layout::{pixel_extent, Rect};
use crate::private::util::color::{self, HsvColor};

/// Saturation/value square for a fixed hue, running the full HSV -> RGB conversion for every pixel
pub fn draw_gradient(buffer: &mut [u32], stride: usize, rect: Rect, hue: f64) {
    let width = pixel_extent(rect.width);
    let height = pixel_extent(rect.height);

    for row in 0..rect.height {
        for column in 0..rect.width {
            let (saturation, value) = color::map_point_to_gradient(column as f64, row as f64, width, height);
            let index = (rect.y + row) as usize * stride + (rect.x + column) as usize;
            buffer[index] = color::hsv_to_rgb(HsvColor::new(hue, saturation, value)).to_pixel();
        }
    }
}
