// This file is part of simple-color-picker and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2024 Michael Ripley

//! Software rendering of the picker into a 0RGB framebuffer.
//!
//! All drawing functions take the buffer plus its `stride` (the window width in pixels). Rects
//! are expected to fit inside the buffer. Rows that fall outside it are skipped, never panicked
//! on, since the surface size and the layout can briefly disagree during a resize.

use crate::private::layout::{pixel_extent, Layout, Rect};
use crate::private::picker::PickerState;
use crate::private::util::color::{self, HsvColor, RgbColor};

#[cfg(any(test, feature = "benchmark"))]
pub mod naive;

const BACKGROUND_COLOR: u32 = 0x0000_0000;
const SLIDER_BAR_COLOR: u32 = 0x00FF_FFFF;
const SLIDER_BAR_WIDTH: u32 = 3;
const INDICATOR_RADIUS: i64 = 6;
const INDICATOR_LIGHT: u32 = 0x00FF_FFFF;
const INDICATOR_DARK: u32 = 0x0000_0000;

/// Draw the whole window for the current picker state
pub fn draw_frame(buffer: &mut [u32], layout: &Layout, state: &PickerState) {
    debug_assert_eq!(buffer.len(), layout.buffer_len(), "draw_frame() passed buffer of wrong size");
    let stride = layout.width as usize;
    let hsv = state.color();

    buffer.fill(BACKGROUND_COLOR);
    draw_gradient(buffer, stride, layout.gradient, hsv.hue);
    draw_indicator(buffer, stride, layout.gradient, hsv);
    draw_hue_slider(buffer, stride, layout.slider);
    draw_slider_bar(buffer, stride, layout.slider, hsv.hue);
    fill_rect(buffer, stride, layout.swatch, state.rgb().to_pixel());
}

/// Mutable slice of one row of `rect`, or `None` if it doesn't fit in the buffer
#[inline(always)]
fn rect_row(buffer: &mut [u32], stride: usize, rect: Rect, row: u32) -> Option<&mut [u32]> {
    let start = (rect.y + row) as usize * stride + rect.x as usize;
    buffer.get_mut(start..start + rect.width as usize)
}

pub fn fill_rect(buffer: &mut [u32], stride: usize, rect: Rect, pixel: u32) {
    for row in 0..rect.height {
        match rect_row(buffer, stride, rect, row) {
            Some(pixels) => pixels.fill(pixel),
            None => break,
        }
    }
}

/// Saturation/value square for a fixed hue.
///
/// For a fixed hue, every channel of an HSV color is `value * (1 - saturation * (1 - pure))`
/// where `pure` is that channel of the fully saturated, full value color. So the expensive
/// sector math runs once per frame instead of once per pixel, and what's left per pixel is three
/// multiply-adds.
pub fn draw_gradient(buffer: &mut [u32], stride: usize, rect: Rect, hue: f64) {
    let pure = color::hsv_to_rgb(HsvColor::new(hue, 1.0, 1.0));
    let width = pixel_extent(rect.width);
    let height = pixel_extent(rect.height);

    // per-column `1 - saturation * (1 - pure)`, which only needs scaling by value per row
    let columns: Vec<RgbColor> = (0..rect.width)
        .map(|column| {
            let (saturation, _) = color::map_point_to_gradient(column as f64, 0.0, width, height);
            RgbColor::new(
                1.0 - saturation * (1.0 - pure.r),
                1.0 - saturation * (1.0 - pure.g),
                1.0 - saturation * (1.0 - pure.b),
            )
        })
        .collect();

    for row in 0..rect.height {
        let (_, value) = color::map_point_to_gradient(0.0, row as f64, width, height);
        let Some(pixels) = rect_row(buffer, stride, rect, row) else {
            break;
        };
        for (pixel, column) in pixels.iter_mut().zip(&columns) {
            *pixel = RgbColor::new(value * column.r, value * column.g, value * column.b).to_pixel();
        }
    }
}

/// Horizontal rainbow, hue 0 on the left to 360 on the right
pub fn draw_hue_slider(buffer: &mut [u32], stride: usize, rect: Rect) {
    let width = pixel_extent(rect.width);
    let rainbow: Vec<u32> = (0..rect.width)
        .map(|column| {
            let hue = color::map_point_to_hue(column as f64, width);
            color::hsv_to_rgb(HsvColor::new(hue, 1.0, 1.0)).to_pixel()
        })
        .collect();

    for row in 0..rect.height {
        match rect_row(buffer, stride, rect, row) {
            Some(pixels) => pixels.copy_from_slice(&rainbow),
            None => break,
        }
    }
}

/// Thin white bar marking the selected hue on the slider
pub fn draw_slider_bar(buffer: &mut [u32], stride: usize, slider: Rect, hue: f64) {
    if slider.is_empty() {
        return;
    }

    let center = color::hue_point(hue, pixel_extent(slider.width)).round() as u32;
    // center the bar on the hue, but keep all of it on the slider
    let left = center
        .saturating_sub(SLIDER_BAR_WIDTH / 2)
        .min(slider.width.saturating_sub(SLIDER_BAR_WIDTH));
    let bar_width = SLIDER_BAR_WIDTH.min(slider.width);

    let bar = Rect::new(slider.x + left, slider.y, bar_width, slider.height);
    fill_rect(buffer, stride, bar, SLIDER_BAR_COLOR);
}

/// Ring around the picked saturation/value on the gradient. The ring is dark on bright colors and
/// light on dark ones so it stays visible.
pub fn draw_indicator(buffer: &mut [u32], stride: usize, gradient: Rect, hsv: HsvColor) {
    if gradient.is_empty() {
        return;
    }

    let (x, y) = color::gradient_point(
        hsv.saturation,
        hsv.value,
        pixel_extent(gradient.width),
        pixel_extent(gradient.height),
    );
    let center_x = gradient.x as i64 + x.round() as i64;
    let center_y = gradient.y as i64 + y.round() as i64;

    let pixel = if hsv.value > 0.5 {
        INDICATOR_DARK
    } else {
        INDICATOR_LIGHT
    };

    let outer = INDICATOR_RADIUS * INDICATOR_RADIUS;
    let inner = (INDICATOR_RADIUS - 1) * (INDICATOR_RADIUS - 1);
    for dy in -INDICATOR_RADIUS..=INDICATOR_RADIUS {
        for dx in -INDICATOR_RADIUS..=INDICATOR_RADIUS {
            let distance_squared = dx * dx + dy * dy;
            if distance_squared > inner && distance_squared <= outer {
                put_pixel(buffer, stride, gradient, center_x + dx, center_y + dy, pixel);
            }
        }
    }
}

/// write a single pixel, silently dropping anything outside of `clip`
#[inline(always)]
fn put_pixel(buffer: &mut [u32], stride: usize, clip: Rect, x: i64, y: i64, pixel: u32) {
    let inside_x = x >= clip.x as i64 && x < clip.x as i64 + clip.width as i64;
    let inside_y = y >= clip.y as i64 && y < clip.y as i64 + clip.height as i64;
    if inside_x && inside_y {
        if let Some(target) = buffer.get_mut(y as usize * stride + x as usize) {
            *target = pixel;
        }
    }
}

#[cfg(test)]
mod test_gradient {
    use super::*;
    use crate::private::util::color::Rgb8;

    const SIZE: u32 = 64;

    /// largest per-channel difference between two 0RGB pixels
    fn color_error(actual: u32, expected: u32) -> u8 {
        let actual = Rgb8::from_pixel(actual);
        let expected = Rgb8::from_pixel(expected);
        actual.r.abs_diff(expected.r)
            .max(actual.g.abs_diff(expected.g))
            .max(actual.b.abs_diff(expected.b))
    }

    #[test]
    fn optimized_matches_naive() {
        let rect = Rect::new(0, 0, SIZE, SIZE);
        let stride = SIZE as usize;

        for hue in [0.0, 17.5, 60.0, 127.0 * 360.0 / 255.0, 239.9, 300.0, 359.0, 360.0] {
            let mut expected = vec![0; (SIZE * SIZE) as usize];
            let mut actual = vec![0; (SIZE * SIZE) as usize];
            naive::draw_gradient(&mut expected, stride, rect, hue);
            draw_gradient(&mut actual, stride, rect, hue);

            for (index, (actual, expected)) in actual.iter().zip(&expected).enumerate() {
                let error = color_error(*actual, *expected);
                assert!(error <= 1, "hue {hue} differs at pixel {index}: {actual:08X} != {expected:08X}");
            }
        }
    }

    #[test]
    fn gradient_corners() {
        let rect = Rect::new(0, 0, SIZE, SIZE);
        let stride = SIZE as usize;
        let mut buffer = vec![0; (SIZE * SIZE) as usize];
        draw_gradient(&mut buffer, stride, rect, 120.0);

        let last = SIZE as usize - 1;
        assert_eq!(buffer[0], 0x00FF_FFFF, "top left should be white");
        assert_eq!(buffer[last], 0x0000_FF00, "top right should be the pure hue");
        assert_eq!(buffer[last * stride], 0, "bottom left should be black");
        assert_eq!(buffer[last * stride + last], 0, "bottom right should be black");
    }

    /// drawing a rect offset into a larger buffer must leave the rest alone
    #[test]
    fn gradient_respects_rect() {
        let stride = 10;
        let mut buffer = vec![0xDEAD; 10 * 10];
        draw_gradient(&mut buffer, stride, Rect::new(2, 3, 4, 5), 0.0);

        for y in 0..10 {
            for x in 0..10 {
                let inside = (2..6).contains(&x) && (3..8).contains(&y);
                assert_eq!(buffer[y * stride + x] != 0xDEAD, inside, "wrong coverage at ({x}, {y})");
            }
        }
    }

    #[test]
    fn oversized_rect_does_not_panic() {
        let mut buffer = vec![0; 16];
        draw_gradient(&mut buffer, 4, Rect::new(0, 0, 4, 100), 0.0);
        fill_rect(&mut buffer, 4, Rect::new(0, 2, 4, 100), 1);
        assert_eq!(buffer[15], 1);
    }
}
