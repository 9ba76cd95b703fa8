// This file is part of simple-color-picker and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2024 Michael Ripley

//! The picked color and whatever the mouse is currently doing to it

use std::mem;

use crate::private::layout::{Layout, Region};
use crate::private::util::color::{self, HsvColor, Rgb8, RgbColor};

/// What the held mouse button is currently dragging
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Interaction {
    #[default]
    None,
    Gradient,
    Slider,
}

pub struct PickerState {
    color: HsvColor,
    interaction: Interaction,
    /// last known pointer position in window coordinates. `None` until the pointer first moves,
    /// since the window can open under a cursor we haven't been told about.
    cursor: Option<(f64, f64)>,
    /// set whenever the color changes, cleared by [`PickerState::take_dirty`]
    dirty: bool,
}

impl PickerState {
    /// starts dirty so the first frame gets drawn
    pub fn new(color: HsvColor) -> Self {
        PickerState {
            color,
            interaction: Interaction::None,
            cursor: None,
            dirty: true,
        }
    }

    pub fn color(&self) -> HsvColor {
        self.color
    }

    pub fn rgb(&self) -> RgbColor {
        color::hsv_to_rgb(self.color)
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Mouse button went down. Starts dragging whatever region was hit and applies it right away.
    /// Returns `true` if the color changed.
    pub fn press(&mut self, x: f64, y: f64, layout: &Layout) -> bool {
        self.interaction = match layout.hit(x, y) {
            Some(Region::Gradient) => Interaction::Gradient,
            Some(Region::Slider) => Interaction::Slider,
            None => return false,
        };
        self.drag(x, y, layout)
    }

    /// Pointer moved: remember where it is and keep dragging if a button is held.
    /// Returns `true` if the color changed.
    pub fn cursor_moved(&mut self, x: f64, y: f64, layout: &Layout) -> bool {
        self.cursor = Some((x, y));
        self.drag(x, y, layout)
    }

    /// Mouse button went down wherever the pointer last was. Ignored if the pointer position
    /// isn't known yet. Returns `true` if the color changed.
    pub fn button_pressed(&mut self, layout: &Layout) -> bool {
        match self.cursor {
            Some((x, y)) => self.press(x, y, layout),
            None => false,
        }
    }

    /// Mouse moved. Coordinates outside the dragged region clamp onto its edge.
    /// Returns `true` if the color changed.
    pub fn drag(&mut self, x: f64, y: f64, layout: &Layout) -> bool {
        let previous = self.color;

        match self.interaction {
            Interaction::None => return false,
            Interaction::Gradient => {
                let (saturation, value) = layout.gradient_color(x, y);
                self.color.saturation = saturation;
                self.color.value = value;
            }
            Interaction::Slider => {
                self.color.hue = layout.slider_hue(x);
            }
        }

        let changed = self.color != previous;
        self.dirty |= changed;
        changed
    }

    /// Mouse button came back up
    pub fn release(&mut self) {
        self.interaction = Interaction::None;
    }

    /// force the next frame to redraw even though the color didn't change
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// `true` if anything changed since the last call
    pub fn take_dirty(&mut self) -> bool {
        mem::take(&mut self.dirty)
    }

    /// e.g. `R: 255 G: 128 B: 0`
    pub fn rgb_label(&self) -> String {
        let Rgb8 { r, g, b } = self.rgb().into();
        format!("R: {r} G: {g} B: {b}")
    }

    /// e.g. `H: 30 S: 100% V: 100%`
    pub fn hsv_label(&self) -> String {
        // the slider's right end is 360, which reads better as 0
        let hue = color::normalize_hue(self.color.hue).round() as u32 % 360;
        let saturation = (self.color.saturation * 100.0).round() as u32;
        let value = (self.color.value * 100.0).round() as u32;
        format!("H: {hue} S: {saturation}% V: {value}%")
    }
}

#[cfg(test)]
mod test_picker {
    use super::*;

    fn layout() -> Layout {
        Layout::new(512, 600)
    }

    #[test]
    fn starts_dirty() {
        let mut state = PickerState::new(HsvColor::default());
        assert!(state.take_dirty());
        assert!(!state.take_dirty());
    }

    #[test]
    fn gradient_press_sets_saturation_and_value() {
        let mut state = PickerState::new(HsvColor::new(120.0, 0.0, 0.0));
        state.take_dirty();

        assert!(state.press(511.0, 0.0, &layout()));
        assert_eq!(state.interaction(), Interaction::Gradient);
        assert_eq!(state.color(), HsvColor::new(120.0, 1.0, 1.0));
        assert!(state.take_dirty());
    }

    #[test]
    fn slider_press_sets_hue_only() {
        let mut state = PickerState::new(HsvColor::new(0.0, 0.5, 0.5));
        assert!(state.press(423.0, 550.0, &layout()));
        assert_eq!(state.interaction(), Interaction::Slider);
        assert_eq!(state.color(), HsvColor::new(360.0, 0.5, 0.5));
    }

    #[test]
    fn press_outside_regions_does_nothing() {
        let mut state = PickerState::new(HsvColor::new(10.0, 0.5, 0.5));
        state.take_dirty();

        assert!(!state.press(500.0, 550.0, &layout()), "swatch press should be ignored");
        assert_eq!(state.interaction(), Interaction::None);
        assert!(!state.take_dirty());
    }

    #[test]
    fn drag_without_press_does_nothing() {
        let mut state = PickerState::new(HsvColor::new(10.0, 0.5, 0.5));
        assert!(!state.drag(0.0, 0.0, &layout()));
        assert_eq!(state.color(), HsvColor::new(10.0, 0.5, 0.5));
    }

    /// dragging off the gradient keeps editing it and clamps, rather than jumping to the slider
    #[test]
    fn gradient_drag_clamps_outside_window() {
        let mut state = PickerState::new(HsvColor::new(200.0, 0.5, 0.5));
        state.press(100.0, 100.0, &layout());
        state.drag(-300.0, 580.0, &layout());
        assert_eq!(state.interaction(), Interaction::Gradient);
        assert_eq!(state.color(), HsvColor::new(200.0, 0.0, 0.0));
    }

    #[test]
    fn slider_drag_clamps_outside_window() {
        let mut state = PickerState::new(HsvColor::new(200.0, 0.5, 0.5));
        state.press(100.0, 550.0, &layout());
        state.drag(-10.0, 0.0, &layout());
        assert_eq!(state.color().hue, 0.0);
        state.drag(10_000.0, 0.0, &layout());
        assert_eq!(state.color().hue, 360.0);
    }

    #[test]
    fn press_before_cursor_known_is_ignored() {
        let mut state = PickerState::new(HsvColor::new(200.0, 0.5, 0.5));
        state.take_dirty();

        assert!(!state.button_pressed(&layout()));
        assert_eq!(state.interaction(), Interaction::None);
        assert_eq!(state.color(), HsvColor::new(200.0, 0.5, 0.5));
        assert!(!state.take_dirty());
    }

    #[test]
    fn press_uses_last_cursor_position() {
        let mut state = PickerState::new(HsvColor::new(200.0, 0.0, 0.0));
        assert!(!state.cursor_moved(511.0, 0.0, &layout()), "moving without a button held changes nothing");
        assert!(state.button_pressed(&layout()));
        assert_eq!(state.interaction(), Interaction::Gradient);
        assert_eq!(state.color(), HsvColor::new(200.0, 1.0, 1.0));

        state.cursor_moved(0.0, 511.0, &layout());
        assert_eq!(state.color(), HsvColor::new(200.0, 0.0, 0.0));
    }

    #[test]
    fn release_ends_drag() {
        let mut state = PickerState::new(HsvColor::new(200.0, 0.5, 0.5));
        state.press(100.0, 100.0, &layout());
        state.release();
        assert_eq!(state.interaction(), Interaction::None);
        assert!(!state.drag(0.0, 0.0, &layout()));
    }

    #[test]
    fn unchanged_drag_is_not_dirty() {
        let mut state = PickerState::new(HsvColor::default());
        state.press(0.0, 0.0, &layout());
        state.take_dirty();
        assert!(!state.drag(0.0, 0.0, &layout()));
        assert!(!state.take_dirty());
    }

    #[test]
    fn labels() {
        let state = PickerState::new(HsvColor::new(30.0, 1.0, 1.0));
        assert_eq!(state.rgb_label(), "R: 255 G: 128 B: 0");
        assert_eq!(state.hsv_label(), "H: 30 S: 100% V: 100%");
    }

    #[test]
    fn label_for_full_turn_hue() {
        let state = PickerState::new(HsvColor::new(360.0, 0.5, 0.25));
        assert_eq!(state.hsv_label(), "H: 0 S: 50% V: 25%");

        let state = PickerState::new(HsvColor::new(359.7, 0.5, 0.25));
        assert_eq!(state.hsv_label(), "H: 0 S: 50% V: 25%");
    }

    #[test]
    fn gray_labels() {
        let state = PickerState::new(HsvColor::new(0.0, 0.0, 0.5));
        assert_eq!(state.rgb_label(), "R: 128 G: 128 B: 128");
        assert_eq!(state.hsv_label(), "H: 0 S: 0% V: 50%");
    }
}
