// This file is part of simple-color-picker and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2024 Michael Ripley

//! Application internals. Public only so benchmarks can reach them.

pub mod error;
pub mod layout;
pub mod picker;
pub mod settings;
pub mod util;

/// Shown in the window title and on dialogs
pub const APPLICATION_NAME: &str = "Color Picker";
