// This file is part of simple-color-picker and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2024 Michael Ripley

//! Various utilities

pub mod color;
pub mod custom_serializer;
pub mod dialog;
pub mod image;
pub mod numeric;
