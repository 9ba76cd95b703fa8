// This file is part of simple-color-picker and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2024 Michael Ripley

//! Numeric utilities

use std::time::Duration;

/// How long to wait between ticks to hit the requested frame rate. Rounds the interval up, so we
/// never tick faster than asked. An fps of 0 is treated as 1.
pub fn fps_to_tick_interval(fps: u32) -> Duration {
    let millis = 1000u32.div_ceil(fps.max(1));
    Duration::from_millis(millis as u64)
}
