// This file is part of simple-color-picker and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2024 Michael Ripley

use std::{fs, io};
use std::path::PathBuf;
use std::time::Duration;

use debug_print::debug_println;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use winit::dpi::PhysicalSize;

use crate::private::layout::Layout;
use crate::private::util::color::{self, HsvColor, Rgb8};
use crate::private::util::numeric::fps_to_tick_interval;

const DEFAULT_WIDTH: u32 = 512;
const DEFAULT_HEIGHT: u32 = 600;
/// largest gradient side we'll allocate a framebuffer for
const MAX_WIDTH: u32 = 4096;
/// the strip under the gradient may be at most as tall as the gradient is wide
const MAX_HEIGHT: u32 = MAX_WIDTH * 2;
/// 127 on the old 0-255 hue slider
const DEFAULT_HUE: f64 = 127.0 * 360.0 / 255.0;
const DEFAULT_COLOR: Rgb8 = Rgb8::new(0, 0, 0);
const DEFAULT_FPS: u32 = 60;

lazy_static! {
    pub static ref CONFIG_PATH: PathBuf = directories::ProjectDirs::from("dev.zkxs", "", "simple-color-picker")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        // no home directory to speak of, so fall back to the working directory
        .unwrap_or_else(|| PathBuf::from("simple-color-picker.toml"));
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
#[serde(default)]
pub struct PersistedSettings {
    pub window_width: u32,
    pub window_height: u32,
    /// hue in degrees. Stored on its own because it can't be recovered from a gray `color`.
    pub hue: f64,
    /// saturation as a `[0, 1]` fraction. Stored on its own because it can't be recovered from a
    /// black `color`.
    pub saturation: f64,
    /// the last picked color
    #[serde(with = "crate::private::util::custom_serializer::rgb_hex")]
    pub color: Rgb8,
    pub fps: u32,
}

impl PersistedSettings {
    /// Fix anything a hand-edited config could have broken, then build the runtime settings
    fn load(mut self) -> Settings {
        if self.window_width == 0 {
            self.window_width = DEFAULT_WIDTH;
        }
        self.window_width = self.window_width.min(MAX_WIDTH);

        // the slider and swatch need some room under the gradient
        if self.window_height <= self.window_width {
            self.window_height = self.window_width.saturating_add(DEFAULT_HEIGHT - DEFAULT_WIDTH);
        }
        self.window_height = self.window_height.min(MAX_HEIGHT);

        if !self.hue.is_finite() {
            self.hue = DEFAULT_HUE;
        }
        self.hue = self.hue.clamp(0.0, 360.0);

        if !self.saturation.is_finite() {
            self.saturation = 0.0;
        }
        self.saturation = self.saturation.clamp(0.0, 1.0);

        if self.fps == 0 {
            self.fps = DEFAULT_FPS;
        }

        Settings {
            layout: Layout::new(self.window_width, self.window_height),
            tick_interval: fps_to_tick_interval(self.fps),
            persisted: self,
        }
    }
}

impl Default for PersistedSettings {
    fn default() -> Self {
        PersistedSettings {
            window_width: DEFAULT_WIDTH,
            window_height: DEFAULT_HEIGHT,
            hue: DEFAULT_HUE,
            saturation: 0.0,
            color: DEFAULT_COLOR,
            fps: DEFAULT_FPS,
        }
    }
}

pub struct Settings {
    pub persisted: PersistedSettings,
    pub layout: Layout,
    pub tick_interval: Duration,
}

impl Settings {
    pub fn size(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(self.layout.width, self.layout.height)
    }

    /// The color to start the picker on. The saved color decides everything it can: a gray color
    /// has no hue, and black has no saturation either, so those come from the separately saved
    /// values.
    pub fn initial_color(&self) -> HsvColor {
        let from_rgb = color::rgb_to_hsv(self.persisted.color.into());
        let mut hsv = from_rgb;
        if from_rgb.saturation == 0.0 {
            hsv.hue = self.persisted.hue;
        }
        if from_rgb.value == 0.0 {
            hsv.saturation = self.persisted.saturation;
        }
        hsv
    }

    /// Remember a picked color for next launch
    pub fn remember(&mut self, picked: HsvColor) {
        self.persisted.hue = picked.hue.clamp(0.0, 360.0);
        self.persisted.saturation = picked.saturation.clamp(0.0, 1.0);
        self.persisted.color = color::hsv_to_rgb(picked).into();
    }

    pub fn load() -> io::Result<Settings> {
        if let Some(parent) = CONFIG_PATH.parent() {
            fs::create_dir_all(parent)?;
        }
        let settings = fs::read_to_string(CONFIG_PATH.as_path()).and_then(|string| Self::from_toml(&string))?;
        debug_println!("loaded settings from {}", CONFIG_PATH.display());
        Ok(settings)
    }

    pub fn from_toml(string: &str) -> io::Result<Settings> {
        toml::from_str::<PersistedSettings>(string)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            .map(|settings| settings.load())
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(&self.persisted)
    }

    pub fn save(&self) -> Result<(), String> {
        let serialized_config = self.to_toml().map_err(|e| format!("{e}"))?;
        fs::write(CONFIG_PATH.as_path(), serialized_config).map_err(|e| format!("{e:?}"))
    }
}

impl Default for Settings {
    fn default() -> Self {
        PersistedSettings::default().load()
    }
}
