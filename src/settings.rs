// This file is part of picker-kernel and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2023 Michael Ripley

use std::{fs, io};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use picker_kernel::color::{HsvColor, HsvComponent};
use picker_kernel::gradient::pin;

use crate::CONFIG_PATH;

const DEFAULT_BAR_WIDTH: u32 = 256;
const DEFAULT_BAR_HEIGHT: u32 = 24;
const DEFAULT_MARKER_RADIUS: f32 = 3.0;

// needed for serde, as it can't read constants directly
const fn default_base_color() -> HsvColor {
    HsvColor::new(0.0, 1.0, 1.0)
}

const fn default_bar_component() -> HsvComponent {
    HsvComponent::Hue
}

const fn default_bar_width() -> u32 {
    DEFAULT_BAR_WIDTH
}

const fn default_bar_height() -> u32 {
    DEFAULT_BAR_HEIGHT
}

const fn default_marker_color() -> u32 {
    0xB2FFFFFF // 70% alpha white
}

const fn default_marker_radius() -> f32 {
    DEFAULT_MARKER_RADIUS
}

/// What the preview renders. Every field has a default, so a partial file is fine.
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct Settings {
    /// which component the bar sweeps
    #[serde(default = "default_bar_component")]
    pub bar_component: HsvComponent,
    #[serde(default = "default_bar_width")]
    pub bar_width: u32,
    #[serde(default = "default_bar_height")]
    pub bar_height: u32,
    #[serde(with = "picker_kernel::util::custom_serializer::argb_color", default = "default_marker_color")]
    pub marker_color: u32,
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f32,
    /// where the PNGs go. Defaults to the working directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// the selected color. Its hue picks the saturation/brightness square. Kept last, as it is
    /// written out as a TOML table.
    #[serde(default = "default_base_color")]
    pub base_color: HsvColor,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_color: default_base_color(),
            bar_component: default_bar_component(),
            bar_width: DEFAULT_BAR_WIDTH,
            bar_height: DEFAULT_BAR_HEIGHT,
            marker_color: default_marker_color(),
            marker_radius: DEFAULT_MARKER_RADIUS,
            output_dir: None,
        }
    }
}

impl Settings {
    /// The configured color with every component pinned into range, as a UI would do with touch
    /// input before handing it to the kernel.
    pub fn pinned_base_color(&self) -> HsvColor {
        let HsvColor { hue, saturation, value } = self.base_color;
        HsvColor::new(pin(0.0, hue, 360.0), pin(0.0, saturation, 1.0), pin(0.0, value, 1.0))
    }

    pub fn output_dir(&self) -> &Path {
        // make sure that if the user manually put an empty string in their config we don't explode
        self.output_dir
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    pub fn load() -> io::Result<Settings> {
        let path = config_path()?;
        fs::read_to_string(path).and_then(|string| Self::from_toml(&string))
    }

    pub fn save(&self) -> io::Result<()> {
        let path = config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)
    }

    fn from_toml(string: &str) -> io::Result<Settings> {
        toml::from_str::<Settings>(string).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn to_toml(&self) -> io::Result<String> {
        toml::to_string(self).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

fn config_path() -> io::Result<&'static Path> {
    CONFIG_PATH.as_deref()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory to keep settings in"))
}

#[cfg(test)]
mod test_settings {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn round_trip() {
        let settings = Settings {
            base_color: HsvColor::new(200.0, 0.5, 0.25),
            bar_component: HsvComponent::Saturation,
            bar_width: 100,
            bar_height: 10,
            marker_color: 0x80FF8000,
            marker_radius: 1.5,
            output_dir: Some(PathBuf::from("previews")),
        };
        let text = settings.to_toml().unwrap();
        assert!(text.contains("marker_color = \"#80FF8000\""), "{text}");
        assert!(text.contains("bar_component = \"saturation\""), "{text}");
        assert_eq!(Settings::from_toml(&text).unwrap(), settings);
    }

    #[test]
    fn partial_file() {
        let settings = Settings::from_toml("bar_component = \"brightness\"\nmarker_color = \"00FF00\"\n").unwrap();
        assert_eq!(settings.bar_component, HsvComponent::Brightness);
        assert_eq!(settings.marker_color, 0xFF00FF00);
        assert_eq!(settings.bar_width, DEFAULT_BAR_WIDTH);
    }

    #[test]
    fn bad_file_is_invalid_data() {
        let error = Settings::from_toml("bar_component = \"alpha\"").unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn base_color_is_pinned() {
        let settings = Settings {
            base_color: HsvColor::new(400.0, -1.0, 1.5),
            ..Settings::default()
        };
        assert_eq!(settings.pinned_base_color(), HsvColor::new(360.0, 0.0, 1.0));
    }

    #[test]
    fn empty_output_dir_is_working_directory() {
        let settings = Settings {
            output_dir: Some(PathBuf::new()),
            ..Settings::default()
        };
        assert_eq!(settings.output_dir(), Path::new("."));
    }
}
