use image::{ColorType, DynamicImage};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::transform::TransformError;

/// Pixel encoding of a target file. Labels follow the short names image
/// tools commonly print ("RGBA", "L", "P", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorMode {
    Grayscale,
    GrayscaleAlpha,
    Rgb,
    Rgba,
    Palette,
    Grayscale16,
    GrayscaleAlpha16,
    Rgb16,
    Rgba16,
}

impl ColorMode {
    pub const ALL: [ColorMode; 9] = [
        ColorMode::Grayscale,
        ColorMode::GrayscaleAlpha,
        ColorMode::Rgb,
        ColorMode::Rgba,
        ColorMode::Palette,
        ColorMode::Grayscale16,
        ColorMode::GrayscaleAlpha16,
        ColorMode::Rgb16,
        ColorMode::Rgba16,
    ];

    pub fn has_alpha(self) -> bool {
        matches!(
            self,
            ColorMode::GrayscaleAlpha
                | ColorMode::Rgba
                | ColorMode::GrayscaleAlpha16
                | ColorMode::Rgba16
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorMode::Grayscale => "L",
            ColorMode::GrayscaleAlpha => "LA",
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
            ColorMode::Palette => "P",
            ColorMode::Grayscale16 => "L;16",
            ColorMode::GrayscaleAlpha16 => "LA;16",
            ColorMode::Rgb16 => "RGB;16",
            ColorMode::Rgba16 => "RGBA;16",
        }
    }

    /// Maps a decoder color type onto a mode. Float rasters have no
    /// counterpart and are rejected.
    pub fn from_color_type(color: ColorType) -> Result<Self, TransformError> {
        match color {
            ColorType::L8 => Ok(ColorMode::Grayscale),
            ColorType::La8 => Ok(ColorMode::GrayscaleAlpha),
            ColorType::Rgb8 => Ok(ColorMode::Rgb),
            ColorType::Rgba8 => Ok(ColorMode::Rgba),
            ColorType::L16 => Ok(ColorMode::Grayscale16),
            ColorType::La16 => Ok(ColorMode::GrayscaleAlpha16),
            ColorType::Rgb16 => Ok(ColorMode::Rgb16),
            ColorType::Rgba16 => Ok(ColorMode::Rgba16),
            other => Err(TransformError::UnsupportedColorMode(format!("{:?}", other))),
        }
    }

    pub fn of_image(image: &DynamicImage) -> Result<Self, TransformError> {
        Self::from_color_type(image.color())
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColorMode {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ColorMode::ALL
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TransformError::UnsupportedColorMode(wanted.to_string()))
    }
}
