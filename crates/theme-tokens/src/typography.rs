//! Typography tokens

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_FONT_FAMILY;

/// A named text style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (100-900)
    pub font_weight: u16,
    /// Line height as a multiplier of the font size
    pub line_height: f32,
    /// Letter spacing in pixels
    pub letter_spacing: f32,
}

impl TextStyle {
    /// Create a text style with the default line height and no tracking
    pub fn new(font_size: f32, font_weight: u16) -> Self {
        Self { font_size, font_weight, line_height: 1.5, letter_spacing: 0.0 }
    }

    /// Override the line height multiplier
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Override the letter spacing
    pub fn with_letter_spacing(mut self, letter_spacing: f32) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }

    /// Resolved line height in pixels
    pub fn line_height_px(&self) -> f32 {
        self.font_size * self.line_height
    }
}

/// The full set of text styles plus the font stack they render in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// CSS font-family stack
    pub font_family: String,
    /// Small annotations and labels
    pub caption: TextStyle,
    /// Default body copy
    pub body: TextStyle,
    /// Button and control labels
    pub button: TextStyle,
    /// Section headings
    pub heading: TextStyle,
    /// Page titles
    pub title: TextStyle,
    /// Hero and marketing text
    pub display: TextStyle,
}

impl Typography {
    /// The default style set rendered in the given font stack
    pub fn with_family(font_family: impl Into<String>) -> Self {
        Self {
            font_family: font_family.into(),
            caption: TextStyle::new(12.0, 400),
            body: TextStyle::new(16.0, 400),
            button: TextStyle::new(14.0, 500).with_letter_spacing(0.25),
            heading: TextStyle::new(20.0, 600).with_line_height(1.375),
            title: TextStyle::new(28.0, 700).with_line_height(1.25),
            display: TextStyle::new(36.0, 800).with_line_height(1.25),
        }
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self::with_family(DEFAULT_FONT_FAMILY)
    }
}
