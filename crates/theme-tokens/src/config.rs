//! Theme configuration, the single persisted source of truth
//!
//! A [`ThemeConfig`] is what callers create and what gets written to
//! storage. The derived [`crate::Theme`] is regenerated from it on every
//! change and is never itself persisted. Older stored records missing
//! optional fields deserialize cleanly: every field carries a serde
//! default.

use color_core::HexColor;
use serde::{Deserialize, Serialize};

/// Default primary brand seed (blue)
pub const DEFAULT_PRIMARY: &str = "#3b82f6";

/// Fallback seed used when no secondary color is supplied (slate)
pub const DEFAULT_SECONDARY: &str = "#64748b";

/// Default font stack
pub const DEFAULT_FONT_FAMILY: &str = "Inter, system-ui, sans-serif";

/// Default spacing base unit in pixels
pub const DEFAULT_BASE_SPACING: f32 = 4.0;

/// Default border radius base in pixels
pub const DEFAULT_BASE_RADIUS: f32 = 8.0;

/// Light or dark rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Bright theme with white background
    #[default]
    Light,
    /// Dark theme with near-black background
    Dark,
}

impl ThemeMode {
    /// The opposite mode; applying this twice returns the original mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Check if this is the dark mode
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// The lowercase mode name
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(format!("Unknown mode: {}", s)),
        }
    }
}

/// Theme configuration
///
/// Only `primary_color` and `mode` are meaningful on their own; absent
/// optional colors fall back to derived or documented defaults during
/// assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Primary brand seed color
    #[serde(default = "default_primary")]
    pub primary_color: HexColor,

    /// Secondary brand seed; defaults to [`DEFAULT_SECONDARY`] when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<HexColor>,

    /// Accent brand seed; reuses the primary scale when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<HexColor>,

    /// Light or dark mode
    #[serde(default)]
    pub mode: ThemeMode,

    /// Font stack override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Spacing base unit override, in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_spacing: Option<f32>,

    /// Border radius base override, in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_radius: Option<f32>,
}

fn default_primary() -> HexColor {
    DEFAULT_PRIMARY.to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary_color: default_primary(),
            secondary_color: None,
            accent_color: None,
            mode: ThemeMode::default(),
            font_family: None,
            base_spacing: None,
            base_radius: None,
        }
    }
}

impl ThemeConfig {
    /// Create a configuration from a primary seed and mode
    pub fn new(primary_color: impl Into<HexColor>, mode: ThemeMode) -> Self {
        Self { primary_color: primary_color.into(), mode, ..Default::default() }
    }

    /// A copy with only the mode flipped; its own inverse
    pub fn toggled(&self) -> Self {
        Self { mode: self.mode.toggled(), ..self.clone() }
    }

    /// Merge a partial change into this configuration
    pub fn apply(&mut self, patch: ThemeConfigPatch) {
        if let Some(primary) = patch.primary_color {
            self.primary_color = primary;
        }
        if let Some(secondary) = patch.secondary_color {
            self.secondary_color = Some(secondary);
        }
        if let Some(accent) = patch.accent_color {
            self.accent_color = Some(accent);
        }
        if let Some(mode) = patch.mode {
            self.mode = mode;
        }
        if let Some(family) = patch.font_family {
            self.font_family = Some(family);
        }
        if let Some(spacing) = patch.base_spacing {
            self.base_spacing = Some(spacing);
        }
        if let Some(radius) = patch.base_radius {
            self.base_radius = Some(radius);
        }
    }
}

/// A partial change to a [`ThemeConfig`]
///
/// Fields left as `None` leave the corresponding config field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfigPatch {
    /// New primary seed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<HexColor>,
    /// New secondary seed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<HexColor>,
    /// New accent seed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<HexColor>,
    /// New mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ThemeMode>,
    /// New font stack
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// New spacing base
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_spacing: Option<f32>,
    /// New radius base
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_radius: Option<f32>,
}

impl ThemeConfigPatch {
    /// Set the primary seed
    pub fn primary_color(mut self, color: impl Into<HexColor>) -> Self {
        self.primary_color = Some(color.into());
        self
    }

    /// Set the secondary seed
    pub fn secondary_color(mut self, color: impl Into<HexColor>) -> Self {
        self.secondary_color = Some(color.into());
        self
    }

    /// Set the accent seed
    pub fn accent_color(mut self, color: impl Into<HexColor>) -> Self {
        self.accent_color = Some(color.into());
        self
    }

    /// Set the mode
    pub fn mode(mut self, mode: ThemeMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the font stack
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set the spacing base
    pub fn base_spacing(mut self, spacing: f32) -> Self {
        self.base_spacing = Some(spacing);
        self
    }

    /// Set the radius base
    pub fn base_radius(mut self, radius: f32) -> Self {
        self.base_radius = Some(radius);
        self
    }
}
