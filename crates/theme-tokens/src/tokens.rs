//! Spacing, radius, and shadow tokens
//!
//! Spacing and radius derive every step from a single base unit so an
//! override of the base rescales the whole system consistently.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_BASE_RADIUS, DEFAULT_BASE_SPACING};

/// Spacing scale derived from a base unit, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingScale {
    /// Extra small (0.5x base)
    pub xs: f32,
    /// Small (1x base)
    pub sm: f32,
    /// Medium (2x base)
    pub md: f32,
    /// Large (4x base)
    pub lg: f32,
    /// Extra large (6x base)
    pub xl: f32,
    /// Double extra large (8x base)
    pub xxl: f32,
}

impl SpacingScale {
    /// Derive the full scale from a base unit
    pub fn from_base(base: f32) -> Self {
        Self {
            xs: base * 0.5,
            sm: base,
            md: base * 2.0,
            lg: base * 4.0,
            xl: base * 6.0,
            xxl: base * 8.0,
        }
    }
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self::from_base(DEFAULT_BASE_SPACING)
    }
}

/// Border radius scale derived from a base, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusScale {
    /// Square corners
    pub none: f32,
    /// Subtle rounding (0.5x base)
    pub sm: f32,
    /// Standard rounding (1x base)
    pub md: f32,
    /// Pronounced rounding (1.5x base)
    pub lg: f32,
    /// Fully rounded (pill shape)
    pub full: f32,
}

impl RadiusScale {
    /// Derive the full scale from a base radius
    pub fn from_base(base: f32) -> Self {
        Self { none: 0.0, sm: base * 0.5, md: base, lg: base * 1.5, full: 9999.0 }
    }
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self::from_base(DEFAULT_BASE_RADIUS)
    }
}

/// A single drop shadow definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    /// Horizontal offset in pixels
    pub offset_x: f32,
    /// Vertical offset in pixels
    pub offset_y: f32,
    /// Blur radius in pixels
    pub blur: f32,
    /// Spread radius in pixels
    pub spread: f32,
    /// Shadow color, as a CSS color value
    pub color: String,
}

impl Shadow {
    /// Create a shadow definition
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: &str) -> Self {
        Self { offset_x, offset_y, blur, spread, color: color.to_string() }
    }
}

/// The three elevation levels a theme provides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowScale {
    /// Low elevation
    pub sm: Shadow,
    /// Medium elevation
    pub md: Shadow,
    /// High elevation
    pub lg: Shadow,
}

impl Default for ShadowScale {
    fn default() -> Self {
        Self {
            sm: Shadow::new(0.0, 1.0, 2.0, 0.0, "rgba(0, 0, 0, 0.05)"),
            md: Shadow::new(0.0, 4.0, 6.0, -1.0, "rgba(0, 0, 0, 0.1)"),
            lg: Shadow::new(0.0, 10.0, 15.0, -3.0, "rgba(0, 0, 0, 0.1)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_default_base() {
        let spacing = SpacingScale::default();
        assert_eq!(spacing.xs, 2.0);
        assert_eq!(spacing.sm, 4.0);
        assert_eq!(spacing.md, 8.0);
        assert_eq!(spacing.lg, 16.0);
        assert_eq!(spacing.xl, 24.0);
        assert_eq!(spacing.xxl, 32.0);
    }

    #[test]
    fn test_spacing_scales_with_base() {
        let spacing = SpacingScale::from_base(8.0);
        assert_eq!(spacing.sm, 8.0);
        assert_eq!(spacing.xxl, 64.0);
    }

    #[test]
    fn test_radius_default_base() {
        let radius = RadiusScale::default();
        assert_eq!(radius.none, 0.0);
        assert_eq!(radius.sm, 4.0);
        assert_eq!(radius.md, 8.0);
        assert_eq!(radius.lg, 12.0);
        assert_eq!(radius.full, 9999.0);
    }

    #[test]
    fn test_radius_full_ignores_base() {
        assert_eq!(RadiusScale::from_base(2.0).full, 9999.0);
        assert_eq!(RadiusScale::from_base(40.0).full, 9999.0);
    }

    #[test]
    fn test_shadow_defaults_increase_blur() {
        let shadows = ShadowScale::default();
        assert!(shadows.sm.blur < shadows.md.blur);
        assert!(shadows.md.blur < shadows.lg.blur);
    }
}
