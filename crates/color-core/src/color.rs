//! Color-space conversions and contrast math
//!
//! All functions here are pure. Hex parsing is strict: a seed must match
//! `#rrggbb` exactly, anything else is an [`ColorError::InvalidFormat`].
//! Luminance and contrast use the gamma-corrected sRGB formulas from
//! WCAG 2.x.

use thiserror::Error;

/// A color represented as a `#rrggbb` hex string (e.g., "#3b82f6")
pub type HexColor = String;

/// Color math error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input did not match the `#rrggbb` format
    #[error("invalid color format: {0:?}")]
    InvalidFormat(String),
}

/// Result type for color operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// A color in HSL space
///
/// Hue is in degrees (0-360), saturation and lightness in percent (0-100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f64,
    /// Saturation in percent
    pub s: f64,
    /// Lightness in percent
    pub l: f64,
}

/// Parse a `#rrggbb` hex string into RGB components
pub fn parse_hex(hex: &str) -> Result<(u8, u8, u8)> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| ColorError::InvalidFormat(hex.to_string()))?;

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidFormat(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ColorError::InvalidFormat(hex.to_string()))
    };

    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Format RGB components as a lowercase `#rrggbb` string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> HexColor {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Convert RGB components to HSL
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        // Achromatic
        return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    let h = if (max - r).abs() < f64::EPSILON {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl { h: h * 60.0, s: s * 100.0, l: l * 100.0 }
}

/// Convert an HSL color to RGB components
pub fn hsl_to_rgb(hsl: Hsl) -> (u8, u8, u8) {
    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let s = (hsl.s / 100.0).clamp(0.0, 1.0);
    let l = (hsl.l / 100.0).clamp(0.0, 1.0);

    if s < f64::EPSILON {
        let v = (l * 255.0).round() as u8;
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let channel = |t: f64| {
        let t = t.rem_euclid(1.0);
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        (v * 255.0).round() as u8
    };

    (channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
}

/// Parse a hex string and convert it to HSL
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    let (r, g, b) = parse_hex(hex)?;
    Ok(rgb_to_hsl(r, g, b))
}

/// Convert an HSL color to a lowercase hex string
pub fn hsl_to_hex(hsl: Hsl) -> HexColor {
    let (r, g, b) = hsl_to_rgb(hsl);
    rgb_to_hex(r, g, b)
}

fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance of a color (0.0 for black, 1.0 for white)
pub fn relative_luminance(hex: &str) -> Result<f64> {
    let (r, g, b) = parse_hex(hex)?;
    Ok(0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b))
}

/// WCAG contrast ratio between two colors
///
/// Computed as `(L1 + 0.05) / (L2 + 0.05)` where `L1 >= L2`, so the
/// result is symmetric in its arguments and ranges from 1.0 to 21.0.
pub fn contrast_ratio(a: &str, b: &str) -> Result<f64> {
    let la = relative_luminance(a)?;
    let lb = relative_luminance(b)?;
    let lighter = la.max(lb);
    let darker = la.min(lb);
    Ok((lighter + 0.05) / (darker + 0.05))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_valid() {
        assert_eq!(parse_hex("#ffffff").unwrap(), (255, 255, 255));
        assert_eq!(parse_hex("#000000").unwrap(), (0, 0, 0));
        assert_eq!(parse_hex("#3b82f6").unwrap(), (59, 130, 246));
        assert_eq!(parse_hex("#3B82F6").unwrap(), (59, 130, 246));
    }

    #[test]
    fn test_parse_hex_invalid() {
        for input in ["", "#fff", "#ffffffff", "3b82f6", "#12345g", "not-a-color", "#12 456"] {
            assert_eq!(
                parse_hex(input),
                Err(ColorError::InvalidFormat(input.to_string())),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_rgb_to_hex_lowercase() {
        assert_eq!(rgb_to_hex(255, 255, 255), "#ffffff");
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(59, 130, 246), "#3b82f6");
    }

    #[test]
    fn test_rgb_to_hsl_known_values() {
        let red = rgb_to_hsl(255, 0, 0);
        assert!((red.h - 0.0).abs() < 0.01);
        assert!((red.s - 100.0).abs() < 0.01);
        assert!((red.l - 50.0).abs() < 0.01);

        let white = rgb_to_hsl(255, 255, 255);
        assert!((white.l - 100.0).abs() < 0.01);
        assert!((white.s - 0.0).abs() < 0.01);

        let blue = rgb_to_hsl(59, 130, 246);
        assert!((blue.h - 217.2).abs() < 1.0);
        assert!(blue.s > 90.0);
        assert!((blue.l - 59.8).abs() < 1.0);
    }

    #[test]
    fn test_hsl_round_trip() {
        for hex in ["#3b82f6", "#ef4444", "#16a34a", "#9d4edd", "#64748b", "#ffffff", "#000000"] {
            let hsl = hex_to_hsl(hex).unwrap();
            assert_eq!(hsl_to_hex(hsl), hex, "round trip failed for {hex}");
        }
    }

    #[test]
    fn test_hsl_to_rgb_achromatic() {
        assert_eq!(hsl_to_rgb(Hsl { h: 123.0, s: 0.0, l: 50.0 }), (128, 128, 128));
        assert_eq!(hsl_to_rgb(Hsl { h: 0.0, s: 0.0, l: 100.0 }), (255, 255, 255));
    }

    #[test]
    fn test_relative_luminance_extremes() {
        assert!((relative_luminance("#ffffff").unwrap() - 1.0).abs() < 1e-9);
        assert!(relative_luminance("#000000").unwrap().abs() < 1e-9);
    }

    #[test]
    fn test_contrast_ratio_extremes() {
        let max = contrast_ratio("#ffffff", "#000000").unwrap();
        assert!((max - 21.0).abs() < 0.01);

        let min = contrast_ratio("#808080", "#808080").unwrap();
        assert!((min - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_ratio_symmetric() {
        let a = contrast_ratio("#3b82f6", "#ffffff").unwrap();
        let b = contrast_ratio("#ffffff", "#3b82f6").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_contrast_ratio_rejects_invalid() {
        assert!(contrast_ratio("#ffffff", "bogus").is_err());
        assert!(contrast_ratio("bogus", "#ffffff").is_err());
    }
}
