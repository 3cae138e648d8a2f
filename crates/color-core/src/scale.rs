//! 11-step lightness scale generation
//!
//! A scale anchors its seed at stop 500 and walks lightness linearly
//! toward a near-white ceiling on the light side and a near-black floor
//! on the dark side, with a small saturation taper toward both extremes
//! so the outermost stops do not wash out.

use serde::{Deserialize, Serialize};

use crate::color::{hex_to_hsl, hsl_to_hex, HexColor, Hsl, Result};

/// Scale stop names, lightest to darkest
pub const STEPS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Lightness of the lightest stop, in percent
const LIGHT_CEILING: f64 = 97.0;

/// Lightness of the darkest stop, in percent
const DARK_FLOOR: f64 = 8.0;

/// Fraction of the seed's saturation removed at the scale extremes
const SATURATION_TAPER: f64 = 0.15;

/// An 11-step color scale keyed by stop name (50 … 950)
///
/// Stop 500 always holds the seed verbatim; lightness strictly decreases
/// from `s50` to `s950`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    /// Lightest (50)
    pub s50: HexColor,
    /// Very light (100)
    pub s100: HexColor,
    /// Light (200)
    pub s200: HexColor,
    /// Medium-light (300)
    pub s300: HexColor,
    /// Slightly light (400)
    pub s400: HexColor,
    /// Seed (500)
    pub s500: HexColor,
    /// Slightly dark (600)
    pub s600: HexColor,
    /// Medium-dark (700)
    pub s700: HexColor,
    /// Dark (800)
    pub s800: HexColor,
    /// Very dark (900)
    pub s900: HexColor,
    /// Darkest (950)
    pub s950: HexColor,
}

impl ColorScale {
    /// Get a color by its numeric stop (50, 100, …, 950)
    pub fn get(&self, stop: u16) -> Option<&HexColor> {
        match stop {
            50 => Some(&self.s50),
            100 => Some(&self.s100),
            200 => Some(&self.s200),
            300 => Some(&self.s300),
            400 => Some(&self.s400),
            500 => Some(&self.s500),
            600 => Some(&self.s600),
            700 => Some(&self.s700),
            800 => Some(&self.s800),
            900 => Some(&self.s900),
            950 => Some(&self.s950),
            _ => None,
        }
    }

    /// All stops in order, lightest to darkest
    pub fn entries(&self) -> [(u16, &HexColor); 11] {
        let colors = [
            &self.s50, &self.s100, &self.s200, &self.s300, &self.s400, &self.s500,
            &self.s600, &self.s700, &self.s800, &self.s900, &self.s950,
        ];
        std::array::from_fn(|i| (STEPS[i], colors[i]))
    }
}

/// Generate an 11-step scale from a seed color
///
/// The transformation is pure and independent of theme mode: the same
/// seed always yields the same scale. The seed string is kept verbatim
/// at stop 500.
pub fn generate_scale(seed: &str) -> Result<ColorScale> {
    let hsl = hex_to_hsl(seed)?;

    // A seed lighter than the ceiling or darker than the floor widens
    // the band to its own lightness, so ordering degrades to repeated
    // stops instead of inverting.
    let ceiling = LIGHT_CEILING.max(hsl.l);
    let floor = DARK_FLOOR.min(hsl.l);

    let light = |t: f64| step_color(hsl, ceiling, t);
    let dark = |t: f64| step_color(hsl, floor, t);

    Ok(ColorScale {
        s50: light(1.0),
        s100: light(0.8),
        s200: light(0.6),
        s300: light(0.4),
        s400: light(0.2),
        s500: seed.to_string(),
        s600: dark(0.2),
        s700: dark(0.4),
        s800: dark(0.6),
        s900: dark(0.8),
        s950: dark(1.0),
    })
}

/// Interpolate lightness linearly from the seed toward `limit`, tapering
/// saturation as `t` approaches the extreme.
fn step_color(seed: Hsl, limit: f64, t: f64) -> HexColor {
    let l = seed.l + (limit - seed.l) * t;
    let s = seed.s * (1.0 - SATURATION_TAPER * t);
    hsl_to_hex(Hsl { h: seed.h, s, l: l.clamp(0.0, 100.0) })
}
