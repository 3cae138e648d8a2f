//! Color math for Huecraft
//!
//! This crate provides the stateless numeric primitives the token
//! generator is built on: hex ↔ RGB ↔ HSL conversion, WCAG relative
//! luminance and contrast ratios, and 11-step lightness scale
//! generation from a single brand seed.
//!
//! # Example
//!
//! ```rust
//! use color_core::{contrast_ratio, generate_scale};
//!
//! let scale = generate_scale("#3b82f6").unwrap();
//! assert_eq!(scale.s500, "#3b82f6");
//!
//! let ratio = contrast_ratio("#ffffff", "#111827").unwrap();
//! assert!(ratio > 4.5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod scale;

pub use color::{
    contrast_ratio, hex_to_hsl, hsl_to_hex, hsl_to_rgb, parse_hex, relative_luminance,
    rgb_to_hex, rgb_to_hsl, ColorError, HexColor, Hsl, Result,
};
pub use scale::{generate_scale, ColorScale, STEPS};
