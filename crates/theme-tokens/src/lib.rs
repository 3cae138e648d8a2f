//! Theme token generation
//!
//! Turns a small brand configuration (seed colors, mode, a few token
//! bases) into a complete design token set: an 11-step scale per brand
//! color, semantic color roles for both light and dark modes, and
//! typography, spacing, radius, and shadow tokens. Every generated
//! theme passes a WCAG AA contrast pass before it is returned.
//!
//! ```
//! use theme_tokens::{generate_theme, ThemeConfig, ThemeMode};
//!
//! let theme = generate_theme(&ThemeConfig::new("#3b82f6", ThemeMode::Light))?;
//! assert_eq!(theme.colors.background, "#ffffff");
//! assert_eq!(theme.colors.primary, "#3b82f6");
//! # Ok::<(), theme_tokens::ThemeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assemble;
pub mod colors;
pub mod config;
pub mod theme;
pub mod tokens;
pub mod typography;
pub mod validate;

pub use assemble::{generate_theme, generate_theme_with_report, Result, ThemeError};
pub use colors::ThemeColors;
pub use config::{
    ThemeConfig, ThemeConfigPatch, ThemeMode, DEFAULT_BASE_RADIUS, DEFAULT_BASE_SPACING,
    DEFAULT_FONT_FAMILY, DEFAULT_PRIMARY, DEFAULT_SECONDARY,
};
pub use theme::Theme;
pub use tokens::{RadiusScale, Shadow, ShadowScale, SpacingScale};
pub use typography::{TextStyle, Typography};
pub use validate::{ensure_contrast, ContrastWarning, AA_NORMAL};
