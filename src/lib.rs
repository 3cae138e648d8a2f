//! Huecraft
//!
//! Brand-seeded design token generation. Feed a couple of seed colors
//! and a mode into [`generate_theme`] to get a complete, contrast-safe
//! token set, or stand up a [`ThemeStore`] to manage, persist, and
//! broadcast the active theme for a running application.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use color_core::{contrast_ratio, generate_scale, relative_luminance, ColorScale, Hsl};
pub use theme_state::{MemoryBinding, StateError, SubscriptionId, ThemeBinding, ThemeStore};
pub use theme_tokens::{
    generate_theme, generate_theme_with_report, ContrastWarning, Theme, ThemeColors,
    ThemeConfig, ThemeConfigPatch, ThemeError, ThemeMode, AA_NORMAL,
};

pub use storage::{KvConfig, KvStore};
