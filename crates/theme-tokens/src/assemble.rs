//! Theme assembly
//!
//! [`generate_theme`] is the single entry point turning a
//! [`ThemeConfig`] into a complete [`Theme`]. Assembly is deterministic
//! and all-or-nothing: an invalid seed fails before any output exists,
//! so callers never observe a partially built theme.

use color_core::{contrast_ratio, generate_scale, ColorError, HexColor};
use thiserror::Error;
use tracing::warn;

use crate::colors::{ModeTable, ThemeColors};
use crate::config::{ThemeConfig, DEFAULT_SECONDARY};
use crate::theme::Theme;
use crate::tokens::{RadiusScale, ShadowScale, SpacingScale};
use crate::typography::Typography;
use crate::validate::{ensure_contrast, ContrastWarning};

/// Theme assembly error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// A seed color failed to parse
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Result type for theme assembly
pub type Result<T> = std::result::Result<T, ThemeError>;

/// Foregrounds considered for text placed on brand and state colors
///
/// Near-black is preferred over pure black here to match the default
/// light-mode text color; the accessibility pass still falls back to the
/// pure extremes when neither candidate suffices.
const FOREGROUND_CANDIDATES: [&str; 2] = ["#ffffff", "#111827"];

/// Generate a complete theme from a configuration
///
/// Accessibility warnings are logged rather than returned; use
/// [`generate_theme_with_report`] to inspect them programmatically.
pub fn generate_theme(config: &ThemeConfig) -> Result<Theme> {
    let (theme, warnings) = generate_theme_with_report(config)?;
    for warning in &warnings {
        warn!(theme = %theme.name, "{warning}");
    }
    Ok(theme)
}

/// Generate a theme and report any contrast pairings that stayed below
/// the AA threshold after correction
pub fn generate_theme_with_report(
    config: &ThemeConfig,
) -> Result<(Theme, Vec<ContrastWarning>)> {
    let primary_seed = config.primary_color.clone();
    let secondary_seed = config
        .secondary_color
        .clone()
        .unwrap_or_else(|| DEFAULT_SECONDARY.to_string());
    let accent_seed = config.accent_color.clone().unwrap_or_else(|| primary_seed.clone());

    let primary_scale = generate_scale(&primary_seed)?;
    let secondary_scale = generate_scale(&secondary_seed)?;
    let accent_scale = generate_scale(&accent_seed)?;

    let primary = primary_scale.s500.clone();
    let secondary = secondary_scale.s500.clone();
    let accent = accent_scale.s500.clone();

    let primary_foreground = pick_foreground(&primary)?;
    let secondary_foreground = pick_foreground(&secondary)?;
    let accent_foreground = pick_foreground(&accent)?;

    let table = ModeTable::for_mode(config.mode);

    let mut colors = ThemeColors {
        primary_foreground: primary_foreground.clone(),
        secondary,
        secondary_foreground,
        accent,
        accent_foreground,

        background: table.background.to_string(),
        foreground: table.foreground.to_string(),
        card: table.card.to_string(),
        card_foreground: table.card_foreground.to_string(),
        muted: table.muted.to_string(),
        muted_foreground: table.muted_foreground.to_string(),
        border: table.border.to_string(),
        input: table.input.to_string(),
        popover: table.popover.to_string(),
        popover_foreground: table.popover_foreground.to_string(),
        ring: primary.clone(),

        destructive: table.destructive.to_string(),
        destructive_foreground: pick_foreground(table.destructive)?,
        success: table.success.to_string(),
        success_foreground: pick_foreground(table.success)?,
        warning: table.warning.to_string(),
        warning_foreground: pick_foreground(table.warning)?,
        info: table.info.to_string(),
        info_foreground: pick_foreground(table.info)?,

        nav_bg: table.card.to_string(),
        nav_text: table.foreground.to_string(),
        nav_border: table.border.to_string(),
        nav_icon: table.muted_foreground.to_string(),
        nav_active: primary.clone(),
        nav_active_text: primary_foreground,

        primary,
        primary_scale,
        secondary_scale,
        accent_scale,
    };

    let warnings = ensure_contrast(&mut colors)?;

    let theme = Theme {
        name: theme_name(&config.primary_color, config),
        colors,
        typography: config
            .font_family
            .as_deref()
            .map(Typography::with_family)
            .unwrap_or_default(),
        spacing: config.base_spacing.map(SpacingScale::from_base).unwrap_or_default(),
        radius: config.base_radius.map(RadiusScale::from_base).unwrap_or_default(),
        shadows: ShadowScale::default(),
    };

    Ok((theme, warnings))
}

/// Choose the candidate foreground with the better contrast against
/// `background`
fn pick_foreground(background: &str) -> Result<HexColor> {
    let mut best: Option<(&str, f64)> = None;
    for candidate in FOREGROUND_CANDIDATES {
        let ratio = contrast_ratio(background, candidate)?;
        if best.map_or(true, |(_, r)| ratio > r) {
            best = Some((candidate, ratio));
        }
    }
    // The candidate list is non-empty, so best is always set
    let (candidate, _) = best.ok_or_else(|| ColorError::InvalidFormat(background.to_string()))?;
    Ok(candidate.to_string())
}

fn theme_name(seed: &str, config: &ThemeConfig) -> String {
    let slug = seed.trim_start_matches('#').to_lowercase();
    format!("{slug}-{}", config.mode)
}
