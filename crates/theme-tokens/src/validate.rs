//! Accessibility checking and correction
//!
//! After assembly every background/foreground pairing is checked against
//! the WCAG AA threshold for normal text. A failing foreground is
//! replaced by whichever of pure white or pure black contrasts better
//! with its background; if even the better candidate falls short, the
//! pairing is reported as a warning rather than an error so a usable
//! theme is still produced.

use color_core::{contrast_ratio, HexColor, Result};

use crate::colors::ThemeColors;

/// WCAG AA minimum contrast ratio for normal text
pub const AA_NORMAL: f64 = 4.5;

/// Replacement foregrounds tried when a pairing fails, in order
const CORRECTION_CANDIDATES: [&str; 2] = ["#ffffff", "#000000"];

/// The background/foreground pairings subject to checking
const PAIRS: [(&str, &str); 10] = [
    ("background", "foreground"),
    ("card", "card-foreground"),
    ("popover", "popover-foreground"),
    ("primary", "primary-foreground"),
    ("secondary", "secondary-foreground"),
    ("accent", "accent-foreground"),
    ("destructive", "destructive-foreground"),
    ("success", "success-foreground"),
    ("warning", "warning-foreground"),
    ("info", "info-foreground"),
];

/// A pairing that stayed below the threshold even after correction
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastWarning {
    /// Role name of the background slot
    pub background_role: &'static str,
    /// Role name of the foreground slot
    pub foreground_role: &'static str,
    /// Contrast ratio after correction
    pub ratio: f64,
}

impl std::fmt::Display for ContrastWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} on {} has contrast {:.2}, below {AA_NORMAL}",
            self.foreground_role, self.background_role, self.ratio
        )
    }
}

/// Check every pairing against [`AA_NORMAL`], correcting failures in place
///
/// Returns the pairings that remained below the threshold after
/// correction. Errors only surface when a slot holds an unparseable
/// color, which assembled themes never do.
pub fn ensure_contrast(colors: &mut ThemeColors) -> Result<Vec<ContrastWarning>> {
    correct_pairs(colors, AA_NORMAL)
}

fn correct_pairs(colors: &mut ThemeColors, threshold: f64) -> Result<Vec<ContrastWarning>> {
    let mut warnings = Vec::new();

    for (bg_role, fg_role) in PAIRS {
        let background = field(colors, bg_role).clone();
        let mut ratio = contrast_ratio(&background, field(colors, fg_role))?;

        if ratio < threshold {
            let mut best: Option<(&str, f64)> = None;
            for candidate in CORRECTION_CANDIDATES {
                let candidate_ratio = contrast_ratio(&background, candidate)?;
                if best.map_or(true, |(_, r)| candidate_ratio > r) {
                    best = Some((candidate, candidate_ratio));
                }
            }
            if let Some((candidate, candidate_ratio)) = best {
                *field_mut(colors, fg_role) = candidate.to_string();
                ratio = candidate_ratio;
            }
        }

        if ratio < threshold {
            warnings.push(ContrastWarning { background_role: bg_role, foreground_role: fg_role, ratio });
        }
    }

    Ok(warnings)
}

fn field<'a>(colors: &'a ThemeColors, role: &str) -> &'a HexColor {
    match role {
        "background" => &colors.background,
        "foreground" => &colors.foreground,
        "card" => &colors.card,
        "card-foreground" => &colors.card_foreground,
        "popover" => &colors.popover,
        "popover-foreground" => &colors.popover_foreground,
        "primary" => &colors.primary,
        "primary-foreground" => &colors.primary_foreground,
        "secondary" => &colors.secondary,
        "secondary-foreground" => &colors.secondary_foreground,
        "accent" => &colors.accent,
        "accent-foreground" => &colors.accent_foreground,
        "destructive" => &colors.destructive,
        "destructive-foreground" => &colors.destructive_foreground,
        "success" => &colors.success,
        "success-foreground" => &colors.success_foreground,
        "warning" => &colors.warning,
        "warning-foreground" => &colors.warning_foreground,
        "info" => &colors.info,
        "info-foreground" => &colors.info_foreground,
        _ => unreachable!("unknown contrast role {role}"),
    }
}

fn field_mut<'a>(colors: &'a mut ThemeColors, role: &str) -> &'a mut HexColor {
    match role {
        "foreground" => &mut colors.foreground,
        "card-foreground" => &mut colors.card_foreground,
        "popover-foreground" => &mut colors.popover_foreground,
        "primary-foreground" => &mut colors.primary_foreground,
        "secondary-foreground" => &mut colors.secondary_foreground,
        "accent-foreground" => &mut colors.accent_foreground,
        "destructive-foreground" => &mut colors.destructive_foreground,
        "success-foreground" => &mut colors.success_foreground,
        "warning-foreground" => &mut colors.warning_foreground,
        "info-foreground" => &mut colors.info_foreground,
        _ => unreachable!("role {role} is never corrected"),
    }
}
