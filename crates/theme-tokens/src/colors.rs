//! Semantic color roles
//!
//! [`ThemeColors`] is the exhaustive set of named color slots a theme
//! provides. Every slot is always populated; assembly never yields
//! partial output. [`ThemeColors::entries`] flattens the whole set
//! (scales included) into the name/value list the runtime binding
//! consumes.

use color_core::{ColorScale, HexColor};
use serde::{Deserialize, Serialize};

use crate::config::ThemeMode;

/// Fixed per-mode values for the non-brand roles
///
/// Backgrounds, surfaces, and state hues are deliberately independent of
/// the brand seeds: two brands in the same mode share identical UI
/// chrome, which keeps legibility guaranteed no matter how extreme the
/// seed is.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ModeTable {
    pub background: &'static str,
    pub foreground: &'static str,
    pub card: &'static str,
    pub card_foreground: &'static str,
    pub muted: &'static str,
    pub muted_foreground: &'static str,
    pub border: &'static str,
    pub input: &'static str,
    pub popover: &'static str,
    pub popover_foreground: &'static str,
    pub destructive: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
}

const LIGHT: ModeTable = ModeTable {
    background: "#ffffff",
    foreground: "#111827",
    card: "#ffffff",
    card_foreground: "#111827",
    muted: "#f3f4f6",
    muted_foreground: "#6b7280",
    border: "#e5e7eb",
    input: "#e5e7eb",
    popover: "#ffffff",
    popover_foreground: "#111827",
    destructive: "#dc2626",
    success: "#16a34a",
    warning: "#d97706",
    info: "#2563eb",
};

const DARK: ModeTable = ModeTable {
    background: "#111827",
    foreground: "#f9fafb",
    card: "#1f2937",
    card_foreground: "#f9fafb",
    muted: "#1f2937",
    muted_foreground: "#9ca3af",
    border: "#374151",
    input: "#374151",
    popover: "#1f2937",
    popover_foreground: "#f9fafb",
    destructive: "#ef4444",
    success: "#22c55e",
    warning: "#f59e0b",
    info: "#60a5fa",
};

impl ModeTable {
    pub(crate) fn for_mode(mode: ThemeMode) -> &'static ModeTable {
        match mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}

/// The complete set of semantic color slots for a theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    /// Primary brand color (scale stop 500)
    pub primary: HexColor,
    /// Text/icon color used on top of `primary`
    pub primary_foreground: HexColor,
    /// Secondary brand color
    pub secondary: HexColor,
    /// Text/icon color used on top of `secondary`
    pub secondary_foreground: HexColor,
    /// Accent brand color
    pub accent: HexColor,
    /// Text/icon color used on top of `accent`
    pub accent_foreground: HexColor,

    /// Page background
    pub background: HexColor,
    /// Default text color
    pub foreground: HexColor,
    /// Elevated surface background
    pub card: HexColor,
    /// Text color on cards
    pub card_foreground: HexColor,
    /// Subdued surface background
    pub muted: HexColor,
    /// Subdued text color
    pub muted_foreground: HexColor,
    /// Divider and outline color
    pub border: HexColor,
    /// Form control background
    pub input: HexColor,
    /// Floating surface background
    pub popover: HexColor,
    /// Text color on popovers
    pub popover_foreground: HexColor,
    /// Focus ring color
    pub ring: HexColor,

    /// Destructive action color
    pub destructive: HexColor,
    /// Text color on destructive surfaces
    pub destructive_foreground: HexColor,
    /// Success state color
    pub success: HexColor,
    /// Text color on success surfaces
    pub success_foreground: HexColor,
    /// Warning state color
    pub warning: HexColor,
    /// Text color on warning surfaces
    pub warning_foreground: HexColor,
    /// Informational state color
    pub info: HexColor,
    /// Text color on informational surfaces
    pub info_foreground: HexColor,

    /// Navigation background (alias of `card`)
    pub nav_bg: HexColor,
    /// Navigation text (alias of `foreground`)
    pub nav_text: HexColor,
    /// Navigation divider (alias of `border`)
    pub nav_border: HexColor,
    /// Navigation icon (alias of `muted_foreground`)
    pub nav_icon: HexColor,
    /// Active navigation item (alias of `primary`)
    pub nav_active: HexColor,
    /// Text on the active navigation item (alias of `primary_foreground`)
    pub nav_active_text: HexColor,

    /// Full 11-step primary scale
    pub primary_scale: ColorScale,
    /// Full 11-step secondary scale
    pub secondary_scale: ColorScale,
    /// Full 11-step accent scale
    pub accent_scale: ColorScale,
}

impl ThemeColors {
    /// Flatten every slot into a `(name, value)` list
    ///
    /// Role slots use their kebab-case semantic names; scale stops are
    /// exposed as `primary-50` … `accent-950`. The list is complete: a
    /// consumer that writes each pair to its binding has applied the
    /// entire theme.
    pub fn entries(&self) -> Vec<(String, HexColor)> {
        let roles: [(&str, &HexColor); 31] = [
            ("primary", &self.primary),
            ("primary-foreground", &self.primary_foreground),
            ("secondary", &self.secondary),
            ("secondary-foreground", &self.secondary_foreground),
            ("accent", &self.accent),
            ("accent-foreground", &self.accent_foreground),
            ("background", &self.background),
            ("foreground", &self.foreground),
            ("card", &self.card),
            ("card-foreground", &self.card_foreground),
            ("muted", &self.muted),
            ("muted-foreground", &self.muted_foreground),
            ("border", &self.border),
            ("input", &self.input),
            ("popover", &self.popover),
            ("popover-foreground", &self.popover_foreground),
            ("ring", &self.ring),
            ("destructive", &self.destructive),
            ("destructive-foreground", &self.destructive_foreground),
            ("success", &self.success),
            ("success-foreground", &self.success_foreground),
            ("warning", &self.warning),
            ("warning-foreground", &self.warning_foreground),
            ("info", &self.info),
            ("info-foreground", &self.info_foreground),
            ("nav-bg", &self.nav_bg),
            ("nav-text", &self.nav_text),
            ("nav-border", &self.nav_border),
            ("nav-icon", &self.nav_icon),
            ("nav-active", &self.nav_active),
            ("nav-active-text", &self.nav_active_text),
        ];

        let mut out: Vec<(String, HexColor)> =
            roles.iter().map(|(name, value)| (name.to_string(), (*value).clone())).collect();

        for (prefix, scale) in [
            ("primary", &self.primary_scale),
            ("secondary", &self.secondary_scale),
            ("accent", &self.accent_scale),
        ] {
            for (stop, hex) in scale.entries() {
                out.push((format!("{prefix}-{stop}"), hex.clone()));
            }
        }

        out
    }

    /// Look up a single slot by its semantic name
    pub fn get(&self, name: &str) -> Option<HexColor> {
        self.entries().into_iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::generate_theme;
    use crate::config::ThemeConfig;

    #[test]
    fn test_mode_tables_differ() {
        assert_ne!(LIGHT.background, DARK.background);
        assert_ne!(LIGHT.foreground, DARK.foreground);
        assert_eq!(LIGHT.background, "#ffffff");
        assert_eq!(DARK.background, "#111827");
    }

    #[test]
    fn test_entries_complete() {
        let theme = generate_theme(&ThemeConfig::default()).unwrap();
        let entries = theme.colors.entries();

        // 31 role slots plus three 11-step scales
        assert_eq!(entries.len(), 31 + 3 * 11);

        // No duplicate names
        let mut names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), entries.len());
    }

    #[test]
    fn test_entries_all_valid_hex() {
        let theme = generate_theme(&ThemeConfig::default()).unwrap();
        for (name, value) in theme.colors.entries() {
            assert!(
                color_core::parse_hex(&value).is_ok(),
                "slot {name} holds invalid hex {value:?}"
            );
        }
    }

    #[test]
    fn test_get_by_name() {
        let theme = generate_theme(&ThemeConfig::default()).unwrap();
        assert_eq!(theme.colors.get("background"), Some(theme.colors.background.clone()));
        assert_eq!(
            theme.colors.get("primary-500"),
            Some(theme.colors.primary_scale.s500.clone())
        );
        assert_eq!(theme.colors.get("no-such-role"), None);
    }

    #[test]
    fn test_nav_roles_alias_base_roles() {
        let theme = generate_theme(&ThemeConfig::default()).unwrap();
        let colors = &theme.colors;

        assert_eq!(colors.nav_bg, colors.card);
        assert_eq!(colors.nav_text, colors.foreground);
        assert_eq!(colors.nav_border, colors.border);
        assert_eq!(colors.nav_icon, colors.muted_foreground);
        assert_eq!(colors.nav_active, colors.primary);
        assert_eq!(colors.nav_active_text, colors.primary_foreground);
    }
}
