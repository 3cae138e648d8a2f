//! The assembled theme

use color_core::HexColor;
use serde::{Deserialize, Serialize};

use crate::colors::ThemeColors;
use crate::tokens::{RadiusScale, ShadowScale, SpacingScale};
use crate::typography::Typography;

/// A complete, ready-to-apply theme
///
/// Produced by [`crate::generate_theme`] and never persisted; the
/// [`crate::ThemeConfig`] it was derived from is the stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Derived name, e.g. `3b82f6-light`
    pub name: String,
    /// Every semantic color slot
    pub colors: ThemeColors,
    /// Text styles
    pub typography: Typography,
    /// Spacing steps
    pub spacing: SpacingScale,
    /// Border radius steps
    pub radius: RadiusScale,
    /// Elevation shadows
    pub shadows: ShadowScale,
}

impl Theme {
    /// Flatten the theme's colors into the name/value pairs a runtime
    /// binding applies
    pub fn variables(&self) -> Vec<(String, HexColor)> {
        self.colors.entries()
    }
}

#[cfg(test)]
mod tests {
    use crate::assemble::generate_theme;
    use crate::config::{ThemeConfig, ThemeMode};

    #[test]
    fn test_theme_name_from_seed_and_mode() {
        let theme = generate_theme(&ThemeConfig::new("#3B82F6", ThemeMode::Dark)).unwrap();
        assert_eq!(theme.name, "3b82f6-dark");

        let theme = generate_theme(&ThemeConfig::default()).unwrap();
        assert_eq!(theme.name, "3b82f6-light");
    }

    #[test]
    fn test_variables_match_color_entries() {
        let theme = generate_theme(&ThemeConfig::default()).unwrap();
        assert_eq!(theme.variables(), theme.colors.entries());
    }
}
