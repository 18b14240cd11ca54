// SPDX-License-Identifier: MPL-2.0
//! Theme mode and color schemes.

use crate::ui::design_tokens::{opacity, palette};
use dark_light;
use iced::{Color, Theme};
use serde::Deserialize;

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    // Scrim behind the overlay drawer
    pub scrim: Color,
}

impl ColorScheme {
    /// Light theme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::SLATE_100,
            surface_tertiary: palette::SLATE_200,

            text_primary: palette::SLATE_900,
            text_secondary: palette::SLATE_600,

            brand_primary: palette::PRIMARY_600,
            brand_secondary: palette::PRIMARY_700,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            scrim: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }

    /// Dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::SLATE_900,
            surface_secondary: palette::SLATE_800,
            surface_tertiary: palette::SLATE_700,

            text_primary: palette::SLATE_50,
            text_secondary: palette::SLATE_300,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_600,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            scrim: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        }
    }
}

/// The two runtime theme modes. Toggled by the header button; never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Picks the initial mode from the OS preference. Defaults to dark when
    /// detection fails, matching the convention of desktop environments that
    /// cannot report a preference.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// The opposite mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// The scheme for this mode.
    #[must_use]
    pub fn scheme(self) -> ColorScheme {
        match self {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
        }
    }

    /// Maps the mode onto the base Iced theme; component styles layer brand
    /// colors on top via the design tokens.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9); // Close to white
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2); // Close to black
    }

    #[test]
    fn both_themes_share_the_brand_hue() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();

        // The sky-blue brand color is blue-dominant in both schemes
        assert!(light.brand_primary.b > light.brand_primary.r);
        assert!(dark.brand_primary.b > dark.brand_primary.r);
    }

    #[test]
    fn toggling_twice_round_trips() {
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn toggled_flips_the_mode() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert!(ThemeMode::Light.toggled().is_dark());
    }
}
