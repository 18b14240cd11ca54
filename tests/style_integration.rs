// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use styledeck::tokens::colors;
    use styledeck::ui::design_tokens::{layout, opacity, palette, sizing, spacing};
    use styledeck::ui::styles::button;
    use styledeck::ui::theming::{ColorScheme, ThemeMode};

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all shared button styles compile and are callable
        let _ = button::primary(&theme, iced::widget::button::Status::Active);
        let _ = button::outlined(&theme, iced::widget::button::Status::Hovered);
        let _ = button::text(&theme, iced::widget::button::Status::Active);
        let _ = button::danger_text(&theme, iced::widget::button::Status::Active);
        let _ = button::icon(&theme, iced::widget::button::Status::Disabled);
        let _ = button::selected(&theme, iced::widget::button::Status::Active);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::OVERLAY_STRONG;

        // Sizing
        let _ = sizing::ICON_LG;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();

        // Surface colors should be visually opposite between light and dark
        assert!(light.surface_primary.r > dark.surface_primary.r);

        // Text colors should also be opposite between light and dark
        assert!(light.text_primary.r < dark.text_primary.r);
    }

    #[test]
    fn theme_mode_round_trips() {
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn chrome_palette_agrees_with_the_documented_catalog() {
        // The shell styles itself with the same ramps it documents
        let documented = colors::parse_hex(colors::PRIMARY.hex(600).unwrap());
        assert!((documented.r - palette::PRIMARY_600.r).abs() < 0.005);
        assert!((documented.g - palette::PRIMARY_600.g).abs() < 0.005);
        assert!((documented.b - palette::PRIMARY_600.b).abs() < 0.005);
    }

    #[test]
    fn drawer_fits_under_the_breakpoint() {
        assert!(sizing::DRAWER_WIDTH < layout::DRAWER_BREAKPOINT);
    }
}
