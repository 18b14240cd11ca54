// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! The three showcase variants (contained, outlined, text) mirror the
//! documented button system; `icon` and `selected` style the shell's own
//! controls.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Contained button: filled with the brand color.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_600)),
            text_color: WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_700)),
            text_color: WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(if is_light {
                palette::SLATE_200
            } else {
                palette::SLATE_700
            })),
            text_color: palette::SLATE_400,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Outlined button: brand border and text on a transparent surface.
pub fn outlined(theme: &Theme, status: button::Status) -> button::Style {
    let brand = if matches!(theme, Theme::Light) {
        palette::PRIMARY_600
    } else {
        palette::PRIMARY_400
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: None,
            text_color: brand,
            border: Border {
                color: brand,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..brand
            })),
            text_color: brand,
            border: Border {
                color: brand,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette::SLATE_400,
            border: Border {
                color: palette::SLATE_400,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Text button: no chrome until hovered.
pub fn text(theme: &Theme, status: button::Status) -> button::Style {
    tinted_text(brand_color(theme))(theme, status)
}

/// Text button in the error color, for destructive actions.
pub fn danger_text(theme: &Theme, status: button::Status) -> button::Style {
    tinted_text(palette::ERROR_500)(theme, status)
}

/// Text button in an arbitrary accent color.
pub fn tinted_text(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: None,
            text_color: accent,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..accent
            })),
            text_color: accent,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette::SLATE_400,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Borderless icon button used in the header, toasts, and card actions.
pub fn icon(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette_ext.background.base.text
            })),
            text_color: palette_ext.background.base.text,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Active => button::Style {
            background: None,
            text_color: palette_ext.background.base.text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette::SLATE_400,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style for selected/active states in toggle groups and the nav tree.
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_700)),
            text_color: WHITE,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(palette::PRIMARY_600)),
            text_color: WHITE,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

fn brand_color(theme: &Theme) -> Color {
    if matches!(theme, Theme::Light) {
        palette::PRIMARY_600
    } else {
        palette::PRIMARY_400
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_disabled_loses_shadow() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.shadow.blur_radius, 0.0);
    }

    #[test]
    fn outlined_keeps_border_across_states() {
        for status in [
            button::Status::Active,
            button::Status::Hovered,
            button::Status::Disabled,
        ] {
            let style = outlined(&Theme::Dark, status);
            assert_eq!(style.border.width, 1.0);
        }
    }

    #[test]
    fn selected_is_brand_filled() {
        let style = selected(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_600))
        );
        assert_eq!(style.text_color, WHITE);
    }
}
