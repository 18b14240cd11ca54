// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface: elevated panel with rounded corners.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.weak.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Flat bordered panel used for specimen and example boxes.
pub fn bordered(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: None,
        border: Border {
            color: palette.background.weak.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Header bar and drawer surface.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Title strip above a code sample.
pub fn code_header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        ..Default::default()
    }
}

/// Body of a code sample.
pub fn code_body(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        ..Default::default()
    }
}

/// Translucent layer behind the overlay drawer.
pub fn scrim(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_has_rounded_border_and_shadow() {
        let style = card(&Theme::Light);
        assert!(style.background.is_some());
        assert!(style.shadow.blur_radius > 0.0);
    }

    #[test]
    fn scrim_uses_the_given_color() {
        let color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);
        let style = scrim(color)(&Theme::Dark);
        assert_eq!(style.background, Some(Background::Color(color)));
    }
}
