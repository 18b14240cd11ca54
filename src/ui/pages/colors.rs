// SPDX-License-Identifier: MPL-2.0
//! Colors page: the six documented palettes with copyable swatches.

use crate::tokens::colors::{self, Palette};
use crate::ui::code_panel;
use crate::ui::design_tokens::{layout, palette as chrome, radius, sizing, spacing, typography};
use crate::ui::pages::CopyTarget;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Background, Border, Element, Length, Theme};

const USAGE_CODE: &str = r##"use styledeck::tokens::colors;
use styledeck::ui::design_tokens::palette;

// Look up a documented shade
let brand = colors::PRIMARY.hex(600); // Some("#0284c7")

// Style a widget with the chrome palette
button(text("Primary"))
    .style(|_theme, _status| button::Style {
        background: Some(palette::PRIMARY_600.into()),
        text_color: palette::WHITE,
        ..Default::default()
    });"##;

/// Local state: the usage sample's copy flash.
#[derive(Debug, Default)]
pub struct State {
    pub usage: code_panel::State,
}

/// Messages emitted by the colors page.
#[derive(Debug, Clone)]
pub enum Message {
    /// A swatch was clicked; indexes into [`colors::ALL`] and its shades.
    SwatchPressed { palette: usize, shade: usize },
    Usage(code_panel::Message),
}

/// Events propagated to the parent.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Copy { text: String, target: CopyTarget },
}

/// Process a colors page message.
pub fn update(message: Message) -> Event {
    match message {
        Message::SwatchPressed { palette, shade } => {
            let hex = colors::ALL
                .get(palette)
                .and_then(|p| p.shades.get(shade))
                .map(|(_, hex)| *hex);
            match hex {
                Some(hex) => Event::Copy {
                    text: hex.to_owned(),
                    target: CopyTarget::ColorSwatch,
                },
                None => Event::None,
            }
        }
        Message::Usage(message) => match code_panel::update(message, USAGE_CODE) {
            code_panel::Event::CopyRequested(text) => Event::Copy {
                text,
                target: CopyTarget::ColorsUsage,
            },
        },
    }
}

/// Render the colors page.
pub fn view<'a>(state: &'a State) -> Element<'a, Message> {
    let mut page = Column::new()
        .spacing(spacing::LG)
        .push(Text::new("Colors").size(typography::TITLE_LG))
        .push(
            Container::new(
                Text::new(
                    "Our color system is built on a foundation of meaningful, accessible \
                     colors that work harmoniously together. Each color has multiple shades \
                     to provide flexibility while maintaining consistency.",
                )
                .size(typography::BODY_LG),
            )
            .max_width(layout::PROSE_WIDTH),
        )
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(chip("Click any color to copy"))
                .push(chip("WCAG AA Compliant")),
        );

    for (palette_index, palette) in colors::ALL.iter().enumerate() {
        page = page.push(palette_section(palette_index, palette));
    }

    page = page.push(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new("Usage Example").size(typography::TITLE_MD))
            .push(
                code_panel::view(code_panel::ViewContext {
                    title: Some("colors.rs"),
                    code: USAGE_CODE,
                    state: &state.usage,
                })
                .map(Message::Usage),
            ),
    );

    page.into()
}

fn palette_section<'a>(palette_index: usize, palette: &'a Palette) -> Element<'a, Message> {
    let mut section = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(palette.name).size(typography::TITLE_SM))
        .push(
            Text::new(palette.description)
                .size(typography::BODY)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        );

    // Two rows of five swatches each
    for (chunk_index, chunk) in palette.shades.chunks(5).enumerate() {
        let mut row = Row::new().spacing(spacing::XS);
        for (offset, (shade, hex)) in chunk.iter().enumerate() {
            row = row.push(swatch(
                palette_index,
                chunk_index * 5 + offset,
                *shade,
                hex,
            ));
        }
        section = section.push(row);
    }

    section.into()
}

fn swatch<'a>(
    palette_index: usize,
    shade_index: usize,
    shade: u16,
    hex: &'a str,
) -> Element<'a, Message> {
    let fill = colors::parse_hex(hex);
    let label_color = if colors::shade_wants_light_text(shade) {
        chrome::WHITE
    } else {
        chrome::BLACK
    };

    let face = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(shade.to_string()).size(typography::BODY).color(label_color))
        .push(Text::new(hex).size(typography::CAPTION).color(label_color));

    button(
        Container::new(face)
            .width(Length::Fixed(sizing::SWATCH_WIDTH))
            .height(Length::Fixed(sizing::SWATCH_HEIGHT))
            .padding(spacing::XS),
    )
    .on_press(Message::SwatchPressed {
        palette: palette_index,
        shade: shade_index,
    })
    .padding(0.0)
    .style(move |theme: &Theme, _status| iced::widget::button::Style {
        background: Some(Background::Color(fill)),
        text_color: label_color,
        border: Border {
            color: theme.extended_palette().background.weak.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    })
    .into()
}

fn chip<'a, M: 'a>(label: &'a str) -> Element<'a, M> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(|theme: &Theme| iced::widget::container::Style {
            border: Border {
                color: theme.extended_palette().primary.base.color,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            text_color: Some(theme.extended_palette().primary.base.color),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_primary_600_copies_the_brand_hex() {
        // Primary is palette 0; shade 600 sits at index 6 of the ramp.
        let event = update(Message::SwatchPressed {
            palette: 0,
            shade: 6,
        });
        match event {
            Event::Copy { text, target } => {
                assert_eq!(text, "#0284c7");
                assert_eq!(target, CopyTarget::ColorSwatch);
            }
            Event::None => panic!("expected a copy event"),
        }
    }

    #[test]
    fn out_of_range_swatch_is_inert() {
        let event = update(Message::SwatchPressed {
            palette: 99,
            shade: 0,
        });
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn usage_copy_targets_the_usage_panel() {
        let event = update(Message::Usage(code_panel::Message::CopyPressed));
        match event {
            Event::Copy { text, target } => {
                assert_eq!(text, USAGE_CODE);
                assert_eq!(target, CopyTarget::ColorsUsage);
            }
            Event::None => panic!("expected a copy event"),
        }
    }

    #[test]
    fn page_renders() {
        let state = State::default();
        let _ = view(&state);
    }
}
