// SPDX-License-Identifier: MPL-2.0
//! Typography page: the documented type scale with rendered specimens.

use crate::tokens::typography::{TypeVariant, FONT_FALLBACKS, FONT_FAMILY, TYPE_SCALE};
use crate::ui::code_panel;
use crate::ui::design_tokens::{layout, spacing, typography as chrome_type};
use crate::ui::pages::CopyTarget;
use crate::ui::styles;
use iced::font::{self, Font};
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length, Theme};

const SPECIMEN: &str = "The quick brown fox jumps over the lazy dog";

const USAGE_CODE: &str = r#"use styledeck::tokens::typography::TYPE_SCALE;
use styledeck::ui::design_tokens::typography;

// Render a heading with the chrome scale
text("Main Page Title").size(typography::TITLE_LG);

// Render a documented variant by name
let h1 = TYPE_SCALE.iter().find(|v| v.name == "h1").unwrap();
text("Hero header").size(h1.size);"#;

/// Local state: the usage sample's copy flash.
#[derive(Debug, Default)]
pub struct State {
    pub usage: code_panel::State,
}

/// Messages emitted by the typography page.
#[derive(Debug, Clone)]
pub enum Message {
    Usage(code_panel::Message),
}

/// Events propagated to the parent.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Copy { text: String, target: CopyTarget },
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Usage(message) => match code_panel::update(message, USAGE_CODE) {
            code_panel::Event::CopyRequested(text) => Event::Copy {
                text,
                target: CopyTarget::TypographyUsage,
            },
        },
    }
}

/// Render the typography page.
pub fn view<'a>(state: &'a State) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::LG)
        .push(Text::new("Typography").size(chrome_type::TITLE_LG))
        .push(
            Container::new(
                Text::new(
                    "Our typography system is built with Inter as the primary font family, \
                     providing excellent readability and a modern, professional appearance \
                     across all digital interfaces.",
                )
                .size(chrome_type::BODY_LG),
            )
            .max_width(layout::PROSE_WIDTH),
        )
        .push(scale_specimens())
        .push(specification_table())
        .push(font_family_notes())
        .push(
            Column::new()
                .spacing(spacing::SM)
                .push(Text::new("Usage Example").size(chrome_type::TITLE_MD))
                .push(
                    code_panel::view(code_panel::ViewContext {
                        title: Some("Typography Usage"),
                        code: USAGE_CODE,
                        state: &state.usage,
                    })
                    .map(Message::Usage),
                ),
        )
        .into()
}

fn variant_font(variant: &TypeVariant) -> Font {
    Font {
        weight: match variant.weight {
            700 => font::Weight::Bold,
            600 => font::Weight::Semibold,
            500 => font::Weight::Medium,
            _ => font::Weight::Normal,
        },
        ..Font::DEFAULT
    }
}

/// The heading variants rendered at their actual size.
fn scale_specimens<'a>() -> Element<'a, Message> {
    let mut specimens = Column::new().spacing(spacing::MD);
    for variant in TYPE_SCALE.iter().filter(|v| v.name.starts_with('h')) {
        specimens = specimens.push(
            Text::new(format!("{} - {SPECIMEN}", variant.name.to_uppercase()))
                .size(variant.size)
                .font(variant_font(variant))
                .line_height(variant.line_height),
        );
    }

    Column::new()
        .spacing(spacing::SM)
        .push(Text::new("Type Scale").size(chrome_type::TITLE_MD))
        .push(
            Container::new(specimens)
                .padding(spacing::LG)
                .width(Length::Fill)
                .style(styles::container::bordered),
        )
        .into()
}

fn specification_table<'a>() -> Element<'a, Message> {
    let mut table = Column::new().spacing(spacing::XS).push(table_row(
        "Variant",
        "Size".to_owned(),
        "Weight".to_owned(),
        "Line Height".to_owned(),
        "Usage",
        true,
    ));

    for variant in &TYPE_SCALE {
        table = table.push(table_row(
            variant.name,
            format!("{}px", variant.size),
            variant.weight.to_string(),
            variant.line_height.to_string(),
            variant.usage,
            false,
        ));
    }

    Column::new()
        .spacing(spacing::SM)
        .push(Text::new("Typography Specifications").size(chrome_type::TITLE_MD))
        .push(
            Container::new(table)
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(styles::container::bordered),
        )
        .into()
}

fn table_row<'a>(
    name: &'a str,
    size: String,
    weight: String,
    line_height: String,
    usage: &'a str,
    header: bool,
) -> Element<'a, Message> {
    let cell_font = if header {
        Font {
            weight: font::Weight::Semibold,
            ..Font::DEFAULT
        }
    } else {
        Font::DEFAULT
    };
    let cell = move |content: Text<'a, Theme, iced::Renderer>, portion: u16| {
        Container::new(content.size(chrome_type::BODY).font(cell_font))
            .width(Length::FillPortion(portion))
    };

    Row::new()
        .spacing(spacing::SM)
        .push(cell(Text::new(name), 1))
        .push(cell(Text::new(size), 1))
        .push(cell(Text::new(weight), 1))
        .push(cell(Text::new(line_height), 1))
        .push(cell(Text::new(usage), 3))
        .into()
}

fn font_family_notes<'a>() -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(Text::new("Font Family").size(chrome_type::TITLE_MD))
        .push(
            Container::new(
                Column::new()
                    .spacing(spacing::XS)
                    .push(
                        Text::new(format!("Primary: {FONT_FAMILY}")).size(chrome_type::BODY_LG),
                    )
                    .push(
                        Text::new(
                            "Inter is our primary font family, designed for digital \
                             interfaces with excellent readability at all sizes.",
                        )
                        .size(chrome_type::BODY)
                        .style(|theme: &Theme| iced::widget::text::Style {
                            color: Some(theme.extended_palette().background.weak.text),
                        }),
                    )
                    .push(
                        Text::new(format!("Fallback Stack: {FONT_FALLBACKS}"))
                            .size(chrome_type::BODY),
                    ),
            )
            .padding(spacing::LG)
            .width(Length::Fill)
            .style(styles::container::bordered),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_copy_targets_the_usage_panel() {
        let event = update(Message::Usage(code_panel::Message::CopyPressed));
        match event {
            Event::Copy { text, target } => {
                assert_eq!(text, USAGE_CODE);
                assert_eq!(target, CopyTarget::TypographyUsage);
            }
            Event::None => panic!("expected a copy event"),
        }
    }

    #[test]
    fn heading_weights_map_to_fonts() {
        let h1 = TYPE_SCALE.iter().find(|v| v.name == "h1").unwrap();
        assert_eq!(variant_font(h1).weight, font::Weight::Bold);

        let body1 = TYPE_SCALE.iter().find(|v| v.name == "body1").unwrap();
        assert_eq!(variant_font(body1).weight, font::Weight::Normal);
    }

    #[test]
    fn page_renders() {
        let state = State::default();
        let _ = view(&state);
    }
}
