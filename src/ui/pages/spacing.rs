// SPDX-License-Identifier: MPL-2.0
//! Spacing page: the 8px grid scale with visual bars and layout examples.

use crate::tokens::spacing::{GRID_UNIT, SPACING_SCALE};
use crate::ui::code_panel;
use crate::ui::design_tokens::{layout, palette, radius, spacing as chrome, typography};
use crate::ui::pages::CopyTarget;
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{Background, Border, Element, Length, Theme};

const USAGE_CODE: &str = r#"use styledeck::ui::design_tokens::spacing;

// Compose layouts on the 8px grid
Column::new()
    .spacing(spacing::XS)    // 8px gap
    .padding(spacing::MD)    // 16px padding
    .push(title)
    .push(
        Row::new()
            .spacing(spacing::XS)
            .push(primary_button)
            .push(secondary_button),
    );"#;

/// Local state: the usage sample's copy flash.
#[derive(Debug, Default)]
pub struct State {
    pub usage: code_panel::State,
}

/// Messages emitted by the spacing page.
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
                target: CopyTarget::SpacingUsage,
            },
        },
    }
}

/// Render the spacing page.
pub fn view<'a>(state: &'a State) -> Element<'a, Message> {
    Column::new()
        .spacing(chrome::LG)
        .push(Text::new("Spacing").size(typography::TITLE_LG))
        .push(
            Container::new(
                Text::new(
                    "Our spacing system is based on an 8px grid system that ensures \
                     consistency and visual harmony across all components and layouts. \
                     This creates a cohesive user experience and makes maintenance easier.",
                )
                .size(typography::BODY_LG),
            )
            .max_width(layout::PROSE_WIDTH),
        )
        .push(scale_bars())
        .push(reference_table())
        .push(card_example())
        .push(
            Column::new()
                .spacing(chrome::SM)
                .push(Text::new("Usage Example").size(typography::TITLE_MD))
                .push(
                    code_panel::view(code_panel::ViewContext {
                        title: Some("Spacing Usage"),
                        code: USAGE_CODE,
                        state: &state.usage,
                    })
                    .map(Message::Usage),
                ),
        )
        .into()
}

/// A brand-colored bar per step, sized to the step itself.
fn scale_bars<'a>() -> Element<'a, Message> {
    let mut bars = Column::new().spacing(chrome::SM);
    for step in &SPACING_SCALE {
        let bar = Container::new(Space::new())
            .width(Length::Fixed(f32::from(step.pixels.max(GRID_UNIT))))
            .height(Length::Fixed(chrome::LG))
            .style(|_theme: &Theme| iced::widget::container::Style {
                background: Some(Background::Color(palette::PRIMARY_600)),
                ..Default::default()
            });

        bars = bars.push(
            Row::new()
                .spacing(chrome::MD)
                .align_y(iced::alignment::Vertical::Center)
                .push(bar)
                .push(
                    Column::new()
                        .push(Text::new(format!("spacing({})", step.token)).size(typography::BODY))
                        .push(
                            Text::new(format!("{}px", step.pixels))
                                .size(typography::CAPTION)
                                .style(|theme: &Theme| iced::widget::text::Style {
                                    color: Some(theme.extended_palette().background.weak.text),
                                }),
                        ),
                ),
        );
    }

    Column::new()
        .spacing(chrome::SM)
        .push(Text::new("Spacing Scale").size(typography::TITLE_MD))
        .push(
            Text::new(
                "All spacing values are multiples of 8px, creating a consistent rhythm \
                 throughout the interface.",
            )
            .size(typography::BODY)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().background.weak.text),
            }),
        )
        .push(
            Container::new(bars)
                .padding(chrome::LG)
                .width(Length::Fill)
                .style(styles::container::bordered),
        )
        .into()
}

fn reference_table<'a>() -> Element<'a, Message> {
    let row = |token: String, pixels: String, usage: &'a str| {
        Row::new()
            .spacing(chrome::SM)
            .push(Container::new(Text::new(token).size(typography::BODY)).width(Length::FillPortion(2)))
            .push(Container::new(Text::new(pixels).size(typography::BODY)).width(Length::FillPortion(1)))
            .push(Container::new(Text::new(usage).size(typography::BODY)).width(Length::FillPortion(4)))
    };

    let mut table = Column::new()
        .spacing(chrome::XS)
        .push(row("Token".to_owned(), "Pixels".to_owned(), "Usage"));

    for step in &SPACING_SCALE {
        table = table.push(row(
            format!("spacing({})", step.token),
            format!("{}px", step.pixels),
            step.usage,
        ));
    }

    Column::new()
        .spacing(chrome::SM)
        .push(Text::new("Spacing Reference").size(typography::TITLE_MD))
        .push(
            Container::new(table)
                .padding(chrome::MD)
                .width(Length::Fill)
                .style(styles::container::bordered),
        )
        .into()
}

/// A small card mockup demonstrating grid-aligned padding and gaps.
fn card_example<'a>() -> Element<'a, Message> {
    let pill = |label: &'a str, filled: bool| {
        Container::new(Text::new(label).size(typography::BODY))
            .padding([chrome::XS, chrome::MD])
            .style(move |_theme: &Theme| {
                if filled {
                    iced::widget::container::Style {
                        background: Some(Background::Color(palette::PRIMARY_600)),
                        text_color: Some(palette::WHITE),
                        border: Border {
                            radius: radius::SM.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }
                } else {
                    iced::widget::container::Style {
                        text_color: Some(palette::PRIMARY_600),
                        border: Border {
                            color: palette::PRIMARY_600,
                            width: 1.0,
                            radius: radius::SM.into(),
                        },
                        ..Default::default()
                    }
                }
            })
    };

    let card = Column::new()
        .spacing(chrome::MD)
        .push(Text::new("Card Title").size(typography::TITLE_SM))
        .push(
            Text::new("This card demonstrates proper spacing using our 8px grid system.")
                .size(typography::BODY),
        )
        .push(
            Row::new()
                .spacing(chrome::XS)
                .push(pill("Button", true))
                .push(pill("Secondary", false)),
        );

    Column::new()
        .spacing(chrome::SM)
        .push(Text::new("Layout Examples").size(typography::TITLE_MD))
        .push(
            Container::new(card)
                .padding(chrome::LG)
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
                assert_eq!(target, CopyTarget::SpacingUsage);
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
