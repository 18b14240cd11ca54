// SPDX-License-Identifier: MPL-2.0
//! Cards page: card patterns as live, tabbed previews.

use crate::ui::design_tokens::{layout, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::pages::CopyTarget;
use crate::ui::preview;
use crate::ui::styles;
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Background, Border, Element, Length, Theme,
};

/// One showcase section.
pub struct Example {
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
    pub render: fn() -> Element<'static, preview::Message>,
}

pub static EXAMPLES: &[Example] = &[
    Example {
        title: "Basic Card",
        description: "Simple card with content and actions.",
        code: r#"Container::new(
    Column::new()
        .push(text("Card Title").size(typography::TITLE_SM))
        .push(text(
            "This is a basic card with some content and actions below. \
             Cards contain content and actions about a single subject.",
        ))
        .push(
            Row::new()
                .push(button(text("Learn More")).style(styles::button::text))
                .push(button(text("Share")).style(styles::button::text)),
        ),
)
.style(styles::container::card)
.width(sizing::CARD_WIDTH);"#,
        render: render_basic,
    },
    Example {
        title: "Media Card",
        description: "Card with media content and structured information.",
        code: r#"Container::new(
    Column::new()
        .push(media_banner())  // fixed-height art block
        .push(text("Beautiful Landscape").size(typography::TITLE_SM))
        .push(text(
            "Explore the stunning mountain landscapes with crystal clear \
             lakes and breathtaking views that will leave you speechless.",
        ))
        .push(
            Row::new()
                .push(button(icons::heart()).style(styles::button::icon))
                .push(button(icons::share()).style(styles::button::icon)),
        ),
)
.style(styles::container::card)
.width(sizing::CARD_WIDTH);"#,
        render: render_media,
    },
    Example {
        title: "Profile Card",
        description: "Card designed for displaying user profiles.",
        code: r#"Container::new(
    Column::new()
        .push(
            Row::new()
                .push(avatar("JD"))
                .push(
                    Column::new()
                        .push(text("John Doe").size(typography::BODY_LG))
                        .push(text("Senior Developer")),
                )
                .push(button(icons::more_vertical()).style(styles::button::icon)),
        )
        .push(text(
            "Passionate about creating beautiful and functional user \
             interfaces. Loves working with Rust and modern GUI toolkits.",
        ))
        .push(Row::new().push(tag("Rust")).push(tag("Iced")).push(tag("GUI")))
        .push(
            Row::new()
                .push(button(text("View Profile")).style(styles::button::text))
                .push(button(text("Connect")).style(styles::button::text)),
        ),
)
.style(styles::container::card)
.width(sizing::CARD_WIDTH);"#,
        render: render_profile,
    },
];

/// Local state: one preview per example.
#[derive(Debug)]
pub struct State {
    pub previews: Vec<preview::State>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            previews: vec![preview::State::new(); EXAMPLES.len()],
        }
    }
}

/// Messages emitted by the cards page.
#[derive(Debug, Clone)]
pub enum Message {
    Preview {
        index: usize,
        message: preview::Message,
    },
}

/// Events propagated to the parent.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Copy { text: String, target: CopyTarget },
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Preview { index, message } => {
            let (Some(example), Some(preview_state)) =
                (EXAMPLES.get(index), state.previews.get_mut(index))
            else {
                return Event::None;
            };
            match preview::update(preview_state, message, example.code) {
                preview::Event::CopyRequested(text) => Event::Copy {
                    text,
                    target: CopyTarget::CardsPreview(index),
                },
                preview::Event::None => Event::None,
            }
        }
    }
}

/// Render the cards page.
pub fn view<'a>(state: &'a State) -> Element<'a, Message> {
    let mut page = Column::new()
        .spacing(spacing::XL)
        .push(Text::new("Cards").size(typography::TITLE_LG))
        .push(
            Container::new(
                Text::new(
                    "Cards contain content and actions about a single subject. They serve \
                     as an entry point to more detailed information and provide a \
                     consistent way to display related information.",
                )
                .size(typography::BODY_LG),
            )
            .max_width(layout::PROSE_WIDTH),
        );

    for (index, (example, preview_state)) in
        EXAMPLES.iter().zip(state.previews.iter()).enumerate()
    {
        page = page.push(
            preview::view(preview::ViewContext {
                title: example.title,
                description: Some(example.description),
                code: example.code,
                state: preview_state,
                content: (example.render)(),
            })
            .map(move |message| Message::Preview { index, message }),
        );
    }

    page.into()
}

fn card_shell(content: Element<'static, preview::Message>) -> Element<'static, preview::Message> {
    Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::card)
        .into()
}

fn muted(text: &'static str) -> Text<'static, Theme, iced::Renderer> {
    Text::new(text)
        .size(typography::BODY)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().background.weak.text),
        })
}

fn render_basic() -> Element<'static, preview::Message> {
    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new("Learn More").size(typography::BODY))
                .on_press(preview::Message::Showcase)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::text),
        )
        .push(
            button(Text::new("Share").size(typography::BODY))
                .on_press(preview::Message::Showcase)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::text),
        );

    card_shell(
        Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .push(Text::new("Card Title").size(typography::TITLE_SM))
            .push(muted(
                "This is a basic card with some content and actions below. Cards \
                 contain content and actions about a single subject.",
            ))
            .push(actions)
            .into(),
    )
}

fn render_media() -> Element<'static, preview::Message> {
    // Stand-in art block; a real deployment would embed an image handle here
    let banner = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(140.0))
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::PRIMARY_200)),
            border: Border {
                radius: iced::border::Radius {
                    top_left: radius::LG,
                    top_right: radius::LG,
                    bottom_left: radius::NONE,
                    bottom_right: radius::NONE,
                },
                ..Default::default()
            },
            ..Default::default()
        });

    let actions = Row::new()
        .spacing(spacing::XXS)
        .push(
            button(icons::sized(icons::heart(), sizing::ICON_MD))
                .on_press(preview::Message::Showcase)
                .padding(spacing::XS)
                .style(styles::button::icon),
        )
        .push(
            button(icons::sized(icons::share(), sizing::ICON_MD))
                .on_press(preview::Message::Showcase)
                .padding(spacing::XS)
                .style(styles::button::icon),
        );

    card_shell(
        Column::new()
            .push(banner)
            .push(
                Column::new()
                    .spacing(spacing::SM)
                    .padding(spacing::MD)
                    .push(Text::new("Beautiful Landscape").size(typography::TITLE_SM))
                    .push(muted(
                        "Explore the stunning mountain landscapes with crystal clear \
                         lakes and breathtaking views that will leave you speechless.",
                    ))
                    .push(actions),
            )
            .into(),
    )
}

fn render_profile() -> Element<'static, preview::Message> {
    let avatar = Container::new(
        Text::new("JD")
            .size(typography::BODY)
            .color(palette::WHITE),
    )
    .width(Length::Fixed(sizing::ICON_LG + spacing::XS))
    .height(Length::Fixed(sizing::ICON_LG + spacing::XS))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::PRIMARY_600)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let identity = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(avatar)
        .push(
            Container::new(
                Column::new()
                    .push(Text::new("John Doe").size(typography::BODY_LG))
                    .push(muted("Senior Developer")),
            )
            .width(Length::Fill),
        )
        .push(
            button(icons::sized(icons::more_vertical(), sizing::ICON_MD))
                .on_press(preview::Message::Showcase)
                .padding(spacing::XS)
                .style(styles::button::icon),
        );

    let tags = Row::new()
        .spacing(spacing::XS)
        .push(tag("Rust"))
        .push(tag("Iced"))
        .push(tag("GUI"));

    let facts = Row::new()
        .spacing(spacing::MD)
        .push(fact(icons::map_pin(), "San Francisco"))
        .push(fact(icons::calendar(), "Joined 2023"));

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new("View Profile").size(typography::BODY))
                .on_press(preview::Message::Showcase)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::text),
        )
        .push(
            button(Text::new("Connect").size(typography::BODY))
                .on_press(preview::Message::Showcase)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::text),
        );

    card_shell(
        Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .push(identity)
            .push(muted(
                "Passionate about creating beautiful and functional user interfaces. \
                 Loves working with Rust and modern GUI toolkits.",
            ))
            .push(tags)
            .push(facts)
            .push(actions)
            .into(),
    )
}

fn tag(label: &'static str) -> Element<'static, preview::Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(|theme: &Theme| container::Style {
            background: Some(Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn fact(
    icon: iced::widget::Svg<'static>,
    label: &'static str,
) -> Element<'static, preview::Message> {
    Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(icons::sized(icon, sizing::ICON_SM))
        .push(Text::new(label).size(typography::CAPTION))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::code_panel;

    #[test]
    fn state_holds_one_preview_per_example() {
        let state = State::default();
        assert_eq!(state.previews.len(), EXAMPLES.len());
    }

    #[test]
    fn copy_event_carries_the_example_index() {
        let mut state = State::default();
        let event = update(
            &mut state,
            Message::Preview {
                index: 1,
                message: preview::Message::CodePanel(code_panel::Message::CopyPressed),
            },
        );
        match event {
            Event::Copy { text, target } => {
                assert_eq!(text, EXAMPLES[1].code);
                assert_eq!(target, CopyTarget::CardsPreview(1));
            }
            Event::None => panic!("expected a copy event"),
        }
    }

    #[test]
    fn every_example_renders() {
        for example in EXAMPLES {
            let _ = (example.render)();
        }
    }

    #[test]
    fn page_renders() {
        let state = State::default();
        let _ = view(&state);
    }
}
