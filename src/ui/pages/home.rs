// SPDX-License-Identifier: MPL-2.0
//! Home page: hero, feature cards, quick start, release notes.

use crate::ui::design_tokens::{layout, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::nav::IconFn;
use crate::ui::styles;
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{
    alignment::Vertical,
    Background, Border, Element, Length, Theme,
};

struct Feature {
    icon: IconFn,
    title: &'static str,
    description: &'static str,
    path: &'static str,
}

static FEATURES: [Feature; 4] = [
    Feature {
        icon: icons::palette,
        title: "Design Tokens",
        description: "Consistent colors, typography, and spacing system",
        path: "/colors",
    },
    Feature {
        icon: icons::code,
        title: "Components",
        description: "Reusable UI components with live examples",
        path: "/components/buttons",
    },
    Feature {
        icon: icons::monitor,
        title: "Responsive",
        description: "Adaptive layout from compact to widescreen windows",
        path: "/patterns/layout",
    },
    Feature {
        icon: icons::person,
        title: "Accessible",
        description: "Readable contrast and keyboard-friendly patterns",
        path: "/resources/icons",
    },
];

/// Messages emitted by the home page.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(&'static str),
}

/// Events propagated to the parent.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(&'static str),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(path) => Event::Navigate(path),
    }
}

/// Render the home page.
pub fn view<'a>() -> Element<'a, Message> {
    let hero = Column::new()
        .spacing(spacing::SM)
        .push(Text::new("Styledeck Design System").size(typography::TITLE_LG))
        .push(
            Text::new("The single source of truth for our visual design language")
                .size(typography::TITLE_SM)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        )
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(version_chip("v0.1.0", true))
                .push(version_chip("Rust", false))
                .push(version_chip("Iced", false)),
        )
        .push(
            Container::new(
                Text::new(
                    "Our design system provides a comprehensive set of design guidelines, \
                     reusable components, and development resources to help teams create \
                     consistent, accessible, and beautiful user experiences.",
                )
                .size(typography::BODY_LG),
            )
            .max_width(layout::PROSE_WIDTH),
        );

    let mut features = Row::new().spacing(spacing::MD);
    for feature in &FEATURES {
        features = features.push(feature_card(feature));
    }

    let quick_start = Column::new()
        .spacing(spacing::SM)
        .push(Text::new("Quick Start").size(typography::TITLE_MD))
        .push(
            Text::new("Get started by browsing the token catalog or the component gallery:")
                .size(typography::BODY_LG),
        )
        .push(
            Row::new()
                .spacing(spacing::MD)
                .push(
                    button(Text::new("Browse Design Tokens").size(typography::BODY_LG))
                        .on_press(Message::Navigate("/colors"))
                        .padding([spacing::SM, spacing::LG])
                        .style(styles::button::primary),
                )
                .push(
                    button(Text::new("View Components").size(typography::BODY_LG))
                        .on_press(Message::Navigate("/components/buttons"))
                        .padding([spacing::SM, spacing::LG])
                        .style(styles::button::outlined),
                ),
        );

    let updates = Column::new()
        .spacing(spacing::SM)
        .push(Text::new("Recent Updates").size(typography::TITLE_MD))
        .push(
            Container::new(
                Column::new()
                    .spacing(spacing::XS)
                    .push(
                        Row::new()
                            .spacing(spacing::XS)
                            .align_y(Vertical::Center)
                            .push(icons::tinted(
                                icons::sized(icons::refresh(), sizing::ICON_MD),
                                palette::PRIMARY_600,
                            ))
                            .push(Text::new("Version 0.1.0 Released").size(typography::BODY_LG))
                            .push(version_chip("Latest", true)),
                    )
                    .push(
                        Text::new(
                            "Initial release with the complete component gallery, token \
                             catalog, and documentation shell.",
                        )
                        .size(typography::BODY)
                        .style(|theme: &Theme| iced::widget::text::Style {
                            color: Some(theme.extended_palette().background.weak.text),
                        }),
                    ),
            )
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::card),
        );

    Column::new()
        .spacing(spacing::XL)
        .push(hero)
        .push(features)
        .push(quick_start)
        .push(updates)
        .into()
}

fn feature_card<'a>(feature: &Feature) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .push(icons::tinted(
            icons::sized((feature.icon)(), sizing::ICON_LG),
            palette::PRIMARY_600,
        ))
        .push(Text::new(feature.title).size(typography::BODY_LG))
        .push(
            Text::new(feature.description)
                .size(typography::BODY)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        );

    button(Container::new(content).padding(spacing::MD).width(Length::Fill))
        .on_press(Message::Navigate(feature.path))
        .padding(0.0)
        .width(Length::FillPortion(1))
        .style(feature_card_style)
        .into()
}

/// Card-shaped button style for the clickable feature tiles.
fn feature_card_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette_ext.primary.base.color,
        _ => palette_ext.background.weak.color,
    };

    button::Style {
        background: Some(Background::Color(palette_ext.background.base.color)),
        text_color: palette_ext.background.base.text,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: crate::ui::design_tokens::shadow::SM,
        snap: true,
    }
}

fn version_chip<'a>(label: &'a str, filled: bool) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(move |theme: &Theme| {
            let brand = theme.extended_palette().primary.base.color;
            if filled {
                container::Style {
                    background: Some(Background::Color(brand)),
                    text_color: Some(palette::WHITE),
                    border: Border {
                        radius: radius::FULL.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            } else {
                container::Style {
                    text_color: Some(brand),
                    border: Border {
                        color: brand,
                        width: 1.0,
                        radius: radius::FULL.into(),
                    },
                    ..Default::default()
                }
            }
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::nav;

    #[test]
    fn navigation_passes_through() {
        let event = update(Message::Navigate("/colors"));
        assert!(matches!(event, Event::Navigate("/colors")));
    }

    #[test]
    fn feature_paths_exist_in_the_nav_tree() {
        for feature in &FEATURES {
            assert_eq!(
                nav::active_leaf_count(nav::NAVIGATION, feature.path),
                1,
                "{}",
                feature.path
            );
        }
    }

    #[test]
    fn page_renders() {
        let _ = view();
    }
}
