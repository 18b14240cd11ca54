// SPDX-License-Identifier: MPL-2.0
//! Buttons page: the documented button system as live, tabbed previews.

use crate::ui::design_tokens::{layout, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::pages::CopyTarget;
use crate::ui::preview;
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::{alignment::Vertical, Background, Border, Element, Theme};

/// One showcase section.
pub struct Example {
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
    pub render: fn() -> Element<'static, preview::Message>,
}

pub static EXAMPLES: &[Example] = &[
    Example {
        title: "Primary Buttons",
        description: "Used for primary actions and main call-to-actions.",
        code: r#"button(text("Primary")).style(styles::button::primary);
button(labeled(icons::plus(), "Add Item"))
    .style(styles::button::primary);
button(labeled(icons::download(), "Download"))
    .style(styles::button::primary);
// Omitting `on_press` renders the disabled state
button(text("Disabled")).style(styles::button::primary);"#,
        render: render_primary,
    },
    Example {
        title: "Secondary Buttons",
        description: "Used for secondary actions and alternative choices.",
        code: r#"button(text("Secondary")).style(styles::button::outlined);
button(labeled(icons::pencil(), "Edit"))
    .style(styles::button::outlined);
button(labeled(icons::share(), "Share"))
    .style(styles::button::outlined);
button(text("Disabled")).style(styles::button::outlined);"#,
        render: render_outlined,
    },
    Example {
        title: "Text Buttons",
        description: "Used for subtle actions and navigation.",
        code: r#"button(text("Text")).style(styles::button::text);
button(labeled(icons::heart(), "Like"))
    .style(styles::button::text);
button(labeled(icons::trash(), "Delete"))
    .style(styles::button::danger_text);
button(text("Disabled")).style(styles::button::text);"#,
        render: render_text,
    },
    Example {
        title: "Button Sizes",
        description: "Different sizes for various use cases.",
        code: r#"button(text("Small").size(12)).padding([4.0, 12.0]);
button(text("Medium").size(14)).padding([8.0, 16.0]);
button(text("Large").size(16)).padding([12.0, 24.0]);"#,
        render: render_sizes,
    },
    Example {
        title: "Icon Buttons",
        description: "Compact buttons for actions with clear icons.",
        code: r#"button(icons::sized(icons::heart(), sizing::ICON_MD))
    .style(styles::button::icon);
button(icons::tinted(icons::share(), palette::PRIMARY_600))
    .style(styles::button::icon);
button(icons::tinted(icons::trash(), palette::ERROR_500))
    .style(styles::button::icon);
button(icons::sized(icons::pencil(), sizing::ICON_MD)); // disabled"#,
        render: render_icons,
    },
    Example {
        title: "Floating Action Buttons",
        description: "Prominent buttons for primary actions.",
        code: r#"button(icons::sized(icons::plus(), sizing::ICON_MD))
    .style(fab)
    .padding(spacing::MD);
button(labeled(icons::plus(), "Create New"))
    .style(fab)
    .padding([spacing::SM, spacing::LG]);"#,
        render: render_fabs,
    },
    Example {
        title: "Button Groups",
        description: "Group related buttons together.",
        code: r#"Row::new()
    .spacing(2.0)
    .push(button(text("One")).style(styles::button::primary))
    .push(button(text("Two")).style(styles::button::primary))
    .push(button(text("Three")).style(styles::button::primary));"#,
        render: render_groups,
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

/// Messages emitted by the buttons page.
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
                    target: CopyTarget::ButtonsPreview(index),
                },
                preview::Event::None => Event::None,
            }
        }
    }
}

/// Render the buttons page.
pub fn view<'a>(state: &'a State) -> Element<'a, Message> {
    let mut page = Column::new()
        .spacing(spacing::XL)
        .push(Text::new("Buttons").size(typography::TITLE_LG))
        .push(
            iced::widget::Container::new(
                Text::new(
                    "Buttons enable users to take actions and make choices with a single \
                     tap or click. They communicate what action will occur when the user \
                     touches them.",
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

/// Icon + label row used by several showcase buttons.
fn labeled(icon: iced::widget::Svg<'static>, label: &'static str) -> Element<'static, preview::Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(icon, sizing::ICON_SM))
        .push(Text::new(label).size(typography::BODY))
        .into()
}

fn render_primary() -> Element<'static, preview::Message> {
    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            button(Text::new("Primary").size(typography::BODY))
                .on_press(preview::Message::Showcase)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        )
        .push(
            button(labeled(icons::plus(), "Add Item"))
                .on_press(preview::Message::Showcase)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        )
        .push(
            button(labeled(icons::download(), "Download"))
                .on_press(preview::Message::Showcase)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        )
        .push(
            button(Text::new("Disabled").size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        )
        .into()
}

fn render_outlined() -> Element<'static, preview::Message> {
    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            button(Text::new("Secondary").size(typography::BODY))
                .on_press(preview::Message::Showcase)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::outlined),
        )
        .push(
            button(labeled(icons::pencil(), "Edit"))
                .on_press(preview::Message::Showcase)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::outlined),
        )
        .push(
            button(labeled(icons::share(), "Share"))
                .on_press(preview::Message::Showcase)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::outlined),
        )
        .push(
            button(Text::new("Disabled").size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::outlined),
        )
        .into()
}

fn render_text() -> Element<'static, preview::Message> {
    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            button(Text::new("Text").size(typography::BODY))
                .on_press(preview::Message::Showcase)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::text),
        )
        .push(
            button(labeled(icons::heart(), "Like"))
                .on_press(preview::Message::Showcase)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::text),
        )
        .push(
            button(labeled(icons::trash(), "Delete"))
                .on_press(preview::Message::Showcase)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::danger_text),
        )
        .push(
            button(Text::new("Disabled").size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::text),
        )
        .into()
}

fn render_sizes() -> Element<'static, preview::Message> {
    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            button(Text::new("Small").size(typography::CAPTION))
                .on_press(preview::Message::Showcase)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::primary),
        )
        .push(
            button(Text::new("Medium").size(typography::BODY))
                .on_press(preview::Message::Showcase)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        )
        .push(
            button(Text::new("Large").size(typography::BODY_LG))
                .on_press(preview::Message::Showcase)
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary),
        )
        .into()
}

fn render_icons() -> Element<'static, preview::Message> {
    use crate::ui::design_tokens::palette;

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            button(icons::sized(icons::heart(), sizing::ICON_MD))
                .on_press(preview::Message::Showcase)
                .padding(spacing::XS)
                .style(styles::button::icon),
        )
        .push(
            button(icons::tinted(
                icons::sized(icons::share(), sizing::ICON_MD),
                palette::PRIMARY_600,
            ))
            .on_press(preview::Message::Showcase)
            .padding(spacing::XS)
            .style(styles::button::icon),
        )
        .push(
            button(icons::tinted(
                icons::sized(icons::trash(), sizing::ICON_MD),
                palette::ERROR_500,
            ))
            .on_press(preview::Message::Showcase)
            .padding(spacing::XS)
            .style(styles::button::icon),
        )
        .push(
            button(icons::sized(icons::pencil(), sizing::ICON_MD))
                .padding(spacing::XS)
                .style(styles::button::icon),
        )
        .into()
}

fn render_fabs() -> Element<'static, preview::Message> {
    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            button(icons::sized(icons::plus(), sizing::ICON_MD))
                .on_press(preview::Message::Showcase)
                .padding(spacing::MD)
                .style(fab),
        )
        .push(
            button(icons::sized(icons::pencil(), sizing::ICON_MD))
                .on_press(preview::Message::Showcase)
                .padding(spacing::MD)
                .style(fab),
        )
        .push(
            button(labeled(icons::plus(), "Create New"))
                .on_press(preview::Message::Showcase)
                .padding([spacing::SM, spacing::LG])
                .style(fab),
        )
        .push(
            button(icons::sized(icons::plus(), sizing::ICON_SM))
                .on_press(preview::Message::Showcase)
                .padding(spacing::XS)
                .style(fab),
        )
        .into()
}

fn render_groups() -> Element<'static, preview::Message> {
    let group = |labels: [&'static str; 3], style: fn(&Theme, button::Status) -> button::Style| {
        let mut row = Row::new().spacing(2.0);
        for label in labels {
            row = row.push(
                button(Text::new(label).size(typography::BODY))
                    .on_press(preview::Message::Showcase)
                    .padding([spacing::XS, spacing::MD])
                    .style(style),
            );
        }
        row
    };

    Column::new()
        .spacing(spacing::MD)
        .push(group(["One", "Two", "Three"], styles::button::primary))
        .push(group(["Left", "Center", "Right"], styles::button::outlined))
        .into()
}

/// Circular elevated button used by the FAB showcase.
fn fab(_theme: &Theme, status: button::Status) -> button::Style {
    use crate::ui::design_tokens::palette;

    let background = match status {
        button::Status::Hovered => palette::PRIMARY_700,
        _ => palette::PRIMARY_600,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        snap: true,
    }
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
                index: 2,
                message: preview::Message::CodePanel(code_panel::Message::CopyPressed),
            },
        );
        match event {
            Event::Copy { text, target } => {
                assert_eq!(text, EXAMPLES[2].code);
                assert_eq!(target, CopyTarget::ButtonsPreview(2));
            }
            Event::None => panic!("expected a copy event"),
        }
    }

    #[test]
    fn tab_switching_is_per_preview() {
        let mut state = State::default();
        update(
            &mut state,
            Message::Preview {
                index: 0,
                message: preview::Message::TabSelected(preview::Tab::Code),
            },
        );
        assert_eq!(state.previews[0].active_tab, preview::Tab::Code);
        assert_eq!(state.previews[1].active_tab, preview::Tab::Preview);
    }

    #[test]
    fn out_of_range_preview_is_inert() {
        let mut state = State::default();
        let event = update(
            &mut state,
            Message::Preview {
                index: 999,
                message: preview::Message::TabSelected(preview::Tab::Code),
            },
        );
        assert!(matches!(event, Event::None));
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
