// SPDX-License-Identifier: MPL-2.0
//! Tabbed component preview.
//!
//! Switches between a live rendering of a UI pattern and its source snippet.
//! The live content is built by the page and passed in already mapped to
//! this module's [`Message`].

use crate::ui::code_panel;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length, Theme};
use std::time::Instant;

/// The two panes of a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Preview,
    Code,
}

/// Local state: active tab plus the embedded code panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    pub active_tab: Tab,
    pub code_panel: code_panel::State,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, now: Instant) {
        self.code_panel.tick(now);
    }
}

/// Contextual data needed to render a preview.
pub struct ViewContext<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub code: &'a str,
    pub state: &'a State,
    /// The live rendering shown on the Preview tab.
    pub content: Element<'a, Message>,
}

/// Messages emitted by a preview.
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    CodePanel(code_panel::Message),
    /// Interactions inside the live preview are showcase-only.
    Showcase,
}

/// Events propagated to the parent.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    CopyRequested(String),
}

/// Process a preview message and return the corresponding event.
pub fn update(state: &mut State, message: Message, code: &str) -> Event {
    match message {
        Message::TabSelected(tab) => {
            state.active_tab = tab;
            Event::None
        }
        Message::CodePanel(message) => match code_panel::update(message, code) {
            code_panel::Event::CopyRequested(text) => Event::CopyRequested(text),
        },
        Message::Showcase => Event::None,
    }
}

/// Render the preview block: title, optional description, tab bar, pane.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut block = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.title).size(typography::TITLE_SM));

    if let Some(description) = ctx.description {
        block = block.push(
            Text::new(description)
                .size(typography::BODY)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        );
    }

    let tabs = Row::new()
        .spacing(spacing::XXS)
        .push(tab_button("Preview", Tab::Preview, ctx.state.active_tab))
        .push(tab_button("Code", Tab::Code, ctx.state.active_tab));

    let pane: Element<'a, Message> = match ctx.state.active_tab {
        Tab::Preview => Container::new(ctx.content)
            .width(Length::Fill)
            .padding(spacing::LG)
            .center_x(Length::Fill)
            .into(),
        Tab::Code => code_panel::view(code_panel::ViewContext {
            title: None,
            code: ctx.code,
            state: &ctx.state.code_panel,
        })
        .map(Message::CodePanel),
    };

    let framed = Container::new(
        Column::new()
            .push(Container::new(tabs).padding(spacing::XS).width(Length::Fill))
            .push(pane),
    )
    .width(Length::Fill)
    .style(styles::container::bordered);

    block.push(framed).into()
}

fn tab_button<'a>(label: &'a str, tab: Tab, active: Tab) -> Element<'a, Message> {
    let styled = if tab == active {
        button(Text::new(label).size(typography::BODY)).style(styles::button::selected)
    } else {
        button(Text::new(label).size(typography::BODY)).style(styles::button::text)
    };

    styled
        .on_press(Message::TabSelected(tab))
        .padding([spacing::XXS, spacing::SM])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_selection_switches_panes() {
        let mut state = State::new();
        assert_eq!(state.active_tab, Tab::Preview);

        let event = update(&mut state, Message::TabSelected(Tab::Code), "");
        assert!(matches!(event, Event::None));
        assert_eq!(state.active_tab, Tab::Code);

        update(&mut state, Message::TabSelected(Tab::Preview), "");
        assert_eq!(state.active_tab, Tab::Preview);
    }

    #[test]
    fn copy_bubbles_up_with_the_snippet() {
        let mut state = State::new();
        let event = update(
            &mut state,
            Message::CodePanel(code_panel::Message::CopyPressed),
            "button(\"Primary\")",
        );
        match event {
            Event::CopyRequested(text) => assert_eq!(text, "button(\"Primary\")"),
            Event::None => panic!("expected a copy request"),
        }
    }

    #[test]
    fn showcase_interactions_are_inert() {
        let mut state = State::new();
        let event = update(&mut state, Message::Showcase, "");
        assert!(matches!(event, Event::None));
        assert_eq!(state.active_tab, Tab::Preview);
    }
}
