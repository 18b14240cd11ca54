// SPDX-License-Identifier: MPL-2.0
//! Read-only code sample with a copy-to-clipboard affordance.
//!
//! The panel shows a title strip with a copy button above a monospaced code
//! body. A successful copy flips the button into a "copied" state for
//! [`COPY_FLASH`] and raises a toast; the flash is cleared by the shared tick.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{
    alignment::Vertical,
    font::{self, Font},
    Element, Length, Theme,
};
use std::time::{Duration, Instant};

/// How long the "copied" visual state lasts.
pub const COPY_FLASH: Duration = Duration::from_secs(2);

/// Local state: the copy-flash timestamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    copied_at: Option<Instant>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a successful copy at `now`.
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// Clears the flash once [`COPY_FLASH`] has elapsed at `now`.
    pub fn tick(&mut self, now: Instant) {
        if let Some(copied_at) = self.copied_at {
            if now.saturating_duration_since(copied_at) >= COPY_FLASH {
                self.copied_at = None;
            }
        }
    }

    /// Whether the "copied" state is currently showing.
    #[must_use]
    pub fn is_flashing(&self) -> bool {
        self.copied_at.is_some()
    }
}

/// Contextual data needed to render a code panel.
pub struct ViewContext<'a> {
    pub title: Option<&'a str>,
    pub code: &'a str,
    pub state: &'a State,
}

/// Messages emitted by the code panel.
#[derive(Debug, Clone)]
pub enum Message {
    CopyPressed,
}

/// Events propagated to the parent.
#[derive(Debug, Clone)]
pub enum Event {
    /// The parent should write the payload to the clipboard.
    CopyRequested(String),
}

/// Process a code panel message. A copy press always requests exactly one
/// write; repeated presses simply re-request (last click wins).
pub fn update(message: Message, code: &str) -> Event {
    match message {
        Message::CopyPressed => Event::CopyRequested(code.to_owned()),
    }
}

/// Render the code panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let copy_button = if ctx.state.is_flashing() {
        button(icons::tinted(
            icons::sized(icons::checkmark(), sizing::ICON_SM),
            palette::SUCCESS_500,
        ))
        .padding(spacing::XXS)
        .style(styles::button::icon)
    } else {
        button(icons::sized(icons::copy(), sizing::ICON_SM))
            .on_press(Message::CopyPressed)
            .padding(spacing::XXS)
            .style(styles::button::icon)
    };

    let header_label = ctx.title.unwrap_or("Source");
    let header = Container::new(
        Row::new()
            .align_y(Vertical::Center)
            .push(
                Container::new(
                    Text::new(header_label)
                        .size(typography::CAPTION)
                        .style(|theme: &Theme| iced::widget::text::Style {
                            color: Some(theme.extended_palette().background.weak.text),
                        }),
                )
                .width(Length::Fill),
            )
            .push(copy_button),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::SM])
    .style(styles::container::code_header);

    let code_text = Text::new(ctx.code)
        .size(typography::CODE)
        .font(Font {
            family: font::Family::Monospace,
            ..Font::DEFAULT
        })
        .line_height(1.5);

    let body = Container::new(scrollable(
        Container::new(code_text).padding(spacing::SM).width(Length::Fill),
    ))
    .width(Length::Fill)
    .style(styles::container::code_body);

    Container::new(Column::new().push(header).push(body))
        .width(Length::Fill)
        .style(styles::container::bordered)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_press_requests_the_code() {
        let event = update(Message::CopyPressed, "let x = 1;");
        match event {
            Event::CopyRequested(text) => assert_eq!(text, "let x = 1;"),
        }
    }

    #[test]
    fn flash_is_set_immediately_and_cleared_after_delay() {
        let mut state = State::new();
        assert!(!state.is_flashing());

        let start = Instant::now();
        state.mark_copied(start);
        assert!(state.is_flashing());

        // Just under the window: still flashing
        state.tick(start + COPY_FLASH - Duration::from_millis(1));
        assert!(state.is_flashing());

        // Window elapsed: cleared
        state.tick(start + COPY_FLASH);
        assert!(!state.is_flashing());
    }

    #[test]
    fn repeated_copy_restarts_the_flash() {
        let mut state = State::new();
        let start = Instant::now();
        state.mark_copied(start);

        let second = start + Duration::from_secs(1);
        state.mark_copied(second);

        // The first window has elapsed but the second has not
        state.tick(start + COPY_FLASH);
        assert!(state.is_flashing());
        state.tick(second + COPY_FLASH);
        assert!(!state.is_flashing());
    }

    #[test]
    fn view_renders_in_both_flash_states() {
        let idle = State::new();
        let _ = view(ViewContext {
            title: Some("colors.rs"),
            code: "fn main() {}",
            state: &idle,
        });

        let mut flashing = State::new();
        flashing.mark_copied(Instant::now());
        let _ = view(ViewContext {
            title: None,
            code: "fn main() {}",
            state: &flashing,
        });
    }
}
