// SPDX-License-Identifier: MPL-2.0
//! Placeholder page for routes that are not built out yet.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length, Theme};

/// Render the placeholder for a named section.
pub fn view<'a, Message: 'a>(label: &'a str) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(iced::alignment::Horizontal::Center)
        .push(icons::sized(icons::sparkles(), sizing::ICON_LG))
        .push(Text::new(format!("{label} - Coming Soon")).size(typography::TITLE_MD))
        .push(
            Text::new("This section is on the roadmap but has not been documented yet.")
                .size(typography::BODY)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_renders() {
        let _: Element<'_, ()> = view("Forms");
    }
}
