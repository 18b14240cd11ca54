// SPDX-License-Identifier: MPL-2.0
//! Application header bar.
//!
//! Drawer toggle, app title, search box, theme toggle, and a button opening
//! the project repository in the default browser.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, text_input, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Where the repository button points.
pub const REPOSITORY_URL: &str = "https://codeberg.org/styledeck/styledeck";

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub theme_mode: ThemeMode,
    pub search: &'a str,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleDrawer,
    ToggleTheme,
    SearchChanged(String),
    OpenRepository,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ToggleDrawer,
    ToggleTheme,
    SearchChanged(String),
    OpenRepository,
}

/// Process a header message and return the corresponding event.
///
/// The header holds no state of its own; the mapping exists so the parent
/// wires callbacks uniformly across shell components.
pub fn update(message: Message) -> Event {
    match message {
        Message::ToggleDrawer => Event::ToggleDrawer,
        Message::ToggleTheme => Event::ToggleTheme,
        Message::SearchChanged(query) => Event::SearchChanged(query),
        Message::OpenRepository => Event::OpenRepository,
    }
}

/// Render the header bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let menu_button = button(icons::sized(icons::menu(), sizing::ICON_MD))
        .on_press(Message::ToggleDrawer)
        .padding(spacing::XS)
        .style(styles::button::icon);

    let title = Text::new("Styledeck Design System").size(typography::TITLE_SM);

    let search_box = text_input("Search\u{2026}", ctx.search)
        .on_input(Message::SearchChanged)
        .size(typography::BODY)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::SEARCH_WIDTH));

    // Shows the mode a click switches to
    let theme_icon = if ctx.theme_mode.is_dark() {
        icons::sun()
    } else {
        icons::moon()
    };
    let theme_button = button(icons::sized(theme_icon, sizing::ICON_MD))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XS)
        .style(styles::button::icon);

    let repo_button = button(icons::sized(icons::code(), sizing::ICON_MD))
        .on_press(Message::OpenRepository)
        .padding(spacing::XS)
        .style(styles::button::icon);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .push(menu_button)
        .push(Container::new(title).width(Length::Fill))
        .push(search_box)
        .push(theme_button)
        .push(repo_button);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .style(styles::container::toolbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_map_to_events() {
        assert!(matches!(update(Message::ToggleDrawer), Event::ToggleDrawer));
        assert!(matches!(update(Message::ToggleTheme), Event::ToggleTheme));
        assert!(matches!(
            update(Message::OpenRepository),
            Event::OpenRepository
        ));
        match update(Message::SearchChanged("card".into())) {
            Event::SearchChanged(query) => assert_eq!(query, "card"),
            _ => panic!("expected search event"),
        }
    }

    #[test]
    fn header_view_renders_in_both_modes() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let _ = view(ViewContext {
                theme_mode: mode,
                search: "",
            });
        }
    }
}
