// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The single fallible side effect is the clipboard write: it runs off the
//! UI thread and reports back through [`Message::CopyCompleted`]. Everything
//! else is a pure state transition.

use super::{App, Message, Route};
use crate::error::Result;
use crate::ui::drawer::{self, DisplayVariant};
use crate::ui::header;
use crate::ui::notifications::Notification;
use crate::ui::pages::{self, CopyTarget};
use iced::Task;
use std::time::Instant;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Header(message) => match header::update(message) {
            header::Event::ToggleDrawer => {
                app.drawer.open = !app.drawer.open;
                Task::none()
            }
            header::Event::ToggleTheme => {
                app.theme_mode = app.theme_mode.toggled();
                Task::none()
            }
            header::Event::SearchChanged(query) => {
                app.search = query;
                Task::none()
            }
            header::Event::OpenRepository => {
                if let Err(err) = open::that(header::REPOSITORY_URL) {
                    tracing::error!("failed to open repository link: {err}");
                }
                Task::none()
            }
        },

        Message::Drawer(message) => {
            let variant = app.drawer_variant();
            match drawer::update(&mut app.drawer, message, variant) {
                drawer::Event::Navigate(path) => navigate(app, path),
                drawer::Event::None => {}
            }
            Task::none()
        }

        Message::Home(message) => {
            let pages::home::Event::Navigate(path) = pages::home::update(message);
            navigate(app, path);
            Task::none()
        }

        Message::Colors(message) => match pages::colors::update(message) {
            pages::colors::Event::Copy { text, target } => copy_to_clipboard(text, target),
            pages::colors::Event::None => Task::none(),
        },

        Message::Typography(message) => match pages::typography::update(message) {
            pages::typography::Event::Copy { text, target } => copy_to_clipboard(text, target),
            pages::typography::Event::None => Task::none(),
        },

        Message::Spacing(message) => match pages::spacing::update(message) {
            pages::spacing::Event::Copy { text, target } => copy_to_clipboard(text, target),
            pages::spacing::Event::None => Task::none(),
        },

        Message::Buttons(message) => {
            match pages::buttons::update(&mut app.pages.buttons, message) {
                pages::buttons::Event::Copy { text, target } => copy_to_clipboard(text, target),
                pages::buttons::Event::None => Task::none(),
            }
        }

        Message::Cards(message) => match pages::cards::update(&mut app.pages.cards, message) {
            pages::cards::Event::Copy { text, target } => copy_to_clipboard(text, target),
            pages::cards::Event::None => Task::none(),
        },

        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }

        Message::CopyCompleted { target, result } => {
            match result {
                Ok(text) => {
                    let now = Instant::now();
                    app.pages.mark_copied(target, now);
                    app.notifications.push(Notification::success(copy_toast(&text, target)));
                }
                Err(err) => {
                    // Single attempt, no retry, no error toast; the panel
                    // stays in its pre-attempt visual state.
                    tracing::warn!("clipboard write failed: {err}");
                }
            }
            Task::none()
        }

        Message::WindowResized(size) => {
            app.window_size = size;
            Task::none()
        }

        Message::EscapePressed => {
            if app.drawer.open && app.drawer_variant() == DisplayVariant::Overlay {
                app.drawer.open = false;
            }
            Task::none()
        }

        Message::Tick(now) => {
            app.notifications.tick(now);
            app.pages.tick(now);
            Task::none()
        }
    }
}

/// Switches the current route; paths come from the fixed nav tree, so a miss
/// is a programming error worth logging rather than surfacing.
fn navigate(app: &mut App, path: &str) {
    match Route::from_path(path) {
        Some(route) => app.route = route,
        None => tracing::error!("navigation requested for unknown path {path:?}"),
    }
}

/// Fire-and-forget clipboard write; completion reports through
/// [`Message::CopyCompleted`]. Last click wins.
fn copy_to_clipboard(text: String, target: CopyTarget) -> Task<Message> {
    Task::perform(write_clipboard(text), move |result| {
        Message::CopyCompleted { target, result }
    })
}

/// Writes `text` to the system clipboard, echoing it back on success.
async fn write_clipboard(text: String) -> Result<String> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(&text)?;
    Ok(text)
}

/// Toast copy for a successful write.
fn copy_toast(text: &str, target: CopyTarget) -> String {
    match target {
        CopyTarget::ColorSwatch => format!("{text} copied to clipboard"),
        _ => String::from("Code copied to clipboard!"),
    }
}
