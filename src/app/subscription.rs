// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Listeners are scoped to the state that needs them: window resizes are
//! always tracked, the Escape listener exists only while the overlay drawer
//! is open, and the tick runs only while a toast or copy flash is live.

use super::{App, Message};
use crate::ui::drawer::DisplayVariant;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

pub fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = vec![window_resizes()];

    if app.drawer.open && app.drawer_variant() == DisplayVariant::Overlay {
        subscriptions.push(escape_key());
    }

    if app.notifications.has_notifications() || app.pages.has_active_flash() {
        subscriptions.push(tick());
    }

    Subscription::batch(subscriptions)
}

/// Tracks window resizes to drive the responsive drawer variant.
fn window_resizes() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(window::Event::Resized(size)) = event {
            Some(Message::WindowResized(size))
        } else {
            None
        }
    })
}

/// Escape dismisses the overlay drawer.
fn escape_key() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) = event
        {
            Some(Message::EscapePressed)
        } else {
            None
        }
    })
}

/// Periodic tick for copy-flash reset and toast auto-dismiss.
fn tick() -> Subscription<Message> {
    time::every(Duration::from_millis(100)).map(Message::Tick)
}
