// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::drawer;
use crate::ui::header;
use crate::ui::notifications;
use crate::ui::pages;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Drawer(drawer::Message),
    Home(pages::home::Message),
    Colors(pages::colors::Message),
    Typography(pages::typography::Message),
    Spacing(pages::spacing::Message),
    Buttons(pages::buttons::Message),
    Cards(pages::cards::Message),
    Notification(notifications::Message),
    /// A clipboard write finished. `Ok` carries the text that was written.
    CopyCompleted {
        target: pages::CopyTarget,
        result: Result<String, Error>,
    },
    /// The window was resized; drives the responsive drawer variant.
    WindowResized(iced::Size),
    /// Escape pressed while the overlay drawer was open.
    EscapePressed,
    /// Periodic tick for copy-flash reset and toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional route path to open on startup (e.g. `/colors`).
    pub start_path: Option<String>,
    /// Optional theme override (`light` or `dark`).
    pub theme: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
