// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the shell and pages.
//!
//! The `App` struct owns every piece of shared state (route, theme mode,
//! drawer, search text, page-local panels, toasts) and passes it down to
//! views as read-only context. All mutation flows back through [`Message`];
//! nothing is persisted across runs.

mod message;
mod route;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use route::Route;

use crate::config;
use crate::ui::drawer;
use crate::ui::notifications;
use crate::ui::pages;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    route: Route,
    theme_mode: ThemeMode,
    /// Live search text from the header; filters the drawer tree.
    search: String,
    /// Last observed window size; drives the responsive drawer variant.
    window_size: Size,
    drawer: drawer::State,
    pages: pages::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("theme_mode", &self.theme_mode)
            .field("drawer_open", &self.drawer.open)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            route: Route::Home,
            theme_mode: ThemeMode::default(),
            search: String::new(),
            window_size: Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
            drawer: drawer::State::new(),
            pages: pages::State::new(),
            notifications: notifications::Manager::new(),
        }
    }
}

/// Builds the window settings from the startup config.
fn window_settings(config: &config::Config) -> window::Settings {
    window::Settings {
        size: Size::new(config.window_width(), config.window_height()),
        min_size: Some(Size::new(480.0, 360.0)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let config = match config::load(flags.config_dir.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("falling back to default config: {err}");
            config::Config::default()
        }
    };
    let window = window_settings(&config);

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming them once (iced requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some((flags, config)));
    let boot = move || {
        let (flags, config) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags, &config)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from CLI flags and the startup config.
    fn new(flags: Flags, config: &config::Config) -> (Self, Task<Message>) {
        let mut app = App::default();

        app.theme_mode = match flags.theme.as_deref() {
            Some("light") => ThemeMode::Light,
            Some("dark") => ThemeMode::Dark,
            Some(other) => {
                tracing::warn!("unknown --theme value {other:?}, using config/system");
                config.initial_theme()
            }
            None => config.initial_theme(),
        };

        app.window_size = Size::new(config.window_width(), config.window_height());

        if let Some(path) = flags.start_path.as_deref() {
            match Route::from_path(path) {
                Some(route) => app.route = route,
                None => tracing::warn!("unknown start path {path:?}, opening home"),
            }
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Styledeck")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            route: self.route,
            theme_mode: self.theme_mode,
            search: &self.search,
            window_size: self.window_size,
            drawer: &self.drawer,
            pages: &self.pages,
            notifications: &self.notifications,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    /// The drawer variant for the current window width.
    pub(crate) fn drawer_variant(&self) -> drawer::DisplayVariant {
        drawer::variant_for(self.window_size.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::drawer::DisplayVariant;

    fn app_with(flags: Flags) -> App {
        App::new(flags, &config::Config::default()).0
    }

    #[test]
    fn default_app_opens_home() {
        let app = app_with(Flags::default());
        assert_eq!(app.route, Route::Home);
        assert!(app.drawer.open);
    }

    #[test]
    fn start_path_flag_selects_the_route() {
        let app = app_with(Flags {
            start_path: Some("/components/cards".into()),
            ..Flags::default()
        });
        assert_eq!(app.route, Route::Cards);
    }

    #[test]
    fn unknown_start_path_falls_back_to_home() {
        let app = app_with(Flags {
            start_path: Some("/bogus".into()),
            ..Flags::default()
        });
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    fn theme_flag_overrides_config() {
        let app = app_with(Flags {
            theme: Some("dark".into()),
            ..Flags::default()
        });
        assert_eq!(app.theme(), Theme::Dark);

        let app = app_with(Flags {
            theme: Some("light".into()),
            ..Flags::default()
        });
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn drawer_variant_follows_window_width() {
        let mut app = app_with(Flags::default());
        app.window_size = Size::new(640.0, 480.0);
        assert_eq!(app.drawer_variant(), DisplayVariant::Overlay);
        app.window_size = Size::new(1280.0, 800.0);
        assert_eq!(app.drawer_variant(), DisplayVariant::Pinned);
    }
}
