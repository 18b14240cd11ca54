// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the shell (header, drawer, toast overlay) around the page for
//! the current route. The drawer variant is recomputed from the window size
//! on every render.

use super::{Message, Route};
use crate::ui::design_tokens::spacing;
use crate::ui::drawer::{self, DisplayVariant};
use crate::ui::header;
use crate::ui::notifications::{self, Toast};
use crate::ui::pages;
use crate::ui::theming::ThemeMode;
use iced::widget::{mouse_area, scrollable, Column, Container, Row, Stack};
use iced::{Element, Length, Size};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub route: Route,
    pub theme_mode: ThemeMode,
    pub search: &'a str,
    pub window_size: Size,
    pub drawer: &'a drawer::State,
    pub pages: &'a pages::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the full application frame.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let variant = drawer::variant_for(ctx.window_size.width);

    let header_bar = header::view(header::ViewContext {
        theme_mode: ctx.theme_mode,
        search: ctx.search,
    })
    .map(Message::Header);

    let page = page_content(&ctx);

    // Overlay mode suppresses background scrolling while the drawer is open.
    let suppress_scroll = variant == DisplayVariant::Overlay && ctx.drawer.open;
    let content: Element<'_, Message> = if suppress_scroll {
        Container::new(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .into()
    } else {
        scrollable(
            Container::new(page)
                .width(Length::Fill)
                .padding(spacing::LG),
        )
        .height(Length::Fill)
        .into()
    };

    let body: Element<'_, Message> = match (variant, ctx.drawer.open) {
        // Pinned: the drawer occupies layout space and pushes the content
        (DisplayVariant::Pinned, true) => {
            let panel = drawer::view(drawer::ViewContext {
                current_path: ctx.route.path(),
                state: ctx.drawer,
                variant,
                filter: ctx.search,
            })
            .map(Message::Drawer);

            Row::new().push(panel).push(content).into()
        }
        _ => content,
    };

    let frame = Column::new().push(header_bar).push(body);

    let mut layers = Stack::new().push(frame);

    // Overlay: the drawer floats above the frame with a scrim beside it
    if variant == DisplayVariant::Overlay && ctx.drawer.open {
        let panel = drawer::view(drawer::ViewContext {
            current_path: ctx.route.path(),
            state: ctx.drawer,
            variant,
            filter: ctx.search,
        })
        .map(Message::Drawer);

        let scrim = mouse_area(
            Container::new(iced::widget::Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(crate::ui::styles::container::scrim(
                    ctx.theme_mode.scheme().scrim,
                )),
        )
        .on_press(Message::Drawer(drawer::Message::Close));

        layers = layers.push(Row::new().push(panel).push(scrim));
    }

    layers = layers.push(Toast::view_overlay(ctx.notifications).map(Message::Notification));

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn page_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.route {
        Route::Home => pages::home::view().map(Message::Home),
        Route::Colors => pages::colors::view(&ctx.pages.colors).map(Message::Colors),
        Route::Typography => {
            pages::typography::view(&ctx.pages.typography).map(Message::Typography)
        }
        Route::Spacing => pages::spacing::view(&ctx.pages.spacing).map(Message::Spacing),
        Route::Buttons => pages::buttons::view(&ctx.pages.buttons).map(Message::Buttons),
        Route::Cards => pages::cards::view(&ctx.pages.cards).map(Message::Cards),
        Route::ComingSoon { label, .. } => pages::coming_soon::view(label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Manager;

    fn base_ctx<'a>(
        drawer: &'a drawer::State,
        pages: &'a pages::State,
        notifications: &'a Manager,
        width: f32,
    ) -> ViewContext<'a> {
        ViewContext {
            route: Route::Colors,
            theme_mode: ThemeMode::Light,
            search: "",
            window_size: Size::new(width, 720.0),
            drawer,
            pages,
            notifications,
        }
    }

    #[test]
    fn view_renders_pinned_and_overlay_frames() {
        let drawer_state = drawer::State::new();
        let pages_state = pages::State::new();
        let notifications = Manager::new();

        let _ = view(base_ctx(&drawer_state, &pages_state, &notifications, 1280.0));
        let _ = view(base_ctx(&drawer_state, &pages_state, &notifications, 600.0));
    }

    #[test]
    fn view_renders_every_route() {
        let drawer_state = drawer::State::new();
        let pages_state = pages::State::new();
        let notifications = Manager::new();

        for path in [
            "/",
            "/colors",
            "/typography",
            "/spacing",
            "/components/buttons",
            "/components/cards",
            "/resources/animation",
        ] {
            let mut ctx = base_ctx(&drawer_state, &pages_state, &notifications, 1280.0);
            ctx.route = Route::from_path(path).unwrap();
            let _ = view(ctx);
        }
    }
}
