// SPDX-License-Identifier: MPL-2.0
//! Responsive navigation drawer.
//!
//! The drawer renders the navigation tree in one of two variants selected by
//! window width: below [`layout::DRAWER_BREAKPOINT`] it floats above the
//! content (overlay), at or above it it occupies layout space (pinned). The
//! variant is recomputed from the width on every render and never stored;
//! crossing the breakpoint swaps it immediately while the open flag and
//! expanded set survive the swap.

use crate::ui::design_tokens::{layout, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::nav::{self, NavItem};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment::Vertical, Border, Element, Length, Theme};
use std::collections::HashSet;

/// How the drawer participates in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayVariant {
    /// Floats above the content with a scrim; dismisses on navigation.
    Overlay,
    /// Occupies permanent layout space next to the content.
    Pinned,
}

/// Pure variant selection from the window width.
#[must_use]
pub fn variant_for(width: f32) -> DisplayVariant {
    if width < layout::DRAWER_BREAKPOINT {
        DisplayVariant::Overlay
    } else {
        DisplayVariant::Pinned
    }
}

/// Drawer state: the open flag and the set of expanded branch titles.
///
/// Neither survives a restart.
#[derive(Debug, Clone)]
pub struct State {
    pub open: bool,
    expanded: HashSet<&'static str>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Starts open (meaningful in the pinned variant) with the default
    /// branches expanded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            open: true,
            expanded: nav::DEFAULT_EXPANDED.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn is_expanded(&self, title: &str) -> bool {
        self.expanded.contains(title)
    }

    /// Flips a single branch; siblings and parents are untouched.
    pub fn toggle(&mut self, title: &'static str) {
        if !self.expanded.remove(title) {
            self.expanded.insert(title);
        }
    }
}

/// Contextual data needed to render the drawer.
pub struct ViewContext<'a> {
    pub current_path: &'a str,
    pub state: &'a State,
    pub variant: DisplayVariant,
    /// Search text from the header; filters leaves by title.
    pub filter: &'a str,
}

/// Messages emitted by the drawer.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleBranch(&'static str),
    Navigate(&'static str),
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(&'static str),
}

/// Process a drawer message and return the corresponding event.
///
/// Leaf navigation in the overlay variant also closes the drawer; in the
/// pinned variant the open flag is left unchanged.
pub fn update(state: &mut State, message: Message, variant: DisplayVariant) -> Event {
    match message {
        Message::ToggleBranch(title) => {
            state.toggle(title);
            Event::None
        }
        Message::Navigate(path) => {
            if variant == DisplayVariant::Overlay {
                state.open = false;
            }
            Event::Navigate(path)
        }
        Message::Close => {
            state.open = false;
            Event::None
        }
    }
}

/// Render the drawer panel (without scrim; the shell layers that in overlay
/// mode).
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new();

    // The overlay variant gets its own header with an explicit close button;
    // the pinned variant sits under the app header.
    if ctx.variant == DisplayVariant::Overlay {
        let close_button = button(icons::sized(icons::cross(), sizing::ICON_MD))
            .on_press(Message::Close)
            .padding(spacing::XS)
            .style(styles::button::icon);

        let header = Row::new()
            .align_y(Vertical::Center)
            .padding(spacing::MD)
            .push(
                Container::new(Text::new("Navigation").size(typography::TITLE_SM))
                    .width(Length::Fill),
            )
            .push(close_button);

        content = content.push(header);
    }

    let filter = ctx.filter.trim();
    let mut list = Column::new().spacing(spacing::XXS);
    for item in nav::NAVIGATION {
        if let Some(element) = build_item(&ctx, item, 0, filter) {
            list = list.push(element);
        }
    }

    content = content.push(
        scrollable(Container::new(list).padding([spacing::MD, spacing::XS]))
            .height(Length::Fill),
    );

    Container::new(content)
        .width(Length::Fixed(sizing::DRAWER_WIDTH))
        .height(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

/// Case-insensitive leaf filter; a branch stays visible while any of its
/// leaves match.
fn matches_filter(item: &NavItem, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    if item.is_branch() {
        item.children.iter().any(|c| matches_filter(c, filter))
    } else {
        item.title.to_lowercase().contains(&filter.to_lowercase())
    }
}

fn build_item<'a>(
    ctx: &ViewContext<'a>,
    item: &'static NavItem,
    level: u16,
    filter: &str,
) -> Option<Element<'a, Message>> {
    if !matches_filter(item, filter) {
        return None;
    }

    let indent = f32::from(level) * spacing::MD;

    if item.is_branch() {
        // A live filter forces matching branches open so results are visible.
        let expanded = ctx.state.is_expanded(item.title) || !filter.is_empty();

        let chevron = if expanded {
            icons::chevron_up()
        } else {
            icons::chevron_down()
        };

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(icons::sized((item.icon)(), sizing::ICON_SM))
            .push(Container::new(Text::new(item.title).size(typography::BODY)).width(Length::Fill))
            .push(icons::sized(chevron, sizing::ICON_SM));

        let header = button(row)
            .on_press(Message::ToggleBranch(item.title))
            .padding([spacing::XS, spacing::SM])
            .width(Length::Fill)
            .style(nav_item_style);

        let mut branch = Column::new().push(
            Container::new(header).padding(iced::Padding::ZERO.left(indent)),
        );

        if expanded {
            for child in item.children {
                if let Some(element) = build_item(ctx, child, level + 1, filter) {
                    branch = branch.push(element);
                }
            }
        }

        Some(branch.into())
    } else {
        let active = item.is_active(ctx.current_path);

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(icons::sized((item.icon)(), sizing::ICON_SM))
            .push(Text::new(item.title).size(typography::BODY));

        let mut leaf = button(row)
            .padding([spacing::XS, spacing::SM])
            .width(Length::Fill)
            .style(if active {
                styles::button::selected
            } else {
                nav_item_style
            });

        if let Some(path) = item.path {
            leaf = leaf.on_press(Message::Navigate(path));
        }

        Some(
            Container::new(leaf)
                .padding(iced::Padding::ZERO.left(indent))
                .into(),
        )
    }
}

/// Style function for inactive nav items.
fn nav_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_switches_exactly_at_the_breakpoint() {
        assert_eq!(variant_for(320.0), DisplayVariant::Overlay);
        assert_eq!(
            variant_for(layout::DRAWER_BREAKPOINT - 1.0),
            DisplayVariant::Overlay
        );
        assert_eq!(
            variant_for(layout::DRAWER_BREAKPOINT),
            DisplayVariant::Pinned
        );
        assert_eq!(variant_for(1920.0), DisplayVariant::Pinned);
    }

    #[test]
    fn default_branches_start_expanded() {
        let state = State::new();
        assert!(state.is_expanded("Design Tokens"));
        assert!(state.is_expanded("Components"));
        assert!(!state.is_expanded("Patterns"));
    }

    #[test]
    fn toggling_a_branch_twice_round_trips() {
        let mut state = State::new();
        let before: Vec<&str> = ["Design Tokens", "Components", "Patterns", "Resources"]
            .into_iter()
            .filter(|t| state.is_expanded(t))
            .collect();

        state.toggle("Patterns");
        assert!(state.is_expanded("Patterns"));
        state.toggle("Patterns");

        let after: Vec<&str> = ["Design Tokens", "Components", "Patterns", "Resources"]
            .into_iter()
            .filter(|t| state.is_expanded(t))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn toggling_leaves_siblings_untouched() {
        let mut state = State::new();
        state.toggle("Design Tokens");
        assert!(!state.is_expanded("Design Tokens"));
        assert!(state.is_expanded("Components"));
    }

    #[test]
    fn overlay_navigation_closes_the_drawer() {
        let mut state = State::new();
        state.open = true;

        let event = update(
            &mut state,
            Message::Navigate("/colors"),
            DisplayVariant::Overlay,
        );
        assert!(matches!(event, Event::Navigate("/colors")));
        assert!(!state.open);
    }

    #[test]
    fn pinned_navigation_leaves_the_drawer_open() {
        let mut state = State::new();
        state.open = true;

        let event = update(
            &mut state,
            Message::Navigate("/colors"),
            DisplayVariant::Pinned,
        );
        assert!(matches!(event, Event::Navigate("/colors")));
        assert!(state.open);
    }

    #[test]
    fn close_message_closes_in_any_variant() {
        for variant in [DisplayVariant::Overlay, DisplayVariant::Pinned] {
            let mut state = State::new();
            state.open = true;
            let event = update(&mut state, Message::Close, variant);
            assert!(matches!(event, Event::None));
            assert!(!state.open);
        }
    }

    #[test]
    fn crossing_the_breakpoint_keeps_the_open_flag() {
        // The variant is a pure function of width; nothing in the state
        // machine touches `open` when the width changes.
        let state = State::new();
        assert!(state.open);
        assert_eq!(variant_for(800.0), DisplayVariant::Overlay);
        assert!(state.open);
    }

    #[test]
    fn filter_matches_leaves_and_keeps_their_branch() {
        let buttons = nav::NAVIGATION[2];
        assert!(matches_filter(&buttons, "butto"));
        assert!(matches_filter(&buttons.children[0], "BUTTONS"));
        assert!(!matches_filter(&buttons.children[1], "buttons"));
        assert!(!matches_filter(&nav::NAVIGATION[0], "buttons"));
    }

    #[test]
    fn view_renders_in_both_variants() {
        let state = State::new();
        for variant in [DisplayVariant::Overlay, DisplayVariant::Pinned] {
            let _ = view(ViewContext {
                current_path: "/colors",
                state: &state,
                variant,
                filter: "",
            });
        }
    }
}
