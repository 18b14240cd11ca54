// SPDX-License-Identifier: MPL-2.0
//! The hand-authored navigation tree.
//!
//! A node carries either a `path` (leaf, navigable) or `children` (branch,
//! togglable), never meaningfully both. The tree is fixed at compile time
//! and at most two levels deep.

use crate::ui::icons;
use iced::widget::svg::Svg;

/// Icon constructor stored per node.
pub type IconFn = fn() -> Svg<'static>;

#[derive(Clone, Copy)]
pub struct NavItem {
    pub title: &'static str,
    pub path: Option<&'static str>,
    pub icon: IconFn,
    pub children: &'static [NavItem],
}

impl NavItem {
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }

    /// Exact-equality active check; prefix matching is deliberately not
    /// performed.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == Some(current_path)
    }
}

/// Branch titles that start expanded.
pub const DEFAULT_EXPANDED: [&str; 2] = ["Design Tokens", "Components"];

pub const NAVIGATION: &[NavItem] = &[
    NavItem {
        title: "Getting Started",
        path: Some("/"),
        icon: icons::file_text,
        children: &[],
    },
    NavItem {
        title: "Design Tokens",
        path: None,
        icon: icons::sparkles,
        children: &[
            NavItem {
                title: "Colors",
                path: Some("/colors"),
                icon: icons::palette,
                children: &[],
            },
            NavItem {
                title: "Typography",
                path: Some("/typography"),
                icon: icons::letter_case,
                children: &[],
            },
            NavItem {
                title: "Spacing",
                path: Some("/spacing"),
                icon: icons::grid,
                children: &[],
            },
        ],
    },
    NavItem {
        title: "Components",
        path: None,
        icon: icons::code,
        children: &[
            NavItem {
                title: "Buttons",
                path: Some("/components/buttons"),
                icon: icons::push_button,
                children: &[],
            },
            NavItem {
                title: "Cards",
                path: Some("/components/cards"),
                icon: icons::credit_card,
                children: &[],
            },
            NavItem {
                title: "Forms",
                path: Some("/components/forms"),
                icon: icons::form_fields,
                children: &[],
            },
            NavItem {
                title: "Navigation",
                path: Some("/components/navigation"),
                icon: icons::menu,
                children: &[],
            },
            NavItem {
                title: "Data Display",
                path: Some("/components/data-display"),
                icon: icons::table,
                children: &[],
            },
        ],
    },
    NavItem {
        title: "Patterns",
        path: None,
        icon: icons::quilt,
        children: &[
            NavItem {
                title: "Layout",
                path: Some("/patterns/layout"),
                icon: icons::dashboard,
                children: &[],
            },
            NavItem {
                title: "Navigation",
                path: Some("/patterns/navigation"),
                icon: icons::compass,
                children: &[],
            },
            NavItem {
                title: "Forms",
                path: Some("/patterns/forms"),
                icon: icons::clipboard,
                children: &[],
            },
        ],
    },
    NavItem {
        title: "Resources",
        path: None,
        icon: icons::folder,
        children: &[
            NavItem {
                title: "Icons",
                path: Some("/resources/icons"),
                icon: icons::smile,
                children: &[],
            },
            NavItem {
                title: "Images",
                path: Some("/resources/images"),
                icon: icons::picture,
                children: &[],
            },
            NavItem {
                title: "Animation",
                path: Some("/resources/animation"),
                icon: icons::film,
                children: &[],
            },
        ],
    },
];

/// Counts leaves marked active for `path` across the whole tree.
pub fn active_leaf_count(items: &[NavItem], path: &str) -> usize {
    items
        .iter()
        .map(|item| {
            usize::from(item.is_active(path)) + active_leaf_count(item.children, path)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_paths(items: &[NavItem], acc: &mut Vec<&'static str>) {
        for item in items {
            if let Some(path) = item.path {
                acc.push(path);
            }
            all_paths(item.children, acc);
        }
    }

    #[test]
    fn at_most_one_leaf_active_per_path() {
        let mut paths = Vec::new();
        all_paths(NAVIGATION, &mut paths);
        for path in paths {
            assert_eq!(active_leaf_count(NAVIGATION, path), 1, "{path}");
        }
        assert_eq!(active_leaf_count(NAVIGATION, "/nowhere"), 0);
    }

    #[test]
    fn branches_have_no_path_and_leaves_have_no_children() {
        fn check(items: &[NavItem]) {
            for item in items {
                if item.is_branch() {
                    assert!(item.path.is_none(), "{} is both branch and leaf", item.title);
                    check(item.children);
                } else {
                    assert!(item.path.is_some(), "{} is neither branch nor leaf", item.title);
                }
            }
        }
        check(NAVIGATION);
    }

    #[test]
    fn tree_is_at_most_two_levels_deep() {
        for item in NAVIGATION {
            for child in item.children {
                assert!(child.children.is_empty(), "{}", child.title);
            }
        }
    }

    #[test]
    fn default_expanded_titles_are_branches() {
        for title in DEFAULT_EXPANDED {
            let node = NAVIGATION.iter().find(|i| i.title == title);
            assert!(node.is_some_and(|n| n.is_branch()), "{title}");
        }
    }

    #[test]
    fn no_prefix_matching() {
        let buttons = NAVIGATION[2].children[0];
        assert!(buttons.is_active("/components/buttons"));
        assert!(!buttons.is_active("/components"));
        assert!(!buttons.is_active("/components/buttons/extra"));
    }
}
