// SPDX-License-Identifier: MPL-2.0
//! Client-side routes.

/// Pages the user can navigate between. Placeholder routes carry their
/// section label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Colors,
    Typography,
    Spacing,
    Buttons,
    Cards,
    ComingSoon {
        path: &'static str,
        label: &'static str,
    },
}

/// Placeholder paths and their section labels.
const PLACEHOLDERS: &[(&str, &str)] = &[
    ("/components/forms", "Forms"),
    ("/components/navigation", "Navigation"),
    ("/components/data-display", "Data Display"),
    ("/patterns/layout", "Layout Patterns"),
    ("/patterns/navigation", "Navigation Patterns"),
    ("/patterns/forms", "Form Patterns"),
    ("/resources/icons", "Icons"),
    ("/resources/images", "Images"),
    ("/resources/animation", "Animation"),
];

impl Route {
    /// Resolves a path by exact string equality. Unknown paths resolve to
    /// `None`; prefix matching is deliberately not performed.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Route::Home),
            "/colors" => Some(Route::Colors),
            "/typography" => Some(Route::Typography),
            "/spacing" => Some(Route::Spacing),
            "/components/buttons" => Some(Route::Buttons),
            "/components/cards" => Some(Route::Cards),
            _ => PLACEHOLDERS
                .iter()
                .find(|(p, _)| *p == path)
                .map(|(path, label)| Route::ComingSoon { path, label }),
        }
    }

    /// The canonical path of this route, matched against nav leaves for the
    /// active highlight.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Colors => "/colors",
            Route::Typography => "/typography",
            Route::Spacing => "/spacing",
            Route::Buttons => "/components/buttons",
            Route::Cards => "/components/cards",
            Route::ComingSoon { path, .. } => path,
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::nav;

    #[test]
    fn known_paths_round_trip() {
        for path in [
            "/",
            "/colors",
            "/typography",
            "/spacing",
            "/components/buttons",
            "/components/cards",
            "/patterns/layout",
        ] {
            let route = Route::from_path(path).expect(path);
            assert_eq!(route.path(), path);
        }
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        assert!(Route::from_path("/colors/extra").is_none());
        assert!(Route::from_path("/component").is_none());
        assert!(Route::from_path("").is_none());
    }

    #[test]
    fn every_nav_leaf_resolves_to_a_route() {
        fn check(items: &[nav::NavItem]) {
            for item in items {
                if let Some(path) = item.path {
                    assert!(Route::from_path(path).is_some(), "{path}");
                }
                check(item.children);
            }
        }
        check(nav::NAVIGATION);
    }

    #[test]
    fn placeholders_carry_their_label() {
        match Route::from_path("/components/forms") {
            Some(Route::ComingSoon { label, .. }) => assert_eq!(label, "Forms"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
