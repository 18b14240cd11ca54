// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the navigation shell: routes, the nav tree, and
//! the responsive drawer state machine.

#[cfg(test)]
mod tests {
    use styledeck::app::Route;
    use styledeck::tokens::colors;
    use styledeck::ui::drawer::{self, DisplayVariant};
    use styledeck::ui::nav;

    #[test]
    fn exactly_one_leaf_is_active_per_route() {
        for path in [
            "/",
            "/colors",
            "/typography",
            "/spacing",
            "/components/buttons",
            "/components/cards",
        ] {
            assert_eq!(nav::active_leaf_count(nav::NAVIGATION, path), 1, "{path}");
        }
        assert_eq!(nav::active_leaf_count(nav::NAVIGATION, "/unknown"), 0);
    }

    #[test]
    fn every_leaf_has_a_route_and_every_route_has_a_leaf() {
        fn leaves(items: &[nav::NavItem], acc: &mut Vec<&'static str>) {
            for item in items {
                if let Some(path) = item.path {
                    acc.push(path);
                }
                leaves(item.children, acc);
            }
        }

        let mut paths = Vec::new();
        leaves(nav::NAVIGATION, &mut paths);

        for path in &paths {
            let route = Route::from_path(path).expect(path);
            assert_eq!(route.path(), *path);
            assert_eq!(nav::active_leaf_count(nav::NAVIGATION, route.path()), 1);
        }
    }

    #[test]
    fn drawer_state_machine_honours_the_variant() {
        // Overlay: navigation closes the drawer
        let mut state = drawer::State::new();
        state.open = true;
        drawer::update(
            &mut state,
            drawer::Message::Navigate("/colors"),
            DisplayVariant::Overlay,
        );
        assert!(!state.open);

        // Pinned: navigation leaves it open
        let mut state = drawer::State::new();
        state.open = true;
        drawer::update(
            &mut state,
            drawer::Message::Navigate("/colors"),
            DisplayVariant::Pinned,
        );
        assert!(state.open);
    }

    #[test]
    fn breakpoint_crossing_preserves_open_state() {
        let mut state = drawer::State::new();
        state.open = true;

        // The variant is derived, not stored: crossing the breakpoint
        // changes only what `variant_for` returns.
        assert_eq!(drawer::variant_for(1000.0), DisplayVariant::Pinned);
        assert_eq!(drawer::variant_for(800.0), DisplayVariant::Overlay);
        assert!(state.open);

        state.toggle("Patterns");
        assert!(state.is_expanded("Patterns"), "expanded set survives too");
    }

    #[test]
    fn primary_600_swatch_copy_value() {
        // The documented scenario: the "600" swatch of the Primary palette
        // puts #0284c7 on the clipboard.
        assert_eq!(colors::PRIMARY.hex(600), Some("#0284c7"));
    }
}
