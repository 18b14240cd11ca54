// SPDX-License-Identifier: MPL-2.0
//! Page assemblies.
//!
//! Each page is a static composition of previews, code panels, and token
//! tables. Pages own the local state of their embedded panels; the app root
//! routes clipboard completions back here via [`CopyTarget`].

pub mod buttons;
pub mod cards;
pub mod colors;
pub mod coming_soon;
pub mod home;
pub mod spacing;
pub mod typography;

use std::time::Instant;

/// Identifies which affordance initiated a clipboard write, so the copy
/// flash lands on the right panel when the write succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    ColorSwatch,
    ColorsUsage,
    TypographyUsage,
    SpacingUsage,
    ButtonsPreview(usize),
    CardsPreview(usize),
}

/// Aggregate state of all pages.
#[derive(Debug, Default)]
pub struct State {
    pub colors: colors::State,
    pub typography: typography::State,
    pub spacing: spacing::State,
    pub buttons: buttons::State,
    pub cards: cards::State,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the panel behind `target` as freshly copied. Swatches carry no
    /// flash; their feedback is the toast alone.
    pub fn mark_copied(&mut self, target: CopyTarget, now: Instant) {
        match target {
            CopyTarget::ColorSwatch => {}
            CopyTarget::ColorsUsage => self.colors.usage.mark_copied(now),
            CopyTarget::TypographyUsage => self.typography.usage.mark_copied(now),
            CopyTarget::SpacingUsage => self.spacing.usage.mark_copied(now),
            CopyTarget::ButtonsPreview(index) => {
                if let Some(preview) = self.buttons.previews.get_mut(index) {
                    preview.code_panel.mark_copied(now);
                }
            }
            CopyTarget::CardsPreview(index) => {
                if let Some(preview) = self.cards.previews.get_mut(index) {
                    preview.code_panel.mark_copied(now);
                }
            }
        }
    }

    /// Advances every copy-flash timer.
    pub fn tick(&mut self, now: Instant) {
        self.colors.usage.tick(now);
        self.typography.usage.tick(now);
        self.spacing.usage.tick(now);
        for preview in &mut self.buttons.previews {
            preview.tick(now);
        }
        for preview in &mut self.cards.previews {
            preview.tick(now);
        }
    }

    /// Whether any flash is live (keeps the tick subscription running).
    #[must_use]
    pub fn has_active_flash(&self) -> bool {
        self.colors.usage.is_flashing()
            || self.typography.usage.is_flashing()
            || self.spacing.usage.is_flashing()
            || self
                .buttons
                .previews
                .iter()
                .any(|p| p.code_panel.is_flashing())
            || self
                .cards
                .previews
                .iter()
                .any(|p| p.code_panel.is_flashing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::code_panel::COPY_FLASH;

    #[test]
    fn mark_copied_flashes_only_the_target() {
        let mut state = State::new();
        let now = Instant::now();

        state.mark_copied(CopyTarget::ColorsUsage, now);
        assert!(state.colors.usage.is_flashing());
        assert!(!state.typography.usage.is_flashing());
        assert!(state.has_active_flash());
    }

    #[test]
    fn swatch_copies_produce_no_flash() {
        let mut state = State::new();
        state.mark_copied(CopyTarget::ColorSwatch, Instant::now());
        assert!(!state.has_active_flash());
    }

    #[test]
    fn tick_clears_expired_flashes_everywhere() {
        let mut state = State::new();
        let now = Instant::now();

        state.mark_copied(CopyTarget::SpacingUsage, now);
        state.mark_copied(CopyTarget::ButtonsPreview(0), now);
        assert!(state.has_active_flash());

        state.tick(now + COPY_FLASH);
        assert!(!state.has_active_flash());
    }

    #[test]
    fn out_of_range_preview_targets_are_ignored() {
        let mut state = State::new();
        state.mark_copied(CopyTarget::ButtonsPreview(999), Instant::now());
        assert!(!state.has_active_flash());
    }
}
