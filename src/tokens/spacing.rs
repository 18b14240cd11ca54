// SPDX-License-Identifier: MPL-2.0
//! The documented spacing scale (8 px grid).

/// One step of the spacing scale.
#[derive(Debug, Clone, Copy)]
pub struct SpacingStep {
    /// Multiplier token as written in code samples (`spacing(3)`).
    pub token: u16,
    /// Resolved size in pixels.
    pub pixels: u16,
    pub usage: &'static str,
}

/// Base unit of the grid.
pub const GRID_UNIT: u16 = 8;

/// The full scale, smallest first.
pub const SPACING_SCALE: [SpacingStep; 10] = [
    SpacingStep {
        token: 0,
        pixels: 0,
        usage: "No spacing",
    },
    SpacingStep {
        token: 1,
        pixels: 8,
        usage: "Extra small spacing",
    },
    SpacingStep {
        token: 2,
        pixels: 16,
        usage: "Small spacing",
    },
    SpacingStep {
        token: 3,
        pixels: 24,
        usage: "Medium spacing",
    },
    SpacingStep {
        token: 4,
        pixels: 32,
        usage: "Large spacing",
    },
    SpacingStep {
        token: 5,
        pixels: 40,
        usage: "Extra large spacing",
    },
    SpacingStep {
        token: 6,
        pixels: 48,
        usage: "Section spacing",
    },
    SpacingStep {
        token: 8,
        pixels: 64,
        usage: "Large section spacing",
    },
    SpacingStep {
        token: 10,
        pixels: 80,
        usage: "Extra large section spacing",
    },
    SpacingStep {
        token: 12,
        pixels: 96,
        usage: "Page-level spacing",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_step_sits_on_the_grid() {
        for step in SPACING_SCALE {
            assert_eq!(step.pixels % GRID_UNIT, 0, "token {}", step.token);
            assert_eq!(step.pixels, step.token * GRID_UNIT, "token {}", step.token);
        }
    }

    #[test]
    fn scale_is_strictly_increasing() {
        for pair in SPACING_SCALE.windows(2) {
            assert!(pair[0].pixels < pair[1].pixels);
        }
    }
}
