// SPDX-License-Identifier: MPL-2.0
//! The documented type scale.

/// One entry of the type scale.
#[derive(Debug, Clone, Copy)]
pub struct TypeVariant {
    pub name: &'static str,
    /// Size in logical pixels.
    pub size: f32,
    /// CSS-style weight (400 regular, 500 medium, 600 semibold, 700 bold).
    pub weight: u16,
    pub line_height: f32,
    pub usage: &'static str,
}

/// Display font stack, primary family first.
pub const FONT_FAMILY: &str = "Inter";
pub const FONT_FALLBACKS: &str = "\"Inter\", \"Roboto\", \"Helvetica\", \"Arial\", sans-serif";

/// The full scale, largest first.
pub const TYPE_SCALE: [TypeVariant; 8] = [
    TypeVariant {
        name: "h1",
        size: 56.0,
        weight: 700,
        line_height: 1.2,
        usage: "Page titles, hero headers",
    },
    TypeVariant {
        name: "h2",
        size: 40.0,
        weight: 600,
        line_height: 1.3,
        usage: "Section headers",
    },
    TypeVariant {
        name: "h3",
        size: 32.0,
        weight: 600,
        line_height: 1.4,
        usage: "Subsection headers",
    },
    TypeVariant {
        name: "h4",
        size: 24.0,
        weight: 500,
        line_height: 1.4,
        usage: "Card titles, form sections",
    },
    TypeVariant {
        name: "h5",
        size: 20.0,
        weight: 500,
        line_height: 1.5,
        usage: "Component titles",
    },
    TypeVariant {
        name: "h6",
        size: 16.0,
        weight: 500,
        line_height: 1.5,
        usage: "Small headers",
    },
    TypeVariant {
        name: "body1",
        size: 16.0,
        weight: 400,
        line_height: 1.6,
        usage: "Default body text",
    },
    TypeVariant {
        name: "body2",
        size: 14.0,
        weight: 400,
        line_height: 1.5,
        usage: "Secondary text, captions",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_monotonically_non_increasing() {
        for pair in TYPE_SCALE.windows(2) {
            assert!(
                pair[0].size >= pair[1].size,
                "{} smaller than {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn headings_are_at_least_medium_weight() {
        for variant in TYPE_SCALE.iter().filter(|v| v.name.starts_with('h')) {
            assert!(variant.weight >= 500, "{}", variant.name);
        }
    }

    #[test]
    fn line_heights_are_reasonable() {
        for variant in TYPE_SCALE {
            assert!(
                (1.0..=2.0).contains(&variant.line_height),
                "{}",
                variant.name
            );
        }
    }
}
