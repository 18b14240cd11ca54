// SPDX-License-Identifier: MPL-2.0
//! Documented color palettes.
//!
//! Six palettes, each with the canonical ten shades (50–900). The hex string
//! of a shade is exactly what the copy affordance places on the clipboard.

use iced::Color;

/// The ten canonical shade labels, lightest first.
pub const SHADES: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// A named ramp of shades.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub name: &'static str,
    pub description: &'static str,
    /// `(shade, hex)` pairs, lightest first.
    pub shades: &'static [(u16, &'static str)],
}

impl Palette {
    /// Looks up the hex value of a shade.
    pub fn hex(&self, shade: u16) -> Option<&'static str> {
        self.shades
            .iter()
            .find(|(s, _)| *s == shade)
            .map(|(_, hex)| *hex)
    }
}

pub const PRIMARY: Palette = Palette {
    name: "Primary",
    description: "Used for primary actions, links, and key brand elements",
    shades: &[
        (50, "#f0f9ff"),
        (100, "#e0f2fe"),
        (200, "#bae6fd"),
        (300, "#7dd3fc"),
        (400, "#38bdf8"),
        (500, "#0ea5e9"),
        (600, "#0284c7"),
        (700, "#0369a1"),
        (800, "#075985"),
        (900, "#0c4a6e"),
    ],
};

pub const SECONDARY: Palette = Palette {
    name: "Secondary",
    description: "Used for secondary actions, backgrounds, and neutral elements",
    shades: &[
        (50, "#f8fafc"),
        (100, "#f1f5f9"),
        (200, "#e2e8f0"),
        (300, "#cbd5e1"),
        (400, "#94a3b8"),
        (500, "#64748b"),
        (600, "#475569"),
        (700, "#334155"),
        (800, "#1e293b"),
        (900, "#0f172a"),
    ],
};

pub const ACCENT: Palette = Palette {
    name: "Accent",
    description: "Used for highlights, special features, and call-to-action elements",
    shades: &[
        (50, "#fdf4ff"),
        (100, "#fae8ff"),
        (200, "#f5d0fe"),
        (300, "#f0abfc"),
        (400, "#e879f9"),
        (500, "#d946ef"),
        (600, "#c026d3"),
        (700, "#a21caf"),
        (800, "#86198f"),
        (900, "#701a75"),
    ],
};

pub const SUCCESS: Palette = Palette {
    name: "Success",
    description: "Used for success states, confirmations, and positive feedback",
    shades: &[
        (50, "#f0fdf4"),
        (100, "#dcfce7"),
        (200, "#bbf7d0"),
        (300, "#86efac"),
        (400, "#4ade80"),
        (500, "#22c55e"),
        (600, "#16a34a"),
        (700, "#15803d"),
        (800, "#166534"),
        (900, "#14532d"),
    ],
};

pub const WARNING: Palette = Palette {
    name: "Warning",
    description: "Used for warnings, cautions, and important notices",
    shades: &[
        (50, "#fffbeb"),
        (100, "#fef3c7"),
        (200, "#fde68a"),
        (300, "#fcd34d"),
        (400, "#fbbf24"),
        (500, "#f59e0b"),
        (600, "#d97706"),
        (700, "#b45309"),
        (800, "#92400e"),
        (900, "#78350f"),
    ],
};

pub const ERROR: Palette = Palette {
    name: "Error",
    description: "Used for errors, validation messages, and destructive actions",
    shades: &[
        (50, "#fef2f2"),
        (100, "#fee2e2"),
        (200, "#fecaca"),
        (300, "#fca5a5"),
        (400, "#f87171"),
        (500, "#ef4444"),
        (600, "#dc2626"),
        (700, "#b91c1c"),
        (800, "#991b1b"),
        (900, "#7f1d1d"),
    ],
};

/// All documented palettes, in display order.
pub const ALL: [Palette; 6] = [PRIMARY, SECONDARY, ACCENT, SUCCESS, WARNING, ERROR];

/// Parses a `#rrggbb` hex string into an [`iced::Color`].
///
/// Catalog entries are compile-time fixed, so malformed input can only come
/// from a programming error; the fallback is transparent black rather than a
/// panic.
pub fn parse_hex(hex: &str) -> Color {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Color::TRANSPARENT;
    }
    let component = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map(|v| f32::from(v) / 255.0)
            .unwrap_or(0.0)
    };
    Color::from_rgb(component(0..2), component(2..4), component(4..6))
}

/// Whether text rendered on top of a shade should be white.
///
/// Mirrors the documented convention: shades above 500 are dark surfaces.
pub fn shade_wants_light_text(shade: u16) -> bool {
    shade > 500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_palette_has_ten_canonical_shades() {
        for palette in ALL {
            assert_eq!(palette.shades.len(), SHADES.len(), "{}", palette.name);
            for ((shade, _), expected) in palette.shades.iter().zip(SHADES) {
                assert_eq!(*shade, expected, "{}", palette.name);
            }
        }
    }

    #[test]
    fn every_hex_value_parses() {
        for palette in ALL {
            for (shade, hex) in palette.shades {
                let color = parse_hex(hex);
                assert_ne!(
                    color,
                    Color::TRANSPARENT,
                    "{} {} did not parse",
                    palette.name,
                    shade
                );
            }
        }
    }

    #[test]
    fn primary_600_is_the_brand_blue() {
        assert_eq!(PRIMARY.hex(600), Some("#0284c7"));
    }

    #[test]
    fn hex_lookup_misses_unknown_shade() {
        assert_eq!(PRIMARY.hex(550), None);
    }

    #[test]
    fn parse_hex_handles_prefix_and_rejects_short_input() {
        let white = parse_hex("#ffffff");
        assert!(white.r > 0.99 && white.g > 0.99 && white.b > 0.99);
        assert_eq!(parse_hex("#fff"), Color::TRANSPARENT);
    }

    #[test]
    fn light_text_threshold_matches_convention() {
        assert!(!shade_wants_light_text(500));
        assert!(shade_wants_light_text(600));
    }
}
