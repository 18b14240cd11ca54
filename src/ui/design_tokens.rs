// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the design tokens that style the application chrome,
following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (derived from the documented brand ramps)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Layout**: Responsive breakpoint

## Examples

```
use styledeck::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a scrim color
let scrim = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Slate scale (documented "Secondary" ramp)
    pub const SLATE_50: Color = Color::from_rgb(0.973, 0.980, 0.988); // #f8fafc
    pub const SLATE_100: Color = Color::from_rgb(0.945, 0.961, 0.976); // #f1f5f9
    pub const SLATE_200: Color = Color::from_rgb(0.886, 0.910, 0.941); // #e2e8f0
    pub const SLATE_300: Color = Color::from_rgb(0.796, 0.835, 0.882); // #cbd5e1
    pub const SLATE_400: Color = Color::from_rgb(0.580, 0.639, 0.722); // #94a3b8
    pub const SLATE_500: Color = Color::from_rgb(0.392, 0.455, 0.545); // #64748b
    pub const SLATE_600: Color = Color::from_rgb(0.278, 0.333, 0.412); // #475569
    pub const SLATE_700: Color = Color::from_rgb(0.200, 0.255, 0.333); // #334155
    pub const SLATE_800: Color = Color::from_rgb(0.118, 0.161, 0.231); // #1e293b
    pub const SLATE_900: Color = Color::from_rgb(0.059, 0.090, 0.165); // #0f172a

    // Brand colors (sky scale, documented "Primary" ramp)
    pub const PRIMARY_100: Color = Color::from_rgb(0.878, 0.949, 0.996); // #e0f2fe
    pub const PRIMARY_200: Color = Color::from_rgb(0.729, 0.902, 0.992); // #bae6fd
    pub const PRIMARY_300: Color = Color::from_rgb(0.490, 0.827, 0.988); // #7dd3fc
    pub const PRIMARY_400: Color = Color::from_rgb(0.220, 0.741, 0.973); // #38bdf8
    pub const PRIMARY_500: Color = Color::from_rgb(0.055, 0.647, 0.914); // #0ea5e9
    pub const PRIMARY_600: Color = Color::from_rgb(0.008, 0.518, 0.780); // #0284c7
    pub const PRIMARY_700: Color = Color::from_rgb(0.012, 0.412, 0.631); // #0369a1

    // Semantic colors (500 shades of the documented ramps)
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267); // #ef4444
    pub const WARNING_500: Color = Color::from_rgb(0.961, 0.620, 0.043); // #f59e0b
    pub const SUCCESS_500: Color = Color::from_rgb(0.133, 0.773, 0.369); // #22c55e
    pub const INFO_500: Color = Color::from_rgb(0.055, 0.647, 0.914); // #0ea5e9
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.08;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const HEADER_HEIGHT: f32 = 64.0;

    // Component widths
    pub const DRAWER_WIDTH: f32 = 280.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const SEARCH_WIDTH: f32 = 200.0;
    pub const CARD_WIDTH: f32 = 345.0;

    // Swatch tiles on the Colors page
    pub const SWATCH_WIDTH: f32 = 120.0;
    pub const SWATCH_HEIGHT: f32 = 80.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for the application chrome.
    //!
    //! The *documented* type scale the app renders as content lives in
    //! [`crate::tokens::typography`]; these sizes style the shell itself.

    /// Large title - Page headings
    pub const TITLE_LG: f32 = 32.0;

    /// Medium title - App name, section headers
    pub const TITLE_MD: f32 = 24.0;

    /// Small title - Preview and palette titles
    pub const TITLE_SM: f32 = 20.0;

    /// Large body - Lead paragraphs
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Badges, table cells, small info
    pub const CAPTION: f32 = 12.0;

    /// Code samples
    pub const CODE: f32 = 13.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Layout
// ============================================================================

pub mod layout {
    /// Window widths below this render the drawer as an overlay; at or above
    /// it the drawer is pinned.
    pub const DRAWER_BREAKPOINT: f32 = 900.0;

    /// Maximum width of lead paragraphs on token pages.
    pub const PROSE_WIDTH: f32 = 600.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Sizing validation
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::DRAWER_WIDTH < layout::DRAWER_BREAKPOINT);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn chrome_primary_matches_documented_ramp() {
        let documented = crate::tokens::colors::parse_hex(
            crate::tokens::colors::PRIMARY.hex(600).unwrap(),
        );
        let chrome = palette::PRIMARY_600;
        assert!((documented.r - chrome.r).abs() < 0.005);
        assert!((documented.g - chrome.g).abs() < 0.005);
        assert!((documented.b - chrome.b).abs() < 0.005);
    }
}
