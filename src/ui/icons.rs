// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are 24x24 stroke glyphs embedded as inline SVG path data and cached
//! as [`svg::Handle`]s in `OnceLock`s so each document is built once per
//! process. Glyphs inherit their color from [`tinted`] (or render with the
//! stroke default when untinted).
//!
//! # Usage
//!
//! ```ignore
//! use styledeck::ui::icons;
//!
//! let menu_button = button(icons::sized(icons::menu(), sizing::ICON_MD));
//! let brand = icons::tinted(icons::palette(), scheme.brand_primary);
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the glyph's appearance,
//! not the action context (e.g., `trash` not `delete_card`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Wraps raw path data in a standalone SVG document.
fn icon_document(body: &str) -> Vec<u8> {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\" \
         fill=\"none\" stroke=\"#888888\" stroke-width=\"2\" \
         stroke-linecap=\"round\" stroke-linejoin=\"round\">{body}</svg>"
    )
    .into_bytes()
}

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory(icon_document($body)));
            Svg::new(handle.clone())
        }
    };
}

/// Resizes an icon to a square of the given size.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Recolors an icon.
pub fn tinted<'a>(icon: Svg<'a>, color: Color) -> Svg<'a> {
    icon.style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}

// =============================================================================
// Shell & Navigation Icons
// =============================================================================

define_icon!(
    menu,
    r##"<path d="M4 6h16"/><path d="M4 12h16"/><path d="M4 18h16"/>"##,
    "Menu icon: three horizontal bars."
);
define_icon!(
    cross,
    r##"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"##,
    "Cross icon: X mark shape."
);
define_icon!(
    search,
    r##"<circle cx="11" cy="11" r="7"/><path d="m21 21-4.3-4.3"/>"##,
    "Search icon: magnifying glass."
);
define_icon!(
    sun,
    r##"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"##,
    "Sun icon: circle with rays, shown while in dark mode."
);
define_icon!(
    moon,
    r##"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"##,
    "Moon icon: crescent, shown while in light mode."
);
define_icon!(
    chevron_down,
    r##"<path d="m6 9 6 6 6-6"/>"##,
    "Chevron pointing down: collapsed branch affordance."
);
define_icon!(
    chevron_up,
    r##"<path d="m18 15-6-6-6 6"/>"##,
    "Chevron pointing up: expanded branch affordance."
);

// =============================================================================
// Navigation Tree Icons
// =============================================================================

define_icon!(
    file_text,
    r##"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M14 2v4a2 2 0 0 0 2 2h4"/><path d="M10 9H8"/><path d="M16 13H8"/><path d="M16 17H8"/>"##,
    "Document icon: page with text lines."
);
define_icon!(
    sparkles,
    r##"<path d="m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z"/>"##,
    "Sparkle icon: four-pointed star."
);
define_icon!(
    palette,
    r##"<circle cx="13.5" cy="6.5" r=".5"/><circle cx="17.5" cy="10.5" r=".5"/><circle cx="8.5" cy="7.5" r=".5"/><circle cx="6.5" cy="12.5" r=".5"/><path d="M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.93 0 1.65-.74 1.65-1.67 0-.43-.17-.82-.44-1.1-.27-.29-.43-.68-.43-1.1a1.65 1.65 0 0 1 1.65-1.65h1.95c3.04 0 5.5-2.46 5.5-5.5C21.88 6.06 17.43 2 12 2Z"/>"##,
    "Palette icon: painter's board with wells."
);
define_icon!(
    letter_case,
    r##"<path d="M12 4v16"/><path d="M4 7V5a1 1 0 0 1 1-1h14a1 1 0 0 1 1 1v2"/><path d="M9 20h6"/>"##,
    "Type icon: capital T on a baseline."
);
define_icon!(
    grid,
    r##"<rect x="3" y="3" width="7" height="7" rx="1"/><rect x="14" y="3" width="7" height="7" rx="1"/><rect x="14" y="14" width="7" height="7" rx="1"/><rect x="3" y="14" width="7" height="7" rx="1"/>"##,
    "Grid icon: four squares."
);
define_icon!(
    code,
    r##"<path d="m16 18 6-6-6-6"/><path d="m8 6-6 6 6 6"/>"##,
    "Code icon: angle brackets."
);
define_icon!(
    push_button,
    r##"<rect x="2" y="8" width="20" height="8" rx="2"/><path d="M7 12h.01"/><path d="M12 12h.01"/><path d="M17 12h.01"/>"##,
    "Button icon: rounded bar with dots."
);
define_icon!(
    credit_card,
    r##"<rect x="2" y="5" width="20" height="14" rx="2"/><path d="M2 10h20"/>"##,
    "Card icon: credit card with magnetic stripe."
);
define_icon!(
    form_fields,
    r##"<rect x="3" y="4" width="18" height="6" rx="1"/><rect x="3" y="14" width="18" height="6" rx="1"/><path d="M7 7h.01"/><path d="M7 17h.01"/>"##,
    "Form icon: two stacked input rows."
);
define_icon!(
    table,
    r##"<rect x="3" y="3" width="18" height="18" rx="2"/><path d="M3 9h18"/><path d="M3 15h18"/><path d="M12 3v18"/>"##,
    "Table icon: bordered grid with rows and columns."
);
define_icon!(
    quilt,
    r##"<rect x="3" y="3" width="18" height="18" rx="2"/><path d="M3 12h18"/><path d="M12 12v9"/>"##,
    "Quilt icon: mixed-span layout tiles."
);
define_icon!(
    dashboard,
    r##"<rect x="3" y="3" width="7" height="9" rx="1"/><rect x="14" y="3" width="7" height="5" rx="1"/><rect x="14" y="12" width="7" height="9" rx="1"/><rect x="3" y="16" width="7" height="5" rx="1"/>"##,
    "Dashboard icon: staggered panels."
);
define_icon!(
    compass,
    r##"<path d="m3 11 19-9-9 19-2-8Z"/>"##,
    "Navigation icon: compass needle."
);
define_icon!(
    clipboard,
    r##"<rect x="8" y="2" width="8" height="4" rx="1"/><path d="M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2"/>"##,
    "Clipboard icon: board with clip."
);
define_icon!(
    folder,
    r##"<path d="M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z"/>"##,
    "Folder icon: tabbed folder outline."
);
define_icon!(
    smile,
    r##"<circle cx="12" cy="12" r="10"/><path d="M8 14s1.5 2 4 2 4-2 4-2"/><path d="M9 9h.01"/><path d="M15 9h.01"/>"##,
    "Smiley icon: face in a circle."
);
define_icon!(
    picture,
    r##"<rect x="3" y="3" width="18" height="18" rx="2"/><circle cx="9" cy="9" r="2"/><path d="m21 15-3.09-3.09a2 2 0 0 0-2.82 0L6 21"/>"##,
    "Image icon: framed photo with a sun and hills."
);
define_icon!(
    film,
    r##"<rect x="3" y="3" width="18" height="18" rx="2"/><path d="M7 3v18"/><path d="M17 3v18"/><path d="M3 8h4"/><path d="M3 16h4"/><path d="M17 8h4"/><path d="M17 16h4"/>"##,
    "Film icon: strip with sprocket holes."
);

// =============================================================================
// Status & Feedback Icons
// =============================================================================

define_icon!(
    checkmark,
    r##"<path d="M20 6 9 17l-5-5"/>"##,
    "Checkmark icon: check/tick mark for success."
);
define_icon!(
    info,
    r##"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"##,
    "Info icon: lowercase i in a circle."
);
define_icon!(
    warning,
    r##"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z"/><path d="M12 9v4"/><path d="M12 17h.01"/>"##,
    "Warning icon: triangle with exclamation mark."
);
define_icon!(
    copy,
    r##"<rect x="8" y="8" width="14" height="14" rx="2"/><path d="M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2"/>"##,
    "Copy icon: two overlapping sheets."
);

// =============================================================================
// Component Showcase Icons
// =============================================================================

define_icon!(
    plus,
    r##"<path d="M5 12h14"/><path d="M12 5v14"/>"##,
    "Plus icon: crossed horizontal and vertical bars."
);
define_icon!(
    download,
    r##"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><path d="m7 10 5 5 5-5"/><path d="M12 15V3"/>"##,
    "Download icon: arrow into a tray."
);
define_icon!(
    pencil,
    r##"<path d="M17 3a2.83 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z"/>"##,
    "Pencil icon: tilted pencil."
);
define_icon!(
    share,
    r##"<circle cx="18" cy="5" r="3"/><circle cx="6" cy="12" r="3"/><circle cx="18" cy="19" r="3"/><path d="m8.59 13.51 6.83 3.98"/><path d="m15.41 6.51-6.82 3.98"/>"##,
    "Share icon: three linked nodes."
);
define_icon!(
    heart,
    r##"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.51 4.04 3 5.5l7 7Z"/>"##,
    "Heart icon: heart outline."
);
define_icon!(
    trash,
    r##"<path d="M3 6h18"/><path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6"/><path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"/>"##,
    "Trash icon: bin with lid."
);
define_icon!(
    more_vertical,
    r##"<circle cx="12" cy="5" r="1"/><circle cx="12" cy="12" r="1"/><circle cx="12" cy="19" r="1"/>"##,
    "Vertical ellipsis: three dots in a column."
);
define_icon!(
    map_pin,
    r##"<path d="M20 10c0 6-8 12-8 12S4 16 4 10a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"##,
    "Map pin icon: droplet with a dot."
);
define_icon!(
    calendar,
    r##"<rect x="3" y="4" width="18" height="18" rx="2"/><path d="M8 2v4"/><path d="M16 2v4"/><path d="M3 10h18"/>"##,
    "Calendar icon: month grid with binding rings."
);
define_icon!(
    refresh,
    r##"<path d="M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8"/><path d="M21 3v5h-5"/><path d="M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16"/><path d="M8 16H3v5"/>"##,
    "Refresh icon: circular arrows."
);
define_icon!(
    monitor,
    r##"<rect x="2" y="3" width="20" height="14" rx="2"/><path d="M8 21h8"/><path d="M12 17v4"/>"##,
    "Monitor icon: display on a stand."
);
define_icon!(
    person,
    r##"<circle cx="12" cy="4" r="2"/><path d="M4 9h16"/><path d="M12 9v6"/><path d="m8 21 4-6 4 6"/>"##,
    "Accessibility icon: standing figure with open arms."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_document_is_valid_svg_envelope() {
        let doc = icon_document("<path d=\"M4 6h16\"/>");
        let text = String::from_utf8(doc).unwrap();
        assert!(text.starts_with("<svg"));
        assert!(text.ends_with("</svg>"));
        assert!(text.contains("viewBox=\"0 0 24 24\""));
    }

    #[test]
    fn handles_are_cached_per_icon() {
        // Two calls must not rebuild the document; handles compare equal.
        let first = menu();
        let second = menu();
        let _ = (first, second);
    }

    #[test]
    fn all_icons_construct() {
        let _ = (
            menu(),
            cross(),
            search(),
            sun(),
            moon(),
            chevron_down(),
            chevron_up(),
            file_text(),
            sparkles(),
            palette(),
            letter_case(),
            grid(),
            code(),
            push_button(),
            credit_card(),
            form_fields(),
            table(),
            quilt(),
            dashboard(),
            compass(),
            clipboard(),
            folder(),
            smile(),
            picture(),
            film(),
            checkmark(),
            info(),
            warning(),
            copy(),
            plus(),
            download(),
            pencil(),
            share(),
            heart(),
            trash(),
            more_vertical(),
            map_pin(),
            calendar(),
            refresh(),
            monitor(),
            person(),
        );
    }
}
