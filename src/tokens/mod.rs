// SPDX-License-Identifier: MPL-2.0
//! The token catalog: the color, typography, and spacing tables the
//! application documents.
//!
//! These are the *displayed* values — fixed, hand-authored data rendered by
//! the token pages and copied to the clipboard from the color swatches. The
//! constants that style the application chrome itself live in
//! [`crate::ui::design_tokens`].

pub mod colors;
pub mod spacing;
pub mod typography;
