// SPDX-License-Identifier: MPL-2.0
//! Card domain: identity constants, the fixed contact table, the share
//! hand-off, and the QR symbol for the card address.

pub mod contact;
pub mod qr;
pub mod share;

/// Public address of the card. This is what gets shared and what the QR
/// symbol encodes.
pub const CARD_URL: &str = "https://dgsolutionweb.github.io/dgsolutionweb/";

/// Brand half of the displayed name, drawn in the primary color.
pub const NAME_BRAND: &str = "DGSolution";

/// Suffix half of the displayed name.
pub const NAME_SUFFIX: &str = "WEB";

/// Leading part of the subtitle.
pub const TITLE_PREFIX: &str = "Soluções em ";

/// Accented part of the subtitle, drawn in the primary color.
pub const TITLE_ACCENT: &str = "Desenvolvimento Web";
