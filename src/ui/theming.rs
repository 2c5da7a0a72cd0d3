// SPDX-License-Identifier: MPL-2.0
//! Light/dark palette resolution driven by a single flag.

use crate::ui::design_tokens::{opacity, palette};
use dark_light;
use iced::Color;

/// Colors the card draws with. Exactly two fixed instances exist, selected
/// by the dark-mode flag; there is no blending and no custom palette.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub primary: Color,
    pub background: Color,
    pub card_background: Color,
    pub text: Color,
    pub button_background: Color,
    pub button_hover: Color,
    pub shadow: Color,
    pub border: Color,
}

impl ColorScheme {
    /// Light palette.
    #[must_use]
    pub fn light() -> Self {
        Self {
            primary: palette::PRIMARY,
            background: palette::LIGHT_BACKGROUND,
            card_background: palette::LIGHT_CARD,
            text: palette::LIGHT_TEXT,
            button_background: palette::LIGHT_BUTTON,
            button_hover: palette::LIGHT_BUTTON_HOVER,
            shadow: Color {
                a: opacity::SHADOW_LIGHT,
                ..palette::BLACK
            },
            border: palette::LIGHT_BORDER,
        }
    }

    /// Dark palette.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            primary: palette::PRIMARY,
            background: palette::DARK_BACKGROUND,
            card_background: palette::DARK_CARD,
            text: palette::DARK_TEXT,
            button_background: palette::DARK_BUTTON,
            button_hover: palette::DARK_BUTTON_HOVER,
            shadow: Color {
                a: opacity::SHADOW_DARK,
                ..palette::BLACK
            },
            border: palette::DARK_BORDER,
        }
    }

    /// Palette for the given dark-mode flag.
    #[must_use]
    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Reads the platform's ambient color-scheme preference.
///
/// `Some(true)` for dark, `Some(false)` for light, `None` when the platform
/// does not report a preference or detection fails.
#[must_use]
pub fn system_prefers_dark() -> Option<bool> {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Some(true),
        Ok(dark_light::Mode::Light) => Some(false),
        Ok(dark_light::Mode::Unspecified) | Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_flag_value_maps_to_one_palette() {
        assert_eq!(ColorScheme::for_mode(false), ColorScheme::light());
        assert_eq!(ColorScheme::for_mode(true), ColorScheme::dark());
    }

    #[test]
    fn toggling_twice_restores_the_palette() {
        let flag = false;
        let original = ColorScheme::for_mode(flag);
        let toggled_back = ColorScheme::for_mode(!!flag);
        assert_eq!(original, toggled_back);
        assert_ne!(ColorScheme::for_mode(flag), ColorScheme::for_mode(!flag));
    }

    #[test]
    fn both_palettes_share_the_brand_primary() {
        assert_eq!(ColorScheme::light().primary, ColorScheme::dark().primary);
    }

    #[test]
    fn dark_shadow_is_heavier() {
        assert!(ColorScheme::dark().shadow.a > ColorScheme::light().shadow.a);
    }

    #[test]
    fn system_detection_does_not_panic() {
        // Value depends on the host; only the call contract is checked.
        let _ = system_prefers_dark();
    }
}
