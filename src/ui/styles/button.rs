// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Contact row style. Hovering swaps to the hover surface, matching the
/// card's raised-then-pressed look.
pub fn contact(scheme: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => scheme.button_hover,
            _ => scheme.button_background,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: scheme.text,
            border: Border {
                color: scheme.border,
                width: 0.0,
                radius: radius::CONTACT.into(),
            },
            shadow: shadow::raised(scheme.shadow),
            snap: true,
        }
    }
}

/// WhatsApp row keeps its brand green in both themes.
pub fn whatsapp(scheme: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => palette::WHATSAPP_HOVER,
            _ => palette::WHATSAPP,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::WHATSAPP_DEEP,
                width: 0.0,
                radius: radius::CONTACT.into(),
            },
            shadow: shadow::raised(scheme.shadow),
            snap: true,
        }
    }
}

/// Round action button (theme, share, and QR controls).
pub fn action(scheme: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => scheme.button_hover,
            _ => scheme.button_background,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: scheme.text,
            border: Border {
                color: scheme.border,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::raised(scheme.shadow),
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::ColorScheme;

    #[test]
    fn contact_button_hover_swaps_surface() {
        let theme = Theme::Dark;
        let style_fn = contact(ColorScheme::dark());

        let normal = style_fn(&theme, button::Status::Active);
        let hover = style_fn(&theme, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn whatsapp_button_is_brand_green_in_both_themes() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            let style = whatsapp(scheme)(&Theme::Light, button::Status::Active);
            assert_eq!(
                style.background,
                Some(Background::Color(palette::WHATSAPP))
            );
            assert_eq!(style.text_color, palette::WHITE);
        }
    }

    #[test]
    fn action_button_is_circular() {
        let style = action(ColorScheme::light())(&Theme::Light, button::Status::Active);
        assert_eq!(style.border.radius, radius::FULL.into());
        assert_eq!(style.border.width, 1.0);
    }
}
