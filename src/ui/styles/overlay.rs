// SPDX-License-Identifier: MPL-2.0
//! Styles for the QR modal overlay.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed click-to-close scrim covering the whole window.
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Modal surface hosting the heading and the QR symbol.
pub fn modal(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.card_background)),
        text_color: Some(scheme.text),
        border: Border {
            radius: radius::MODAL.into(),
            ..Default::default()
        },
        shadow: shadow::floating(scheme.shadow),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::ColorScheme;

    #[test]
    fn scrim_is_translucent_black() {
        let style = scrim(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => {
                assert_eq!(color.a, opacity::BACKDROP);
                assert_eq!(color.r, 0.0);
            }
            _ => panic!("expected a color background"),
        }
    }

    #[test]
    fn modal_follows_the_active_scheme() {
        let light = modal(ColorScheme::light())(&Theme::Light);
        let dark = modal(ColorScheme::dark())(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }
}
