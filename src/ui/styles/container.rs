// SPDX-License-Identifier: MPL-2.0
//! Container styles for the window backdrop and the phone body.

use crate::ui::design_tokens::{card, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::border::Radius;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Window backdrop behind the card.
pub fn backdrop(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.background)),
        text_color: Some(scheme.text),
        ..Default::default()
    }
}

/// The phone body: thick bezel, large corner radius, floating shadow.
pub fn phone(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.card_background)),
        border: Border {
            color: scheme.border,
            width: card::BORDER,
            radius: card::RADIUS.into(),
        },
        shadow: shadow::floating(scheme.shadow),
        ..Default::default()
    }
}

/// Inner screen surface.
pub fn screen(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.card_background)),
        text_color: Some(scheme.text),
        border: Border {
            radius: card::SCREEN_RADIUS.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Notch decoration: a black lozenge rounded only at the bottom.
pub fn notch(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NOTCH)),
        border: Border {
            radius: Radius {
                top_left: 0.0,
                top_right: 0.0,
                bottom_right: radius::NOTCH,
                bottom_left: radius::NOTCH,
            },
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Camera dot inside the notch.
pub fn notch_dot(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NOTCH_DOT)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Faintly glowing plate behind the logo.
pub fn logo_plate(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::LOGO_GLOW,
            ..palette::PRIMARY
        })),
        border: Border {
            radius: radius::LOGO.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Strip hosting the action buttons at the card's foot.
pub fn action_tray(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.card_background)),
        border: Border {
            color: scheme.border,
            width: 1.0,
            radius: Radius {
                top_left: 0.0,
                top_right: 0.0,
                bottom_right: card::SCREEN_RADIUS,
                bottom_left: card::SCREEN_RADIUS,
            },
        },
        ..Default::default()
    }
}
