// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for embedded SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and their
//! handles cached with `OnceLock`. They are monochrome sources tinted at
//! the call site with [`tinted`], so one file serves both themes.
//!
//! Icons use generic visual names describing the icon's appearance, not the
//! action context (e.g. `globe`, not `open_website`).

use iced::widget::svg::{Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle. The handle is created on
/// first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(sun, "sun.svg", "Sun: shown while the dark theme is active.");
define_icon!(moon, "moon.svg", "Crescent moon: shown while the light theme is active.");
define_icon!(share, "share.svg", "Share: three linked nodes.");
define_icon!(qr_code, "qr_code.svg", "QR code glyph.");
define_icon!(phone, "phone.svg", "Telephone handset.");
define_icon!(envelope, "envelope.svg", "Mail envelope.");
define_icon!(whatsapp, "whatsapp.svg", "WhatsApp speech bubble.");
define_icon!(instagram, "instagram.svg", "Instagram camera outline.");
define_icon!(globe, "globe.svg", "Globe with meridians.");

/// The brand logo, full color.
pub fn logo() -> Svg<'static> {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    static DATA: &[u8] = include_bytes!("../../assets/branding/iced_card.svg");
    let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
    Svg::new(handle.clone())
}

/// Applies a fixed square size and tint to an icon.
pub fn tinted(icon: Svg<'static>, edge: f32, color: Color) -> Svg<'static> {
    icon.width(Length::Fixed(edge))
        .height(Length::Fixed(edge))
        .style(move |_theme, _status| iced::widget::svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_construct() {
        let _ = sun();
        let _ = moon();
        let _ = share();
        let _ = qr_code();
        let _ = phone();
        let _ = envelope();
        let _ = whatsapp();
        let _ = instagram();
        let _ = globe();
        let _ = logo();
    }

    #[test]
    fn tinting_is_applied_without_panicking() {
        let _ = tinted(sun(), 18.0, Color::WHITE);
    }
}
