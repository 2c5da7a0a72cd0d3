// SPDX-License-Identifier: MPL-2.0
//! Modal presenting the card address as a QR symbol.
//!
//! Visibility is owned by the parent; this module only renders the overlay
//! and reports backdrop clicks. The content panel is opaque, so clicks
//! inside it never reach the close handler.

use crate::card::qr::QrSymbol;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Horizontal;
use iced::widget::{center, container, mouse_area, opaque, Column, Image, Text};
use iced::Element;

/// Heading shown above the symbol.
pub const HEADING: &str = "Escaneie o QR Code";

/// Shown in place of the symbol when generation failed at startup.
const UNAVAILABLE: &str = "QR Code indisponível";

/// Messages emitted by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The backdrop was clicked.
    Dismissed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    CloseRequested,
}

/// Process an overlay message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Dismissed => Event::CloseRequested,
    }
}

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    pub symbol: Option<&'a QrSymbol>,
}

/// Renders the scrim and the content panel.
pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let symbol: Element<'a, Message> = match ctx.symbol {
        Some(qr) => Image::new(qr.handle.clone())
            .width(qr.size as f32)
            .height(qr.size as f32)
            .into(),
        None => Text::new(UNAVAILABLE).size(typography::BODY).into(),
    };

    let panel = container(
        Column::new()
            .spacing(spacing::MODAL_GAP)
            .align_x(Horizontal::Center)
            .push(Text::new(HEADING).size(typography::MODAL_TITLE))
            .push(symbol),
    )
    .padding(spacing::MODAL_PADDING)
    .style(styles::overlay::modal(ctx.scheme.clone()));

    mouse_area(center(opaque(panel)).style(styles::overlay::scrim))
        .on_press(Message::Dismissed)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::qr;
    use crate::card::CARD_URL;

    #[test]
    fn backdrop_click_requests_close() {
        assert_eq!(update(Message::Dismissed), Event::CloseRequested);
    }

    #[test]
    fn overlay_renders_with_a_symbol() {
        let scheme = ColorScheme::dark();
        let symbol = qr::generate(CARD_URL).expect("encode");
        let _element = view(ViewContext {
            scheme: &scheme,
            symbol: Some(&symbol),
        });
    }

    #[test]
    fn overlay_renders_the_fallback_without_a_symbol() {
        let scheme = ColorScheme::light();
        let _element = view(ViewContext {
            scheme: &scheme,
            symbol: None,
        });
    }
}
