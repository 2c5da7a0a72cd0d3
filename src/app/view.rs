// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::card::qr::QrSymbol;
use crate::ui::card_view;
use crate::ui::qr_overlay;
use crate::ui::state::tilt::Tilt;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub scheme: ColorScheme,
    pub dark_mode: bool,
    pub qr_visible: bool,
    pub qr_symbol: Option<&'a QrSymbol>,
    pub tilt: Tilt,
}

/// Renders the card, stacking the QR modal on top while it is visible.
pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let card = card_view::view(card_view::ViewContext {
        scheme: &ctx.scheme,
        dark_mode: ctx.dark_mode,
        tilt: ctx.tilt,
    })
    .map(Message::Card);

    let base = container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop(ctx.scheme.clone()));

    if ctx.qr_visible {
        let modal = qr_overlay::view(qr_overlay::ViewContext {
            scheme: &ctx.scheme,
            symbol: ctx.qr_symbol,
        })
        .map(Message::QrOverlay);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base)
            .push(modal)
            .into()
    } else {
        base.into()
    }
}
