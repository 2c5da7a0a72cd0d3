// SPDX-License-Identifier: MPL-2.0
//! Renders the card's five contact actions.
//!
//! The list is static and order-preserving; activating a row asks the
//! parent to hand the row's URI to the platform handler.

use crate::card::contact::{ContactEntry, ContactKind, ENTRIES};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::svg::Svg;
use iced::widget::{button, text, Column, Row, Text};
use iced::{Element, Length, Theme};

/// Messages emitted by the contact list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A row was activated; its URI should go to the platform handler.
    Open(ContactKind),
}

/// Contextual data needed to render the list.
pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
}

/// Renders the five fixed entries in declaration order.
pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::ROW_GAP).width(Length::Fill);
    for entry in &ENTRIES {
        list = list.push(contact_row(entry, ctx.scheme));
    }
    list.into()
}

fn contact_row<'a>(entry: &'static ContactEntry, scheme: &ColorScheme) -> Element<'a, Message> {
    // The WhatsApp row sits on brand green, so its content is always white.
    let content_color = if entry.kind == ContactKind::WhatsApp {
        palette::WHITE
    } else {
        scheme.text
    };

    let row = Row::new()
        .spacing(spacing::ICON_GAP)
        .align_y(Vertical::Center)
        .push(icons::tinted(icon_for(entry.kind), sizing::ICON, content_color))
        .push(
            Text::new(entry.label)
                .size(typography::BODY)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(content_color),
                }),
        );

    let styled = if entry.kind == ContactKind::WhatsApp {
        button(row).style(styles::button::whatsapp(scheme.clone()))
    } else {
        button(row).style(styles::button::contact(scheme.clone()))
    };

    styled
        .width(Length::Fill)
        .padding(spacing::CONTACT_PADDING)
        .on_press(Message::Open(entry.kind))
        .into()
}

fn icon_for(kind: ContactKind) -> Svg<'static> {
    match kind {
        ContactKind::Call => icons::phone(),
        ContactKind::Email => icons::envelope(),
        ContactKind::WhatsApp => icons::whatsapp(),
        ContactKind::Instagram => icons::instagram(),
        ContactKind::Website => icons::globe(),
    }
}
