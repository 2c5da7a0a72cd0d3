// SPDX-License-Identifier: MPL-2.0
//! The phone-shaped card: notch, screen, header, contact list, action bar.
//!
//! The card is a fixed-size body centered in the window. The pointer tilt
//! is applied here: Iced has no perspective transform, so the rotation
//! degrees translate into a small parallax offset of the body.

use crate::card;
use crate::ui::action_bar;
use crate::ui::contact_list;
use crate::ui::design_tokens::{card as geometry, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::state::tilt::Tilt;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, text, Column, Row, Space, Stack, Text};
use iced::{Color, Element, Length, Padding, Theme};

/// Parallax travel per degree of rotation, in logical pixels.
const PARALLAX_PX_PER_DEGREE: f32 = 1.5;

/// Messages bubbling out of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Contacts(contact_list::Message),
    Actions(action_bar::Message),
}

/// Contextual data needed to render the card.
pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    pub dark_mode: bool,
    pub tilt: Tilt,
}

/// Renders the card centered in the window, nudged by the current tilt.
pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let contacts = contact_list::view(contact_list::ViewContext { scheme: ctx.scheme })
        .map(Message::Contacts);
    let actions = action_bar::view(action_bar::ViewContext {
        scheme: ctx.scheme,
        dark_mode: ctx.dark_mode,
    })
    .map(Message::Actions);

    let screen_content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .push(Space::new().height(Length::Fixed(geometry::NOTCH_HEIGHT)))
        .push(build_header(ctx.scheme))
        .push(Space::new().height(Length::Fill))
        .push(contacts)
        .push(Space::new().height(Length::Fill))
        .push(actions);

    let screen = container(screen_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::SCREEN_PADDING)
        .style(styles::container::screen(ctx.scheme.clone()));

    let notch_layer = container(build_notch())
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let phone = container(Stack::new().push(screen).push(notch_layer))
        .width(Length::Fixed(geometry::WIDTH))
        .height(Length::Fixed(geometry::HEIGHT))
        .padding(geometry::PADDING)
        .style(styles::container::phone(ctx.scheme.clone()));

    let (dx, dy) = parallax_offset(ctx.tilt);
    container(phone)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(Padding {
            top: dy.max(0.0),
            right: (-dx).max(0.0),
            bottom: (-dy).max(0.0),
            left: dx.max(0.0),
        })
        .into()
}

/// Converts tilt degrees into the card's on-screen nudge.
fn parallax_offset(tilt: Tilt) -> (f32, f32) {
    (
        tilt.y * PARALLAX_PX_PER_DEGREE,
        tilt.x * PARALLAX_PX_PER_DEGREE,
    )
}

fn build_header<'a>(scheme: &ColorScheme) -> Element<'a, Message> {
    let logo = container(
        icons::logo()
            .width(Length::Fixed(sizing::LOGO))
            .height(Length::Fixed(sizing::LOGO)),
    )
    .padding(spacing::LOGO_PADDING)
    .style(styles::container::logo_plate);

    let name = Row::new()
        .push(colored_text(card::NAME_BRAND, typography::NAME, scheme.primary))
        .push(colored_text(card::NAME_SUFFIX, typography::NAME, scheme.text));

    let title = Row::new()
        .push(colored_text(
            card::TITLE_PREFIX,
            typography::SUBTITLE,
            palette::SUBTLE_TEXT,
        ))
        .push(colored_text(
            card::TITLE_ACCENT,
            typography::SUBTITLE,
            scheme.primary,
        ));

    Column::new()
        .spacing(spacing::HEADER_GAP)
        .align_x(Horizontal::Center)
        .push(logo)
        .push(name)
        .push(title)
        .into()
}

fn colored_text<'a>(content: &'static str, size: f32, color: Color) -> Text<'a> {
    Text::new(content)
        .size(size)
        .style(move |_theme: &Theme| text::Style { color: Some(color) })
}

fn build_notch<'a>() -> Element<'a, Message> {
    let dot = container(
        Space::new()
            .width(Length::Fixed(8.0))
            .height(Length::Fixed(8.0)),
    )
    .style(styles::container::notch_dot);

    container(dot)
        .width(Length::Fixed(geometry::NOTCH_WIDTH))
        .height(Length::Fixed(geometry::NOTCH_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::notch)
        .into()
}
