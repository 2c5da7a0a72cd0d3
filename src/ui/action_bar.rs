// SPDX-License-Identifier: MPL-2.0
//! The three controls at the card's foot: toggle theme, share, toggle QR.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::svg::Svg;
use iced::widget::{button, container, Row};
use iced::{Element, Length};

/// Messages emitted by the action bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Flip the light/dark flag.
    ToggleTheme,
    /// Hand the card to another application.
    Share,
    /// Flip the QR overlay visibility.
    ToggleQr,
}

/// Contextual data needed to render the bar.
pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    pub dark_mode: bool,
}

/// Renders the tray with its three round buttons. The theme control shows
/// the mode a press would switch *to*, mirroring the original card.
pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let theme_icon = if ctx.dark_mode {
        icons::sun()
    } else {
        icons::moon()
    };

    let controls = Row::new()
        .spacing(spacing::ACTION_GAP)
        .align_y(Vertical::Center)
        .push(action_button(theme_icon, Message::ToggleTheme, ctx.scheme))
        .push(action_button(icons::share(), Message::Share, ctx.scheme))
        .push(action_button(icons::qr_code(), Message::ToggleQr, ctx.scheme));

    container(controls)
        .width(Length::Fill)
        .padding(spacing::TRAY_PADDING)
        .align_x(Horizontal::Center)
        .style(styles::container::action_tray(ctx.scheme.clone()))
        .into()
}

fn action_button<'a>(
    icon: Svg<'static>,
    message: Message,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    let glyph = container(icons::tinted(icon, sizing::ICON, scheme.text))
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    button(glyph)
        .width(Length::Fixed(sizing::ACTION_BUTTON))
        .height(Length::Fixed(sizing::ACTION_BUTTON))
        .style(styles::button::action(scheme.clone()))
        .on_press(message)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_renders_in_both_modes() {
        for dark_mode in [false, true] {
            let scheme = ColorScheme::for_mode(dark_mode);
            let _element = view(ViewContext {
                scheme: &scheme,
                dark_mode,
            });
        }
    }
}
