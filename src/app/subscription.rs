// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Subscriptions are declarative: they run exactly while `App::subscription`
//! returns them and are torn down by the runtime afterwards, so pointer and
//! preference listeners never outlive the view.

use super::Message;
use crate::ui::theming;
use iced::{event, time, Subscription};
use std::time::Duration;

/// How often the ambient color-scheme preference is re-read.
pub const THEME_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Routes native window events into messages: every pointer move feeds the
/// tilt, every resize updates the viewport the tilt is computed against.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        event::Event::Mouse(iced::mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}

/// Re-reads the ambient preference on a fixed cadence. Detection happens in
/// the subscription so the update loop stays a plain state transition.
pub fn create_theme_watch_subscription() -> Subscription<Message> {
    time::every(THEME_POLL_INTERVAL)
        .map(|_| Message::SystemThemeDetected(theming::system_prefers_dark()))
}
