// SPDX-License-Identifier: MPL-2.0
//! Top-level messages for the application.

use crate::card::contact::ContactKind;
use crate::error::Error;
use crate::ui::{card_view, qr_overlay};
use iced::{Point, Size};

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded through this single entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Contact rows and action-bar controls.
    Card(card_view::Message),
    /// The QR modal (backdrop clicks).
    QrOverlay(qr_overlay::Message),
    /// Pointer moved over the window; drives the tilt.
    PointerMoved(Point),
    /// Window was resized; subsequent tilt values use the new size.
    WindowResized(Size),
    /// Periodic re-read of the platform color-scheme preference.
    /// `None` when the platform reports nothing usable.
    SystemThemeDetected(Option<bool>),
    /// Outcome of the fire-and-forget share hand-off.
    ShareCompleted(Result<(), Error>),
    /// Outcome of a contact link hand-off.
    LinkOpened(ContactKind, Result<(), Error>),
}
