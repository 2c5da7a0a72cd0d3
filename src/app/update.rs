// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers mutate the flat UI state through `UpdateContext` and return
//! tasks only for the fire-and-forget platform hand-offs. Hand-off
//! failures are logged here and change nothing else.

use super::Message;
use crate::card::contact::ContactKind;
use crate::card::share::{self, SharePayload};
use crate::error::Error;
use crate::ui::state::tilt::TiltState;
use crate::ui::{action_bar, card_view, contact_list, qr_overlay};
use iced::{Point, Size, Task};
use tracing::{debug, warn};

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub dark_mode: &'a mut bool,
    pub last_system_dark: &'a mut Option<bool>,
    pub qr_visible: &'a mut bool,
    pub tilt: &'a mut TiltState,
}

/// Handles messages bubbling out of the card (contact rows and action bar).
pub fn handle_card_message(
    ctx: &mut UpdateContext<'_>,
    message: card_view::Message,
) -> Task<Message> {
    match message {
        card_view::Message::Contacts(contact_list::Message::Open(kind)) => open_contact(kind),
        card_view::Message::Actions(action_bar::Message::ToggleTheme) => {
            // A manual choice; a later platform preference change still wins.
            *ctx.dark_mode = !*ctx.dark_mode;
            Task::none()
        }
        card_view::Message::Actions(action_bar::Message::Share) => {
            Task::perform(share::invoke(SharePayload::card()), Message::ShareCompleted)
        }
        card_view::Message::Actions(action_bar::Message::ToggleQr) => {
            *ctx.qr_visible = !*ctx.qr_visible;
            Task::none()
        }
    }
}

fn open_contact(kind: ContactKind) -> Task<Message> {
    Task::perform(
        async move { share::open_target(kind.entry().uri) },
        move |result| Message::LinkOpened(kind, result),
    )
}

/// The QR overlay only ever asks to be closed.
pub fn handle_qr_overlay_message(
    ctx: &mut UpdateContext<'_>,
    message: qr_overlay::Message,
) -> Task<Message> {
    match qr_overlay::update(message) {
        qr_overlay::Event::CloseRequested => *ctx.qr_visible = false,
    }
    Task::none()
}

pub fn handle_pointer_moved(ctx: &mut UpdateContext<'_>, position: Point) -> Task<Message> {
    ctx.tilt.pointer_moved(position);
    Task::none()
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    ctx.tilt.window_resized(size);
    Task::none()
}

/// Applies a freshly observed platform preference. Only a *changed*
/// observation overrides the flag, so a manual toggle survives until the
/// platform preference itself moves.
pub fn handle_system_theme(ctx: &mut UpdateContext<'_>, detected: Option<bool>) -> Task<Message> {
    if let Some(dark) = detected {
        if *ctx.last_system_dark != Some(dark) {
            *ctx.dark_mode = dark;
        }
        *ctx.last_system_dark = Some(dark);
    }
    Task::none()
}

/// Share failures are absorbed: logged for diagnostics, nothing else.
pub fn handle_share_completed(result: Result<(), Error>) -> Task<Message> {
    match result {
        Ok(()) => debug!("share hand-off accepted by the platform"),
        Err(e) => debug!(error = %e, "share hand-off failed"),
    }
    Task::none()
}

pub fn handle_link_opened(kind: ContactKind, result: Result<(), Error>) -> Task<Message> {
    if let Err(e) = result {
        warn!(contact = ?kind, error = %e, "contact link hand-off failed");
    }
    Task::none()
}
