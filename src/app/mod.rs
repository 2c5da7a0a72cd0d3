// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! `App` owns the card's flat UI state (theme flag, overlay visibility,
//! pointer tilt) and translates messages into state changes or
//! fire-and-forget platform hand-offs. Policy stays close to the update
//! loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::Message;

use crate::card::{
    self,
    qr::{self, QrSymbol},
};
use crate::ui::state::tilt::TiltState;
use crate::ui::theming::{self, ColorScheme};
use iced::{window, Element, Size, Subscription, Task, Theme};
use tracing::warn;

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;
pub const MIN_WINDOW_WIDTH: u32 = 390;
pub const MIN_WINDOW_HEIGHT: u32 = 740;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    /// Dark palette selected when true.
    dark_mode: bool,
    /// Last ambient preference observed; only a change overrides the flag.
    last_system_dark: Option<bool>,
    /// QR modal visibility.
    qr_visible: bool,
    /// Pointer-driven card rotation and the window size behind it.
    tilt: TiltState,
    /// Pre-rendered QR symbol for the card address; `None` if generation
    /// failed at startup.
    qr_symbol: Option<QrSymbol>,
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            dark_mode: false,
            last_system_dark: None,
            qr_visible: false,
            tilt: TiltState::new(Size::new(
                WINDOW_DEFAULT_WIDTH as f32,
                WINDOW_DEFAULT_HEIGHT as f32,
            )),
            qr_symbol: None,
        }
    }
}

impl App {
    /// Initializes state from the ambient color-scheme preference and
    /// pre-renders the QR symbol for the card address.
    fn new() -> (Self, Task<Message>) {
        let system = theming::system_prefers_dark();

        let qr_symbol = match qr::generate(card::CARD_URL) {
            Ok(symbol) => Some(symbol),
            Err(e) => {
                warn!(error = %e, "QR symbol generation failed; the overlay will show a fallback");
                None
            }
        };

        let app = App {
            dark_mode: system == Some(true),
            last_system_dark: system,
            qr_symbol,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("{}{}", card::NAME_BRAND, card::NAME_SUFFIX)
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn scheme(&self) -> ColorScheme {
        ColorScheme::for_mode(self.dark_mode)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_theme_watch_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            dark_mode: &mut self.dark_mode,
            last_system_dark: &mut self.last_system_dark,
            qr_visible: &mut self.qr_visible,
            tilt: &mut self.tilt,
        };

        match message {
            Message::Card(card_message) => update::handle_card_message(&mut ctx, card_message),
            Message::QrOverlay(overlay_message) => {
                update::handle_qr_overlay_message(&mut ctx, overlay_message)
            }
            Message::PointerMoved(position) => update::handle_pointer_moved(&mut ctx, position),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::SystemThemeDetected(detected) => {
                update::handle_system_theme(&mut ctx, detected)
            }
            Message::ShareCompleted(result) => update::handle_share_completed(result),
            Message::LinkOpened(kind, result) => update::handle_link_opened(kind, result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            scheme: self.scheme(),
            dark_mode: self.dark_mode,
            qr_visible: self.qr_visible,
            qr_symbol: self.qr_symbol.as_ref(),
            tilt: self.tilt.rotation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::contact::ContactKind;
    use crate::error::Error;
    use crate::ui::state::tilt::Tilt;
    use crate::ui::{action_bar, card_view, contact_list, qr_overlay};
    use iced::Point;

    fn toggle_theme(app: &mut App) {
        let _ = app.update(Message::Card(card_view::Message::Actions(
            action_bar::Message::ToggleTheme,
        )));
    }

    fn toggle_qr(app: &mut App) {
        let _ = app.update(Message::Card(card_view::Message::Actions(
            action_bar::Message::ToggleQr,
        )));
    }

    #[test]
    fn new_starts_with_overlay_hidden_and_level_tilt() {
        let (app, _task) = App::new();
        assert!(!app.qr_visible);
        assert_eq!(app.tilt.rotation, Tilt::LEVEL);
    }

    #[test]
    fn new_flag_follows_a_positive_dark_detection() {
        let (app, _task) = App::new();
        assert_eq!(
            app.dark_mode,
            theming::system_prefers_dark() == Some(true)
        );
    }

    #[test]
    fn theme_toggle_is_an_involution() {
        let mut app = App::default();
        let original = app.scheme();

        toggle_theme(&mut app);
        assert_ne!(app.scheme(), original);

        toggle_theme(&mut app);
        assert_eq!(app.scheme(), original);
    }

    #[test]
    fn theme_maps_flag_to_iced_theme() {
        let mut app = App::default();
        assert!(matches!(app.theme(), Theme::Light));
        toggle_theme(&mut app);
        assert!(matches!(app.theme(), Theme::Dark));
    }

    #[test]
    fn qr_toggle_is_idempotent_over_two_presses() {
        let mut app = App::default();

        toggle_qr(&mut app);
        assert!(app.qr_visible);
        toggle_qr(&mut app);
        assert!(!app.qr_visible);
    }

    #[test]
    fn qr_and_theme_flags_are_independent() {
        let mut app = App::default();

        toggle_qr(&mut app);
        let dark_before = app.dark_mode;
        toggle_theme(&mut app);
        assert!(app.qr_visible, "theme toggle must not touch the overlay");
        assert_ne!(app.dark_mode, dark_before);

        toggle_qr(&mut app);
        assert_ne!(app.dark_mode, dark_before, "overlay toggle must not touch the theme");
    }

    #[test]
    fn backdrop_click_closes_the_overlay() {
        let mut app = App::default();
        toggle_qr(&mut app);

        let _ = app.update(Message::QrOverlay(qr_overlay::Message::Dismissed));
        assert!(!app.qr_visible);

        // Closing an already-closed overlay is harmless.
        let _ = app.update(Message::QrOverlay(qr_overlay::Message::Dismissed));
        assert!(!app.qr_visible);
    }

    #[test]
    fn share_failure_changes_no_state() {
        let mut app = App::default();
        toggle_qr(&mut app);
        let dark_before = app.dark_mode;
        let tilt_before = app.tilt.rotation;

        let _ = app.update(Message::ShareCompleted(Err(Error::Launch(
            "capability rejected".into(),
        ))));

        assert_eq!(app.dark_mode, dark_before);
        assert!(app.qr_visible);
        assert_eq!(app.tilt.rotation, tilt_before);
    }

    #[test]
    fn link_failure_changes_no_state() {
        let mut app = App::default();
        let dark_before = app.dark_mode;

        let _ = app.update(Message::LinkOpened(
            ContactKind::Call,
            Err(Error::Launch("no dialer".into())),
        ));

        assert_eq!(app.dark_mode, dark_before);
        assert!(!app.qr_visible);
    }

    #[test]
    fn pointer_move_recomputes_tilt_against_default_window() {
        let mut app = App::default();

        // Default window is 420x780, so its center is (210, 390).
        let _ = app.update(Message::PointerMoved(Point::new(210.0, 390.0)));
        assert_eq!(app.tilt.rotation, Tilt::LEVEL);

        let _ = app.update(Message::PointerMoved(Point::new(260.0, 390.0)));
        assert_eq!(app.tilt.rotation, Tilt { x: 0.0, y: 1.0 });
    }

    #[test]
    fn resize_feeds_subsequent_tilt_computations() {
        let mut app = App::default();

        let _ = app.update(Message::WindowResized(Size::new(1000.0, 800.0)));
        let _ = app.update(Message::PointerMoved(Point::new(550.0, 400.0)));
        assert_eq!(app.tilt.rotation, Tilt { x: 0.0, y: 1.0 });
    }

    #[test]
    fn platform_change_overrides_a_manual_toggle() {
        let mut app = App {
            dark_mode: false,
            last_system_dark: Some(false),
            ..App::default()
        };

        // The user flips to dark by hand.
        toggle_theme(&mut app);
        assert!(app.dark_mode);

        // The platform still reports light: no change observed, the manual
        // choice survives.
        let _ = app.update(Message::SystemThemeDetected(Some(false)));
        assert!(app.dark_mode);

        // The platform flips to dark and back to light: the second change
        // overrides the manual choice.
        let _ = app.update(Message::SystemThemeDetected(Some(true)));
        assert!(app.dark_mode);
        let _ = app.update(Message::SystemThemeDetected(Some(false)));
        assert!(!app.dark_mode);
    }

    #[test]
    fn unreported_preference_changes_nothing() {
        let mut app = App {
            dark_mode: true,
            last_system_dark: Some(true),
            ..App::default()
        };

        let _ = app.update(Message::SystemThemeDetected(None));
        assert!(app.dark_mode);
        assert_eq!(app.last_system_dark, Some(true));
    }

    #[test]
    fn contact_open_produces_a_task_without_touching_state() {
        let mut app = App::default();
        let dark_before = app.dark_mode;

        let _task = app.update(Message::Card(card_view::Message::Contacts(
            contact_list::Message::Open(ContactKind::WhatsApp),
        )));

        assert_eq!(app.dark_mode, dark_before);
        assert!(!app.qr_visible);
    }

    #[test]
    fn title_is_the_card_name() {
        let app = App::default();
        assert_eq!(app.title(), "DGSolutionWEB");
    }

    #[test]
    fn view_renders_with_and_without_the_overlay() {
        let (mut app, _task) = App::new();
        let element = app.view();
        drop(element);

        toggle_qr(&mut app);
        let _element = app.view();
    }

    #[test]
    fn subscriptions_are_active_while_the_app_runs() {
        let app = App::default();
        // Batch of the pointer/resize listener and the preference poll; the
        // runtime tears both down when the application exits.
        let _subscription = app.subscription();
    }
}
