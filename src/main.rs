// SPDX-License-Identifier: MPL-2.0
use iced_card::app;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> iced::Result {
    init_logging();
    app::run()
}

/// Initialize logging with tracing. Diagnostics only; nothing here is ever
/// surfaced in the UI.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_card=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
