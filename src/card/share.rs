// SPDX-License-Identifier: MPL-2.0
//! Share hand-off: give the card to another installed application.
//!
//! Desktops have no universal share sheet, so the payload is rendered as a
//! pre-addressed `mailto:` compose URI and handed to the platform handler,
//! which opens whatever application the user has registered for it. The
//! hand-off is fire-and-forget; failures are reported to the caller, which
//! logs and discards them.

use crate::card::CARD_URL;
use crate::error::Result;
use std::fmt::Write as _;

/// Fixed share title.
pub const SHARE_TITLE: &str = "DGSolutionWEB";

/// Fixed descriptive text accompanying the address.
pub const SHARE_TEXT: &str = "Confira nosso cartão digital!";

/// What gets handed to the platform: a title, a line of text, and the card
/// address. All three are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharePayload {
    pub title: &'static str,
    pub text: &'static str,
    pub url: &'static str,
}

impl SharePayload {
    /// The card's payload.
    #[must_use]
    pub fn card() -> Self {
        Self {
            title: SHARE_TITLE,
            text: SHARE_TEXT,
            url: CARD_URL,
        }
    }

    /// Renders the payload as a `mailto:` compose URI with percent-encoded
    /// subject and body.
    #[must_use]
    pub fn compose_uri(&self) -> String {
        format!(
            "mailto:?subject={}&body={}%20{}",
            percent_encode(self.title),
            percent_encode(self.text),
            percent_encode(self.url),
        )
    }
}

/// Percent-encodes a query component: RFC 3986 unreserved bytes pass
/// through, everything else becomes `%XX`.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

/// Attempts the share hand-off. Resolves once the platform has accepted or
/// rejected the URI; the caller discards the outcome either way.
pub async fn invoke(payload: SharePayload) -> Result<()> {
    open_target(&payload.compose_uri())
}

/// Hands any outbound URI (contact links, the share compose target) to the
/// platform handler registered for its scheme.
pub fn open_target(uri: &str) -> Result<()> {
    open::that(uri)?;
    Ok(())
}
