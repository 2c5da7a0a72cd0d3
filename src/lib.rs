// SPDX-License-Identifier: MPL-2.0
//! `iced_card` is DGSolutionWEB's digital business card, rendered as a
//! single-window desktop application with the Iced GUI framework.
//!
//! It presents a phone-shaped card with the company's contact actions, a
//! light/dark theme that follows the platform preference, a share action,
//! and a QR code presentation of the card's public address.

pub mod app;
pub mod card;
pub mod error;
pub mod icon;
pub mod ui;
