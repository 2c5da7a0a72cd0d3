// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Component modules follow the Elm-style "state down, messages up"
//! pattern: each exposes a `Message` enum and a `view` function over a
//! small `ViewContext`.
//!
//! # Components
//!
//! - [`card_view`] - The phone-shaped card and its parallax placement
//! - [`contact_list`] - The five outbound contact actions
//! - [`action_bar`] - Theme, share, and QR controls
//! - [`qr_overlay`] - Modal presenting the card address as a QR symbol
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state management (pointer tilt)
//! - [`styles`] - Centralized styling (buttons, containers, overlay)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/dark palette resolution
//! - [`icons`] - Embedded SVG icon loading and tinting

pub mod action_bar;
pub mod card_view;
pub mod contact_list;
pub mod design_tokens;
pub mod icons;
pub mod qr_overlay;
pub mod state;
pub mod styles;
pub mod theming;
