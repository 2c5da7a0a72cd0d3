// SPDX-License-Identifier: MPL-2.0
//! Centralized styling for buttons, containers, and the modal overlay.

pub mod button;
pub mod container;
pub mod overlay;
