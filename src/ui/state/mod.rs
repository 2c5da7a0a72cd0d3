// SPDX-License-Identifier: MPL-2.0
//! UI state management separated from the main App struct.

pub mod tilt;

pub use tilt::{Tilt, TiltState};
