// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! The embedded brand logo SVG is rasterized at runtime into the RGBA icon
//! shown in the title bar. Returns `None` if parsing or rendering fails.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized window icon.
const ICON_EDGE: u32 = 128;

/// The brand logo, embedded so packaging never has to locate assets on disk.
const LOGO_SVG: &[u8] = include_bytes!("../assets/branding/iced_card.svg");

/// Rasterize the embedded logo to an `ICON_EDGE`-square RGBA window icon.
pub fn load_window_icon() -> Option<Icon> {
    let tree = usvg::Tree::from_data(LOGO_SVG, &usvg::Options::default()).ok()?;

    let source = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        ICON_EDGE as f32 / source.width(),
        ICON_EDGE as f32 / source.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(ICON_EDGE, ICON_EDGE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.data().to_vec(), ICON_EDGE, ICON_EDGE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_logo_parses_and_renders() {
        assert!(load_window_icon().is_some());
    }
}
