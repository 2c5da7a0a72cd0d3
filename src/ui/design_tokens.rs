// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the card.
//!
//! - **Palette**: base colors, including the brand cyan and the two surface
//!   families the light/dark schemes draw from
//! - **Opacity**: shadow and overlay opacity levels
//! - **Spacing**: gaps and paddings
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: corner radii
//! - **Card**: the phone geometry
//! - **Shadow**: shadow builders
//!
//! Tokens are validated at compile time at the bottom of this module.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Brand cyan and its deep companion (the original gradient endpoints).
    pub const PRIMARY: Color = Color::from_rgb(0.0, 0.776, 1.0); // #00c6ff
    pub const PRIMARY_DEEP: Color = Color::from_rgb(0.0, 0.447, 1.0); // #0072ff

    // Light surface family.
    pub const LIGHT_BACKGROUND: Color = Color::from_rgb(0.961, 0.961, 0.961); // #f5f5f5
    pub const LIGHT_CARD: Color = WHITE;
    pub const LIGHT_TEXT: Color = Color::from_rgb(0.2, 0.2, 0.2); // #333333
    pub const LIGHT_BUTTON: Color = Color::from_rgb(0.941, 0.941, 0.941); // #f0f0f0
    pub const LIGHT_BUTTON_HOVER: Color = Color::from_rgb(0.878, 0.878, 0.878); // #e0e0e0
    pub const LIGHT_BORDER: Color = Color::from_rgb(0.878, 0.878, 0.878); // #e0e0e0

    // Dark surface family.
    pub const DARK_BACKGROUND: Color = Color::from_rgb(0.071, 0.071, 0.071); // #121212
    pub const DARK_CARD: Color = Color::from_rgb(0.102, 0.102, 0.102); // #1a1a1a
    pub const DARK_TEXT: Color = WHITE;
    pub const DARK_BUTTON: Color = Color::from_rgb(0.165, 0.165, 0.165); // #2a2a2a
    pub const DARK_BUTTON_HOVER: Color = Color::from_rgb(0.227, 0.227, 0.227); // #3a3a3a
    pub const DARK_BORDER: Color = Color::from_rgb(0.196, 0.196, 0.196); // #323232

    // WhatsApp brand greens, identical in both themes.
    pub const WHATSAPP: Color = Color::from_rgb(0.145, 0.827, 0.4); // #25d366
    pub const WHATSAPP_DEEP: Color = Color::from_rgb(0.071, 0.549, 0.494); // #128c7e
    pub const WHATSAPP_HOVER: Color = Color::from_rgb(0.18, 0.886, 0.451); // #2ee273

    // Muted subtitle gray.
    pub const SUBTLE_TEXT: Color = Color::from_rgb(0.627, 0.627, 0.627); // #a0a0a0

    // Notch decoration.
    pub const NOTCH: Color = BLACK;
    pub const NOTCH_DOT: Color = Color::from_rgb(0.2, 0.2, 0.2);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Shadow tint in light mode.
    pub const SHADOW_LIGHT: f32 = 0.1;
    /// Shadow tint in dark mode.
    pub const SHADOW_DARK: f32 = 0.4;
    /// Modal backdrop scrim.
    pub const BACKDROP: f32 = 0.8;
    /// Faint brand glow behind the logo.
    pub const LOGO_GLOW: f32 = 0.03;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    /// Gap between contact rows.
    pub const ROW_GAP: f32 = 6.0;
    /// Gap between a row icon and its label.
    pub const ICON_GAP: f32 = 12.0;
    /// Contact row inner padding.
    pub const CONTACT_PADDING: f32 = 12.0;
    /// Gap between the action buttons.
    pub const ACTION_GAP: f32 = 12.0;
    /// Action tray inner padding.
    pub const TRAY_PADDING: f32 = 12.0;
    /// Gaps inside the header block.
    pub const HEADER_GAP: f32 = 5.0;
    /// Logo plate inner padding.
    pub const LOGO_PADDING: f32 = 10.0;
    /// Screen inner padding.
    pub const SCREEN_PADDING: f32 = 15.0;
    /// Modal inner padding.
    pub const MODAL_PADDING: f32 = 25.0;
    /// Gap between the modal heading and the symbol.
    pub const MODAL_GAP: f32 = 20.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Logo plate edge.
    pub const LOGO: f32 = 100.0;
    /// Round action button edge.
    pub const ACTION_BUTTON: f32 = 40.0;
    /// Icon edge inside action buttons and contact rows.
    pub const ICON: f32 = 18.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Card owner name.
    pub const NAME: f32 = 24.0;
    /// Subtitle under the name.
    pub const SUBTITLE: f32 = 12.0;
    /// Contact row labels.
    pub const BODY: f32 = 15.0;
    /// Modal heading.
    pub const MODAL_TITLE: f32 = 18.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    /// Contact row corners.
    pub const CONTACT: f32 = 12.0;
    /// Logo plate corners.
    pub const LOGO: f32 = 20.0;
    /// Modal surface corners.
    pub const MODAL: f32 = 20.0;
    /// Notch bottom corners.
    pub const NOTCH: f32 = 18.0;
    /// Pill/circle shape.
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Card Geometry
// ============================================================================

pub mod card {
    /// Phone body width.
    pub const WIDTH: f32 = 340.0;
    /// Phone body height.
    pub const HEIGHT: f32 = 680.0;
    /// Phone body corner radius.
    pub const RADIUS: f32 = 45.0;
    /// Phone bezel border width.
    pub const BORDER: f32 = 8.0;
    /// Phone body inner padding around the screen.
    pub const PADDING: f32 = 20.0;
    /// Screen corner radius.
    pub const SCREEN_RADIUS: f32 = 35.0;
    /// Notch width.
    pub const NOTCH_WIDTH: f32 = 160.0;
    /// Notch height.
    pub const NOTCH_HEIGHT: f32 = 28.0;
}

// ============================================================================
// Shadow Builders
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Raised element (contact rows, action buttons).
    #[must_use]
    pub fn raised(tint: Color) -> Shadow {
        Shadow {
            color: tint,
            offset: Vector { x: 0.0, y: 4.0 },
            blur_radius: 8.0,
        }
    }

    /// Floating surface (the phone body, the modal).
    #[must_use]
    pub fn floating(tint: Color) -> Shadow {
        Shadow {
            color: tint,
            offset: Vector { x: 0.0, y: 10.0 },
            blur_radius: 30.0,
        }
    }
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::ROW_GAP > 0.0);
    assert!(spacing::MODAL_PADDING > spacing::CONTACT_PADDING);

    // Opacity validation
    assert!(opacity::SHADOW_LIGHT < opacity::SHADOW_DARK);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    // Typography validation
    assert!(typography::NAME > typography::MODAL_TITLE);
    assert!(typography::MODAL_TITLE > typography::BODY);
    assert!(typography::BODY > typography::SUBTITLE);

    // Geometry validation
    assert!(card::HEIGHT > card::WIDTH);
    assert!(card::RADIUS > card::SCREEN_RADIUS - 20.0);
    assert!(card::NOTCH_WIDTH < card::WIDTH);

    // Color validation
    assert!(palette::PRIMARY.b >= palette::PRIMARY.r);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_primary_is_cyan_leaning() {
        assert!(palette::PRIMARY.b > palette::PRIMARY.g);
        assert!(palette::PRIMARY.g > palette::PRIMARY.r);
    }

    #[test]
    fn surface_families_are_opposed() {
        assert!(palette::LIGHT_BACKGROUND.r > palette::DARK_BACKGROUND.r);
        assert!(palette::LIGHT_TEXT.r < palette::DARK_TEXT.r);
    }
}
