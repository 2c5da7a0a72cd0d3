// SPDX-License-Identifier: MPL-2.0
//! QR symbol rendering for the card address.
//!
//! Encoding is delegated to the `qrcode` crate at high error correction;
//! rasterization to RGBA happens here so the overlay can show the symbol
//! through a plain image widget. The symbol is generated once at startup,
//! since the encoded address never changes.

use crate::error::Result;
use iced::widget::image::Handle;
use qrcode::{Color, EcLevel, QrCode};

/// Pixel budget for one edge of the rendered symbol. The actual edge is the
/// largest module-aligned size that fits the budget.
pub const SYMBOL_SIZE: u32 = 200;

/// Quiet-zone width on each side, in modules.
const QUIET_ZONE: u32 = 4;

/// A rasterized QR symbol ready to display.
#[derive(Debug, Clone)]
pub struct QrSymbol {
    pub handle: Handle,
    /// Edge length in pixels (the symbol is square).
    pub size: u32,
}

/// Encodes `data` at error-correction level H and rasterizes it, dark
/// modules on white, with the quiet zone included.
pub fn generate(data: &str) -> Result<QrSymbol> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::H)?;
    let modules = code.width() as u32;
    let total = modules + 2 * QUIET_ZONE;
    let scale = (SYMBOL_SIZE / total).max(1);
    let size = total * scale;

    let mut rgba = vec![255u8; (size * size * 4) as usize];
    for (index, color) in code.to_colors().iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let module_x = (index as u32 % modules + QUIET_ZONE) * scale;
        let module_y = (index as u32 / modules + QUIET_ZONE) * scale;
        for y in module_y..module_y + scale {
            for x in module_x..module_x + scale {
                let offset = ((y * size + x) * 4) as usize;
                // Leave alpha at 255, zero the color channels.
                rgba[offset..offset + 3].fill(0);
            }
        }
    }

    Ok(QrSymbol {
        handle: Handle::from_rgba(size, size, rgba),
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CARD_URL;

    #[test]
    fn generates_symbol_for_card_url() {
        let symbol = generate(CARD_URL).expect("card URL must encode");
        assert!(symbol.size > 0);
        assert!(symbol.size <= SYMBOL_SIZE);
    }

    #[test]
    fn symbol_size_is_deterministic() {
        let a = generate(CARD_URL).expect("encode");
        let b = generate(CARD_URL).expect("encode");
        assert_eq!(a.size, b.size);
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let too_long = "x".repeat(8000);
        assert!(generate(&too_long).is_err());
    }

    #[test]
    fn scale_never_drops_below_one_module_per_pixel() {
        // A long payload yields a dense code whose module count exceeds the
        // pixel budget; the symbol may then be larger than the budget but
        // must still be module-aligned and non-empty.
        let long = "x".repeat(1000);
        let symbol = generate(&long).expect("encode");
        assert!(symbol.size > 0);
    }
}
