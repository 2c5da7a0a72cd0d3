// SPDX-License-Identifier: MPL-2.0
//! Integration tests exercising the card's public surface end to end.

use iced_card::card::contact::{ContactKind, ENTRIES};
use iced_card::card::qr;
use iced_card::card::share::SharePayload;
use iced_card::card::CARD_URL;
use iced_card::ui::state::tilt::Tilt;
use iced_card::ui::theming::ColorScheme;
use iced::{Point, Size};

#[test]
fn contact_table_matches_the_published_card() {
    assert_eq!(ENTRIES.len(), 5);

    let uris: Vec<&str> = ENTRIES.iter().map(|e| e.uri).collect();
    assert_eq!(
        uris,
        vec![
            "tel:+5517999754390",
            "mailto:dgsolutionweb@gmail.com",
            "https://wa.me/5517999754390",
            "https://instagram.com/dgsolutionweb",
            "https://dgsolutionweb.github.io/dgsolutionweb/",
        ]
    );

    // Every kind resolves back to its own row.
    for kind in [
        ContactKind::Call,
        ContactKind::Email,
        ContactKind::WhatsApp,
        ContactKind::Instagram,
        ContactKind::Website,
    ] {
        assert_eq!(kind.entry().kind, kind);
    }
}

#[test]
fn share_payload_carries_the_card_address() {
    let payload = SharePayload::card();
    assert_eq!(payload.url, CARD_URL);

    let uri = payload.compose_uri();
    assert!(uri.starts_with("mailto:"));
    // Encoded, the address survives round-trip recognizably.
    assert!(uri.contains("dgsolutionweb.github.io"));
}

#[test]
fn qr_symbol_encodes_the_card_address() {
    let symbol = qr::generate(CARD_URL).expect("the card address must encode");
    assert!(symbol.size > 0);
    assert!(symbol.size <= qr::SYMBOL_SIZE);

    // Same input, same geometry.
    let again = qr::generate(CARD_URL).expect("encode");
    assert_eq!(symbol.size, again.size);
}

#[test]
fn tilt_contract_holds_for_the_reference_viewport() {
    let viewport = Size::new(1000.0, 800.0);

    let centered = Tilt::from_pointer(Point::new(500.0, 400.0), viewport);
    assert_eq!(centered, Tilt { x: 0.0, y: 0.0 });

    let nudged = Tilt::from_pointer(Point::new(550.0, 400.0), viewport);
    assert_eq!(nudged.y, 1.0);
    assert_eq!(nudged.x, 0.0);
}

#[test]
fn palettes_are_a_pure_involution_of_the_flag() {
    for flag in [false, true] {
        assert_eq!(ColorScheme::for_mode(flag), ColorScheme::for_mode(!(!flag)));
        assert_ne!(ColorScheme::for_mode(flag), ColorScheme::for_mode(!flag));
    }
}
