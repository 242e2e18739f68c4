use super::*;
use crate::mock;

fn position_for(id: &str) -> TradingPosition {
    let loan = mock::loans()
        .iter()
        .find(|l| l.id == id)
        .expect("loan present in mock book");
    TradingPosition::from_loan(loan)
}

#[test]
fn available_and_ticket_are_shares_of_principal() {
    let position = position_for("LN-2024-001");
    assert!((position.available_amount - 37_500_000.0).abs() < 1e-6);
    assert!((position.minimum_ticket - 6_250_000.0).abs() < 1e-6);
}

#[test]
fn price_tracks_health_within_band() {
    for loan in mock::loans() {
        let position = TradingPosition::from_loan(loan);
        assert!(position.last_price >= PRICE_FLOOR);
        assert!(position.last_price <= PRICE_FLOOR + PRICE_BAND);
    }
    let healthy = position_for("LN-2024-002");
    let stressed = position_for("LN-2024-004");
    assert!(healthy.last_price > stressed.last_price);
}

#[test]
fn quote_is_deterministic() {
    let a = position_for("LN-2024-003");
    let b = position_for("LN-2024-003");
    assert_eq!(a, b);
}

#[test]
fn volume_stays_in_display_range() {
    for loan in mock::loans() {
        let volume = TradingPosition::from_loan(loan).volume_24h_musd;
        assert!((10..60).contains(&volume), "volume {volume} out of range");
    }
}
