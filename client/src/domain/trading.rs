//! Secondary-market positions and trade history.

#[cfg(test)]
#[path = "trading_test.rs"]
mod trading_test;

use super::loan::Loan;

/// Share of principal offered on the secondary market.
pub const AVAILABLE_SHARE: f64 = 0.30;
/// Smallest tradable slice as a share of principal.
pub const MINIMUM_TICKET_SHARE: f64 = 0.05;

/// Quoted price floor, in percent of par.
const PRICE_FLOOR: f64 = 98.0;
/// Quoted price band above the floor, scaled by health score.
const PRICE_BAND: f64 = 4.0;

/// A loan as offered on the trading desk.
#[derive(Clone, Debug, PartialEq)]
pub struct TradingPosition {
    pub loan: &'static Loan,
    pub available_amount: f64,
    pub minimum_ticket: f64,
    /// Price in percent of par.
    pub last_price: f64,
    pub volume_24h_musd: u32,
}

impl TradingPosition {
    /// Quote a loan. Pricing is a pure function of the loan so every render
    /// shows the same book.
    pub fn from_loan(loan: &'static Loan) -> Self {
        let principal_musd = (loan.principal / 1_000_000.0).round();
        // Loan principals in the book are small positive integers of millions.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let volume_24h_musd = 10 + (principal_musd.max(0.0) as u32) % 50;
        Self {
            loan,
            available_amount: loan.principal * AVAILABLE_SHARE,
            minimum_ticket: loan.principal * MINIMUM_TICKET_SHARE,
            last_price: PRICE_FLOOR + f64::from(loan.health_score.min(100)) / 100.0 * PRICE_BAND,
            volume_24h_musd,
        }
    }
}

/// A settled secondary trade.
#[derive(Clone, Debug, PartialEq)]
pub struct Trade {
    pub id: &'static str,
    pub loan_id: &'static str,
    pub buyer: &'static str,
    pub amount: f64,
    /// Price in percent of par.
    pub price: f64,
    pub date: &'static str,
}
