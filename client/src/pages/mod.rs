//! Page modules, one per workspace panel.
//!
//! ARCHITECTURE
//! ============
//! Each page reads the static dataset directly and delegates shared chrome
//! (cards, badges, bars) to `components`. Pure display helpers live beside
//! each page so they can be tested without rendering.

pub mod greener_lending;
pub mod health_monitoring;
pub mod loan_trading;
pub mod loan_twins;
pub mod portfolio;
pub mod smart_documents;
