//! Record shapes for the mock loan portfolio.
//!
//! DESIGN
//! ======
//! Every record is a flat, immutable value built from `'static` literals in
//! `crate::mock`. Nothing here is created, updated, or deleted at runtime;
//! views borrow these records and format them on every render.

pub mod document;
pub mod loan;
pub mod monitoring;
pub mod sustainability;
pub mod trading;

pub use document::{
    ClauseStatus, CovenantProgram, DocumentArticle, DocumentSection, ProgramAction, ProgramField, ProgramValue, SmartClause,
};
pub use loan::{Alert, AlertSeverity, Loan, LoanStatus, PortfolioMetrics, RiskLevel};
pub use monitoring::{
    AuditEntry, AuditKind, ComplianceTrack, CovenantCheck, CovenantStanding, EarlyWarning, FinancialRatio, HealthWeight,
    Momentum, QuarterlyCashflow, RiskIndicator, Trend, WarningStatus,
};
pub use sustainability::{EsgMetric, ImpactDirection, SustainabilityImpact};
pub use trading::{Trade, TradingPosition};
