//! Loans, portfolio roll-ups, and risk alerts.

#[cfg(test)]
#[path = "loan_test.rs"]
mod loan_test;

use std::fmt;

use crate::util::metrics::{average_esg_score, average_health_score, total_principal};

/// Covenant compliance below this percentage counts as a breach in the
/// portfolio roll-up.
pub const COVENANT_BREACH_BELOW_PCT: u32 = 90;

/// Credit risk bucket assigned at underwriting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Servicing status of a loan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoanStatus {
    Active,
    Pending,
    Matured,
    Default,
}

impl LoanStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Matured => "Matured",
            Self::Default => "Default",
        }
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single facility in the portfolio.
///
/// `interest_rate` and `covenant_compliance` are percentages; `health_score`
/// and `esg_score` are precomputed 0-100 scores carried by the dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Loan {
    pub id: &'static str,
    pub borrower: &'static str,
    pub sector: &'static str,
    pub region: &'static str,
    pub principal: f64,
    pub interest_rate: f64,
    pub tenor_months: u32,
    pub health_score: u32,
    pub risk_level: RiskLevel,
    pub status: LoanStatus,
    pub esg_score: u32,
    pub covenant_compliance: u32,
    pub next_payment_date: &'static str,
    pub origination_date: &'static str,
    pub maturity_date: &'static str,
}

/// Headline numbers shown on the portfolio overview.
#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioMetrics {
    pub total_aum: f64,
    pub average_health_score: u32,
    pub active_alerts: usize,
    pub total_loans: usize,
    pub esg_impact_score: u32,
    pub covenant_breaches: usize,
}

impl PortfolioMetrics {
    /// Roll the loan book and alert feed up into the overview figures.
    pub fn derive(loans: &[Loan], alerts: &[Alert]) -> Self {
        Self {
            total_aum: total_principal(loans),
            average_health_score: average_health_score(loans),
            active_alerts: alerts.len(),
            total_loans: loans.len(),
            esg_impact_score: average_esg_score(loans),
            covenant_breaches: loans
                .iter()
                .filter(|loan| loan.covenant_compliance < COVENANT_BREACH_BELOW_PCT)
                .count(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

impl AlertSeverity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A risk alert raised against one loan.
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub id: &'static str,
    pub loan_id: &'static str,
    pub severity: AlertSeverity,
    pub message: &'static str,
    pub timestamp: &'static str,
}
