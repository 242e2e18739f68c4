//! Health-monitoring, covenant, and audit records for the loan views.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// An external market or credit signal.
#[derive(Clone, Debug, PartialEq)]
pub struct RiskIndicator {
    pub name: &'static str,
    pub status: &'static str,
    pub trend: Trend,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WarningStatus {
    Warning,
    Healthy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Momentum {
    Improving,
    Stable,
    Declining,
}

impl Momentum {
    pub fn label(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Stable => "stable",
            Self::Declining => "declining",
        }
    }
}

/// A financial ratio tracked against its covenant threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct EarlyWarning {
    pub metric: &'static str,
    pub current: f64,
    pub threshold: f64,
    pub status: WarningStatus,
    pub trend: Momentum,
}

/// A `met of total` compliance bar.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplianceTrack {
    pub label: &'static str,
    pub met: u32,
    pub total: u32,
    /// Word after the percentage, e.g. `Compliant` in "92% Compliant".
    pub status_word: &'static str,
    pub caption: &'static str,
}

/// One component of the published health-score methodology.
#[derive(Clone, Debug, PartialEq)]
pub struct HealthWeight {
    pub label: &'static str,
    pub weight_pct: u32,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CovenantStanding {
    InCompliance,
    Approaching,
}

impl CovenantStanding {
    pub fn label(self) -> &'static str {
        match self {
            Self::InCompliance => "In compliance",
            Self::Approaching => "Approaching threshold",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CovenantCheck {
    pub name: &'static str,
    pub value: &'static str,
    pub threshold: &'static str,
    pub standing: CovenantStanding,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuditKind {
    Success,
    Warning,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuditEntry {
    pub date: &'static str,
    pub event: &'static str,
    pub description: &'static str,
    pub kind: AuditKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FinancialRatio {
    pub label: &'static str,
    pub value: &'static str,
}

/// Quarterly cashflow in millions of USD.
#[derive(Clone, Debug, PartialEq)]
pub struct QuarterlyCashflow {
    pub quarter: &'static str,
    pub amount_musd: u32,
}
