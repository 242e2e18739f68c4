//! Static demo dataset shared by every view.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend. Each page calls these accessors directly and formats
//! what it needs; nothing is cached in state or mutated. Records live in
//! `static` tables so accessors hand out `'static` borrows with no
//! allocation.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use crate::domain::{
    Alert, AlertSeverity, AuditEntry, AuditKind, ClauseStatus, ComplianceTrack, CovenantCheck, CovenantProgram,
    CovenantStanding, DocumentArticle, DocumentSection, EarlyWarning, EsgMetric, FinancialRatio, HealthWeight,
    ImpactDirection, Loan, LoanStatus, Momentum, PortfolioMetrics, ProgramAction, ProgramField, ProgramValue,
    QuarterlyCashflow, RiskIndicator, RiskLevel, SmartClause, SustainabilityImpact, Trade, Trend, WarningStatus,
};
use crate::util::tone::Tone;

// =============================================================================
// LOAN BOOK
// =============================================================================

static LOANS: [Loan; 6] = [
    Loan {
        id: "LN-2024-001",
        borrower: "TechCorp Industries Ltd.",
        sector: "Technology",
        region: "North America",
        principal: 125_000_000.0,
        interest_rate: 5.75,
        tenor_months: 60,
        health_score: 87,
        risk_level: RiskLevel::Low,
        status: LoanStatus::Active,
        esg_score: 78,
        covenant_compliance: 98,
        next_payment_date: "2024-02-15",
        origination_date: "2023-02-15",
        maturity_date: "2028-02-15",
    },
    Loan {
        id: "LN-2024-002",
        borrower: "GreenEnergy Solutions Inc.",
        sector: "Renewable Energy",
        region: "Europe",
        principal: 85_000_000.0,
        interest_rate: 4.25,
        tenor_months: 84,
        health_score: 92,
        risk_level: RiskLevel::Low,
        status: LoanStatus::Active,
        esg_score: 94,
        covenant_compliance: 100,
        next_payment_date: "2024-02-28",
        origination_date: "2023-03-01",
        maturity_date: "2030-03-01",
    },
    Loan {
        id: "LN-2024-003",
        borrower: "Global Logistics Partners",
        sector: "Transportation",
        region: "Asia Pacific",
        principal: 65_000_000.0,
        interest_rate: 6.5,
        tenor_months: 48,
        health_score: 68,
        risk_level: RiskLevel::Medium,
        status: LoanStatus::Active,
        esg_score: 55,
        covenant_compliance: 85,
        next_payment_date: "2024-02-10",
        origination_date: "2023-05-10",
        maturity_date: "2027-05-10",
    },
    Loan {
        id: "LN-2024-004",
        borrower: "Manufacturing Dynamics Corp.",
        sector: "Industrials",
        region: "North America",
        principal: 95_000_000.0,
        interest_rate: 7.25,
        tenor_months: 60,
        health_score: 54,
        risk_level: RiskLevel::High,
        status: LoanStatus::Active,
        esg_score: 42,
        covenant_compliance: 72,
        next_payment_date: "2024-02-01",
        origination_date: "2022-11-01",
        maturity_date: "2027-11-01",
    },
    Loan {
        id: "LN-2024-005",
        borrower: "HealthCare Systems Group",
        sector: "Healthcare",
        region: "Europe",
        principal: 45_000_000.0,
        interest_rate: 5.25,
        tenor_months: 36,
        health_score: 81,
        risk_level: RiskLevel::Low,
        status: LoanStatus::Active,
        esg_score: 71,
        covenant_compliance: 96,
        next_payment_date: "2024-03-15",
        origination_date: "2023-09-15",
        maturity_date: "2026-09-15",
    },
    Loan {
        id: "LN-2024-006",
        borrower: "Retail Ventures Holdings",
        sector: "Consumer Retail",
        region: "Latin America",
        principal: 30_000_000.0,
        interest_rate: 8.0,
        tenor_months: 36,
        health_score: 61,
        risk_level: RiskLevel::Medium,
        status: LoanStatus::Pending,
        esg_score: 48,
        covenant_compliance: 88,
        next_payment_date: "2024-03-01",
        origination_date: "2024-01-05",
        maturity_date: "2027-01-05",
    },
];

pub fn loans() -> &'static [Loan] {
    &LOANS
}

/// Look a loan up by its `LN-` identifier.
pub fn find_loan(id: &str) -> Option<&'static Loan> {
    LOANS.iter().find(|loan| loan.id == id)
}

static ALERTS: [Alert; 6] = [
    Alert {
        id: "ALT-001",
        loan_id: "LN-2024-004",
        severity: AlertSeverity::Critical,
        message: "Interest coverage ratio fell to 1.8x, below the 2.0x covenant minimum",
        timestamp: "2024-01-10 14:23",
    },
    Alert {
        id: "ALT-002",
        loan_id: "LN-2024-003",
        severity: AlertSeverity::Warning,
        message: "Debt/EBITDA at 4.8x is approaching the 5.0x covenant threshold",
        timestamp: "2024-01-10 09:12",
    },
    Alert {
        id: "ALT-003",
        loan_id: "LN-2024-006",
        severity: AlertSeverity::Warning,
        message: "Quarterly compliance certificate due in 5 business days",
        timestamp: "2024-01-09 16:40",
    },
    Alert {
        id: "ALT-004",
        loan_id: "LN-2024-001",
        severity: AlertSeverity::Info,
        message: "ESG performance bonus applied: -25bps margin reduction",
        timestamp: "2024-01-03 11:30",
    },
    Alert {
        id: "ALT-005",
        loan_id: "LN-2024-002",
        severity: AlertSeverity::Info,
        message: "Q4 2023 sustainability report verified by independent assessor",
        timestamp: "2024-01-05 16:42",
    },
    Alert {
        id: "ALT-006",
        loan_id: "LN-2024-004",
        severity: AlertSeverity::Warning,
        message: "Sector outlook for industrials revised to negative by rating agency",
        timestamp: "2023-12-28 10:05",
    },
];

pub fn alerts() -> &'static [Alert] {
    &ALERTS
}

/// Overview figures rolled up from the loan book and alert feed.
pub fn portfolio_metrics() -> PortfolioMetrics {
    PortfolioMetrics::derive(loans(), alerts())
}

// =============================================================================
// SMART DOCUMENTS
// =============================================================================

static SMART_CLAUSES: [SmartClause; 5] = [
    SmartClause {
        id: "SC-001",
        name: "Minimum EBITDA Requirement",
        condition: "IF consolidated_ebitda < 50_000_000 FOR 2 CONSECUTIVE QUARTERS",
        action: "THEN applicable_margin += 50bps AND notify(lender, within: 2 business days)",
        status: ClauseStatus::Active,
    },
    SmartClause {
        id: "SC-002",
        name: "Maximum Debt-to-Equity",
        condition: "IF total_indebtedness / total_equity > 3.00",
        action: "THEN restrict(additional_indebtedness) AND trigger(credit_review)",
        status: ClauseStatus::Active,
    },
    SmartClause {
        id: "SC-003",
        name: "ESG Performance Incentive",
        condition: "IF carbon_intensity_reduction_yoy > 15%",
        action: "THEN applicable_margin -= 25bps FOR next interest period",
        status: ClauseStatus::Active,
    },
    SmartClause {
        id: "SC-004",
        name: "Interest Coverage Ratio",
        condition: "IF consolidated_ebit / interest_expense < 2.50",
        action: "THEN accelerate(amortization) AND increase(cash_reserve)",
        status: ClauseStatus::Triggered,
    },
    SmartClause {
        id: "SC-005",
        name: "Material Adverse Change",
        condition: "IF credit_rating_downgrade > 2 notches",
        action: "THEN mandatory_prepayment(25%) AND renegotiate(terms)",
        status: ClauseStatus::Active,
    },
];

pub fn smart_clauses() -> &'static [SmartClause] {
    &SMART_CLAUSES
}

static ARTICLE_IV: [DocumentSection; 3] = [
    DocumentSection {
        title: "Section 4.01 - Minimum EBITDA.",
        body: "The Borrower shall maintain, as of the last day of each fiscal quarter, consolidated EBITDA of not \
               less than Fifty Million Dollars ($50,000,000) for any period of two (2) consecutive fiscal quarters. \
               In the event of non-compliance with this covenant for two consecutive quarters, the applicable margin \
               shall automatically increase by fifty (50) basis points, and the Lender shall be notified within two \
               (2) business days.",
        accent: Tone::Info,
    },
    DocumentSection {
        title: "Section 4.02 - Maximum Leverage Ratio.",
        body: "The Borrower shall not permit the ratio of (a) consolidated total indebtedness to (b) consolidated \
               total equity to exceed 3.00 to 1.00 as of the last day of any fiscal quarter. Breach of this covenant \
               shall restrict the Borrower's ability to incur additional indebtedness and trigger a mandatory review \
               of credit terms.",
        accent: Tone::Neutral,
    },
    DocumentSection {
        title: "Section 4.03 - Interest Coverage Ratio.",
        body: "The Borrower shall maintain a ratio of (a) consolidated EBIT to (b) consolidated interest expense of \
               not less than 2.50 to 1.00 as of the last day of each fiscal quarter. Failure to maintain this ratio \
               shall trigger accelerated amortization schedules and increased cash reserve requirements.",
        accent: Tone::Neutral,
    },
];

static ARTICLE_V: [DocumentSection; 2] = [
    DocumentSection {
        title: "Section 5.01 - ESG Performance Targets.",
        body: "The Borrower commits to achieving measurable improvements in environmental, social, and governance \
               metrics as set forth in Schedule E. Achievement of carbon intensity reduction targets exceeding \
               fifteen percent (15%) year-over-year shall result in a reduction of the applicable margin by \
               twenty-five (25) basis points for the succeeding interest period.",
        accent: Tone::Eco,
    },
    DocumentSection {
        title: "Section 5.02 - ESG Reporting Obligations.",
        body: "The Borrower shall provide quarterly sustainability reports verified by an independent third party, \
               detailing progress against established targets including carbon emissions, renewable energy usage, \
               water consumption, and waste recycling rates.",
        accent: Tone::Neutral,
    },
];

static ARTICLE_VI: [DocumentSection; 1] = [DocumentSection {
    title: "Section 6.01 - Material Adverse Change.",
    body: "In the event the Borrower experiences a credit rating downgrade of more than two (2) notches by any major \
           rating agency, the Lender may declare an Event of Default and require mandatory prepayment of \
           twenty-five percent (25%) of outstanding principal, with mandatory renegotiation of loan terms.",
    accent: Tone::Critical,
}];

static CREDIT_AGREEMENT: [DocumentArticle; 3] = [
    DocumentArticle { heading: "Article IV - Financial Covenants", sections: &ARTICLE_IV },
    DocumentArticle { heading: "Article V - Sustainability-Linked Provisions", sections: &ARTICLE_V },
    DocumentArticle { heading: "Article VI - Events of Default and Remedies", sections: &ARTICLE_VI },
];

/// Legal text of the TechCorp senior secured credit agreement.
pub fn credit_agreement() -> &'static [DocumentArticle] {
    &CREDIT_AGREEMENT
}

const fn text(key: &'static str, value: &'static str) -> ProgramField {
    ProgramField { key, value: ProgramValue::Text(value) }
}

const fn number(key: &'static str, value: &'static str) -> ProgramField {
    ProgramField { key, value: ProgramValue::Number(value) }
}

static COVENANT_PROGRAMS: [CovenantProgram; 4] = [
    CovenantProgram {
        ident: "MinimumEBITDA",
        clause_id: "SC-001",
        name: "Minimum EBITDA Requirement",
        status: ClauseStatus::Active,
        condition: &[
            text("metric", "EBITDA"),
            text("operator", "LESS_THAN"),
            number("threshold", "50000000"),
            text("period", "2_CONSECUTIVE_QUARTERS"),
        ],
        actions: &[
            ProgramAction { kind: "ADJUST_MARGIN", params: &[number("value", "0.50")] },
            ProgramAction { kind: "NOTIFY_LENDER", params: &[text("priority", "HIGH")] },
        ],
        tone: Tone::Info,
    },
    CovenantProgram {
        ident: "MaxLeverageRatio",
        clause_id: "SC-002",
        name: "Maximum Debt-to-Equity",
        status: ClauseStatus::Active,
        condition: &[text("metric", "DEBT_TO_EQUITY"), text("operator", "GREATER_THAN"), number("threshold", "3.0")],
        actions: &[
            ProgramAction { kind: "RESTRICT_BORROWING", params: &[] },
            ProgramAction { kind: "TRIGGER_REVIEW", params: &[] },
        ],
        tone: Tone::Info,
    },
    CovenantProgram {
        ident: "ESGPerformanceBonus",
        clause_id: "SC-003",
        name: "ESG Performance Incentive",
        status: ClauseStatus::Active,
        condition: &[
            text("metric", "CARBON_REDUCTION_YOY"),
            text("operator", "GREATER_THAN"),
            number("threshold", "15"),
            text("unit", "PERCENT"),
        ],
        actions: &[ProgramAction { kind: "REDUCE_MARGIN", params: &[number("value", "-0.25")] }],
        tone: Tone::Eco,
    },
    CovenantProgram {
        ident: "MaterialAdverseChange",
        clause_id: "SC-005",
        name: "Material Adverse Change",
        status: ClauseStatus::Active,
        condition: &[
            text("metric", "CREDIT_RATING_DOWNGRADE"),
            text("operator", "GREATER_THAN"),
            number("threshold", "2"),
            text("unit", "NOTCHES"),
        ],
        actions: &[
            ProgramAction { kind: "MANDATORY_PREPAYMENT", params: &[number("percentage", "25")] },
            ProgramAction {
                kind: "RENEGOTIATE_TERMS",
                params: &[ProgramField { key: "mandatory", value: ProgramValue::Bool(true) }],
            },
        ],
        tone: Tone::Critical,
    },
];

/// Machine-readable covenants shown in the document logic view.
pub fn covenant_programs() -> &'static [CovenantProgram] {
    &COVENANT_PROGRAMS
}

// =============================================================================
// LOAN TWIN DETAIL
// =============================================================================

static QUARTERLY_CASHFLOW: [QuarterlyCashflow; 4] = [
    QuarterlyCashflow { quarter: "Q4 2023", amount_musd: 60 },
    QuarterlyCashflow { quarter: "Q1 2024", amount_musd: 68 },
    QuarterlyCashflow { quarter: "Q2 2024", amount_musd: 76 },
    QuarterlyCashflow { quarter: "Q3 2024", amount_musd: 84 },
];

pub fn quarterly_cashflow() -> &'static [QuarterlyCashflow] {
    &QUARTERLY_CASHFLOW
}

static FINANCIAL_RATIOS: [FinancialRatio; 3] = [
    FinancialRatio { label: "Interest Coverage", value: "3.2x" },
    FinancialRatio { label: "Debt-to-Equity", value: "2.1" },
    FinancialRatio { label: "Current Ratio", value: "1.8" },
];

pub fn financial_ratios() -> &'static [FinancialRatio] {
    &FINANCIAL_RATIOS
}

static COVENANT_CHECKS: [CovenantCheck; 4] = [
    CovenantCheck {
        name: "Minimum EBITDA",
        value: "$58M",
        threshold: "$50M",
        standing: CovenantStanding::InCompliance,
    },
    CovenantCheck { name: "Max Debt/Equity", value: "2.1", threshold: "3.0", standing: CovenantStanding::InCompliance },
    CovenantCheck {
        name: "Interest Coverage",
        value: "2.2x",
        threshold: "2.5x",
        standing: CovenantStanding::Approaching,
    },
    CovenantCheck { name: "Current Ratio", value: "1.8", threshold: "1.2", standing: CovenantStanding::InCompliance },
];

pub fn covenant_checks() -> &'static [CovenantCheck] {
    &COVENANT_CHECKS
}

static ESG_METRICS: [EsgMetric; 4] = [
    EsgMetric { category: "Carbon Emissions", target: 950.0, actual: 1025.0, unit: "tCO2e", impact_on_rate_bps: -15 },
    EsgMetric {
        category: "Renewable Energy",
        target: 75.0,
        actual: 78.0,
        unit: "% of total",
        impact_on_rate_bps: -10,
    },
    EsgMetric {
        category: "Water Consumption",
        target: 1000.0,
        actual: 1150.0,
        unit: "m³/M revenue",
        impact_on_rate_bps: 5,
    },
    EsgMetric { category: "Waste Recycling", target: 85.0, actual: 87.0, unit: "% recycled", impact_on_rate_bps: -10 },
];

pub fn esg_metrics() -> &'static [EsgMetric] {
    &ESG_METRICS
}

static AUDIT_TRAIL: [AuditEntry; 6] = [
    AuditEntry {
        date: "2024-01-10 14:23",
        event: "Covenant Alert",
        description: "Interest coverage ratio dropped below 2.5x threshold",
        kind: AuditKind::Warning,
    },
    AuditEntry {
        date: "2024-01-09 09:15",
        event: "Payment Received",
        description: "Quarterly interest payment of $3.2M processed",
        kind: AuditKind::Success,
    },
    AuditEntry {
        date: "2024-01-05 16:42",
        event: "ESG Report",
        description: "Q4 2023 sustainability metrics submitted and verified",
        kind: AuditKind::Info,
    },
    AuditEntry {
        date: "2024-01-03 11:30",
        event: "Rate Adjustment",
        description: "ESG performance bonus applied: -25bps rate reduction",
        kind: AuditKind::Success,
    },
    AuditEntry {
        date: "2023-12-15 08:00",
        event: "Covenant Check",
        description: "All financial covenants verified in compliance",
        kind: AuditKind::Success,
    },
    AuditEntry {
        date: "2023-12-10 14:20",
        event: "Document Update",
        description: "Amendment to smart clause SC-003 executed",
        kind: AuditKind::Info,
    },
];

pub fn audit_trail() -> &'static [AuditEntry] {
    &AUDIT_TRAIL
}

// =============================================================================
// HEALTH MONITORING
// =============================================================================

static RISK_INDICATORS: [RiskIndicator; 4] = [
    RiskIndicator { name: "Credit Rating", status: "Stable", trend: Trend::Neutral, value: "BBB+" },
    RiskIndicator { name: "Market Volatility", status: "Low", trend: Trend::Down, value: "12.3%" },
    RiskIndicator { name: "Sector Risk", status: "Moderate", trend: Trend::Up, value: "24.5%" },
    RiskIndicator { name: "Liquidity", status: "Strong", trend: Trend::Up, value: "1.8x" },
];

pub fn risk_indicators() -> &'static [RiskIndicator] {
    &RISK_INDICATORS
}

static EARLY_WARNINGS: [EarlyWarning; 4] = [
    EarlyWarning {
        metric: "Interest Coverage",
        current: 2.2,
        threshold: 2.5,
        status: WarningStatus::Warning,
        trend: Momentum::Declining,
    },
    EarlyWarning {
        metric: "Debt/EBITDA",
        current: 4.8,
        threshold: 5.0,
        status: WarningStatus::Warning,
        trend: Momentum::Stable,
    },
    EarlyWarning {
        metric: "Current Ratio",
        current: 1.8,
        threshold: 1.2,
        status: WarningStatus::Healthy,
        trend: Momentum::Improving,
    },
    EarlyWarning {
        metric: "Working Capital",
        current: 45.2,
        threshold: 30.0,
        status: WarningStatus::Healthy,
        trend: Momentum::Improving,
    },
];

pub fn early_warnings() -> &'static [EarlyWarning] {
    &EARLY_WARNINGS
}

static COMPLIANCE_TRACKS: [ComplianceTrack; 3] = [
    ComplianceTrack {
        label: "Financial Covenants",
        met: 23,
        total: 25,
        status_word: "Compliant",
        caption: "23 of 25 covenants in compliance",
    },
    ComplianceTrack {
        label: "Reporting Requirements",
        met: 12,
        total: 12,
        status_word: "Current",
        caption: "All reports submitted on time",
    },
    ComplianceTrack {
        label: "ESG Commitments",
        met: 3,
        total: 4,
        status_word: "On Track",
        caption: "3 of 4 targets achieved",
    },
];

pub fn compliance_tracks() -> &'static [ComplianceTrack] {
    &COMPLIANCE_TRACKS
}

static HEALTH_WEIGHTS: [HealthWeight; 4] = [
    HealthWeight {
        label: "Financial Performance",
        weight_pct: 40,
        description: "EBITDA trends, debt service coverage, liquidity ratios, and cashflow stability",
    },
    HealthWeight {
        label: "Covenant Compliance",
        weight_pct: 30,
        description: "Real-time monitoring of all covenant requirements and historical compliance record",
    },
    HealthWeight {
        label: "External Risk",
        weight_pct: 20,
        description: "Market conditions, sector risk, credit ratings, and macroeconomic indicators",
    },
    HealthWeight {
        label: "ESG Performance",
        weight_pct: 10,
        description: "Progress against sustainability targets and adherence to ESG commitments",
    },
];

pub fn health_weights() -> &'static [HealthWeight] {
    &HEALTH_WEIGHTS
}

static CASHFLOW_TREND: [u32; 12] = [65, 68, 72, 75, 78, 82, 85, 88, 90, 92, 94, 96];

/// Twelve monthly cashflow index points, Jan through Dec 2023.
pub fn cashflow_trend() -> &'static [u32] {
    &CASHFLOW_TREND
}

// =============================================================================
// TRADING DESK
// =============================================================================

static RECENT_TRADES: [Trade; 4] = [
    Trade {
        id: "TRD-001",
        loan_id: "LN-2024-001",
        buyer: "Institutional Investor A",
        amount: 25_000_000.0,
        price: 99.8,
        date: "2024-01-10",
    },
    Trade {
        id: "TRD-002",
        loan_id: "LN-2024-002",
        buyer: "Asset Manager B",
        amount: 18_000_000.0,
        price: 101.2,
        date: "2024-01-09",
    },
    Trade {
        id: "TRD-003",
        loan_id: "LN-2024-003",
        buyer: "Pension Fund C",
        amount: 12_500_000.0,
        price: 97.5,
        date: "2024-01-08",
    },
    Trade {
        id: "TRD-004",
        loan_id: "LN-2024-001",
        buyer: "Insurance Company D",
        amount: 30_000_000.0,
        price: 99.5,
        date: "2024-01-07",
    },
];

pub fn recent_trades() -> &'static [Trade] {
    &RECENT_TRADES
}

// =============================================================================
// GREENER LENDING
// =============================================================================

static SUSTAINABILITY_IMPACTS: [SustainabilityImpact; 4] = [
    SustainabilityImpact {
        category: "Carbon Emissions",
        baseline: 1250.0,
        current: 1025.0,
        target: 950.0,
        unit: "tCO2e",
        direction: ImpactDirection::Reduce,
        rate_impact_bps: -25,
    },
    SustainabilityImpact {
        category: "Renewable Energy",
        baseline: 35.0,
        current: 68.0,
        target: 75.0,
        unit: "% of total",
        direction: ImpactDirection::Increase,
        rate_impact_bps: -15,
    },
    SustainabilityImpact {
        category: "Water Consumption",
        baseline: 1500.0,
        current: 1150.0,
        target: 1000.0,
        unit: "m³/M revenue",
        direction: ImpactDirection::Reduce,
        rate_impact_bps: 0,
    },
    SustainabilityImpact {
        category: "Waste Recycling",
        baseline: 55.0,
        current: 81.0,
        target: 85.0,
        unit: "% recycled",
        direction: ImpactDirection::Increase,
        rate_impact_bps: -5,
    },
];

pub fn sustainability_impacts() -> &'static [SustainabilityImpact] {
    &SUSTAINABILITY_IMPACTS
}

/// ESG commitments met across the book, as `(met, total)`.
pub const ESG_COMMITMENTS: (u32, u32) = (13, 15);
