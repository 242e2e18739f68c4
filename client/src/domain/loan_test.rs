use super::*;

fn loan(id: &'static str, principal: f64, health: u32, esg: u32, compliance: u32) -> Loan {
    Loan {
        id,
        borrower: "Borrower",
        sector: "Sector",
        region: "Region",
        principal,
        interest_rate: 5.0,
        tenor_months: 60,
        health_score: health,
        risk_level: RiskLevel::Low,
        status: LoanStatus::Active,
        esg_score: esg,
        covenant_compliance: compliance,
        next_payment_date: "2024-02-15",
        origination_date: "2023-02-15",
        maturity_date: "2028-02-15",
    }
}

fn alert(id: &'static str, loan_id: &'static str) -> Alert {
    Alert { id, loan_id, severity: AlertSeverity::Info, message: "note", timestamp: "2024-01-10 09:00" }
}

#[test]
fn derive_sums_principal_and_counts_records() {
    let loans = [loan("A", 10_000_000.0, 80, 60, 100), loan("B", 5_000_000.0, 70, 40, 100)];
    let alerts = [alert("ALT-1", "A"), alert("ALT-2", "B"), alert("ALT-3", "A")];
    let metrics = PortfolioMetrics::derive(&loans, &alerts);
    assert_eq!(metrics.total_aum, 15_000_000.0);
    assert_eq!(metrics.total_loans, 2);
    assert_eq!(metrics.active_alerts, 3);
}

#[test]
fn derive_rounds_average_scores() {
    let loans = [loan("A", 1.0, 87, 78, 100), loan("B", 1.0, 92, 94, 100), loan("C", 1.0, 68, 55, 100)];
    let metrics = PortfolioMetrics::derive(&loans, &[]);
    // (87 + 92 + 68) / 3 = 82.33; (78 + 94 + 55) / 3 = 75.67
    assert_eq!(metrics.average_health_score, 82);
    assert_eq!(metrics.esg_impact_score, 76);
}

#[test]
fn derive_counts_breaches_strictly_below_threshold() {
    let loans = [
        loan("A", 1.0, 80, 50, COVENANT_BREACH_BELOW_PCT),
        loan("B", 1.0, 80, 50, COVENANT_BREACH_BELOW_PCT - 1),
        loan("C", 1.0, 80, 50, 72),
    ];
    assert_eq!(PortfolioMetrics::derive(&loans, &[]).covenant_breaches, 2);
}

#[test]
fn derive_on_empty_book_is_all_zero() {
    let metrics = PortfolioMetrics::derive(&[], &[]);
    assert_eq!(metrics.total_aum, 0.0);
    assert_eq!(metrics.average_health_score, 0);
    assert_eq!(metrics.esg_impact_score, 0);
    assert_eq!(metrics.covenant_breaches, 0);
}

#[test]
fn enum_labels_match_display() {
    assert_eq!(RiskLevel::Medium.to_string(), "Medium");
    assert_eq!(LoanStatus::Pending.to_string(), "Pending");
    assert_eq!(AlertSeverity::Critical.to_string(), "Critical");
}
