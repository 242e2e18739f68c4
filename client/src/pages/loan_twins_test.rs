use super::*;

fn metric(category: &str) -> &'static EsgMetric {
    mock::esg_metrics()
        .iter()
        .find(|m| m.category == category)
        .expect("metric present")
}

#[test]
fn resolve_loan_prefers_selection() {
    let loan = resolve_loan(Some("LN-2024-004")).expect("loan");
    assert_eq!(loan.borrower, "Manufacturing Dynamics Corp.");
}

#[test]
fn resolve_loan_falls_back_to_first() {
    let first = mock::loans()[0].id;
    assert_eq!(resolve_loan(None).map(|l| l.id), Some(first));
    assert_eq!(resolve_loan(Some("LN-1999-999")).map(|l| l.id), Some(first));
}

#[test]
fn resolve_loan_matches_book_lookup() {
    for loan in mock::loans() {
        assert_eq!(resolve_loan(Some(loan.id)), mock::find_loan(loan.id));
    }
}

#[test]
fn esg_status_follows_metric_polarity() {
    assert_eq!(esg_status_label(metric("Renewable Energy")), "Target Met");
    assert_eq!(esg_status_label(metric("Carbon Emissions")), "In Progress");
}

#[test]
fn esg_gap_prefix_depends_on_polarity() {
    assert_eq!(esg_gap_label(metric("Carbon Emissions")), "Reduction: 7.9%");
    assert_eq!(esg_gap_label(metric("Renewable Energy")), "Progress: 4.0%");
    assert_eq!(esg_gap_label(metric("Water Consumption")), "Reduction: 15.0%");
}

#[test]
fn incentive_note_quotes_discounted_rate() {
    let note = incentive_note(5.75, 35);
    assert!(note.contains("rate reduction of 35bps"));
    assert!(note.ends_with("rate to 5.40%."));
}

#[test]
fn cashflow_label_is_millions() {
    let labels: Vec<_> = mock::quarterly_cashflow().iter().map(cashflow_label).collect();
    assert_eq!(labels, ["60M", "68M", "76M", "84M"]);
}
