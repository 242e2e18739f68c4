use super::*;

#[test]
fn risk_badge_appends_risk() {
    assert_eq!(risk_badge_label(RiskLevel::Low), "Low Risk");
    assert_eq!(risk_badge_label(RiskLevel::High), "High Risk");
}

#[test]
fn alert_preview_caps_at_five() {
    let preview = alert_preview(mock::alerts());
    assert_eq!(preview.len(), ALERT_PREVIEW_COUNT);
    assert_eq!(preview[0].id, mock::alerts()[0].id);
}

#[test]
fn alert_preview_keeps_short_lists() {
    let two = &mock::alerts()[..2];
    assert_eq!(alert_preview(two).len(), 2);
    assert!(alert_preview(&[]).is_empty());
}

#[test]
fn loan_summary_formats_principal_and_apr() {
    let loan = mock::find_loan("LN-2024-001").expect("loan present");
    let parts = loan_summary_parts(loan);
    assert_eq!(parts[0], "Technology");
    assert_eq!(parts[1], "North America");
    assert_eq!(parts[2], "$125,000,000");
    assert_eq!(parts[3], "5.75% APR");
}
