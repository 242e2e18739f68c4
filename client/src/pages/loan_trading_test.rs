use super::*;

#[test]
fn every_loan_is_offered() {
    let offered = positions(mock::loans());
    assert_eq!(offered.len(), mock::loans().len());
    assert_eq!(offered[0].loan.id, "LN-2024-001");
}

#[test]
fn available_total_is_thirty_percent_of_book() {
    let offered = positions(mock::loans());
    assert!((total_available(&offered) - 133_500_000.0).abs() < 1e-6);
    assert_eq!(format_usd(total_available(&offered)), "$133,500,000");
}

#[test]
fn available_total_of_nothing_is_zero() {
    assert!(total_available(&[]).abs() < f64::EPSILON);
}

#[test]
fn trades_join_to_borrowers() {
    let names: Vec<_> = mock::recent_trades()
        .iter()
        .map(trade_borrower)
        .collect();
    assert_eq!(
        names,
        [
            "TechCorp Industries Ltd.",
            "GreenEnergy Solutions Inc.",
            "Global Logistics Partners",
            "TechCorp Industries Ltd.",
        ]
    );
}

#[test]
fn unknown_trade_loan_falls_back_to_id() {
    let trade = Trade {
        id: "TRD-999",
        loan_id: "LN-1999-999",
        buyer: "Nobody",
        amount: 1.0,
        price: 100.0,
        date: "2024-01-01",
    };
    assert_eq!(trade_borrower(&trade), "LN-1999-999");
}

#[test]
fn market_depth_reads_in_millions() {
    let insights = market_insights();
    assert_eq!(insights[1].0, "Market Depth");
    assert_eq!(insights[1].1, "$315M");
}
