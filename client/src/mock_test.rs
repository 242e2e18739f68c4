use std::collections::HashSet;

use super::*;
use crate::util::metrics::{average_health_score, total_rate_reduction_bps};

// =============================================================
// Referential integrity
// =============================================================

#[test]
fn loan_ids_are_unique() {
    let ids: HashSet<_> = loans().iter().map(|loan| loan.id).collect();
    assert_eq!(ids.len(), loans().len());
}

#[test]
fn alerts_reference_known_loans() {
    for alert in alerts() {
        assert!(find_loan(alert.loan_id).is_some(), "{} points at unknown {}", alert.id, alert.loan_id);
    }
}

#[test]
fn trades_reference_known_loans() {
    for trade in recent_trades() {
        assert!(find_loan(trade.loan_id).is_some(), "{} points at unknown {}", trade.id, trade.loan_id);
    }
}

#[test]
fn covenant_programs_reference_known_clauses() {
    for program in covenant_programs() {
        assert!(
            smart_clauses().iter().any(|clause| clause.id == program.clause_id),
            "{} has no smart clause",
            program.ident
        );
    }
}

#[test]
fn find_loan_misses_unknown_id() {
    assert!(find_loan("LN-1999-999").is_none());
    assert_eq!(find_loan("LN-2024-002").map(|loan| loan.borrower), Some("GreenEnergy Solutions Inc."));
}

// =============================================================
// Roll-ups shown on the overview
// =============================================================

#[test]
fn displayed_average_health_is_rounded_mean_of_book() {
    let sum: u32 = loans().iter().map(|loan| loan.health_score).sum();
    let expected = (f64::from(sum) / loans().len() as f64).round();
    assert_eq!(f64::from(portfolio_metrics().average_health_score), expected);
    assert_eq!(average_health_score(loans()), 74);
}

#[test]
fn portfolio_metrics_match_book() {
    let metrics = portfolio_metrics();
    assert_eq!(metrics.total_aum, 445_000_000.0);
    assert_eq!(metrics.total_loans, 6);
    assert_eq!(metrics.active_alerts, alerts().len());
    assert_eq!(metrics.esg_impact_score, 65);
    assert_eq!(metrics.covenant_breaches, 3);
}

#[test]
fn esg_discounts_total_thirty_five_bps() {
    assert_eq!(total_rate_reduction_bps(esg_metrics()), 35);
}

#[test]
fn exactly_one_clause_is_triggered() {
    let triggered: Vec<_> = smart_clauses()
        .iter()
        .filter(|clause| clause.status == ClauseStatus::Triggered)
        .map(|clause| clause.id)
        .collect();
    assert_eq!(triggered, vec!["SC-004"]);
}

#[test]
fn health_weights_sum_to_one_hundred() {
    assert_eq!(health_weights().iter().map(|w| w.weight_pct).sum::<u32>(), 100);
}

#[test]
fn compliance_tracks_never_exceed_total() {
    for track in compliance_tracks() {
        assert!(track.met <= track.total, "{}", track.label);
    }
}

#[test]
fn cashflow_trend_covers_a_year() {
    assert_eq!(cashflow_trend().len(), 12);
    assert!(cashflow_trend().iter().all(|point| *point <= 100));
}
