use super::*;
use crate::mock;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn impact(category: &str) -> &'static SustainabilityImpact {
    mock::sustainability_impacts()
        .iter()
        .find(|i| i.category == category)
        .expect("impact present")
}

fn metric(category: &str) -> &'static EsgMetric {
    mock::esg_metrics()
        .iter()
        .find(|m| m.category == category)
        .expect("metric present")
}

// =============================================================
// Averages
// =============================================================

#[test]
fn averages_of_empty_book_are_zero() {
    assert_eq!(average_health_score(&[]), 0);
    assert_eq!(average_esg_score(&[]), 0);
    assert!(approx(total_principal(&[]), 0.0));
}

#[test]
fn esg_average_rounds_to_nearest() {
    // 388 / 6 = 64.67
    assert_eq!(average_esg_score(mock::loans()), 65);
}

// =============================================================
// ESG-adjusted interest rate
// =============================================================

#[test]
fn esg_adjustment_is_linear_around_fifty() {
    assert!(approx(esg_rate_adjustment(50), 0.0));
    assert!(approx(esg_rate_adjustment(100), -0.5));
    assert!(approx(esg_rate_adjustment(0), 0.5));
    assert!(approx(esg_rate_adjustment(78), -0.28));
}

#[test]
fn effective_rate_applies_adjustment() {
    assert!(approx(effective_rate(5.75, 78), 5.47));
    assert!(approx(effective_rate(7.25, 42), 7.33));
}

#[test]
fn bonus_tier_bands() {
    assert_eq!(esg_bonus_tier(-0.44), EsgBonusTier::Strong);
    assert_eq!(esg_bonus_tier(-0.2), EsgBonusTier::Standard);
    assert_eq!(esg_bonus_tier(-0.05), EsgBonusTier::Standard);
    assert_eq!(esg_bonus_tier(0.0), EsgBonusTier::Opportunity);
    assert_eq!(esg_bonus_tier(0.08), EsgBonusTier::Opportunity);
}

// =============================================================
// Sustainability progress
// =============================================================

#[test]
fn reduction_progress_measures_from_baseline() {
    // (1250 - 1025) / (1250 - 950) = 75%
    assert!(approx(impact_progress(impact("Carbon Emissions")), 75.0));
    // (1500 - 1150) / (1500 - 1000) = 70%, exactly on the on-track line
    assert!(approx(impact_progress(impact("Water Consumption")), 70.0));
    assert!(impact_on_track(impact("Water Consumption")));
}

#[test]
fn increase_progress_measures_from_baseline() {
    // (68 - 35) / (75 - 35) = 82.5%
    assert!(approx(impact_progress(impact("Renewable Energy")), 82.5));
}

#[test]
fn progress_on_zero_span_is_zero() {
    let flat = SustainabilityImpact {
        category: "Flat",
        baseline: 10.0,
        current: 12.0,
        target: 10.0,
        unit: "u",
        direction: ImpactDirection::Increase,
        rate_impact_bps: 0,
    };
    assert!(approx(impact_progress(&flat), 0.0));
    assert!(!impact_on_track(&flat));
}

#[test]
fn change_pct_matches_published_figures() {
    assert_eq!(format!("{:.0}", impact_change_pct(impact("Carbon Emissions"))), "18");
    assert_eq!(format!("{:.0}", impact_change_pct(impact("Renewable Energy"))), "94");
    assert_eq!(format!("{:.0}", impact_change_pct(impact("Water Consumption"))), "23");
    assert_eq!(format!("{:.0}", impact_change_pct(impact("Waste Recycling"))), "47");
}

// =============================================================
// Per-loan ESG metrics
// =============================================================

#[test]
fn positive_categories_are_renewables_and_recycling() {
    assert!(esg_metric_is_positive(metric("Renewable Energy")));
    assert!(esg_metric_is_positive(metric("Waste Recycling")));
    assert!(!esg_metric_is_positive(metric("Carbon Emissions")));
    assert!(!esg_metric_is_positive(metric("Water Consumption")));
}

#[test]
fn on_track_direction_depends_on_polarity() {
    assert!(esg_metric_on_track(metric("Renewable Energy")));
    assert!(!esg_metric_on_track(metric("Carbon Emissions")));
    assert!(!esg_metric_on_track(metric("Water Consumption")));
}

#[test]
fn gap_is_unsigned_percent_of_target() {
    // |1025 - 950| / 950 = 7.89%
    assert_eq!(format!("{:.1}", esg_metric_gap_pct(metric("Carbon Emissions"))), "7.9");
    assert_eq!(format!("{:.1}", esg_metric_gap_pct(metric("Renewable Energy"))), "4.0");
}

#[test]
fn performance_over_target_can_exceed_one_hundred() {
    assert!(esg_metric_performance(metric("Carbon Emissions")) > 100.0);
    assert!(approx(bar_width_pct(esg_metric_performance(metric("Carbon Emissions"))), 100.0));
}

#[test]
fn incentive_rate_subtracts_basis_points() {
    assert!(approx(incentive_rate(5.75, 35), 5.40));
    assert!(approx(incentive_rate(5.75, 0), 5.75));
}

// =============================================================
// Bars and ratios
// =============================================================

#[test]
fn bar_width_clamps_and_rejects_nan() {
    assert!(approx(bar_width_pct(-3.0), 0.0));
    assert!(approx(bar_width_pct(42.5), 42.5));
    assert!(approx(bar_width_pct(180.0), 100.0));
    assert!(approx(bar_width_pct(f64::NAN), 0.0));
}

#[test]
fn threshold_fill_caps_at_full() {
    assert!(approx(threshold_fill_pct(2.2, 2.5), 88.0));
    assert!(approx(threshold_fill_pct(1.8, 1.2), 100.0));
    assert!(approx(threshold_fill_pct(1.0, 0.0), 0.0));
}

#[test]
fn ratio_pct_rounds() {
    assert_eq!(ratio_pct(23, 25), 92);
    assert_eq!(ratio_pct(13, 15), 87);
    assert_eq!(ratio_pct(3, 4), 75);
    assert_eq!(ratio_pct(1, 0), 0);
}
