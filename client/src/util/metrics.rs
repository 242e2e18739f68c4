//! Derived display figures for the dashboard views.
//!
//! Every function is a pure, one-line formula over the mock dataset,
//! recomputed on each render. Empty inputs and zero-width spans return `0.0`
//! rather than `NaN` so a bar or label never renders garbage.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use crate::domain::{EsgMetric, ImpactDirection, Loan, SustainabilityImpact};

/// ESG score that earns neither a discount nor a surcharge.
pub const ESG_NEUTRAL_SCORE: f64 = 50.0;
/// Maximum margin swing, in percentage points, at an ESG score of 0 or 100.
pub const ESG_MAX_ADJUSTMENT_PCT: f64 = 0.5;
/// Progress percentage at which a sustainability target counts as on track.
pub const ON_TRACK_PROGRESS_PCT: f64 = 70.0;
/// Adjustments below this (in percentage points) earn the strong-bonus badge.
pub const STRONG_BONUS_BELOW_PCT: f64 = -0.2;

pub fn total_principal(loans: &[Loan]) -> f64 {
    loans.iter().map(|loan| loan.principal).sum()
}

/// Arithmetic mean of health scores, rounded to the nearest integer.
pub fn average_health_score(loans: &[Loan]) -> u32 {
    rounded_mean(loans.iter().map(|loan| loan.health_score))
}

/// Arithmetic mean of ESG scores, rounded to the nearest integer.
pub fn average_esg_score(loans: &[Loan]) -> u32 {
    rounded_mean(loans.iter().map(|loan| loan.esg_score))
}

fn rounded_mean(scores: impl ExactSizeIterator<Item = u32>) -> u32 {
    let count = scores.len();
    if count == 0 {
        return 0;
    }
    let sum: u64 = scores.map(u64::from).sum();
    // Scores are 0-100, so the mean fits comfortably in u32.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    let mean = (sum as f64 / count as f64).round() as u32;
    mean
}

/// Margin adjustment in percentage points earned by an ESG score.
///
/// A score of 50 is neutral; 100 earns -0.5 and 0 costs +0.5.
pub fn esg_rate_adjustment(esg_score: u32) -> f64 {
    (f64::from(esg_score) - ESG_NEUTRAL_SCORE) / ESG_NEUTRAL_SCORE * -ESG_MAX_ADJUSTMENT_PCT
}

/// Base rate plus the ESG adjustment.
pub fn effective_rate(base_rate: f64, esg_score: u32) -> f64 {
    base_rate + esg_rate_adjustment(esg_score)
}

/// Badge shown under each loan in the rate-impact table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EsgBonusTier {
    Strong,
    Standard,
    Opportunity,
}

impl EsgBonusTier {
    pub fn message(self) -> &'static str {
        match self {
            Self::Strong => "Strong ESG performance bonus applied",
            Self::Standard => "ESG performance bonus applied",
            Self::Opportunity => "Opportunity for rate reduction through improved ESG performance",
        }
    }
}

pub fn esg_bonus_tier(adjustment: f64) -> EsgBonusTier {
    if adjustment < STRONG_BONUS_BELOW_PCT {
        EsgBonusTier::Strong
    } else if adjustment < 0.0 {
        EsgBonusTier::Standard
    } else {
        EsgBonusTier::Opportunity
    }
}

/// Percent of the way from baseline to target. Can exceed 100.
pub fn impact_progress(impact: &SustainabilityImpact) -> f64 {
    let (moved, span) = match impact.direction {
        ImpactDirection::Reduce => (impact.baseline - impact.current, impact.baseline - impact.target),
        ImpactDirection::Increase => (impact.current - impact.baseline, impact.target - impact.baseline),
    };
    safe_pct(moved, span)
}

pub fn impact_on_track(impact: &SustainabilityImpact) -> bool {
    impact_progress(impact) >= ON_TRACK_PROGRESS_PCT
}

/// Change achieved against baseline: reduction for `Reduce`, improvement
/// for `Increase`, both as positive percentages when moving the right way.
pub fn impact_change_pct(impact: &SustainabilityImpact) -> f64 {
    let ratio = safe_pct(impact.current, impact.baseline);
    match impact.direction {
        ImpactDirection::Reduce => 100.0 - ratio,
        ImpactDirection::Increase => ratio - 100.0,
    }
}

/// Higher-is-better categories; everything else is a reduction target.
pub fn esg_metric_is_positive(metric: &EsgMetric) -> bool {
    metric.category.contains("Renewable") || metric.category.contains("Recycling")
}

/// `actual` as a percentage of `target`.
pub fn esg_metric_performance(metric: &EsgMetric) -> f64 {
    safe_pct(metric.actual, metric.target)
}

pub fn esg_metric_on_track(metric: &EsgMetric) -> bool {
    if esg_metric_is_positive(metric) {
        metric.actual >= metric.target
    } else {
        metric.actual <= metric.target
    }
}

/// Distance between actual and target as an unsigned percentage of target.
pub fn esg_metric_gap_pct(metric: &EsgMetric) -> f64 {
    safe_pct(metric.actual - metric.target, metric.target).abs()
}

/// Sum of every discount in basis points, as a positive number.
pub fn total_rate_reduction_bps(metrics: &[EsgMetric]) -> i32 {
    metrics
        .iter()
        .filter(|metric| metric.impact_on_rate_bps < 0)
        .map(|metric| metric.impact_on_rate_bps.abs())
        .sum()
}

/// Base rate after an earned discount.
pub fn incentive_rate(base_rate: f64, reduction_bps: i32) -> f64 {
    base_rate - f64::from(reduction_bps) / 100.0
}

/// Clamp to a valid CSS bar width.
pub fn bar_width_pct(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) }
}

/// How full a threshold gauge is, capped at 100.
pub fn threshold_fill_pct(current: f64, threshold: f64) -> f64 {
    safe_pct(current, threshold).min(100.0)
}

/// `met / total` as a rounded whole percentage.
pub fn ratio_pct(met: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    // Bounded by met <= total in practice; the cast only drops the fraction.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pct = (f64::from(met) / f64::from(total) * 100.0).round() as u32;
    pct
}

fn safe_pct(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 { 0.0 } else { numerator * 100.0 / denominator }
}
