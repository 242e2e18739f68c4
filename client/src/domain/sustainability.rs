//! ESG targets and measured sustainability impact.

/// Per-loan ESG target as reported in the loan twin.
#[derive(Clone, Debug, PartialEq)]
pub struct EsgMetric {
    pub category: &'static str,
    pub target: f64,
    pub actual: f64,
    pub unit: &'static str,
    /// Margin adjustment in basis points; negative is a discount.
    pub impact_on_rate_bps: i32,
}

/// Whether success means the measured value goes down or up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImpactDirection {
    Reduce,
    Increase,
}

/// Portfolio-level sustainability KPI with its baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct SustainabilityImpact {
    pub category: &'static str,
    pub baseline: f64,
    pub current: f64,
    pub target: f64,
    pub unit: &'static str,
    pub direction: ImpactDirection,
    pub rate_impact_bps: i32,
}
