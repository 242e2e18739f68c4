//! Semantic colour tones for badges, bars, and cards.
//!
//! Components never pick colours directly; they map a domain value to a
//! `Tone` and emit its BEM modifier. `style/loanos.css` owns the palette.

#[cfg(test)]
#[path = "tone_test.rs"]
mod tone_test;

use crate::domain::{AlertSeverity, AuditKind, ClauseStatus, RiskLevel};

/// Health score at or above which a loan reads as healthy.
pub const HEALTHY_SCORE: u32 = 80;
/// Health score at or above which a loan reads as watch-list rather than stressed.
pub const WATCH_SCORE: u32 = 60;
/// Health score at or above which the monitoring cards show an upward trend.
pub const TREND_UP_SCORE: u32 = 70;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Caution,
    Critical,
    Info,
    #[default]
    Neutral,
    /// Brand violet used for the third benefit card.
    Accent,
    /// Emerald used for sustainability content.
    Eco,
}

impl Tone {
    /// BEM modifier applied next to a block class, e.g. `badge tone--caution`.
    pub fn class(self) -> &'static str {
        match self {
            Self::Positive => "tone--positive",
            Self::Caution => "tone--caution",
            Self::Critical => "tone--critical",
            Self::Info => "tone--info",
            Self::Neutral => "tone--neutral",
            Self::Accent => "tone--accent",
            Self::Eco => "tone--eco",
        }
    }
}

pub fn risk_tone(level: RiskLevel) -> Tone {
    match level {
        RiskLevel::Low => Tone::Positive,
        RiskLevel::Medium => Tone::Caution,
        RiskLevel::High => Tone::Critical,
    }
}

pub fn severity_tone(severity: AlertSeverity) -> Tone {
    match severity {
        AlertSeverity::Critical => Tone::Critical,
        AlertSeverity::Warning => Tone::Caution,
        AlertSeverity::Info => Tone::Info,
    }
}

pub fn health_tone(score: u32) -> Tone {
    if score >= HEALTHY_SCORE {
        Tone::Positive
    } else if score >= WATCH_SCORE {
        Tone::Caution
    } else {
        Tone::Critical
    }
}

pub fn health_trend_up(score: u32) -> bool {
    score >= TREND_UP_SCORE
}

pub fn clause_tone(status: ClauseStatus) -> Tone {
    match status {
        ClauseStatus::Active => Tone::Positive,
        ClauseStatus::Triggered => Tone::Critical,
        ClauseStatus::Inactive => Tone::Neutral,
    }
}

pub fn audit_tone(kind: AuditKind) -> Tone {
    match kind {
        AuditKind::Success => Tone::Positive,
        AuditKind::Warning => Tone::Caution,
        AuditKind::Info => Tone::Info,
    }
}

/// Discounts are good news, surcharges bad, zero is neither.
pub fn rate_impact_tone(bps: i32) -> Tone {
    match bps.signum() {
        -1 => Tone::Positive,
        1 => Tone::Critical,
        _ => Tone::Neutral,
    }
}
