//! Loan health monitoring engine: health cards, cashflow, risk signals, and
//! covenant compliance roll-ups.

#[cfg(test)]
#[path = "health_monitoring_test.rs"]
mod health_monitoring_test;

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::icon::{Icon, IconKind};
use crate::components::page_header::PageHeader;
use crate::components::progress_bar::{BarSize, ProgressBar};
use crate::domain::{Momentum, Trend, WarningStatus};
use crate::mock;
use crate::pages::portfolio::risk_badge_label;
use crate::util::metrics::{average_health_score, ratio_pct, threshold_fill_pct};
use crate::util::tone::{Tone, health_tone, health_trend_up, risk_tone};

/// Loans featured in the health cards and cashflow panel.
pub const MONITORED_LOANS: usize = 4;

/// Compliance share at or above which a track reads as healthy.
pub const COMPLIANT_PCT: u32 = 90;

pub fn trend_glyph(trend: Trend) -> (IconKind, Tone) {
    match trend {
        Trend::Up => (IconKind::TrendUp, Tone::Positive),
        Trend::Down => (IconKind::TrendDown, Tone::Critical),
        Trend::Neutral => (IconKind::Activity, Tone::Neutral),
    }
}

pub fn momentum_tone(momentum: Momentum) -> Tone {
    match momentum {
        Momentum::Improving => Tone::Positive,
        Momentum::Stable => Tone::Neutral,
        Momentum::Declining => Tone::Critical,
    }
}

pub fn compliance_tone(pct: u32) -> Tone {
    if pct >= COMPLIANT_PCT { Tone::Positive } else { Tone::Caution }
}

#[component]
pub fn HealthMonitoringPage() -> impl IntoView {
    let monitored = &mock::loans()[..mock::loans().len().min(MONITORED_LOANS)];
    let overall = average_health_score(mock::loans());

    view! {
        <div class="page">
            <PageHeader
                title="Loan Health Monitoring Engine"
                subtitle="Real-time risk assessment with predictive analytics"
            />

            <div class="grid grid--4">
                {monitored
                    .iter()
                    .map(|loan| {
                        let (trend_icon, trend_tone) = if health_trend_up(loan.health_score) {
                            (IconKind::TrendUp, Tone::Positive)
                        } else {
                            (IconKind::TrendDown, Tone::Critical)
                        };
                        view! {
                            <div class="card health-card">
                                <div class="card__head">
                                    <span class=format!("score-disc {}", health_tone(loan.health_score).class())>
                                        {loan.health_score}
                                    </span>
                                    <Icon kind=trend_icon class=trend_tone.class()/>
                                </div>
                                <h3 class="card__title">{loan.borrower}</h3>
                                <p class="muted">{loan.id}</p>
                                <Badge tone=risk_tone(loan.risk_level) label=risk_badge_label(loan.risk_level)/>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="grid grid--3">
                <section class="card span-2">
                    <div class="card__head">
                        <h2 class="card__title">"Cashflow Trends"</h2>
                        <span class="muted">"Last 12 months"</span>
                    </div>
                    <div class="stack">
                        {monitored
                            .iter()
                            .map(|loan| {
                                view! {
                                    <div class="card card--outline">
                                        <div class="card__head">
                                            <span class="card__title">{loan.borrower}</span>
                                            <span class=health_tone(loan.health_score).class()>
                                                {format!("{} Health Score", loan.health_score)}
                                            </span>
                                        </div>
                                        <div class="sparkbars">
                                            {mock::cashflow_trend()
                                                .iter()
                                                .map(|point| {
                                                    view! {
                                                        <span
                                                            class="sparkbars__bar"
                                                            style=format!("height: {}%;", point.min(&100))
                                                        ></span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                        <div class="card__foot muted">
                                            <span>"Jan 2023"</span>
                                            <span>"Dec 2023"</span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="card">
                    <h2 class="card__title">"External Risk Indicators"</h2>
                    <div class="stack">
                        {mock::risk_indicators()
                            .iter()
                            .map(|indicator| {
                                let (icon, tone) = trend_glyph(indicator.trend);
                                view! {
                                    <div class="card card--outline">
                                        <div class="card__head">
                                            <span class="muted">{indicator.name}</span>
                                            <Icon kind=icon class=tone.class()/>
                                        </div>
                                        <div class="headline__value headline__value--small">{indicator.value}</div>
                                        <div class="muted">{indicator.status}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>

            <div class="grid grid--2">
                <section class="card">
                    <div class="card__head">
                        <h2 class="card__title">"Early Warning Signals"</h2>
                        <Icon kind=IconKind::Alert class="tone--caution"/>
                    </div>
                    <div class="stack">
                        {mock::early_warnings()
                            .iter()
                            .map(|warning| {
                                let tone = match warning.status {
                                    WarningStatus::Warning => Tone::Caution,
                                    WarningStatus::Healthy => Tone::Positive,
                                };
                                view! {
                                    <div class=format!("card card--tinted {}", tone.class())>
                                        <div class="card__head">
                                            <span class="card__title">{warning.metric}</span>
                                            {match warning.status {
                                                WarningStatus::Warning => {
                                                    view! { <Badge tone=Tone::Caution label="Monitor"/> }.into_any()
                                                }
                                                WarningStatus::Healthy => {
                                                    view! { <Icon kind=IconKind::Check class="tone--positive"/> }.into_any()
                                                }
                                            }}
                                        </div>
                                        <div class="card__foot">
                                            <span>
                                                <span class="muted">"Current: "</span>
                                                <strong>{warning.current}</strong>
                                            </span>
                                            <span>
                                                <span class="muted">"Threshold: "</span>
                                                <strong>{warning.threshold}</strong>
                                            </span>
                                            <span class=momentum_tone(warning.trend).class()>{warning.trend.label()}</span>
                                        </div>
                                        <ProgressBar
                                            pct=threshold_fill_pct(warning.current, warning.threshold)
                                            tone=tone
                                            size=BarSize::Thin
                                        />
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="card">
                    <div class="card__head">
                        <h2 class="card__title">"Covenant Compliance Status"</h2>
                        <Icon kind=IconKind::Shield class="tone--info"/>
                    </div>
                    <div class="stack stack--loose">
                        {mock::compliance_tracks()
                            .iter()
                            .map(|track| {
                                let pct = ratio_pct(track.met, track.total);
                                let tone = compliance_tone(pct);
                                view! {
                                    <div>
                                        <div class="card__head">
                                            <span>{track.label}</span>
                                            <strong class=tone.class()>{format!("{pct}% {}", track.status_word)}</strong>
                                        </div>
                                        <ProgressBar pct=f64::from(pct) tone=tone/>
                                        <div class="muted">{track.caption}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <div class="divider">
                            <div class="card__title">"Overall Portfolio Health"</div>
                            <div class="bar-row">
                                <ProgressBar pct=f64::from(overall) tone=Tone::Info size=BarSize::Thick/>
                                <span class="headline__value headline__value--small">{overall}</span>
                            </div>
                        </div>
                    </div>
                </section>
            </div>

            <section class="callout callout--wide tone--info">
                <Icon kind=IconKind::Activity class="callout__icon callout__icon--large"/>
                <div class="callout__body">
                    <h3 class="callout__title">"How Health Score is Calculated"</h3>
                    <div class="grid grid--4">
                        {mock::health_weights()
                            .iter()
                            .map(|weight| {
                                view! {
                                    <div>
                                        <strong>{format!("{} ({}%)", weight.label, weight.weight_pct)}</strong>
                                        <p class="callout__text">{weight.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>
        </div>
    }
}
