//! Portfolio overview: KPIs, the loan book, and recent risk alerts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing panel of the workspace. Every figure is derived from the static
//! dataset on render. Clicking a loan row opens its twin on the loans page.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::benefit_card::{Benefit, BenefitGrid};
use crate::components::icon::{Icon, IconKind};
use crate::components::page_header::PageHeader;
use crate::components::progress_bar::ProgressBar;
use crate::components::stat_card::StatCard;
use crate::domain::{Alert, Loan, RiskLevel};
use crate::mock;
use crate::state::ui::UiState;
use crate::util::format::{format_rate, format_usd};
use crate::util::tone::{Tone, health_tone, risk_tone, severity_tone};
use crate::util::viewport::announce_view;

/// Alerts listed in the side panel; the rest stay in the dataset.
pub const ALERT_PREVIEW_COUNT: usize = 5;

static BENEFITS: [Benefit; 3] = [
    Benefit {
        icon: IconKind::Check,
        tone: Tone::Info,
        title: "Reduced Operational Risk",
        body: "Automated covenant monitoring eliminates manual oversight errors",
    },
    Benefit {
        icon: IconKind::Check,
        tone: Tone::Eco,
        title: "Faster Origination",
        body: "Smart documents reduce time-to-close by 60% with digital certainty",
    },
    Benefit {
        icon: IconKind::Check,
        tone: Tone::Accent,
        title: "Better Liquidity",
        body: "Transparent loan health enables efficient secondary market trading",
    },
];

/// Badge text for a risk level, e.g. "Medium Risk".
pub fn risk_badge_label(level: RiskLevel) -> String {
    format!("{level} Risk")
}

/// Newest alerts shown on the overview.
pub fn alert_preview(alerts: &[Alert]) -> &[Alert] {
    &alerts[..alerts.len().min(ALERT_PREVIEW_COUNT)]
}

/// Secondary line under a borrower name: sector, region, principal, APR.
pub fn loan_summary_parts(loan: &Loan) -> [String; 4] {
    [
        loan.sector.to_owned(),
        loan.region.to_owned(),
        format_usd(loan.principal),
        format!("{} APR", format_rate(loan.interest_rate)),
    ]
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let metrics = mock::portfolio_metrics();

    view! {
        <div class="page">
            <PageHeader title="Portfolio Overview" subtitle="Autonomous Operating System for Global Loans"/>

            <div class="grid grid--4">
                <StatCard
                    icon=IconKind::Dollar
                    tone=Tone::Info
                    trend=IconKind::TrendUp
                    value=format_usd(metrics.total_aum)
                    label="Total AUM"
                    footnote=format!("{} active loans", metrics.total_loans)
                />
                <StatCard
                    icon=IconKind::Activity
                    tone=Tone::Positive
                    value=metrics.average_health_score.to_string()
                    label="Avg Health Score"
                    footnote="Real-time compliance monitoring"
                    footnote_tone=Tone::Positive
                />
                <StatCard
                    icon=IconKind::Alert
                    tone=Tone::Caution
                    value=metrics.active_alerts.to_string()
                    label="Active Alerts"
                    footnote=format!("{} covenant breaches", metrics.covenant_breaches)
                />
                <StatCard
                    icon=IconKind::Leaf
                    tone=Tone::Eco
                    value=metrics.esg_impact_score.to_string()
                    label="ESG Impact Score"
                    footnote="Sustainability-linked incentives"
                    footnote_tone=Tone::Eco
                />
            </div>

            <div class="grid grid--3">
                <section class="card span-2">
                    <div class="card__head">
                        <h2 class="card__title">"Active Loan Portfolio"</h2>
                        <span class="card__aside">
                            <Icon kind=IconKind::Shield/>
                            "Audit-ready by design"
                        </span>
                    </div>
                    <div class="stack">
                        {mock::loans().iter().map(|loan| view! { <LoanRow loan=loan/> }).collect_view()}
                    </div>
                </section>

                <section class="card">
                    <h2 class="card__title">"Risk Alerts"</h2>
                    <div class="stack">
                        {alert_preview(mock::alerts())
                            .iter()
                            .map(|alert| {
                                view! {
                                    <div class=format!("alert {}", severity_tone(alert.severity).class())>
                                        <div class="alert__head">
                                            <Icon kind=IconKind::Alert/>
                                            <div>
                                                <div class="alert__severity">{alert.severity.label()}</div>
                                                <div class="alert__message">{alert.message}</div>
                                            </div>
                                        </div>
                                        <div class="alert__loan">{alert.loan_id}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>

            <BenefitGrid benefits=&BENEFITS/>
        </div>
    }
}

#[component]
fn LoanRow(loan: &'static Loan) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let on_open = move |_| {
        ui.update(|u| u.open_loan(loan.id));
        announce_view(ui.get_untracked().view);
    };
    let [sector, region, principal, apr] = loan_summary_parts(loan);

    view! {
        <button class="loan-row" on:click=on_open>
            <div class="loan-row__main">
                <div class="loan-row__title">
                    <span class="loan-row__borrower">{loan.borrower}</span>
                    <span class="muted">{loan.id}</span>
                    <Badge tone=risk_tone(loan.risk_level) label=risk_badge_label(loan.risk_level)/>
                </div>
                <div class="loan-row__meta">
                    <span>{sector}</span>
                    <span>"•"</span>
                    <span>{region}</span>
                    <span>"•"</span>
                    <span>{principal}</span>
                    <span>"•"</span>
                    <span>{apr}</span>
                </div>
            </div>
            <div class="loan-row__scores">
                <div class="figure">
                    <div class="figure__value">{loan.health_score}</div>
                    <div class="figure__label">"Health Score"</div>
                </div>
                <div class="figure">
                    <div class="figure__value">{loan.esg_score}</div>
                    <div class="figure__label">"ESG Score"</div>
                </div>
                <div class="loan-row__bar">
                    <ProgressBar pct=f64::from(loan.health_score) tone=health_tone(loan.health_score)/>
                </div>
            </div>
        </button>
    }
}
