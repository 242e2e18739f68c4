//! Digital loan twin: one loan's terms, clauses, performance, and history.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the loan named by `UiState::selected_loan_id`, or the first loan in
//! the book when nothing was opened. The six detail tabs switch through
//! `UiState::loan_tab`; only the active tab body is mounted.
//!
//! DESIGN
//! ======
//! The loan is resolved once when the page mounts. Selecting a different
//! loan always goes through `UiState::open_loan`, which also switches the
//! view, so the workspace remounts this page with the new selection.

#[cfg(test)]
#[path = "loan_twins_test.rs"]
mod loan_twins_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::badge::Badge;
use crate::components::callout::Callout;
use crate::components::icon::{Icon, IconKind};
use crate::components::progress_bar::{BarSize, ProgressBar};
use crate::domain::{ClauseStatus, CovenantStanding, EsgMetric, Loan, QuarterlyCashflow};
use crate::mock;
use crate::pages::portfolio::risk_badge_label;
use crate::state::ui::{LoanTab, UiState};
use crate::util::format::{format_bps, format_fixed, format_rate, format_usd};
use crate::util::metrics::{
    esg_metric_gap_pct, esg_metric_is_positive, esg_metric_on_track, esg_metric_performance, incentive_rate,
    total_rate_reduction_bps,
};
use crate::util::tone::{Tone, audit_tone, clause_tone, rate_impact_tone, risk_tone};
use crate::util::viewport::announce_view;

/// Loan shown by the twin page: the selected id when it resolves, else the
/// first loan of the book.
pub fn resolve_loan(selected: Option<&str>) -> Option<&'static Loan> {
    selected.and_then(mock::find_loan).or_else(|| mock::loans().first())
}

/// Badge text for an ESG metric against its target.
pub fn esg_status_label(metric: &EsgMetric) -> &'static str {
    if esg_metric_on_track(metric) { "Target Met" } else { "In Progress" }
}

/// Distance-to-target caption, e.g. `Reduction: 7.9%`.
pub fn esg_gap_label(metric: &EsgMetric) -> String {
    let prefix = if esg_metric_is_positive(metric) { "Progress" } else { "Reduction" };
    format!("{prefix}: {}%", format_fixed(esg_metric_gap_pct(metric), 1))
}

/// Copy for the interest-rate incentive callout.
pub fn incentive_note(base_rate: f64, reduction_bps: i32) -> String {
    format!(
        "Combined ESG performance has earned a rate reduction of {reduction_bps}bps, lowering the effective interest rate to {}%.",
        format_fixed(incentive_rate(base_rate, reduction_bps), 2)
    )
}

pub fn cashflow_label(row: &QuarterlyCashflow) -> String {
    format!("{}M", row.amount_musd)
}

#[component]
pub fn LoanTwinsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let selection = ui.with_untracked(|u| u.selected_loan_id.clone());
    let Some(loan) = resolve_loan(selection.as_deref()) else {
        return view! { <div class="page"><p class="muted">"No loans in the book."</p></div> }.into_any();
    };
    let opened_from_elsewhere = selection.is_some();
    let tab = Memo::new(move |_| ui.get().loan_tab);

    let on_back = move |_| {
        ui.update(UiState::back_to_portfolio);
        announce_view(ui.get_untracked().view);
    };

    view! {
        <div class="page">
            <Show when=move || opened_from_elsewhere>
                <button class="back-link" on:click=on_back>
                    <Icon kind=IconKind::ArrowLeft/>
                    <span>"Back to Portfolio"</span>
                </button>
            </Show>

            <section class="card card--roomy">
                <div class="twin__head">
                    <div>
                        <div class="twin__title">
                            <h1 class="page__title">{loan.borrower}</h1>
                            <Badge tone=risk_tone(loan.risk_level) label=risk_badge_label(loan.risk_level) pill=true/>
                            <Badge tone=Tone::Info label=loan.status.label() pill=true/>
                        </div>
                        <p class="muted">{loan.id}</p>
                    </div>
                    <div class="figure figure--large">
                        <div class="figure__value">{loan.health_score}</div>
                        <div class="figure__label">"Loan Health Score"</div>
                    </div>
                </div>
                <dl class="twin__summary">
                    <SummaryField label="Principal" value=format_usd(loan.principal)/>
                    <SummaryField label="Interest Rate" value=format_rate(loan.interest_rate)/>
                    <SummaryField label="Tenor" value=format!("{} months", loan.tenor_months)/>
                    <SummaryField label="Sector" value=loan.sector/>
                    <SummaryField label="Region" value=loan.region/>
                    <SummaryField label="ESG Score" value=loan.esg_score.to_string()/>
                </dl>
            </section>

            <section class="card card--flush">
                <div class="tabs">
                    {LoanTab::ALL
                        .into_iter()
                        .map(|item| {
                            view! {
                                <button
                                    class="tabs__item"
                                    class:tabs__item--active=move || tab.get() == item
                                    on:click=move |_| {
                                        ui.update(|u| u.select_tab(item));
                                        #[cfg(feature = "hydrate")]
                                        log::debug!("loan tab: {}", item.label());
                                    }
                                >
                                    <Icon kind=item.icon()/>
                                    <span>{item.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="tabs__body">
                    {move || match tab.get() {
                        LoanTab::Overview => view! { <OverviewTab loan=loan/> }.into_any(),
                        LoanTab::Clauses => view! { <ClausesTab/> }.into_any(),
                        LoanTab::Metrics => view! { <PerformanceTab/> }.into_any(),
                        LoanTab::Covenants => view! { <CovenantsTab/> }.into_any(),
                        LoanTab::Esg => view! { <EsgTab loan=loan/> }.into_any(),
                        LoanTab::Audit => view! { <AuditTab/> }.into_any(),
                    }}
                </div>
            </section>
        </div>
    }
    .into_any()
}

#[component]
fn SummaryField(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="field">
            <dt class="field__label">{label}</dt>
            <dd class="field__value">{value}</dd>
        </div>
    }
}

#[component]
fn TabIntro(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="tab-intro">
            <h3 class="tab-intro__title">{title}</h3>
            <p class="muted">{subtitle}</p>
        </div>
    }
}

#[component]
fn OverviewTab(loan: &'static Loan) -> impl IntoView {
    let dates = [
        ("Origination Date", loan.origination_date),
        ("Maturity Date", loan.maturity_date),
        ("Next Payment", loan.next_payment_date),
    ];
    view! {
        <div class="stack stack--loose">
            <div class="grid grid--3">
                {dates
                    .into_iter()
                    .map(|(label, date)| {
                        view! {
                            <div class="tile">
                                <div class="tile__label">{label}</div>
                                <div class="tile__value">{date}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card card--outline">
                <h3 class="card__title">"Loan Structure"</h3>
                <div class="rows">
                    <div class="rows__item">
                        <span class="muted">"Principal Amount"</span>
                        <strong>{format_usd(loan.principal)}</strong>
                    </div>
                    <div class="rows__item">
                        <span class="muted">"Interest Rate (Annual)"</span>
                        <strong>{format_rate(loan.interest_rate)}</strong>
                    </div>
                    <div class="rows__item">
                        <span class="muted">"Loan Term"</span>
                        <strong>{format!("{} months", loan.tenor_months)}</strong>
                    </div>
                    <div class="rows__item">
                        <span class="muted">"Covenant Compliance"</span>
                        <strong class="tone--positive">{format!("{}%", loan.covenant_compliance)}</strong>
                    </div>
                </div>
            </div>

            <Callout icon=IconKind::Shield tone=Tone::Info title="Digital Loan Twin">
                "This loan is represented as a living digital entity with automated monitoring, \
                 real-time risk assessment, and self-enforcing covenants. All changes are logged \
                 in an immutable audit trail."
            </Callout>
        </div>
    }
}

#[component]
fn ClausesTab() -> impl IntoView {
    view! {
        <div class="stack">
            <TabIntro title="Smart Clauses" subtitle="Machine-executable covenant logic with automated enforcement"/>
            {mock::smart_clauses()
                .iter()
                .map(|clause| {
                    view! {
                        <div class="card card--outline">
                            <div class="card__head">
                                <div>
                                    <h4 class="card__title">{clause.name}</h4>
                                    <span class="muted">{clause.id}</span>
                                </div>
                                <Badge tone=clause_tone(clause.status) label=clause.status.label() pill=true/>
                            </div>
                            <div class="code-box">
                                <div>{clause.condition}</div>
                                <div>{clause.action}</div>
                            </div>
                            <Show when=move || clause.status == ClauseStatus::Triggered>
                                <div class="notice tone--critical">
                                    <Icon kind=IconKind::Alert/>
                                    <span>"Clause triggered - automated action executed"</span>
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn PerformanceTab() -> impl IntoView {
    view! {
        <div class="stack stack--loose">
            <TabIntro title="Performance Metrics" subtitle="Real-time financial performance tracking"/>
            <div class="grid grid--2">
                <div class="card card--outline">
                    <div class="card__head">
                        <h4 class="card__title">"Cashflow Trend"</h4>
                        <Icon kind=IconKind::TrendUp class="tone--positive"/>
                    </div>
                    <div class="stack">
                        {mock::quarterly_cashflow()
                            .iter()
                            .map(|row| {
                                view! {
                                    <div class="bar-row">
                                        <span class="bar-row__label">{row.quarter}</span>
                                        <ProgressBar pct=f64::from(row.amount_musd) tone=Tone::Info/>
                                        <span class="bar-row__value">{cashflow_label(row)}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="card card--outline">
                    <div class="card__head">
                        <h4 class="card__title">"Debt Service Coverage"</h4>
                        <Icon kind=IconKind::Activity class="tone--info"/>
                    </div>
                    <div class="headline">
                        <div class="headline__value">"2.8x"</div>
                        <div class="muted">"Current DSCR"</div>
                        <div class="headline__note tone--positive">"Above minimum threshold (2.0x)"</div>
                    </div>
                </div>
            </div>
            <div class="card card--outline">
                <h4 class="card__title">"Key Financial Ratios"</h4>
                <div class="grid grid--3">
                    {mock::financial_ratios()
                        .iter()
                        .map(|ratio| {
                            view! {
                                <div>
                                    <div class="muted">{ratio.label}</div>
                                    <div class="headline__value headline__value--small">{ratio.value}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn CovenantsTab() -> impl IntoView {
    view! {
        <div class="stack">
            <TabIntro title="Covenant Monitoring" subtitle="Automated compliance tracking with real-time alerts"/>
            <div class="grid grid--2">
                {mock::covenant_checks()
                    .iter()
                    .map(|check| {
                        let (tone, icon) = match check.standing {
                            CovenantStanding::InCompliance => (Tone::Positive, IconKind::Check),
                            CovenantStanding::Approaching => (Tone::Caution, IconKind::Alert),
                        };
                        view! {
                            <div class=format!("card card--tinted {}", tone.class())>
                                <div class="card__head">
                                    <h4 class="card__title">{check.name}</h4>
                                    <Icon kind=icon/>
                                </div>
                                <div class="headline__value headline__value--small">{check.value}</div>
                                <div class="muted">{format!("Threshold: {}", check.threshold)}</div>
                                <div class="card__note">{check.standing.label()}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <Callout icon=IconKind::Activity tone=Tone::Info title="Automated Monitoring">
                "Covenant compliance is monitored in real-time with automatic notifications \
                 when thresholds are approached or breached. Manual oversight eliminated."
            </Callout>
        </div>
    }
}

#[component]
fn EsgTab(loan: &'static Loan) -> impl IntoView {
    let metrics = mock::esg_metrics();
    view! {
        <div class="stack stack--loose">
            <TabIntro title="ESG Performance" subtitle="Sustainability-linked lending incentives"/>
            {metrics
                .iter()
                .map(|metric| {
                    let tone = if esg_metric_on_track(metric) { Tone::Positive } else { Tone::Caution };
                    view! {
                        <div class="card card--outline">
                            <div class="card__head">
                                <div>
                                    <h4 class="card__title">{metric.category}</h4>
                                    <p class="muted">{format!("Target: {} {}", metric.target, metric.unit)}</p>
                                </div>
                                <Badge tone=tone label=esg_status_label(metric) pill=true/>
                            </div>
                            <div class="bar-row">
                                <ProgressBar pct=esg_metric_performance(metric) tone=tone size=BarSize::Thick/>
                                <span class="bar-row__value bar-row__value--wide">
                                    {format!("{} {}", metric.actual, metric.unit)}
                                </span>
                            </div>
                            <div class="card__foot">
                                <span class="muted">{esg_gap_label(metric)}</span>
                                <span class=rate_impact_tone(metric.impact_on_rate_bps).class()>
                                    {format!("Rate impact: {}", format_bps(metric.impact_on_rate_bps))}
                                </span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
            <Callout icon=IconKind::Leaf tone=Tone::Eco title="Interest Rate Incentive">
                <p>{incentive_note(loan.interest_rate, total_rate_reduction_bps(metrics))}</p>
                <p class="callout__emphasis">"ESG accountability built into loan economics"</p>
            </Callout>
        </div>
    }
}

#[component]
fn AuditTab() -> impl IntoView {
    view! {
        <div class="stack">
            <TabIntro title="Audit Trail" subtitle="Immutable record of all loan events and changes"/>
            {mock::audit_trail()
                .iter()
                .map(|entry| {
                    view! {
                        <div class="audit">
                            <span class=format!("audit__dot {}", audit_tone(entry.kind).class())></span>
                            <div class="audit__body">
                                <div class="audit__head">
                                    <strong>{entry.event}</strong>
                                    <span class="muted">{entry.date}</span>
                                </div>
                                <p class="muted">{entry.description}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
            <Callout icon=IconKind::Shield tone=Tone::Neutral title="Regulatory Transparency">
                "Complete audit trail maintained for regulatory compliance. All events are timestamped, \
                 cryptographically signed, and immutable. Audit-ready by design."
            </Callout>
        </div>
    }
}
