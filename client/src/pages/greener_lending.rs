//! Greener lending module: sustainability-linked pricing across the book.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows how ESG performance feeds into loan economics. Portfolio-level
//! progress comes from `sustainability_impacts`; the per-loan table applies
//! the linear ESG rate adjustment to each loan's base rate.

#[cfg(test)]
#[path = "greener_lending_test.rs"]
mod greener_lending_test;

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::benefit_card::{Benefit, BenefitGrid};
use crate::components::icon::{Icon, IconKind};
use crate::components::page_header::PageHeader;
use crate::components::progress_bar::{BarSize, ProgressBar};
use crate::components::stat_card::StatCard;
use crate::domain::{ImpactDirection, Loan, SustainabilityImpact};
use crate::mock;
use crate::util::format::{format_bps, format_fixed, format_rate, format_signed_fixed};
use crate::util::metrics::{
    EsgBonusTier, average_esg_score, effective_rate, esg_bonus_tier, esg_rate_adjustment, impact_change_pct,
    impact_on_track, impact_progress, ratio_pct, total_rate_reduction_bps,
};
use crate::util::tone::{Tone, rate_impact_tone};

static BENEFITS: [Benefit; 3] = [
    Benefit {
        icon: IconKind::Check,
        tone: Tone::Eco,
        title: "ESG Accountability",
        body: "Sustainability commitments built directly into loan economics with transparent tracking",
    },
    Benefit {
        icon: IconKind::Target,
        tone: Tone::Info,
        title: "Measurable Impact",
        body: "Third-party verified metrics ensure credibility and prevent greenwashing",
    },
    Benefit {
        icon: IconKind::Leaf,
        tone: Tone::Accent,
        title: "Aligned Incentives",
        body: "Economic rewards for environmental progress align borrower and lender interests",
    },
];

/// (figure, caption) tiles on the explainer banner.
const EXPLAINER_FIGURES: [(&str, &str); 3] = [
    ("-45bps", "Average rate reduction for top ESG performers"),
    ("$8.5M", "Annual savings earned through ESG incentives"),
    ("100%", "Third-party verified sustainability metrics"),
];

pub fn tier_glyph(tier: EsgBonusTier) -> (IconKind, Tone) {
    match tier {
        EsgBonusTier::Strong => (IconKind::Check, Tone::Positive),
        EsgBonusTier::Standard => (IconKind::Check, Tone::Info),
        EsgBonusTier::Opportunity => (IconKind::Target, Tone::Caution),
    }
}

/// Discounts read green; anything else, including no change, reads red.
pub fn adjustment_tone(adjustment: f64) -> Tone {
    if adjustment < 0.0 { Tone::Positive } else { Tone::Critical }
}

/// Footer caption for an impact card, e.g. `18% reduction achieved`.
pub fn impact_change_caption(impact: &SustainabilityImpact) -> String {
    let noun = match impact.direction {
        ImpactDirection::Reduce => "reduction",
        ImpactDirection::Increase => "improvement",
    };
    format!("{}% {noun} achieved", format_fixed(impact_change_pct(impact), 0))
}

/// Progress-to-target figure on an impact card, capped at `100%`.
pub fn impact_progress_label(impact: &SustainabilityImpact) -> String {
    format!("{}%", format_fixed(impact_progress(impact).min(100.0), 0))
}

pub fn impact_status_label(impact: &SustainabilityImpact) -> &'static str {
    if impact_on_track(impact) { "On Track" } else { "In Progress" }
}

#[component]
pub fn GreenerLendingPage() -> impl IntoView {
    let (met, total) = mock::ESG_COMMITMENTS;
    let reduction_bps = total_rate_reduction_bps(mock::esg_metrics());

    view! {
        <div class="page">
            <PageHeader
                title="Greener Lending Module"
                subtitle="Sustainability-linked lending with measurable environmental impact"
            />

            <div class="grid grid--4">
                <StatCard
                    icon=IconKind::Leaf
                    tone=Tone::Eco
                    value=average_esg_score(mock::loans()).to_string()
                    label="Portfolio ESG Score"
                    footnote="+12 pts vs. last year"
                    footnote_tone=Tone::Eco
                />
                <StatCard
                    icon=IconKind::Target
                    tone=Tone::Info
                    value=format!("{}%", ratio_pct(met, total))
                    label="Targets Achieved"
                    footnote=format!("{met} of {total} ESG commitments met")
                />
                <StatCard
                    icon=IconKind::ArrowDown
                    tone=Tone::Positive
                    value=format!("-{reduction_bps}bps")
                    label="Rate Reduction Earned"
                    footnote="ESG performance incentive"
                    footnote_tone=Tone::Positive
                />
                <StatCard
                    icon=IconKind::TrendDown
                    tone=Tone::Accent
                    value="22%"
                    label="Carbon Reduction"
                    footnote="Portfolio-wide improvement"
                />
            </div>

            <div class="grid grid--2">
                {mock::sustainability_impacts().iter().map(|impact| view! { <ImpactCard impact=impact/> }).collect_view()}
            </div>

            <section class="banner tone--eco">
                <span class="banner__mark">
                    <Icon kind=IconKind::Leaf/>
                </span>
                <div class="banner__body">
                    <h2 class="banner__title">"How Sustainability-Linked Lending Works"</h2>
                    <p class="banner__text">
                        "Loan terms are dynamically adjusted based on measurable environmental and social performance. \
                         Borrowers who exceed sustainability targets earn interest rate reductions, while those who fall \
                         short may face rate increases. This creates powerful economic incentives for positive impact."
                    </p>
                    <div class="grid grid--3">
                        {EXPLAINER_FIGURES
                            .into_iter()
                            .map(|(figure, caption)| {
                                view! {
                                    <div class="banner__tile">
                                        <div class="banner__figure">{figure}</div>
                                        <div class="banner__caption">{caption}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="card card--roomy">
                <h2 class="card__title">"Interest Rate Impact by Performance"</h2>
                <div class="stack">
                    {mock::loans().iter().map(|loan| view! { <RateImpactRow loan=loan/> }).collect_view()}
                </div>
            </section>

            <BenefitGrid benefits=&BENEFITS/>
        </div>
    }
}

#[component]
fn ImpactCard(impact: &'static SustainabilityImpact) -> impl IntoView {
    let progress = impact_progress(impact);
    let tone = if impact_on_track(impact) { Tone::Positive } else { Tone::Caution };
    let direction_icon = match impact.direction {
        ImpactDirection::Reduce => IconKind::TrendDown,
        ImpactDirection::Increase => IconKind::TrendUp,
    };
    let readings = [
        ("Baseline", impact.baseline, Tone::Neutral),
        ("Current", impact.current, Tone::Eco),
        ("Target", impact.target, Tone::Info),
    ];

    view! {
        <div class="card">
            <div class="card__head">
                <div>
                    <h3 class="card__title">{impact.category}</h3>
                    <p class="muted">{format!("Target: {} {}", impact.target, impact.unit)}</p>
                </div>
                <Badge tone=tone label=impact_status_label(impact) pill=true/>
            </div>
            <div class="grid grid--3">
                {readings
                    .into_iter()
                    .map(|(label, value, reading_tone)| {
                        view! {
                            <div>
                                <div class="field__label">{label}</div>
                                <div class=format!("reading {}", reading_tone.class())>
                                    {value}
                                    <span class="reading__unit">{impact.unit}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="stack stack--tight">
                <div class="card__foot">
                    <span class="muted">"Progress to target"</span>
                    <strong>{impact_progress_label(impact)}</strong>
                </div>
                <ProgressBar pct=progress tone=tone size=BarSize::Thick/>
            </div>
            <div class="card__foot divider">
                <span class="card__aside">
                    <Icon kind=direction_icon class="tone--positive"/>
                    {impact_change_caption(impact)}
                </span>
                <strong class=rate_impact_tone(impact.rate_impact_bps).class()>
                    {format_bps(impact.rate_impact_bps)}
                </strong>
            </div>
        </div>
    }
}

#[component]
fn RateImpactRow(loan: &'static Loan) -> impl IntoView {
    let adjustment = esg_rate_adjustment(loan.esg_score);
    let tier = esg_bonus_tier(adjustment);
    let (tier_icon, tier_tone) = tier_glyph(tier);

    view! {
        <div class="card card--outline">
            <div class="card__head">
                <div>
                    <div class="card__title">{loan.borrower}</div>
                    <div class="muted">{loan.id}</div>
                </div>
                <div class="loan-row__scores">
                    <div class="figure">
                        <div class="figure__label">"ESG Score"</div>
                        <div class="figure__value">{loan.esg_score}</div>
                    </div>
                    <div class="figure">
                        <div class="figure__label">"Base Rate"</div>
                        <div class="figure__value">{format_rate(loan.interest_rate)}</div>
                    </div>
                    <div class="figure">
                        <div class="figure__label">"ESG Adjustment"</div>
                        <div class=format!("figure__value {}", adjustment_tone(adjustment).class())>
                            {format!("{}%", format_signed_fixed(adjustment, 2))}
                        </div>
                    </div>
                    <div class="figure">
                        <div class="figure__label">"Effective Rate"</div>
                        <div class="figure__value tone--info">
                            {format!("{}%", format_fixed(effective_rate(loan.interest_rate, loan.esg_score), 2))}
                        </div>
                    </div>
                </div>
            </div>
            <div class=format!("card__aside {}", tier_tone.class())>
                <Icon kind=tier_icon/>
                <span>{tier.message()}</span>
            </div>
        </div>
    }
}
