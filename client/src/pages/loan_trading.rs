//! Secondary-market desk: tradable positions, recent trades, and market
//! insights.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every loan in the book is offered as a position. Quotes are derived from
//! the loan itself (see `TradingPosition::from_loan`), so the desk renders
//! the same figures on the server and after hydration.

#[cfg(test)]
#[path = "loan_trading_test.rs"]
mod loan_trading_test;

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::benefit_card::{Benefit, BenefitGrid};
use crate::components::icon::{Icon, IconKind};
use crate::components::page_header::PageHeader;
use crate::components::stat_card::StatCard;
use crate::domain::{Loan, Trade, TradingPosition};
use crate::mock;
use crate::pages::portfolio::risk_badge_label;
use crate::state::ui::UiState;
use crate::util::format::{format_fixed, format_musd, format_rate, format_usd};
use crate::util::tone::{Tone, risk_tone};
use crate::util::viewport::announce_view;

static BENEFITS: [Benefit; 3] = [
    Benefit {
        icon: IconKind::Shield,
        tone: Tone::Info,
        title: "Full Transparency",
        body: "Real-time loan health scores eliminate information asymmetry between buyers and sellers",
    },
    Benefit {
        icon: IconKind::TrendUp,
        tone: Tone::Eco,
        title: "Better Liquidity",
        body: "Transparent health metrics enable efficient price discovery and faster execution",
    },
    Benefit {
        icon: IconKind::Check,
        tone: Tone::Accent,
        title: "Fractional Exposure",
        body: "Access diversified loan portfolios with flexible position sizing and lower minimums",
    },
];

const POSITION_PERKS: [&str; 3] =
    ["Full transparency on loan health", "Real-time covenant monitoring", "Complete audit trail"];

/// Secondary-market depth within 2% of the quoted price, in millions.
pub const MARKET_DEPTH_MUSD: f64 = 315.0;

/// (label, value, note, note tone) rows for the market insights column.
pub fn market_insights() -> [(&'static str, String, &'static str, Tone); 3] {
    [
        ("Avg Bid-Ask Spread", "0.42%".to_owned(), "Tight spreads via transparency", Tone::Positive),
        ("Market Depth", format_musd(MARKET_DEPTH_MUSD), "Available within 2% of market", Tone::Neutral),
        ("Price Discovery", "Real-time".to_owned(), "Health-based pricing", Tone::Positive),
    ]
}

pub fn positions(loans: &'static [Loan]) -> Vec<TradingPosition> {
    loans.iter().map(TradingPosition::from_loan).collect()
}

pub fn total_available(positions: &[TradingPosition]) -> f64 {
    positions.iter().map(|position| position.available_amount).sum()
}

/// Borrower name for a trade, falling back to the raw loan id when the loan
/// is not in the book.
pub fn trade_borrower(trade: &Trade) -> &'static str {
    mock::find_loan(trade.loan_id).map_or(trade.loan_id, |loan| loan.borrower)
}

#[component]
pub fn LoanTradingPage() -> impl IntoView {
    let positions = positions(mock::loans());
    let available = total_available(&positions);
    let count = positions.len();

    view! {
        <div class="page">
            <PageHeader
                title="Transparent Loan Trading"
                subtitle="Efficient secondary market with real-time loan health transparency"
            />

            <div class="grid grid--4">
                <StatCard
                    icon=IconKind::Dollar
                    tone=Tone::Info
                    value=format_usd(available)
                    label="Available Positions"
                    footnote=format!("{count} loans available for trading")
                />
                <StatCard
                    icon=IconKind::TrendUp
                    tone=Tone::Positive
                    value="142"
                    label="Trades (30 days)"
                    footnote="+24% vs. previous period"
                    footnote_tone=Tone::Positive
                />
                <StatCard
                    icon=IconKind::Shield
                    tone=Tone::Accent
                    value="99.2%"
                    label="Avg Price/Par"
                    footnote="Near-par trading with transparency"
                />
                <StatCard
                    icon=IconKind::Check
                    tone=Tone::Eco
                    value="2.3 days"
                    label="Avg Settlement Time"
                    footnote="Faster liquidity enabled"
                    footnote_tone=Tone::Eco
                />
            </div>

            <section class="card card--flush">
                <div class="card__head card__head--ruled">
                    <h2 class="card__title">"Available Loan Positions"</h2>
                    <span class="card__aside">
                        <Icon kind=IconKind::Info/>
                        "All positions include real-time health metrics"
                    </span>
                </div>
                <div class="stack tabs__body">
                    {positions.into_iter().map(|position| view! { <PositionCard position=position/> }).collect_view()}
                </div>
            </section>

            <div class="grid grid--3">
                <section class="card span-2">
                    <h2 class="card__title">"Recent Trade History"</h2>
                    <div class="stack">
                        {mock::recent_trades()
                            .iter()
                            .map(|trade| {
                                view! {
                                    <div class="loan-row loan-row--static">
                                        <div class="loan-row__main">
                                            <div class="loan-row__borrower">{trade_borrower(trade)}</div>
                                            <div class="loan-row__meta">
                                                <span>{trade.id}</span>
                                                <span>"•"</span>
                                                <span>{trade.buyer}</span>
                                                <span>"•"</span>
                                                <span>{trade.date}</span>
                                            </div>
                                        </div>
                                        <div class="loan-row__scores">
                                            <div class="figure">
                                                <div class="figure__value">{format_usd(trade.amount)}</div>
                                                <div class="figure__label">"Trade Amount"</div>
                                            </div>
                                            <div class="figure">
                                                <div class="figure__value tone--positive">{format_fixed(trade.price, 2)}</div>
                                                <div class="figure__label">"Price/Par"</div>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="card">
                    <h2 class="card__title">"Market Insights"</h2>
                    <div class="stack">
                        {market_insights()
                            .into_iter()
                            .map(|(label, value, note, tone)| {
                                view! {
                                    <div class="card card--outline">
                                        <div class="muted">{label}</div>
                                        <div class="headline__value headline__value--small">{value}</div>
                                        <div class=tone.class()>{note}</div>
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
fn PositionCard(position: TradingPosition) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let loan = position.loan;
    let on_details = move |_| {
        ui.update(|u| u.open_loan(loan.id));
        announce_view(ui.get_untracked().view);
    };

    view! {
        <div class="card card--outline position">
            <div class="card__head">
                <div>
                    <div class="loan-row__title">
                        <h3 class="card__title">{loan.borrower}</h3>
                        <span class="muted">{loan.id}</span>
                        <Badge tone=risk_tone(loan.risk_level) label=risk_badge_label(loan.risk_level)/>
                    </div>
                    <div class="loan-row__meta">
                        <span>{loan.sector}</span>
                        <span>"•"</span>
                        <span>{loan.region}</span>
                        <span>"•"</span>
                        <span>{format!("{} APR", format_rate(loan.interest_rate))}</span>
                        <span>"•"</span>
                        <span>{format!("Maturity: {}", loan.maturity_date)}</span>
                    </div>
                </div>
                <div class="loan-row__scores">
                    <div class="figure">
                        <div class="figure__value">{loan.health_score}</div>
                        <div class="figure__label">"Health"</div>
                    </div>
                    <div class="figure">
                        <div class="figure__value">{loan.esg_score}</div>
                        <div class="figure__label">"ESG"</div>
                    </div>
                    <div class="figure">
                        <div class="figure__value tone--positive">{format_fixed(position.last_price, 2)}</div>
                        <div class="figure__label">"Price/Par"</div>
                    </div>
                </div>
            </div>
            <div class="position__terms">
                <div class="field">
                    <div class="field__label">"Available Amount"</div>
                    <div class="field__value">{format_usd(position.available_amount)}</div>
                </div>
                <div class="field">
                    <div class="field__label">"Minimum Ticket"</div>
                    <div class="field__value">{format_usd(position.minimum_ticket)}</div>
                </div>
                <div class="field">
                    <div class="field__label">"Covenant Status"</div>
                    <div class="field__value tone--positive">{format!("{}% Compliant", loan.covenant_compliance)}</div>
                </div>
                <div class="field">
                    <div class="field__label">"24h Volume"</div>
                    <div class="field__value">{format!("{}M", position.volume_24h_musd)}</div>
                </div>
                <button class="button button--primary" on:click=on_details>"View Details"</button>
            </div>
            <div class="position__perks">
                {POSITION_PERKS
                    .into_iter()
                    .map(|perk| {
                        view! {
                            <span class="position__perk">
                                <Icon kind=IconKind::Check class="tone--positive"/>
                                {perk}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
