//! Headline KPI card used across the top row of most pages.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::util::tone::Tone;

/// One figure with an icon chip, a label, and a footnote line.
///
/// `footnote_tone` colours the footnote; `Tone::Neutral` renders it muted.
#[component]
pub fn StatCard(
    icon: IconKind,
    tone: Tone,
    #[prop(into)] value: String,
    #[prop(into)] label: String,
    #[prop(into)] footnote: String,
    #[prop(optional)] footnote_tone: Tone,
    #[prop(optional)] trend: Option<IconKind>,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="stat-card__top">
                <span class=format!("stat-card__chip {}", tone.class())>
                    <Icon kind=icon/>
                </span>
                {trend.map(|kind| view! { <Icon kind=kind class="tone--positive"/> })}
            </div>
            <div class="stat-card__value">{value}</div>
            <div class="stat-card__label">{label}</div>
            <div class=format!("stat-card__footnote {}", footnote_tone.class())>{footnote}</div>
        </div>
    }
}
