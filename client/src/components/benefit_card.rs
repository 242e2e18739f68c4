//! Three-up value proposition cards closing each page.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::util::tone::Tone;

/// Static copy for one benefit card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Benefit {
    pub icon: IconKind,
    pub tone: Tone,
    pub title: &'static str,
    pub body: &'static str,
}

#[component]
pub fn BenefitGrid(benefits: &'static [Benefit]) -> impl IntoView {
    view! {
        <div class="grid grid--3">
            {benefits
                .iter()
                .map(|benefit| {
                    view! {
                        <div class=format!("benefit-card {}", benefit.tone.class())>
                            <Icon kind=benefit.icon class="benefit-card__icon"/>
                            <h3 class="benefit-card__title">{benefit.title}</h3>
                            <p class="benefit-card__body">{benefit.body}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
