//! Horizontal fill bar.

use leptos::prelude::*;

use crate::util::metrics::bar_width_pct;
use crate::util::tone::Tone;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BarSize {
    Thin,
    #[default]
    Regular,
    Thick,
}

impl BarSize {
    fn class(self) -> &'static str {
        match self {
            Self::Thin => "bar--thin",
            Self::Regular => "bar--regular",
            Self::Thick => "bar--thick",
        }
    }
}

/// Track plus fill. `pct` is clamped to 0..=100 before rendering.
#[component]
pub fn ProgressBar(pct: f64, tone: Tone, #[prop(optional)] size: BarSize) -> impl IntoView {
    let width = format!("width: {:.1}%;", bar_width_pct(pct));
    view! {
        <div class=format!("bar {}", size.class())>
            <div class=format!("bar__fill {}", tone.class()) style=width></div>
        </div>
    }
}
