//! Small tone-coloured label.

use leptos::prelude::*;

use crate::util::tone::Tone;

/// Rounded status badge. `pill` switches to the fully rounded variant used
/// in detail headers.
#[component]
pub fn Badge(tone: Tone, #[prop(into)] label: String, #[prop(optional)] pill: bool) -> impl IntoView {
    view! {
        <span class=format!("badge {}", tone.class()) class:badge--pill=pill>
            {label}
        </span>
    }
}
