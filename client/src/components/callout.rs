//! Tinted explanatory panel with an icon and heading.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::util::tone::Tone;

#[component]
pub fn Callout(icon: IconKind, tone: Tone, #[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("callout {}", tone.class())>
            <Icon kind=icon class="callout__icon"/>
            <div class="callout__body">
                <h4 class="callout__title">{title}</h4>
                <div class="callout__text">{children()}</div>
            </div>
        </div>
    }
}
