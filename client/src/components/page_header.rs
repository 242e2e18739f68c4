//! Page title block.

use leptos::prelude::*;

#[component]
pub fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <header class="page__header">
            <h1 class="page__title">{title}</h1>
            <p class="page__subtitle">{subtitle}</p>
        </header>
    }
}
