//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bar is the only place the active `PageView` changes besides the
//! "open loan" shortcuts on the portfolio and trading pages. It writes the
//! shared `UiState` signal; the workspace re-renders the matching page.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::ui::{PageView, UiState};
use crate::util::viewport::announce_view;

#[component]
pub fn Navigation() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="nav">
            <div class="nav__inner">
                <div class="nav__brand">
                    <span class="nav__mark">"LO"</span>
                    <span class="nav__name">"LOANOS™"</span>
                </div>
                <div class="nav__items">
                    {PageView::ALL
                        .into_iter()
                        .map(|view| {
                            let on_click = move |_| {
                                ui.update(|u| u.navigate(view));
                                announce_view(view);
                            };
                            view! {
                                <button
                                    class="nav__item"
                                    class:nav__item--active=move || ui.get().view == view
                                    on:click=on_click
                                >
                                    <Icon kind=view.icon()/>
                                    <span>{view.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
