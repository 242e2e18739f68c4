//! Root application component, SSR shell, and the workspace switch.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app has a single route. Which panel is visible is decided by
//! `UiState::view`, not by the URL, so the router only hosts the workspace.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navigation::Navigation;
use crate::pages::{
    greener_lending::GreenerLendingPage, health_monitoring::HealthMonitoringPage, loan_trading::LoanTradingPage,
    loan_twins::LoanTwinsPage, portfolio::PortfolioPage, smart_documents::SmartDocumentsPage,
};
use crate::state::ui::{PageView, UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared `UiState` signal and mounts the workspace.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/loanos.css"/>
        <Title text="LOANOS"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=Workspace/>
            </Routes>
        </Router>
    }
}

/// Navigation bar plus the active page.
#[component]
pub fn Workspace() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    // Tab and mode changes must not remount the page, only view changes.
    let active = Memo::new(move |_| ui.get().view);

    view! {
        <div class="workspace">
            <Navigation/>
            <main class="workspace__main">
                {move || match active.get() {
                    PageView::Dashboard => view! { <PortfolioPage/> }.into_any(),
                    PageView::Loans => view! { <LoanTwinsPage/> }.into_any(),
                    PageView::Documents => view! { <SmartDocumentsPage/> }.into_any(),
                    PageView::Monitoring => view! { <HealthMonitoringPage/> }.into_any(),
                    PageView::Trading => view! { <LoanTradingPage/> }.into_any(),
                    PageView::Esg => view! { <GreenerLendingPage/> }.into_any(),
                }}
            </main>
        </div>
    }
}
