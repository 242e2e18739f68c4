use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_portfolio_overview() {
    let state = UiState::default();
    assert_eq!(state.view, PageView::Dashboard);
    assert_eq!(state.loan_tab, LoanTab::Overview);
    assert_eq!(state.document_mode, DocumentMode::Legal);
    assert_eq!(state.selected_loan_id, None);
}

// =============================================================
// Selectors
// =============================================================

#[test]
fn navigate_last_click_wins() {
    let mut state = UiState::default();
    state.navigate(PageView::Trading);
    state.navigate(PageView::Esg);
    state.navigate(PageView::Monitoring);
    assert_eq!(state.view, PageView::Monitoring);
}

#[test]
fn navigate_leaves_other_selectors_alone() {
    let mut state = UiState::default();
    state.select_tab(LoanTab::Audit);
    state.set_document_mode(DocumentMode::Logic);
    state.navigate(PageView::Documents);
    assert_eq!(state.loan_tab, LoanTab::Audit);
    assert_eq!(state.document_mode, DocumentMode::Logic);
}

#[test]
fn nav_arrival_at_loans_forgets_earlier_selection() {
    let mut state = UiState::default();
    state.open_loan("LN-2024-004");
    state.navigate(PageView::Monitoring);
    state.navigate(PageView::Loans);
    assert_eq!(state.view, PageView::Loans);
    assert_eq!(state.selected_loan_id, None);
}

#[test]
fn open_loan_after_navigate_keeps_selection() {
    let mut state = UiState::default();
    state.navigate(PageView::Trading);
    state.open_loan("LN-2024-002");
    assert_eq!(state.selected_loan_id.as_deref(), Some("LN-2024-002"));
}

#[test]
fn select_tab_assigns() {
    let mut state = UiState::default();
    state.select_tab(LoanTab::Covenants);
    assert_eq!(state.loan_tab, LoanTab::Covenants);
    state.select_tab(LoanTab::Overview);
    assert_eq!(state.loan_tab, LoanTab::Overview);
}

#[test]
fn document_mode_toggles_between_two_views() {
    let mut state = UiState::default();
    state.set_document_mode(DocumentMode::Logic);
    assert_eq!(state.document_mode, DocumentMode::Logic);
    state.set_document_mode(DocumentMode::Legal);
    assert_eq!(state.document_mode, DocumentMode::Legal);
}

#[test]
fn open_loan_switches_view_and_resets_tab() {
    let mut state = UiState::default();
    state.select_tab(LoanTab::Esg);
    state.open_loan("LN-2024-003");
    assert_eq!(state.view, PageView::Loans);
    assert_eq!(state.loan_tab, LoanTab::Overview);
    assert_eq!(state.selected_loan_id.as_deref(), Some("LN-2024-003"));
}

#[test]
fn back_to_portfolio_clears_selection() {
    let mut state = UiState::default();
    state.open_loan("LN-2024-003");
    state.back_to_portfolio();
    assert_eq!(state.view, PageView::Dashboard);
    assert_eq!(state.selected_loan_id, None);
}

// =============================================================
// Enumerations
// =============================================================

#[test]
fn page_views_are_six_in_nav_order() {
    assert_eq!(PageView::ALL.len(), 6);
    assert_eq!(PageView::ALL[0], PageView::default());
    let labels: Vec<_> = PageView::ALL.iter().map(|v| v.label()).collect();
    assert_eq!(
        labels,
        [
            "Portfolio Overview",
            "Digital Loan Twins",
            "Smart Documents",
            "Health Monitoring",
            "Loan Trading",
            "Greener Lending",
        ]
    );
}

#[test]
fn loan_tabs_are_distinct() {
    for (i, a) in LoanTab::ALL.iter().enumerate() {
        for (j, b) in LoanTab::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
