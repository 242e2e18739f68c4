//! Local UI chrome state (active view, loan tab, document mode).
//!
//! DESIGN
//! ======
//! The whole interactive surface of the dashboard is a handful of selectors.
//! Each setter is a plain assignment with no guards or side effects, so the
//! last click always wins. A loan selection only survives until the next
//! navigation bar click. The struct is held in a single `RwSignal`
//! provided at the app root.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::components::icon::IconKind;

/// Top-level panel chosen from the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageView {
    #[default]
    Dashboard,
    Loans,
    Documents,
    Monitoring,
    Trading,
    Esg,
}

impl PageView {
    /// Navigation order.
    pub const ALL: [Self; 6] = [Self::Dashboard, Self::Loans, Self::Documents, Self::Monitoring, Self::Trading, Self::Esg];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Portfolio Overview",
            Self::Loans => "Digital Loan Twins",
            Self::Documents => "Smart Documents",
            Self::Monitoring => "Health Monitoring",
            Self::Trading => "Loan Trading",
            Self::Esg => "Greener Lending",
        }
    }

    pub fn icon(self) -> IconKind {
        match self {
            Self::Dashboard => IconKind::Dashboard,
            Self::Loans => IconKind::File,
            Self::Documents => IconKind::Chart,
            Self::Monitoring => IconKind::Activity,
            Self::Trading => IconKind::TrendUp,
            Self::Esg => IconKind::Leaf,
        }
    }
}

/// Tabs on the loan twin detail card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoanTab {
    #[default]
    Overview,
    Clauses,
    Metrics,
    Covenants,
    Esg,
    Audit,
}

impl LoanTab {
    pub const ALL: [Self; 6] = [Self::Overview, Self::Clauses, Self::Metrics, Self::Covenants, Self::Esg, Self::Audit];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Clauses => "Smart Clauses",
            Self::Metrics => "Performance",
            Self::Covenants => "Covenants",
            Self::Esg => "ESG Metrics",
            Self::Audit => "Audit Trail",
        }
    }

    pub fn icon(self) -> IconKind {
        match self {
            Self::Overview => IconKind::File,
            Self::Clauses => IconKind::Shield,
            Self::Metrics => IconKind::Activity,
            Self::Covenants => IconKind::Check,
            Self::Esg => IconKind::Leaf,
            Self::Audit => IconKind::Clock,
        }
    }
}

/// Rendering of the credit agreement on the documents page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DocumentMode {
    #[default]
    Legal,
    Logic,
}

impl DocumentMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Legal => "Legal View",
            Self::Logic => "Logic View",
        }
    }
}

/// UI selectors for the whole dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub view: PageView,
    pub loan_tab: LoanTab,
    pub document_mode: DocumentMode,
    /// Loan opened from another view. `None` means the loan twin page shows
    /// the first loan and hides its back link.
    pub selected_loan_id: Option<String>,
}

impl UiState {
    /// Switch panels from the navigation bar. Any loan opened from another
    /// view is forgotten.
    pub fn navigate(&mut self, view: PageView) {
        self.selected_loan_id = None;
        self.view = view;
    }

    pub fn select_tab(&mut self, tab: LoanTab) {
        self.loan_tab = tab;
    }

    pub fn set_document_mode(&mut self, mode: DocumentMode) {
        self.document_mode = mode;
    }

    /// Jump to the loan twin for `loan_id`, starting on its overview tab.
    pub fn open_loan(&mut self, loan_id: &str) {
        self.selected_loan_id = Some(loan_id.to_owned());
        self.loan_tab = LoanTab::Overview;
        self.view = PageView::Loans;
    }

    pub fn back_to_portfolio(&mut self) {
        self.selected_loan_id = None;
        self.view = PageView::Dashboard;
    }
}
