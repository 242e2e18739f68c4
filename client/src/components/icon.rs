//! Inline stroke icons.
//!
//! Icons are drawn as small 24x24 SVG path sets so the dashboard ships no
//! icon font or sprite sheet. Stroke colour comes from `currentColor`, which
//! lets the surrounding tone class tint them.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Dashboard,
    File,
    Chart,
    Activity,
    TrendUp,
    TrendDown,
    Leaf,
    Shield,
    Check,
    Clock,
    Alert,
    Warning,
    Dollar,
    Code,
    Info,
    Target,
    ArrowDown,
    ArrowLeft,
}

impl IconKind {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Dashboard => &["M3 3h7v9H3z", "M14 3h7v5h-7z", "M14 12h7v9h-7z", "M3 16h7v5H3z"],
            Self::File => &["M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z", "M14 2v6h6", "M8 13h8", "M8 17h8"],
            Self::Chart => &["M3 3v18h18", "M8 17V10", "M13 17V5", "M18 17v-4"],
            Self::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
            Self::TrendUp => &["M23 6l-9.5 9.5-5-5L1 18", "M17 6h6v6"],
            Self::TrendDown => &["M23 18l-9.5-9.5-5 5L1 6", "M17 18h6v-6"],
            Self::Leaf => &["M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.5 19 2c1 2 2 4.2 2 8 0 5.5-4.8 10-10 10z", "M2 21c0-3 1.9-5.4 5.2-6"],
            Self::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            Self::Check => &["M22 11.1V12a10 10 0 1 1-5.9-9.1", "M22 4L12 14l-3-3"],
            Self::Clock => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 6v6l4 2"],
            Self::Alert => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 8v4", "M12 16h.01"],
            Self::Warning => &["M10.3 3.9L1.8 18a2 2 0 0 0 1.7 3h17a2 2 0 0 0 1.7-3L13.7 3.9a2 2 0 0 0-3.4 0z", "M12 9v4", "M12 17h.01"],
            Self::Dollar => &["M12 1v22", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
            Self::Code => &["M16 18l6-6-6-6", "M8 6l-6 6 6 6"],
            Self::Info => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 16v-4", "M12 8h.01"],
            Self::Target => &[
                "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
                "M12 18a6 6 0 1 0 0-12 6 6 0 0 0 0 12z",
                "M12 14a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
            ],
            Self::ArrowDown => &["M12 5v14", "M19 12l-7 7-7-7"],
            Self::ArrowLeft => &["M19 12H5", "M12 19l-7-7 7-7"],
        }
    }
}

/// Decorative icon. `class` carries size and tone modifiers.
#[component]
pub fn Icon(kind: IconKind, #[prop(into, optional)] class: String) -> impl IntoView {
    let class = if class.is_empty() { "icon".to_owned() } else { format!("icon {class}") };
    view! {
        <svg class=class viewBox="0 0 24 24" aria-hidden="true">
            {kind.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
