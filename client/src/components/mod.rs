//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome. Only `navigation` touches shared
//! state; the rest are pure functions of their props.

pub mod badge;
pub mod benefit_card;
pub mod callout;
pub mod icon;
pub mod navigation;
pub mod page_header;
pub mod progress_bar;
pub mod stat_card;
