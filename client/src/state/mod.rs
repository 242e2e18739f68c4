//! Reactive client state provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! The dashboard renders static data, so the only state is UI selection.

pub mod ui;
