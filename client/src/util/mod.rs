//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Display math and formatting are pure and covered by native tests; browser
//! side effects are isolated in `viewport` behind the `hydrate` feature.

pub mod format;
pub mod metrics;
pub mod tone;
pub mod viewport;
