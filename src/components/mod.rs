//! Maud HTML components for the web UI.
//!
//! - `layout`: Base page layout
//! - `badge`: ASP and generic badges

pub mod badge;
pub mod layout;

pub use badge::{AspBadge, Badge};
pub use layout::BaseLayout;

/// Re-export maud for convenience
pub use maud::{html, Markup};
