//! Affiliate service provider (ASP) name normalization.
//!
//! Raw ASP identifiers arrive as canonical slugs (`fanza`), legacy uppercase
//! codes (`FANZA`) or localized display names (`カリビアンコム`). Everything
//! here maps them onto one canonical lowercase slug. All functions are total
//! and read only from the static tables in [`tables`].

mod normalize;
pub mod tables;

pub use normalize::{
    asp_badge_color, asp_display_name, is_dti_sub_service, is_valid_asp_name, known_asps,
    normalize_asp_name, AspInfo, BadgeColor,
};
