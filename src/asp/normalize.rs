use serde::Serialize;

use super::tables::{
    BADGE_COLORS, DEFAULT_BADGE_COLOR, DISPLAY_NAMES, DTI_CODE, DTI_FALLBACK_SLUG,
    DTI_SUB_SERVICES, DTI_URL_PATTERNS, JA_TO_SLUG, UPPER_TO_SLUG,
};

/// Background and text classes for an ASP badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeColor {
    pub bg: &'static str,
    pub text: &'static str,
}

impl BadgeColor {
    /// Both classes joined for use in a `class` attribute.
    #[must_use]
    pub fn classes(&self) -> String {
        format!("{} {}", self.bg, self.text)
    }
}

impl Default for BadgeColor {
    fn default() -> Self {
        Self {
            bg: DEFAULT_BADGE_COLOR.0,
            text: DEFAULT_BADGE_COLOR.1,
        }
    }
}

/// Summary of a known ASP for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AspInfo {
    pub slug: &'static str,
    pub display_name: &'static str,
    pub dti_sub_service: bool,
    pub badge: BadgeColor,
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Resolve a DTI product to its sub-site from its source URL.
fn resolve_dti_url(source_url: &str) -> &'static str {
    DTI_URL_PATTERNS
        .iter()
        .find(|(host, _)| source_url.contains(host))
        .map_or(DTI_FALLBACK_SLUG, |(_, slug)| *slug)
}

/// Normalize a raw ASP name to its canonical lowercase slug.
///
/// Checks, in order: localized display names, uppercase legacy codes, the
/// generic `DTI` code (resolved through `source_url` when given), and
/// finally falls back to the ASCII-lowercased input. Never fails; unknown
/// names pass through lowercased, so use [`is_valid_asp_name`] to tell them
/// apart.
#[must_use]
pub fn normalize_asp_name(raw: &str, source_url: Option<&str>) -> String {
    if let Some(slug) = lookup(JA_TO_SLUG, raw) {
        return slug.to_string();
    }

    let upper = raw.to_ascii_uppercase();
    if let Some(slug) = lookup(UPPER_TO_SLUG, &upper) {
        return slug.to_string();
    }

    if upper == DTI_CODE {
        return match source_url {
            Some(url) => resolve_dti_url(url),
            None => DTI_FALLBACK_SLUG,
        }
        .to_string();
    }

    // ASCII only, like SQL `LOWER`.
    raw.to_ascii_lowercase()
}

/// Human-readable label for any raw ASP name.
///
/// Unregistered names come back in their normalized form.
#[must_use]
pub fn asp_display_name(raw: &str) -> String {
    let slug = normalize_asp_name(raw, None);
    lookup(DISPLAY_NAMES, &slug).map_or(slug, str::to_string)
}

/// Whether a raw ASP name normalizes to a known canonical slug.
#[must_use]
pub fn is_valid_asp_name(raw: &str) -> bool {
    let slug = normalize_asp_name(raw, None);
    DISPLAY_NAMES.iter().any(|(s, _)| *s == slug)
}

/// Whether a raw ASP name belongs to the DTI umbrella.
///
/// The generic `DTI` code itself counts, since it normalizes to the
/// fallback slug.
#[must_use]
pub fn is_dti_sub_service(raw: &str) -> bool {
    let slug = normalize_asp_name(raw, None);
    DTI_SUB_SERVICES.contains(&slug.as_str())
}

/// Badge colors for a raw ASP name, gray when unregistered.
#[must_use]
pub fn asp_badge_color(raw: &str) -> BadgeColor {
    let slug = normalize_asp_name(raw, None);
    BADGE_COLORS
        .iter()
        .find(|(s, _, _)| *s == slug)
        .map_or_else(BadgeColor::default, |&(_, bg, text)| BadgeColor { bg, text })
}

/// Every canonical ASP, in listing order.
#[must_use]
pub fn known_asps() -> Vec<AspInfo> {
    DISPLAY_NAMES
        .iter()
        .map(|&(slug, display_name)| AspInfo {
            slug,
            display_name,
            dti_sub_service: DTI_SUB_SERVICES.contains(&slug),
            badge: asp_badge_color(slug),
        })
        .collect()
}
