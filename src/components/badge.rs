//! Badge components for ASP labels.

use maud::{html, Markup, Render};

use crate::asp::{asp_badge_color, asp_display_name, normalize_asp_name};

/// A colored badge naming the ASP a product came from.
///
/// Accepts any raw ASP form. DTI products resolve to their sub-brand when a
/// source URL is given.
#[derive(Debug, Clone)]
pub struct AspBadge<'a> {
    pub asp_name: &'a str,
    pub source_url: Option<&'a str>,
}

impl<'a> AspBadge<'a> {
    /// Create a badge for a raw ASP name.
    #[must_use]
    pub const fn new(asp_name: &'a str) -> Self {
        Self {
            asp_name,
            source_url: None,
        }
    }

    /// Use the product's source URL to resolve DTI sub-brands.
    #[must_use]
    pub const fn with_source_url(mut self, source_url: Option<&'a str>) -> Self {
        self.source_url = source_url;
        self
    }
}

impl Render for AspBadge<'_> {
    fn render(&self) -> Markup {
        let slug = normalize_asp_name(self.asp_name, self.source_url);
        let color = asp_badge_color(&slug);
        let label = asp_display_name(&slug);
        let class = format!("asp-badge {}", color.classes());

        html! {
            span class=(class) data-asp=(slug) { (label) }
        }
    }
}

/// A generic badge component with custom class and content.
#[derive(Debug, Clone)]
pub struct Badge<'a> {
    /// Badge content
    pub content: &'a str,
    /// CSS class(es)
    pub class: &'a str,
}

impl<'a> Badge<'a> {
    /// Creates a new generic badge.
    #[must_use]
    pub const fn new(content: &'a str, class: &'a str) -> Self {
        Self { content, class }
    }
}

impl Render for Badge<'_> {
    fn render(&self) -> Markup {
        html! {
            span class=(self.class) {
                (self.content)
            }
        }
    }
}
