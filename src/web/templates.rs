use maud::{html, Render};

use crate::asp::{is_valid_asp_name, AspInfo};
use crate::components::{AspBadge, Badge, BaseLayout};
use crate::db::{AspCount, Product};

/// Data shown on the index page.
#[derive(Debug, Clone, Copy)]
pub struct IndexPage<'a> {
    pub asps: &'a [AspInfo],
    pub counts: &'a [AspCount],
    /// Latest products, badged from their raw ASP name and URL.
    pub recent: &'a [Product],
    pub backfill_on_start: bool,
}

/// Render the index page: every known ASP with its stored product count,
/// any unrecognized ASPs found in the catalog, then the latest products.
#[must_use]
pub fn render_index(page: &IndexPage<'_>) -> String {
    let IndexPage {
        asps,
        counts,
        recent,
        backfill_on_start,
    } = *page;

    let count_for = |slug: &str| {
        counts
            .iter()
            .find(|c| c.asp_slug == slug)
            .map_or(0, |c| c.count)
    };
    let unrecognized: Vec<&AspCount> = counts
        .iter()
        .filter(|c| !is_valid_asp_name(&c.asp_slug))
        .collect();

    let content = html! {
        h1 { "Affiliate Service Providers" }
        table class="asp-table" {
            thead {
                tr {
                    th { "ASP" }
                    th { "Slug" }
                    th { "Products" }
                }
            }
            tbody {
                @for asp in asps {
                    tr {
                        td {
                            (AspBadge::new(asp.slug).render())
                            @if asp.dti_sub_service {
                                " " (Badge::new("DTI", "dti-badge").render())
                            }
                        }
                        td { code { (asp.slug) } }
                        td { (count_for(asp.slug)) }
                    }
                }
            }
        }
        @if !unrecognized.is_empty() {
            h2 { "Unrecognized" }
            ul class="asp-unrecognized" {
                @for c in &unrecognized {
                    li { (AspBadge::new(&c.asp_slug).render()) " " (c.count) }
                }
            }
        }
        @if !recent.is_empty() {
            h2 { "Recent products" }
            ul class="recent-products" {
                @for p in recent {
                    li {
                        (AspBadge::new(&p.asp_name)
                            .with_source_url(p.source_url.as_deref())
                            .render())
                        " "
                        code { (p.product_code) }
                        @if let Some(title) = &p.title {
                            " " (title)
                        }
                    }
                }
            }
        }
        p class="backfill-status" {
            "Slug backfill on start: "
            @if backfill_on_start { "on" } @else { "off" }
        }
    };

    BaseLayout::new("ASPs").render(content).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asp::known_asps;

    #[test]
    fn test_index_lists_known_asps_with_counts() {
        let counts = vec![AspCount {
            asp_slug: "heyzo".to_string(),
            count: 7,
        }];
        let html = render_index(&IndexPage {
            asps: &known_asps(),
            counts: &counts,
            recent: &[],
            backfill_on_start: true,
        });
        assert!(html.contains("<code>heyzo</code>"));
        assert!(html.contains("<td>7</td>"));
        assert!(html.contains("dti-badge"));
        assert!(!html.contains("Unrecognized"));
        assert!(!html.contains("Recent products"));
        assert!(html.contains("Slug backfill on start: on"));
    }

    #[test]
    fn test_index_shows_unrecognized() {
        let counts = vec![AspCount {
            asp_slug: "somesite".to_string(),
            count: 2,
        }];
        let html = render_index(&IndexPage {
            asps: &known_asps(),
            counts: &counts,
            recent: &[],
            backfill_on_start: false,
        });
        assert!(html.contains("Unrecognized"));
        assert!(html.contains("data-asp=\"somesite\""));
        assert!(html.contains("Slug backfill on start: off"));
    }

    #[test]
    fn test_index_badges_recent_products_from_raw_columns() {
        let recent = vec![Product {
            id: 1,
            product_code: "HZ-1".to_string(),
            title: Some("Sample".to_string()),
            asp_name: "DTI".to_string(),
            source_url: Some("https://www.heyzo.com/moviepages/1/".to_string()),
            asp_slug: None,
            created_at: "2024-01-01 00:00:00".to_string(),
            updated_at: "2024-01-01 00:00:00".to_string(),
        }];
        let html = render_index(&IndexPage {
            asps: &known_asps(),
            counts: &[],
            recent: &recent,
            backfill_on_start: false,
        });
        assert!(html.contains("Recent products"));
        assert!(html.contains("<code>HZ-1</code>"));
        let recent_section = &html[html.find("recent-products").unwrap()..];
        assert!(recent_section.contains("data-asp=\"heyzo\""));
    }
}
