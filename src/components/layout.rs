//! Base layout for the web UI.

use maud::{html, Markup, DOCTYPE};

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "ASPs" } };
/// let page = BaseLayout::new("ASPs").render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title.
    #[must_use]
    pub const fn new(title: &'a str) -> Self {
        Self { title }
    }

    /// Render the complete HTML page with the given content.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="ja" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    meta name="robots" content="noindex";
                    title { (self.title) " - ASP Catalog" }
                }
                body {
                    header class="container" {
                        nav {
                            a href="/" { strong { "ASP Catalog" } }
                        }
                    }
                    main class="container" {
                        (content)
                    }
                }
            }
        }
    }
}
