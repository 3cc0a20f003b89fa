//! SQL `CASE` fragments that reproduce [`crate::asp::normalize_asp_name`]
//! inside a query.
//!
//! Column references are interpolated verbatim, so they are only accepted as
//! [`ColumnRef`], which can only be built from `&'static str`. Literal values
//! always pass through [`quote_literal`].

use std::borrow::Cow;
use std::fmt;

use crate::asp::tables::{
    DTI_CODE, DTI_FALLBACK_SLUG, DTI_URL_PATTERNS, JA_TO_SLUG, UPPER_TO_SLUG,
};

/// A trusted SQL column expression known at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef(Cow<'static, str>);

impl ColumnRef {
    /// Wrap a static column expression such as `"p.asp_name"`.
    #[must_use]
    pub const fn new(expr: &'static str) -> Self {
        Self(Cow::Borrowed(expr))
    }

    /// `UPPER(<self>)`.
    #[must_use]
    pub fn upper(&self) -> Self {
        Self(Cow::Owned(format!("UPPER({})", self.0)))
    }

    /// `LOWER(<self>)`.
    #[must_use]
    pub fn lower(&self) -> Self {
        Self(Cow::Owned(format!("LOWER({})", self.0)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Quote a value as a SQL string literal, doubling embedded single quotes.
#[must_use]
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn equality_case_parts(column: &ColumnRef, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .map(|(raw, slug)| {
            format!(
                "WHEN {column} = {} THEN {}",
                quote_literal(raw),
                quote_literal(slug)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `WHEN <url> LIKE '%host%' THEN '<slug>'` for each DTI sub-site, in
/// lookup order. The caller supplies the surrounding `CASE ... END`.
///
/// Matching is only case-sensitive on connections with
/// `PRAGMA case_sensitive_like = ON`, which [`crate::db::Database`] sets.
#[must_use]
pub fn build_dti_url_case_parts(url_column: &ColumnRef) -> String {
    DTI_URL_PATTERNS
        .iter()
        .map(|(host, slug)| {
            format!(
                "WHEN {url_column} LIKE {} THEN {}",
                quote_literal(&format!("%{host}%")),
                quote_literal(slug)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `WHEN <col> = '<name>' THEN '<slug>'` for each localized display name.
#[must_use]
pub fn build_ja_to_en_case_parts(column: &ColumnRef) -> String {
    equality_case_parts(column, JA_TO_SLUG)
}

/// `WHEN <col> = '<CODE>' THEN '<slug>'` for each uppercase legacy code.
///
/// Pass an already-uppercased expression (see [`ColumnRef::upper`]) to match
/// the in-process lookup.
#[must_use]
pub fn build_upper_to_lower_case_parts(column: &ColumnRef) -> String {
    equality_case_parts(column, UPPER_TO_SLUG)
}

/// A full `CASE` expression yielding the canonical slug for a row.
///
/// Branch order mirrors the in-process normalizer: localized names, then
/// uppercase codes, then `DTI` resolved by URL, then the lowercased name.
#[must_use]
pub fn build_asp_normalization_sql(name_column: &ColumnRef, url_column: &ColumnRef) -> String {
    let upper_name = name_column.upper();
    format!(
        "CASE {ja} {upper} WHEN {upper_name} = {dti} THEN CASE {urls} ELSE {fallback} END ELSE {lower} END",
        ja = build_ja_to_en_case_parts(name_column),
        upper = build_upper_to_lower_case_parts(&upper_name),
        dti = quote_literal(DTI_CODE),
        urls = build_dti_url_case_parts(url_column),
        fallback = quote_literal(DTI_FALLBACK_SLUG),
        lower = name_column.lower(),
    )
}

/// Predicate matching rows whose normalized ASP is one of `slugs`.
///
/// An empty list renders `IN ()`, which matches nothing.
#[must_use]
pub fn build_asp_match_sql<S: AsRef<str>>(
    name_column: &ColumnRef,
    url_column: &ColumnRef,
    slugs: &[S],
) -> String {
    let list = slugs
        .iter()
        .map(|s| quote_literal(s.as_ref()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "({}) IN ({list})",
        build_asp_normalization_sql(name_column, url_column)
    )
}
