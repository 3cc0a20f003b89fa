use std::sync::LazyLock;

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use super::models::{AspCount, NewProduct, Product, UpsertedProduct};
use crate::asp::normalize_asp_name;
use crate::sql::{build_asp_match_sql, build_asp_normalization_sql, ColumnRef};

const PRODUCT_ASP_NAME: ColumnRef = ColumnRef::new("asp_name");
const PRODUCT_SOURCE_URL: ColumnRef = ColumnRef::new("source_url");

/// Slug expression over the raw `products` columns.
static ASP_SLUG_SQL: LazyLock<String> =
    LazyLock::new(|| build_asp_normalization_sql(&PRODUCT_ASP_NAME, &PRODUCT_SOURCE_URL));

// ========== Products ==========

/// Insert a product or update the existing row with the same code.
///
/// The canonical slug is derived in-process. When the incoming row has no
/// source URL the stored one is kept and used for DTI resolution.
pub async fn upsert_product(pool: &SqlitePool, product: &NewProduct) -> Result<UpsertedProduct> {
    let mut tx = pool.begin().await.context("Failed to begin upsert")?;

    let stored_url: Option<String> = if product.source_url.is_none() {
        sqlx::query_scalar::<_, Option<String>>(
            "SELECT source_url FROM products WHERE product_code = ?",
        )
        .bind(&product.product_code)
        .fetch_optional(&mut *tx)
        .await
        .context("Failed to fetch stored source url")?
        .flatten()
    } else {
        None
    };

    let source_url = product.source_url.as_deref().or(stored_url.as_deref());
    let asp_slug = normalize_asp_name(&product.asp_name, source_url);

    let id = sqlx::query_scalar::<_, i64>(
        r"
        INSERT INTO products (product_code, title, asp_name, source_url, asp_slug)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(product_code) DO UPDATE SET
            title = COALESCE(excluded.title, products.title),
            asp_name = excluded.asp_name,
            source_url = COALESCE(excluded.source_url, products.source_url),
            asp_slug = excluded.asp_slug,
            updated_at = datetime('now')
        RETURNING id
        ",
    )
    .bind(&product.product_code)
    .bind(&product.title)
    .bind(&product.asp_name)
    .bind(&product.source_url)
    .bind(&asp_slug)
    .fetch_one(&mut *tx)
    .await
    .context("Failed to upsert product")?;

    tx.commit().await.context("Failed to commit upsert")?;

    Ok(UpsertedProduct { id, asp_slug })
}

/// Get a product by its code.
pub async fn get_product_by_code(pool: &SqlitePool, code: &str) -> Result<Option<Product>> {
    sqlx::query_as("SELECT * FROM products WHERE product_code = ?")
        .bind(code)
        .fetch_optional(pool)
        .await
        .context("Failed to fetch product by code")
}

/// Count all products.
pub async fn count_products(pool: &SqlitePool) -> Result<i64> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await
        .context("Failed to count products")?;
    Ok(row.0)
}

/// Most recently updated products.
pub async fn get_recent_products(pool: &SqlitePool, limit: i64) -> Result<Vec<Product>> {
    sqlx::query_as("SELECT * FROM products ORDER BY updated_at DESC, id DESC LIMIT ?")
        .bind(limit)
        .fetch_all(pool)
        .await
        .context("Failed to fetch recent products")
}

/// Products whose ASP, normalized in SQL from the raw columns, is one of
/// `slugs`. Newest first.
pub async fn get_products_by_asp<S: AsRef<str>>(
    pool: &SqlitePool,
    slugs: &[S],
    limit: i64,
) -> Result<Vec<Product>> {
    let filter = build_asp_match_sql(&PRODUCT_ASP_NAME, &PRODUCT_SOURCE_URL, slugs);
    let sql = format!(
        "SELECT * FROM products WHERE {filter} ORDER BY updated_at DESC, id DESC LIMIT ?"
    );

    sqlx::query_as(&sql)
        .bind(limit)
        .fetch_all(pool)
        .await
        .context("Failed to fetch products by asp")
}

/// Product counts grouped by SQL-normalized ASP, largest first.
pub async fn count_products_by_asp(pool: &SqlitePool) -> Result<Vec<AspCount>> {
    let sql = format!(
        r"
        SELECT {slug} AS asp_slug, COUNT(*) AS count
        FROM products
        GROUP BY 1
        ORDER BY count DESC, asp_slug ASC
        ",
        slug = ASP_SLUG_SQL.as_str()
    );

    sqlx::query_as(&sql)
        .fetch_all(pool)
        .await
        .context("Failed to count products by asp")
}

// ========== Backfill ==========

/// Count products whose stored slug is missing or stale.
pub async fn count_products_needing_asp_backfill(pool: &SqlitePool) -> Result<i64> {
    let sql = format!(
        "SELECT COUNT(*) FROM products WHERE asp_slug IS NULL OR asp_slug <> {slug}",
        slug = ASP_SLUG_SQL.as_str()
    );
    let row: (i64,) = sqlx::query_as(&sql)
        .fetch_one(pool)
        .await
        .context("Failed to count products needing asp backfill")?;
    Ok(row.0)
}

/// Re-derive `asp_slug` in SQL for up to `batch_size` stale rows.
///
/// Returns the number of rows updated; zero means nothing is left.
pub async fn backfill_asp_slugs(pool: &SqlitePool, batch_size: i64) -> Result<u64> {
    let sql = format!(
        r"
        UPDATE products
        SET asp_slug = {slug}, updated_at = datetime('now')
        WHERE id IN (
            SELECT id FROM products
            WHERE asp_slug IS NULL OR asp_slug <> {slug}
            ORDER BY id
            LIMIT ?
        )
        ",
        slug = ASP_SLUG_SQL.as_str()
    );

    let result = sqlx::query(&sql)
        .bind(batch_size)
        .execute(pool)
        .await
        .context("Failed to backfill asp slugs")?;

    Ok(result.rows_affected())
}

/// Clear every stored slug so the backfill recomputes all of them.
pub async fn reset_asp_slugs(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query("UPDATE products SET asp_slug = NULL")
        .execute(pool)
        .await
        .context("Failed to reset asp slugs")?;
    Ok(result.rows_affected())
}
