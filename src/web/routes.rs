use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};

use super::templates;
use super::AppState;
use crate::asp::{
    asp_badge_color, asp_display_name, is_dti_sub_service, is_valid_asp_name, known_asps,
    normalize_asp_name, BadgeColor,
};
use crate::db::{
    count_products_by_asp, get_products_by_asp, get_recent_products, upsert_product, NewProduct,
};

const RECENT_PRODUCT_LIMIT: i64 = 20;
const DEFAULT_PRODUCT_LIMIT: i64 = 50;
const MAX_PRODUCT_LIMIT: i64 = 500;

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(health))
        .route("/api/asps", get(api_asps))
        .route("/api/asps/normalize", get(api_normalize))
        .route("/api/products", get(api_products).post(api_upsert_product))
        .route("/api/stats/asps", get(api_asp_stats))
}

// ========== HTML Routes ==========

async fn index(State(state): State<AppState>) -> Response {
    let counts = match count_products_by_asp(state.db.pool()).await {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to count products by asp: {e:#}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response();
        }
    };

    let recent = match get_recent_products(state.db.pool(), RECENT_PRODUCT_LIMIT).await {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("Failed to fetch recent products: {e:#}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response();
        }
    };

    let asps = known_asps();
    let page = templates::IndexPage {
        asps: &asps,
        counts: &counts,
        recent: &recent,
        backfill_on_start: state.config.backfill_on_start,
    };
    Html(templates::render_index(&page)).into_response()
}

async fn health() -> &'static str {
    "OK"
}

// ========== API Routes ==========

async fn api_asps() -> Response {
    Json(known_asps()).into_response()
}

#[derive(Debug, Deserialize)]
pub struct NormalizeParams {
    name: Option<String>,
    url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    input: String,
    slug: String,
    display_name: String,
    valid: bool,
    dti_sub_service: bool,
    badge: BadgeColor,
}

async fn api_normalize(Query(params): Query<NormalizeParams>) -> Response {
    let Some(name) = params.name else {
        return (StatusCode::BAD_REQUEST, "Missing name parameter").into_response();
    };

    let slug = normalize_asp_name(&name, params.url.as_deref());
    let response = NormalizeResponse {
        display_name: asp_display_name(&slug),
        valid: is_valid_asp_name(&slug),
        dti_sub_service: is_dti_sub_service(&slug),
        badge: asp_badge_color(&slug),
        input: name,
        slug,
    };

    Json(response).into_response()
}

#[derive(Debug, Deserialize)]
pub struct ProductsParams {
    /// Comma-separated ASP names in any raw form.
    asp: Option<String>,
    limit: Option<i64>,
}

/// Split a comma-separated ASP list into unique canonical slugs.
fn parse_asp_list(raw: &str) -> Vec<String> {
    let mut slugs: Vec<String> = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let slug = normalize_asp_name(part, None);
        if !slugs.contains(&slug) {
            slugs.push(slug);
        }
    }
    slugs
}

async fn api_products(
    State(state): State<AppState>,
    Query(params): Query<ProductsParams>,
) -> Response {
    let Some(asp) = params.asp else {
        return (StatusCode::BAD_REQUEST, "Missing asp parameter").into_response();
    };
    let slugs = parse_asp_list(&asp);
    let limit = params
        .limit
        .unwrap_or(DEFAULT_PRODUCT_LIMIT)
        .clamp(1, MAX_PRODUCT_LIMIT);

    match get_products_by_asp(state.db.pool(), &slugs, limit).await {
        Ok(products) => Json(products).into_response(),
        Err(e) => {
            tracing::error!(?slugs, "Failed to fetch products by asp: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
        }
    }
}

async fn api_upsert_product(
    State(state): State<AppState>,
    Json(product): Json<NewProduct>,
) -> Response {
    if product.product_code.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "product_code cannot be empty").into_response();
    }

    match upsert_product(state.db.pool(), &product).await {
        Ok(upserted) => {
            if !is_valid_asp_name(&upserted.asp_slug) {
                tracing::warn!(
                    product_code = %product.product_code,
                    asp_name = %product.asp_name,
                    asp_slug = %upserted.asp_slug,
                    "Stored product with unrecognized ASP"
                );
            }
            Json(upserted).into_response()
        }
        Err(e) => {
            tracing::error!(
                product_code = %product.product_code,
                "Failed to upsert product: {e:#}"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
        }
    }
}

async fn api_asp_stats(State(state): State<AppState>) -> Response {
    match count_products_by_asp(state.db.pool()).await {
        Ok(counts) => Json(counts).into_response(),
        Err(e) => {
            tracing::error!("Failed to count products by asp: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_asp_list_normalizes_and_dedupes() {
        assert_eq!(
            parse_asp_list("FANZA, fanza ,一本道,,MGS"),
            vec!["fanza", "1pondo", "mgs"]
        );
    }

    #[test]
    fn test_parse_asp_list_empty() {
        assert!(parse_asp_list(" , ").is_empty());
    }
}
