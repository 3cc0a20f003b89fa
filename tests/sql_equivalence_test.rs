//! The generated SQL must normalize exactly like the in-process code.
//!
//! Each case is evaluated by SQLite against a one-row CTE and compared with
//! `normalize_asp_name`.

use asp_catalog::asp::normalize_asp_name;
use asp_catalog::asp::tables::{DISPLAY_NAMES, DTI_URL_PATTERNS, JA_TO_SLUG, UPPER_TO_SLUG};
use asp_catalog::db::Database;
use asp_catalog::sql::{build_asp_match_sql, build_asp_normalization_sql, ColumnRef};
use sqlx::SqlitePool;

const NAME: ColumnRef = ColumnRef::new("asp_name");
const URL: ColumnRef = ColumnRef::new("source_url");

async fn sql_normalize(pool: &SqlitePool, name: &str, url: Option<&str>) -> Option<String> {
    let sql = format!(
        "WITH input(asp_name, source_url) AS (VALUES (?, ?)) SELECT {} FROM input",
        build_asp_normalization_sql(&NAME, &URL)
    );
    sqlx::query_scalar::<_, Option<String>>(&sql)
        .bind(name)
        .bind(url)
        .fetch_one(pool)
        .await
        .expect("Failed to evaluate normalization sql")
}

async fn sql_matches(pool: &SqlitePool, name: &str, url: Option<&str>, slugs: &[&str]) -> bool {
    let sql = format!(
        "WITH input(asp_name, source_url) AS (VALUES (?, ?)) SELECT COUNT(*) FROM input WHERE {}",
        build_asp_match_sql(&NAME, &URL, slugs)
    );
    let count = sqlx::query_scalar::<_, i64>(&sql)
        .bind(name)
        .bind(url)
        .fetch_one(pool)
        .await
        .expect("Failed to evaluate match sql");
    count > 0
}

fn cases() -> Vec<(String, Option<String>)> {
    let mut cases: Vec<(String, Option<String>)> = Vec::new();

    for (raw, _) in JA_TO_SLUG {
        cases.push(((*raw).to_string(), None));
    }
    for (code, _) in UPPER_TO_SLUG {
        cases.push(((*code).to_string(), None));
        cases.push((code.to_lowercase(), None));
    }
    for (_, display) in DISPLAY_NAMES {
        cases.push(((*display).to_string(), None));
    }
    for (host, _) in DTI_URL_PATTERNS {
        cases.push(("DTI".to_string(), Some(format!("https://www.{host}/movies/1/"))));
        cases.push(("dti".to_string(), Some(format!("https://{host}/?page=2"))));
        cases.push((
            "DTI".to_string(),
            Some(format!("https://WWW.{}/MOVIES/1/", host.to_ascii_uppercase())),
        ));
    }
    cases.push((
        "DTI".to_string(),
        Some("https://WWW.HEYZO.COM/moviepages/1/".to_string()),
    ));
    cases.push((
        "Dti".to_string(),
        Some("https://www.Caribbeancom.com/moviepages/1/".to_string()),
    ));

    cases.push(("DTI".to_string(), None));
    cases.push((
        "DTI".to_string(),
        Some("https://www.unknown-dti-site.com/".to_string()),
    ));
    cases.push((
        "FANZA".to_string(),
        Some("https://www.1pondo.tv/movies/1/".to_string()),
    ));
    cases.push((String::new(), None));
    cases.push(("SomeNewSite".to_string(), None));
    cases.push(("Mixed Case ASP".to_string(), None));
    cases.push(("ÉCOLE".to_string(), None));
    cases.push(("Straße Vidéo".to_string(), None));
    cases.push(("ＦＡＮＺＡ".to_string(), None));
    cases
}

#[tokio::test]
async fn test_sql_normalization_matches_in_process() {
    let db = Database::in_memory().await.expect("Failed to create database");

    for (name, url) in cases() {
        let expected = normalize_asp_name(&name, url.as_deref());
        let actual = sql_normalize(db.pool(), &name, url.as_deref()).await;
        assert_eq!(
            actual.as_deref(),
            Some(expected.as_str()),
            "mismatch for name={name:?} url={url:?}"
        );
    }
}

#[tokio::test]
async fn test_sql_dti_url_order_matches_in_process() {
    let db = Database::in_memory().await.expect("Failed to create database");
    let url = "https://www.1pondo.tv/movies/1/?back=https://www.caribbeancom.com/";

    let expected = normalize_asp_name("DTI", Some(url));
    assert_eq!(expected, "caribbeancom");
    assert_eq!(
        sql_normalize(db.pool(), "DTI", Some(url)).await.as_deref(),
        Some("caribbeancom")
    );
}

#[tokio::test]
async fn test_sql_url_match_respects_case() {
    let db = Database::in_memory().await.expect("Failed to create database");
    let url = "https://WWW.HEYZO.COM/moviepages/1/";

    assert_eq!(normalize_asp_name("DTI", Some(url)), "dti");
    assert_eq!(
        sql_normalize(db.pool(), "DTI", Some(url)).await.as_deref(),
        Some("dti")
    );
    assert_eq!(
        sql_normalize(db.pool(), "ÉCOLE", None).await.as_deref(),
        Some(normalize_asp_name("ÉCOLE", None).as_str())
    );
}

#[tokio::test]
async fn test_sql_match_predicate() {
    let db = Database::in_memory().await.expect("Failed to create database");
    let pool = db.pool();

    assert!(sql_matches(pool, "FANZA", None, &["fanza", "mgs"]).await);
    assert!(sql_matches(pool, "一本道", None, &["1pondo"]).await);
    assert!(
        sql_matches(
            pool,
            "DTI",
            Some("https://www.heyzo.com/moviepages/1/"),
            &["heyzo"]
        )
        .await
    );
    assert!(!sql_matches(pool, "DTI", None, &["heyzo"]).await);
    assert!(!sql_matches(pool, "FANZA", None, &[]).await);
}

#[tokio::test]
async fn test_sql_match_escapes_caller_slugs() {
    let db = Database::in_memory().await.expect("Failed to create database");

    // A hostile slug stays inside its literal and simply matches nothing.
    assert!(!sql_matches(db.pool(), "FANZA", None, &["x') OR ('1'='1"]).await);
}
