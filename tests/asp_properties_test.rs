//! Behavioral properties of ASP normalization.

use asp_catalog::asp::tables::{DISPLAY_NAMES, DTI_SUB_SERVICES, UPPER_TO_SLUG};
use asp_catalog::asp::{
    asp_badge_color, asp_display_name, is_dti_sub_service, is_valid_asp_name, normalize_asp_name,
};
use asp_catalog::sql::{build_asp_match_sql, build_asp_normalization_sql, ColumnRef};

#[test]
fn test_uppercase_codes_match_lowercase_form() {
    for (code, _) in UPPER_TO_SLUG {
        assert_eq!(
            normalize_asp_name(code, None),
            normalize_asp_name(&code.to_lowercase(), None),
            "case mismatch for {code}"
        );
    }
}

#[test]
fn test_canonical_slugs_are_valid_and_round_trip_display_names() {
    for (slug, _) in DISPLAY_NAMES {
        assert!(is_valid_asp_name(slug), "{slug} should be valid");
        let display = asp_display_name(slug);
        assert!(
            is_valid_asp_name(&display),
            "display name {display} for {slug} should be valid"
        );
        assert_eq!(normalize_asp_name(&display, None), *slug);
    }
}

#[test]
fn test_dti_sub_services() {
    for slug in DTI_SUB_SERVICES {
        assert!(is_dti_sub_service(slug), "{slug} should be a DTI sub-service");
    }
    assert!(is_dti_sub_service("DTI"));
    assert!(is_dti_sub_service("カリビアンコム"));
    assert!(!is_dti_sub_service("fanza"));
    assert!(!is_dti_sub_service("MGS"));
}

#[test]
fn test_dti_url_resolution() {
    assert_eq!(
        normalize_asp_name("DTI", Some("https://www.1pondo.tv/movies/010124_001/")),
        "1pondo"
    );
    assert_eq!(
        normalize_asp_name("DTI", Some("https://www.unknown-dti-site.com/movies/1/")),
        "dti"
    );
    assert_eq!(normalize_asp_name("DTI", None), "dti");
}

#[test]
fn test_empty_input() {
    assert_eq!(normalize_asp_name("", None), "");
    assert!(!is_valid_asp_name(""));
    assert_eq!(asp_display_name(""), "");
}

#[test]
fn test_distinct_raw_forms_converge() {
    assert_eq!(normalize_asp_name("Tokyo Hot", None), "tokyohot");
    assert_eq!(normalize_asp_name("トウキョウホット", None), "tokyohot");
    assert_eq!(normalize_asp_name("カリビアンコムプレミアム", None), "caribbeancompr");
    assert_eq!(normalize_asp_name("カリビアンコムPR", None), "caribbeancompr");
}

#[test]
fn test_unrecognized_names_are_not_valid() {
    assert_eq!(normalize_asp_name("Some Site", None), "some site");
    assert!(!is_valid_asp_name("Some Site"));
}

#[test]
fn test_badge_lookup_is_case_insensitive() {
    assert_eq!(asp_badge_color("FANZA"), asp_badge_color("fanza"));
    assert_ne!(asp_badge_color("fanza"), asp_badge_color("unknown"));
}

#[test]
fn test_sql_fragment_markers() {
    const NAME: ColumnRef = ColumnRef::new("asp_name");
    const URL: ColumnRef = ColumnRef::new("source_url");

    let empty: [&str; 0] = [];
    assert!(build_asp_match_sql(&NAME, &URL, &empty).contains("IN ()"));
    assert!(build_asp_normalization_sql(&NAME, &URL).contains("ELSE LOWER("));
}
