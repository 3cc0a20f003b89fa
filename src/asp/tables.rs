//! Static lookup tables for ASP normalization.
//!
//! Every table here is consulted both in-process (`normalize`) and when
//! generating SQL (`crate::sql`), so entries must stay plain literals without
//! single quotes or LIKE wildcards.

/// Generic aggregator code that needs a source URL to be disambiguated.
pub const DTI_CODE: &str = "DTI";

/// Slug returned when a DTI product cannot be attributed to a sub-site.
pub const DTI_FALLBACK_SLUG: &str = "dti";

/// Japanese (and other localized) display names mapped to canonical slugs.
///
/// Matched exactly against the raw input, before any case folding.
pub const JA_TO_SLUG: &[(&str, &str)] = &[
    ("カリビアンコム", "caribbeancom"),
    ("カリビアンコムプレミアム", "caribbeancompr"),
    ("カリビアンコムPR", "caribbeancompr"),
    ("カリビアンコム プレミアム", "caribbeancompr"),
    ("カリビアンプレミアム", "caribbeancompr"),
    ("一本道", "1pondo"),
    ("ヘイゾー", "heyzo"),
    ("天然むすめ", "10musume"),
    ("パコパコママ", "pacopacomama"),
    ("ムラムラ", "muramura"),
    ("ムラムラってくる素人", "muramura"),
    ("トウキョウホット", "tokyohot"),
    ("東京熱", "tokyohot"),
    ("HEY動画", "heydouga"),
    ("ヘイ動画", "heydouga"),
    ("MGS動画", "mgs"),
    ("ソクミル", "sokmil"),
    ("ジャパンスカ", "japanska"),
    ("ファンザ", "fanza"),
];

/// Uppercase legacy codes mapped to canonical slugs.
///
/// Matched against the ASCII-uppercased raw input. `DTI` is deliberately
/// absent; it is resolved through [`DTI_URL_PATTERNS`].
pub const UPPER_TO_SLUG: &[(&str, &str)] = &[
    ("FANZA", "fanza"),
    ("DMM", "fanza"),
    ("MGS", "mgs"),
    ("DUGA", "duga"),
    ("APEX", "duga"),
    ("SOKMIL", "sokmil"),
    ("B10F", "b10f"),
    ("FC2", "fc2"),
    ("JAPANSKA", "japanska"),
    ("CARIBBEANCOM", "caribbeancom"),
    ("CARIBBEANCOMPR", "caribbeancompr"),
    ("1PONDO", "1pondo"),
    ("HEYZO", "heyzo"),
    ("10MUSUME", "10musume"),
    ("PACOPACOMAMA", "pacopacomama"),
    ("MURAMURA", "muramura"),
    ("TOKYOHOT", "tokyohot"),
    ("TOKYO HOT", "tokyohot"),
    ("TOKYO-HOT", "tokyohot"),
    ("HEYDOUGA", "heydouga"),
];

/// Hostname substrings identifying DTI sub-sites, checked in order.
///
/// First match wins, so a hostname that contains another entry's hostname
/// must come before it.
pub const DTI_URL_PATTERNS: &[(&str, &str)] = &[
    ("caribbeancompr.com", "caribbeancompr"),
    ("caribbeancom.com", "caribbeancom"),
    ("1pondo.tv", "1pondo"),
    ("heyzo.com", "heyzo"),
    ("10musume.com", "10musume"),
    ("pacopacomama.com", "pacopacomama"),
    ("muramura.tv", "muramura"),
    ("tokyo-hot.com", "tokyohot"),
    ("heydouga.com", "heydouga"),
];

/// Canonical slug to display name. Also defines the set of valid slugs and
/// their listing order.
pub const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("fanza", "FANZA"),
    ("mgs", "MGS動画"),
    ("duga", "DUGA"),
    ("sokmil", "ソクミル"),
    ("b10f", "B10F"),
    ("fc2", "FC2"),
    ("japanska", "Japanska"),
    ("dti", "DTI"),
    ("caribbeancom", "カリビアンコム"),
    ("caribbeancompr", "カリビアンコムプレミアム"),
    ("1pondo", "一本道"),
    ("heyzo", "HEYZO"),
    ("10musume", "天然むすめ"),
    ("pacopacomama", "パコパコママ"),
    ("muramura", "ムラムラ"),
    ("tokyohot", "Tokyo Hot"),
    ("heydouga", "HEY動画"),
];

/// Slugs attributed through the DTI umbrella, including the generic fallback.
pub const DTI_SUB_SERVICES: &[&str] = &[
    "caribbeancom",
    "caribbeancompr",
    "1pondo",
    "heyzo",
    "10musume",
    "pacopacomama",
    "muramura",
    "tokyohot",
    "heydouga",
    DTI_FALLBACK_SLUG,
];

/// Badge background/text classes per slug.
pub const BADGE_COLORS: &[(&str, &str, &str)] = &[
    ("fanza", "bg-pink-600", "text-white"),
    ("mgs", "bg-blue-600", "text-white"),
    ("duga", "bg-orange-500", "text-white"),
    ("sokmil", "bg-purple-600", "text-white"),
    ("b10f", "bg-teal-600", "text-white"),
    ("fc2", "bg-red-600", "text-white"),
    ("japanska", "bg-indigo-600", "text-white"),
    ("dti", "bg-emerald-600", "text-white"),
    ("caribbeancom", "bg-green-600", "text-white"),
    ("caribbeancompr", "bg-green-700", "text-white"),
    ("1pondo", "bg-yellow-500", "text-black"),
    ("heyzo", "bg-rose-500", "text-white"),
    ("10musume", "bg-sky-500", "text-white"),
    ("pacopacomama", "bg-amber-600", "text-white"),
    ("muramura", "bg-fuchsia-600", "text-white"),
    ("tokyohot", "bg-red-800", "text-white"),
    ("heydouga", "bg-cyan-600", "text-white"),
];

/// Colors for slugs without a registered badge.
pub const DEFAULT_BADGE_COLOR: (&str, &str) = ("bg-gray-600", "text-white");
