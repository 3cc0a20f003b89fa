//! ASP catalog library.
//!
//! Normalizes affiliate service provider (ASP) names to canonical slugs,
//! generates SQL that performs the same normalization inside a query, and
//! serves a small product catalog keyed by those slugs.

// Allow raw string hashes for safety - they're harmless and prevent issues if content changes
#![allow(clippy::needless_raw_string_hashes)]

pub mod asp;
pub mod components;
pub mod config;
pub mod db;
pub mod sql;
pub mod web;
