// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows where the ground truth lives in one remote page and how to
//! pull it out with the `core::html` helpers. Specs only extract: numeric
//! parsing, filtering and ranking live in `pipeline`, fetching in `core::net`.
//!
//! - `countries` – per-country rows of the statistics table (raw strings).
//! - `allowlist` – optional set of country names to restrict the ranking to.
//!
//! Specs are testable offline against captured or hand-written HTML.
pub mod allowlist;
pub mod countries;
