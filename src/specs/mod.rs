// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications for pucatrade.com. Each spec focuses
//! on a single page family and encodes *where the ground truth lives in the
//! HTML* and *how to extract it*.
//!
//! ## What lives here
//! - **Pure HTML parsing** for remote pages: the per-month ledger pages
//!   (`ledger`) and the month selector they embed (`months`).
//! - **Marker choice**: the fixed `<div class="label…` / `<div class="value…`
//!   template of a transaction block, the `<div class="column sender">`
//!   transaction delimiter, the `href="` month links. These markers are the
//!   effective wire contract; they break if the site template changes.
//! - **Shaping** of results into `Transaction` records ready for CSV rows.
//!
//! ## What does **not** live here
//! - Networking and the cookie session (`core::net`).
//! - The authentication/retry loop and page sweep (`runner`).
//! - Output formatting and file handling (`csv`, `file`).
//!
//! ## Conventions & invariants
//! - Specs are testable **offline** against fixture HTML; no network in tests.
//! - Structural scanning within known blocks; no full-document regexes.
//! - A malformed transaction block is a hard error that propagates; there is
//!   deliberately no partial-failure isolation.

pub mod ledger;
pub mod months;
