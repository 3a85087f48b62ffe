//! cn2i18n - rewrite hardcoded Chinese text into i18n lookups
//!
//! cn2i18n parses a JS/JSX/TS/TSX module, replaces every string literal, object key,
//! template segment, JSX attribute and JSX text containing Chinese characters with an
//! `i18n("key")` call, and prints the module back. Keys are derived from the pinyin of
//! the replaced text.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, printing and the per-file pipeline
//! - `rewrite`: Detection rules and key generation
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod rewrite;
pub mod utils;
