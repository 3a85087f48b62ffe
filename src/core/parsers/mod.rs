//! Source parsing.
//!
//! - `jsx`: JS/JSX/TS/TSX parser built on swc

pub mod jsx;

pub use jsx::{ParsedSource, parse_jsx_source, syntax_for_path};
