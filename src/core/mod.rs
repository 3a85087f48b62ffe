//! Collaborators around the rewrite engine.
//!
//! - `parsers`: source text to syntax tree
//! - `printer`: syntax tree back to source text
//! - `pipeline`: read, parse, rewrite, print and write one file

pub mod parsers;
pub mod pipeline;
pub mod printer;

pub use pipeline::{
    FileOutcome, LocatedReplacement, RewrittenSource, SourceLocation, rewrite_file,
    rewrite_parsed, rewrite_source,
};
