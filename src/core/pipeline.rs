//! Per-file pipeline: read, parse, rewrite, print, write.
//!
//! A file that cannot be parsed is skipped and nothing is written for it. Read, print
//! and write failures are returned as errors.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::parsers::{ParsedSource, parse_jsx_source};
use super::printer::print_module;
use crate::rewrite::{Replacement, RewriteSettings, transform};

/// 1-based position in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub col: usize,
}

impl SourceLocation {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// A replacement with its position in the original source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedReplacement {
    pub location: SourceLocation,
    pub replacement: Replacement,
}

/// Output of rewriting one source text.
#[derive(Debug, Clone)]
pub struct RewrittenSource {
    pub code: String,
    pub replacements: Vec<LocatedReplacement>,
}

/// Result of processing one file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file was rewritten; `output` is where it was written, if anywhere.
    Rewritten {
        output: Option<PathBuf>,
        source: RewrittenSource,
    },
    /// The file could not be parsed. Nothing was written.
    Skipped { reason: String },
}

/// Rewrite source text. Fails if the text cannot be parsed or printed.
pub fn rewrite_source(
    code: String,
    file_path: &Path,
    settings: &RewriteSettings,
) -> Result<RewrittenSource> {
    let parsed = parse_jsx_source(code, file_path, Default::default())?;
    rewrite_parsed(parsed, settings)
}

/// Rewrite an already parsed module and print it.
pub fn rewrite_parsed(
    mut parsed: ParsedSource,
    settings: &RewriteSettings,
) -> Result<RewrittenSource> {
    let replacements = transform(&mut parsed.module, settings)
        .into_iter()
        .map(|replacement| {
            let loc = parsed.source_map.lookup_char_pos(replacement.span.lo);
            LocatedReplacement {
                location: SourceLocation::new(loc.line, loc.col_display + 1),
                replacement,
            }
        })
        .collect();

    Ok(RewrittenSource {
        code: print_module(&parsed)?,
        replacements,
    })
}

/// Rewrite `input` and write the result to `output`.
///
/// Pass `None` as `output` to rewrite without writing anything.
pub fn rewrite_file(
    input: &Path,
    output: Option<&Path>,
    settings: &RewriteSettings,
) -> Result<FileOutcome> {
    let code = fs::read_to_string(input)
        .with_context(|| format!("Failed to read file: {}", input.display()))?;

    let parsed = match parse_jsx_source(code, input, Default::default()) {
        Ok(parsed) => parsed,
        Err(err) => {
            return Ok(FileOutcome::Skipped {
                reason: format!("{:#}", err),
            });
        }
    };
    let source = rewrite_parsed(parsed, settings)?;

    if let Some(output) = output {
        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create directory: {}", parent.display())
            })?;
        }
        fs::write(output, &source.code)
            .with_context(|| format!("Failed to write file: {}", output.display()))?;
    }

    Ok(FileOutcome::Rewritten {
        output: output.map(Path::to_path_buf),
        source,
    })
}
