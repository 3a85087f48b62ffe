//! Report formatting and printing utilities.
//!
//! Every printer takes a writer so output can be captured in tests. Separate from
//! the rewrite engine so it can be used as a library without terminal output.

use std::collections::HashMap;
use std::io::Write;

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::{Map, Value};
use unicode_width::UnicodeWidthStr;

use crate::config::CONFIG_FILE_NAME;
use crate::core::LocatedReplacement;
use crate::utils::plural;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the summary line for a rewritten file.
///
/// `output` is `None` when the result went to stdout.
pub fn print_rewritten_to<W: Write>(
    writer: &mut W,
    input: &str,
    output: Option<&str>,
    count: usize,
) {
    let strings = plural(count, "string", "strings");
    let msg = match output {
        Some(output) => format!("Rewrote {} in {} \u{2192} {}", strings, input, output),
        None => format!("Rewrote {} in {}", strings, input),
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print why a file was skipped.
pub fn print_skipped_to<W: Write>(writer: &mut W, input: &str, reason: &str) {
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!("Skipped {}: could not be parsed, nothing written", input).red()
    );
    for line in reason.lines() {
        let _ = writeln!(writer, "  {} {}", "=".blue(), line);
    }
}

/// Print one aligned line per replacement: `file:line:col  kind  key  text`.
pub fn print_replacements_to<W: Write>(
    writer: &mut W,
    file: &str,
    replacements: &[LocatedReplacement],
) {
    let locations: Vec<String> = replacements
        .iter()
        .map(|r| format!("{}:{}:{}", file, r.location.line, r.location.col))
        .collect();

    let location_width = max_width(locations.iter().map(String::as_str));
    let kind_width = max_width(replacements.iter().map(|r| r.replacement.kind.as_str()));
    let key_width = max_width(replacements.iter().map(|r| r.replacement.key.as_str()));

    for (location, located) in locations.iter().zip(replacements) {
        let replacement = &located.replacement;
        let _ = writeln!(
            writer,
            "{}  {}  {}  {}",
            pad(location, location_width).blue(),
            pad(replacement.kind.as_str(), kind_width).dimmed().cyan(),
            pad(&replacement.key, key_width).bold(),
            replacement.text.escape_debug()
        );
    }
}

/// Key to source text, in first-seen order. Later texts sharing a key are dropped.
pub fn key_catalog(replacements: &[LocatedReplacement]) -> Map<String, Value> {
    let mut catalog = Map::new();
    for located in replacements {
        let replacement = &located.replacement;
        catalog
            .entry(replacement.key.clone())
            .or_insert_with(|| Value::String(replacement.text.clone()));
    }
    catalog
}

/// Keys generated from more than one distinct text, with those texts.
pub fn key_collisions(replacements: &[LocatedReplacement]) -> Vec<(String, Vec<String>)> {
    let mut texts_by_key: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for located in replacements {
        let replacement = &located.replacement;
        let texts = texts_by_key
            .entry(replacement.key.as_str())
            .or_insert_with(|| {
                order.push(replacement.key.as_str());
                Vec::new()
            });
        if !texts.contains(&replacement.text.as_str()) {
            texts.push(replacement.text.as_str());
        }
    }

    order
        .into_iter()
        .filter_map(|key| {
            let texts = &texts_by_key[key];
            (texts.len() > 1).then(|| {
                (
                    key.to_string(),
                    texts.iter().map(|t| t.to_string()).collect(),
                )
            })
        })
        .collect()
}

pub fn print_key_catalog_to<W: Write>(
    writer: &mut W,
    replacements: &[LocatedReplacement],
) -> Result<()> {
    let json = serde_json::to_string_pretty(&key_catalog(replacements))
        .context("Failed to serialize key catalog")?;
    writeln!(writer, "{}", json).context("Failed to write key catalog")?;
    Ok(())
}

/// Warn about keys shared by different texts. Collisions are reported, not resolved.
pub fn print_collisions_to<W: Write>(writer: &mut W, replacements: &[LocatedReplacement]) {
    for (key, texts) in key_collisions(replacements) {
        let quoted: Vec<String> = texts.iter().map(|t| format!("{:?}", t)).collect();
        let _ = writeln!(
            writer,
            "{} key {} is shared by {}: {}",
            "warning:".bold().yellow(),
            format!("\"{}\"", key).bold(),
            plural(texts.len(), "text", "texts"),
            quoted.join(", ")
        );
    }
}

pub fn print_init_to<W: Write>(writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
}

pub fn print_config_path_to<W: Write>(writer: &mut W, path: &str) {
    let _ = writeln!(writer, "{} {}", "config:".bold(), path);
}

fn max_width<'a>(items: impl Iterator<Item = &'a str>) -> usize {
    items.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Left-align `text` to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(padding))
}
