//! Rewrite engine: finds Chinese text in a module and replaces it with lookup calls.
//!
//! - `key`: pinyin based key generation
//! - `script`: target script detection
//! - `shape`: the node shapes that carry text and the mutations applied to them
//! - `visitor`: the single pass over the module that plans and applies mutations

use std::collections::HashSet;

use anyhow::Result;
use swc_common::Span;
use swc_ecma_ast::Module;

pub mod key;
pub mod script;
pub mod shape;
mod visitor;


pub use key::{KeyGenerator, PinyinRomanizer, Romanizer, generate_key};
pub use script::ScriptMatcher;
pub use shape::ShapeKind;
pub use visitor::Rewriter;

/// Default name of the inserted lookup function.
pub const DEFAULT_CALLEE: &str = "i18n";

/// What to look for and what to insert.
#[derive(Debug, Clone)]
pub struct RewriteSettings {
    pub callee: String,
    pub matcher: ScriptMatcher,
    /// Trimmed texts that are never rewritten.
    pub ignore_texts: HashSet<String>,
}

impl Default for RewriteSettings {
    fn default() -> Self {
        Self {
            callee: DEFAULT_CALLEE.to_string(),
            matcher: ScriptMatcher::default(),
            ignore_texts: HashSet::new(),
        }
    }
}

impl RewriteSettings {
    pub fn new(callee: &str, pattern: &str, ignore_texts: &[String]) -> Result<Self> {
        Ok(Self {
            callee: callee.to_string(),
            matcher: ScriptMatcher::new(pattern)?,
            ignore_texts: ignore_texts.iter().map(|t| t.trim().to_string()).collect(),
        })
    }

    /// True if `text` contains the target script and is not ignored.
    pub fn should_rewrite(&self, text: &str) -> bool {
        self.matcher.matches(text) && !self.ignore_texts.contains(text.trim())
    }
}

/// One literal that was replaced by a lookup call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub kind: ShapeKind,
    /// Text the key was generated from.
    pub text: String,
    pub key: String,
    /// Span of the original node.
    pub span: Span,
}

/// Rewrite `module` in place using the pinyin romanizer.
///
/// Returns the replacements in visit order.
pub fn transform(module: &mut Module, settings: &RewriteSettings) -> Vec<Replacement> {
    transform_with(module, settings, &KeyGenerator::new(PinyinRomanizer))
}

/// Rewrite `module` in place with a custom key generator.
pub fn transform_with<R: Romanizer>(
    module: &mut Module,
    settings: &RewriteSettings,
    keys: &KeyGenerator<R>,
) -> Vec<Replacement> {
    Rewriter::new(settings, keys).rewrite(module)
}
