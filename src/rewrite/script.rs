use anyhow::{Context, Result};
use regex::Regex;

/// CJK Unified Ideographs.
pub const DEFAULT_PATTERN: &str = r"[\u{4E00}-\u{9FFF}]";

/// Detects text written in the target script.
///
/// Holds a compiled character class and nothing else, so one matcher can be reused
/// for any number of files without carrying state between them.
#[derive(Debug, Clone)]
pub struct ScriptMatcher {
    regex: Regex,
}

impl ScriptMatcher {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .with_context(|| format!("Invalid target script pattern: \"{}\"", pattern))?;
        Ok(Self { regex })
    }

    /// True if any character of `text` is in the target script.
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl Default for ScriptMatcher {
    fn default() -> Self {
        Self {
            regex: Regex::new(DEFAULT_PATTERN).expect("default pattern is valid"),
        }
    }
}
