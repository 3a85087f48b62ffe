//! Lookup key generation.
//!
//! A key is built from the romanized syllables of a string. Longer strings are
//! compressed harder so keys stay short as phrases grow:
//!
//! | Syllables | Characters kept per syllable |
//! |-----------|------------------------------|
//! | 16+       | 1                            |
//! | 8..=15    | 2                            |
//! | 4..=7     | 4                            |
//! | 0..=3     | all                          |
//!
//! Keys are not deduplicated. Two different strings may produce the same key.

use pinyin::ToPinyin;

/// Converts text into an ordered sequence of tone-free syllables.
pub trait Romanizer {
    fn romanize(&self, text: &str) -> Vec<String>;
}

/// Romanizer backed by the `pinyin` crate.
///
/// Every Chinese character becomes one plain (toneless) syllable, using the first
/// reading for heteronyms. Other characters are grouped into whitespace-separated
/// words and kept verbatim, one syllable per word.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinRomanizer;

impl Romanizer for PinyinRomanizer {
    fn romanize(&self, text: &str) -> Vec<String> {
        let mut syllables = Vec::new();
        let mut word = String::new();

        for (ch, pinyin) in text.chars().zip(text.to_pinyin()) {
            match pinyin {
                Some(pinyin) => {
                    flush_word(&mut word, &mut syllables);
                    syllables.push(pinyin.plain().to_string());
                }
                None if ch.is_whitespace() => flush_word(&mut word, &mut syllables),
                None => word.push(ch),
            }
        }
        flush_word(&mut word, &mut syllables);

        syllables
    }
}

fn flush_word(word: &mut String, syllables: &mut Vec<String>) {
    if !word.is_empty() {
        syllables.push(std::mem::take(word));
    }
}

/// Truncation tier picked from the number of syllables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// 16 or more syllables: initials only.
    Initials,
    /// 8 to 15 syllables: first two characters.
    Pairs,
    /// 4 to 7 syllables: first four characters.
    Quads,
    /// Fewer than 4 syllables: untouched.
    Full,
}

impl Tier {
    pub fn for_count(count: usize) -> Self {
        match count {
            n if n >= 16 => Tier::Initials,
            n if n >= 8 => Tier::Pairs,
            n if n >= 4 => Tier::Quads,
            _ => Tier::Full,
        }
    }

    /// Number of characters kept from each syllable, `None` keeps all of them.
    pub fn width(self) -> Option<usize> {
        match self {
            Tier::Initials => Some(1),
            Tier::Pairs => Some(2),
            Tier::Quads => Some(4),
            Tier::Full => None,
        }
    }
}

/// Generates lookup keys from text using a [`Romanizer`].
#[derive(Debug, Clone, Default)]
pub struct KeyGenerator<R = PinyinRomanizer> {
    romanizer: R,
}

impl<R: Romanizer> KeyGenerator<R> {
    pub fn new(romanizer: R) -> Self {
        Self { romanizer }
    }

    pub fn generate(&self, text: &str) -> String {
        let syllables = self.romanizer.romanize(text);
        let tier = Tier::for_count(syllables.len());

        match tier.width() {
            Some(width) => syllables
                .iter()
                .flat_map(|syllable| syllable.chars().take(width))
                .collect(),
            None => syllables.concat(),
        }
    }
}

/// Generate a key with the default pinyin romanizer.
///
/// ```
/// use cn2i18n::rewrite::key::generate_key;
///
/// assert_eq!(generate_key("你好"), "nihao");
/// assert_eq!(generate_key(""), "");
/// ```
pub fn generate_key(text: &str) -> String {
    KeyGenerator::new(PinyinRomanizer).generate(text)
}
