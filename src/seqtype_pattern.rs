// Copyright (C) 2024 Philipp Benner
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the “Software”), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

/* -------------------------------------------------------------------------- */

use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use regex::Regex;

use crate::error::Error;

/* -------------------------------------------------------------------------- */

/// Cache of "first illegal character" matchers, keyed by the literal
/// character set they were built from.
#[derive(Default)]
pub struct PatternCache {
    patterns: RwLock<HashMap<String, Regex>>,
}

/* -------------------------------------------------------------------------- */

static PATTERNS: LazyLock<PatternCache> = LazyLock::new(PatternCache::default);

/// Process-wide pattern cache.
pub fn patterns() -> &'static PatternCache {
    &PATTERNS
}

/* -------------------------------------------------------------------------- */

/// Regular expression matching any character not in `charset`. Letters
/// match case-insensitively, everything else exactly.
pub fn illegal_char_regex(charset: &str) -> String {
    if charset.is_empty() {
        return String::from("(?s).");
    }
    let mut class = String::from("[^");
    for c in charset.chars() {
        class.push_str(&regex::escape(&c.to_string()));
        if c.is_ascii_alphabetic() {
            let lower = c.to_ascii_lowercase();
            if lower != c && !charset.contains(lower) {
                class.push(lower);
            }
        }
    }
    class.push(']');
    class
}

/* -------------------------------------------------------------------------- */

impl PatternCache {

    /// Matcher for `charset`, compiled on first request.
    pub fn compile(&self, charset: &str) -> Result<Regex, Error> {
        if let Ok(map) = self.patterns.read() {
            if let Some(re) = map.get(charset) {
                return Ok(re.clone());
            }
        }
        let re = Regex::new(&illegal_char_regex(charset))
            .map_err(|e| Error::Generic(format!("compiling pattern for `{}` failed: {}", charset, e)))?;

        if let Ok(mut map) = self.patterns.write() {
            map.entry(charset.to_string()).or_insert_with(|| re.clone());
        }
        Ok(re)
    }

    pub fn len(&self) -> usize {
        self.patterns.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all compiled matchers.
    pub fn clear(&self) {
        if let Ok(mut map) = self.patterns.write() {
            map.clear();
        }
    }

}

/* -------------------------------------------------------------------------- */

/// First character of `seq` not accepted by `re`, with its character position.
pub fn first_illegal(re: &Regex, seq: &str) -> Option<(usize, char)> {
    let m = re.find(seq)?;
    let c = seq[m.start()..].chars().next()?;
    Some((seq[..m.start()].chars().count(), c))
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_illegal_char_regex() {
        assert_eq!(illegal_char_regex("AC-"), r"[^AaCc\-]");
        assert_eq!(illegal_char_regex("Aa"), "[^Aa]");
    }

    #[test]
    fn test_first_illegal() {
        let cache = PatternCache::default();
        let re = cache.compile("ACGT-").unwrap();

        assert_eq!(first_illegal(&re, ""), None);
        assert_eq!(first_illegal(&re, "acgtACGT--"), None);
        assert_eq!(first_illegal(&re, "acgXtE"), Some((3, 'X')));
        assert_eq!(first_illegal(&re, "AC.G"), Some((2, '.')));
        assert_eq!(first_illegal(&re, "AC\nG"), Some((2, '\n')));
    }

    #[test]
    fn test_cache() {
        let cache = PatternCache::default();
        assert!(cache.is_empty());

        let a = cache.compile("ACGT").unwrap();
        let b = cache.compile("ACGT").unwrap();
        let _ = cache.compile("ACGU").unwrap();

        assert_eq!(a.as_str(), b.as_str());
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());

        // recompilation behaves identically
        let c = cache.compile("ACGT").unwrap();
        assert_eq!(first_illegal(&a, "ACGTN"), first_illegal(&c, "ACGTN"));
    }
}
