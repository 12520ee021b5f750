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

use std::collections::HashSet;
use std::path::Path;

/* -------------------------------------------------------------------------- */

/// Removes duplicate characters from a string, preserving the order of first occurrences.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(remove_duplicate_chars("ACGTacgtA"), "ACGTacgt");
/// assert_eq!(remove_duplicate_chars("--.-"), "-.");
/// ```
pub fn remove_duplicate_chars(s: &str) -> String {
    let mut m: HashSet<char> = HashSet::new();
    let mut r = String::with_capacity(s.len());
    for c in s.chars() {
        if m.insert(c) {
            r.push(c);
        }
    }
    r
}

/* -------------------------------------------------------------------------- */

/// Splits a line of a definition file into whitespace separated fields.
///
/// Blank lines and comment lines (starting with `#` or `!`) yield `None`,
/// so callers can skip them before looking at the fields.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(definition_fields("N 4 ACGT Any"), Some(vec!["N", "4", "ACGT", "Any"]));
/// assert_eq!(definition_fields("# comment"), None);
/// assert_eq!(definition_fields("   "), None);
/// ```
pub fn definition_fields(line: &str) -> Option<Vec<&str>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
        return None;
    }
    Some(trimmed.split_whitespace().collect())
}

/* -------------------------------------------------------------------------- */

/// Checks if a file has a `.gz` extension, typically indicating a gzip-compressed file.
///
/// # Examples
///
/// ```rust,ignore
/// let result = is_gzip("Ebases.iub.gz");
/// assert!(result);
///
/// let result = is_gzip("Ebases.iub");
/// assert!(!result);
/// ```
pub fn is_gzip<P: AsRef<Path>>(filename: P) -> bool {
    filename.as_ref().extension().map_or(false, |ext| ext == "gz")
}

/* -------------------------------------------------------------------------- */
