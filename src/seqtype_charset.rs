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

use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

use crate::utility::remove_duplicate_chars;

/* Base alphabets
 * -------------------------------------------------------------------------- */

pub const PROTEIN_PURE         : &str = "ACDEFGHIKLMNPQRSTVWY";
pub const PROTEIN_AMBIGUITY    : &str = "BJOUXZ";
pub const PROTEIN_STOP         : &str = "*";
pub const NUCLEOTIDE_PURE      : &str = "ACGTU";
pub const NUCLEOTIDE_AMBIGUITY : &str = "BDHKMNRSVWXY";
pub const GAP                  : &str = ".~-";
pub const PHYLO_QUERY          : &str = "?";

/* -------------------------------------------------------------------------- */

/// Closed set of alphabets a sequence type may accept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CharSet {
    AnyGap,
    AnyGapPhylo,
    NucPure,
    NucGap,
    NucGapPhylo,
    ProtPure,
    ProtGap,
    ProtStopGap,
    ProtGapPhylo,
}

/* -------------------------------------------------------------------------- */

const N_CHARSETS: usize = 9;

static CHARSET_CACHE: [OnceLock<String>; N_CHARSETS] = [
    OnceLock::new(), OnceLock::new(), OnceLock::new(),
    OnceLock::new(), OnceLock::new(), OnceLock::new(),
    OnceLock::new(), OnceLock::new(), OnceLock::new(),
];

/* -------------------------------------------------------------------------- */

impl CharSet {

    pub const ALL: [CharSet; N_CHARSETS] = [
        CharSet::AnyGap,
        CharSet::AnyGapPhylo,
        CharSet::NucPure,
        CharSet::NucGap,
        CharSet::NucGapPhylo,
        CharSet::ProtPure,
        CharSet::ProtGap,
        CharSet::ProtStopGap,
        CharSet::ProtGapPhylo,
    ];

    fn parts(self) -> &'static [&'static str] {
        match self {
            CharSet::AnyGap       => &[PROTEIN_PURE, PROTEIN_AMBIGUITY, PROTEIN_STOP, NUCLEOTIDE_PURE, NUCLEOTIDE_AMBIGUITY, GAP],
            CharSet::AnyGapPhylo  => &[PROTEIN_PURE, PROTEIN_AMBIGUITY, PROTEIN_STOP, NUCLEOTIDE_PURE, NUCLEOTIDE_AMBIGUITY, GAP, PHYLO_QUERY],
            CharSet::NucPure      => &[NUCLEOTIDE_PURE],
            CharSet::NucGap       => &[NUCLEOTIDE_PURE, NUCLEOTIDE_AMBIGUITY, GAP],
            CharSet::NucGapPhylo  => &[NUCLEOTIDE_PURE, NUCLEOTIDE_AMBIGUITY, GAP, PHYLO_QUERY],
            CharSet::ProtPure     => &[PROTEIN_PURE],
            CharSet::ProtGap      => &[PROTEIN_PURE, PROTEIN_AMBIGUITY, GAP],
            CharSet::ProtStopGap  => &[PROTEIN_PURE, PROTEIN_AMBIGUITY, PROTEIN_STOP, GAP],
            CharSet::ProtGapPhylo => &[PROTEIN_PURE, PROTEIN_AMBIGUITY, PROTEIN_STOP, GAP, PHYLO_QUERY],
        }
    }

    /// The literal characters of this alphabet, built on first use.
    ///
    /// Characters appear once, in the order of the base alphabets, so the
    /// value is stable and can serve as a cache key.
    pub fn chars(self) -> &'static str {
        CHARSET_CACHE[self as usize]
            .get_or_init(|| remove_duplicate_chars(&self.parts().concat()))
            .as_str()
    }

    pub fn contains(self, c: char) -> bool {
        let chars = self.chars();
        chars.contains(c) || (c.is_ascii_lowercase() && chars.contains(c.to_ascii_uppercase()))
    }

}

/* -------------------------------------------------------------------------- */

impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.chars())
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_charset_contents() {
        assert_eq!(CharSet::NucPure.chars(), "ACGTU");
        assert_eq!(CharSet::NucGap .chars(), "ACGTUBDHKMNRSVWXY.~-");
        assert_eq!(CharSet::ProtPure.chars(), PROTEIN_PURE);

        // all letters plus stop and gaps
        assert_eq!(CharSet::AnyGap.chars().len(), 26 + 1 + 3);
        assert!(CharSet::AnyGapPhylo.chars().ends_with('?'));
    }

    #[test]
    fn test_charset_memoized() {
        for set in CharSet::ALL {
            let a = set.chars();
            let b = set.chars();
            assert!(std::ptr::eq(a, b));
        }
    }

    #[test]
    fn test_charset_contains() {
        assert!( CharSet::NucGap.contains('a'));
        assert!( CharSet::NucGap.contains('-'));
        assert!(!CharSet::NucGap.contains('*'));
        assert!(!CharSet::NucGap.contains('e'));
        assert!( CharSet::ProtStopGap.contains('*'));
        assert!(!CharSet::ProtGap.contains('*'));
    }
}
