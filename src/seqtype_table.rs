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

use serde::Serialize;

use crate::seqtype_charset::CharSet;
use crate::seqtype_classify::{looks_like_nucleotide, looks_like_protein};

/* -------------------------------------------------------------------------- */

/// Coarse category of a sequence type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SeqKind {
    Any,
    Nucleotide,
    Protein,
}

/* -------------------------------------------------------------------------- */

impl SeqKind {

    pub fn label(self) -> &'static str {
        match self {
            SeqKind::Any        => "",
            SeqKind::Nucleotide => "nucleotide",
            SeqKind::Protein    => "protein",
        }
    }

    /// Whether `seq` independently classifies as this kind.
    pub fn agrees_with(self, seq: &str) -> bool {
        match self {
            SeqKind::Any        => true,
            SeqKind::Nucleotide => looks_like_nucleotide(seq),
            SeqKind::Protein    => looks_like_protein(seq),
        }
    }

    /// Replacement for characters outside the allowed alphabet.
    pub fn repair_char(self, seq: &str) -> char {
        match self {
            SeqKind::Nucleotide => 'N',
            SeqKind::Protein    => 'X',
            SeqKind::Any        => {
                if looks_like_nucleotide(seq) {
                    'N'
                } else {
                    'X'
                }
            }
        }
    }

}

/* -------------------------------------------------------------------------- */

/// A named sequence type.
#[derive(Clone, Debug, Serialize)]
pub struct SeqType {
    pub name       : &'static str,
    pub gaps       : bool,
    pub ambiguity  : bool,
    pub kind       : SeqKind,
    /// Characters replaced after validation, position by position with `convert_to`.
    pub convert_from: &'static str,
    pub convert_to  : &'static str,
    pub charset    : CharSet,
    pub description: &'static str,
}

/* -------------------------------------------------------------------------- */

const fn seq_type(
    name        : &'static str,
    gaps        : bool,
    ambiguity   : bool,
    kind        : SeqKind,
    convert_from: &'static str,
    convert_to  : &'static str,
    charset     : CharSet,
    description : &'static str,
) -> SeqType {
    SeqType { name, gaps, ambiguity, kind, convert_from, convert_to, charset, description }
}

use SeqKind::{Any, Nucleotide, Protein};

static SEQ_TYPES: [SeqType; 24] = [
    seq_type("any",                 false, true,  Any,        "",      "",      CharSet::AnyGap,       "any valid sequence"),
    seq_type("gapany",              true,  true,  Any,        "",      "",      CharSet::AnyGap,       "any valid sequence with gaps"),
    seq_type("gapanyphylo",         true,  true,  Any,        "",      "",      CharSet::AnyGapPhylo,  "any valid sequence with gaps and queries"),
    seq_type("dna",                 false, true,  Nucleotide, "?XxUu", "NNnTt", CharSet::NucGap,       "DNA sequence"),
    seq_type("puredna",             false, false, Nucleotide, "Uu",    "Tt",    CharSet::NucPure,      "DNA sequence, bases ACGT only"),
    seq_type("gapdna",              true,  true,  Nucleotide, "?XxUu", "NNnTt", CharSet::NucGap,       "DNA sequence with gaps"),
    seq_type("gapdnaphylo",         true,  true,  Nucleotide, "Uu",    "Tt",    CharSet::NucGapPhylo,  "DNA sequence with gaps and queries"),
    seq_type("rna",                 false, true,  Nucleotide, "?XxTt", "NNnUu", CharSet::NucGap,       "RNA sequence"),
    seq_type("purerna",             false, false, Nucleotide, "Tt",    "Uu",    CharSet::NucPure,      "RNA sequence, bases ACGU only"),
    seq_type("gaprna",              true,  true,  Nucleotide, "?XxTt", "NNnUu", CharSet::NucGap,       "RNA sequence with gaps"),
    seq_type("gaprnaphylo",         true,  true,  Nucleotide, "Tt",    "Uu",    CharSet::NucGapPhylo,  "RNA sequence with gaps and queries"),
    seq_type("nucleotide",          false, true,  Nucleotide, "?Xx",   "NNn",   CharSet::NucGap,       "nucleotide sequence"),
    seq_type("purenucleotide",      false, false, Nucleotide, "",      "",      CharSet::NucPure,      "nucleotide sequence, bases ACGTU only"),
    seq_type("gapnucleotide",       true,  true,  Nucleotide, "?Xx",   "NNn",   CharSet::NucGap,       "nucleotide sequence with gaps"),
    seq_type("gapnucleotidephylo",  true,  true,  Nucleotide, "",      "",      CharSet::NucGapPhylo,  "nucleotide sequence with gaps and queries"),
    seq_type("gapnucleotidesimple", true,  true,  Nucleotide,
             "?XxBbDdHhKkMmRrSsVvWwYy",
             "NNnNnNnNnNnNnNnNnNnNnNn",                                         CharSet::NucGap,       "nucleotide sequence with gaps, ambiguity codes as N"),
    seq_type("protein",             false, true,  Protein,    "",      "",      CharSet::ProtGap,      "protein sequence"),
    seq_type("pureprotein",         false, false, Protein,    "",      "",      CharSet::ProtPure,     "protein sequence without BJOUXZ or stops"),
    seq_type("stopprotein",         false, true,  Protein,    "",      "",      CharSet::ProtStopGap,  "protein sequence with possible stops"),
    seq_type("gapprotein",          true,  true,  Protein,    "",      "",      CharSet::ProtGap,      "protein sequence with gaps"),
    seq_type("gapstopprotein",      true,  true,  Protein,    "",      "",      CharSet::ProtStopGap,  "protein sequence with gaps and possible stops"),
    seq_type("gapproteinphylo",     true,  true,  Protein,    "",      "",      CharSet::ProtGapPhylo, "protein sequence with gaps, stops and queries"),
    seq_type("proteinstandard",     false, true,  Protein,    "BbJjOoUuZz", "XxXxXxXxXx", CharSet::ProtGap, "protein sequence, non-standard codes as X"),
    seq_type("gapproteinstandard",  true,  true,  Protein,    "BbJjOoUuZz", "XxXxXxXxXx", CharSet::ProtGap, "protein sequence with gaps, non-standard codes as X"),
];

/* -------------------------------------------------------------------------- */

impl SeqType {

    /// Kind label and whether gaps are allowed.
    pub fn summary(&self) -> (&'static str, bool) {
        (self.kind.label(), self.gaps)
    }

    /// Apply the `convert_from` to `convert_to` character mapping.
    pub fn convert(&self, seq: &mut String) {
        if self.convert_from.is_empty() {
            return;
        }
        *seq = seq.chars().map(|c| {
            match self.convert_from.chars().position(|f| f == c) {
                Some(i) => self.convert_to.chars().nth(i).unwrap_or(c),
                None    => c,
            }
        }).collect();
    }

}

/* -------------------------------------------------------------------------- */

impl fmt::Display for SeqType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            SeqKind::Any => "any",
            kind         => kind.label(),
        };
        write!(f, "{:<20} {:<5} {:<5} {:<10} {:<24} {:<24} {}",
            self.name,
            self.gaps,
            self.ambiguity,
            kind,
            if self.convert_from.is_empty() { "-" } else { self.convert_from },
            if self.convert_to  .is_empty() { "-" } else { self.convert_to   },
            self.description)
    }
}

/* -------------------------------------------------------------------------- */

/// Look up a sequence type by name, ignoring case. First match wins.
pub fn find_by_name(name: &str) -> Option<&'static SeqType> {
    SEQ_TYPES.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

pub fn is_protein_compatible(name: &str) -> bool {
    find_by_name(name).map_or(false, |t| t.kind == SeqKind::Protein)
}

pub fn is_nucleotide_compatible(name: &str) -> bool {
    find_by_name(name).map_or(false, |t| t.kind == SeqKind::Nucleotide)
}

pub fn is_any_compatible(name: &str) -> bool {
    find_by_name(name).map_or(false, |t| t.kind == SeqKind::Any)
}

pub fn summarize(name: &str) -> Option<(&'static str, bool)> {
    find_by_name(name).map(SeqType::summary)
}

/// All sequence types in table order.
pub fn describe_all() -> &'static [SeqType] {
    &SEQ_TYPES
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {

    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_unique_names() {
        let mut names = HashSet::new();
        for t in describe_all() {
            assert!(!t.name.is_empty());
            assert_eq!(t.name, t.name.to_ascii_lowercase());
            assert!(names.insert(t.name), "duplicate type `{}`", t.name);
            assert_eq!(t.convert_from.chars().count(), t.convert_to.chars().count(), "{}", t.name);
        }
    }

    #[test]
    fn test_find_by_name() {
        assert_eq!(find_by_name("dna").map(|t| t.name), Some("dna"));
        assert_eq!(find_by_name("GapProtein").map(|t| t.name), Some("gapprotein"));
        assert!(find_by_name("dn").is_none());
        assert!(find_by_name("").is_none());
    }

    #[test]
    fn test_compatible() {
        assert!( is_protein_compatible("stopprotein"));
        assert!(!is_protein_compatible("dna"));
        assert!( is_nucleotide_compatible("PURERNA"));
        assert!( is_any_compatible("gapany"));
        for f in [is_protein_compatible, is_nucleotide_compatible, is_any_compatible] {
            assert!(!f("bogus-type"));
        }
    }

    #[test]
    fn test_summarize() {
        assert_eq!(summarize("gapdna"),  Some(("nucleotide", true)));
        assert_eq!(summarize("protein"), Some(("protein", false)));
        assert_eq!(summarize("any"),     Some(("", false)));
        assert_eq!(summarize("bogus"),   None);
    }

    #[test]
    fn test_convert() {
        let mut seq = String::from("acgtACGTxxNnUu?");
        find_by_name("dna").unwrap().convert(&mut seq);
        assert_eq!(seq, "acgtACGTnnNnTtN");
    }
}
