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

//! Validation and repair of sequences against named sequence types.
//!
//! A sequence is checked in place: gap characters are normalized or
//! stripped, the coarse kind is verified, illegal characters are detected
//! and, where the type tolerates ambiguity, replaced by `N` or `X`. Finally
//! the type's character conversions are applied.
//!
//! The buffer is modified as validation proceeds and is not restored when a
//! sequence is rejected, so callers should only rely on its contents after
//! acceptance. Set [`OptionSeqType::Transactional`] to validate a private
//! copy instead.

/* -------------------------------------------------------------------------- */

use std::fmt;

use regex::{NoExpand, Regex};

use crate::error::Error;
use crate::infologger::Logger;
use crate::seqtype_gap::{normalize_gaps, strip_gaps, trim_stop, CANONICAL_GAP};
use crate::seqtype_pattern::{first_illegal, patterns};
use crate::seqtype_table::{find_by_name, SeqKind, SeqType};

/* -------------------------------------------------------------------------- */

/// Why a sequence was not accepted.
#[derive(Clone, Debug, PartialEq)]
pub enum Rejection {
    BadCharacter {
        seq_type   : &'static str,
        description: &'static str,
        ch         : char,
        pos        : usize,
    },
    KindMismatch {
        seq_type   : &'static str,
        description: &'static str,
        expected   : SeqKind,
    },
}

/* -------------------------------------------------------------------------- */

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::BadCharacter { description, ch, pos, .. } => {
                write!(f, "sequence must be {}: found bad character `{}` at position {}", description, ch, pos)
            }
            Rejection::KindMismatch { description, expected, .. } => {
                write!(f, "sequence must be {}: sequence does not look like {}", description, expected.label())
            }
        }
    }
}

/* -------------------------------------------------------------------------- */

#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/* -------------------------------------------------------------------------- */

/// `Input` validates user supplied sequences: the coarse kind is checked and
/// rejections are reported to the logger. `Silent` skips both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Check {
    Input,
    Silent,
}

/* -------------------------------------------------------------------------- */

pub enum OptionSeqType {
    Logger(Logger),
    GapChar(char),
    Transactional(bool),
}

/* -------------------------------------------------------------------------- */

impl fmt::Display for OptionSeqType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionSeqType::Logger(_)        => write!(f, "Logger option"),
            OptionSeqType::GapChar(c)       => write!(f, "Gap Char: {}", c),
            OptionSeqType::Transactional(b) => write!(f, "Transactional: {}", b),
        }
    }
}

/* -------------------------------------------------------------------------- */

pub struct SeqTypeConfig {
    pub logger       : Logger,
    pub gap_char     : char,
    pub transactional: bool,
}

/* -------------------------------------------------------------------------- */

impl Default for SeqTypeConfig {
    fn default() -> Self {
        SeqTypeConfig {
            logger       : Logger::new_void(),
            gap_char     : CANONICAL_GAP,
            transactional: false,
        }
    }
}

/* -------------------------------------------------------------------------- */

impl SeqTypeConfig {
    pub fn insert_option(&mut self, option: OptionSeqType) {
        match option {
            OptionSeqType::Logger(logger) => {
                self.logger = logger;
            }
            OptionSeqType::GapChar(c) => {
                self.gap_char = c;
            }
            OptionSeqType::Transactional(b) => {
                self.transactional = b;
            }
        }
    }
}

/* -------------------------------------------------------------------------- */

#[derive(Default)]
pub struct SeqTypeChecker {
    config: SeqTypeConfig,
}

/* -------------------------------------------------------------------------- */

impl SeqTypeChecker {

    pub fn new(options: Vec<OptionSeqType>) -> Self {
        let mut config = SeqTypeConfig::default();
        for option in options {
            config.insert_option(option);
        }
        SeqTypeChecker { config }
    }

    pub fn config(&self) -> &SeqTypeConfig {
        &self.config
    }

    /// Validate `seq` against the sequence type `type_name`.
    ///
    /// An empty type name accepts anything after normalizing gaps. An
    /// unknown type name is an error, a sequence that does not fit the type
    /// is a [`Verdict::Rejected`].
    pub fn check_and_normalize(&self, seq: &mut String, type_name: &str, check: Check) -> Result<Verdict, Error> {
        if type_name.is_empty() {
            normalize_gaps(seq, self.config.gap_char, None, 0);
            return Ok(Verdict::Accepted);
        }
        let seq_type = find_by_name(type_name)
            .ok_or_else(|| Error::UnknownSeqType(type_name.to_string()))?;

        let verdict = if self.config.transactional {
            let mut copy = seq.clone();
            let verdict  = self.run(&mut copy, seq_type, check)?;
            if verdict.is_accepted() {
                *seq = copy;
            }
            verdict
        } else {
            self.run(seq, seq_type, check)?
        };

        if let (Verdict::Rejected(rejection), Check::Input) = (&verdict, check) {
            // a failing diagnostics sink does not change the verdict
            let _ = self.config.logger.log(&rejection.to_string());
        }
        Ok(verdict)
    }

    pub fn check_input(&self, seq: &mut String, type_name: &str) -> Result<Verdict, Error> {
        self.check_and_normalize(seq, type_name, Check::Input)
    }

    pub fn test_only(&self, seq: &mut String, type_name: &str) -> Result<bool, Error> {
        self.check_and_normalize(seq, type_name, Check::Silent)
            .map(|verdict| verdict.is_accepted())
    }

    fn run(&self, seq: &mut String, seq_type: &'static SeqType, check: Check) -> Result<Verdict, Error> {
        if seq_type.gaps {
            normalize_gaps(seq, self.config.gap_char, None, 0);
        } else {
            strip_gaps(seq);
        }

        if check == Check::Input && !seq_type.kind.agrees_with(seq) {
            return Ok(Verdict::Rejected(Rejection::KindMismatch {
                seq_type   : seq_type.name,
                description: seq_type.description,
                expected   : seq_type.kind,
            }));
        }

        let re = patterns().compile(seq_type.charset.chars())?;

        if first_illegal(&re, seq).is_some() {
            repair(seq, seq_type, &re);
            if let Some((pos, ch)) = first_illegal(&re, seq) {
                return Ok(Verdict::Rejected(Rejection::BadCharacter {
                    seq_type   : seq_type.name,
                    description: seq_type.description,
                    ch,
                    pos,
                }));
            }
        }
        seq_type.convert(seq);

        Ok(Verdict::Accepted)
    }

}

/* -------------------------------------------------------------------------- */

fn repair(seq: &mut String, seq_type: &SeqType, re: &Regex) {
    if !seq_type.gaps {
        strip_gaps(seq);
    }
    if seq_type.name == "pureprotein" {
        trim_stop(seq);
    }
    if seq_type.ambiguity {
        if seq_type.name == "protein" {
            trim_stop(seq);
        }
        let fix = seq_type.kind.repair_char(seq).to_string();
        let fixed = re.replace_all(seq.as_str(), NoExpand(&fix)).into_owned();
        *seq = fixed;
    }
    // trimming twice is harmless and keeps `pureprotein` free of a final stop
    if seq_type.name == "pureprotein" {
        trim_stop(seq);
    }
}

/* -------------------------------------------------------------------------- */

/// Validate user input with a default checker.
pub fn check_input(seq: &mut String, type_name: &str) -> Result<Verdict, Error> {
    SeqTypeChecker::default().check_input(seq, type_name)
}

/// Silent validation with a default checker.
pub fn test_only(seq: &mut String, type_name: &str) -> Result<bool, Error> {
    SeqTypeChecker::default().test_only(seq, type_name)
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {

    use super::*;

    fn checked(s: &str, type_name: &str) -> (Verdict, String) {
        let mut seq = s.to_string();
        let verdict = check_input(&mut seq, type_name).unwrap();
        (verdict, seq)
    }

    #[test]
    fn test_empty_type_name() {
        let (verdict, seq) = checked("AC.GT~ x", "");
        assert_eq!(verdict, Verdict::Accepted);
        assert_eq!(seq, "AC-GT--x");
    }

    #[test]
    fn test_protein_repair() {
        let (verdict, seq) = checked("MKV*LDR*", "protein");
        assert_eq!(verdict, Verdict::Accepted);
        assert_eq!(seq, "MKVXLDR");

        let (verdict, seq) = checked("mkv1ldr", "gapprotein");
        assert_eq!(verdict, Verdict::Accepted);
        assert_eq!(seq, "mkvXldr");
    }

    #[test]
    fn test_any_repair() {
        let (verdict, seq) = checked("ACGTACGTACGT1ACGT", "any");
        assert_eq!(verdict, Verdict::Accepted);
        assert_eq!(seq, "ACGTACGTACGTNACGT");

        let (verdict, seq) = checked("MKVL1DR", "any");
        assert_eq!(verdict, Verdict::Accepted);
        assert_eq!(seq, "MKVLXDR");
    }

    #[test]
    fn test_pureprotein_trailing_stop() {
        let (verdict, seq) = checked("MKVLDR*", "pureprotein");
        assert_eq!(verdict, Verdict::Accepted);
        assert_eq!(seq, "MKVLDR");
    }

    #[test]
    fn test_gaps_stripped() {
        let (verdict, seq) = checked("AC-GT..AC", "dna");
        assert_eq!(verdict, Verdict::Accepted);
        assert_eq!(seq, "ACGTAC");
    }

    #[test]
    fn test_kind_mismatch() {
        let (verdict, _) = checked("MKVLDRLLEE", "dna");
        match verdict {
            Verdict::Rejected(Rejection::KindMismatch { seq_type, expected, .. }) => {
                assert_eq!(seq_type, "dna");
                assert_eq!(expected, SeqKind::Nucleotide);
            }
            v => panic!("unexpected verdict {:?}", v),
        }
        // the silent variant does not check the kind and repairs instead
        let mut seq = String::from("MKVLDRLLEE");
        assert!(test_only(&mut seq, "dna").unwrap());
        assert_eq!(seq, "MKVNDRNNNN");
    }

    #[test]
    fn test_transactional() {
        let checker = SeqTypeChecker::new(vec![OptionSeqType::Transactional(true)]);

        let mut seq = String::from("AC-GT*");
        let verdict = checker.check_input(&mut seq, "puredna").unwrap();
        assert!(!verdict.is_accepted());
        assert_eq!(seq, "AC-GT*");

        let mut seq = String::from("AC-GU");
        assert!(checker.check_input(&mut seq, "puredna").unwrap().is_accepted());
        assert_eq!(seq, "ACGT");
    }

    #[test]
    fn test_gap_char_option() {
        let checker = SeqTypeChecker::new(vec![OptionSeqType::GapChar('.')]);
        let mut seq = String::from("AC-G T");
        assert!(checker.check_input(&mut seq, "gapdna").unwrap().is_accepted());
        assert_eq!(seq, "AC.G.T");
        assert_eq!(format!("{}", OptionSeqType::GapChar('.')), "Gap Char: .");
    }
}
