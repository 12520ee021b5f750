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

//! IUB ambiguity code tables for bases and residues.
//!
//! A table is read from a definition file with lines of the form
//!
//! ```text
//! <code> <count> <expansion> <mnemonic>
//! ```
//!
//! where `expansion` lists the codes matched by `code`. From the expansions
//! a 32x32 matrix of match probabilities is derived: entry `[i][j]` is the
//! number of characters of the expansion of letter `i` that occur in the
//! expansion of letter `j`, divided by the length of the expansion of `j`.

/* -------------------------------------------------------------------------- */

use std::fmt;
use std::io::BufRead;
use std::path::Path;
use std::sync::{LazyLock, OnceLock};

use crate::datafile::{open_path, DataFileLocator, BASES_FILE, RESIDUES_FILE};
use crate::error::Error;
use crate::iub_codes::base_bit;
use crate::utility::definition_fields;

/* -------------------------------------------------------------------------- */

pub const MATRIX_SIZE : usize = 32;

pub type MatchMatrix = [[f32; MATRIX_SIZE]; MATRIX_SIZE];

/* -------------------------------------------------------------------------- */

#[derive(Clone, Debug, PartialEq)]
pub struct IubEntry {
    pub code     : char,
    pub expansion: String,
    pub mnemonic : String,
}

/* -------------------------------------------------------------------------- */

#[derive(Clone, Debug)]
pub struct IubTable {
    entries: Vec<Option<IubEntry>>,
    matrix : MatchMatrix,
}

/* -------------------------------------------------------------------------- */

impl IubTable {

    /// Parse a definition file. `name` is only used in error messages.
    pub fn read<R: BufRead>(reader: R, name: &str) -> Result<Self, Error> {
        let mut entries: Vec<Option<IubEntry>> = vec![None; 256];

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let fields = match definition_fields(&line) {
                Some(fields) => fields,
                None         => continue,
            };
            if fields.len() != 4 {
                return Err(Error::parse(name, i+1, format!("expected 4 fields, found {}", fields.len())));
            }
            let mut code_chars = fields[0].chars();
            let code = match (code_chars.next(), code_chars.next()) {
                (Some(c), None) if c.is_ascii() => c,
                _ => return Err(Error::parse(name, i+1, format!("invalid code `{}`", fields[0]))),
            };
            fields[1].parse::<usize>()
                .map_err(|e| Error::parse(name, i+1, format!("invalid count `{}`: {}", fields[1], e)))?;

            let entry = IubEntry {
                code,
                expansion: fields[2].to_ascii_uppercase(),
                mnemonic : fields[3].to_string(),
            };
            entries[code.to_ascii_lowercase() as usize] = Some(entry.clone());
            entries[code.to_ascii_uppercase() as usize] = Some(entry);
        }
        let matrix = match_matrix(&entries);

        Ok(IubTable { entries, matrix })
    }

    pub fn import<P: AsRef<Path>>(filename: P) -> Result<Self, Error> {
        let reader = open_path(filename.as_ref())?;
        IubTable::read(reader, &filename.as_ref().to_string_lossy())
    }

    pub fn load(locator: &DataFileLocator, name: &str) -> Result<Self, Error> {
        IubTable::read(locator.open(name)?, name)
    }

    pub fn entry(&self, c: char) -> Option<&IubEntry> {
        self.entries.get(c as usize).and_then(Option::as_ref)
    }

    /// Codes matched by `c`; empty for characters without an entry.
    pub fn expansion(&self, c: char) -> &str {
        self.entry(c).map_or("", |e| e.expansion.as_str())
    }

    pub fn mnemonic(&self, c: char) -> Option<&str> {
        self.entry(c).map(|e| e.mnemonic.as_str())
    }

    pub fn matrix(&self) -> &MatchMatrix {
        &self.matrix
    }

    /// Binary code of `c`, the union of the bits of its expansion
    /// (A=1, C=2, G=4, T/U=8). Zero for characters without an entry.
    pub fn to_binary_code(&self, c: char) -> u32 {
        self.expansion(c).chars().fold(0, |code, b| code | base_bit(b))
    }

    /// Match probability of two codes as given by [`crate::iub_codes::alpha_to_int`].
    /// Arguments are clamped to the matrix.
    pub fn compare_alpha(&self, a: i32, b: i32) -> f32 {
        let i = a.clamp(0, MATRIX_SIZE as i32 - 1) as usize;
        let j = b.clamp(0, MATRIX_SIZE as i32 - 1) as usize;
        self.matrix[i][j]
    }

    /// Coarser estimate working directly on the expansions of two
    /// characters: `1/|A| * 1/|B|` if they share any code, zero otherwise.
    pub fn compare_alpha_char(&self, a: char, b: char) -> f32 {
        let exp_a = self.expansion(a);
        let exp_b = self.expansion(b);
        if exp_a.chars().any(|c| exp_b.contains(c)) {
            1.0 / exp_a.len() as f32 * 1.0 / exp_b.len() as f32
        } else {
            0.0
        }
    }

}

/* -------------------------------------------------------------------------- */

fn letter_expansion(entries: &[Option<IubEntry>], i: usize) -> &str {
    entries[b'A' as usize + i].as_ref().map_or("", |e| e.expansion.as_str())
}

fn match_matrix(entries: &[Option<IubEntry>]) -> MatchMatrix {
    let mut matrix = [[0.0; MATRIX_SIZE]; MATRIX_SIZE];

    for i in 0..26 {
        let exp_i = letter_expansion(entries, i);
        for j in 0..26 {
            let exp_j = letter_expansion(entries, j);
            if exp_j.is_empty() {
                continue;
            }
            let n = exp_i.chars().filter(|&c| exp_j.contains(c)).count();
            matrix[i][j] = n as f32 / exp_j.len() as f32;
        }
    }
    matrix
}

/* -------------------------------------------------------------------------- */

impl fmt::Display for IubTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<6} {:<24} {}", "code", "expansion", "mnemonic")?;
        for entry in self.entries[b'A' as usize..=b'Z' as usize].iter().flatten() {
            writeln!(f, "{:<6} {:<24} {}", entry.code, entry.expansion, entry.mnemonic)?;
        }
        Ok(())
    }
}

/* -------------------------------------------------------------------------- */

/// Base and residue tables, each loaded on first access.
pub struct IubModel {
    locator : DataFileLocator,
    bases   : OnceLock<IubTable>,
    residues: OnceLock<IubTable>,
}

/* -------------------------------------------------------------------------- */

impl IubModel {

    pub fn new(locator: DataFileLocator) -> Self {
        IubModel {
            locator,
            bases   : OnceLock::new(),
            residues: OnceLock::new(),
        }
    }

    fn get<'a>(&self, cell: &'a OnceLock<IubTable>, name: &str) -> Result<&'a IubTable, Error> {
        if let Some(table) = cell.get() {
            return Ok(table);
        }
        let table = IubTable::load(&self.locator, name)?;
        Ok(cell.get_or_init(|| table))
    }

    pub fn bases(&self) -> Result<&IubTable, Error> {
        self.get(&self.bases, BASES_FILE)
    }

    pub fn residues(&self) -> Result<&IubTable, Error> {
        self.get(&self.residues, RESIDUES_FILE)
    }

}

/* -------------------------------------------------------------------------- */

static IUB: LazyLock<IubModel> = LazyLock::new(|| IubModel::new(DataFileLocator::new()));

/// Process-wide model using the default data file locations.
pub fn iub() -> &'static IubModel {
    &IUB
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {

    use std::io::Cursor;

    use approx::assert_relative_eq;

    use super::*;

    const TABLE: &str = "# test table\n\nA 1 A Adenine\nC 1 C Cytosine\nG 1 G Guanine\nT 1 T Thymine\nR 2 AG puRine\nN 4 ACGT aNy\n";

    #[test]
    fn test_read() {
        let table = IubTable::read(Cursor::new(TABLE), "test").unwrap();

        assert_eq!(table.expansion('n'), "ACGT");
        assert_eq!(table.entry('r'), table.entry('R'));
        assert_eq!(table.mnemonic('a'), Some("Adenine"));
        assert_eq!(table.expansion('Q'), "");
    }

    #[test]
    fn test_matrix() {
        let table = IubTable::read(Cursor::new(TABLE), "test").unwrap();
        let a = 0;
        let g = 6;
        let n = 13;
        let r = 17;

        assert_relative_eq!(table.compare_alpha(a, a), 1.0);
        assert_relative_eq!(table.compare_alpha(a, n), 0.25);
        assert_relative_eq!(table.compare_alpha(n, a), 1.0);
        assert_relative_eq!(table.compare_alpha(g, r), 0.5);
        assert_relative_eq!(table.compare_alpha(r, n), 0.5);
        // no entry for Q
        assert_relative_eq!(table.compare_alpha(16, 16), 0.0);
    }

    #[test]
    fn test_parse_errors() {
        match IubTable::read(Cursor::new("A 1 A\n"), "short") {
            Err(Error::Parse { file, line, .. }) => {
                assert_eq!(file, "short");
                assert_eq!(line, 1);
            }
            _ => panic!("expected parse error"),
        }
        assert!(IubTable::read(Cursor::new("A one A Adenine\n"), "count").is_err());
        assert!(IubTable::read(Cursor::new("AB 1 A Adenine\n"), "code").is_err());
    }
}
