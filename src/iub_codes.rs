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

// Fixed code tables that do not depend on any definition file.

/* -------------------------------------------------------------------------- */

/// Symbols indexed by their binary base code (A=1, C=2, G=4, T=8).
pub const BINARY_CODES : &str = "XACMGRSVTWYHKDBN";

const COMPLEMENT_FROM : &str = "ACGTURYWSMKBDHVNXacgturywsmkbdhvnx";
const COMPLEMENT_TO   : &str = "TGCAAYRWSKMVHDBNXtgcaayrwskmvhdbnx";

/// Index value of characters outside `A-Z`.
pub const NON_ALPHA_INT : i32 = 27;

const PLACEHOLDER_TRIPLET : &str = "---";
const PLACEHOLDER_DOUBLET : &str = "--";

static AA_TRIPLETS: [&str; 26] = [
    "ALA", "---", "CYS", "ASP", "GLU", "PHE", "GLY", "HIS", "ILE", "---",
    "LYS", "LEU", "MET", "ASN", "---", "PRO", "GLN", "ARG", "SER", "THR",
    "---", "VAL", "TRP", "---", "TYR", "---",
];

// PDB deoxyribonucleotide residue names
static NUC_DOUBLETS: [&str; 26] = [
    "DA", "--", "DC", "--", "--", "--", "DG", "--", "DI", "--",
    "--", "--", "--", "DN", "--", "--", "--", "--", "--", "DT",
    "DU", "--", "--", "--", "--", "--",
];

/* -------------------------------------------------------------------------- */

/// Position of a letter in the alphabet (`A`/`a` is 0), or 27 for anything else.
pub fn alpha_to_int(c: char) -> i32 {
    if c.is_ascii_alphabetic() {
        (c.to_ascii_uppercase() as u8 - b'A') as i32
    } else {
        NON_ALPHA_INT
    }
}

fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}

/* -------------------------------------------------------------------------- */

/// Bit of an unambiguous base, `U` counts as `T`.
pub fn base_bit(c: char) -> u32 {
    match c {
        'A' | 'a' => 1,
        'C' | 'c' => 2,
        'G' | 'g' => 4,
        'T' | 't' | 'U' | 'u' => 8,
        _ => 0,
    }
}

/// Symbol for a binary base code. Values outside `0..=15` give `N`.
pub fn from_binary_code(code: i32) -> char {
    if (0..16).contains(&code) {
        BINARY_CODES.as_bytes()[code as usize] as char
    } else {
        'N'
    }
}

/* -------------------------------------------------------------------------- */

/// Complementary base, preserving case. Unknown symbols are returned unchanged.
pub fn complement(c: char) -> char {
    match COMPLEMENT_FROM.chars().position(|f| f == c) {
        Some(i) => COMPLEMENT_TO.as_bytes()[i] as char,
        None    => c,
    }
}

pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement).collect()
}

/* -------------------------------------------------------------------------- */

/// Three letter amino acid code of a one letter code.
pub fn to_triplet_name(c: char) -> Option<&'static str> {
    letter_index(c)
        .map(|i| AA_TRIPLETS[i])
        .filter(|&name| name != PLACEHOLDER_TRIPLET)
}

/// One letter code of a three letter amino acid code, ignoring case.
/// Callers wanting the traditional default use `.unwrap_or('X')`.
pub fn from_triplet_name(name: &str) -> Option<char> {
    if name.eq_ignore_ascii_case(PLACEHOLDER_TRIPLET) {
        return None;
    }
    AA_TRIPLETS.iter()
        .position(|t| t.eq_ignore_ascii_case(name))
        .map(|i| (b'A' + i as u8) as char)
}

/* -------------------------------------------------------------------------- */

/// Two letter PDB nucleotide name of a base.
pub fn to_doublet_name(c: char) -> Option<&'static str> {
    letter_index(c)
        .map(|i| NUC_DOUBLETS[i])
        .filter(|&name| name != PLACEHOLDER_DOUBLET)
}

/// Base of a two letter PDB nucleotide name. The unknown residue `UNK`
/// maps to `N`.
pub fn from_doublet_name(name: &str) -> Option<char> {
    if name.eq_ignore_ascii_case("UNK") {
        return Some('N');
    }
    if name.eq_ignore_ascii_case(PLACEHOLDER_DOUBLET) {
        return None;
    }
    NUC_DOUBLETS.iter()
        .position(|t| t.eq_ignore_ascii_case(name))
        .map(|i| (b'A' + i as u8) as char)
}

/* -------------------------------------------------------------------------- */
