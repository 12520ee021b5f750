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

use crate::seqtype_charset::{NUCLEOTIDE_AMBIGUITY, NUCLEOTIDE_PURE, PROTEIN_AMBIGUITY, PROTEIN_PURE, PROTEIN_STOP, PHYLO_QUERY};
use crate::seqtype_gap::{is_gap_like, STOP};

/* -------------------------------------------------------------------------- */

const NUCLEOTIDE_FRACTION : f64 = 0.9;
const PROTEIN_FRACTION    : f64 = 0.5;

/* -------------------------------------------------------------------------- */

fn count_matching<F: Fn(char) -> bool>(seq: &str, skip: F, alphabet: &[&str]) -> (usize, usize) {
    let mut n     = 0;
    let mut n_hit = 0;
    for c in seq.chars().filter(|&c| !skip(c)) {
        n += 1;
        let u = c.to_ascii_uppercase();
        if alphabet.iter().any(|a| a.contains(u)) {
            n_hit += 1;
        }
    }
    (n, n_hit)
}

/* -------------------------------------------------------------------------- */

/// At least 90% of the residues (gaps, stops and queries excluded) are
/// nucleotide bases or ambiguity codes. Empty sequences qualify.
pub fn looks_like_nucleotide(seq: &str) -> bool {
    let skip = |c: char| is_gap_like(c) || c == STOP || PHYLO_QUERY.contains(c);
    let (n, n_nuc) = count_matching(seq, skip, &[NUCLEOTIDE_PURE, NUCLEOTIDE_AMBIGUITY]);
    if n == 0 {
        return true;
    }
    n_nuc as f64 >= NUCLEOTIDE_FRACTION * n as f64
}

/// Not nucleotide-like and more than half of the non-gap characters are
/// amino acid codes or stops. Empty sequences qualify.
pub fn looks_like_protein(seq: &str) -> bool {
    let skip = |c: char| is_gap_like(c);
    let (n, n_prot) = count_matching(seq, skip, &[PROTEIN_PURE, PROTEIN_AMBIGUITY, PROTEIN_STOP]);
    if n == 0 {
        return true;
    }
    !looks_like_nucleotide(seq) && n_prot as f64 > PROTEIN_FRACTION * n as f64
}

/* -------------------------------------------------------------------------- */
