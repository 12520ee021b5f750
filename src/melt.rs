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
use std::io::BufRead;
use std::ops::{Add, Mul};
use std::path::Path;

use crate::datafile::{open_path, DataFileLocator, MELT_FILE};
use crate::error::Error;
use crate::iub::IubTable;
use crate::iub_codes::alpha_to_int;
use crate::utility::definition_fields;

/* -------------------------------------------------------------------------- */

const BASES : [char; 4] = ['A', 'C', 'G', 'T'];

// cal/(K mol)
const GAS_CONSTANT     : f64 = 1.987;
const INITIAL_ENTROPY  : f64 = -10.8;
const KELVIN           : f64 = 273.15;

/* -------------------------------------------------------------------------- */

/// Nearest-neighbour thermodynamic values of a dinucleotide step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeltParams {
    pub enthalpy: f64,
    pub entropy : f64,
    pub energy  : f64,
}

/* -------------------------------------------------------------------------- */

impl Add for MeltParams {
    type Output = MeltParams;
    fn add(self, other: MeltParams) -> MeltParams {
        MeltParams {
            enthalpy: self.enthalpy + other.enthalpy,
            entropy : self.entropy  + other.entropy,
            energy  : self.energy   + other.energy,
        }
    }
}

impl Mul<f64> for MeltParams {
    type Output = MeltParams;
    fn mul(self, w: f64) -> MeltParams {
        MeltParams {
            enthalpy: self.enthalpy * w,
            entropy : self.entropy  * w,
            energy  : self.energy   * w,
        }
    }
}

/* -------------------------------------------------------------------------- */

impl fmt::Display for MeltParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enthalpy={:.2} entropy={:.2} energy={:.2}", self.enthalpy, self.entropy, self.energy)
    }
}

/* -------------------------------------------------------------------------- */

/// Parameters for all 16 dinucleotides.
#[derive(Clone, Debug)]
pub struct MeltTable {
    params: [[MeltParams; 4]; 4],
}

/* -------------------------------------------------------------------------- */

fn base_index(c: char) -> Option<usize> {
    match c.to_ascii_uppercase() {
        'A'       => Some(0),
        'C'       => Some(1),
        'G'       => Some(2),
        'T' | 'U' => Some(3),
        _         => None,
    }
}

fn dinucleotide_index(s: &str) -> Option<(usize, usize)> {
    let mut it = s.chars();
    match (it.next(), it.next(), it.next()) {
        (Some(a), Some(b), None) => Some((base_index(a)?, base_index(b)?)),
        _ => None,
    }
}

/* -------------------------------------------------------------------------- */

impl MeltTable {

    /// Parse a parameter file with lines
    /// `<dinucleotide> <dinucleotide> <enthalpy> <entropy> <energy>`.
    /// Both dinucleotides receive the values. All 16 dinucleotides must be
    /// covered.
    pub fn read<R: BufRead>(reader: R, name: &str) -> Result<Self, Error> {
        let mut params  = [[MeltParams::default(); 4]; 4];
        let mut defined = [[false; 4]; 4];

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let fields = match definition_fields(&line) {
                Some(fields) => fields,
                None         => continue,
            };
            if fields.len() != 5 {
                return Err(Error::parse(name, i+1, format!("expected 5 fields, found {}", fields.len())));
            }
            let mut values = [0.0; 3];
            for (k, field) in fields[2..].iter().enumerate() {
                values[k] = field.parse::<f64>()
                    .map_err(|e| Error::parse(name, i+1, format!("invalid value `{}`: {}", field, e)))?;
            }
            let p = MeltParams {
                enthalpy: values[0],
                entropy : values[1],
                energy  : values[2],
            };
            for field in &fields[0..2] {
                let (a, b) = dinucleotide_index(field)
                    .ok_or_else(|| Error::parse(name, i+1, format!("invalid dinucleotide `{}`", field)))?;
                params [a][b] = p;
                defined[a][b] = true;
            }
        }
        for a in 0..4 {
            for b in 0..4 {
                if !defined[a][b] {
                    return Err(Error::Generic(format!("parsing `{}` failed: missing dinucleotide `{}{}`", name, BASES[a], BASES[b])));
                }
            }
        }
        Ok(MeltTable { params })
    }

    pub fn import<P: AsRef<Path>>(filename: P) -> Result<Self, Error> {
        let reader = open_path(filename.as_ref())?;
        MeltTable::read(reader, &filename.as_ref().to_string_lossy())
    }

    pub fn load(locator: &DataFileLocator) -> Result<Self, Error> {
        MeltTable::read(locator.open(MELT_FILE)?, MELT_FILE)
    }

    /// Parameters of a concrete dinucleotide such as `"GC"`.
    pub fn get(&self, dinucleotide: &str) -> Option<MeltParams> {
        dinucleotide_index(dinucleotide).map(|(a, b)| self.params[a][b])
    }

    /// Expected parameters of the step `x`,`y` where either symbol may be
    /// ambiguous. Each concrete step is weighted by the probability that the
    /// observed code stands for its bases.
    pub fn step(&self, x: char, y: char, bases: &IubTable) -> MeltParams {
        let (ix, iy) = (alpha_to_int(x), alpha_to_int(y));
        let mut sum  = MeltParams::default();
        for (a, &ca) in BASES.iter().enumerate() {
            let wa = bases.compare_alpha(alpha_to_int(ca), ix) as f64;
            if wa == 0.0 {
                continue;
            }
            for (b, &cb) in BASES.iter().enumerate() {
                let wb = bases.compare_alpha(alpha_to_int(cb), iy) as f64;
                sum = sum + self.params[a][b] * (wa * wb);
            }
        }
        sum
    }

    /// Sum of step parameters over all adjacent pairs of `seq`.
    pub fn energy(&self, seq: &str, bases: &IubTable) -> MeltParams {
        let chars: Vec<char> = seq.chars().collect();
        chars.windows(2)
            .map(|w| self.step(w[0], w[1], bases))
            .fold(MeltParams::default(), |acc, p| acc + p)
    }

    /// Melting temperature in degrees Celsius for a duplex of `seq` at
    /// `salt_mm` millimolar monovalent salt and `dna_nm` nanomolar strand
    /// concentration. `None` for sequences shorter than two bases.
    pub fn temperature(&self, seq: &str, bases: &IubTable, salt_mm: f64, dna_nm: f64) -> Option<f64> {
        if seq.chars().count() < 2 {
            return None;
        }
        let p = self.energy(seq, bases);
        let entropy = p.entropy + INITIAL_ENTROPY + GAS_CONSTANT * (dna_nm / 4.0e9).ln();
        Some(1000.0 * p.enthalpy / entropy - KELVIN + 16.6 * (salt_mm / 1000.0).log10())
    }

}

/* -------------------------------------------------------------------------- */
