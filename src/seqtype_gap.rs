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

pub const GAP_LIKE      : &str = " .~-";
pub const CANONICAL_GAP : char = '-';
pub const STOP          : char = '*';

/* -------------------------------------------------------------------------- */

pub fn is_gap_like(c: char) -> bool {
    GAP_LIKE.contains(c)
}

/* -------------------------------------------------------------------------- */

/// Rewrite gap-like characters of `seq` in place.
///
/// Interior gap-like characters become `gap`. With `pad` set, the leading
/// and trailing runs of gap-like characters become `pad` instead; runs are
/// determined on the input before any rewriting, so a sequence made only of
/// gap-like characters is padded entirely. If `target_len` exceeds the
/// current length (in characters) the sequence is extended with `pad`, or
/// `gap` without a pad character. A `target_len` of zero never extends.
pub fn normalize_gaps(seq: &mut String, gap: char, pad: Option<char>, target_len: usize) {
    let chars: Vec<char> = seq.chars().collect();
    let n = chars.len();

    let (lead, trail) = match pad {
        Some(_) => {
            let lead  = chars.iter().take_while(|&&c| is_gap_like(c)).count();
            let trail = chars.iter().rev().take_while(|&&c| is_gap_like(c)).count();
            (lead, trail)
        }
        None => (0, 0),
    };

    let mut result = String::with_capacity(n.max(target_len));
    for (i, &c) in chars.iter().enumerate() {
        if !is_gap_like(c) {
            result.push(c);
        } else if i < lead || i >= n - trail {
            result.push(pad.unwrap_or(gap));
        } else {
            result.push(gap);
        }
    }
    for _ in n..target_len {
        result.push(pad.unwrap_or(gap));
    }
    *seq = result;
}

/* -------------------------------------------------------------------------- */

/// Remove every gap-like character.
pub fn strip_gaps(seq: &mut String) {
    seq.retain(|c| !is_gap_like(c));
}

/* -------------------------------------------------------------------------- */

/// Remove one trailing stop symbol. Returns whether anything was removed.
pub fn trim_stop(seq: &mut String) -> bool {
    if seq.ends_with(STOP) {
        seq.pop();
        true
    } else {
        false
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {

    use super::*;

    fn normalized(s: &str, gap: char, pad: Option<char>, target_len: usize) -> String {
        let mut seq = s.to_string();
        normalize_gaps(&mut seq, gap, pad, target_len);
        seq
    }

    #[test]
    fn test_normalize_interior() {
        assert_eq!(normalized("AC GT.A~C-G", '-', None, 0), "AC-GT-A-C-G");
        assert_eq!(normalized("", '-', None, 0), "");
    }

    #[test]
    fn test_normalize_pad() {
        assert_eq!(normalized("..AC-GT~ ", '-', Some('.'), 0), "..AC-GT..");
        assert_eq!(normalized(" .~-", '-', Some('.'), 0), "....");
        assert_eq!(normalized("-", '-', Some('.'), 0), ".");
        assert_eq!(normalized("A", '-', Some('.'), 0), "A");
    }

    #[test]
    fn test_normalize_extend() {
        assert_eq!(normalized("AC", '-', None, 5), "AC---");
        assert_eq!(normalized("AC", '-', Some('.'), 4), "AC..");
        assert_eq!(normalized("ACGT", '-', None, 2), "ACGT");
    }

    #[test]
    fn test_normalize_idempotent() {
        for s in ["", " ", "A C", "..A..", "-.~ -", "AC~~GT  ", "x-y.z"] {
            let once  = normalized(s, '-', None, 0);
            let twice = normalized(&once, '-', None, 0);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_strip_and_trim() {
        let mut seq = String::from("A C.G~T-*");
        strip_gaps(&mut seq);
        assert_eq!(seq, "ACGT*");
        assert!( trim_stop(&mut seq));
        assert!(!trim_stop(&mut seq));
        assert_eq!(seq, "ACGT");
    }
}
