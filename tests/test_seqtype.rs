/* Copyright (C) 2024 Philipp Benner
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <http://www.gnu.org/licenses/>.
 */

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {

    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    use seqtypes::error::Error;
    use seqtypes::infologger::Logger;
    use seqtypes::seqtype::{check_input, test_only, Check, OptionSeqType, Rejection, SeqTypeChecker, Verdict};
    use seqtypes::seqtype_table::{describe_all, is_any_compatible, is_nucleotide_compatible, is_protein_compatible, SeqKind};

    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_dna_conversion() {
        let mut seq = String::from("acgtACGTxxNn");
        let verdict = check_input(&mut seq, "dna").unwrap();

        assert_eq!(verdict, Verdict::Accepted);
        assert_eq!(seq, "acgtACGTnnNn");
    }

    #[test]
    fn test_gapdna_gaps() {
        let mut seq = String::from("ACGT-N.N~N");
        let verdict = check_input(&mut seq, "gapdna").unwrap();

        assert_eq!(verdict, Verdict::Accepted);
        assert_eq!(seq, "ACGT-N-N-N");
    }

    #[test]
    fn test_pureprotein_internal_stop() {
        let mut seq = String::from("MKV*LDR");
        let verdict = check_input(&mut seq, "pureprotein").unwrap();

        match verdict {
            Verdict::Rejected(Rejection::BadCharacter { seq_type, ch, pos, .. }) => {
                assert_eq!(seq_type, "pureprotein");
                assert_eq!(ch , '*');
                assert_eq!(pos, 3);
            }
            v => panic!("unexpected verdict {:?}", v),
        }
    }

    #[test]
    fn test_stopprotein() {
        let mut seq = String::from("MKVLDR*");
        let verdict = check_input(&mut seq, "stopprotein").unwrap();

        assert_eq!(verdict, Verdict::Accepted);
        assert_eq!(seq, "MKVLDR*");
    }

    #[test]
    fn test_unknown_type() {
        let mut seq = String::from("ACGT");

        match check_input(&mut seq, "bogus-type") {
            Err(Error::UnknownSeqType(name)) => assert_eq!(name, "bogus-type"),
            r => panic!("unexpected result {:?}", r),
        }
        assert!(test_only(&mut seq, "bogus-type").is_err());
    }

    #[test]
    fn test_rejection_message() {
        let buffer  = Rc::new(RefCell::new(Vec::new()));
        let checker = SeqTypeChecker::new(vec![
            OptionSeqType::Logger(Logger::new_writer(SharedBuffer(buffer.clone()))),
        ]);

        let mut seq = String::from("ACGTACGTACGTE");
        let verdict = checker.check_and_normalize(&mut seq, "puredna", Check::Input).unwrap();
        let message = "sequence must be DNA sequence, bases ACGT only: found bad character `E` at position 12";

        match verdict {
            Verdict::Rejected(r) => assert_eq!(r.to_string(), message),
            v => panic!("unexpected verdict {:?}", v),
        }
        assert_eq!(String::from_utf8(buffer.borrow().clone()).unwrap(), format!("{}\n", message));

        // silent checks stay silent
        let mut seq = String::from("ACGTACGTACGTE");
        assert!(!checker.test_only(&mut seq, "puredna").unwrap());
        assert_eq!(buffer.borrow().len(), message.len() + 1);
    }

    #[test]
    fn test_rejected_buffer_not_restored() {
        let mut seq = String::from("AC-GT ACGT.ACGTE");
        let verdict = check_input(&mut seq, "puredna").unwrap();

        assert!(!verdict.is_accepted());
        assert_eq!(seq, "ACGTACGTACGTE");
    }

    #[test]
    fn test_deterministic() {
        let inputs = ["acgtACGTxxNn", "MKV*LDR*", "AC GT..N", "", "mkvl1dr", "ACGU-?"];
        for t in describe_all() {
            for s in inputs {
                let mut a = s.to_string();
                let mut b = s.to_string();
                let ra = check_input(&mut a, t.name).unwrap();
                let rb = check_input(&mut b, t.name).unwrap();
                assert_eq!(ra, rb, "type `{}`, sequence `{}`", t.name, s);
                assert_eq!(a , b , "type `{}`, sequence `{}`", t.name, s);
            }
        }
    }

    #[test]
    fn test_empty_sequence() {
        for t in describe_all() {
            let mut seq = String::new();
            assert!(check_input(&mut seq, t.name).unwrap().is_accepted(), "{}", t.name);
            assert!(seq.is_empty());
        }
    }

    #[test]
    fn test_fail_closed() {
        for name in ["bogus-type", "", "DNAX", "protein "] {
            assert!(!is_protein_compatible(name));
            assert!(!is_nucleotide_compatible(name));
            assert!(!is_any_compatible(name));
        }
    }

    #[test]
    fn test_rna() {
        let mut seq = String::from("ACGTacgt");
        assert!(check_input(&mut seq, "rna").unwrap().is_accepted());
        assert_eq!(seq, "ACGUacgu");

        let mut seq = String::from("AC-GT");
        assert!(check_input(&mut seq, "purerna").unwrap().is_accepted());
        assert_eq!(seq, "ACGU");
    }

    #[test]
    fn test_phylo() {
        let mut seq = String::from("AC?GT-");
        assert!(check_input(&mut seq, "gapdnaphylo").unwrap().is_accepted());
        assert_eq!(seq, "AC?GT-");

        let mut seq = String::from("AC?GT-");
        assert!(check_input(&mut seq, "gapdna").unwrap().is_accepted());
        assert_eq!(seq, "ACNGT-");
    }

    #[test]
    fn test_nucleotide_simple() {
        let mut seq = String::from("ACRYgtkm");
        assert!(test_only(&mut seq, "gapnucleotidesimple").unwrap());
        assert_eq!(seq, "ACNNgtnn");
    }

    #[test]
    fn test_ambiguity_rich_dna() {
        for name in ["dna", "gapdna", "nucleotide"] {
            let mut seq = String::from("ACRYKMSWBDHV");
            let verdict = check_input(&mut seq, name).unwrap();

            assert_eq!(verdict, Verdict::Accepted, "{}", name);
            assert_eq!(seq, "ACRYKMSWBDHV");
        }
        let mut seq = String::from("rykmswbdhvn");
        assert!(check_input(&mut seq, "gapnucleotide").unwrap().is_accepted());
    }

    #[test]
    fn test_protein_kind_mismatch() {
        for name in ["protein", "gapprotein", "stopprotein"] {
            let mut seq = String::from("ACGTACGTACGT");
            match check_input(&mut seq, name).unwrap() {
                Verdict::Rejected(Rejection::KindMismatch { seq_type, expected, .. }) => {
                    assert_eq!(seq_type, name);
                    assert_eq!(expected, SeqKind::Protein);
                }
                v => panic!("unexpected verdict {:?} for `{}`", v, name),
            }
        }
        // the silent variant skips the kind check
        let mut seq = String::from("ACGTACGTACGT");
        assert!(test_only(&mut seq, "protein").unwrap());
    }

    #[test]
    fn test_kind_mismatch_message() {
        let buffer  = Rc::new(RefCell::new(Vec::new()));
        let checker = SeqTypeChecker::new(vec![
            OptionSeqType::Logger(Logger::new_writer(SharedBuffer(buffer.clone()))),
        ]);
        let message = "sequence must be protein sequence: sequence does not look like protein";

        let mut seq = String::from("ACGTACGTACGT");
        match checker.check_input(&mut seq, "protein").unwrap() {
            Verdict::Rejected(r) => assert_eq!(r.to_string(), message),
            v => panic!("unexpected verdict {:?}", v),
        }
        assert_eq!(String::from_utf8(buffer.borrow().clone()).unwrap(), format!("{}\n", message));

        let mut seq = String::from("MKVLDRLLEE");
        assert!(!checker.check_input(&mut seq, "dna").unwrap().is_accepted());
        assert!(String::from_utf8(buffer.borrow().clone()).unwrap()
            .ends_with("sequence must be DNA sequence: sequence does not look like nucleotide\n"));
    }
}
