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

use std::process;

use clap::{Arg, Command};

use seqtypes::error::Error;
use seqtypes::infologger::Logger;
use seqtypes::seqtype::{Check, OptionSeqType, SeqTypeChecker, Verdict};

/* -------------------------------------------------------------------------- */

fn check_sequences(type_name: &str, sequences: &[String], check: Check, gap: char, verbose: bool) -> Result<usize, Error> {
    let logger = if verbose {
        Logger::new_stderr()
    } else {
        Logger::new_void()
    };
    let checker = SeqTypeChecker::new(vec![
        OptionSeqType::Logger(logger),
        OptionSeqType::GapChar(gap),
    ]);
    let mut n_rejected = 0;

    for s in sequences {
        let mut seq = s.clone();
        match checker.check_and_normalize(&mut seq, type_name, check)? {
            Verdict::Accepted => {
                println!("{}", seq);
            }
            Verdict::Rejected(rejection) => {
                println!("{}\t{}", s, rejection);
                n_rejected += 1;
            }
        }
    }
    Ok(n_rejected)
}

/* -------------------------------------------------------------------------- */

fn main() {
    let matches = Command::new("seqtype-check")
        .version("1.0")
        .author("Philipp Benner [https://github.com/pbenner]")
        .about("Validate and normalize sequences against a sequence type")
        .arg(
            Arg::new("type")
                .help("Sequence type, e.g. dna, gapprotein (empty string accepts anything)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("sequences")
                .help("Sequences to check")
                .required(true)
                .num_args(1..)
                .index(2),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .action(clap::ArgAction::SetTrue)
                .help("Skip the sequence kind check")
        )
        .arg(
            Arg::new("gap")
                .long("gap")
                .default_value("-")
                .value_parser(clap::value_parser!(char))
                .help("Canonical gap character")
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(clap::ArgAction::SetTrue)
                .help("Report rejections on stderr")
        )
        .get_matches();

    let type_name = matches.get_one::<String>("type").map(String::as_str).unwrap_or("");
    let sequences: Vec<String> = matches.get_many::<String>("sequences")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();
    let gap       = matches.get_one::<char>("gap").copied().unwrap_or('-');
    let check     = if matches.get_flag("silent") { Check::Silent } else { Check::Input };

    match check_sequences(type_name, &sequences, check, gap, matches.get_flag("verbose")) {
        Ok(0) => {}
        Ok(_) => process::exit(2),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
