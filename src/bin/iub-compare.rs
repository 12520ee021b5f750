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

use std::error::Error;
use std::process;

use clap::{Arg, Command};

use seqtypes::datafile::DataFileLocator;
use seqtypes::iub::{IubModel, IubTable};
use seqtypes::iub_codes::{alpha_to_int, complement};

/* -------------------------------------------------------------------------- */

fn compare(table: &IubTable, a: char, b: char, residues: bool) {
    println!("{:<24} {}", "compare_alpha",      table.compare_alpha(alpha_to_int(a), alpha_to_int(b)));
    println!("{:<24} {}", "compare_alpha (b, a)", table.compare_alpha(alpha_to_int(b), alpha_to_int(a)));
    println!("{:<24} {}", "compare_alpha_char",  table.compare_alpha_char(a, b));
    for c in [a, b] {
        println!("{:<24} {} ({})", format!("expansion {}", c), table.expansion(c), table.mnemonic(c).unwrap_or("-"));
        if !residues {
            println!("{:<24} {}", format!("binary code {}", c), table.to_binary_code(c));
            println!("{:<24} {}", format!("complement {}", c), complement(c));
        }
    }
}

/* -------------------------------------------------------------------------- */

fn run(a: char, b: char, residues: bool, data_dir: Option<&String>) -> Result<(), Box<dyn Error>> {
    let mut locator = DataFileLocator::new();
    if let Some(dir) = data_dir {
        locator = locator.add_dir(dir);
    }
    let model = IubModel::new(locator);
    let table = if residues {
        model.residues()?
    } else {
        model.bases()?
    };
    compare(table, a, b, residues);
    Ok(())
}

/* -------------------------------------------------------------------------- */

fn main() {
    let matches = Command::new("iub-compare")
        .version("1.0")
        .author("Philipp Benner [https://github.com/pbenner]")
        .about("Compare two IUB ambiguity codes")
        .arg(
            Arg::new("a")
                .required(true)
                .value_parser(clap::value_parser!(char))
                .index(1),
        )
        .arg(
            Arg::new("b")
                .required(true)
                .value_parser(clap::value_parser!(char))
                .index(2),
        )
        .arg(
            Arg::new("residues")
                .short('r')
                .long("residues")
                .action(clap::ArgAction::SetTrue)
                .help("Use the amino acid table instead of the base table")
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Directory searched first for definition files")
        )
        .get_matches();

    let a = matches.get_one::<char>("a").copied().unwrap_or('N');
    let b = matches.get_one::<char>("b").copied().unwrap_or('N');

    if let Err(e) = run(a, b, matches.get_flag("residues"), matches.get_one::<String>("data-dir")) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
