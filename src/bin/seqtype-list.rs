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

use serde::Serialize;
use serde_json;

use seqtypes::seqtype_table::{describe_all, SeqType};

/* -------------------------------------------------------------------------- */

#[derive(Serialize)]
struct SeqTypeInfo<'a> {
    #[serde(flatten)]
    seq_type: &'a SeqType,
    charset : &'static str,
}

/* -------------------------------------------------------------------------- */

fn print_json() {
    let info: Vec<SeqTypeInfo> = describe_all().iter().map(|t| SeqTypeInfo {
        seq_type: t,
        charset : t.charset.chars(),
    }).collect();

    match serde_json::to_string_pretty(&info) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("Error serializing sequence types: {}", err);
            process::exit(1);
        }
    }
}

fn print_table(verbose: bool) {
    println!("{:<20} {:<5} {:<5} {:<10} {:<24} {:<24} {}",
        "name", "gaps", "ambig", "kind", "from", "to", "description");
    for t in describe_all() {
        println!("{}", t);
        if verbose {
            println!("{:<20} {}", "", t.charset.chars());
        }
    }
}

/* -------------------------------------------------------------------------- */

fn main() {
    let matches = Command::new("seqtype-list")
        .version("1.0")
        .author("Philipp Benner [https://github.com/pbenner]")
        .about("Print all known sequence types")
        .arg(
            Arg::new("json")
                .long("json")
                .action(clap::ArgAction::SetTrue)
                .help("Print as JSON")
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(clap::ArgAction::SetTrue)
                .help("Also print the allowed characters of each type")
        )
        .get_matches();

    if matches.get_flag("json") {
        print_json();
    } else {
        print_table(matches.get_flag("verbose"));
    }
}
