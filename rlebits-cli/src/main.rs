// rlebits
// Copyright (c) 2024 The rlebits Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

//! Reads one or more compressed-sequence files from disk and prints the result of querying them
//! with `rlebits`. Single file: a plain query. Two or more: their bitwise AND. A debugging and
//! inspection tool over the engine, not a stable embeddable binding.

use std::fs;
use std::process::ExitCode;

use clap::{Arg, Command};
use log::debug;

use rlebits::{query_and, query_one, Mode, QueryResult};

fn parse_mode(s: &str) -> Mode {
    match s {
        "list" => Mode::List,
        "count" => Mode::Count,
        "exist" => Mode::Exist,
        _ => unreachable!("clap restricts this to list|count|exist"),
    }
}

fn print_result(result: QueryResult) {
    match result {
        QueryResult::List(indices) => {
            let rendered: Vec<String> = indices.iter().map(u32::to_string).collect();
            println!("{}", rendered.join(","));
        }
        QueryResult::Count(count) => println!("{count}"),
        QueryResult::Exist(found) => println!("{found}"),
    }
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let matches = Command::new("rlebits-cli")
        .version("0.1.0")
        .about("Query one or more run-length-encoded compressed bitmap files")
        .arg(
            Arg::new("files")
                .help("Compressed-sequence file(s) to query; two or more are combined with AND")
                .required(true)
                .num_args(1..),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .value_parser(["list", "count", "exist"])
                .default_value("list")
                .help("What to compute over the file(s)"),
        )
        .arg(
            Arg::new("capacity")
                .long("capacity")
                .value_parser(clap::value_parser!(usize))
                .help("Pre-allocated result capacity; required for --mode list"),
        )
        .get_matches();

    let paths: Vec<&String> = matches.get_many::<String>("files").unwrap().collect();
    let mode = parse_mode(matches.get_one::<String>("mode").unwrap());
    let capacity = matches.get_one::<usize>("capacity").copied();

    let capacity = match (mode, capacity) {
        (Mode::List, None) => {
            eprintln!("error: --capacity is required for --mode list");
            return ExitCode::from(2);
        }
        (_, cap) => cap.unwrap_or(0),
    };

    let buffers: Vec<Vec<u8>> = match paths.iter().map(|p| fs::read(p)).collect() {
        Ok(buffers) => buffers,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(1);
        }
    };

    debug!("loaded {} file(s) for a {:?} query", buffers.len(), mode);

    let result = if let [single] = buffers.as_slice() {
        query_one(single, capacity, mode)
    } else {
        let views: Vec<&[u8]> = buffers.iter().map(Vec::as_slice).collect();
        query_and(&views, capacity, mode)
    };

    match result {
        Ok(result) => {
            print_result(result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
