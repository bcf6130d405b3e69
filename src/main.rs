//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use std::io::{self, BufRead};

use huffcode::tools::cli::{huffopts_init, HuffOpts, Input, Verbosity};
use huffcode::tools::report::{self, report};
use huffcode::{
    build_code, decode_bit_string, encode, release, verify_round_trip, FrequencyTable, HuffError,
};

use log::{error, info};
use simplelog::{Config, TermLogger, TerminalMode};

fn main() -> Result<(), HuffError> {
    let opts = huffopts_init();

    // Available log levels are Error, Warn, Info, Debug, Trace
    if TermLogger::init(
        opts.verbose.level_filter(),
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Logger already initialised.");
    }

    let result = run(&opts);
    if let Err(e) = &result {
        error!("{}", e);
    }
    info!("Done.");
    result
}

/// Read the input as the options say.
fn read_input(opts: &HuffOpts) -> Result<Vec<u8>, HuffError> {
    info!("Reading input from {}.", opts.input);
    match &opts.input {
        Input::Text(text) => Ok(text.as_bytes().to_vec()),
        Input::File(name) => Ok(std::fs::read(name)?),
        Input::Stdin => {
            report(opts, Verbosity::Errors, "Enter the text to build the huffman code from:");
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            let trimmed = line.trim_end_matches(&['\r', '\n'][..]);
            Ok(trimmed.as_bytes().to_vec())
        }
    }
}

fn run(opts: &HuffOpts) -> Result<(), HuffError> {
    let data = read_input(opts)?;
    let freqs = FrequencyTable::from_bytes(&data);
    report(opts, Verbosity::Errors, report::frequencies(&freqs));

    let (tree, table) = build_code(&data)?;
    if opts.show_tree {
        report(opts, Verbosity::Errors, tree.render());
    }
    report(opts, Verbosity::Errors, report::code_table(&table));

    let packed = encode(&data, &table);
    report(
        opts,
        Verbosity::Errors,
        format!("Encoded bits:\n{}\n", packed.to_bit_string()),
    );
    report(opts, Verbosity::Errors, report::sizes(data.len(), &packed));

    // Check the round trip before anything else uses the tree.
    verify_round_trip(&data, &packed, &tree)?;

    if let Some(bits) = &opts.bits {
        let text = decode_bit_string(bits, &tree)?;
        report(
            opts,
            Verbosity::Quiet,
            format!("Decoded text:\n{}", String::from_utf8_lossy(&text)),
        );
    }

    release(tree);
    Ok(())
}
