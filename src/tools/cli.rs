use clap::Parser;
use log::LevelFilter;
use std::{fmt::Display, fmt::Formatter};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Map the -v number onto a level. Anything above 5 is Trace.
    pub fn from_level(v: u8) -> Self {
        match v {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    /// Log filter for the terminal logger.
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Where the text to encode comes from
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    File(String),
    Stdin,
}

impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(_) => write!(f, "command line"),
            Input::File(name) => write!(f, "file {}", name),
            Input::Stdin => write!(f, "stdin"),
        }
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Builds a huffman code for some text, shows it, and encodes and decodes with it",
    long_about = None)]
pub struct Args {
    /// Text to encode
    #[clap()]
    text: Option<String>,

    /// Read the input from a file instead
    #[clap(short = 'f', long = "file", conflicts_with = "text")]
    file: Option<String>,

    /// Bit string to decode with the code built from the input, eg. "0110"
    #[clap(short = 'b', long = "bits")]
    bits: Option<String>,

    /// Print the code tree
    #[clap(short = 't', long = "tree")]
    tree: bool,

    /// Sets verbosity. 0 is quiet, 5 is chatty
    #[clap(short = 'v', default_value_t = 2)]
    v: u8,
}

#[derive(Debug)]
pub struct HuffOpts {
    /// Source of the data to encode
    pub input: Input,
    /// Optional bit string to decode after encoding
    pub bits: Option<String>,
    /// Print the code tree structure
    pub show_tree: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            input: Input::Stdin,
            bits: None,
            show_tree: false,
            verbose: Verbosity::Warnings,
        }
    }

    /// Apply parsed command line arguments over the defaults.
    pub fn from_args(args: Args) -> Self {
        let mut opts = HuffOpts::new();
        opts.input = match (args.text, args.file) {
            (Some(text), _) => Input::Text(text),
            (None, Some(file)) => Input::File(file),
            (None, None) => Input::Stdin,
        };
        opts.bits = args.bits;
        opts.show_tree = args.tree;
        opts.verbose = Verbosity::from_level(args.v);
        opts
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the process arguments into options.
pub fn huffopts_init() -> HuffOpts {
    HuffOpts::from_args(Args::parse())
}
