//! The tools module provides helper functions for the huffman coder and its command line driver.
//!
//! The tools are:
//! - cli: Command line interface and options.
//! - freq_count: Frequency count of the input bytes.
//! - report: Text rendering of frequency tables, code tables and sizes.
//!
pub mod cli;
pub mod freq_count;
pub mod report;
