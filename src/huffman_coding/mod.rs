//! The huffman_coding module builds the code tree and the code table.
//!
//! Tree construction pulls the two lightest nodes from a bounded min-heap and merges them until
//! one root remains. Ties are broken by a fixed rank (see `priority_queue`), so the same
//! frequency table always yields the same tree and the same codes.
//!
//! A table with a single distinct symbol gets a synthetic root with the symbol on its `0`
//! branch. Without it the lone leaf would be the root and its code would be zero bits long.
//!
pub mod code_table;
pub mod priority_queue;
pub mod tree;
