//! The tools module provides the smaller stages and helpers of bwtzip.
//!
//! The tools are:
//! - cli: Command line interface for bwtzip.
//! - freq_count: Frequency count of byte values.
//! - mtf: Move-To-Front transform.
//! - rle: Optional Run-Length-Encoding stage.
//!
pub mod cli;
pub mod freq_count;
pub mod mtf;
pub mod rle;
