//! bwtzip, a block-sorting compressor.
//!
//! Version 0.1.0
//!
//! Compresses a whole input in one block: a Burrows-Wheeler Transform, then a Move-To-Front
//! transform, then Huffman coding with the code tree stored in the output. Data that does not
//! shrink is stored as is, with a one byte marker.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> bwtzip -z test.txt`
//!
//! This will compress the file and create the file test.txt.bwz.
//! The original file will be deleted unless -k is given.
//!
//! The stages can also be used directly:
//!
//! ```
//! use bwtzip::compression::{compress::compress_bytes, decompress::decompress_bytes};
//!
//! let data = b"banana bandana banana bandana".to_vec();
//! let packed = compress_bytes(&data, false);
//! assert_eq!(decompress_bytes(packed, false).unwrap(), data);
//! ```
//!
pub mod bitstream;
pub mod bwt_algorithms;
pub mod compression;
pub mod huffman_coding;
pub mod tools;
