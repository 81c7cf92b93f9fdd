//! The compression module runs the bwtzip pipeline and handles its input and output.
//!
//! Compression happens in the following steps:
//! - Run Length Encoding (optional): Pack runs of identical bytes.
//! - Burrows Wheeler Transform: Sort the data to increase the probability of runs of identical bytes.
//!   The 32 bit key is written in front of the transformed data.
//! - Move To Front transform: Turn those runs into runs of small values, mostly zeros.
//! - Huffman coding: Encode frequent byte values using smaller bit codes and less frequent byte values
//!   with longer bit codes.
//!
//! If the compressed result plus one byte is not smaller than the input, the input is written as is,
//! followed by a sentinel byte of 8. A compressed stream ends in its bitstream trailer, which is never above 7.
//!
//! Decompression checks that last byte, then follows the inverse of the compression process.
//!

pub mod compress;
pub mod data_io;
pub mod decompress;
pub mod roundtrip;
