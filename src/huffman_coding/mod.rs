//! The huffman module is the entropy coding stage of bwtzip.
//!
//! A single huffman code is built for the whole input from its byte frequencies. The tree is
//! serialized in front of the encoded message so the decoder can rebuild the same code.
//!
//! When the coded form would not be smaller than the input, the encoder may instead store the
//! input as is, marked with a trailing sentinel byte (see RAW_SENTINEL). The pipeline asks the
//! stage to always code, and applies its own size check on the final result.
//!

pub mod huffman;
pub mod huffman_tree;
