//! The bitstream module forms the bit-level I/O subsystem for bwtzip.
//!
//! Every stage exchanges plain byte vectors. Where a stage needs sub-byte granularity (the huffman
//! tree and message) or a fixed width integer (the BWT key), it goes through a BitWriter, which packs
//! bits most significant first and closes the stream with a trailer byte: the count of significant
//! bits in the last content byte, 0 meaning a full byte. The BitReader strips that trailer and refuses
//! to read past it.
//!
//! The trailer therefore only ever holds 0-7. The pipeline relies on this to mark uncompressed output
//! with a trailing 8.
//!
pub mod bitreader;
pub mod bitwriter;
