//! The bwt_algorithms module holds the Burrows-Wheeler Transform for bwtzip.
//!
//! The transform sorts every rotation of the input and keeps the last byte of each sorted rotation.
//! This groups bytes that share a following context, which gives the MTF stage long stretches of
//! small indices to work with.
//!
//! Rotations are never materialized; they are compared in place with wraparound. The rank of the
//! unrotated input (the key) is needed to invert the transform and travels as a 32 bit prefix.
//!
pub mod bwt_sort;
