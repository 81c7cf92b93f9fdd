use std::io::{self, Error};

use log::{debug, info};

use super::data_io::{read_input, remove_input, write_output};
use crate::bwt_algorithms::bwt_sort::encode_block;
use crate::huffman_coding::huffman::{huf_encode, RAW_SENTINEL};
use crate::tools::cli::Opts;
use crate::tools::mtf::mtf_encode;
use crate::tools::rle::rle_encode;

/// Compress a buffer: (RLE), BWT, MTF, then Huffman coding. If the result plus one byte is not
/// smaller than the input, the input is stored as is with RAW_SENTINEL appended.
/// Empty input gives empty output.
pub fn compress_bytes(original: &[u8], rle: bool) -> Vec<u8> {
    if original.is_empty() {
        return vec![];
    }

    let bwt = if rle {
        encode_block(&rle_encode(original))
    } else {
        encode_block(original)
    };
    let mtf = mtf_encode(&bwt);
    debug!(
        "{} bytes after BWT & MTF coding, {} zeros.",
        mtf.len(),
        mtf.iter().filter(|&&b| b == 0).count()
    );

    let encoded = huf_encode(&mtf, true);
    if encoded.len() + 1 >= original.len() {
        info!(
            "Compressed size {} plus one is not below the input size {}. Storing raw.",
            encoded.len(),
            original.len()
        );
        let mut raw = Vec::with_capacity(original.len() + 1);
        raw.extend_from_slice(original);
        raw.push(RAW_SENTINEL);
        return raw;
    }
    encoded
}

/// Compress the input defined in opts and write the result.
pub fn compress(opts: &Opts) -> io::Result<()> {
    let data = read_input(opts)?;

    // The BWT key is stored in 32 bits.
    if data.len() > u32::MAX as usize {
        return Err(Error::new(
            io::ErrorKind::InvalidInput,
            format!("Input of {} bytes is too large to compress.", data.len()),
        ));
    }

    let out = compress_bytes(&data, opts.rle);
    info!("Compressed {} bytes to {} bytes.", data.len(), out.len());

    write_output(opts, &out)?;
    remove_input(opts)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_test() {
        assert!(compress_bytes(&[], false).is_empty());
        assert!(compress_bytes(&[], true).is_empty());
    }

    #[test]
    fn tiny_input_is_stored_raw_test() {
        assert_eq!(compress_bytes(b"a", false), vec![b'a', RAW_SENTINEL]);
        assert_eq!(compress_bytes(b"xy", true), vec![b'x', b'y', RAW_SENTINEL]);
    }

    /// Xorshift32 bytes drawn from the first `alpha` letters.
    fn letters(len: usize, alpha: u32, mut seed: u32) -> Vec<u8> {
        (0..len)
            .map(|_| {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                b'a' + (seed % alpha) as u8
            })
            .collect()
    }

    /// Expected pipeline output for data without RLE, built from the stages directly.
    fn expected(data: &[u8]) -> Vec<u8> {
        let forced = huf_encode(&mtf_encode(&encode_block(data)), true);
        if forced.len() + 1 >= data.len() {
            data.iter().copied().chain([RAW_SENTINEL]).collect()
        } else {
            forced
        }
    }

    #[test]
    fn short_input_near_break_even_is_stored_raw_test() {
        let data = b"abcabbca";
        let forced = huf_encode(&mtf_encode(&encode_block(data)), true);
        // At least three distinct MTF values: a 29 bit tree plus 12 coded bytes needs 7 bytes.
        assert!(forced.len() + 1 >= data.len());
        assert_eq!(
            compress_bytes(data, false),
            [&data[..], &[RAW_SENTINEL][..]].concat()
        );
    }

    #[test]
    fn fallback_boundary_test() {
        let (mut raw, mut packed) = (0, 0);
        for len in 2..400 {
            for alpha in [2, 3, 5, 16, 64] {
                let data = letters(len, alpha, len as u32 * 7919 + alpha);
                let out = compress_bytes(&data, false);
                assert_eq!(out, expected(&data), "len {} alphabet {}", len, alpha);
                if out.last() == Some(&RAW_SENTINEL) {
                    assert_eq!(out.len(), data.len() + 1);
                    raw += 1;
                } else {
                    assert!(out.len() + 1 < data.len(), "len {} alphabet {}", len, alpha);
                    packed += 1;
                }
            }
        }
        assert!(raw > 0 && packed > 0);
    }

    #[test]
    fn repetitive_input_compresses_test() {
        let data = b"the cat sat on the mat. ".repeat(40);
        let out = compress_bytes(&data, false);
        assert!(out.len() < data.len() / 4);
        assert!(*out.last().unwrap() <= 7);
    }
}
