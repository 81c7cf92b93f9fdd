use std::io;

use log::{debug, info};

use super::data_io::{read_input, remove_input, write_output};
use crate::bwt_algorithms::bwt_sort::decode_block;
use crate::huffman_coding::huffman::{huf_decode, RAW_SENTINEL};
use crate::tools::cli::Opts;
use crate::tools::mtf::mtf_decode;
use crate::tools::rle::rle_decode;

/// Decompress a buffer made by compress_bytes. The rle flag must match the one used to compress.
pub fn decompress_bytes(compressed: Vec<u8>, rle: bool) -> io::Result<Vec<u8>> {
    let mut compressed = compressed;
    match compressed.last() {
        None => return Ok(vec![]),
        Some(&RAW_SENTINEL) => {
            debug!("Found raw data.");
            compressed.pop();
            return Ok(compressed);
        }
        _ => {}
    }

    let mtf = huf_decode(compressed)?;
    let bwt = mtf_decode(&mtf);
    let data = decode_block(bwt)?;
    if rle {
        return rle_decode(&data);
    }
    Ok(data)
}

/// Decompress the input defined in opts and write the result.
pub fn decompress(opts: &Opts) -> io::Result<()> {
    let data = read_input(opts)?;
    let size = data.len();

    let out = decompress_bytes(data, opts.rle)?;
    info!("Decompressed {} bytes to {} bytes.", size, out.len());

    write_output(opts, &out)?;
    remove_input(opts)
}
