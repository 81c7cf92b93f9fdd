use std::io::{self, Error};

use log::{debug, info, trace};

use super::huffman_tree::{
    build_codes, build_tree, decode_tree, encode_tree, get_frequencies, CodeTable, Node, NodeData,
};
use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;

/// Marks data stored without compression. A BitWriter trailer never exceeds 7, so any
/// stream ending in a larger value is raw data followed by this byte.
pub const RAW_SENTINEL: u8 = 8;

/// Write the code of every byte of the data.
pub fn encode_message(data: &[u8], codes: &CodeTable, bw: &mut BitWriter) {
    for byte in data {
        if let Some(code) = codes.get(byte) {
            bw.write_code(code);
        }
    }
}

/// Walk the tree one bit at a time, emitting a byte at every leaf, until the reader runs dry.
/// A tree that is a single leaf emits its byte for every bit.
pub fn decode_message(tree: &Node, br: &mut BitReader) -> Vec<u8> {
    let mut out = Vec::with_capacity(br.remaining());

    if let NodeData::Leaf(sym) = tree.node_data {
        while br.read_bit().is_some() {
            out.push(sym);
        }
        return out;
    }

    let mut node = tree;
    while let Some(bit) = br.read_bit() {
        if let NodeData::Kids(left, right) = &node.node_data {
            node = if bit { &**right } else { &**left };
        }
        if let NodeData::Leaf(sym) = node.node_data {
            out.push(sym);
            node = tree;
        }
    }
    out
}

/// Huffman encode the data: the serialized tree, then the message, then the trailer byte.
/// Unless force is set, data that does not get strictly smaller than its raw form
/// (data plus the sentinel byte) is returned raw with RAW_SENTINEL appended.
pub fn huf_encode(data: &[u8], force: bool) -> Vec<u8> {
    let mut bw = BitWriter::new(data.len() / 2 + 64);

    if let Some(tree) = build_tree(&get_frequencies(data)) {
        let codes = build_codes(&tree);
        debug!("Huffman: {} symbols in use.", tree.leaf_count());

        encode_tree(&tree, &mut bw);
        trace!("\r\x1b[43mTree written, message starts at {}.    \x1b[0m", bw.loc());
        encode_message(data, &codes, &mut bw);
    }
    let encoded = bw.finalize();

    if !force && encoded.len() >= data.len() + 1 {
        info!(
            "Huffman output of {} bytes is no smaller than the {} byte input. Storing raw.",
            encoded.len(),
            data.len()
        );
        let mut raw = Vec::with_capacity(data.len() + 1);
        raw.extend_from_slice(data);
        raw.push(RAW_SENTINEL);
        return raw;
    }
    debug!("Huffman: {} bytes in, {} bytes out.", data.len(), encoded.len());
    encoded
}

/// Reverse huf_encode.
pub fn huf_decode(encoded: Vec<u8>) -> io::Result<Vec<u8>> {
    let mut encoded = encoded;
    match encoded.last() {
        None => {
            return Err(Error::new(
                io::ErrorKind::InvalidData,
                "Huffman stream is empty",
            ))
        }
        Some(&last) if last > 7 => {
            trace!("Huffman stream is raw data.");
            encoded.pop();
            return Ok(encoded);
        }
        _ => {}
    }

    let mut br = BitReader::new(encoded);
    if br.remaining() == 0 {
        return Ok(vec![]);
    }
    let tree = decode_tree(&mut br).ok_or_else(|| {
        Error::new(
            io::ErrorKind::InvalidData,
            "Huffman stream ends inside the tree",
        )
    })?;
    trace!("\r\x1b[43mTree read, message starts at {}.    \x1b[0m", br.loc());
    debug!("Huffman: tree holds {} symbols.", tree.leaf_count());

    let out = decode_message(&tree, &mut br);
    debug!("Huffman: decoded {} bytes.", out.len());
    Ok(out)
}
