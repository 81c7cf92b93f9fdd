use std::cmp::Ordering;
use std::io::{self, Error};

use log::{debug, trace};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::tools::freq_count::freqs;

/// Burrows-Wheeler-Transform by sorting every rotation of the input.
/// This returns a u32 Key (the rank of the unrotated input among the sorted rotations)
/// and a u8 vec of the last byte of each sorted rotation.
pub fn bwt_encode(orig: &[u8]) -> (u32, Vec<u8>) {
    // Nothing to sort
    if orig.len() <= 1 {
        return (0, orig.to_vec());
    }

    // Create index into block. Index is u32, which should be more than enough
    let mut index = (0_u32..orig.len() as u32).collect::<Vec<u32>>();

    // Sort index. Identical rotations (periodic data) keep their start order.
    index.sort_unstable_by(|a, b| block_compare(*a as usize, *b as usize, orig).then(a.cmp(b)));

    // Get key and BWT output
    let mut key = 0_u32;
    let mut bwt = vec![0; orig.len()];
    for (i, &start) in index.iter().enumerate() {
        if start == 0 {
            key = i as u32;
            bwt[i] = orig[orig.len() - 1];
        } else {
            bwt[i] = orig[start as usize - 1];
        }
    }
    trace!("\r\x1b[43mBWT key is {}.    \x1b[0m", key);
    (key, bwt)
}

/// Compare the rotations starting at a and b, wrapping around the end of the block.
/// All block.len() bytes are compared, so Equal means the two rotations are identical,
/// which only happens for periodic blocks. Callers break that tie by start index
/// (`.then(a.cmp(b))`) to get a total order.
fn block_compare(a: usize, b: usize, block: &[u8]) -> Ordering {
    let min = std::cmp::min(block[a..].len(), block[b..].len());

    // Lexicographical comparison
    let mut result = block[a..a + min].cmp(&block[b..b + min]);

    // Implement wraparound if needed
    if result == Ordering::Equal {
        if a < b {
            let to_end = block.len() - a - min;
            result = block[(a + min)..].cmp(&block[..to_end]);
            if result == Ordering::Equal {
                let rest_of_block = block.len() - to_end - min;
                return block[..rest_of_block].cmp(&block[to_end..(to_end + rest_of_block)]);
            }
        } else {
            let to_end = block.len() - b - min;
            result = block[..to_end].cmp(&block[(b + min)..]);
            if result == Ordering::Equal {
                let rest_of_block = block.len() - to_end - min;
                return block[to_end..(to_end + rest_of_block)].cmp(&block[..rest_of_block]);
            }
        }
    }
    result
}

/// Decode a Burrows-Wheeler-Transform. The key must be the one returned by bwt_encode
/// for this data.
pub fn bwt_decode(key: u32, bwt_in: &[u8]) -> io::Result<Vec<u8>> {
    let end = bwt_in.len();
    if end == 0 {
        return Ok(vec![]);
    }
    let mut key = key as usize;
    if key >= end {
        return Err(Error::new(
            io::ErrorKind::InvalidData,
            format!("BWT key {} is outside a block of {} bytes", key, end),
        ));
    }

    // Count how many of each byte came before every position (its rank among equal bytes)...
    let mut seen = [0_u32; 256];
    let ranks = bwt_in
        .iter()
        .map(|&s| {
            seen[s as usize] += 1;
            seen[s as usize] - 1
        })
        .collect::<Vec<u32>>();

    // ...and convert the frequency count to a cumulative sum, where each byte value first
    // appears in the sorted first column.
    let mut first = [0_u32; 256];
    freqs(bwt_in)
        .iter()
        .enumerate()
        .take(255)
        .for_each(|(i, &f)| first[i + 1] = first[i] + f);

    // Walk backwards from the key, filling the output from the end.
    let mut orig = vec![0_u8; end];
    for i in (0..end).rev() {
        let sym = bwt_in[key];
        orig[i] = sym;
        key = (ranks[key] + first[sym as usize]) as usize;
    }
    Ok(orig)
}

/// Run the BWT and serialize it: a 32 bit key followed by the transformed bytes.
/// The stream always ends on a whole byte, so the trailer is left off.
pub fn encode_block(orig: &[u8]) -> Vec<u8> {
    let (key, bwt) = bwt_encode(orig);

    let mut bw = BitWriter::new(bwt.len() + 5);
    bw.write_u32(key);
    bwt.iter().for_each(|&byte| bw.write_byte(byte));
    let mut out = bw.finalize();
    out.pop();

    debug!("BWT: {} bytes in, key {}.", orig.len(), key);
    out
}

/// Reverse encode_block: read the 32 bit key, then invert the transform on the rest.
pub fn decode_block(data: Vec<u8>) -> io::Result<Vec<u8>> {
    // Mark the last byte as full so the reader takes the whole buffer.
    let mut data = data;
    data.push(0);
    let mut br = BitReader::new(data);

    let key = br.read_u32().ok_or_else(|| {
        Error::new(io::ErrorKind::InvalidData, "BWT stream is too short for its key")
    })?;
    let mut bwt = Vec::with_capacity(br.remaining() / 8);
    while let Some(byte) = br.read_byte() {
        bwt.push(byte);
    }

    debug!("BWT: {} bytes with key {}.", bwt.len(), key);
    bwt_decode(key, &bwt)
}
