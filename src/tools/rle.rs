//! Optional run length stage, applied before the BWT when requested.
//!
//! Each group starts with a signed header byte. A positive header k (1-127) is followed by one byte
//! that is repeated k times. A negative header -k (k = 1-128) is followed by k literal bytes.
//!
use std::io::{self, Error};

use log::debug;

const MAX_RUN: usize = 127;
const MAX_LITERALS: usize = 128;

/// Length of the run of identical bytes starting at data[start], capped at MAX_RUN.
fn run_length(data: &[u8], start: usize) -> usize {
    data[start..]
        .iter()
        .take(MAX_RUN)
        .take_while(|&&b| b == data[start])
        .count()
}

/// Run length encode the data. Runs of 2 or more bytes are packed, everything else is stored as
/// literal groups.
pub fn rle_encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() + data.len() / MAX_LITERALS + 1);
    let mut literals: Vec<u8> = Vec::with_capacity(MAX_LITERALS);
    let mut i = 0;

    while i < data.len() {
        let run = run_length(data, i);
        if run > 1 {
            flush_literals(&mut out, &mut literals);
            out.push(run as u8);
            out.push(data[i]);
            i += run;
        } else {
            literals.push(data[i]);
            if literals.len() == MAX_LITERALS {
                flush_literals(&mut out, &mut literals);
            }
            i += 1;
        }
    }
    flush_literals(&mut out, &mut literals);

    debug!("RLE: {} bytes in, {} bytes out.", data.len(), out.len());
    out
}

/// Write a literal group, if there is one, and empty the literal queue.
fn flush_literals(out: &mut Vec<u8>, literals: &mut Vec<u8>) {
    if literals.is_empty() {
        return;
    }
    out.push((-(literals.len() as i16)) as u8);
    out.append(literals);
}

/// Expand run length encoded data.
pub fn rle_decode(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut out = Vec::with_capacity(data.len() * 2);
    let mut i = 0;

    while i < data.len() {
        let header = data[i] as i8;
        if header > 0 {
            let sym = *data.get(i + 1).ok_or_else(truncated)?;
            out.extend(std::iter::repeat(sym).take(header as usize));
            i += 2;
        } else {
            let count = header.unsigned_abs() as usize;
            let group = data.get(i + 1..i + 1 + count).ok_or_else(truncated)?;
            out.extend_from_slice(group);
            i += 1 + count;
        }
    }
    Ok(out)
}

fn truncated() -> Error {
    Error::new(io::ErrorKind::InvalidData, "RLE stream ends inside a group")
}
