use std::io::{self, Error};

use log::{error, info};

use super::compress::compress_bytes;
use super::data_io::read_input;
use super::decompress::decompress_bytes;
use crate::tools::cli::Opts;

/// Compress then decompress the input in memory and check that nothing changed.
/// Nothing is written.
pub fn test_roundtrip(opts: &Opts) -> io::Result<()> {
    let data = read_input(opts)?;
    info!(
        "Round trip with run length encoding {}.",
        if opts.rle { "on" } else { "off" }
    );
    let compressed = compress_bytes(&data, opts.rle);
    let size = compressed.len();
    let restored = decompress_bytes(compressed, opts.rle)?;

    if restored != data {
        let at = restored
            .iter()
            .zip(data.iter())
            .position(|(a, b)| a != b)
            .unwrap_or_else(|| restored.len().min(data.len()));
        error!("Round trip failed: output differs from input at byte {}.", at);
        return Err(Error::new(
            io::ErrorKind::InvalidData,
            format!("Round trip failed at byte {}", at),
        ));
    }

    if data.is_empty() {
        info!("Round trip ok: empty input.");
    } else {
        info!(
            "Round trip ok: {} bytes -> {} bytes ({:.1}%).",
            data.len(),
            size,
            size as f64 * 100.0 / data.len() as f64
        );
    }
    Ok(())
}
