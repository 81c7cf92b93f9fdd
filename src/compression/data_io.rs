use std::fs::{self, OpenOptions};
use std::io::{self, Error, Read, Write};

use log::{debug, info};

use crate::tools::cli::Opts;

/// Read the whole input: the file named in opts, or stdin.
pub fn read_input(opts: &Opts) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    match &opts.file {
        Some(fname) => {
            data = fs::read(fname)?;
            debug!("Read {} bytes from {}.", data.len(), fname);
        }
        None => {
            io::stdin().lock().read_to_end(&mut data)?;
            debug!("Read {} bytes from stdin.", data.len());
        }
    }
    Ok(data)
}

/// Write the whole output to the output file, or stdout. An existing file is only
/// replaced when force_overwrite is set.
pub fn write_output(opts: &Opts, data: &[u8]) -> io::Result<()> {
    match opts.output_file() {
        Some(fname) => {
            let mut options = OpenOptions::new();
            options.write(true);
            if opts.force_overwrite {
                options.create(true).truncate(true);
            } else {
                options.create_new(true);
            }
            let mut f_out = options.open(&fname).map_err(|e| {
                if e.kind() == io::ErrorKind::AlreadyExists {
                    Error::new(
                        e.kind(),
                        format!("Output file {} already exists. Use -f to overwrite it.", fname),
                    )
                } else {
                    e
                }
            })?;
            f_out.write_all(data)?;
            info!("Wrote {} bytes to {}.", data.len(), fname);
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(data)?;
            out.flush()?;
        }
    }
    Ok(())
}

/// Delete the input file after a file to file run, unless asked to keep it.
pub fn remove_input(opts: &Opts) -> io::Result<()> {
    if opts.keep_input_files || opts.output_file().is_none() {
        return Ok(());
    }
    if let Some(fname) = &opts.file {
        fs::remove_file(fname)?;
        info!("Removed input file {}.", fname);
    }
    Ok(())
}
