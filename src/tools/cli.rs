use clap::Parser;
use log::{info, warn};
use std::{fmt::Display, fmt::Formatter};

/// Suffix added to compressed files.
pub const SUFFIX: &str = ".bwz";

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Map the numeric -v level (0-5) to a verbosity. Anything above 5 is Trace.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Zip, Unzip, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A block-sorting file compressor: BWT, then MTF, then Huffman coding",
    long_about = None)]
pub struct Args {
    /// File to process. Reads standard input (and writes standard output) if absent
    #[clap()]
    filename: Option<String>,

    /// Compress the input (the default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Decompress the input
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Compress and decompress in memory, checking that the data survives
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Send output to standard out
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Overwrite existing output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Keep (don't delete) input files
    #[clap(short = 'k', long = "keep")]
    keep: bool,

    /// Run length encode before the BWT. The output does not record this, so pass it again when
    /// decompressing or the result is silently wrong
    #[clap(long = "rle")]
    rle: bool,

    /// Sets verbosity. 0 is silent, 5 is chatty
    #[clap(short = 'v', long = "verbosity", default_value_t = 3)]
    v: u8,
}

/// All user settable options that control program behavior.
#[derive(Debug, Clone)]
pub struct Opts {
    /// Name of file to read for input, stdin if None
    pub file: Option<String>,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Don't remove input files after processing
    pub keep_input_files: bool,
    /// Run length encode before the BWT
    pub rle: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl Opts {
    pub fn new() -> Self {
        Self {
            file: None,
            op_mode: Mode::Zip,
            output: Output::Stdout,
            force_overwrite: false,
            keep_input_files: false,
            rle: false,
            verbose: Verbosity::Info,
        }
    }

    /// Put command line information from CLAP into our internal structure.
    pub fn from_args(args: Args) -> Self {
        let mut opts = Opts::new();

        if args.decompress {
            opts.op_mode = Mode::Unzip
        };
        // Test wins over the others, like bzip2
        if args.test {
            opts.op_mode = Mode::Test
        };
        if args.compress && !args.decompress && !args.test {
            opts.op_mode = Mode::Zip
        };
        // Without a file, everything goes to stdout
        if args.filename.is_some() && !args.stdout {
            opts.output = Output::File
        };
        opts.file = args.filename;
        opts.force_overwrite = args.force;
        opts.keep_input_files = args.keep;
        opts.rle = args.rle;
        opts.verbose = Verbosity::from_level(args.v);
        opts
    }

    /// Name of the file to write, if output goes to a file.
    pub fn output_file(&self) -> Option<String> {
        if self.output != Output::File {
            return None;
        }
        let file = self.file.as_ref()?;
        match self.op_mode {
            Mode::Zip => Some(format!("{}{}", file, SUFFIX)),
            Mode::Unzip => match file.strip_suffix(SUFFIX) {
                Some(stem) if !stem.is_empty() => Some(stem.to_string()),
                _ => Some(format!("{}.out", file)),
            },
            Mode::Test => None,
        }
    }
}

impl Default for Opts {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the command line, set the log level and report the settings.
pub fn opts_init() -> Opts {
    let opts = Opts::from_args(Args::parse());

    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    // Below we report initialization status to the user
    info!("---- bwtzip Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    match &opts.file {
        Some(s) => info!("Getting input from the file {}", s),
        None => info!("Getting input from stdin"),
    }
    match opts.output_file() {
        Some(s) => info!("Sending output to the file {}", s),
        None if opts.op_mode != Mode::Test => warn!("Sending output to stdout"),
        None => {}
    }
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    if opts.keep_input_files {
        info!("Keeping input files")
    };
    if opts.rle {
        info!("Run length encoding enabled")
    };
    info!("---- bwtzip Initialization End ----");
    opts
}
