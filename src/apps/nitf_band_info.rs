use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use rayon::prelude::*;

use nitf_band::base::StreamReader;
use nitf_band::model::nitf::ImageBands;

/// Print the image band descriptors found at an offset in NITF files.
#[derive(Debug, Parser)]
#[command(name = "nitf-band-info", version)]
struct Cli {
    /// Byte offset of the first band descriptor (IREPBAND1).
    #[arg(long, default_value_t = 0)]
    offset: u64,

    /// Number of consecutive bands to read.
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Set the log level.
    #[arg(long, default_value_t = LevelFilter::Warn)]
    loglevel: LevelFilter,

    /// Input files.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
}

fn read_bands(path: &Path, offset: u64, count: usize) -> Result<ImageBands> {
    let mut file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    file.seek(SeekFrom::Start(offset))?;
    info!("{}: reading {} bands at offset {}", path.display(), count, offset);

    let mut reader = StreamReader::with_position(BufReader::new(file), offset);
    ImageBands::parse(&mut reader, count).with_context(|| format!("decoding {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(cli.loglevel)
        .try_init()?;

    // One reader per file; files are independent so they decode in parallel.
    let results: Vec<_> = cli
        .files
        .par_iter()
        .map(|path| read_bands(path, cli.offset, cli.count))
        .collect();

    for (path, bands) in cli.files.iter().zip(results) {
        let bands = bands?;
        println!("{}{}", path.display(), bands);
    }

    Ok(())
}
