//! Run-length encodes a byte stream.
//!
//! Prints `count<TAB>byte` for every run of equal bytes, as each run ends.

use clap::Parser;
use std::io::{self, BufWriter, Write};
use stream_example::{write_runs, InputArgs, Result, WindowArgs};

/// CLI arguments for rle
#[derive(Parser, Debug)]
#[command(name = "rle")]
#[command(version)]
#[command(about = "Print the runs of equal bytes of the input", long_about = None)]
struct Cli {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    window: WindowArgs,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("window: {:?}", cli.window);

    let input = cli.input.open()?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = write_runs(input, &mut out, &cli.window)?;
    out.flush()?;

    log::debug!("printed {} runs", written);
    Ok(())
}
