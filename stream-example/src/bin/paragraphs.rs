//! Prints a window of the paragraphs of a text.
//!
//! Paragraphs are runs of non-blank lines. `--skip` and `--take` count
//! paragraphs; reading stops once the last selected paragraph is printed.

use clap::Parser;
use std::io::{self, BufWriter, Write};
use stream_example::{write_paragraphs, InputArgs, Result, WindowArgs};

/// CLI arguments for paragraphs
#[derive(Parser, Debug)]
#[command(name = "paragraphs")]
#[command(version)]
#[command(about = "Print a window of the paragraphs of a text", long_about = None)]
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
    let written = write_paragraphs(input, &mut out, &cli.window)?;
    out.flush()?;

    log::debug!("printed {} paragraphs", written);
    Ok(())
}
