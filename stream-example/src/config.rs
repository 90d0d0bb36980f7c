//! Command-line arguments shared by the example tools.

use crate::error::{ExampleError, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Which groups to print.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowArgs {
    /// Number of leading groups to skip
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub skip: usize,

    /// Maximum number of groups to print after skipping
    #[arg(long, value_name = "N")]
    pub take: Option<usize>,
}

impl WindowArgs {
    /// Number of groups to keep after skipping.
    pub fn limit(&self) -> usize {
        self.take.unwrap_or(usize::MAX)
    }
}

/// Where to read from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Input file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,
}

impl InputArgs {
    /// Opens the input as a buffered reader.
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match &self.path {
            Some(path) => {
                let file = File::open(path).map_err(|source| ExampleError::Open {
                    path: path.clone(),
                    source,
                })?;
                log::debug!("reading {}", path.display());
                Ok(Box::new(BufReader::new(file)))
            }
            None => Ok(Box::new(BufReader::new(io::stdin()))),
        }
    }
}
