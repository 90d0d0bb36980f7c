use crate::config::WindowArgs;
use crate::error::Result;
use group_framework::{runs, GroupStream, Grouping};
use parser_framework::{Cursor, Producer};
use producer_framework::io::bytes;
use std::fmt;
use std::io::{Read, Write};

/// A run of equal bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Run {
    pub count: usize,
    pub byte: u8,
}

impl Run {
    /// Extends the run by one `byte`.
    pub fn push(self, byte: u8) -> Self {
        Self {
            count: self.count + 1,
            byte,
        }
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.count, self.byte.escape_ascii())
    }
}

/// Writes one line per run of equal bytes in `input`, for the runs selected
/// by `window`. Returns the number of runs written.
///
/// Runs are written as soon as they end, so the output keeps up with an
/// unbounded input.
pub fn write_runs<R, W>(input: R, out: &mut W, window: &WindowArgs) -> Result<usize>
where
    R: Read,
    W: Write,
{
    let mut counted = Cursor::new(bytes(input))
        .groups(runs())
        .drop_groups(window.skip)
        .take_groups(window.limit())
        .fold_groups(Run::default, Run::push);

    let mut written = 0;
    while let Some(run) = counted.pull() {
        writeln!(out, "{}", run)?;
        written += 1;
    }

    let (_, source) = counted.finish().into_parts();
    source.finish()?;
    Ok(written)
}
