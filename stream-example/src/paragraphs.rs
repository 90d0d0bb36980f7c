use crate::config::WindowArgs;
use crate::error::Result;
use group_framework::{partitions, GroupStream, Grouping};
use parser_framework::{Cursor, ParseContext, Producer};
use producer_framework::io::lines;
use std::io::{BufRead, Write};

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Copies the paragraphs selected by `window` from `input` to `out`, one
/// blank line between paragraphs. Returns the number of paragraphs written.
///
/// A paragraph is a run of non-blank lines. Input after the last selected
/// paragraph is not read.
pub fn write_paragraphs<R, W>(input: R, out: &mut W, window: &WindowArgs) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut cursor = Cursor::new(lines(input));
    while cursor.draw_if(|line: &String| is_blank(line)).is_some() {}

    // Text and blank runs alternate from here, text first.
    let mut selected = cursor
        .groups(partitions(|line: &String| is_blank(line)))
        .filter_groups(|index| index % 2 == 0)
        .drop_groups(window.skip)
        .take_groups(window.limit());

    let mut written = 0;
    while let Some(mut paragraph) = selected.next_group() {
        if written > 0 {
            writeln!(out)?;
        }
        while let Some(line) = paragraph.draw() {
            writeln!(out, "{}", line)?;
        }
        written += 1;
    }

    let (_, source) = selected.into_rest().into_parts();
    source.finish()?;
    Ok(written)
}
