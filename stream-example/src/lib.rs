//! Command-line demonstrations of grouping and rejoining streamed input.
//!
//! Both tools read their input lazily and stop reading as soon as the
//! requested window of groups has been printed.

pub mod config;
pub mod error;
pub mod paragraphs;
pub mod rle;

pub use config::{InputArgs, WindowArgs};
pub use error::{ExampleError, Result};
pub use paragraphs::write_paragraphs;
pub use rle::{write_runs, Run};
