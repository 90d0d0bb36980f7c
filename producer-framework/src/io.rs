//! Producers over `std::io` readers.
//!
//! A read error ends the stream: `pull` returns `None` and the error is
//! reported by `finish`, so consumers never have to special-case it.

use crate::producer::Producer;
use log::warn;
use std::io::{self, BufRead, Read};

/// Byte producer over a reader. Created by [`bytes`].
#[derive(Debug)]
pub struct Bytes<R> {
    inner: io::Bytes<R>,
    error: Option<io::Error>,
    done: bool,
}

/// Creates a producer yielding the bytes of `reader`.
///
/// Wrap unbuffered readers in a [`std::io::BufReader`] first; every byte is a
/// separate read otherwise.
pub fn bytes<R: Read>(reader: R) -> Bytes<R> {
    Bytes {
        inner: reader.bytes(),
        error: None,
        done: false,
    }
}

impl<R: Read> Producer for Bytes<R> {
    type Item = u8;
    type Output = io::Result<()>;

    fn pull(&mut self) -> Option<u8> {
        if self.done {
            return None;
        }
        match self.inner.next() {
            Some(Ok(byte)) => Some(byte),
            Some(Err(error)) => {
                warn!("byte producer stopped on read error: {}", error);
                self.error = Some(error);
                self.done = true;
                None
            }
            None => {
                self.done = true;
                None
            }
        }
    }

    fn finish(self) -> io::Result<()> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Line producer over a buffered reader. Created by [`lines`].
#[derive(Debug)]
pub struct Lines<B> {
    inner: io::Lines<B>,
    error: Option<io::Error>,
    done: bool,
}

/// Creates a producer yielding the lines of `reader`, without line endings.
pub fn lines<B: BufRead>(reader: B) -> Lines<B> {
    Lines {
        inner: reader.lines(),
        error: None,
        done: false,
    }
}

impl<B: BufRead> Producer for Lines<B> {
    type Item = String;
    type Output = io::Result<()>;

    fn pull(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        match self.inner.next() {
            Some(Ok(line)) => Some(line),
            Some(Err(error)) => {
                warn!("line producer stopped on read error: {}", error);
                self.error = Some(error);
                self.done = true;
                None
            }
            None => {
                self.done = true;
                None
            }
        }
    }

    fn finish(self) -> io::Result<()> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
