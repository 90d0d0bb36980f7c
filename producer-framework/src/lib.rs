//! Producer Framework
//!
//! The pull-based sequence abstraction shared by `parser-framework` and
//! `group-framework`: a producer yields elements one at a time and, once
//! exhausted, hands back a final result.

pub mod adapters;
#[cfg(feature = "io")]
pub mod io;
pub mod producer;

pub use adapters::{empty, from_iter, from_iter_with, once, Iter};
pub use producer::{Elements, Producer};
