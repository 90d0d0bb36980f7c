//! Group Framework
//!
//! Lazily partitions a stream into consecutive groups, restructures the
//! sequence of groups without buffering their contents, and flattens it back
//! into a single stream.

pub mod groups;
pub mod rejoin;
pub mod rules;
pub mod transform;

pub use groups::{Group, GroupStream, Grouping, Groups};
pub use rejoin::{regroup, FoldGroups, Intercalate, Rejoin};
pub use rules::{
    chunks_of, partitions, runs, runs_by, runs_by_adjacent, AdjacentBy, Chunks, GroupingRule,
    Partitions, Runs, RunsBy,
};
pub use transform::{DropGroups, FilterGroups, TakeGroups};
