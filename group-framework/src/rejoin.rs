use crate::groups::{GroupStream, Groups};
use crate::rules::GroupingRule;
use parser_framework::ParseContext;
use producer_framework::Producer;

/// Flattens a [`GroupStream`] into a single producer.
///
/// Elements are passed through as they are read, group after group; the
/// final result is the stream's [`into_rest`](GroupStream::into_rest).
pub struct Rejoin<S> {
    stream: S,
    active: bool,
}

impl<S: GroupStream> Rejoin<S> {
    /// Creates a producer over the concatenated groups of `stream`.
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            active: false,
        }
    }
}

impl<S: GroupStream> Producer for Rejoin<S> {
    type Item = S::Item;
    type Output = S::Rest;

    fn pull(&mut self) -> Option<Self::Item> {
        loop {
            if self.active {
                if let Some(item) = self.stream.draw_in_group() {
                    return Some(item);
                }
            }
            self.active = self.stream.open_next().is_some();
            if !self.active {
                return None;
            }
        }
    }

    fn finish(self) -> S::Rest {
        self.stream.into_rest()
    }
}

enum Phase {
    Start,
    Group,
    Separator(usize),
    Done,
}

/// Flattens a [`GroupStream`], inserting a separator between groups.
/// Created by [`GroupStream::intercalate`].
pub struct Intercalate<S: GroupStream> {
    stream: S,
    separator: Vec<S::Item>,
    phase: Phase,
}

impl<S> Intercalate<S>
where
    S: GroupStream,
    S::Item: Clone,
{
    pub(crate) fn new(stream: S, separator: Vec<S::Item>) -> Self {
        Self {
            stream,
            separator,
            phase: Phase::Start,
        }
    }
}

impl<S> Producer for Intercalate<S>
where
    S: GroupStream,
    S::Item: Clone,
{
    type Item = S::Item;
    type Output = S::Rest;

    fn pull(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                Phase::Start => {
                    self.phase = match self.stream.open_next() {
                        Some(_) => Phase::Group,
                        None => Phase::Done,
                    };
                }
                Phase::Group => {
                    if let Some(item) = self.stream.draw_in_group() {
                        return Some(item);
                    }
                    self.phase = match self.stream.open_next() {
                        Some(_) => Phase::Separator(0),
                        None => Phase::Done,
                    };
                }
                Phase::Separator(at) => match self.separator.get(at) {
                    Some(item) => {
                        self.phase = Phase::Separator(at + 1);
                        return Some(item.clone());
                    }
                    None => self.phase = Phase::Group,
                },
                Phase::Done => return None,
            }
        }
    }

    fn finish(self) -> S::Rest {
        self.stream.into_rest()
    }
}

/// One folded value per group. Created by [`GroupStream::fold_groups`].
///
/// Each pull reads exactly one group, so the values stream even when the
/// groups never end.
pub struct FoldGroups<S, I, F> {
    stream: S,
    init: I,
    step: F,
}

impl<S, I, F> FoldGroups<S, I, F> {
    pub(crate) fn new(stream: S, init: I, step: F) -> Self {
        Self { stream, init, step }
    }
}

impl<S, I, F, A> Producer for FoldGroups<S, I, F>
where
    S: GroupStream,
    I: FnMut() -> A,
    F: FnMut(A, S::Item) -> A,
{
    type Item = A;
    type Output = S::Rest;

    fn pull(&mut self) -> Option<A> {
        self.stream.open_next()?;
        let mut acc = (self.init)();
        while let Some(item) = self.stream.draw_in_group() {
            acc = (self.step)(acc, item);
        }
        Some(acc)
    }

    fn finish(self) -> S::Rest {
        self.stream.into_rest()
    }
}

/// Groups `context` with `rule`, restructures the groups with `transform`
/// and flattens the result, in one lazy pass.
///
/// Equivalent to `transform(Groups::new(context, rule)).concat()`.
pub fn regroup<C, G, S, T>(context: C, rule: G, transform: T) -> Rejoin<S>
where
    C: ParseContext,
    G: GroupingRule<C::Item>,
    T: FnOnce(Groups<C, G>) -> S,
    S: GroupStream<Item = C::Item>,
{
    Rejoin::new(transform(Groups::new(context, rule)))
}
