use crate::rejoin::{regroup, FoldGroups, Intercalate, Rejoin};
use crate::rules::GroupingRule;
use crate::transform::{DropGroups, FilterGroups, TakeGroups};
use log::trace;
use parser_framework::{Cursor, ParseContext, Producer, View};

/// A stream partitioned into consecutive groups, consumed one group at a time.
///
/// Only the currently open group can be read. Opening the next group closes
/// the current one: whatever it did not consume, and anything pushed back
/// into it, becomes the start of what follows, so abandoning a group never
/// loses elements. Group contents are never buffered.
pub trait GroupStream {
    type Item;

    /// What remains once the stream of groups is given up.
    type Rest;

    /// Closes the current group and opens the next one, returning its index
    /// in the untransformed sequence, or `None` when there are no more groups.
    fn open_next(&mut self) -> Option<usize>;

    /// Draws from the open group.
    fn draw_in_group(&mut self) -> Option<Self::Item>;

    /// Pushes an element back in front of the open group.
    ///
    /// The element is never lost. Once `open_next` has returned `None`,
    /// [`Groups`] hands it out again from the current position, whereas a
    /// stream limited by `take_groups` keeps it for `into_rest`.
    fn undraw_in_group(&mut self, item: Self::Item);

    /// Peeks into the open group.
    fn peek_in_group(&mut self) -> Option<&Self::Item>;

    /// Net number of elements consumed from the open group.
    fn group_offset(&self) -> usize;

    /// Gives up the groups and returns the rest of the stream, starting with
    /// the unread part of the open group.
    fn into_rest(self) -> Self::Rest
    where
        Self: Sized;

    /// Opens the next group and returns a handle to it.
    ///
    /// Where a group ends depends on what was read from the previous one:
    /// its unread tail is regrouped from scratch by the rule. With `runs()`
    /// the tail of a partly read run becomes a group of its own, with
    /// `chunks_of` it starts the next chunk. Group counts and indices are
    /// therefore only stable when every group is read to its end.
    fn next_group(&mut self) -> Option<Group<'_, Self>>
    where
        Self: Sized,
    {
        let index = self.open_next()?;
        Some(Group {
            stream: self,
            index,
        })
    }

    /// Keeps only the first `n` groups.
    ///
    /// Groups after the limit are not read; they remain in [`into_rest`](GroupStream::into_rest).
    fn take_groups(self, n: usize) -> TakeGroups<Self>
    where
        Self: Sized,
    {
        TakeGroups::new(self, n)
    }

    /// Skips the first `n` groups, draining their contents.
    ///
    /// The skipped elements are consumed and cannot be recovered.
    fn drop_groups(self, n: usize) -> DropGroups<Self>
    where
        Self: Sized,
    {
        DropGroups::new(self, n)
    }

    /// Keeps only groups whose index satisfies `select`, draining the others.
    fn filter_groups<F>(self, select: F) -> FilterGroups<Self, F>
    where
        Self: Sized,
        F: FnMut(usize) -> bool,
    {
        FilterGroups::new(self, select)
    }

    /// Flattens the groups back into one stream.
    fn concat(self) -> Rejoin<Self>
    where
        Self: Sized,
    {
        Rejoin::new(self)
    }

    /// Flattens the groups with `separator` between consecutive groups.
    fn intercalate(self, separator: Vec<Self::Item>) -> Intercalate<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Intercalate::new(self, separator)
    }

    /// Folds every group into one value, streaming one value per group.
    fn fold_groups<A, I, F>(self, init: I, step: F) -> FoldGroups<Self, I, F>
    where
        Self: Sized,
        I: FnMut() -> A,
        F: FnMut(A, Self::Item) -> A,
    {
        FoldGroups::new(self, init, step)
    }
}

impl<'a, S> GroupStream for &'a mut S
where
    S: GroupStream,
{
    type Item = S::Item;
    type Rest = &'a mut S;

    fn open_next(&mut self) -> Option<usize> {
        (**self).open_next()
    }

    fn draw_in_group(&mut self) -> Option<Self::Item> {
        (**self).draw_in_group()
    }

    fn undraw_in_group(&mut self, item: Self::Item) {
        (**self).undraw_in_group(item)
    }

    fn peek_in_group(&mut self) -> Option<&Self::Item> {
        (**self).peek_in_group()
    }

    fn group_offset(&self) -> usize {
        (**self).group_offset()
    }

    fn into_rest(self) -> &'a mut S {
        self
    }
}

/// Handle to the open group of a [`GroupStream`].
pub struct Group<'a, S> {
    stream: &'a mut S,
    index: usize,
}

impl<S: GroupStream> Group<'_, S> {
    /// Position of this group in the untransformed sequence.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<S: GroupStream> ParseContext for Group<'_, S> {
    type Item = S::Item;

    fn draw(&mut self) -> Option<Self::Item> {
        self.stream.draw_in_group()
    }

    fn undraw(&mut self, item: Self::Item) {
        self.stream.undraw_in_group(item)
    }

    fn peek(&mut self) -> Option<&Self::Item> {
        self.stream.peek_in_group()
    }

    fn offset(&self) -> usize {
        self.stream.group_offset()
    }
}

impl<S: GroupStream> Producer for Group<'_, S> {
    type Item = S::Item;
    type Output = ();

    fn pull(&mut self) -> Option<Self::Item> {
        self.draw()
    }

    fn finish(self) {}
}

/// A context split into groups by a [`GroupingRule`].
///
/// Each group is a bounded view of the context that restarts where the
/// previous group stopped, so the split points are found while reading.
pub struct Groups<C, G> {
    view: View<C, G>,
    opened: usize,
    active: bool,
}

impl<C, G> Groups<C, G>
where
    C: ParseContext,
    G: GroupingRule<C::Item>,
{
    /// Partitions `context` with `rule`. Nothing is read until the first
    /// group is opened.
    pub fn new(context: C, rule: G) -> Self {
        Self {
            view: View::new(context, rule),
            opened: 0,
            active: false,
        }
    }

    /// Number of groups opened so far.
    pub fn opened(&self) -> usize {
        self.opened
    }
}

impl<C, G> GroupStream for Groups<C, G>
where
    C: ParseContext,
    G: GroupingRule<C::Item>,
{
    type Item = C::Item;
    type Rest = C;

    fn open_next(&mut self) -> Option<usize> {
        self.view.restart();
        self.view.bound_mut().reset();
        self.active = self.view.peek().is_some();
        if !self.active {
            return None;
        }
        let index = self.opened;
        self.opened += 1;
        trace!("opened group {}", index);
        Some(index)
    }

    fn draw_in_group(&mut self) -> Option<Self::Item> {
        if !self.active {
            return None;
        }
        self.view.draw()
    }

    fn undraw_in_group(&mut self, item: Self::Item) {
        self.active = true;
        self.view.undraw(item)
    }

    fn peek_in_group(&mut self) -> Option<&Self::Item> {
        if !self.active {
            return None;
        }
        self.view.peek()
    }

    fn group_offset(&self) -> usize {
        self.view.offset()
    }

    fn into_rest(self) -> C {
        self.view.resume()
    }
}

/// Grouping entry points for every [`ParseContext`].
pub trait Grouping: ParseContext + Sized {
    /// Partitions this context into groups.
    fn groups<G>(self, rule: G) -> Groups<Self, G>
    where
        G: GroupingRule<Self::Item>,
    {
        Groups::new(self, rule)
    }

    /// Groups this context, restructures the groups with `transform`, and
    /// runs `f` on the flattened result. Afterwards this context continues
    /// with everything `f` left unread or pushed back, followed by the groups
    /// `transform` did not read.
    fn regroup<'a, G, S, T, F, A>(&'a mut self, rule: G, transform: T, f: F) -> A
    where
        G: GroupingRule<Self::Item>,
        T: FnOnce(Groups<&'a mut Self, G>) -> S,
        S: GroupStream<Item = Self::Item, Rest = &'a mut Self>,
        F: FnOnce(&mut Cursor<Rejoin<S>>) -> A,
    {
        let mut cursor = Cursor::new(regroup(self, rule, transform));
        let output = f(&mut cursor);
        let (pending, rejoined) = cursor.into_parts();
        let outer = rejoined.finish();
        for item in pending {
            outer.undraw(item);
        }
        output
    }
}

impl<C: ParseContext> Grouping for C {}
