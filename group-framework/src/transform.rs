//! Restructuring a [`GroupStream`] by group index, without reading the
//! contents of the groups that are kept.

use crate::groups::GroupStream;
use log::debug;

fn drain_group<S: GroupStream>(stream: &mut S) -> usize {
    let mut drained = 0;
    while stream.draw_in_group().is_some() {
        drained += 1;
    }
    drained
}

/// The first `n` groups of a stream. Created by [`GroupStream::take_groups`].
pub struct TakeGroups<S> {
    inner: S,
    remaining: usize,
    active: bool,
}

impl<S: GroupStream> TakeGroups<S> {
    pub(crate) fn new(inner: S, n: usize) -> Self {
        Self {
            inner,
            remaining: n,
            active: false,
        }
    }
}

impl<S: GroupStream> GroupStream for TakeGroups<S> {
    type Item = S::Item;
    type Rest = S::Rest;

    fn open_next(&mut self) -> Option<usize> {
        self.active = false;
        if self.remaining == 0 {
            return None;
        }
        let index = self.inner.open_next()?;
        self.remaining -= 1;
        self.active = true;
        Some(index)
    }

    fn draw_in_group(&mut self) -> Option<Self::Item> {
        if !self.active {
            return None;
        }
        self.inner.draw_in_group()
    }

    fn undraw_in_group(&mut self, item: Self::Item) {
        self.inner.undraw_in_group(item)
    }

    fn peek_in_group(&mut self) -> Option<&Self::Item> {
        if !self.active {
            return None;
        }
        self.inner.peek_in_group()
    }

    fn group_offset(&self) -> usize {
        self.inner.group_offset()
    }

    fn into_rest(self) -> S::Rest {
        self.inner.into_rest()
    }
}

/// A stream without its first `n` groups. Created by [`GroupStream::drop_groups`].
pub struct DropGroups<S> {
    inner: S,
    skip: usize,
}

impl<S: GroupStream> DropGroups<S> {
    pub(crate) fn new(inner: S, n: usize) -> Self {
        Self { inner, skip: n }
    }
}

impl<S: GroupStream> GroupStream for DropGroups<S> {
    type Item = S::Item;
    type Rest = S::Rest;

    fn open_next(&mut self) -> Option<usize> {
        while self.skip > 0 {
            let index = self.inner.open_next()?;
            self.skip -= 1;
            let drained = drain_group(&mut self.inner);
            debug!("dropped group {} ({} elements)", index, drained);
        }
        self.inner.open_next()
    }

    fn draw_in_group(&mut self) -> Option<Self::Item> {
        self.inner.draw_in_group()
    }

    fn undraw_in_group(&mut self, item: Self::Item) {
        self.inner.undraw_in_group(item)
    }

    fn peek_in_group(&mut self) -> Option<&Self::Item> {
        self.inner.peek_in_group()
    }

    fn group_offset(&self) -> usize {
        self.inner.group_offset()
    }

    fn into_rest(self) -> S::Rest {
        self.inner.into_rest()
    }
}

/// The groups of a stream whose index is selected.
/// Created by [`GroupStream::filter_groups`].
pub struct FilterGroups<S, F> {
    inner: S,
    select: F,
}

impl<S, F> FilterGroups<S, F>
where
    S: GroupStream,
    F: FnMut(usize) -> bool,
{
    pub(crate) fn new(inner: S, select: F) -> Self {
        Self { inner, select }
    }
}

impl<S, F> GroupStream for FilterGroups<S, F>
where
    S: GroupStream,
    F: FnMut(usize) -> bool,
{
    type Item = S::Item;
    type Rest = S::Rest;

    fn open_next(&mut self) -> Option<usize> {
        loop {
            let index = self.inner.open_next()?;
            if (self.select)(index) {
                return Some(index);
            }
            let drained = drain_group(&mut self.inner);
            debug!("filtered out group {} ({} elements)", index, drained);
        }
    }

    fn draw_in_group(&mut self) -> Option<Self::Item> {
        self.inner.draw_in_group()
    }

    fn undraw_in_group(&mut self, item: Self::Item) {
        self.inner.undraw_in_group(item)
    }

    fn peek_in_group(&mut self) -> Option<&Self::Item> {
        self.inner.peek_in_group()
    }

    fn group_offset(&self) -> usize {
        self.inner.group_offset()
    }

    fn into_rest(self) -> S::Rest {
        self.inner.into_rest()
    }
}
