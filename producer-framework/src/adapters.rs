use crate::producer::Producer;
use std::iter::Fuse;

/// A producer backed by an [`Iterator`], finishing with a fixed result.
#[derive(Debug, Clone)]
pub struct Iter<I, R> {
    iter: Fuse<I>,
    output: R,
}

impl<I, R> Producer for Iter<I, R>
where
    I: Iterator,
{
    type Item = I::Item;
    type Output = R;

    fn pull(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn finish(self) -> R {
        self.output
    }
}

/// Creates a producer over `iter` whose final result is `()`.
///
/// Infinite iterators are fine: nothing is pulled ahead of demand.
pub fn from_iter<I>(iter: I) -> Iter<I::IntoIter, ()>
where
    I: IntoIterator,
{
    from_iter_with(iter, ())
}

/// Creates a producer over `iter` that finishes with `output`.
pub fn from_iter_with<I, R>(iter: I, output: R) -> Iter<I::IntoIter, R>
where
    I: IntoIterator,
{
    Iter {
        iter: iter.into_iter().fuse(),
        output,
    }
}

/// A producer with no elements that finishes with `output`.
pub fn empty<T, R>(output: R) -> Iter<std::iter::Empty<T>, R> {
    from_iter_with(std::iter::empty(), output)
}

/// A producer yielding exactly one element.
pub fn once<T>(item: T) -> Iter<std::option::IntoIter<T>, ()> {
    from_iter(Some(item))
}
