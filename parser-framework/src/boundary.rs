use std::fmt;

/// Decides how far a bounded view extends.
///
/// Elements are offered to [`admit`](Boundary::admit) one at a time as the
/// view is drawn, so the split point is found lazily. The first rejected
/// element is returned to the parent context untouched.
pub trait Boundary<T> {
    /// Returns false once no further element can be admitted, so the view
    /// stops without pulling anything more from its parent.
    fn is_open(&self) -> bool {
        true
    }

    /// Returns true if `item` belongs to the bounded prefix.
    fn admit(&mut self, item: &T) -> bool;
}

impl<T, B> Boundary<T> for &mut B
where
    B: Boundary<T> + ?Sized,
{
    fn is_open(&self) -> bool {
        (**self).is_open()
    }

    fn admit(&mut self, item: &T) -> bool {
        (**self).admit(item)
    }
}

/// Admits at most a fixed number of leading elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Take {
    remaining: usize,
}

impl Take {
    /// Number of elements still admissible.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<T> Boundary<T> for Take {
    fn is_open(&self) -> bool {
        self.remaining > 0
    }

    fn admit(&mut self, _item: &T) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Admits the longest leading run satisfying a predicate.
#[derive(Clone)]
pub struct TakeWhile<F> {
    predicate: F,
}

impl<T, F> Boundary<T> for TakeWhile<F>
where
    F: FnMut(&T) -> bool,
{
    fn admit(&mut self, item: &T) -> bool {
        (self.predicate)(item)
    }
}

impl<F> fmt::Debug for TakeWhile<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TakeWhile")
    }
}

/// Admits everything; zooming with it is the same as not zooming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Everything;

impl<T> Boundary<T> for Everything {
    fn admit(&mut self, _item: &T) -> bool {
        true
    }
}

/// Bound to the first `n` elements. `take(0)` never pulls from the parent.
pub fn take(n: usize) -> Take {
    Take { remaining: n }
}

/// Bound to the leading run of elements for which `predicate` holds.
pub fn take_while<F>(predicate: F) -> TakeWhile<F> {
    TakeWhile { predicate }
}

/// The unbounded bound.
pub fn everything() -> Everything {
    Everything
}

/// A bound chosen at run time.
#[derive(Clone)]
pub enum BoundRule<F> {
    /// At most `n` leading elements.
    Count(usize),
    /// The leading run satisfying the predicate.
    Predicate(F),
    /// No bound at all.
    Unbounded,
}

impl<T, F> Boundary<T> for BoundRule<F>
where
    F: FnMut(&T) -> bool,
{
    fn is_open(&self) -> bool {
        !matches!(self, BoundRule::Count(0))
    }

    fn admit(&mut self, item: &T) -> bool {
        match self {
            BoundRule::Count(0) => false,
            BoundRule::Count(n) => {
                *n -= 1;
                true
            }
            BoundRule::Predicate(predicate) => predicate(item),
            BoundRule::Unbounded => true,
        }
    }
}

impl<F> fmt::Debug for BoundRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundRule::Count(n) => f.debug_tuple("Count").field(n).finish(),
            BoundRule::Predicate(_) => f.write_str("Predicate"),
            BoundRule::Unbounded => f.write_str("Unbounded"),
        }
    }
}
