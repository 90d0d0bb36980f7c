use parser_framework::Boundary;

/// A [`Boundary`] that can be reused for consecutive groups.
///
/// Every rule shipped here admits the first element offered after a reset,
/// so a non-empty stream always yields a non-empty group.
pub trait GroupingRule<T>: Boundary<T> {
    /// Forgets the current group; the next admitted element opens a new one.
    fn reset(&mut self);
}

/// Groups consecutive elements related to the first element of their group.
#[derive(Clone)]
pub struct RunsBy<T, F> {
    first: Option<T>,
    same: F,
}

/// Groups runs of equal elements.
pub type Runs<T> = RunsBy<T, fn(&T, &T) -> bool>;

impl<T, F> Boundary<T> for RunsBy<T, F>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    fn admit(&mut self, item: &T) -> bool {
        match &self.first {
            Some(first) => (self.same)(first, item),
            None => {
                self.first = Some(item.clone());
                true
            }
        }
    }
}

impl<T, F> GroupingRule<T> for RunsBy<T, F>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    fn reset(&mut self) {
        self.first = None;
    }
}

/// Groups consecutive elements related to their predecessor.
#[derive(Clone)]
pub struct AdjacentBy<T, F> {
    previous: Option<T>,
    same: F,
}

impl<T, F> Boundary<T> for AdjacentBy<T, F>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    fn admit(&mut self, item: &T) -> bool {
        let admitted = match &self.previous {
            Some(previous) => (self.same)(previous, item),
            None => true,
        };
        if admitted {
            self.previous = Some(item.clone());
        }
        admitted
    }
}

impl<T, F> GroupingRule<T> for AdjacentBy<T, F>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    fn reset(&mut self) {
        self.previous = None;
    }
}

/// Groups maximal runs on which a predicate gives the same answer, so the
/// groups alternate between satisfying and non-satisfying runs.
#[derive(Clone)]
pub struct Partitions<F> {
    side: Option<bool>,
    predicate: F,
}

impl<T, F> Boundary<T> for Partitions<F>
where
    F: FnMut(&T) -> bool,
{
    fn admit(&mut self, item: &T) -> bool {
        let side = (self.predicate)(item);
        match self.side {
            Some(current) => current == side,
            None => {
                self.side = Some(side);
                true
            }
        }
    }
}

impl<T, F> GroupingRule<T> for Partitions<F>
where
    F: FnMut(&T) -> bool,
{
    fn reset(&mut self) {
        self.side = None;
    }
}

/// Groups of a fixed size; the last group may be shorter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunks {
    size: usize,
    left: usize,
}

impl Chunks {
    /// Returns the chunk size.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl<T> Boundary<T> for Chunks {
    fn is_open(&self) -> bool {
        self.left > 0
    }

    fn admit(&mut self, _item: &T) -> bool {
        if self.left == 0 {
            return false;
        }
        self.left -= 1;
        true
    }
}

impl<T> GroupingRule<T> for Chunks {
    fn reset(&mut self) {
        self.left = self.size;
    }
}

/// Runs of equal elements: `[1, 1, 2, 3, 3]` groups as `[1, 1]`, `[2]`, `[3, 3]`.
pub fn runs<T: PartialEq>() -> Runs<T> {
    RunsBy {
        first: None,
        same: <T as PartialEq>::eq,
    }
}

/// Runs of elements for which `same(first_of_group, element)` holds.
pub fn runs_by<T, F>(same: F) -> RunsBy<T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    RunsBy { first: None, same }
}

/// Runs of elements for which `same(previous, element)` holds.
pub fn runs_by_adjacent<T, F>(same: F) -> AdjacentBy<T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    AdjacentBy {
        previous: None,
        same,
    }
}

/// Alternating runs of elements satisfying and not satisfying `predicate`.
pub fn partitions<F>(predicate: F) -> Partitions<F> {
    Partitions {
        side: None,
        predicate,
    }
}

/// Chunks of `size` elements. A size of zero is treated as one.
pub fn chunks_of(size: usize) -> Chunks {
    let size = size.max(1);
    Chunks { size, left: size }
}
