/// A lazily advancing, linearly consumed source of elements that ends with a
/// final result.
///
/// A producer is a resumable value: whatever has not been pulled yet is still
/// owned by the producer, so it can be handed to another consumer at any point
/// of the stream.
pub trait Producer {
    /// The elements produced.
    type Item;

    /// The final result, available once the elements are exhausted.
    type Output;

    /// Pulls the next element, or `None` once the producer is exhausted.
    ///
    /// Implementations must keep returning `None` after the first `None`.
    fn pull(&mut self) -> Option<Self::Item>;

    /// Consumes the producer and returns its final result.
    ///
    /// Elements that were never pulled are abandoned, unless the
    /// implementation documents otherwise (bounded views return their
    /// continuation here, which still owns them).
    fn finish(self) -> Self::Output
    where
        Self: Sized;

    /// Borrows the producer as an [`Iterator`] over its remaining elements.
    fn elements(&mut self) -> Elements<'_, Self> {
        Elements { producer: self }
    }

    /// Pulls every remaining element, discarding them, and returns the result.
    fn drain(mut self) -> Self::Output
    where
        Self: Sized,
    {
        while self.pull().is_some() {}
        self.finish()
    }

    /// Materializes every remaining element together with the final result.
    ///
    /// Memory grows with the input: only use this on bounded producers.
    fn collect_all(mut self) -> (Vec<Self::Item>, Self::Output)
    where
        Self: Sized,
    {
        let items = self.elements().collect();
        (items, self.finish())
    }
}

/// Iterator over the remaining elements of a borrowed producer.
///
/// Created by [`Producer::elements`]. The producer stays usable afterwards,
/// positioned after the last element the iterator returned.
#[derive(Debug)]
pub struct Elements<'a, P: ?Sized> {
    producer: &'a mut P,
}

impl<P> Iterator for Elements<'_, P>
where
    P: Producer + ?Sized,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.producer.pull()
    }
}
