use crate::context::ParseContext;
use producer_framework::Producer;
use std::fmt;

/// A resumable cursor over a [`Producer`].
///
/// Pushed-back elements are kept on a stack in front of the producer. The
/// cursor is itself a producer, so once a parsing step is done it can be
/// handed on as the leftover stream: draining it yields the pushed-back
/// elements, the rest of the source, and finally the source's own result.
pub struct Cursor<P: Producer> {
    producer: P,
    pending: Vec<P::Item>,
    pulled: usize,
    exhausted: bool,
}

impl<P: Producer> Cursor<P> {
    /// Creates a cursor positioned at the start of `producer`.
    pub fn new(producer: P) -> Self {
        Self {
            producer,
            pending: Vec::new(),
            pulled: 0,
            exhausted: false,
        }
    }

    /// Returns the pushback stack; the last element is drawn first.
    pub fn pending(&self) -> &[P::Item] {
        &self.pending
    }

    /// Splits the cursor into its pushback stack and underlying producer.
    pub fn into_parts(self) -> (Vec<P::Item>, P) {
        (self.pending, self.producer)
    }
}

impl<P: Producer> ParseContext for Cursor<P> {
    type Item = P::Item;

    fn draw(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.pending.pop() {
            return Some(item);
        }
        if self.exhausted {
            return None;
        }
        match self.producer.pull() {
            Some(item) => {
                self.pulled += 1;
                Some(item)
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }

    fn undraw(&mut self, item: Self::Item) {
        self.pending.push(item);
    }

    fn peek(&mut self) -> Option<&Self::Item> {
        if self.pending.is_empty() {
            let item = self.draw()?;
            self.pending.push(item);
        }
        self.pending.last()
    }

    fn offset(&self) -> usize {
        self.pulled.saturating_sub(self.pending.len())
    }
}

impl<P: Producer> Producer for Cursor<P> {
    type Item = P::Item;
    type Output = P::Output;

    fn pull(&mut self) -> Option<Self::Item> {
        self.draw()
    }

    fn finish(self) -> P::Output {
        self.producer.finish()
    }
}

impl<P> fmt::Debug for Cursor<P>
where
    P: Producer + fmt::Debug,
    P::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("producer", &self.producer)
            .field("pending", &self.pending)
            .field("pulled", &self.pulled)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}
