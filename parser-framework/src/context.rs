use crate::boundary::Boundary;
use crate::view::View;

/// The element-level interface parsing code is written against.
///
/// Contexts are cursors over a stream with an unbounded pushback stack:
/// [`Cursor`](crate::Cursor) sits directly on a producer, [`View`] restricts
/// another context to a bounded prefix, and `&mut C` forwards to `C`.
/// Absence of input is always `None`, never an error.
pub trait ParseContext {
    type Item;

    /// Consumes and returns the next element, or `None` at end of input.
    fn draw(&mut self) -> Option<Self::Item>;

    /// Pushes `item` back so that the next `draw` returns it.
    ///
    /// Pushback is a LIFO stack with no depth limit, and `item` does not
    /// have to be something previously drawn.
    fn undraw(&mut self, item: Self::Item);

    /// Returns the next element without consuming it.
    fn peek(&mut self) -> Option<&Self::Item>;

    /// Net number of elements consumed through this context: draws minus
    /// pushbacks, saturating at zero.
    fn offset(&self) -> usize;

    /// Returns true if no element is left.
    fn is_end_of_input(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Draws and discards one element. Returns false at end of input.
    fn skip(&mut self) -> bool {
        self.draw().is_some()
    }

    /// Draws the next element only if it satisfies `predicate`.
    fn draw_if<F>(&mut self, predicate: F) -> Option<Self::Item>
    where
        F: FnOnce(&Self::Item) -> bool,
    {
        let item = self.draw()?;
        if predicate(&item) {
            Some(item)
        } else {
            self.undraw(item);
            None
        }
    }

    /// Draws every remaining element into a vector.
    ///
    /// Memory grows with the input and never terminates on an infinite
    /// stream; use it on bounded contexts (such as a [`View`]) or in tests.
    fn draw_all(&mut self) -> Vec<Self::Item> {
        let mut items = Vec::new();
        while let Some(item) = self.draw() {
            items.push(item);
        }
        items
    }

    /// Folds every remaining element into an accumulator.
    fn fold_all<A, F>(&mut self, init: A, mut step: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        let mut acc = init;
        while let Some(item) = self.draw() {
            acc = step(acc, item);
        }
        acc
    }

    /// Splits off the prefix admitted by `bound`.
    ///
    /// The returned view yields only that prefix; [`View::resume`] hands back
    /// this context positioned exactly where the view stopped, including any
    /// pushback done through the view.
    fn split<B>(&mut self, bound: B) -> View<&mut Self, B>
    where
        B: Boundary<Self::Item>,
    {
        View::new(self, bound)
    }

    /// Runs `f` restricted to the prefix admitted by `bound`, then continues
    /// this context from wherever `f` left the view.
    ///
    /// Elements of the prefix that `f` did not consume, and anything `f`
    /// pushed back, are drawn next from this context.
    fn zoom<B, A, F>(&mut self, bound: B, f: F) -> A
    where
        B: Boundary<Self::Item>,
        F: FnOnce(&mut View<&mut Self, B>) -> A,
    {
        let mut view = View::new(self, bound);
        let output = f(&mut view);
        view.resume();
        output
    }
}

impl<C> ParseContext for &mut C
where
    C: ParseContext + ?Sized,
{
    type Item = C::Item;

    fn draw(&mut self) -> Option<Self::Item> {
        (**self).draw()
    }

    fn undraw(&mut self, item: Self::Item) {
        (**self).undraw(item)
    }

    fn peek(&mut self) -> Option<&Self::Item> {
        (**self).peek()
    }

    fn offset(&self) -> usize {
        (**self).offset()
    }

    fn is_end_of_input(&mut self) -> bool {
        (**self).is_end_of_input()
    }
}
