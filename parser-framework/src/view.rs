use crate::boundary::Boundary;
use crate::context::ParseContext;
use log::trace;
use producer_framework::Producer;

/// A bounded view over a parent context.
///
/// The view draws from its parent only what its [`Boundary`] admits. The
/// rejected element that ends the prefix goes straight back to the parent,
/// and so does anything pushed back through the view: the view only counts
/// how many of the parent's leading elements it may hand out again. The
/// parent is therefore always positioned exactly where the view stopped, and
/// [`resume`](View::resume) needs no splicing.
#[derive(Debug)]
pub struct View<C, B> {
    parent: C,
    bound: B,
    admitted: usize,
    lent: usize,
    closed: bool,
}

impl<C, B> View<C, B>
where
    C: ParseContext,
    B: Boundary<C::Item>,
{
    /// Creates a view over the prefix of `parent` admitted by `bound`.
    pub fn new(parent: C, bound: B) -> Self {
        Self {
            parent,
            bound,
            admitted: 0,
            lent: 0,
            closed: false,
        }
    }

    /// Returns the boundary.
    pub fn bound(&self) -> &B {
        &self.bound
    }

    /// Returns the boundary mutably, e.g. to reset it before [`restart`](View::restart).
    pub fn bound_mut(&mut self) -> &mut B {
        &mut self.bound
    }

    /// Returns true once the bounded prefix has ended.
    ///
    /// Elements pushed back through the view can still be drawn.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Forgets everything drawn so far and starts a new prefix at the
    /// parent's current position.
    ///
    /// Elements still lent back to the parent stay there and become the
    /// start of the new prefix.
    pub fn restart(&mut self) {
        self.admitted = 0;
        self.lent = 0;
        self.closed = false;
    }

    /// Ends the view and returns the parent, positioned after whatever the
    /// view consumed.
    pub fn resume(self) -> C {
        trace!(
            "view resumed: {} admitted, {} handed back",
            self.admitted,
            self.lent
        );
        self.parent
    }
}

impl<C, B> ParseContext for View<C, B>
where
    C: ParseContext,
    B: Boundary<C::Item>,
{
    type Item = C::Item;

    fn draw(&mut self) -> Option<Self::Item> {
        if self.lent > 0 {
            self.lent -= 1;
            return self.parent.draw();
        }
        if self.closed {
            return None;
        }
        if !self.bound.is_open() {
            self.closed = true;
            return None;
        }
        let item = match self.parent.draw() {
            Some(item) => item,
            None => {
                self.closed = true;
                return None;
            }
        };
        if self.bound.admit(&item) {
            self.admitted += 1;
            Some(item)
        } else {
            self.parent.undraw(item);
            self.closed = true;
            None
        }
    }

    fn undraw(&mut self, item: Self::Item) {
        self.parent.undraw(item);
        self.lent += 1;
    }

    fn peek(&mut self) -> Option<&Self::Item> {
        if self.lent == 0 {
            let item = self.draw()?;
            self.undraw(item);
        }
        self.parent.peek()
    }

    fn offset(&self) -> usize {
        self.admitted.saturating_sub(self.lent)
    }
}

impl<C, B> Producer for View<C, B>
where
    C: ParseContext,
    B: Boundary<C::Item>,
{
    type Item = C::Item;
    type Output = C;

    fn pull(&mut self) -> Option<Self::Item> {
        self.draw()
    }

    /// Returns the continuation: the parent, still holding every element the
    /// view did not consume.
    fn finish(self) -> C {
        self.resume()
    }
}
