use crate::context::ParseContext;

/// A parsing step that operates on a context.
///
/// Rules are generic over the context, so the same rule runs directly on a
/// [`Cursor`](crate::Cursor), inside a zoomed [`View`](crate::View), or on a
/// single group of a segment sequence. Any closure taking `&mut Ctx` and
/// returning an `Option` is a rule.
pub trait ParsingRule<Ctx>
where
    Ctx: ParseContext + ?Sized,
{
    /// What a successful step produces.
    type Node;

    /// Attempts to parse one node from the context.
    ///
    /// On `None` the rule should leave the context as it found it, pushing
    /// back anything it drew.
    fn try_parse(&mut self, ctx: &mut Ctx) -> Option<Self::Node>;
}

impl<Ctx, F, A> ParsingRule<Ctx> for F
where
    Ctx: ParseContext + ?Sized,
    F: FnMut(&mut Ctx) -> Option<A>,
{
    type Node = A;

    fn try_parse(&mut self, ctx: &mut Ctx) -> Option<A> {
        self(ctx)
    }
}
