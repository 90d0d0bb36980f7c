use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::traits::ParsingRule;
use log::debug;
use producer_framework::Producer;

/// Runs `parse` against `producer` and returns its output together with the
/// leftover stream.
///
/// The returned cursor holds everything `parse` did not consume, pushed-back
/// elements first, and still finishes with the producer's own result.
pub fn run_parser<P, F, A>(producer: P, parse: F) -> (A, Cursor<P>)
where
    P: Producer,
    F: FnOnce(&mut Cursor<P>) -> A,
{
    let mut cursor = Cursor::new(producer);
    let output = parse(&mut cursor);
    (output, cursor)
}

/// Runs `parse` against `producer`, discarding the leftover stream.
pub fn eval_parser<P, F, A>(producer: P, parse: F) -> A
where
    P: Producer,
    F: FnOnce(&mut Cursor<P>) -> A,
{
    run_parser(producer, parse).0
}

/// Applies a rule repeatedly, streaming the nodes it produces.
///
/// Parsing stops at the first `None`, or right after a node that consumed
/// nothing (it would otherwise repeat forever). The context keeps whatever
/// was not parsed; pass `&mut context` to keep using it afterwards.
pub struct Parser<Ctx, R> {
    context: Ctx,
    rule: R,
    stalled: bool,
}

impl<Ctx, R> Parser<Ctx, R>
where
    Ctx: ParseContext,
    R: ParsingRule<Ctx>,
{
    /// Creates a parser applying `rule` to `context`.
    pub fn new(context: Ctx, rule: R) -> Self {
        Self {
            context,
            rule,
            stalled: false,
        }
    }

    /// Returns a reference to the context.
    pub fn context(&self) -> &Ctx {
        &self.context
    }

    /// Returns a mutable reference to the context.
    pub fn context_mut(&mut self) -> &mut Ctx {
        &mut self.context
    }

    /// Returns the context, holding the unparsed rest of the input.
    pub fn into_context(self) -> Ctx {
        self.context
    }

    /// Tries to parse the next node.
    pub fn next_node(&mut self) -> Option<R::Node> {
        if self.stalled {
            return None;
        }
        let before = self.context.offset();
        let node = self.rule.try_parse(&mut self.context)?;
        if self.context.offset() == before {
            debug!("rule made no progress at offset {}, stopping", before);
            self.stalled = true;
        }
        Some(node)
    }

    /// Parses nodes until the rule stops matching.
    pub fn parse(&mut self) -> Vec<R::Node> {
        let mut nodes = Vec::new();
        while let Some(node) = self.next_node() {
            nodes.push(node);
        }
        nodes
    }
}

impl<Ctx, R> Iterator for Parser<Ctx, R>
where
    Ctx: ParseContext,
    R: ParsingRule<Ctx>,
{
    type Item = R::Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node()
    }
}
