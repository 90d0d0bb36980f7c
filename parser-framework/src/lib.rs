pub mod boundary;
pub mod context;
pub mod cursor;
pub mod parser;
pub mod traits;
pub mod view;

pub use boundary::{everything, take, take_while, BoundRule, Boundary, Everything, Take, TakeWhile};
pub use context::ParseContext;
pub use cursor::Cursor;
pub use parser::{eval_parser, run_parser, Parser};
pub use producer_framework::Producer;
pub use traits::ParsingRule;
pub use view::View;
