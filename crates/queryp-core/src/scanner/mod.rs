//! Query string scanner.
//!
//! Splits a query string into [`Token`]s, one per `field OP value` term,
//! carrying the logic prefix and the parentheses stacked around the term.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::Token;
pub use tokenizer::Scanner;
