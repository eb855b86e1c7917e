//! Parse driver for descent.
//!
//! A [`Parser`] runs one root [`Grammar`](descent_grammar::Grammar) over a
//! whole input and turns the result into a [`Parsed`]: the filtered tree,
//! or a [`ParseFailure`] naming what was expected and where.
//!
//! ```
//! use descent_grammar::{char_set, lit, sequence, token};
//! use descent_parse::Parser;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let digits = token(char_set([('0'..='9').into()])?.one_or_more()).named("number");
//! let pair = sequence([digits.clone(), lit(",")?, digits]).named("pair");
//!
//! let parser = Parser::new(pair);
//! let tree = parser.parse("12,7")?.into_result()?;
//! assert_eq!(tree.text(), "12,7");
//! assert!(parser.parse("12,")?.failure().is_some());
//! # Ok(())
//! # }
//! ```

mod error;
mod options;
mod parser;

pub use error::{ConfigError, Error};
pub use options::{NodeFilter, ParserOptions};
pub use parser::{ParseFailure, Parsed, Parser};
