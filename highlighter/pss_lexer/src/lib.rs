//! Syntax-highlighting lexer for the Accellera Portable Test and Stimulus
//! language (PSS).
//!
//! Turns raw PSS source into an ordered stream of classified tokens for a
//! highlighter or any other consumer that wants lexical structure without a
//! parse. Tokenization is total: there is no error case, and the token
//! texts concatenated in order reproduce the input byte for byte. Unmatched
//! input degrades to one-character plain-text tokens instead of failing.
//!
//! The grammar lives in two ordered rule tables ([`rules`]), one per lexer
//! state: `root` carries the full token grammar, and `type` — entered after
//! a type-introducing keyword such as `component` or `struct` — classifies
//! the following identifier as the new type's name. The engine ([`engine`])
//! drives a cursor over the input, always taking the first rule that
//! matches in the active state's table.
//!
//! The rule tables are `static` data; lexer sessions share them freely
//! across threads, one session per input.
//!
//! # Example
//!
//! ```
//! use pss_lexer::{tokenize, TokenCategory};
//!
//! let tokens: Vec<_> = tokenize("component top { }").collect();
//! assert_eq!(tokens[0].category, TokenCategory::KeywordDeclaration);
//! assert_eq!(tokens[0].text, "component");
//! assert_eq!(tokens[2].category, TokenCategory::NameClass);
//! assert_eq!(tokens[2].text, "top");
//! ```
//!
//! Registration data for a lexer registry (file globs, MIME types) lives in
//! [`metadata`].

pub mod category;
pub mod cursor;
pub mod engine;
mod keywords;
pub mod metadata;
pub mod rules;

pub use category::{Token, TokenCategory};
pub use engine::{tokenize, Lexer};
pub use metadata::{LexerMetadata, PSS};
