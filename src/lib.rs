//! # hoconlite
//!
//! An allocation-free tokenizer for a JSON superset (a subset of the HOCON
//! configuration format), plus a serializer that reconstructs canonical
//! compact JSON from the token stream.
//!
//! ## The dialect
//!
//! Standard JSON objects, arrays, strings, numbers, booleans and `null`, with
//! two permissive extensions:
//!
//! - **Line comments** via `//` or `#`, running to end of line
//! - **Unquoted bare strings** for keys and values (`{host: localhost}`)
//!
//! Full HOCON semantics — substitutions, includes, duplicate-key merging,
//! unit suffixes, concatenation — are deliberately out of scope. The
//! tokenizer checks syntactic well-formedness only.
//!
//! ## Key properties
//!
//! - **No allocation**: the caller owns both the input bytes and a fixed-size
//!   pool of [`Token`] records; the parser only writes into unused slots
//! - **Resumable**: a parse interrupted by a short buffer or a full pool
//!   continues exactly where it stopped once the caller provides more of
//!   either — the entire parser state is three scalars
//! - **Implicit tree**: tokens form a preorder-encoded tree through `parent`
//!   back-references and child counts, no pointers and no second pass
//!
//! ## Quick Start
//!
//! ```rust
//! use hoconlite::{parse, to_string, Kind, Token};
//!
//! let text = r#"{
//!     // connection settings
//!     host: localhost,
//!     "port": 8080,
//!     "tags": ["a", "b"] # inline too
//! }"#;
//!
//! let mut tokens = [Token::default(); 16];
//! let count = parse(text.as_bytes(), &mut tokens).unwrap();
//!
//! assert_eq!(tokens[0].kind, Kind::Object);
//! assert_eq!(
//!     to_string(text, &tokens[..count]),
//!     r#"{"host":"localhost","port":8080,"tags":["a","b"]}"#
//! );
//! ```
//!
//! ## Sizing the pool
//!
//! A call without a destination pool performs a dry run and returns the exact
//! token count the input needs:
//!
//! ```rust
//! use hoconlite::{measure, parse, Token};
//!
//! let input = br#"[1, 2, 3]"#;
//! let needed = measure(input).unwrap();
//! assert_eq!(needed, 4);
//!
//! let mut tokens = vec![Token::default(); needed];
//! assert_eq!(parse(input, &mut tokens).unwrap(), needed);
//! ```
//!
//! ## Resuming a partial parse
//!
//! ```rust
//! use hoconlite::{Error, Parser, Token};
//!
//! let mut parser = Parser::new();
//! let mut tokens = [Token::default(); 8];
//!
//! // Streamed input cut mid-document.
//! assert_eq!(parser.parse(b"[true, fal", &mut tokens), Err(Error::Incomplete));
//!
//! // More bytes arrived; same parser picks up where it left off.
//! assert_eq!(parser.parse(b"[true, false]", &mut tokens).unwrap(), 3);
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - All indexing into the pool and the input is bounds-checked
//! - No panics in the public API; every failure is a typed [`Error`]

pub mod error;
pub mod parser;
pub mod ser;
pub mod token;

pub use error::{Error, Result};
pub use parser::Parser;
pub use ser::{serialize, to_string};
pub use token::{Kind, Token, NONE};

/// Tokenizes `input` into `tokens` with a fresh parser, returning the number
/// of tokens produced.
///
/// For resumable parsing over a growing buffer or pool, use [`Parser`]
/// directly.
///
/// # Examples
///
/// ```rust
/// use hoconlite::{parse, Token};
///
/// let mut tokens = [Token::default(); 8];
/// let count = parse(br#"{"one": "uno", "two": 2}"#, &mut tokens).unwrap();
/// assert_eq!(count, 5);
/// ```
///
/// # Errors
///
/// See [`Parser::parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(input: &[u8], tokens: &mut [Token]) -> Result<usize> {
    Parser::new().parse(input, tokens)
}

/// Dry run with a fresh parser: returns the number of tokens `input` would
/// produce, writing nothing.
///
/// # Errors
///
/// See [`Parser::measure`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn measure(input: &[u8]) -> Result<usize> {
    Parser::new().measure(input)
}

/// Measures `input`, allocates an exactly-sized pool, and parses into it.
///
/// The convenience path for callers that can allocate; the two passes use
/// fresh parser state each, per the sizing contract.
///
/// # Examples
///
/// ```rust
/// use hoconlite::{tokenize, Kind};
///
/// let tokens = tokenize(br#"[false, 1, "2"]"#).unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[0].kind, Kind::Array);
/// ```
///
/// # Errors
///
/// See [`Parser::parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn tokenize(input: &[u8]) -> Result<Vec<Token>> {
    let needed = Parser::new().measure(input)?;
    let mut tokens = vec![Token::default(); needed];
    let count = Parser::new().parse(input, &mut tokens)?;
    tokens.truncate(count);
    Ok(tokens)
}
