//! Error types for tokenizing and serializing.
//!
//! Every fallible operation in this crate returns one of exactly three error
//! kinds, and they are mutually exclusive per call:
//!
//! - [`Error::PoolExhausted`]: the caller-supplied token pool ran out of slots.
//!   Recoverable — grow the pool (preserving the already-written tokens) and
//!   call [`Parser::parse`](crate::Parser::parse) again with the same parser.
//! - [`Error::Malformed`]: the input violates the grammar at the reported byte.
//!   Not recoverable by resuming; the input itself must change.
//! - [`Error::Incomplete`]: the input ends mid-token or with unclosed
//!   containers. Recoverable — append more bytes and resume.
//!
//! ## Examples
//!
//! ```rust
//! use hoconlite::{parse, Error, Token};
//!
//! let mut tokens = [Token::default(); 8];
//! let err = parse(b"{\"key\": 1234", &mut tokens).unwrap_err();
//! assert_eq!(err, Error::Incomplete);
//! assert!(err.is_recoverable());
//!
//! let err = parse(b"{true: 1}", &mut tokens).unwrap_err();
//! assert!(matches!(err, Error::Malformed { .. }));
//! assert!(!err.is_recoverable());
//! ```

use thiserror::Error;

/// Represents all possible errors produced by the tokenizer.
///
/// The serializer has no error path of its own; it renders whatever token
/// stream it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The token pool has no free slot for the next token.
    #[error("token pool exhausted")]
    PoolExhausted,

    /// The input violates the grammar at byte offset `pos`.
    #[error("malformed input at byte {pos}")]
    Malformed {
        /// Byte offset of the offending input byte.
        pos: usize,
    },

    /// The input is a valid prefix of some document but ends too early.
    #[error("incomplete input, more bytes required")]
    Incomplete,
}

impl Error {
    /// Returns `true` if the parse can be resumed after the caller fixes the
    /// resource that ran out (pool slots or input bytes).
    ///
    /// Only [`Error::Malformed`] is unrecoverable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hoconlite::Error;
    ///
    /// assert!(Error::PoolExhausted.is_recoverable());
    /// assert!(Error::Incomplete.is_recoverable());
    /// assert!(!Error::Malformed { pos: 3 }.is_recoverable());
    /// ```
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Error::Malformed { .. })
    }

    /// Byte offset of the syntax violation, if this is a [`Error::Malformed`].
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Error::Malformed { pos } => Some(*pos),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
