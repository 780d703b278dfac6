//! The token record and the pool it lives in.
//!
//! A [`Token`] is a fixed-size, `Copy` record describing one lexical unit of
//! the input. The parser never allocates; it only writes into a caller-owned
//! slice of tokens ("the pool"), in strictly increasing index order. The
//! resulting array is a preorder encoding of the parse tree: every container
//! token is immediately followed by the full subtrees of its children, and
//! `parent` indices always point strictly backward.
//!
//! ## The `size` field
//!
//! `size` is role-dependent:
//!
//! - `Object` / `Array`: number of immediate children (comments included).
//! - `String` in object-key position: `1`, meaning "exactly one following
//!   subtree is this key's value".
//! - everything else: `0`.
//!
//! ## Examples
//!
//! ```rust
//! use hoconlite::{parse, Kind, Token};
//!
//! let text = r#"{"a": 0}"#;
//! let mut tokens = [Token::default(); 4];
//! let count = parse(text.as_bytes(), &mut tokens).unwrap();
//! assert_eq!(count, 3);
//!
//! assert_eq!(tokens[0].kind, Kind::Object);
//! assert_eq!(tokens[1].kind, Kind::String);
//! assert_eq!(tokens[1].size, 1); // key position
//! assert_eq!(tokens[1].text(text), Some("a"));
//! assert_eq!(tokens[2].parent, 1); // value hangs off the key
//! ```

/// Sentinel for unset `start`/`end` offsets and for "no parent".
pub const NONE: i32 = -1;

/// The lexical class of a token.
///
/// `Undefined` is the state of a pool slot before the parser fills it; it is
/// never observed in a token stream returned by a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    #[default]
    Undefined,
    Object,
    Array,
    String,
    Primitive,
    Comment,
}

/// One lexical unit of the input.
///
/// `start` and `end` are half-open byte offsets into the original input, or
/// [`NONE`] while unset — a container keeps `end == NONE` until its closing
/// bracket is seen. For `String` tokens the offsets exclude the quotes; for
/// `Comment` tokens they cover the interior text only; for containers they
/// span the whole bracketed region once closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: Kind,
    pub start: i32,
    pub end: i32,
    pub size: u32,
    pub parent: i32,
}

impl Default for Token {
    fn default() -> Self {
        Token {
            kind: Kind::Undefined,
            start: NONE,
            end: NONE,
            size: 0,
            parent: NONE,
        }
    }
}

impl Token {
    /// The bytes of the input this token covers, or `None` while the offsets
    /// are unset or fall outside `input`.
    #[must_use]
    pub fn span<'a>(&self, input: &'a [u8]) -> Option<&'a [u8]> {
        if self.start < 0 || self.end < self.start {
            return None;
        }
        input.get(self.start as usize..self.end as usize)
    }

    /// The text of the input this token covers.
    ///
    /// Returns `None` while the offsets are unset, out of range, or do not
    /// fall on UTF-8 boundaries. For input that was parsed from a `&str` the
    /// boundaries always hold: every token is delimited by ASCII bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hoconlite::{parse, Token};
    ///
    /// let text = r#"["uno"]"#;
    /// let mut tokens = [Token::default(); 2];
    /// parse(text.as_bytes(), &mut tokens).unwrap();
    /// assert_eq!(tokens[0].text(text), Some(r#"["uno"]"#));
    /// assert_eq!(tokens[1].text(text), Some("uno"));
    /// ```
    #[must_use]
    pub fn text<'a>(&self, input: &'a str) -> Option<&'a str> {
        if self.start < 0 || self.end < self.start {
            return None;
        }
        input.get(self.start as usize..self.end as usize)
    }

    /// Byte length of the token's span, `0` while unset.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.start < 0 || self.end < self.start {
            0
        } else {
            (self.end - self.start) as usize
        }
    }

    /// Returns `true` if the token covers no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
