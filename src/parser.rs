//! The resumable tokenizer state machine.
//!
//! [`Parser`] consumes a byte buffer one byte at a time and classifies runs of
//! bytes into typed [`Token`]s, linking them into an implicit tree through
//! `parent` back-references and per-container child counts. It recognizes a
//! JSON superset: standard JSON objects, arrays, strings, numbers, booleans
//! and `null`, plus `//` and `#` line comments and unquoted bare strings.
//!
//! ## Resumability
//!
//! The entire mutable state is three scalars: the cursor position, the next
//! free pool slot, and the index of the active scope. When a parse fails with
//! a recoverable error the parser keeps that state, so calling
//! [`Parser::parse`] again with a longer buffer (same prefix) and/or a larger
//! pool continues exactly where the previous call stopped. On error the
//! cursor is rewound to the start of the failing token, so a resumed call
//! never sees a half-lexed token; earlier completed tokens stay valid.
//!
//! ```rust
//! use hoconlite::{Error, Parser, Token};
//!
//! let mut parser = Parser::new();
//! let mut tokens = [Token::default(); 8];
//!
//! // The buffer ends in the middle of the number.
//! assert_eq!(parser.parse(b"{\"a\": 1", &mut tokens), Err(Error::Incomplete));
//!
//! // Extend the buffer (same prefix) and resume.
//! let count = parser.parse(b"{\"a\": 12}", &mut tokens).unwrap();
//! assert_eq!(count, 3);
//! ```

use crate::error::{Error, Result};
use crate::token::{Kind, Token, NONE};

/// Characters that terminate an unquoted string, besides whitespace and the
/// start of a `//` comment. This is the HOCON "forbidden characters" set.
const UNQUOTED_TERMINATORS: &[u8] = b"$\"{}[]:=,+#`^?!@*&\\";

/// The tokenizer.
///
/// Holds the three scalars that persist across resumed invocations; see the
/// [module docs](self) for the resume contract. A parser is cheap to create
/// and holds no reference to the input or the pool.
#[derive(Debug, Clone)]
pub struct Parser {
    /// Byte offset of the next unconsumed input byte.
    pos: usize,
    /// Index of the next free slot in the token pool.
    tok_next: usize,
    /// Index of the token new tokens attach to, or [`NONE`].
    tok_super: i32,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Creates a parser with fresh state.
    #[must_use]
    pub fn new() -> Self {
        Parser {
            pos: 0,
            tok_next: 0,
            tok_super: NONE,
        }
    }

    /// Reinitializes the cursor state, making the parser (and any token pool
    /// used with it) reusable for an independent parse.
    pub fn reset(&mut self) {
        *self = Parser::new();
    }

    /// Byte offset the next call to [`Parser::parse`] will continue from.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Number of pool slots consumed so far.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.tok_next
    }

    /// Tokenizes `input` into `tokens`, returning the cumulative number of
    /// tokens produced (across resumed calls).
    ///
    /// Tokens are written in preorder, strictly forward; a slot is never
    /// revisited except to fill a container's `end` when its closing bracket
    /// arrives. On a recoverable error the parser state is positioned for a
    /// resume; see the [module docs](self).
    ///
    /// # Errors
    ///
    /// - [`Error::PoolExhausted`] when `tokens` has no free slot left.
    /// - [`Error::Malformed`] on a syntax violation.
    /// - [`Error::Incomplete`] when the input ends mid-token or with unclosed
    ///   containers.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn parse(&mut self, input: &[u8], tokens: &mut [Token]) -> Result<usize> {
        self.run(input, Some(tokens))
    }

    /// Dry run: advances the cursor and returns the number of tokens `input`
    /// would produce, without writing anywhere.
    ///
    /// Used to size a pool before a real parse. Must be called on a fresh
    /// parser, and the subsequent real parse must also start from fresh
    /// state — the dry run is a pure count, not a resumable prefix. Validity
    /// checks that require reading back earlier tokens (key-type rejection,
    /// bracket matching, the final unclosed-container check) are skipped; the
    /// real parse surfaces those errors.
    ///
    /// # Errors
    ///
    /// Same as [`Parser::parse`], minus [`Error::PoolExhausted`] and the
    /// checks noted above.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn measure(&mut self, input: &[u8]) -> Result<usize> {
        self.run(input, None)
    }

    fn run(&mut self, input: &[u8], mut tokens: Option<&mut [Token]>) -> Result<usize> {
        let mut count = self.tok_next;

        while self.pos < input.len() {
            let c = input[self.pos];
            match c {
                b'{' | b'[' => {
                    count += 1;
                    if let Some(toks) = tokens.as_deref_mut() {
                        let idx = self.alloc(toks)?;
                        if self.tok_super != NONE {
                            let sup = &mut toks[self.tok_super as usize];
                            // A container cannot be a dictionary key.
                            if sup.kind == Kind::Object {
                                return Err(Error::Malformed { pos: self.pos });
                            }
                            sup.size += 1;
                            toks[idx].parent = self.tok_super;
                        }
                        toks[idx].kind = if c == b'{' { Kind::Object } else { Kind::Array };
                        toks[idx].start = self.pos as i32;
                        self.tok_super = idx as i32;
                    }
                }
                b'}' | b']' => {
                    if let Some(toks) = tokens.as_deref_mut() {
                        self.close(toks, c)?;
                    }
                }
                b'"' => {
                    self.quoted(input, tokens.as_deref_mut())?;
                    count += 1;
                    self.bump_scope(tokens.as_deref_mut());
                }
                b'\t' | b'\r' | b'\n' | b' ' => {}
                b':' => {
                    // The following value attaches to the token just produced
                    // (the key), not to the object.
                    self.tok_super = self.tok_next as i32 - 1;
                }
                b',' => {
                    if let Some(toks) = tokens.as_deref_mut() {
                        if self.tok_super != NONE {
                            let sup = &toks[self.tok_super as usize];
                            if sup.kind != Kind::Array && sup.kind != Kind::Object {
                                // We were scoped to a key's value position;
                                // return to the enclosing container.
                                self.tok_super = sup.parent;
                            }
                        }
                    }
                }
                b'-' | b'0'..=b'9' | b't' | b'f' | b'n' => {
                    if let Some(toks) = tokens.as_deref_mut() {
                        if self.tok_super != NONE {
                            let sup = &toks[self.tok_super as usize];
                            // Primitives cannot be keys, and a key takes
                            // exactly one value.
                            if sup.kind == Kind::Object
                                || (sup.kind == Kind::String && sup.size != 0)
                            {
                                return Err(Error::Malformed { pos: self.pos });
                            }
                        }
                    }
                    self.primitive(input, tokens.as_deref_mut())?;
                    count += 1;
                    self.bump_scope(tokens.as_deref_mut());
                }
                b'#' => {
                    self.comment(input, 1, tokens.as_deref_mut())?;
                    count += 1;
                    self.bump_scope(tokens.as_deref_mut());
                }
                b'/' if self.pos + 1 < input.len() && input[self.pos + 1] == b'/' => {
                    self.comment(input, 2, tokens.as_deref_mut())?;
                    count += 1;
                    self.bump_scope(tokens.as_deref_mut());
                }
                _ => {
                    self.unquoted(input, tokens.as_deref_mut())?;
                    count += 1;
                    self.bump_scope(tokens.as_deref_mut());
                }
            }
            self.pos += 1;
        }

        if let Some(toks) = tokens.as_deref_mut() {
            // Any allocated container still missing its end is unclosed.
            for tok in toks[..self.tok_next].iter().rev() {
                if tok.start != NONE && tok.end == NONE {
                    return Err(Error::Incomplete);
                }
            }
        }

        Ok(count)
    }

    /// Takes the next free pool slot, reset to defaults.
    fn alloc(&mut self, tokens: &mut [Token]) -> Result<usize> {
        if self.tok_next >= tokens.len() {
            return Err(Error::PoolExhausted);
        }
        let idx = self.tok_next;
        self.tok_next += 1;
        tokens[idx] = Token::default();
        Ok(idx)
    }

    /// Counts a freshly produced token as a child of the active scope.
    fn bump_scope(&mut self, tokens: Option<&mut [Token]>) {
        if let Some(toks) = tokens {
            if self.tok_super != NONE {
                toks[self.tok_super as usize].size += 1;
            }
        }
    }

    /// Allocates and fills one leaf token, rewinding the cursor to `rewind`
    /// if the pool is exhausted.
    fn emit(
        &mut self,
        tokens: Option<&mut [Token]>,
        kind: Kind,
        start: usize,
        end: usize,
        rewind: usize,
    ) -> Result<()> {
        if let Some(toks) = tokens {
            let idx = match self.alloc(toks) {
                Ok(idx) => idx,
                Err(err) => {
                    self.pos = rewind;
                    return Err(err);
                }
            };
            toks[idx] = Token {
                kind,
                start: start as i32,
                end: end as i32,
                size: 0,
                parent: self.tok_super,
            };
        }
        Ok(())
    }

    /// Handles `}` or `]`: walks backward from the most recently opened,
    /// still-open container to the matching one, fills its `end`, and
    /// restores the enclosing container as the active scope.
    fn close(&mut self, tokens: &mut [Token], c: u8) -> Result<()> {
        let kind = if c == b'}' { Kind::Object } else { Kind::Array };
        if self.tok_next < 1 {
            return Err(Error::Malformed { pos: self.pos });
        }
        let mut i = self.tok_next - 1;
        loop {
            let tok = tokens[i];
            if tok.start != NONE && tok.end == NONE {
                if tok.kind != kind {
                    return Err(Error::Malformed { pos: self.pos });
                }
                tokens[i].end = self.pos as i32 + 1;
                self.tok_super = tok.parent;
                return Ok(());
            }
            if tok.parent == NONE {
                if tok.kind != kind || self.tok_super == NONE {
                    return Err(Error::Malformed { pos: self.pos });
                }
                return Ok(());
            }
            i = tok.parent as usize;
        }
    }

    /// Quoted string: the cursor sits on the opening quote; on success it is
    /// left on the closing quote.
    fn quoted(&mut self, input: &[u8], tokens: Option<&mut [Token]>) -> Result<()> {
        let start = self.pos;
        self.pos += 1;

        while self.pos < input.len() {
            let c = input[self.pos];

            if c == b'"' {
                self.emit(tokens, Kind::String, start + 1, self.pos, start)?;
                return Ok(());
            }

            if c == b'\\' && self.pos + 1 < input.len() {
                self.pos += 1;
                match input[self.pos] {
                    b'"' | b'/' | b'\\' | b'b' | b'f' | b'r' | b'n' | b't' => {}
                    b'u' => {
                        // Exactly four hex digits; a short read falls through
                        // to the incomplete-input path below.
                        let mut i = 0;
                        while i < 4 && self.pos + 1 < input.len() {
                            self.pos += 1;
                            if !input[self.pos].is_ascii_hexdigit() {
                                let pos = self.pos;
                                self.pos = start;
                                return Err(Error::Malformed { pos });
                            }
                            i += 1;
                        }
                    }
                    _ => {
                        let pos = self.pos;
                        self.pos = start;
                        return Err(Error::Malformed { pos });
                    }
                }
            }
            self.pos += 1;
        }

        self.pos = start;
        Err(Error::Incomplete)
    }

    /// Strict-JSON primitive (number, boolean, `null`). On success the cursor
    /// is left on the last byte of the run so the terminator is re-processed
    /// by the main loop.
    fn primitive(&mut self, input: &[u8], tokens: Option<&mut [Token]>) -> Result<()> {
        let start = self.pos;

        while self.pos < input.len() {
            match input[self.pos] {
                b'\t' | b'\r' | b'\n' | b' ' | b',' | b']' | b'}' => {
                    self.emit(tokens, Kind::Primitive, start, self.pos, start)?;
                    self.pos -= 1;
                    return Ok(());
                }
                c if c < 0x20 || c >= 0x7f => {
                    let pos = self.pos;
                    self.pos = start;
                    return Err(Error::Malformed { pos });
                }
                _ => self.pos += 1,
            }
        }

        // A primitive must be terminated inside the buffer.
        self.pos = start;
        Err(Error::Incomplete)
    }

    /// Unquoted bare string, a permissive extension beyond strict JSON. The
    /// run ends at whitespace, a reserved character, or the start of a `//`
    /// comment. Runs spelling `true`, `false` or `null` are reclassified as
    /// primitives.
    fn unquoted(&mut self, input: &[u8], tokens: Option<&mut [Token]>) -> Result<()> {
        let start = self.pos;

        while self.pos < input.len() {
            let c = input[self.pos];
            let ends = match c {
                b'\t' | b'\r' | b'\n' | b' ' => true,
                b'/' => self.pos + 1 < input.len() && input[self.pos + 1] == b'/',
                _ => UNQUOTED_TERMINATORS.contains(&c),
            };
            if ends {
                if self.pos == start {
                    // A reserved character with no run before it.
                    return Err(Error::Malformed { pos: self.pos });
                }
                let kind = match &input[start..self.pos] {
                    b"true" | b"false" | b"null" => Kind::Primitive,
                    _ => Kind::String,
                };
                self.emit(tokens, kind, start, self.pos, start)?;
                self.pos -= 1;
                return Ok(());
            }
            self.pos += 1;
        }

        self.pos = start;
        Err(Error::Incomplete)
    }

    /// Line comment. `marker` is the marker length (1 for `#`, 2 for `//`);
    /// the span covers the interior text, newline excluded. The cursor is
    /// left on the newline.
    fn comment(&mut self, input: &[u8], marker: usize, tokens: Option<&mut [Token]>) -> Result<()> {
        let start = self.pos;
        self.pos += marker;

        while self.pos < input.len() {
            if input[self.pos] == b'\n' {
                self.emit(tokens, Kind::Comment, start + marker, self.pos, start)?;
                return Ok(());
            }
            self.pos += 1;
        }

        self.pos = start;
        Err(Error::Incomplete)
    }
}
