//! Compact-JSON serialization of a token tree.
//!
//! The serializer walks a token slice in the order the parser produced it
//! (preorder) and re-renders the document as minimal JSON: no insignificant
//! whitespace, keys always double-quoted, comments dropped, insertion order
//! preserved. The punctuation the tokenizer stripped (`{}[]:,"`) is
//! reinserted from the token structure; the token contents themselves are
//! copied verbatim from the original input, escapes included.
//!
//! ## Examples
//!
//! ```rust
//! use hoconlite::{parse, to_string, Token};
//!
//! let text = r#"{"one": "uno", "two": 2, "three": [false, 1, "2"]}"#;
//! let mut tokens = [Token::default(); 16];
//! let count = parse(text.as_bytes(), &mut tokens).unwrap();
//!
//! let json = to_string(text, &tokens[..count]);
//! assert_eq!(json, r#"{"one":"uno","two":2,"three":[false,1,"2"]}"#);
//! ```

use crate::token::{Kind, Token};

/// Renders `tokens` back into compact JSON bytes.
///
/// `input` must be the buffer the tokens were parsed from; token offsets
/// index into it. The walk is total: unset or out-of-range spans render as
/// empty output rather than panicking, so a hand-built token slice cannot
/// crash it. Comment tokens emit nothing and never contribute separators.
#[must_use]
pub fn serialize(input: &[u8], tokens: &[Token]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < tokens.len() {
        i = write_subtree(input, tokens, i, &mut out);
    }
    out
}

/// Renders `tokens` back into a compact JSON string.
///
/// Convenience wrapper over [`serialize`] for input that is known text. The
/// conversion is lossless whenever `input` is the text the tokens were
/// parsed from.
#[must_use]
pub fn to_string(input: &str, tokens: &[Token]) -> String {
    String::from_utf8_lossy(&serialize(input.as_bytes(), tokens)).into_owned()
}

/// Writes the token at `idx` and its whole subtree, returning the index just
/// past it.
fn write_subtree(input: &[u8], tokens: &[Token], idx: usize, out: &mut Vec<u8>) -> usize {
    let tok = &tokens[idx];
    match tok.kind {
        Kind::Object | Kind::Array => {
            let (open, close) = if tok.kind == Kind::Object {
                (b'{', b'}')
            } else {
                (b'[', b']')
            };
            out.push(open);
            let mut j = idx + 1;
            let mut rendered = false;
            for _ in 0..tok.size {
                if j >= tokens.len() {
                    break;
                }
                if tokens[j].kind != Kind::Comment {
                    if rendered {
                        out.push(b',');
                    }
                    rendered = true;
                }
                j = write_subtree(input, tokens, j, out);
            }
            out.push(close);
            j
        }
        Kind::String => {
            out.push(b'"');
            out.extend_from_slice(span(input, tok));
            out.push(b'"');
            // A nonzero size marks a key: render its value subtree(s), with
            // the `:` placed before the first non-comment child.
            let mut j = idx + 1;
            let mut colon_pending = tok.size != 0;
            for _ in 0..tok.size {
                if j >= tokens.len() {
                    break;
                }
                if colon_pending && tokens[j].kind != Kind::Comment {
                    out.push(b':');
                    colon_pending = false;
                }
                j = write_subtree(input, tokens, j, out);
            }
            j
        }
        Kind::Primitive => {
            out.extend_from_slice(span(input, tok));
            idx + 1
        }
        Kind::Comment => {
            // Emits nothing, but a comment that captured a value subtree
            // (via a `:` that re-scoped onto it) still renders that subtree.
            let mut j = idx + 1;
            for _ in 0..tok.size {
                if j >= tokens.len() {
                    break;
                }
                j = write_subtree(input, tokens, j, out);
            }
            j
        }
        Kind::Undefined => idx + 1,
    }
}

fn span<'a>(input: &'a [u8], tok: &Token) -> &'a [u8] {
    tok.span(input).unwrap_or(&[])
}
