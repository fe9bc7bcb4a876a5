use std::{iter::Peekable, str::Chars, sync::Arc};

use codemap::{File, Span};

const FORM_FEED: char = '\x0C';

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Token {
    pub kind: char,
    pos: u32,
}

/// The characters of one source file with comments already removed. Each
/// token remembers its byte offset so spans still point at the original text.
#[derive(Debug, Clone)]
pub(crate) struct Lexer {
    buf: Vec<Token>,
    entire_span: Span,
    cursor: usize,
}

impl Lexer {
    pub fn new_from_file(file: &Arc<File>) -> Self {
        let buf = TokenLexer::new(file.source().chars().peekable()).collect();

        Lexer {
            buf,
            entire_span: file.span,
            cursor: 0,
        }
    }

    pub fn text_between(&self, start: usize, end: usize) -> String {
        self.buf[start..end.min(self.buf.len())]
            .iter()
            .map(|t| t.kind)
            .collect()
    }

    pub fn next_char_is(&self, c: char) -> bool {
        matches!(self.peek(), Some(Token { kind, .. }) if kind == c)
    }

    /// Gets the span of the character at the given index. Past the end of
    /// input this is the span of the last character; for empty input it is empty.
    fn span_at_index(&self, idx: usize) -> Span {
        let (start, len) = match self.buf.get(idx) {
            Some(tok) => (tok.pos, tok.kind.len_utf8()),
            None => match self.buf.last() {
                Some(tok) => (tok.pos, tok.kind.len_utf8()),
                None => (0, 0),
            },
        };

        self.entire_span
            .subspan(u64::from(start), u64::from(start) + len as u64)
    }

    /// The span covering the tokens from `start` up to (not including) `end`
    pub fn span_between(&self, start: usize, end: usize) -> Span {
        if end <= start {
            return self.span_at_index(start);
        }

        self.span_at_index(start).merge(self.span_at_index(end - 1))
    }

    pub fn current_span(&self) -> Span {
        self.span_at_index(self.cursor)
    }

    pub fn peek(&self) -> Option<Token> {
        self.buf.get(self.cursor).copied()
    }

    /// Peeks `n` ahead of the cursor without moving it
    pub fn peek_n(&self, n: usize) -> Option<Token> {
        self.buf.get(self.cursor + n).copied()
    }

    pub fn get(&self, idx: usize) -> Option<Token> {
        self.buf.get(idx).copied()
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.get(self.cursor).copied().map(|tok| {
            self.cursor += 1;
            tok
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buf.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

/// Turns source text into tokens, dropping `/* */` and `//` comments.
///
/// `//` is only a comment outside of strings and parentheses, so that
/// `url(http://example.com/a.png)` survives.
struct TokenLexer<'a> {
    buf: Peekable<Chars<'a>>,
    cursor: u32,
    quote: Option<char>,
    escaped: bool,
    paren_depth: usize,
}

impl<'a> TokenLexer<'a> {
    fn new(buf: Peekable<Chars<'a>>) -> TokenLexer<'a> {
        Self {
            buf,
            cursor: 0,
            quote: None,
            escaped: false,
            paren_depth: 0,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.buf.next()?;
        self.cursor += c.len_utf8() as u32;
        Some(c)
    }

    fn skip_block_comment(&mut self) {
        let mut prev = '\0';
        while let Some(c) = self.bump() {
            if prev == '*' && c == '/' {
                return;
            }
            prev = c;
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(&c) = self.buf.peek() {
            if c == '\n' || c == '\r' {
                return;
            }
            self.bump();
        }
    }
}

impl<'a> Iterator for TokenLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let pos = self.cursor;
            let c = self.bump()?;

            if let Some(quote) = self.quote {
                if self.escaped {
                    self.escaped = false;
                } else if c == '\\' {
                    self.escaped = true;
                } else if c == quote {
                    self.quote = None;
                }
                return Some(Token { kind: c, pos });
            }

            let kind = match c {
                '/' if self.buf.peek() == Some(&'*') => {
                    self.bump();
                    self.skip_block_comment();
                    continue;
                }
                '/' if self.buf.peek() == Some(&'/') && self.paren_depth == 0 => {
                    self.skip_line_comment();
                    continue;
                }
                '"' | '\'' => {
                    self.quote = Some(c);
                    c
                }
                '(' => {
                    self.paren_depth += 1;
                    c
                }
                ')' => {
                    self.paren_depth = self.paren_depth.saturating_sub(1);
                    c
                }
                FORM_FEED => '\n',
                '\r' => {
                    if self.buf.peek() == Some(&'\n') {
                        self.bump();
                    }
                    '\n'
                }
                c => c,
            };

            return Some(Token { kind, pos });
        }
    }
}
