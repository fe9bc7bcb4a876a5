use crate::{error::LessResult, lexer::Lexer, utils::is_name_char, Token};

pub(crate) trait BaseParser {
    fn toks(&self) -> &Lexer;
    fn toks_mut(&mut self) -> &mut Lexer;

    fn whitespace(&mut self) {
        while matches!(
            self.toks().peek(),
            Some(Token {
                kind: ' ' | '\t' | '\n',
                ..
            })
        ) {
            self.toks_mut().next();
        }
    }

    /// Whether the upcoming characters spell `s`, ignoring ASCII case
    fn next_matches_ignore_case(&self, s: &str) -> bool {
        for (idx, c) in s.chars().enumerate() {
            match self.toks().peek_n(idx) {
                Some(Token { kind, .. }) if kind.eq_ignore_ascii_case(&c) => {}
                _ => return false,
            }
        }

        true
    }

    fn scan_char(&mut self, c: char) -> bool {
        if let Some(Token { kind, .. }) = self.toks().peek() {
            if kind == c {
                self.toks_mut().next();
                return true;
            }
        }

        false
    }

    fn scan(&mut self, s: &str) -> bool {
        let start = self.toks().cursor();
        for c in s.chars() {
            if !self.scan_char(c) {
                self.toks_mut().set_cursor(start);
                return false;
            }
        }

        true
    }

    fn expect_char(&mut self, c: char) -> LessResult<()> {
        match self.toks().peek() {
            Some(tok) if tok.kind == c => {
                self.toks_mut().next();
                Ok(())
            }
            Some(..) | None => {
                Err((format!("expected \"{}\".", c), self.toks().current_span()).into())
            }
        }
    }

    /// Consume a run of name characters, which may be empty
    fn parse_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(Token { kind, .. }) = self.toks().peek() {
            if !is_name_char(kind) {
                break;
            }
            name.push(kind);
            self.toks_mut().next();
        }
        name
    }

    /// The index of the first of `terminators` at or after `start` that is
    /// not inside a string or parentheses, or the end of input
    fn find_top_level(&self, start: usize, terminators: &[char]) -> usize {
        let toks = self.toks();
        let mut depth = 0_usize;
        let mut quote: Option<char> = None;
        let mut escaped = false;

        let mut idx = start;
        while let Some(Token { kind, .. }) = toks.get(idx) {
            if let Some(q) = quote {
                if escaped {
                    escaped = false;
                } else if kind == '\\' {
                    escaped = true;
                } else if kind == q {
                    quote = None;
                }
            } else {
                match kind {
                    c if depth == 0 && terminators.contains(&c) => return idx,
                    '"' | '\'' => quote = Some(kind),
                    '(' => depth += 1,
                    ')' => depth = depth.saturating_sub(1),
                    _ => {}
                }
            }
            idx += 1;
        }

        toks.len()
    }

    /// Token ranges between top-level occurrences of `separator` in
    /// `start..end`
    fn split_range(&self, start: usize, end: usize, separator: char) -> Vec<(usize, usize)> {
        let mut ranges = Vec::new();
        let mut piece_start = start;

        loop {
            let idx = self.find_top_level(piece_start, &[separator]).min(end);
            ranges.push((piece_start, idx));
            if idx >= end {
                break;
            }
            piece_start = idx + 1;
        }

        ranges
    }
}
