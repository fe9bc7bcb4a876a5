/// Characters allowed in variable, mixin and parameter names
pub(crate) fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Replace every run of whitespace with a single space and trim the ends
pub(crate) fn collapse_whitespace(s: &str) -> String {
    let mut buffer = String::with_capacity(s.len());

    for word in s.split_whitespace() {
        if !buffer.is_empty() {
            buffer.push(' ');
        }
        buffer.push_str(word);
    }

    buffer
}

/// Split `s` on `separator`, ignoring separators nested in parentheses or
/// inside quoted strings. Pieces are returned untrimmed.
pub(crate) fn split_top_level(s: &str, separator: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0_usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (idx, c) in s.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' => quote = Some(c),
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                pieces.push(&s[start..idx]);
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }

    pieces.push(&s[start..]);
    pieces
}

/// Whether `separator` occurs in `s` outside of parentheses and strings
pub(crate) fn contains_top_level(s: &str, separator: char) -> bool {
    split_top_level(s, separator).len() > 1
}

/// For a string ending in `)`, the byte offset of the `(` that it closes
pub(crate) fn matching_open_paren(s: &str) -> Option<usize> {
    if !s.ends_with(')') {
        return None;
    }

    let mut depth = 0_usize;
    for (idx, c) in s.char_indices().rev() {
        match c {
            ')' => depth += 1,
            '(' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod test {
    use super::{collapse_whitespace, matching_open_paren, split_top_level};

    #[test]
    fn split_respects_parens_and_quotes() {
        assert_eq!(
            split_top_level("a, b(c, d), \"e, f\"", ','),
            vec!["a", " b(c, d)", " \"e, f\""]
        );
    }

    #[test]
    fn collapse_joins_lines() {
        assert_eq!(collapse_whitespace("  a\n   b\tc "), "a b c");
    }

    #[test]
    fn finds_the_outermost_trailing_group() {
        assert_eq!(matching_open_paren(".a @if(max(1, 2) > 1)"), Some(6));
        assert_eq!(matching_open_paren("a)"), None);
        assert_eq!(matching_open_paren("abc"), None);
    }
}
