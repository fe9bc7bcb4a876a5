//! Property values are parsed in two steps. [`tokenize`] splits the text into
//! words, separators, operators, function calls and parenthesized groups;
//! variables are substituted at that level. [`parse_expression`] then builds
//! an expression tree with `*` and `/` binding tighter than `+` and `-`.
//!
//! An operator only counts as one when it has whitespace on both sides, so
//! `1px-2px`, `-5px` and `a/b` stay single words.

use crate::{
    ast::{Expr, ListItem, ValueToken},
    common::BinaryOp,
    utils::is_name_char,
};

pub(crate) fn tokenize(input: &str) -> Vec<ValueToken> {
    let mut lexer = ValueLexer {
        chars: input.chars().collect(),
        cursor: 0,
    };

    lexer.tokens(false)
}

struct ValueLexer {
    chars: Vec<char>,
    cursor: usize,
}

impl ValueLexer {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.cursor).copied()
    }

    fn peek_n(&self, n: usize) -> Option<char> {
        self.chars.get(self.cursor + n).copied()
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.cursor;
        while self.peek().map_or(false, char::is_whitespace) {
            self.cursor += 1;
        }
        self.cursor > start
    }

    /// An operator character followed by whitespace
    fn operator_here(&self) -> Option<BinaryOp> {
        let op = BinaryOp::from_char(self.peek()?)?;
        if self.peek_n(1).map_or(false, char::is_whitespace) {
            Some(op)
        } else {
            None
        }
    }

    /// Read tokens until the end of input or, when `nested`, the `)` closing
    /// the current group
    fn tokens(&mut self, nested: bool) -> Vec<ValueToken> {
        let mut tokens = Vec::new();

        while let Some(c) = self.peek() {
            match c {
                ')' if nested => {
                    self.cursor += 1;
                    break;
                }
                c if c.is_whitespace() => {
                    self.skip_whitespace();
                    if let Some(op) = self.operator_here() {
                        self.cursor += 1;
                        self.skip_whitespace();
                        tokens.push(ValueToken::Op(op));
                    } else if matches!(self.peek(), Some(',')) {
                        continue;
                    } else if !matches!(self.peek(), None | Some(')')) {
                        tokens.push(ValueToken::Space);
                    }
                }
                ',' => {
                    self.cursor += 1;
                    let spaced = self.skip_whitespace();
                    tokens.push(ValueToken::Comma { spaced });
                }
                '(' => {
                    self.cursor += 1;
                    tokens.push(ValueToken::Group(self.tokens(true)));
                }
                '@' if self.peek_n(1).map_or(false, is_name_char) => {
                    self.cursor += 1;
                    let start = self.cursor;
                    while self.peek().map_or(false, is_name_char) {
                        self.cursor += 1;
                    }
                    tokens.push(ValueToken::Variable(self.chars[start..self.cursor].iter().collect()));
                }
                '"' | '\'' => tokens.push(ValueToken::Word(self.quoted_string(c))),
                _ if tokens.is_empty() && self.operator_here().is_some() => {
                    if let Some(op) = self.operator_here() {
                        self.cursor += 1;
                        self.skip_whitespace();
                        tokens.push(ValueToken::Op(op));
                    }
                }
                _ => {
                    let word = self.word();
                    if self.peek() == Some('(') {
                        self.cursor += 1;
                        let args = self.tokens(true);
                        tokens.push(ValueToken::Call { name: word, args });
                    } else {
                        tokens.push(ValueToken::Word(word));
                    }
                }
            }
        }

        tokens
    }

    fn quoted_string(&mut self, quote: char) -> String {
        let start = self.cursor;
        self.cursor += 1;
        let mut escaped = false;

        while let Some(c) = self.peek() {
            self.cursor += 1;
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                break;
            }
        }

        self.chars[start..self.cursor].iter().collect()
    }

    fn word(&mut self) -> String {
        let start = self.cursor;

        while let Some(c) = self.peek() {
            let ends_word = c.is_whitespace()
                || matches!(c, ',' | '(' | ')' | '"' | '\'')
                || (c == '@' && self.peek_n(1).map_or(false, is_name_char));
            if ends_word && self.cursor > start {
                break;
            }
            self.cursor += 1;
        }

        self.chars[start..self.cursor].iter().collect()
    }
}

/// Build an expression tree from tokens. Leading and trailing whitespace is
/// ignored. Parsing never fails: a missing operand becomes [`Expr::Empty`].
pub(crate) fn parse_expression(tokens: &[ValueToken]) -> Expr {
    let start = tokens
        .iter()
        .position(|t| *t != ValueToken::Space)
        .unwrap_or(tokens.len());
    let end = tokens
        .iter()
        .rposition(|t| *t != ValueToken::Space)
        .map_or(start, |idx| idx + 1);

    let mut parser = ExprParser {
        toks: &tokens[start..end.max(start)],
        cursor: 0,
    };

    parser.parse_list()
}

/// Split the arguments of a function call on top-level commas
pub(crate) fn split_arguments(tokens: &[ValueToken]) -> Vec<&[ValueToken]> {
    if tokens.iter().all(|t| *t == ValueToken::Space) {
        return Vec::new();
    }

    tokens
        .split(|t| matches!(t, ValueToken::Comma { .. }))
        .collect()
}

struct ExprParser<'a> {
    toks: &'a [ValueToken],
    cursor: usize,
}

impl<'a> ExprParser<'a> {
    fn peek(&self) -> Option<&'a ValueToken> {
        self.toks.get(self.cursor)
    }

    fn parse_list(&mut self) -> Expr {
        let mut items = Vec::new();

        while let Some(tok) = self.peek() {
            match tok {
                ValueToken::Space | ValueToken::Comma { .. } => {
                    self.cursor += 1;
                    items.push(ListItem::Separator(tok.clone()));
                }
                _ => items.push(ListItem::Expr(self.parse_sum())),
            }
        }

        if items.len() == 1 {
            if let Some(ListItem::Expr(expr)) = items.pop() {
                return expr;
            }
        }

        if items.is_empty() {
            Expr::Empty
        } else {
            Expr::List(items)
        }
    }

    fn parse_sum(&mut self) -> Expr {
        let mut lhs = self.parse_product();

        while let Some(ValueToken::Op(op @ (BinaryOp::Plus | BinaryOp::Minus))) = self.peek() {
            self.cursor += 1;
            let rhs = self.parse_product();
            lhs = Expr::BinaryOp(Box::new(lhs), *op, Box::new(rhs));
        }

        lhs
    }

    fn parse_product(&mut self) -> Expr {
        let mut lhs = self.parse_primary();

        while let Some(ValueToken::Op(op @ (BinaryOp::Mul | BinaryOp::Div))) = self.peek() {
            self.cursor += 1;
            let rhs = self.parse_primary();
            lhs = Expr::BinaryOp(Box::new(lhs), *op, Box::new(rhs));
        }

        lhs
    }

    fn parse_primary(&mut self) -> Expr {
        let expr = match self.peek() {
            Some(ValueToken::Word(word)) => Expr::Word(word.clone()),
            Some(ValueToken::Variable(name)) => Expr::Word(format!("@{}", name)),
            Some(ValueToken::Call { name, args }) => Expr::Call {
                name: name.clone(),
                args: args.clone(),
            },
            Some(ValueToken::Group(inner)) => Expr::Group(inner.clone()),
            Some(ValueToken::Op(..) | ValueToken::Space | ValueToken::Comma { .. }) | None => {
                return Expr::Empty
            }
        };

        self.cursor += 1;
        expr
    }
}
