use super::parse_error::{InnerSyntaxError, Result, SyntaxError};
use crate::lexer::{Token, TokenKind};

/// One-token-lookahead view over the caller's token slice. The slice itself
/// is never mutated; consumption is just the position advancing.
#[derive(Debug)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    position: usize,
    last_line: u64,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let last_line = tokens.last().map_or(1, |t| t.line);
        Self {
            tokens,
            position: 0,
            last_line,
        }
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    pub fn at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub fn bump(&mut self) {
        self.position += 1;
    }

    pub fn bump_if_kind(&mut self, kind: TokenKind) -> bool {
        let condition = self.peek().is_some_and(|t| t.kind == kind);
        if condition {
            self.bump();
        }
        condition
    }

    pub fn eof_error(&self, expected: &'static str) -> SyntaxError {
        InnerSyntaxError::UnexpectedEof(expected).set_line(self.last_line)
    }

    pub fn peek_or_eof(&self, expected: &'static str) -> Result<&'a Token> {
        self.peek().ok_or_else(|| self.eof_error(expected))
    }

    pub fn next_or_eof(&mut self, expected: &'static str) -> Result<&'a Token> {
        let next = self
            .tokens
            .get(self.position)
            .ok_or_else(|| self.eof_error(expected))?;
        self.position += 1;
        Ok(next)
    }

    pub fn expect_kind(&mut self, kind: TokenKind, expected: &'static str) -> Result<&'a Token> {
        let next = self.next_or_eof(expected)?;
        if next.kind == kind {
            Ok(next)
        } else {
            Err(InnerSyntaxError::ExpectedButGot(expected, next.text.clone())
                .set_pos(next.line, next.col))
        }
    }
}
