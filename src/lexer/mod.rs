mod cursor;
mod lexer_error;
mod token;

use cursor::Cursor;
use log::debug;

pub use lexer_error::LexicalError;
pub use token::{Token, TokenKind, KEYWORDS};

pub type Tokens = Vec<Token>;
type Result<T> = std::result::Result<T, LexicalError>;

fn lex_string(cursor: &mut Cursor) -> Result<Token> {
    let (line, col) = cursor.position();
    let unterminated = LexicalError::new('"', line, col);
    let mut text = String::new();
    text.push(cursor.take().expect("Should never fail"));
    loop {
        match cursor.peek() {
            None => return Err(unterminated),
            Some('"') => {
                text.push(cursor.take().expect("Should never fail"));
                return Ok(Token::new(TokenKind::Str, text, line, col));
            }
            // An escape pair; the escaped character may not be a newline.
            Some('\\') => {
                text.push(cursor.take().expect("Should never fail"));
                match cursor.peek() {
                    Some(c) if c != '\n' => text.push(cursor.take().expect("Should never fail")),
                    _ => return Err(unterminated),
                }
            }
            // Raw newlines are allowed inside the literal; take() keeps the
            // line/column counters honest across them.
            Some(_) => text.push(cursor.take().expect("Should never fail")),
        }
    }
}

fn lex_char(cursor: &mut Cursor) -> Result<Token> {
    let (line, col) = cursor.position();
    let malformed = LexicalError::new('\'', line, col);
    let mut text = String::new();
    text.push(cursor.take().expect("Should never fail"));
    match cursor.peek() {
        None | Some('\'') => return Err(malformed),
        Some('\\') => {
            text.push(cursor.take().expect("Should never fail"));
            match cursor.peek() {
                Some(c) if c != '\n' => text.push(cursor.take().expect("Should never fail")),
                _ => return Err(malformed),
            }
        }
        Some(_) => text.push(cursor.take().expect("Should never fail")),
    }
    if cursor.peek() == Some('\'') {
        text.push(cursor.take().expect("Should never fail"));
        Ok(Token::new(TokenKind::Char, text, line, col))
    } else {
        Err(malformed)
    }
}

/// Two-character comparisons win over their one-character prefixes; a lone
/// `!` matches nothing.
fn lex_comparison(cursor: &mut Cursor) -> Result<Token> {
    let (line, col) = cursor.position();
    let first = cursor.take().expect("Should never fail");
    let token = match (first, cursor.peek()) {
        ('=', Some('=')) => {
            cursor.take();
            Token::new(TokenKind::Equals, "==", line, col)
        }
        ('!', Some('=')) => {
            cursor.take();
            Token::new(TokenKind::NotEqual, "!=", line, col)
        }
        ('<', Some('=')) => {
            cursor.take();
            Token::new(TokenKind::LessEqual, "<=", line, col)
        }
        ('>', Some('=')) => {
            cursor.take();
            Token::new(TokenKind::GreaterEqual, ">=", line, col)
        }
        ('<', _) => Token::new(TokenKind::Less, "<", line, col),
        ('>', _) => Token::new(TokenKind::Greater, ">", line, col),
        ('=', _) => Token::new(TokenKind::Operator, "=", line, col),
        ('!', _) => return Err(LexicalError::new('!', line, col)),
        _ => unreachable!("caller checked the first character"),
    };
    Ok(token)
}

fn lex_number(cursor: &mut Cursor) -> Token {
    let (line, col) = cursor.position();
    let mut text = String::new();
    while matches!(cursor.peek(), Some(c) if c.is_ascii_digit()) {
        text.push(cursor.take().expect("Should never fail"));
    }
    // A decimal point only belongs to the number when digits follow it;
    // "5." lexes as the number 5 and a stray dot.
    if cursor.peek() == Some('.') && matches!(cursor.peek_2nd(), Some(c) if c.is_ascii_digit()) {
        text.push(cursor.take().expect("Should never fail"));
        while matches!(cursor.peek(), Some(c) if c.is_ascii_digit()) {
            text.push(cursor.take().expect("Should never fail"));
        }
    }
    Token::new(TokenKind::Number, text, line, col)
}

fn lex_word(cursor: &mut Cursor) -> Token {
    let (line, col) = cursor.position();
    let mut text = String::new();
    while matches!(cursor.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
        text.push(cursor.take().expect("Should never fail"));
    }
    let kind = if KEYWORDS.contains(&text.as_str()) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };
    Token::new(kind, text, line, col)
}

fn skip_comment(cursor: &mut Cursor) {
    while matches!(cursor.peek(), Some(c) if c != '\n') {
        cursor.take();
    }
}

pub fn lex(input: &str) -> Result<Tokens> {
    let mut tokens = Tokens::new();
    let mut cursor = Cursor::new(input);

    while let Some(c) = cursor.peek() {
        match c {
            '"' => tokens.push(lex_string(&mut cursor)?),
            '\'' => tokens.push(lex_char(&mut cursor)?),
            '=' | '!' | '<' | '>' => tokens.push(lex_comparison(&mut cursor)?),
            '/' if cursor.peek_2nd() == Some('/') => skip_comment(&mut cursor),
            '0'..='9' => tokens.push(lex_number(&mut cursor)),
            'a'..='z' | 'A'..='Z' | '_' => tokens.push(lex_word(&mut cursor)),
            '+' | '-' | '*' | '/' | '(' | ')' | '{' | '}' | ';' => {
                let (line, col) = cursor.position();
                let kind = TokenKind::try_from(c).expect("Should never fail");
                cursor.take();
                tokens.push(Token::new(kind, c, line, col));
            }
            c if c.is_whitespace() => {
                cursor.take();
            }
            _ => {
                let (line, col) = cursor.position();
                return Err(LexicalError::new(c, line, col));
            }
        }
    }
    debug!("lexed {} tokens", tokens.len());
    Ok(tokens)
}
