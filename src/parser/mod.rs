mod cursor;
mod parse_error;
#[cfg(test)]
mod parser_tests;

use crate::ast::*;
use crate::lexer::{Token, TokenKind};
use cursor::Cursor;
use log::debug;

pub use parse_error::{InnerSyntaxError, Result, SyntaxError};

impl TryFrom<&Token> for BinaryOp {
    type Error = InnerSyntaxError;
    fn try_from(token: &Token) -> std::result::Result<Self, InnerSyntaxError> {
        match token.kind {
            TokenKind::Equals => Ok(Self::Equal),
            TokenKind::NotEqual => Ok(Self::NotEqual),
            TokenKind::Less => Ok(Self::Less),
            TokenKind::Greater => Ok(Self::Greater),
            TokenKind::Operator => match token.text.as_str() {
                "+" => Ok(Self::Add),
                "-" => Ok(Self::Sub),
                "*" => Ok(Self::Mul),
                "/" => Ok(Self::Div),
                _ => Err(InnerSyntaxError::UnexpectedToken(token.text.clone())),
            },
            _ => Err(InnerSyntaxError::UnexpectedToken(token.text.clone())),
        }
    }
}

fn parse_type(cursor: &mut Cursor) -> Result<Type> {
    let token = cursor.next_or_eof("a type")?;
    // `bool` is a keyword but not a declarable type.
    if token.is_keyword("int") {
        Ok(Type::Int)
    } else if token.is_keyword("float") {
        Ok(Type::Float)
    } else {
        Err(InnerSyntaxError::ExpectedType(token.text.clone()).set_pos(token.line, token.col))
    }
}

fn parse_identifier(cursor: &mut Cursor) -> Result<Identifier> {
    let token = cursor.next_or_eof("an identifier")?;
    if token.kind == TokenKind::Identifier {
        Ok(token.text.clone())
    } else {
        Err(InnerSyntaxError::ExpectedIdentifier(token.text.clone()).set_pos(token.line, token.col))
    }
}

fn parse_equals(cursor: &mut Cursor) -> Result<()> {
    let token = cursor.next_or_eof("'='")?;
    if token.is_operator("=") {
        Ok(())
    } else {
        Err(InnerSyntaxError::ExpectedButGot("'='", token.text.clone())
            .set_pos(token.line, token.col))
    }
}

fn parse_declaration(cursor: &mut Cursor) -> Result<Statement> {
    let var_type = parse_type(cursor)?;
    let name = parse_identifier(cursor)?;

    if cursor.bump_if_kind(TokenKind::Semicolon) {
        return Ok(Statement::Declaration {
            var_type,
            name,
            init: None,
        });
    }

    parse_equals(cursor)?;
    let init = parse_expression(cursor)?;
    cursor.expect_kind(TokenKind::Semicolon, "';'")?;
    Ok(Statement::Declaration {
        var_type,
        name,
        init: Some(init),
    })
}

fn parse_assignment(cursor: &mut Cursor) -> Result<Statement> {
    let name = parse_identifier(cursor)?;
    parse_equals(cursor)?;
    let value = parse_expression(cursor)?;
    cursor.expect_kind(TokenKind::Semicolon, "';'")?;
    Ok(Statement::Assignment { name, value })
}

fn parse_if(cursor: &mut Cursor) -> Result<Statement> {
    // An unclosed body is reported here, at the `if` itself, instead of at
    // whatever token the scan ran out on.
    let if_token = cursor.peek_or_eof("'if'")?;
    let (if_line, if_col) = (if_token.line, if_token.col);
    cursor.bump();

    cursor.expect_kind(TokenKind::LParen, "'('")?;
    let condition = parse_expression(cursor)?;
    cursor.expect_kind(TokenKind::RParen, "')'")?;
    cursor.expect_kind(TokenKind::LBrace, "'{'")?;

    let mut body = Vec::new();
    while let Some(token) = cursor.peek() {
        if token.kind == TokenKind::RBrace {
            break;
        }
        body.push(parse_statement(cursor)?);
    }

    if !cursor.bump_if_kind(TokenKind::RBrace) {
        return Err(InnerSyntaxError::MissingClosingBrace.set_pos(if_line, if_col));
    }

    Ok(Statement::If { condition, body })
}

fn parse_expression(cursor: &mut Cursor) -> Result<Exp> {
    parse_comparison(cursor)
}

fn parse_binary_op(cursor: &mut Cursor) -> Result<BinaryOp> {
    let token = cursor.next_or_eof("an operator")?;
    BinaryOp::try_from(token).map_err(|err| err.set_pos(token.line, token.col))
}

/// Chained comparisons nest left-associatively into ordinary binary nodes;
/// `<=` and `>=` are lexed but no rule here consumes them.
fn parse_comparison(cursor: &mut Cursor) -> Result<Exp> {
    let mut left = parse_add_sub(cursor)?;
    while matches!(cursor.peek(), Some(t) if t.is_comparison()) {
        let op = parse_binary_op(cursor)?;
        let right = parse_add_sub(cursor)?;
        left = Exp::binary(op, left, right);
    }
    Ok(left)
}

fn parse_add_sub(cursor: &mut Cursor) -> Result<Exp> {
    let mut left = parse_mul_div(cursor)?;
    while matches!(cursor.peek(), Some(t) if t.is_operator("+") || t.is_operator("-")) {
        let op = parse_binary_op(cursor)?;
        let right = parse_mul_div(cursor)?;
        left = Exp::binary(op, left, right);
    }
    Ok(left)
}

fn parse_mul_div(cursor: &mut Cursor) -> Result<Exp> {
    let mut left = parse_primary(cursor)?;
    while matches!(cursor.peek(), Some(t) if t.is_operator("*") || t.is_operator("/")) {
        let op = parse_binary_op(cursor)?;
        let right = parse_primary(cursor)?;
        left = Exp::binary(op, left, right);
    }
    Ok(left)
}

fn parse_number(token: &Token) -> Result<Exp> {
    let parsed = if token.text.contains('.') {
        token.text.parse::<f64>().ok().map(Literal::Float)
    } else {
        token.text.parse::<i64>().ok().map(Literal::Int)
    };
    parsed
        .map(Exp::Literal)
        .ok_or_else(|| InnerSyntaxError::BadNumber(token.text.clone()).set_pos(token.line, token.col))
}

/// Strip the quote pair the lexer kept in the lexeme.
fn literal_body(text: &str) -> &str {
    &text[1..text.len() - 1]
}

fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        // The lexer guarantees every backslash is paired.
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => (),
        }
    }
    out
}

fn parse_char_literal(token: &Token) -> Exp {
    let body = unescape(literal_body(&token.text));
    let c = body.chars().next().expect("Should never fail");
    Exp::Literal(Literal::Char(c))
}

fn parse_primary(cursor: &mut Cursor) -> Result<Exp> {
    let token = cursor.peek_or_eof("an expression")?;
    match token.kind {
        TokenKind::LParen => {
            cursor.bump();
            let exp = parse_expression(cursor)?;
            cursor.expect_kind(TokenKind::RParen, "')'")?;
            Ok(exp)
        }
        TokenKind::Number => {
            cursor.bump();
            parse_number(token)
        }
        TokenKind::Str => {
            cursor.bump();
            let body = unescape(literal_body(&token.text));
            Ok(Exp::Literal(Literal::Str(body)))
        }
        TokenKind::Char => {
            cursor.bump();
            Ok(parse_char_literal(token))
        }
        TokenKind::Identifier => {
            cursor.bump();
            Ok(Exp::Var(token.text.clone()))
        }
        _ => {
            Err(InnerSyntaxError::UnexpectedToken(token.text.clone())
                .set_pos(token.line, token.col))
        }
    }
}

fn parse_statement(cursor: &mut Cursor) -> Result<Statement> {
    let token = cursor.peek_or_eof("a statement")?;
    match token {
        t if t.is_keyword("int") || t.is_keyword("float") => parse_declaration(cursor),
        t if t.is_keyword("if") => parse_if(cursor),
        t if t.kind == TokenKind::Identifier => parse_assignment(cursor),
        t => Err(InnerSyntaxError::InvalidStatement(t.text.clone()).set_pos(t.line, t.col)),
    }
}

pub fn parse(tokens: &[Token]) -> Result<Vec<Statement>> {
    let mut statements = Vec::new();
    let mut cursor = Cursor::new(tokens);

    while !cursor.at_end() {
        statements.push(parse_statement(&mut cursor)?);
    }
    debug!("parsed {} statements", statements.len());
    Ok(statements)
}
