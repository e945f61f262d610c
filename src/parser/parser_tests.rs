use super::*;
use crate::lexer;

fn parse_source(source: &str) -> Result<Vec<Statement>> {
    let tokens = lexer::lex(source).unwrap();
    parse(&tokens)
}

#[test]
fn test_declaration_with_init() {
    let parsed = parse_source("int a = 5;");
    let expected = vec![Statement::Declaration {
        var_type: Type::Int,
        name: "a".into(),
        init: Some(Exp::Literal(Literal::Int(5))),
    }];
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_declaration_without_init() {
    let parsed = parse_source("float f;");
    let expected = vec![Statement::Declaration {
        var_type: Type::Float,
        name: "f".into(),
        init: None,
    }];
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_expression_precedence() {
    let parsed = parse_source("x = a + b * 4;");
    let expected = vec![Statement::Assignment {
        name: "x".into(),
        value: Exp::binary(
            BinaryOp::Add,
            Exp::var("a"),
            Exp::binary(BinaryOp::Mul, Exp::var("b"), Exp::Literal(Literal::Int(4))),
        ),
    }];
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_parens_override_precedence() {
    let parsed = parse_source("x = (a + b) * 4;");
    let expected = vec![Statement::Assignment {
        name: "x".into(),
        value: Exp::binary(
            BinaryOp::Mul,
            Exp::binary(BinaryOp::Add, Exp::var("a"), Exp::var("b")),
            Exp::Literal(Literal::Int(4)),
        ),
    }];
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_left_associative_add_sub() {
    let parsed = parse_source("x = a - b + c;");
    let expected = vec![Statement::Assignment {
        name: "x".into(),
        value: Exp::binary(
            BinaryOp::Add,
            Exp::binary(BinaryOp::Sub, Exp::var("a"), Exp::var("b")),
            Exp::var("c"),
        ),
    }];
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_if_statement() {
    let parsed = parse_source("if (a != b) { a = a - b; }");
    let expected = vec![Statement::If {
        condition: Exp::binary(BinaryOp::NotEqual, Exp::var("a"), Exp::var("b")),
        body: vec![Statement::Assignment {
            name: "a".into(),
            value: Exp::binary(BinaryOp::Sub, Exp::var("a"), Exp::var("b")),
        }],
    }];
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_nested_if_bodies() {
    let parsed = parse_source("if (a > 0) { int x = 1; if (x == 1) { x = 2; } }").unwrap();
    let Statement::If { body, .. } = &parsed[0] else {
        panic!("expected an if statement");
    };
    assert_eq!(body.len(), 2);
    assert!(matches!(body[0], Statement::Declaration { .. }));
    assert!(matches!(body[1], Statement::If { .. }));
}

#[test]
fn test_missing_brace_reported_at_if() {
    let parsed = parse_source("int a = 1;\nif (a > 0) { a = 2;");
    let expected = InnerSyntaxError::MissingClosingBrace.set_pos(2, 1);
    assert_eq!(Err(expected), parsed);
}

#[test]
fn test_chained_comparison_left_associative() {
    let parsed = parse_source("x = a < b < c;");
    let expected = vec![Statement::Assignment {
        name: "x".into(),
        value: Exp::binary(
            BinaryOp::Less,
            Exp::binary(BinaryOp::Less, Exp::var("a"), Exp::var("b")),
            Exp::var("c"),
        ),
    }];
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_less_equal_has_no_grammar_rule() {
    let parsed = parse_source("x = a <= b;");
    let expected = InnerSyntaxError::ExpectedButGot("';'", "<=".into()).set_pos(1, 7);
    assert_eq!(Err(expected), parsed);
}

#[test]
fn test_bool_is_not_a_declaration_type() {
    let parsed = parse_source("bool flag = true;");
    let expected = InnerSyntaxError::InvalidStatement("bool".into()).set_pos(1, 1);
    assert_eq!(Err(expected), parsed);
}

#[test]
fn test_while_is_not_a_statement() {
    let parsed = parse_source("while (a > 0) { }");
    let expected = InnerSyntaxError::InvalidStatement("while".into()).set_pos(1, 1);
    assert_eq!(Err(expected), parsed);
}

#[test]
fn test_string_and_char_literals() {
    let parsed = parse_source("s = \"hi\\n\"; c = '\\t';");
    let expected = vec![
        Statement::Assignment {
            name: "s".into(),
            value: Exp::Literal(Literal::Str("hi\n".into())),
        },
        Statement::Assignment {
            name: "c".into(),
            value: Exp::Literal(Literal::Char('\t')),
        },
    ];
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_eof_error_keeps_line_only() {
    let parsed = parse_source("int a =");
    let err = parsed.unwrap_err();
    assert_eq!(err.inner, InnerSyntaxError::UnexpectedEof("an expression"));
    assert_eq!(err.line, 1);
    assert_eq!(err.col, None);
}

#[test]
fn test_empty_input_parses_to_nothing() {
    assert_eq!(Ok(Vec::new()), parse(&[]));
}

#[test]
fn test_float_literal_parses_as_float() {
    let parsed = parse_source("float f = 2.5;");
    let expected = vec![Statement::Declaration {
        var_type: Type::Float,
        name: "f".into(),
        init: Some(Exp::Literal(Literal::Float(2.5))),
    }];
    assert_eq!(Ok(expected), parsed);
}
