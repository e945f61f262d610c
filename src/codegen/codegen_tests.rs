use super::*;
use crate::ast::Literal;
use crate::lexer;
use crate::parser;
use crate::quads::{self, Quads};
use crate::semantic_analysis;

fn compile(source: &str) -> ObjInstructions {
    let tokens = lexer::lex(source).unwrap();
    let ast = parser::parse(&tokens).unwrap();
    semantic_analysis::analyze(&ast).unwrap();
    let quads = quads::lower(&ast).unwrap();
    emit(&quads)
}

fn int(i: i64) -> QValue {
    QValue::Literal(Literal::Int(i))
}

fn var(name: &str) -> QValue {
    QValue::Var(name.into())
}

#[test]
fn test_assign_becomes_load_store() {
    let quads: Quads = vec![Quad::Assign {
        dest: "a".into(),
        src: int(5),
    }];
    let expected = vec![
        ObjInstruction::Load(int(5)),
        ObjInstruction::Store("a".into()),
    ];
    assert_eq!(expected, emit(&quads));
}

#[test]
fn test_arithmetic_mapping() {
    let quads: Quads = vec![Quad::Binary {
        dest: "t1".into(),
        op: QBinaryOp::Mul,
        left: var("a"),
        right: var("b"),
    }];
    let expected = vec![
        ObjInstruction::Load(var("a")),
        ObjInstruction::Mul(var("b")),
        ObjInstruction::Store("t1".into()),
    ];
    assert_eq!(expected, emit(&quads));
}

#[test]
fn test_comparison_mapping() {
    let cases = [
        (QBinaryOp::Less, ObjInstruction::CmpLt(var("b"))),
        (QBinaryOp::Greater, ObjInstruction::CmpGt(var("b"))),
        (QBinaryOp::Equal, ObjInstruction::CmpEq(var("b"))),
        (QBinaryOp::NotEqual, ObjInstruction::CmpNe(var("b"))),
    ];
    for (op, compare) in cases {
        let quads: Quads = vec![Quad::Binary {
            dest: "t1".into(),
            op,
            left: var("a"),
            right: var("b"),
        }];
        let expected = vec![
            ObjInstruction::Load(var("a")),
            compare,
            ObjInstruction::Store("t1".into()),
        ];
        assert_eq!(expected, emit(&quads));
    }
}

#[test]
fn test_goto_if_false_and_label() {
    let quads: Quads = vec![
        Quad::GotoIfFalse {
            cond: var("t1"),
            label: "L1".into(),
        },
        Quad::Label("L1".into()),
    ];
    let expected = vec![
        ObjInstruction::Load(var("t1")),
        ObjInstruction::JumpIfFalse("L1".into()),
        ObjInstruction::Label("L1".into()),
    ];
    assert_eq!(expected, emit(&quads));
}

#[test]
fn test_redundant_load_store_pairs_survive() {
    // t1 = 7; a = t1 keeps all four instructions; nothing is merged.
    let instructions = compile("int a = 7;");
    let expected = vec![
        ObjInstruction::Load(int(7)),
        ObjInstruction::Store("t1".into()),
        ObjInstruction::Load(var("t1")),
        ObjInstruction::Store("a".into()),
    ];
    assert_eq!(expected, instructions);
}

#[cfg(feature = "emission")]
#[test]
fn test_quad_listing_form() {
    let tokens = lexer::lex("int c = a + b; if (c > 0) { c = 0; }").unwrap();
    let ast = parser::parse(&tokens).unwrap();
    let quads = crate::quads::lower(&ast).unwrap();
    let listing: Vec<String> = quads.iter().map(ToString::to_string).collect();
    let expected = vec![
        "t1 = a + b",
        "c = t1",
        "t2 = 0",
        "t3 = c > t2",
        "GOTOF t3 L1",
        "t4 = 0",
        "c = t4",
        "LABEL L1",
    ];
    assert_eq!(expected, listing);
}

#[cfg(feature = "emission")]
#[test]
fn test_end_to_end_listing() {
    let instructions = compile("int a = 5; int b = 3; int c = a + b;");
    let listing: Vec<String> = instructions.iter().map(ToString::to_string).collect();
    let expected = vec![
        "LOAD 5", "STORE t1", "LOAD t1", "STORE a", "LOAD 3", "STORE t2", "LOAD t2", "STORE b",
        "LOAD a", "ADD b", "STORE t3", "LOAD t3", "STORE c",
    ];
    assert_eq!(expected, listing);
}

#[cfg(feature = "emission")]
#[test]
fn test_conditional_listing() {
    let instructions = compile("int a = 10; int b = 5; if (a != b) { a = a - b; }");
    let listing: Vec<String> = instructions.iter().map(ToString::to_string).collect();
    let expected = vec![
        "LOAD 10",
        "STORE t1",
        "LOAD t1",
        "STORE a",
        "LOAD 5",
        "STORE t2",
        "LOAD t2",
        "STORE b",
        "LOAD a",
        "CMP_NE b",
        "STORE t3",
        "LOAD t3",
        "JUMP_IF_FALSE L1",
        "LOAD a",
        "SUB b",
        "STORE t4",
        "LOAD t4",
        "STORE a",
        "LABEL L1",
    ];
    assert_eq!(expected, listing);
}
