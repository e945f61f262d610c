//! Listing emission using [Display]
//!
//! Implements [Display] for the quadruple and object-instruction types so
//! the driver can render them with [to_string] or as a formatting arg in any
//! formatting context (e.g. [format!], [write!], [println!], ..). The object
//! listing printed this way is the compiler's terminal artifact; there is no
//! binary encoding.
//!
//! [Display]: https://doc.rust-lang.org/std/fmt/trait.Display.html
//! [to_string]: https://doc.rust-lang.org/std/string/trait.ToString.html#tymethod.to_string
//! [format!]: https://doc.rust-lang.org/std/macro.format.html
//! [write!]: https://doc.rust-lang.org/std/macro.write.html
//! [println!]: https://doc.rust-lang.org/std/macro.println.html

use crate::codegen::ObjInstruction;
use crate::quads::{QBinaryOp, QValue, Quad};

use std::fmt;

impl fmt::Display for QValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Literal(literal) => write!(f, "{literal}"),
            Self::Var(name) => write!(f, "{name}"),
        }
    }
}

impl fmt::Display for QBinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::Equal => write!(f, "=="),
            Self::NotEqual => write!(f, "!="),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
        }
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Assign { dest, src } => write!(f, "{dest} = {src}"),
            Self::Binary {
                dest,
                op,
                left,
                right,
            } => write!(f, "{dest} = {left} {op} {right}"),
            Self::GotoIfFalse { cond, label } => write!(f, "GOTOF {cond} {label}"),
            Self::Label(name) => write!(f, "LABEL {name}"),
        }
    }
}

impl fmt::Display for ObjInstruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Load(value) => write!(f, "LOAD {value}"),
            Self::Store(name) => write!(f, "STORE {name}"),
            Self::Add(value) => write!(f, "ADD {value}"),
            Self::Sub(value) => write!(f, "SUB {value}"),
            Self::Mul(value) => write!(f, "MUL {value}"),
            Self::Div(value) => write!(f, "DIV {value}"),
            Self::CmpLt(value) => write!(f, "CMP_LT {value}"),
            Self::CmpGt(value) => write!(f, "CMP_GT {value}"),
            Self::CmpEq(value) => write!(f, "CMP_EQ {value}"),
            Self::CmpNe(value) => write!(f, "CMP_NE {value}"),
            Self::JumpIfFalse(label) => write!(f, "JUMP_IF_FALSE {label}"),
            Self::Jump(label) => write!(f, "JUMP {label}"),
            Self::Label(label) => write!(f, "LABEL {label}"),
        }
    }
}
