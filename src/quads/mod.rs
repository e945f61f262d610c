
use crate::ast::*;
use log::debug;
use std::fmt;

pub type Quads = Vec<Quad>;
type Result<T> = std::result::Result<T, InternalError>;

/// One intermediate instruction. Destinations are variable names or the
/// synthetic temporaries `t1, t2, ..`; labels are `L1, L2, ..`.
#[derive(Debug, Clone, PartialEq)]
pub enum Quad {
    Assign {
        dest: Identifier,
        src: QValue,
    },
    Binary {
        dest: Identifier,
        op: QBinaryOp,
        left: QValue,
        right: QValue,
    },
    GotoIfFalse {
        cond: QValue,
        label: Identifier,
    },
    Label(Identifier),
}

#[derive(Debug, Clone, PartialEq)]
pub enum QValue {
    Literal(Literal),
    Var(Identifier),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum QBinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Equal,
    NotEqual,
    Less,
    Greater,
}

impl From<BinaryOp> for QBinaryOp {
    fn from(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Add => Self::Add,
            BinaryOp::Sub => Self::Sub,
            BinaryOp::Mul => Self::Mul,
            BinaryOp::Div => Self::Div,
            BinaryOp::Equal => Self::Equal,
            BinaryOp::NotEqual => Self::NotEqual,
            BinaryOp::Less => Self::Less,
            BinaryOp::Greater => Self::Greater,
        }
    }
}

/// Raised when a statement kind that must never reach lowering does.
/// Signals a pipeline bug in the caller, not bad user input.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum InternalError {
    FunDeclarationInLowering(Identifier),
    FunCallInLowering(Identifier),
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::FunDeclarationInLowering(name) => {
                write!(f, "function declaration '{name}' reached intermediate code generation")
            }
            Self::FunCallInLowering(name) => {
                write!(f, "function call '{name}' reached intermediate code generation")
            }
        }
    }
}

impl std::error::Error for InternalError {}

/// Per-run lowering state: the output plus the temporary/label counters.
/// Both counters start at 1 and only ever grow within the run; names are
/// never recycled, not even across unrelated statements.
struct QuadGen {
    quads: Quads,
    temp_count: u64,
    label_count: u64,
}

impl QuadGen {
    fn new() -> Self {
        Self {
            quads: Quads::new(),
            temp_count: 0,
            label_count: 0,
        }
    }

    fn new_temp(&mut self) -> Identifier {
        self.temp_count += 1;
        format!("t{}", self.temp_count)
    }

    fn new_label(&mut self) -> Identifier {
        self.label_count += 1;
        format!("L{}", self.label_count)
    }

    /// Lowers an expression and returns the value holder the caller should
    /// read: identifiers pass through, everything else lands in a fresh
    /// temporary. A literal always materializes, even when trivially
    /// redundant.
    fn lower_exp(&mut self, exp: &Exp) -> QValue {
        match exp {
            Exp::Literal(literal) => {
                let temp = self.new_temp();
                self.quads.push(Quad::Assign {
                    dest: temp.clone(),
                    src: QValue::Literal(literal.clone()),
                });
                QValue::Var(temp)
            }
            Exp::Var(name) => QValue::Var(name.clone()),
            Exp::Binary(op, left, right) => {
                let left = self.lower_exp(left);
                let right = self.lower_exp(right);
                let temp = self.new_temp();
                self.quads.push(Quad::Binary {
                    dest: temp.clone(),
                    op: QBinaryOp::from(*op),
                    left,
                    right,
                });
                QValue::Var(temp)
            }
        }
    }

    fn lower_statement(&mut self, statement: &Statement) -> Result<()> {
        match statement {
            // A declaration without an initializer emits nothing.
            Statement::Declaration { init: None, .. } => Ok(()),
            Statement::Declaration {
                name,
                init: Some(init),
                ..
            }
            | Statement::Assignment { name, value: init } => {
                let src = self.lower_exp(init);
                self.quads.push(Quad::Assign {
                    dest: name.clone(),
                    src,
                });
                Ok(())
            }
            Statement::If { condition, body } => {
                let cond = self.lower_exp(condition);
                // No else in this language, so one label suffices.
                let label = self.new_label();
                self.quads.push(Quad::GotoIfFalse {
                    cond,
                    label: label.clone(),
                });
                for statement in body {
                    self.lower_statement(statement)?;
                }
                self.quads.push(Quad::Label(label));
                Ok(())
            }
            Statement::FunDeclaration { name, .. } => {
                Err(InternalError::FunDeclarationInLowering(name.clone()))
            }
            Statement::FunCall { name, .. } => Err(InternalError::FunCallInLowering(name.clone())),
        }
    }
}

pub fn lower(ast: &[Statement]) -> Result<Quads> {
    let mut generator = QuadGen::new();
    for statement in ast {
        generator.lower_statement(statement)?;
    }
    debug!("lowered to {} quadruples", generator.quads.len());
    Ok(generator.quads)
}
