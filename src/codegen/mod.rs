#[cfg(test)]
mod codegen_tests;

use crate::ast::Identifier;
use crate::quads::{QBinaryOp, QValue, Quad};
use log::debug;

pub type ObjInstructions = Vec<ObjInstruction>;

/// One instruction of the symbolic single-accumulator target. The listing is
/// the pipeline's terminal artifact; nothing executes it.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjInstruction {
    Load(QValue),
    Store(Identifier),
    Add(QValue),
    Sub(QValue),
    Mul(QValue),
    Div(QValue),
    CmpLt(QValue),
    CmpGt(QValue),
    CmpEq(QValue),
    CmpNe(QValue),
    JumpIfFalse(Identifier),
    Jump(Identifier),
    Label(Identifier),
}

fn operation(op: QBinaryOp, right: QValue) -> ObjInstruction {
    match op {
        QBinaryOp::Add => ObjInstruction::Add(right),
        QBinaryOp::Sub => ObjInstruction::Sub(right),
        QBinaryOp::Mul => ObjInstruction::Mul(right),
        QBinaryOp::Div => ObjInstruction::Div(right),
        QBinaryOp::Less => ObjInstruction::CmpLt(right),
        QBinaryOp::Greater => ObjInstruction::CmpGt(right),
        QBinaryOp::Equal => ObjInstruction::CmpEq(right),
        QBinaryOp::NotEqual => ObjInstruction::CmpNe(right),
    }
}

/// Fixed one-to-many translation in quadruple order. No reordering and no
/// peephole merging: redundant LOAD/STORE pairs are preserved as emitted.
pub fn emit(quads: &[Quad]) -> ObjInstructions {
    let mut instructions = ObjInstructions::new();

    for quad in quads {
        match quad {
            Quad::Assign { dest, src } => {
                instructions.push(ObjInstruction::Load(src.clone()));
                instructions.push(ObjInstruction::Store(dest.clone()));
            }
            Quad::Binary {
                dest,
                op,
                left,
                right,
            } => {
                instructions.push(ObjInstruction::Load(left.clone()));
                instructions.push(operation(*op, right.clone()));
                instructions.push(ObjInstruction::Store(dest.clone()));
            }
            Quad::GotoIfFalse { cond, label } => {
                instructions.push(ObjInstruction::Load(cond.clone()));
                instructions.push(ObjInstruction::JumpIfFalse(label.clone()));
            }
            Quad::Label(name) => instructions.push(ObjInstruction::Label(name.clone())),
        }
    }

    debug!("emitted {} object instructions", instructions.len());
    instructions
}
