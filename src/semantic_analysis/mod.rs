mod context;
mod typecheck;

use crate::ast::*;
use context::AnalysisContext;
use log::debug;
use std::fmt;

pub use typecheck::are_types_compatible;

pub type Result<T> = std::result::Result<T, SemanticError>;

/// Scoping, typing, arity or division-by-literal-zero violation. Carries a
/// human-readable message only; this layer has no position tracking.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SemanticError {
    VariableRedeclaration(Identifier),
    VariableNotDeclared(Identifier),
    IncompatibleTypes { expected: Type, actual: Type },
    BadOperandTypes { op: BinaryOp, left: Type, right: Type },
    ComparisonTypeMismatch { left: Type, right: Type },
    ConditionNotBool,
    DivisionByZero,
    FunctionRedeclaration(Identifier),
    FunctionNotDeclared(Identifier),
    ExpectedArgsCountButGot(usize, usize, String),
    ArgumentTypeMismatch {
        name: Identifier,
        index: usize,
        expected: Type,
        actual: Type,
    },
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::VariableRedeclaration(name) => {
                write!(f, "variable '{name}' already declared in this scope")
            }
            Self::VariableNotDeclared(name) => {
                write!(f, "variable '{name}' has not been declared")
            }
            Self::IncompatibleTypes { expected, actual } => {
                write!(f, "incompatible types: expected '{expected}', but got '{actual}'")
            }
            Self::BadOperandTypes { op, left, right } => {
                write!(f, "invalid operation '{op}' between '{left}' and '{right}'")
            }
            Self::ComparisonTypeMismatch { left, right } => {
                write!(f, "comparison between incompatible types '{left}' and '{right}'")
            }
            Self::ConditionNotBool => write!(f, "if condition must be boolean"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::FunctionRedeclaration(name) => {
                write!(f, "function '{name}' already declared")
            }
            Self::FunctionNotDeclared(name) => {
                write!(f, "call to undeclared function '{name}'")
            }
            Self::ExpectedArgsCountButGot(expected, got, name) => write!(
                f,
                "function {name} called with {got} arguments, but expected {expected}"
            ),
            Self::ArgumentTypeMismatch {
                name,
                index,
                expected,
                actual,
            } => write!(
                f,
                "argument {index} of '{name}' must be '{expected}', but got '{actual}'"
            ),
        }
    }
}

impl std::error::Error for SemanticError {}

/// Non-fatal observation; never changes the pass/fail outcome and never
/// alters later codegen.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Warning {
    Shadowing(Identifier),
    UnusedVariables(Vec<Identifier>),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Shadowing(name) => {
                write!(f, "local variable '{name}' shadows a variable from an outer scope")
            }
            Self::UnusedVariables(names) => {
                write!(f, "unused variables: {}", names.join(", "))
            }
        }
    }
}

pub fn analyze(ast: &[Statement]) -> Result<Vec<Warning>> {
    let mut ctx = AnalysisContext::new();
    ctx.enter_scope();
    for statement in ast {
        typecheck::analyze_statement(statement, &mut ctx)?;
    }
    // Only the top-level scope is audited for unused names.
    let unused = ctx.unused_in_current_scope();
    if !unused.is_empty() {
        ctx.warn(Warning::UnusedVariables(unused));
    }
    ctx.exit_scope();

    let warnings = ctx.into_warnings();
    debug!("semantic analysis passed with {} warnings", warnings.len());
    Ok(warnings)
}
