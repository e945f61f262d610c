use super::context::{AnalysisContext, FunSignature};
use super::{Result, SemanticError};
use crate::ast::*;

/// Widening is one-directional: an `int` may be used where a `float` is
/// expected; nothing else coerces, not even `bool`/`int` or `char`/`string`.
pub fn are_types_compatible(expected: Type, actual: Type) -> bool {
    expected == actual || (expected == Type::Float && actual == Type::Int)
}

pub(super) fn analyze_statement(statement: &Statement, ctx: &mut AnalysisContext) -> Result<()> {
    match statement {
        Statement::Declaration {
            var_type,
            name,
            init,
        } => {
            // The name is registered first, so it is visible to its own
            // initializer.
            ctx.declare_variable(name, *var_type)?;
            if let Some(init) = init {
                let actual = infer_type(init, ctx)?;
                if !are_types_compatible(*var_type, actual) {
                    return Err(SemanticError::IncompatibleTypes {
                        expected: *var_type,
                        actual,
                    });
                }
            }
            Ok(())
        }
        Statement::Assignment { name, value } => {
            let Some(expected) = ctx.lookup(name) else {
                return Err(SemanticError::VariableNotDeclared(name.clone()));
            };
            let actual = infer_type(value, ctx)?;
            if !are_types_compatible(expected, actual) {
                return Err(SemanticError::IncompatibleTypes { expected, actual });
            }
            ctx.mark_used(name);
            Ok(())
        }
        Statement::If { condition, body } => {
            let cond_type = infer_type(condition, ctx)?;
            if cond_type != Type::Bool {
                return Err(SemanticError::ConditionNotBool);
            }
            ctx.enter_scope();
            for statement in body {
                analyze_statement(statement, ctx)?;
            }
            ctx.exit_scope();
            Ok(())
        }
        Statement::FunDeclaration {
            name,
            params,
            return_type,
            body,
        } => {
            let signature = FunSignature {
                params: params.clone(),
                return_type: *return_type,
            };
            // Registered before the body so recursive calls resolve.
            ctx.declare_function(name, signature)?;
            ctx.enter_scope();
            for param in params {
                // A repeated parameter name trips the ordinary
                // redeclaration rule; there is no dedicated check.
                ctx.declare_variable(&param.name, param.param_type)?;
            }
            for statement in body {
                analyze_statement(statement, ctx)?;
            }
            ctx.exit_scope();
            Ok(())
        }
        Statement::FunCall { name, args } => {
            let mut arg_types = Vec::with_capacity(args.len());
            for arg in args {
                arg_types.push(infer_type(arg, ctx)?);
            }
            check_call(name, &arg_types, ctx)
        }
    }
}

fn check_call(name: &Identifier, arg_types: &[Type], ctx: &AnalysisContext) -> Result<()> {
    let Some(signature) = ctx.signature(name) else {
        return Err(SemanticError::FunctionNotDeclared(name.clone()));
    };
    if signature.params.len() != arg_types.len() {
        return Err(SemanticError::ExpectedArgsCountButGot(
            signature.params.len(),
            arg_types.len(),
            name.clone(),
        ));
    }
    for (index, (param, actual)) in signature.params.iter().zip(arg_types).enumerate() {
        if !are_types_compatible(param.param_type, *actual) {
            return Err(SemanticError::ArgumentTypeMismatch {
                name: name.clone(),
                index: index + 1,
                expected: param.param_type,
                actual: *actual,
            });
        }
    }
    Ok(())
}

fn infer_literal(literal: &Literal) -> Type {
    match literal {
        Literal::Int(_) => Type::Int,
        Literal::Float(_) => Type::Float,
        Literal::Str(_) => Type::Str,
        Literal::Char(_) => Type::Char,
        Literal::Bool(_) => Type::Bool,
    }
}

pub(super) fn infer_type(exp: &Exp, ctx: &mut AnalysisContext) -> Result<Type> {
    match exp {
        Exp::Literal(literal) => Ok(infer_literal(literal)),
        Exp::Var(name) => {
            let Some(var_type) = ctx.lookup(name) else {
                return Err(SemanticError::VariableNotDeclared(name.clone()));
            };
            ctx.mark_used(name);
            Ok(var_type)
        }
        Exp::Binary(op, left, right) => {
            let lt = infer_type(left, ctx)?;
            let rt = infer_type(right, ctx)?;
            if op.is_arithmetic() {
                infer_arithmetic(*op, lt, rt, right)
            } else {
                // No numeric promotion across comparison operands.
                if lt != rt {
                    return Err(SemanticError::ComparisonTypeMismatch { left: lt, right: rt });
                }
                Ok(Type::Bool)
            }
        }
    }
}

fn infer_arithmetic(op: BinaryOp, left: Type, right: Type, right_exp: &Exp) -> Result<Type> {
    let numeric = matches!(left, Type::Int | Type::Float);
    if left != right || !numeric {
        return Err(SemanticError::BadOperandTypes { op, left, right });
    }
    // Syntactic check only: a zero-valued variable divisor passes.
    if op == BinaryOp::Div && matches!(right_exp, Exp::Literal(l) if l.is_zero()) {
        return Err(SemanticError::DivisionByZero);
    }
    if left == Type::Float || right == Type::Float {
        Ok(Type::Float)
    } else {
        Ok(Type::Int)
    }
}
