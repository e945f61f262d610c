use super::{Result, SemanticError, Warning};
use crate::ast::{Identifier, Param, Type};
use log::{debug, warn};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct FunSignature {
    pub params: Vec<Param>,
    pub return_type: Type,
}

/// One lexical block: name → declared type, remembering declaration order so
/// diagnostics list names the way the source introduced them.
#[derive(Debug, Default)]
struct Scope {
    vars: HashMap<Identifier, Type>,
    order: Vec<Identifier>,
}

impl Scope {
    fn declare(&mut self, name: Identifier, var_type: Type) {
        self.order.push(name.clone());
        self.vars.insert(name, var_type);
    }

    fn get(&self, name: &str) -> Option<Type> {
        self.vars.get(name).copied()
    }

    fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }
}

/// All state of one analysis run: the scope stack (innermost last), the flat
/// whole-program function table, the used-name set and the accumulated
/// warnings. Constructed fresh per invocation so repeated compilations in
/// one process share nothing.
#[derive(Debug, Default)]
pub struct AnalysisContext {
    scopes: Vec<Scope>,
    functions: HashMap<Identifier, FunSignature>,
    used: HashSet<Identifier>,
    warnings: Vec<Warning>,
}

impl AnalysisContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    pub fn exit_scope(&mut self) {
        self.scopes.pop();
    }

    /// Redeclaration in the innermost scope is an error; reusing a name from
    /// an outer scope only warns.
    pub fn declare_variable(&mut self, name: &Identifier, var_type: Type) -> Result<()> {
        let depth = self.scopes.len();
        let current = self.scopes.last().expect("Should never be empty");
        if current.contains(name) {
            return Err(SemanticError::VariableRedeclaration(name.clone()));
        }
        let shadows = self.scopes[..depth - 1].iter().any(|s| s.contains(name));
        if shadows {
            self.warn(Warning::Shadowing(name.clone()));
        }
        self.scopes
            .last_mut()
            .expect("Should never be empty")
            .declare(name.clone(), var_type);
        Ok(())
    }

    /// Innermost-to-outermost name resolution.
    pub fn lookup(&self, name: &str) -> Option<Type> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    pub fn mark_used(&mut self, name: &Identifier) {
        self.used.insert(name.clone());
    }

    pub fn declare_function(&mut self, name: &Identifier, signature: FunSignature) -> Result<()> {
        if self.functions.contains_key(name) {
            return Err(SemanticError::FunctionRedeclaration(name.clone()));
        }
        debug!(
            "registered function '{name}' with {} parameters returning {}",
            signature.params.len(),
            signature.return_type
        );
        self.functions.insert(name.clone(), signature);
        Ok(())
    }

    pub fn signature(&self, name: &str) -> Option<&FunSignature> {
        self.functions.get(name)
    }

    pub fn warn(&mut self, warning: Warning) {
        warn!("{warning}");
        self.warnings.push(warning);
    }

    pub fn unused_in_current_scope(&self) -> Vec<Identifier> {
        let current = self.scopes.last().expect("Should never be empty");
        current
            .order
            .iter()
            .filter(|name| !self.used.contains(*name))
            .cloned()
            .collect()
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
