//! Two-pass semantic analysis.

use alifc_par::{Block, Call, Expr, Function, Program, Stmt};
use indexmap::IndexMap;

use crate::scope::{ScopeTree, SymbolKind};
use crate::SemanticError;

/// Semantic analyzer.
///
/// Pass 1 collects every function into a global table keyed by name,
/// recording its arity. Pass 2 walks each function body against a
/// fresh scope chain. The analyzer does not transform the AST; a
/// successful run means every name resolves.
pub struct SemanticAnalyzer {
    /// Global function table: name → arity, in source order.
    functions: IndexMap<String, usize>,

    /// Scope chain for the function currently being analyzed.
    scopes: ScopeTree,
}

impl SemanticAnalyzer {
    /// Creates a fresh analyzer.
    pub fn new() -> Self {
        Self {
            functions: IndexMap::new(),
            scopes: ScopeTree::new(),
        }
    }

    /// Analyzes the whole program, aborting on the first violation.
    pub fn analyze(&mut self, program: &Program) -> Result<(), SemanticError> {
        self.collect_functions(program)?;

        for function in &program.functions {
            self.analyze_function(function)?;
        }

        Ok(())
    }

    /// Pass 1: register every function, rejecting duplicate names.
    fn collect_functions(&mut self, program: &Program) -> Result<(), SemanticError> {
        for function in &program.functions {
            if self.functions.contains_key(&function.name) {
                return Err(SemanticError::new(format!(
                    "Function '{}' already defined",
                    function.name
                )));
            }
            self.functions
                .insert(function.name.clone(), function.params.len());
        }
        Ok(())
    }

    /// Pass 2: analyze one function body.
    ///
    /// The scope chain is an empty global root plus one function scope
    /// holding parameters and every declaration in the body; nested
    /// blocks do not open scopes of their own.
    fn analyze_function(&mut self, function: &Function) -> Result<(), SemanticError> {
        self.scopes = ScopeTree::new();
        self.scopes.enter_scope();

        for param in &function.params {
            if !self.scopes.define(param, SymbolKind::IntVar) {
                return Err(SemanticError::new(format!(
                    "Variable '{}' already defined in this scope",
                    param
                )));
            }
        }

        self.analyze_block(&function.body)
    }

    fn analyze_block(&mut self, block: &Block) -> Result<(), SemanticError> {
        for stmt in &block.statements {
            self.analyze_statement(stmt)?;
        }
        Ok(())
    }

    fn analyze_statement(&mut self, stmt: &Stmt) -> Result<(), SemanticError> {
        match stmt {
            Stmt::VarDecl { name, value } => {
                // The initializer is analyzed before the name is
                // defined, so `متغير س = س؛` only resolves against an
                // outer binding.
                self.analyze_expression(value)?;
                if !self.scopes.define(name, SymbolKind::IntVar) {
                    return Err(SemanticError::new(format!(
                        "Variable '{}' already defined in this scope",
                        name
                    )));
                }
                Ok(())
            }

            Stmt::Assign { name, value } => {
                if !self.scopes.is_defined(name) {
                    return Err(SemanticError::new(format!(
                        "Variable '{}' not defined",
                        name
                    )));
                }
                self.analyze_expression(value)
            }

            Stmt::If {
                condition,
                then_block,
                else_block,
            } => {
                self.analyze_expression(condition)?;
                self.analyze_block(then_block)?;
                if let Some(else_block) = else_block {
                    self.analyze_block(else_block)?;
                }
                Ok(())
            }

            Stmt::While { condition, body } => {
                self.analyze_expression(condition)?;
                self.analyze_block(body)
            }

            Stmt::Return { value } => self.analyze_expression(value),

            Stmt::Print { value } => self.analyze_expression(value),

            Stmt::Call(call) => self.analyze_call(call),
        }
    }

    fn analyze_expression(&mut self, expr: &Expr) -> Result<(), SemanticError> {
        match expr {
            Expr::Number(_) => Ok(()),

            Expr::Ident(name) => {
                if !self.scopes.is_defined(name) {
                    return Err(SemanticError::new(format!(
                        "Variable '{}' not defined",
                        name
                    )));
                }
                Ok(())
            }

            Expr::Binary { left, right, .. } => {
                self.analyze_expression(left)?;
                self.analyze_expression(right)
            }

            Expr::Unary { operand, .. } => self.analyze_expression(operand),

            Expr::Call(call) => self.analyze_call(call),
        }
    }

    fn analyze_call(&mut self, call: &Call) -> Result<(), SemanticError> {
        let arity = match self.functions.get(&call.name) {
            Some(&arity) => arity,
            None => {
                return Err(SemanticError::new(format!(
                    "Function '{}' not defined",
                    call.name
                )));
            }
        };

        if call.args.len() != arity {
            return Err(SemanticError::new(format!(
                "Function '{}' expects {} argument(s), found {}",
                call.name,
                arity,
                call.args.len()
            )));
        }

        for arg in &call.args {
            self.analyze_expression(arg)?;
        }

        Ok(())
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::analyze;

    fn analyze_source(source: &str) -> Result<(), crate::SemanticError> {
        let tokens = alifc_lex::tokenize(source).unwrap();
        let program = alifc_par::parse(tokens).unwrap();
        analyze(&program)
    }

    #[test]
    fn test_valid_program() {
        analyze_source(
            "دالة جمع(ا, ب) { ارجع ا + ب; }\n\
             دالة رئيسية() { اطبع(جمع(7, 8)); ارجع 0; }",
        )
        .unwrap();
    }

    #[test]
    fn test_undefined_variable_in_print() {
        let err = analyze_source("دالة رئيسية() { اطبع(ص); ارجع 0; }").unwrap_err();
        assert_eq!(err.message, "Variable 'ص' not defined");
    }

    #[test]
    fn test_duplicate_variable_in_same_scope() {
        let err =
            analyze_source("دالة رئيسية() { متغير س = 1; متغير س = 2; }").unwrap_err();
        assert!(err.message.contains("already defined"), "message was: {}", err.message);
    }

    #[test]
    fn test_assignment_to_undeclared_variable() {
        let err = analyze_source("دالة رئيسية() { س = 1; }").unwrap_err();
        assert_eq!(err.message, "Variable 'س' not defined");
    }

    #[test]
    fn test_duplicate_function() {
        let err = analyze_source("دالة ا() { } دالة ا() { }").unwrap_err();
        assert_eq!(err.message, "Function 'ا' already defined");
    }

    #[test]
    fn test_duplicate_parameter() {
        let err = analyze_source("دالة جمع(ا, ا) { }").unwrap_err();
        assert!(err.message.contains("already defined"));
    }

    #[test]
    fn test_call_to_undefined_function() {
        let err = analyze_source("دالة رئيسية() { غائبة(); }").unwrap_err();
        assert_eq!(err.message, "Function 'غائبة' not defined");
    }

    #[test]
    fn test_self_referential_initializer_fails() {
        // The initializer runs before the name is defined.
        let err = analyze_source("دالة رئيسية() { متغير س = س; }").unwrap_err();
        assert_eq!(err.message, "Variable 'س' not defined");
    }

    #[test]
    fn test_parameter_is_visible_in_body() {
        analyze_source("دالة ضعف(ن) { ارجع ن * 2; }").unwrap();
    }

    #[test]
    fn test_declarations_in_nested_blocks_share_function_scope() {
        // Sibling blocks collide because nested blocks do not open
        // scopes.
        let err = analyze_source(
            "دالة رئيسية() {\n\
               اذا (1) { متغير س = 1; } والا { متغير س = 2; }\n\
             }",
        )
        .unwrap_err();
        assert!(err.message.contains("already defined"));
    }

    #[test]
    fn test_variable_declared_in_while_body_persists() {
        // Declared once inside the loop body, visible after it.
        analyze_source(
            "دالة رئيسية() {\n\
               بينما (0) { متغير س = 1; }\n\
               ارجع 0;\n\
             }",
        )
        .unwrap();
    }

    #[test]
    fn test_recursion_is_allowed() {
        // Pass 1 registers every function before bodies are analyzed.
        analyze_source(
            "دالة عد(ن) { اذا (ن > 0) { عد(ن - 1); } ارجع 0; }\n\
             دالة رئيسية() { ارجع عد(3); }",
        )
        .unwrap();
    }

    #[test]
    fn test_forward_reference_is_allowed() {
        analyze_source(
            "دالة رئيسية() { ارجع لاحقة(); }\n\
             دالة لاحقة() { ارجع 1; }",
        )
        .unwrap();
    }

    #[test]
    fn test_arity_mismatch_is_rejected() {
        let err = analyze_source(
            "دالة جمع(ا, ب) { ارجع ا + ب; }\n\
             دالة رئيسية() { ارجع جمع(1); }",
        )
        .unwrap_err();
        assert!(err.message.contains("expects 2"), "message was: {}", err.message);
    }
}
