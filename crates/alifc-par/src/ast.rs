//! AST node definitions.
//!
//! Nodes are closed tagged variants per category; every consumer does
//! exhaustive case analysis. Nodes carry no source positions: after
//! parsing, diagnostics are name-based only.

/// AST root: a source file is an ordered sequence of functions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    pub functions: Vec<Function>,
}

/// Function definition: `دالة name(params) { body }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    /// Parameter names in declaration order.
    pub params: Vec<String>,
    pub body: Block,
}

/// A brace-delimited sequence of statements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

/// Statement variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    /// `متغير name = value؛`
    VarDecl { name: String, value: Expr },

    /// `name = value؛`
    Assign { name: String, value: Expr },

    /// `اذا (condition) { … } والا { … }`
    If {
        condition: Expr,
        then_block: Block,
        else_block: Option<Block>,
    },

    /// `بينما (condition) { … }`
    While { condition: Expr, body: Block },

    /// `ارجع value؛`
    Return { value: Expr },

    /// `اطبع(value)؛`
    Print { value: Expr },

    /// A bare function call used as a statement: `name(args)؛`
    Call(Call),
}

/// Expression variants. Every expression evaluates to a 64-bit signed
/// integer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// Integer literal.
    Number(i64),

    /// Variable reference.
    Ident(String),

    /// Binary operation; all binary operators are left-associative.
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Unary operation (negation).
    Unary { op: UnOp, operand: Box<Expr> },

    /// Function call in expression position.
    Call(Call),
}

/// A function call: callee name plus argument expressions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Call {
    pub name: String,
    pub args: Vec<Expr>,
}

/// Binary operators, ordered low to high precedence tier:
/// comparison < additive < multiplicative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
}

/// Unary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnOp {
    Neg,
}
