// AST definitions for the Mini-C front end

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Base types named by declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeBase {
    Int,
    Double,
    Char,
    Struct(String), // struct tag name
}

/// Array suffix of a declarator: `[expr]` or `[]`
#[derive(Debug, Clone)]
pub enum ArrayDecl {
    Unsized,
    Sized(Box<AstNode>),
}

/// A full type as written in a cast: base type plus optional array suffix
#[derive(Debug, Clone)]
pub struct TypeName {
    pub base: TypeBase,
    pub array: Option<ArrayDecl>,
}

/// One declared name in a variable declaration (`x` or `x[10]`)
#[derive(Debug, Clone)]
pub struct Declarator {
    pub name: String,
    pub array: Option<ArrayDecl>,
    pub location: SourceLocation,
}

/// Function parameter
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub base: TypeBase,
    pub array: Option<ArrayDecl>,
    pub location: SourceLocation,
}

/// Function return type: `void`, or a base type optionally returned by pointer
#[derive(Debug, Clone)]
pub enum ReturnType {
    Void,
    Base { base: TypeBase, pointer: bool },
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg, // -x
    Not, // !x
}

/// AST nodes representing declarations, statements and expressions
#[derive(Debug, Clone)]
pub enum AstNode {
    // Top-level declarations
    StructDef {
        name: String,
        members: Vec<AstNode>, // VarDecl nodes
        location: SourceLocation,
    },
    FunctionDef {
        name: String,
        params: Vec<Param>,
        return_type: ReturnType,
        body: Box<AstNode>, // Compound node
        location: SourceLocation,
    },

    // Statements
    VarDecl {
        base: TypeBase,
        declarators: Vec<Declarator>,
        location: SourceLocation,
    },
    Compound {
        items: Vec<AstNode>,
        location: SourceLocation,
    },
    If {
        condition: Box<AstNode>,
        then_branch: Box<AstNode>,
        else_branch: Option<Box<AstNode>>,
        location: SourceLocation,
    },
    While {
        condition: Box<AstNode>,
        body: Box<AstNode>,
        location: SourceLocation,
    },
    For {
        init: Option<Box<AstNode>>,
        condition: Option<Box<AstNode>>,
        increment: Option<Box<AstNode>>,
        body: Box<AstNode>,
        location: SourceLocation,
    },
    Break {
        location: SourceLocation,
    },
    Return {
        expr: Option<Box<AstNode>>,
        location: SourceLocation,
    },
    ExpressionStatement {
        expr: Box<AstNode>,
        location: SourceLocation,
    },
    Empty {
        location: SourceLocation,
    },

    // Expressions
    IntLiteral(i64, SourceLocation),
    RealLiteral(f64, SourceLocation),
    CharLiteral(char, SourceLocation),
    StringLiteral(String, SourceLocation),
    Variable(String, SourceLocation),
    Assignment {
        lhs: Box<AstNode>,
        rhs: Box<AstNode>,
        location: SourceLocation,
    },
    BinaryOp {
        op: BinOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
        location: SourceLocation,
    },
    UnaryOp {
        op: UnOp,
        operand: Box<AstNode>,
        location: SourceLocation,
    },
    Cast {
        target_type: TypeName,
        expr: Box<AstNode>,
        location: SourceLocation,
    },
    ArrayAccess {
        array: Box<AstNode>,
        index: Box<AstNode>,
        location: SourceLocation,
    },
    MemberAccess {
        object: Box<AstNode>,
        member: String,
        location: SourceLocation,
    },
    FunctionCall {
        name: String,
        args: Vec<AstNode>,
        location: SourceLocation,
    },
}

impl AstNode {
    /// Get the source location of this node
    pub fn location(&self) -> &SourceLocation {
        match self {
            AstNode::StructDef { location, .. } => location,
            AstNode::FunctionDef { location, .. } => location,
            AstNode::VarDecl { location, .. } => location,
            AstNode::Compound { location, .. } => location,
            AstNode::If { location, .. } => location,
            AstNode::While { location, .. } => location,
            AstNode::For { location, .. } => location,
            AstNode::Break { location } => location,
            AstNode::Return { location, .. } => location,
            AstNode::ExpressionStatement { location, .. } => location,
            AstNode::Empty { location } => location,
            AstNode::IntLiteral(_, loc) => loc,
            AstNode::RealLiteral(_, loc) => loc,
            AstNode::CharLiteral(_, loc) => loc,
            AstNode::StringLiteral(_, loc) => loc,
            AstNode::Variable(_, loc) => loc,
            AstNode::Assignment { location, .. } => location,
            AstNode::BinaryOp { location, .. } => location,
            AstNode::UnaryOp { location, .. } => location,
            AstNode::Cast { location, .. } => location,
            AstNode::ArrayAccess { location, .. } => location,
            AstNode::MemberAccess { location, .. } => location,
            AstNode::FunctionCall { location, .. } => location,
        }
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub nodes: Vec<AstNode>, // All top-level declarations
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}
