use std::fmt;

/// Represents a literal value in the language.
///
/// `Literal` covers all raw, constant values that can appear directly in
/// source code: integers, booleans, and strings. It is used in the AST to
/// represent literal expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A boolean literal value: `true` or `false`.
    Boolean(bool),
    /// A string literal, stored without the surrounding quotes.
    String(String),
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers all types of expressions, from literals and variables to
/// function literals, calls, arithmetic, conditionals, arrays, and hashes.
/// Each variant models a distinct syntactic construct. The tree is immutable
/// once produced by the parser; the evaluator only reads it.
///
/// Every node has a deterministic string rendering via [`fmt::Display`].
/// Unary and binary operations render fully parenthesized, which makes the
/// rendering a direct record of how precedence was resolved:
///
/// ```
/// use monkey::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let mut parser = Parser::new(Lexer::new("a + b * c"));
/// let program = parser.parse_program();
///
/// assert_eq!(program.to_string(), "(a + (b * c))");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (integer, boolean, or string).
    Literal(Literal),
    /// Reference to a binding by name.
    Variable(String),
    /// A unary operation (`!x`, `-x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (arithmetic or comparison).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Conditional expression with an optional `else` block.
    IfExpr {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        then_branch: Block,
        /// Block evaluated otherwise, if present.
        else_branch: Option<Block>,
    },
    /// Function literal expression (`fn(x, y) { ... }`).
    FunctionLiteral {
        /// The parameter names, in declaration order.
        parameters: Vec<String>,
        /// The function body.
        body:       Block,
    },
    /// Function call expression. The callee is a full expression, so both
    /// named functions and immediately-invoked literals are supported.
    FunctionCall {
        /// The expression evaluating to the callee.
        function:  Box<Self>,
        /// Arguments to the call, in source order.
        arguments: Vec<Self>,
    },
    /// Array literal expression.
    ArrayLiteral {
        /// Elements of the array.
        elements: Vec<Self>,
    },
    /// Indexing expression (`arr[2]`, `hash["key"]`).
    Index {
        /// The expression being indexed.
        left:  Box<Self>,
        /// The index to access.
        index: Box<Self>,
    },
    /// Hash literal expression (`{"one": 1}`).
    HashLiteral {
        /// The key/value expression pairs, in source order.
        pairs: Vec<(Self, Self)>,
    },
}

/// A sequence of statements enclosed in braces.
///
/// Blocks form the bodies of conditionals and function literals. The value of
/// a block is the value of its last statement; `return` statements and errors
/// pass through a block to the enclosing function or program boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
}

/// Represents a single statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A binding introduced with `let`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound value.
        value: Expr,
    },
    /// An early exit from the enclosing function, with an optional value.
    Return {
        /// The returned value, or `None` for a bare `return;`.
        value: Option<Expr>,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

/// A parsed program: the top-level sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical NOT (`!x`).
    Not,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(literal) => write!(f, "{literal}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::UnaryOp { op, expr } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::IfExpr { condition,
                           then_branch,
                           else_branch, } => {
                write!(f, "if{condition} {then_branch}")?;
                if let Some(alternative) = else_branch {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {{ {body} }}", parameters.join(", "))
            },
            Self::FunctionCall { function, arguments } => {
                let arguments = arguments.iter()
                                         .map(ToString::to_string)
                                         .collect::<Vec<_>>()
                                         .join(", ");
                write!(f, "{function}({arguments})")
            },
            Self::ArrayLiteral { elements } => {
                let elements = elements.iter()
                                       .map(ToString::to_string)
                                       .collect::<Vec<_>>()
                                       .join(", ");
                write!(f, "[{elements}]")
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::HashLiteral { pairs } => {
                let pairs = pairs.iter()
                                 .map(|(key, value)| format!("{key}: {value}"))
                                 .collect::<Vec<_>>()
                                 .join(", ");
                write!(f, "{{{pairs}}}")
            },
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value: Some(value) } => write!(f, "return {value};"),
            Self::Return { value: None } => write!(f, "return;"),
            Self::Expression { expr } => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}
