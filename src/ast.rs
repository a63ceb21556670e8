/// One top-level unit of a parsed program.
///
/// A program is a flat list of nodes. Function declarations are hoisted to the
/// front of the list by the parser so that a call may appear in the source
/// before the declaration it refers to.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A function declaration, registered before the program body runs.
    Function(FunctionDef),
    /// An executable statement.
    Statement(Statement),
    /// A bare value at the top level, evaluated and discarded.
    Value(Expr),
}

/// An abstract syntax tree node representing a statement.
///
/// Statements are recognized by their leading keyword phrase (`let`, `tell
/// me`, `as long as`, and so on) and perform an action rather than produce a
/// value.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Binding a name to a value: `let <name> be <value>`.
    Assignment {
        /// The name being bound.
        target: String,
        /// The value to evaluate and store.
        value:  Expr,
        /// Line number in the source code.
        line:   usize,
    },
    /// A sequence of statements: `first ... then ... and lastly ...`.
    Block {
        /// The statements in source order.
        statements: Vec<Statement>,
        /// Line number in the source code.
        line:       usize,
    },
    /// A conditional without an alternative: `if <value> then you <stmt>`.
    If {
        /// The condition, branched on by truthiness.
        condition: Expr,
        /// The statement run when the condition is truthy.
        body:      Box<Statement>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A conditional with an alternative: `if ... otherwise <stmt>`.
    IfElse {
        /// The condition, branched on by truthiness.
        condition: Expr,
        /// The statement run when the condition is truthy.
        body:      Box<Statement>,
        /// The statement run when the condition is falsy.
        otherwise: Box<Statement>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A loop: `as long as <value> then you <stmt>`.
    While {
        /// The condition, re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Statement>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Printing a value: `tell me <value>` or `show me <value>`.
    Print {
        /// The value to display.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reading a line of input: `ask me <prompt> and call it <name>`.
    Prompt {
        /// The prompt shown to the user, verbatim.
        prompt: String,
        /// The name the reply is bound to.
        target: String,
        /// Line number in the source code.
        line:   usize,
    },
    /// A function call whose result is discarded: `let's <name> where ...`.
    Call {
        /// The name of the function being called.
        name:      String,
        /// Named arguments as `(parameter, value)` pairs.
        arguments: Vec<(String, Expr)>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A function call whose result is bound: `let's ... and call it <name>`.
    CallAssign {
        /// The name of the function being called.
        name:      String,
        /// Named arguments as `(parameter, value)` pairs.
        arguments: Vec<(String, Expr)>,
        /// The name the returned value is bound to.
        target:    String,
        /// Line number in the source code.
        line:      usize,
    },
    /// Recording the function result: `the answer is <value>`.
    Return {
        /// The value handed back to the caller.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use parlance::ast::{Expr, Statement};
    ///
    /// let statement = Statement::Print { value: Expr::Variable { name: "x".to_string(),
    ///                                                            line: 2, },
    ///                                    line:  2, };
    ///
    /// assert_eq!(statement.line_number(), 2);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Assignment { line, .. }
            | Self::Block { line, .. }
            | Self::If { line, .. }
            | Self::IfElse { line, .. }
            | Self::While { line, .. }
            | Self::Print { line, .. }
            | Self::Prompt { line, .. }
            | Self::Call { line, .. }
            | Self::CallAssign { line, .. }
            | Self::Return { line, .. } => *line,
        }
    }
}

/// An abstract syntax tree node representing a value.
///
/// Values are the expressions of the language: literals, variable references,
/// two-operand arithmetic and comparison phrases, and random numbers. Literal
/// text is kept verbatim and only coerced to a runtime value during
/// evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal, coerced at evaluation time (number, boolean, or string).
    Literal {
        /// The raw literal text.
        text: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A two-operand operation such as `the sum of <a> and <b>`.
    Binary {
        /// The operator.
        op:   BinaryOperator,
        /// Left operand.
        lhs:  Box<Self>,
        /// Right operand.
        rhs:  Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A random integer: `a random number between <low> and <high>`.
    Random {
        /// Inclusive lower bound.
        lower: Box<Self>,
        /// Inclusive upper bound.
        upper: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use parlance::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::Binary { line, .. }
            | Self::Random { line, .. } => *line,
        }
    }
}

/// Represents a user-defined function declaration.
///
/// A function binds zero or more parameter names to a single statement body.
/// The body is usually a block when more than one step is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The declared parameter names, all of which are required at a call.
    pub params: Vec<String>,
    /// The statement executed when the function is called.
    pub body:   Statement,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a two-operand operator.
///
/// Operators are spelled as keyword phrases in the source; the variants here
/// carry their evaluated meaning.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition, or string concatenation (`the sum of`).
    Sum,
    /// Left minus right (`the difference of`).
    Difference,
    /// Multiplication (`the product of`).
    Product,
    /// Division (`divided by`).
    Division,
    /// Absolute difference (`the difference between`).
    AbsoluteDifference,
    /// Equality (`is equal to`).
    EqualTo,
    /// Inequality (`is different from`).
    DifferentFrom,
    /// Ordered comparison (`is less than`).
    LessThan,
    /// Ordered comparison (`is greater than`).
    GreaterThan,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            AbsoluteDifference, DifferentFrom, Difference, Division, EqualTo, GreaterThan,
            LessThan, Product, Sum,
        };
        let phrase = match self {
            Sum => "the sum of",
            Difference => "the difference of",
            Product => "the product of",
            Division => "divided by",
            AbsoluteDifference => "the difference between",
            EqualTo => "equal to",
            DifferentFrom => "different from",
            LessThan => "less than",
            GreaterThan => "greater than",
        };
        write!(f, "{phrase}")
    }
}
