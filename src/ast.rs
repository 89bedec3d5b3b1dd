use crate::interpreter::lexer::is_keyword;

/// A position in the source, 1-based and counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    /// Line number in the source code.
    pub line:   usize,
    /// Column number in the source code.
    pub column: usize,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, col {}", self.line, self.column)
    }
}

/// The root of a parsed program.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub body: Vec<Statement>,
}

/// An abstract syntax tree (AST) node representing a statement.
///
/// Every statement starts with a keyword; `loc` is the location of that
/// keyword and is what breakpoints, diagnostics and stack frames refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `maano <name> = <expression>`
    Declaration {
        /// The name of the variable.
        name:  String,
        /// The flattened initializer expression.
        value: Expression,
        /// Location of the `maano` keyword.
        loc:   Location,
    },
    /// `likho "text"` or `likho <expression>`
    Print {
        /// What gets printed.
        value: PrintValue,
        /// Location of the `likho` keyword.
        loc:   Location,
    },
    /// `agar <comparison> { ... } warna { ... }`
    Conditional {
        /// The comparison deciding which branch runs.
        condition: Condition,
        /// Statements run when the condition holds.
        body:      Vec<Self>,
        /// Statements run otherwise. Empty when there is no `warna`.
        else_body: Vec<Self>,
        /// Location of the `agar` keyword.
        loc:       Location,
    },
    /// `jabtak <comparison> { ... }`
    Loop {
        /// The comparison checked before every iteration.
        condition: Condition,
        /// The loop body.
        body:      Vec<Self>,
        /// Location of the `jabtak` keyword.
        loc:       Location,
    },
}

impl Statement {
    /// Gets the location of the statement's keyword.
    ///
    /// ## Example
    /// ```
    /// use likho::ast::{Expression, Location, Statement};
    ///
    /// let statement = Statement::Declaration { name:  "x".to_string(),
    ///                                          value: Expression::new("5"),
    ///                                          loc:   Location::new(3, 1), };
    ///
    /// assert_eq!(statement.location(), Location::new(3, 1));
    /// ```
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::Declaration { loc, .. }
            | Self::Print { loc, .. }
            | Self::Conditional { loc, .. }
            | Self::Loop { loc, .. } => *loc,
        }
    }

    /// Gets the kind of the statement, used for stack frames and printing.
    #[must_use]
    pub const fn kind(&self) -> StatementKind {
        match self {
            Self::Declaration { .. } => StatementKind::Declaration,
            Self::Print { .. } => StatementKind::Print,
            Self::Conditional { .. } => StatementKind::Conditional,
            Self::Loop { .. } => StatementKind::Loop,
        }
    }
}

/// The statement kinds of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// A `maano` declaration.
    Declaration,
    /// A `likho` print.
    Print,
    /// An `agar` conditional.
    Conditional,
    /// A `jabtak` loop.
    Loop,
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Declaration => "declaration",
            Self::Print => "print",
            Self::Conditional => "conditional",
            Self::Loop => "loop",
        };
        write!(f, "{kind}")
    }
}

/// The payload of a print statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintValue {
    /// A string literal, printed verbatim.
    Text(String),
    /// An expression, evaluated and printed as a number.
    Expression(Expression),
}

/// A flattened arithmetic expression.
///
/// The parser does not build an expression tree. It joins the run of
/// operator, identifier and number tokens with single spaces, and the
/// evaluator splits the text again at run time. Operators therefore have no
/// precedence: `2 + 3 * 4` is `(2 + 3) * 4`.
///
/// An operand left empty by a leading or doubled operator (`- 5`, `1 + + 2`)
/// is a `MissingOperand` runtime error. It never evaluates to `NaN`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expression {
    text: String,
}

impl Expression {
    /// Wraps already flattened expression text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The whitespace-joined expression text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if no token was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterates over the names mentioned in the expression.
    ///
    /// A name is a run of ASCII letters that is not a keyword.
    ///
    /// ## Example
    /// ```
    /// use likho::ast::Expression;
    ///
    /// let expr = Expression::new("total + 2 * rate");
    /// let names: Vec<&str> = expr.identifiers().collect();
    ///
    /// assert_eq!(names, vec!["total", "rate"]);
    /// ```
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.text
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|word| !word.is_empty() && !is_keyword(word))
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A single comparison, the only condition form of the language.
///
/// Both sides are plain identifiers or numbers; there are no nested
/// expressions and no boolean composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Left operand.
    pub left:     Operand,
    /// The comparison operator.
    pub operator: ComparisonOperator,
    /// Right operand.
    pub right:    Operand,
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}

/// One side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Location of the identifier token.
        loc:  Location,
    },
    /// An integer literal.
    Number {
        /// The literal value.
        value: i64,
        /// Location of the number token.
        loc:   Location,
    },
}

impl Operand {
    /// Location of the operand's token.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::Variable { loc, .. } | Self::Number { loc, .. } => *loc,
        }
    }

    /// Returns the variable name if the operand is an identifier.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Variable { name, .. } => Some(name),
            Self::Number { .. } => None,
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::Number { value, .. } => write!(f, "{value}"),
        }
    }
}

/// Represents a comparison operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
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

impl ComparisonOperator {
    /// Applies the operator to two numbers.
    ///
    /// ## Example
    /// ```
    /// use likho::ast::ComparisonOperator;
    ///
    /// assert!(ComparisonOperator::LessEqual.compare(2.0, 2.0));
    /// assert!(!ComparisonOperator::NotEqual.compare(3.0, 3.0));
    /// ```
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn compare(self, left: f64, right: f64) -> bool {
        match self {
            Self::Less => left < right,
            Self::Greater => left > right,
            Self::LessEqual => left <= right,
            Self::GreaterEqual => left >= right,
            Self::Equal => left == right,
            Self::NotEqual => left != right,
        }
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}
