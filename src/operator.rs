/// Represents a binary operator.
///
/// Binary operators cover arithmetic, bit manipulation, comparisons, the
/// logical connectives and the comma operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Sequencing (`,`); the left value is discarded.
    Comma,
    /// Logical or (`||`)
    Or,
    /// Logical and (`&&`)
    And,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^`, unless the caret means exponentiation)
    BitXor,
    /// Bitwise and (`&`)
    BitAnd,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Left shift (`<<`)
    ShiftLeft,
    /// Arithmetic right shift (`>>`)
    ShiftRight,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`); integral quotients stay integers.
    Div,
    /// Truncating integer division (`//`)
    IntDiv,
    /// Remainder (`%`)
    Mod,
    /// Exponentiation (`**`, or `^` in caret mode)
    Pow,
}

impl BinaryOperator {
    /// Returns the name used for this operator in error messages.
    ///
    /// # Example
    /// ```
    /// use ccalc::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::ShiftLeft.description(), "bit shift operator");
    /// ```
    #[must_use]
    pub const fn description(self) -> &'static str {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Comma, Div, Equal, Greater, GreaterEqual, IntDiv,
            Less, LessEqual, Mod, Mul, NotEqual, Or, Pow, ShiftLeft, ShiftRight, Sub,
        };
        match self {
            Comma => "comma operator",
            Or => "logical OR operator",
            And => "logical AND operator",
            BitOr => "bitwise OR operator",
            BitXor => "bitwise XOR operator",
            BitAnd => "bitwise AND operator",
            Equal | NotEqual => "equality operator",
            Less | LessEqual | Greater | GreaterEqual => "relational operator",
            ShiftLeft | ShiftRight => "bit shift operator",
            Add | Sub | Mul | Div => "arithmetic operator",
            IntDiv => "integer division operator",
            Mod => "modulo operator",
            Pow => "exponentiation operator",
        }
    }
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical NOT (`!x`).
    Not,
    /// Bitwise complement (`~x`).
    BitNot,
}

impl UnaryOperator {
    /// Returns the name used for this operator in error messages.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Plus | Self::Negate => "sign operator",
            Self::Not => "logical NOT operator",
            Self::BitNot => "bitwise NOT operator",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Comma, Div, Equal, Greater, GreaterEqual, IntDiv,
            Less, LessEqual, Mod, Mul, NotEqual, Or, Pow, ShiftLeft, ShiftRight, Sub,
        };
        let operator = match self {
            Comma => ",",
            Or => "||",
            And => "&&",
            BitOr => "|",
            BitXor => "^",
            BitAnd => "&",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            ShiftLeft => "<<",
            ShiftRight => ">>",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            IntDiv => "//",
            Mod => "%",
            Pow => "**",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "!",
            Self::BitNot => "~",
        };
        write!(f, "{operator}")
    }
}
