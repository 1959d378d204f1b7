#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum ArithmeticError {
    /// The right operand of a division evaluated to zero.
    DivisionByZero,
}

impl std::fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
        }
    }
}

impl std::error::Error for ArithmeticError {}
