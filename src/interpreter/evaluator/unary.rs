use crate::ast::UnaryOperator;

/// Applies a sign to an already evaluated operand.
///
/// Signs cannot fail: `+` is the identity and `-` negates.
#[must_use]
pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
    match op {
        UnaryOperator::Plus => value,
        UnaryOperator::Minus => -value,
    }
}
