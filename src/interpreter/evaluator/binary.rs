use crate::{
    ast::BinaryOperator,
    error::ArithmeticError,
    interpreter::evaluator::core::EvalResult,
};

/// Evaluates a binary arithmetic operation on two operands.
///
/// Division by zero is checked with exact equality, so both `0.0` and `-0.0`
/// are rejected while any non-zero divisor, however small, is accepted. Other
/// operations follow IEEE 754 and may produce infinities or NaN.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Example
/// ```
/// use exprcalc::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Sub, 10.0, 4.0).unwrap(), 6.0);
/// assert!(eval_binary(BinaryOperator::Div, 1.0, 0.0).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div => {
            if right == 0.0 {
                return Err(ArithmeticError::DivisionByZero);
            }
            Ok(left / right)
        },
    }
}
