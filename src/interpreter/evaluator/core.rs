use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ArithmeticError,
    interpreter::evaluator::{binary::eval_binary, unary::eval_unary},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `ArithmeticError` describing the failure.
pub type EvalResult<T> = Result<T, ArithmeticError>;

/// A unit of work for [`evaluate`]: a node still to be reduced, or an
/// operator waiting for its operands on the value stack.
enum Step<'a> {
    Reduce(&'a Expr),
    ApplyUnary(UnaryOperator),
    ApplyBinary(BinaryOperator),
}

/// Evaluates an expression tree and returns its value.
///
/// This is the main entry point for evaluation. Literals yield their value,
/// unary nodes apply their sign to the operand, and binary nodes evaluate the
/// left operand, then the right one, then apply the operator.
///
/// The walk uses an explicit work stack rather than recursion, since a flat
/// chain like `1 + 1 + ... + 1` produces a tree as deep as its length.
///
/// # Errors
/// [`ArithmeticError::DivisionByZero`] if any division in the tree has a right
/// operand equal to zero.
///
/// # Example
/// ```
/// use exprcalc::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::evaluate,
/// };
///
/// let expr = Expr::binary(Expr::literal(10.0), BinaryOperator::Div, Expr::literal(4.0));
/// assert_eq!(evaluate(&expr).unwrap(), 2.5);
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    let mut steps = vec![Step::Reduce(expr)];
    let mut values: Vec<f64> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Reduce(Expr::Literal { value }) => values.push(*value),
            Step::Reduce(Expr::Unary { op, expr }) => {
                steps.extend([Step::ApplyUnary(*op), Step::Reduce(expr)]);
            },
            Step::Reduce(Expr::Binary { left, op, right }) => {
                steps.extend([Step::ApplyBinary(*op), Step::Reduce(right), Step::Reduce(left)]);
            },
            Step::ApplyUnary(op) => {
                let operand = pop_operand(&mut values);
                values.push(eval_unary(op, operand));
            },
            Step::ApplyBinary(op) => {
                let right = pop_operand(&mut values);
                let left = pop_operand(&mut values);
                values.push(eval_binary(op, left, right)?);
            },
        }
    }

    Ok(pop_operand(&mut values))
}

/// Pops an operand that a previously reduced node pushed.
fn pop_operand(values: &mut Vec<f64>) -> f64 {
    match values.pop() {
        Some(value) => value,
        None => unreachable!("every operator is preceded by the reduction of its operands"),
    }
}
