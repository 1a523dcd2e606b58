// ============================================================================
// Arithmetic Operations
// add / subtract / multiply / divide over any Operand
// ============================================================================

use super::errors::{ArithmeticError, ArithmeticResult};
use super::operand::Operand;

/// Returns `a + b`.
///
/// # Example
/// ```
/// use arithmetic::numeric::add;
///
/// assert_eq!(add(2, 3), 5);
/// ```
#[inline]
pub fn add<T: Operand>(a: T, b: T) -> T {
    a.add_total(b)
}

/// Returns `a - b`.
///
/// # Example
/// ```
/// use arithmetic::numeric::subtract;
///
/// assert_eq!(subtract(10, 7), 3);
/// ```
#[inline]
pub fn subtract<T: Operand>(a: T, b: T) -> T {
    a.sub_total(b)
}

/// Returns `a * b`.
///
/// # Example
/// ```
/// use arithmetic::numeric::multiply;
///
/// assert_eq!(multiply(5, 2), 10);
/// ```
#[inline]
pub fn multiply<T: Operand>(a: T, b: T) -> T {
    a.mul_total(b)
}

/// Returns `a / b`.
///
/// Integer operands truncate toward zero; floating-point and decimal
/// operands divide exactly.
///
/// # Errors
/// Returns `DivisionByZero` if `b` is zero.
///
/// # Example
/// ```
/// use arithmetic::numeric::{divide, ArithmeticError};
///
/// assert_eq!(divide(10, 5), Ok(2));
/// assert_eq!(divide(10, 0), Err(ArithmeticError::DivisionByZero));
/// assert_eq!(divide(7.0, 2.0), Ok(3.5));
/// ```
#[inline]
pub fn divide<T: Operand>(a: T, b: T) -> ArithmeticResult<T> {
    if b.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a.div_nonzero(b))
}
