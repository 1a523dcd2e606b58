// ============================================================================
// Operand Trait
// Numeric types accepted by the arithmetic operations
// ============================================================================

use rust_decimal::Decimal;
use std::fmt;

/// A numeric type the arithmetic operations can work on.
///
/// Every method except `div_nonzero` is total: it returns a value for any
/// pair of inputs and never panics. Implementations pick the type's native
/// overflow behaviour:
/// - Integers wrap (two's complement), matching release-build hardware
/// - Floats follow IEEE-754 (overflow to infinity, NaN propagates)
/// - `Decimal` saturates at `Decimal::MIN` / `Decimal::MAX`
///
/// # Thread Safety
/// Operands are plain `Copy` values and must be `Send + Sync` so they can
/// flow through shared calculators and observers.
pub trait Operand:
    Copy + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// The additive identity, used for the zero-divisor guard.
    const ZERO: Self;

    /// Check if value equals zero (including `-0.0` for floats).
    fn is_zero(self) -> bool;

    /// Total addition.
    fn add_total(self, rhs: Self) -> Self;

    /// Total subtraction.
    fn sub_total(self, rhs: Self) -> Self;

    /// Total multiplication.
    fn mul_total(self, rhs: Self) -> Self;

    /// Division by a divisor the caller has already checked is non-zero.
    ///
    /// Integers truncate toward zero; `MIN / -1` wraps to `MIN`.
    fn div_nonzero(self, rhs: Self) -> Self;
}

// ============================================================================
// Integer Implementations
// ============================================================================

macro_rules! impl_integer_operand {
    ($($t:ty),* $(,)?) => {
        $(
            impl Operand for $t {
                const ZERO: Self = 0;

                #[inline]
                fn is_zero(self) -> bool {
                    self == 0
                }

                #[inline]
                fn add_total(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn sub_total(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn mul_total(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                fn div_nonzero(self, rhs: Self) -> Self {
                    self.wrapping_div(rhs)
                }
            }
        )*
    };
}

impl_integer_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// ============================================================================
// Floating-Point Implementations
// ============================================================================

macro_rules! impl_float_operand {
    ($($t:ty),* $(,)?) => {
        $(
            impl Operand for $t {
                const ZERO: Self = 0.0;

                #[inline]
                fn is_zero(self) -> bool {
                    // -0.0 == 0.0 under IEEE-754
                    self == 0.0
                }

                #[inline]
                fn add_total(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn sub_total(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn mul_total(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn div_nonzero(self, rhs: Self) -> Self {
                    self / rhs
                }
            }
        )*
    };
}

impl_float_operand!(f32, f64);

// ============================================================================
// Decimal Implementation
// ============================================================================

impl Operand for Decimal {
    const ZERO: Self = Decimal::ZERO;

    #[inline]
    fn is_zero(self) -> bool {
        Decimal::is_zero(&self)
    }

    #[inline]
    fn add_total(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }

    #[inline]
    fn sub_total(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }

    #[inline]
    fn mul_total(self, rhs: Self) -> Self {
        self.saturating_mul(rhs)
    }

    #[inline]
    fn div_nonzero(self, rhs: Self) -> Self {
        // checked_div only fails here on overflow; saturate with the sign of
        // the true quotient.
        self.checked_div(rhs).unwrap_or(
            if self.is_sign_negative() != rhs.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            },
        )
    }
}
