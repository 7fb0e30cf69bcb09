use super::*;

/// Checked arithmetic that reports failures as ledger errors.
pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self>;
    fn safe_sub(self, rhs: Self) -> Result<Self>;
    fn safe_mul(self, rhs: Self) -> Result<Self>;
    fn safe_div(self, rhs: Self) -> Result<Self>;
}

macro_rules! impl_safe_math {
    ($($t:ty),*) => {
        $(
            impl SafeMath for $t {
                #[inline]
                fn safe_add(self, rhs: Self) -> Result<Self> {
                    self.checked_add(rhs)
                        .ok_or_else(|| error!(LedgerError::MathOverflow))
                }

                #[inline]
                fn safe_sub(self, rhs: Self) -> Result<Self> {
                    self.checked_sub(rhs)
                        .ok_or_else(|| error!(LedgerError::MathUnderflow))
                }

                #[inline]
                fn safe_mul(self, rhs: Self) -> Result<Self> {
                    self.checked_mul(rhs)
                        .ok_or_else(|| error!(LedgerError::MathOverflow))
                }

                #[inline]
                fn safe_div(self, rhs: Self) -> Result<Self> {
                    if rhs == 0 {
                        return Err(error!(LedgerError::DivisionByZero));
                    }
                    self.checked_div(rhs)
                        .ok_or_else(|| error!(LedgerError::MathOverflow))
                }
            }
        )*
    };
}

impl_safe_math!(u64, u128, i64);
