//! Bounds and overflow-safe arithmetic for money amounts.

use rust_decimal::Decimal;

use crate::CoreError;

/// Largest single amount accepted for a transaction, budget limit, goal or payment.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Checks that `amount` is positive and within [`MAX_AMOUNT`].
pub fn ensure_positive(amount: Decimal) -> Result<(), CoreError> {
    if amount <= Decimal::ZERO {
        return Err(CoreError::InvalidAmount(amount));
    }
    ensure_within_bounds(amount)
}

/// Checks that `amount` does not exceed [`MAX_AMOUNT`] in magnitude.
pub fn ensure_within_bounds(amount: Decimal) -> Result<(), CoreError> {
    if amount.abs() > MAX_AMOUNT {
        return Err(CoreError::AmountTooLarge(amount));
    }
    Ok(())
}

pub(crate) fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(if b.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

pub(crate) fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, saturating_add)
}

/// `part / whole * 100`, or `None` when the result is not representable.
pub(crate) fn checked_percent(part: Decimal, whole: Decimal) -> Option<Decimal> {
    part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED)
}
