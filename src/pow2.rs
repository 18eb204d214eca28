//! Power-of-two arithmetic over any unsigned primitive integer.

use num_traits::{PrimInt, Unsigned};

/// Number of bits of the integer type `T`.
fn type_bits<T: PrimInt + Unsigned>() -> u32 {
    T::zero().count_zeros()
}

/// Number of bits needed to represent `val` in unsigned binary. Zero has bit
/// length 0.
pub fn bit_length<T: PrimInt + Unsigned>(val: T) -> u32 {
    type_bits::<T>() - val.leading_zeros()
}

pub fn is_power_of_two<T: PrimInt + Unsigned>(val: T) -> bool {
    !val.is_zero() && (val & (val - T::one())).is_zero()
}

/// Smallest power of two greater or equal to `val`, or `None` if it doesn't
/// fit in `T`.
///
/// Zero has no meaningful next power of two, so 1 is returned for it.
pub fn checked_pow2ceil<T: PrimInt + Unsigned>(val: T) -> Option<T> {
    if val.is_zero() {
        return Some(T::one());
    }

    let exp = bit_length(val - T::one());
    if exp >= type_bits::<T>() {
        None
    } else {
        Some(T::one() << exp as usize)
    }
}

/// Smallest power of two greater or equal to `val`. `pow2ceil(0)` is 1.
///
/// # Panics
///
/// If the result is not representable in `T`, e.g. any `u64` above `2^63`. Use
/// `checked_pow2ceil()` where that can happen.
pub fn pow2ceil<T: PrimInt + Unsigned>(val: T) -> T {
    match checked_pow2ceil(val) {
        Some(ceil) => ceil,
        None => panic!(
            "no power of two >= {} fits in {} bits",
            val.to_u128().unwrap_or(u128::MAX),
            type_bits::<T>()
        ),
    }
}
