//! Confusing numbers.
//!
//! A number is *confusing* if turning it upside down (rotating by 180°)
//! produces a valid but different number. Only the digits 0, 1, 6, 8 and 9
//! survive rotation: 0, 1 and 8 map to themselves, 6 and 9 swap. Leading
//! zeros of the rotated number are dropped, so `10` rotates to `1`.

/// Rotate a single digit by 180°, if it stays a digit.
#[must_use]
pub fn rotate_digit(digit: u8) -> Option<u8> {
    match digit {
        0 => Some(0),
        1 => Some(1),
        6 => Some(9),
        8 => Some(8),
        9 => Some(6),
        _ => None,
    }
}

/// Rotate `n` by 180°.
///
/// Returns `None` if any digit of `n` has no rotated form. The result is
/// widened to `u128` because rotating a large `u64` can overflow it (for
/// example `10_000_000_000_000_000_009` rotates to `60_000_000_000_000_000_001`).
#[must_use]
pub fn rotate(n: u64) -> Option<u128> {
    let mut remaining = n;
    let mut rotated: u128 = 0;
    while remaining > 0 {
        let digit = u8::try_from(remaining % 10).ok()?;
        rotated = rotated * 10 + u128::from(rotate_digit(digit)?);
        remaining /= 10;
    }
    Some(rotated)
}

/// Check whether `n` rotates to a valid number different from itself.
#[must_use]
pub fn is_confusing(n: u64) -> bool {
    rotate(n).is_some_and(|rotated| rotated != u128::from(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_digit() {
        assert_eq!(rotate_digit(6), Some(9));
        assert_eq!(rotate_digit(9), Some(6));
        assert_eq!(rotate_digit(8), Some(8));
        for digit in [2, 3, 4, 5, 7] {
            assert_eq!(rotate_digit(digit), None);
        }
    }

    #[test]
    fn test_rotate() {
        assert_eq!(rotate(6), Some(9));
        assert_eq!(rotate(89), Some(68));
        assert_eq!(rotate(10), Some(1));
        assert_eq!(rotate(916), Some(916));
        assert_eq!(rotate(25), None);
    }

    #[test]
    fn test_rotate_zero() {
        assert_eq!(rotate(0), Some(0));
        assert!(!is_confusing(0));
    }

    #[test]
    fn test_is_confusing() {
        assert!(is_confusing(6));
        assert!(is_confusing(89));
        assert!(is_confusing(10));
        assert!(!is_confusing(11));
        assert!(!is_confusing(25));
        assert!(!is_confusing(69));
        assert!(!is_confusing(8008));
    }

    #[test]
    fn test_rotate_past_u64_max() {
        let n = 10_000_000_000_000_000_009_u64;
        let rotated = rotate(n).unwrap();
        assert!(rotated > u128::from(u64::MAX));
        assert!(is_confusing(n));
    }
}
