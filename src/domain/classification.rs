//! Arithmetic property checks for 64-bit integers.
//!
//! All checks are trial-division based and bounded by O(√n); there is no
//! precomputation or caching. Negative inputs are never rejected here — each
//! function documents its own policy for them.

/// Returns true if `n` is prime.
///
/// Anything below 2 (including all negatives) is not prime. Everything else
/// is trial-divided by each integer up to `floor(sqrt(n))` inclusive.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    (2..=n.isqrt()).all(|i| n % i != 0)
}

/// Returns true if `n` equals the sum of its proper divisors.
///
/// Divisors are collected in pairs `(i, n / i)` for each `i` up to
/// `floor(sqrt(n))`, with the accumulator starting at 1 since 1 divides
/// everything. Perfect-square pairs are counted once. The accumulator is
/// `i128` because divisor sums of highly composite numbers near `i64::MAX`
/// exceed `i64`.
///
/// Non-positive inputs are not perfect; 1 is excluded explicitly (its
/// proper-divisor sum is the empty sum, not 1).
pub fn is_perfect(n: i64) -> bool {
    if n <= 0 {
        return false;
    }
    let mut sum: i128 = 1;
    for i in 2..=n.isqrt() {
        if n % i == 0 {
            sum += i128::from(i);
            if i != n / i {
                sum += i128::from(n / i);
            }
        }
    }
    sum == i128::from(n) && n != 1
}

/// Returns true if `n` equals the sum of its decimal digits each raised to
/// the power of the digit count.
///
/// Zero counts as a one-digit number, so `0` is an Armstrong number
/// (`0^1 == 0`), as is every other single-digit value. Negative inputs are
/// not Armstrong numbers. The power sum accumulates in `i128`: nineteen
/// digits of `9^19` overflow `i64`.
pub fn is_armstrong(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let digits = decimal_digit_count(n);

    let mut sum: i128 = 0;
    let mut rest = n;
    while rest > 0 {
        sum += i128::from(rest % 10).pow(digits);
        rest /= 10;
    }
    sum == i128::from(n)
}

/// Sum of the decimal digits of `|n|`.
///
/// Negative inputs contribute the digits of their absolute value
/// (`unsigned_abs`, so `i64::MIN` is handled without overflow).
pub fn digit_sum(n: i64) -> u32 {
    let mut rest = n.unsigned_abs();
    let mut sum = 0;
    while rest > 0 {
        sum += (rest % 10) as u32;
        rest /= 10;
    }
    sum
}

/// Number of decimal digits in a non-negative `n`; zero is one digit.
fn decimal_digit_count(n: i64) -> u32 {
    let mut count = 1;
    let mut rest = n / 10;
    while rest > 0 {
        count += 1;
        rest /= 10;
    }
    count
}

/// Mathematical parity of an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Classifies `n` as even or odd.
    ///
    /// The remainder is compared against zero, so the sign Rust gives
    /// `n % 2` for negative `n` cannot flip the result: `-3` is odd,
    /// `-4` and `i64::MIN` are even.
    pub fn of(n: i64) -> Self {
        if n % 2 != 0 { Self::Odd } else { Self::Even }
    }

    /// The property tag used in API responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Even => "even",
            Self::Odd => "odd",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIMES_UNDER_100: &[i64] = &[
        2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83,
        89, 97,
    ];

    #[test]
    fn test_is_prime_matches_table_under_100() {
        for n in 0..100 {
            assert_eq!(
                is_prime(n),
                PRIMES_UNDER_100.contains(&n),
                "wrong primality for {}",
                n
            );
        }
    }

    #[test]
    fn test_is_prime_known_large_primes() {
        assert!(is_prime(101));
        assert!(is_prime(997));
        assert!(is_prime(7919));
        assert!(is_prime(9973));
    }

    #[test]
    fn test_is_prime_known_composites() {
        assert!(!is_prime(1001)); // 7 * 11 * 13
        assert!(!is_prime(7917)); // 3 * 7 * 13 * 29
        assert!(!is_prime(9999));
        assert!(!is_prime(10000));
    }

    #[test]
    fn test_is_prime_count_below_ten_thousand() {
        // pi(10^4) = 1229
        let count = (0..10_000).filter(|&n| is_prime(n)).count();
        assert_eq!(count, 1229);
    }

    #[test]
    fn test_is_prime_rejects_zero_and_one() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
    }

    #[test]
    fn test_is_prime_rejects_negatives() {
        assert!(!is_prime(-2));
        assert!(!is_prime(-7));
        assert!(!is_prime(i64::MIN));
    }

    #[test]
    fn test_is_perfect_known_perfect_numbers() {
        assert!(is_perfect(6));
        assert!(is_perfect(28));
        assert!(is_perfect(496));
        assert!(is_perfect(8128));
        assert!(is_perfect(33_550_336));
    }

    #[test]
    fn test_is_perfect_rejects_one() {
        assert!(!is_perfect(1));
    }

    #[test]
    fn test_is_perfect_rejects_ordinary_numbers() {
        assert!(!is_perfect(10));
        assert!(!is_perfect(12)); // abundant
        assert!(!is_perfect(27)); // deficient
        assert!(!is_perfect(100));
    }

    #[test]
    fn test_is_perfect_rejects_non_positive() {
        assert!(!is_perfect(0));
        assert!(!is_perfect(-6));
        assert!(!is_perfect(-28));
        assert!(!is_perfect(i64::MIN));
    }

    #[test]
    fn test_is_armstrong_single_digits() {
        for n in 0..=9 {
            assert!(is_armstrong(n), "{} should be an Armstrong number", n);
        }
    }

    #[test]
    fn test_is_armstrong_known_armstrong_numbers() {
        assert!(is_armstrong(153));
        assert!(is_armstrong(370));
        assert!(is_armstrong(371));
        assert!(is_armstrong(407));
        assert!(is_armstrong(9474));
        assert!(is_armstrong(54_748));
        assert!(is_armstrong(9_926_315));
    }

    #[test]
    fn test_is_armstrong_rejects_ordinary_numbers() {
        assert!(!is_armstrong(10));
        assert!(!is_armstrong(100));
        assert!(!is_armstrong(154));
        assert!(!is_armstrong(9475));
    }

    #[test]
    fn test_is_armstrong_rejects_negatives() {
        assert!(!is_armstrong(-153));
        assert!(!is_armstrong(-1));
        assert!(!is_armstrong(i64::MIN));
    }

    #[test]
    fn test_is_armstrong_does_not_overflow_at_i64_max() {
        // 19 digits; the per-digit powers alone exceed i64.
        assert!(!is_armstrong(i64::MAX));
    }

    #[test]
    fn test_digit_sum_basic() {
        assert_eq!(digit_sum(12345), 15);
        assert_eq!(digit_sum(9), 9);
        assert_eq!(digit_sum(10), 1);
        assert_eq!(digit_sum(999), 27);
    }

    #[test]
    fn test_digit_sum_zero() {
        assert_eq!(digit_sum(0), 0);
    }

    #[test]
    fn test_digit_sum_uses_absolute_value() {
        assert_eq!(digit_sum(-123), 6);
        assert_eq!(digit_sum(-9), 9);
    }

    #[test]
    fn test_digit_sum_extremes() {
        assert_eq!(digit_sum(i64::MAX), 88); // 9223372036854775807
        assert_eq!(digit_sum(i64::MIN), 89); // |n| = 9223372036854775808
    }

    #[test]
    fn test_decimal_digit_count() {
        assert_eq!(decimal_digit_count(0), 1);
        assert_eq!(decimal_digit_count(7), 1);
        assert_eq!(decimal_digit_count(10), 2);
        assert_eq!(decimal_digit_count(9474), 4);
        assert_eq!(decimal_digit_count(i64::MAX), 19);
    }

    #[test]
    fn test_parity_even() {
        assert_eq!(Parity::of(0), Parity::Even);
        assert_eq!(Parity::of(4), Parity::Even);
        assert_eq!(Parity::of(-4), Parity::Even);
        assert_eq!(Parity::of(i64::MIN), Parity::Even);
    }

    #[test]
    fn test_parity_odd() {
        assert_eq!(Parity::of(1), Parity::Odd);
        assert_eq!(Parity::of(7), Parity::Odd);
        assert_eq!(Parity::of(-7), Parity::Odd);
        assert_eq!(Parity::of(i64::MAX), Parity::Odd);
    }

    #[test]
    fn test_parity_tags() {
        assert_eq!(Parity::Even.as_str(), "even");
        assert_eq!(Parity::Odd.as_str(), "odd");
    }
}
