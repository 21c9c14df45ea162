//! Power-of-ten operators: `scale10` and `log10`.

use crate::{
    ctx::{Condition, Ctx},
    dpd::{coeff, Dpd64, Remainder},
    signal::{self, Exception, Operation},
};

impl Ctx {
    /// Returns `x * 10^n`.
    ///
    /// This is IEEE 754-2008 scaleB for decimal formats. The
    /// result is exact unless the exponent leaves the range of
    /// [`Dpd64`]:
    ///
    /// - Below [`MIN_EXP`][Dpd64::MIN_EXP], the coefficient is
    ///   shifted right and rounded per the context's rounding
    ///   mode, raising [`INEXACT`][Condition::INEXACT] if any
    ///   non-zero digits were discarded.
    /// - Above [`MAX_EXP`][Dpd64::MAX_EXP], the coefficient is
    ///   shifted left if it has enough leading zeros. Otherwise
    ///   [`OVERFLOW`][Condition::OVERFLOW] is raised.
    ///
    /// Zeros keep their sign and take the clamped exponent. NaNs
    /// and infinities, like every result, are returned in
    /// canonical form.
    ///
    /// # Errors
    ///
    /// Returns an [`Exception`] carrying the default result if
    /// the raised condition is trapped.
    pub fn scale10(&self, x: Dpd64, n: i32) -> Result<Dpd64, Exception<Dpd64>> {
        if n == 0 || !x.is_finite() {
            return Ok(x.canonicalize());
        }

        // `exp + n` can overflow an `i32`.
        let e = i64::from(x.exponent()) + i64::from(n);
        let min = i64::from(Dpd64::MIN_EXP);
        let max = i64::from(Dpd64::MAX_EXP);

        if x.is_zero() {
            // Zero with the preferred exponent, clamped.
            #[allow(clippy::cast_possible_truncation)] // clamped to an i32 range
            let e = e.clamp(min, max) as i32;
            return Ok(x.zero(e));
        }

        let msd = x.msd();
        if (min..=max).contains(&e) {
            #[allow(clippy::cast_possible_truncation)] // in [min, max]
            let e = e as i32;
            return Ok(x.encode(e, msd, coeff::canonicalize(x.coeff())));
        }

        if e < min {
            // Saturate the shift: anything past 17 digits
            // discards the whole coefficient just the same.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let shift = (min - e).min(i64::from(u32::MAX)) as u32;
            return self.scale10_underflow(x, n, msd, shift);
        }

        // e > max
        if msd == 0 {
            let nlz = 1 + i64::from(coeff::leading_zeros(x.coeff()));
            if e - nlz <= max {
                // The exponent fits once the coefficient is
                // shifted left.
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let shift = (e - max) as u32;
                let full = coeff::shift_left(msd, x.coeff(), shift);
                return Ok(x.encode(Dpd64::MAX_EXP, coeff::msd(full), coeff::declets(full)));
            }
        }

        let result = self.rounding.round_overflow(x);
        signal::raise(self, Condition::OVERFLOW, Operation::Scale10, x, n, result)
    }

    /// Shifts the coefficient of `x` right by `shift` digits and
    /// encodes it at the minimum exponent.
    fn scale10_underflow(
        &self,
        x: Dpd64,
        n: i32,
        msd: u8,
        shift: u32,
    ) -> Result<Dpd64, Exception<Dpd64>> {
        let shifted = coeff::shift_right(msd, x.coeff(), shift);
        let rem = coeff::remainder_of_pow10(msd, x.coeff(), shift);
        if rem == Remainder::Zero {
            // Still exact.
            return Ok(x.encode(Dpd64::MIN_EXP, 0, coeff::declets(shifted)));
        }

        let mut full = shifted;
        if self.rounding.is_increment_possible(x) {
            let last = coeff::mod10(coeff::declets(shifted));
            if self.rounding.rounding_increment(x, last, rem) != 0 {
                full = coeff::inc(shifted);
            }
        }
        let result = x.encode(Dpd64::MIN_EXP, coeff::msd(full), coeff::declets(full));
        signal::raise(self, Condition::INEXACT, Operation::Scale10, x, n, result)
    }

    /// Returns the exponent of the most significant digit of
    /// `x`.
    ///
    /// This is IEEE 754-2008 logB for decimal formats: the
    /// integral part of `log10(|x|)`. The result is always exact.
    ///
    /// - If `x` is zero, [`DIVISION_BY_ZERO`][Condition::DIVISION_BY_ZERO]
    ///   is raised with the default result [`i32::MIN`].
    /// - If `x` is infinite or NaN,
    ///   [`INVALID_OPERATION`][Condition::INVALID_OPERATION] is
    ///   raised with the default result [`i32::MAX`].
    ///
    /// # Errors
    ///
    /// Returns an [`Exception`] carrying the default result if
    /// the raised condition is trapped.
    pub fn log10(&self, x: Dpd64) -> Result<i32, Exception<i32>> {
        if x.is_zero() {
            return signal::raise(
                self,
                Condition::DIVISION_BY_ZERO,
                Operation::Log10,
                x,
                0,
                i32::MIN,
            );
        }
        if !x.is_finite() {
            return signal::raise(
                self,
                Condition::INVALID_OPERATION,
                Operation::Log10,
                x,
                0,
                i32::MAX,
            );
        }

        #[allow(clippy::cast_possible_wrap)] // DIGITS is 16
        let digits = Dpd64::DIGITS as i32;
        let exp = x.exponent();
        if x.msd() == 0 {
            // The empty MSD counts as a leading zero.
            #[allow(clippy::cast_possible_wrap)] // at most 15
            let nlz = 1 + coeff::leading_zeros(x.coeff()) as i32;
            return Ok(exp + digits - (nlz + 1));
        }
        Ok(exp + digits - 1)
    }
}

impl Dpd64 {
    /// Returns `self * 10^n`, rounding half to even.
    ///
    /// See [`Ctx::scale10`].
    #[must_use = "this returns the result of the operation \
                  without modifying the original"]
    pub fn scale10(self, n: i32) -> Self {
        match Ctx::new().scale10(self, n) {
            Ok(v) => v,
            Err(e) => e.into_result(),
        }
    }

    /// Returns the exponent of the most significant digit.
    ///
    /// Zero returns [`i32::MIN`] and infinities and NaNs return
    /// [`i32::MAX`]. See [`Ctx::log10`].
    pub fn log10(self) -> i32 {
        match Ctx::new().log10(self) {
            Ok(v) => v,
            Err(e) => e.into_result(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{thread_rng, Rng};

    use super::*;
    use crate::ctx::RoundingMode;

    const MIN: i32 = Dpd64::MIN_EXP;
    const MAX: i32 = Dpd64::MAX_EXP;

    /// Appends a non-canonical 999 declet to the lowest declet.
    fn non_canonical(x: Dpd64) -> Dpd64 {
        Dpd64::from_bits(x.to_bits() | 0b11_1_11_1_111_1)
    }

    #[test]
    fn test_scale10_zero_n() {
        let xs = [
            Dpd64::new(0, 0),
            Dpd64::new(0, MIN).const_neg(),
            Dpd64::new(123, -5),
            Dpd64::MAX,
            Dpd64::MIN,
            Dpd64::INFINITY,
            Dpd64::NEG_INFINITY,
            Dpd64::NAN,
            Dpd64::SNAN,
            non_canonical(Dpd64::new(1_000, 7)),
            Dpd64::from_bits(Dpd64::INFINITY.to_bits() | 0x1234),
        ];
        let ctx = Ctx::new().with_traps(Condition::all());
        for (i, x) in xs.into_iter().enumerate() {
            let got = ctx.scale10(x, 0);
            assert_eq!(got, Ok(x.canonicalize()), "#{i}: {x:?}");
        }
    }

    #[test]
    fn test_scale10_specials() {
        let ctx = Ctx::new().with_traps(Condition::all());
        for n in [-1_000, -1, 1, 1_000, i32::MIN, i32::MAX] {
            assert_eq!(ctx.scale10(Dpd64::INFINITY, n), Ok(Dpd64::INFINITY), "#{n}");
            assert_eq!(ctx.scale10(Dpd64::NEG_INFINITY, n), Ok(Dpd64::NEG_INFINITY), "#{n}");
            let got = ctx.scale10(Dpd64::SNAN, n).map(Dpd64::is_snan);
            assert_eq!(got, Ok(true), "#{n}");
        }
    }

    #[test]
    fn test_scale10_zero() {
        // (x, n, want exponent)
        let tests = [
            (Dpd64::new(0, 0), 5, 5),
            (Dpd64::new(0, 0), -5, -5),
            (Dpd64::new(0, 0), 1_000, MAX),
            (Dpd64::new(0, 0), -1_000, MIN),
            (Dpd64::new(0, MAX), i32::MAX, MAX),
            (Dpd64::new(0, MIN), i32::MIN, MIN),
            (Dpd64::new(0, 300).const_neg(), 69, MAX),
            (Dpd64::new(0, 300).const_neg(), 70, MAX),
        ];
        let ctx = Ctx::new().with_traps(Condition::all());
        for (i, (x, n, want)) in tests.into_iter().enumerate() {
            let got = ctx.scale10(x, n).unwrap();
            assert!(got.is_zero(), "#{i}");
            assert_eq!(got.is_sign_negative(), x.is_sign_negative(), "#{i}");
            assert_eq!(got.exponent(), want, "#{i}");
        }
    }

    #[test]
    fn test_scale10_exact() {
        let tests = [
            (Dpd64::new(123, 0), 3, Dpd64::new(123, 3)),
            (Dpd64::new(-123, 0), -3, Dpd64::new(-123, -3)),
            (Dpd64::new(1, MIN), MAX - MIN, Dpd64::new(1, MAX)),
            (Dpd64::new(9_999_999_999_999_999, MAX), MIN - MAX, Dpd64::new(9_999_999_999_999_999, MIN)),
            (non_canonical(Dpd64::new(1_000, 0)), 2, Dpd64::new(1_999, 2)),
        ];
        let ctx = Ctx::new().with_traps(Condition::all());
        for (i, (x, n, want)) in tests.into_iter().enumerate() {
            let got = ctx.scale10(x, n);
            assert_eq!(got, Ok(want), "#{i}");
        }
    }

    #[test]
    fn test_scale10_underflow_exact() {
        let ctx = Ctx::new().with_traps(Condition::all());

        // Trailing zeros are shifted off.
        let got = ctx.scale10(Dpd64::new(12_300, MIN), -2);
        assert_eq!(got, Ok(Dpd64::new(123, MIN)));

        let got = ctx.scale10(Dpd64::new(-1_000_000_000_000_000, MIN + 3), -18);
        assert_eq!(got, Ok(Dpd64::new(-1, MIN)));
    }

    #[test]
    fn test_scale10_underflow_inexact() {
        use RoundingMode::*;

        // (mode, coefficient, n, want coefficient)
        let tests = [
            (ToNearestEven, 12_345, -1, 1_234),
            (ToNearestEven, 12_346, -1, 1_235),
            (ToNearestEven, 12_355, -1, 1_236),
            (ToNearestEven, -12_355, -1, -1_236),
            (ToNearestEven, 12_351, -2, 124),
            (ToNearestEven, 15, -2, 0),
            (ToNearestEven, 51, -2, 1),
            (ToNearestAway, 12_345, -1, 1_235),
            (ToNearestTowardZero, 12_345, -1, 1_234),
            (ToNearestTowardZero, 12_346, -1, 1_235),
            (ToZero, 12_349, -1, 1_234),
            (ToZero, -12_349, -1, -1_234),
            (AwayFromZero, 12_341, -1, 1_235),
            (AwayFromZero, -12_341, -1, -1_235),
            (ToPositiveInf, 12_341, -1, 1_235),
            (ToPositiveInf, -12_349, -1, -1_234),
            (ToNegativeInf, 12_349, -1, 1_234),
            (ToNegativeInf, -12_341, -1, -1_235),
            (AwayFromZero, 1, -100, 1),
            (ToNearestEven, 1, i32::MIN, 0),
            (AwayFromZero, -1, i32::MIN, -1),
            // The increment carries into the MSD.
            (ToNearestEven, 9_999_999_999_999_999, -1, 1_000_000_000_000_000),
        ];
        for (i, (mode, coeff, n, want)) in tests.into_iter().enumerate() {
            let x = Dpd64::new(coeff, MIN);
            let want = Dpd64::new(want, MIN);

            let ctx = Ctx::new().with_rounding_mode(mode);
            assert_eq!(ctx.scale10(x, n), Ok(want), "#{i}: {mode:?}");

            let ctx = ctx.with_traps(Condition::INEXACT);
            let err = ctx.scale10(x, n).unwrap_err();
            assert_eq!(err.condition(), Condition::INEXACT, "#{i}");
            assert_eq!(err.operation(), Operation::Scale10, "#{i}");
            assert_eq!(err.operand(), x, "#{i}");
            assert_eq!(err.arg(), n, "#{i}");
            assert_eq!(err.into_result(), want, "#{i}: {mode:?}");
        }
    }

    #[test]
    fn test_scale10_overflow_headroom() {
        let ctx = Ctx::new().with_traps(Condition::all());

        // 42E+369 has 14 leading zeros to spare.
        let got = ctx.scale10(Dpd64::new(42, MAX), 14);
        assert_eq!(got, Ok(Dpd64::new(4_200_000_000_000_000, MAX)));

        let got = ctx.scale10(Dpd64::new(-1, 360), 24);
        assert_eq!(got, Ok(Dpd64::new(-1_000_000_000_000_000, MAX)));
    }

    #[test]
    fn test_scale10_overflow() {
        use RoundingMode::*;

        let tests = [
            (ToNearestEven, Dpd64::new(42, MAX), 15, Dpd64::INFINITY),
            (ToNearestEven, Dpd64::new(-1, MAX), 16, Dpd64::NEG_INFINITY),
            (ToNearestEven, Dpd64::new(9, 0), i32::MAX, Dpd64::INFINITY),
            (ToZero, Dpd64::new(1_000_000_000_000_000, MAX), 1, Dpd64::MAX),
            (ToZero, Dpd64::new(-5, MAX), 100, Dpd64::MIN),
            (ToPositiveInf, Dpd64::new(-5, MAX), 100, Dpd64::MIN),
            (ToNegativeInf, Dpd64::new(5, MAX), 100, Dpd64::MAX),
            (ToNegativeInf, Dpd64::new(-5, MAX), 100, Dpd64::NEG_INFINITY),
        ];
        for (i, (mode, x, n, want)) in tests.into_iter().enumerate() {
            let ctx = Ctx::new().with_rounding_mode(mode);
            assert_eq!(ctx.scale10(x, n), Ok(want), "#{i}: {mode:?}");

            let ctx = ctx.with_traps(Condition::OVERFLOW);
            let err = ctx.scale10(x, n).unwrap_err();
            assert_eq!(err.condition(), Condition::OVERFLOW, "#{i}");
            assert_eq!(err.into_result(), want, "#{i}: {mode:?}");
        }
    }

    #[test]
    fn test_scale10_default_ctx() {
        assert_eq!(Dpd64::new(5, 0).scale10(2), Dpd64::new(5, 2));
        assert_eq!(Dpd64::new(15, MIN).scale10(-1), Dpd64::new(2, MIN));
        assert_eq!(Dpd64::new(15, MAX).scale10(15), Dpd64::INFINITY);
    }

    #[test]
    fn test_log10() {
        let tests = [
            (Dpd64::new(1, 0), 0),
            (Dpd64::new(9, 0), 0),
            (Dpd64::new(10, 0), 1),
            (Dpd64::new(-999, 0), 2),
            (Dpd64::new(1_000, -3), 0),
            (Dpd64::new(123, -5), -3),
            (Dpd64::new(1, MIN), MIN),
            (Dpd64::new(1_000_000_000_000_000, 0), 15),
            (Dpd64::new(9_999_999_999_999_999, MAX), MAX + 15),
            (Dpd64::new(100_000_000_000_000, 0), 14),
            (non_canonical(Dpd64::new(0, 4)), 6),
        ];
        let ctx = Ctx::new().with_traps(Condition::all());
        for (i, (x, want)) in tests.into_iter().enumerate() {
            assert_eq!(ctx.log10(x), Ok(want), "#{i}: {x:?}");
            assert_eq!(x.log10(), want, "#{i}: {x:?}");
        }
    }

    #[test]
    fn test_log10_msd() {
        // With the MSD populated the result only depends on the
        // exponent.
        let mut rng = thread_rng();
        for _ in 0..10_000 {
            let bin = rng.gen_range(1_000_000_000_000_000..=coeff::MAX_BIN);
            let exp = rng.gen_range(MIN..=MAX);
            let x = Dpd64::from_parts(rng.gen(), exp, bin);
            assert_ne!(x.msd(), 0);
            assert_eq!(x.log10(), exp + 15, "{x:?}");
        }
    }

    #[test]
    fn test_log10_digits() {
        let mut rng = thread_rng();
        for _ in 0..10_000 {
            let bin = rng.gen_range(1..=coeff::MAX_BIN);
            let exp = rng.gen_range(MIN..=MAX);
            let x = Dpd64::from_parts(false, exp, bin);
            #[allow(clippy::cast_possible_wrap)]
            let want = exp + bin.ilog10() as i32;
            assert_eq!(x.log10(), want, "{x:?}");
        }
    }

    #[test]
    fn test_log10_signals() {
        let tests = [
            (Dpd64::new(0, 0), Condition::DIVISION_BY_ZERO, i32::MIN),
            (Dpd64::new(0, MIN).const_neg(), Condition::DIVISION_BY_ZERO, i32::MIN),
            (Dpd64::INFINITY, Condition::INVALID_OPERATION, i32::MAX),
            (Dpd64::NEG_INFINITY, Condition::INVALID_OPERATION, i32::MAX),
            (Dpd64::NAN, Condition::INVALID_OPERATION, i32::MAX),
            (Dpd64::SNAN, Condition::INVALID_OPERATION, i32::MAX),
        ];
        for (i, (x, condition, want)) in tests.into_iter().enumerate() {
            assert_eq!(Ctx::new().log10(x), Ok(want), "#{i}");

            let ctx = Ctx::new().with_traps(condition);
            let err = ctx.log10(x).unwrap_err();
            assert_eq!(err.condition(), condition, "#{i}");
            assert_eq!(err.operation(), Operation::Log10, "#{i}");
            assert_eq!(err.into_result(), want, "#{i}");
        }
    }
}
