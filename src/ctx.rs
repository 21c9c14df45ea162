use core::fmt;

use bitflags::bitflags;

use crate::dpd::{Dpd64, Remainder};

/// Configures the rounding and trapping behavior of an
/// operation.
///
/// A `Ctx` is only ever read by operations, so a single context
/// can be shared freely.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Ctx {
    pub(crate) rounding: RoundingMode,
    pub(crate) traps: Condition,
}

impl Ctx {
    /// Creates a context that rounds half to even and does not
    /// trap any conditions.
    pub const fn new() -> Self {
        Self {
            rounding: RoundingMode::ToNearestEven,
            traps: Condition::empty(),
        }
    }

    /// Sets the rounding mode.
    pub const fn with_rounding_mode(self, mode: RoundingMode) -> Self {
        let mut ctx = self;
        ctx.rounding = mode;
        ctx
    }

    /// Sets the conditions that trap.
    ///
    /// An operation that raises a trapped condition returns an
    /// [`Exception`][crate::Exception] instead of its result.
    pub const fn with_traps(self, traps: Condition) -> Self {
        let mut ctx = self;
        ctx.traps = traps;
        ctx
    }

    /// Returns the rounding mode.
    pub const fn rounding_mode(&self) -> RoundingMode {
        self.rounding
    }

    /// Returns the conditions that trap.
    pub const fn traps(&self) -> Condition {
        self.traps
    }
}

impl Default for Ctx {
    fn default() -> Self {
        Self::new()
    }
}

/// Determines how inexact results are rounded.
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Hash)]
pub enum RoundingMode {
    /// IEEE 754-2008 roundTiesToEven.
    ///
    /// - Under 0.5 rounds down.
    /// - Over 0.5 rounds up.
    /// - Exactly 0.5 rounds to the nearest even.
    #[default]
    ToNearestEven,
    /// IEEE 754-2008 roundTiesToAway.
    ///
    /// Like [`ToNearestEven`][Self::ToNearestEven], except that
    /// 0.5 rounds up.
    ToNearestAway,
    /// IEEE 754-2008 roundTowardZero.
    ///
    /// AKA truncation.
    ToZero,
    /// No IEEE 754-2008 equivalent.
    ///
    /// Rounds up if the discarded digits are non-zero.
    AwayFromZero,
    /// IEEE 754-2008 roundTowardNegative.
    ///
    /// AKA floor.
    ToNegativeInf,
    /// IEEE 754-2008 roundTowardPositive.
    ///
    /// AKA ceiling.
    ToPositiveInf,
    /// No IEEE 754-2008 equivalent.
    ///
    /// Like [`ToNearestAway`][Self::ToNearestAway], except that
    /// 0.5 rounds down.
    ToNearestTowardZero,
}

impl RoundingMode {
    /// Reports whether rounding `x` can ever increment its
    /// magnitude.
    ///
    /// Callers can skip computing the last digit when this
    /// returns false.
    pub const fn is_increment_possible(self, x: Dpd64) -> bool {
        use RoundingMode::*;
        match self {
            ToZero => false,
            ToNegativeInf => x.is_sign_negative(),
            ToPositiveInf => x.is_sign_positive(),
            ToNearestEven | ToNearestAway | AwayFromZero | ToNearestTowardZero => true,
        }
    }

    /// Returns the increment (0 or 1) to add to the magnitude of
    /// a truncated coefficient.
    ///
    /// `x` supplies the sign, `last` is the last digit kept,
    /// and `rem` classifies the digits discarded.
    pub const fn rounding_increment(self, x: Dpd64, last: u8, rem: Remainder) -> u8 {
        use RoundingMode::*;

        let nonzero = !matches!(rem, Remainder::Zero);
        let inc = match self {
            ToNearestEven => match rem {
                Remainder::GreaterThanHalf => true,
                Remainder::Half => last & 1 != 0,
                Remainder::Zero | Remainder::LessThanHalf => false,
            },
            ToNearestAway => matches!(rem, Remainder::Half | Remainder::GreaterThanHalf),
            ToNearestTowardZero => matches!(rem, Remainder::GreaterThanHalf),
            ToZero => false,
            AwayFromZero => nonzero,
            ToNegativeInf => nonzero && x.is_sign_negative(),
            ToPositiveInf => nonzero && x.is_sign_positive(),
        };
        inc as u8
    }

    /// Returns the result of an overflow with the sign of `x`.
    ///
    /// Per IEEE 754-2008 section 7.4, this is either an infinity
    /// or the largest finite magnitude, depending on the
    /// direction of rounding.
    pub const fn round_overflow(self, x: Dpd64) -> Dpd64 {
        use RoundingMode::*;

        let sign = x.is_sign_negative();
        let inf = match self {
            ToZero => false,
            ToNegativeInf => sign,
            ToPositiveInf => !sign,
            ToNearestEven | ToNearestAway | AwayFromZero | ToNearestTowardZero => true,
        };
        if inf {
            Dpd64::inf(sign)
        } else {
            Dpd64::max_finite(sign)
        }
    }
}

/// An exceptional condition raised during an operation.
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Hash)]
pub struct Condition(u32);

bitflags! {
    impl Condition: u32 {
        /// Occurs when an operation on a finite, non-zero
        /// operand would produce an infinite result, like the
        /// logarithm of zero.
        const DIVISION_BY_ZERO = 0x4;
        /// Occurs when the result of an operation is not exact,
        /// or when the [OVERFLOW][Condition::OVERFLOW] condition
        /// occurs.
        const INEXACT = 0x20;
        /// Occurs when:
        ///
        /// - An operand to an operation is a signaling NaN.
        /// - The operand of the log10 operation is an infinity or
        /// a NaN.
        const INVALID_OPERATION = 0x100;
        /// Occurs when the adjusted exponent, after rounding,
        /// would be greater than the maximum allowed exponent.
        const OVERFLOW = 0x200;
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctx() {
        let ctx = Ctx::default();
        assert_eq!(ctx.rounding_mode(), RoundingMode::ToNearestEven);
        assert!(ctx.traps().is_empty());

        let ctx = ctx
            .with_rounding_mode(RoundingMode::ToZero)
            .with_traps(Condition::OVERFLOW | Condition::INEXACT);
        assert_eq!(ctx.rounding_mode(), RoundingMode::ToZero);
        assert!(ctx.traps().contains(Condition::OVERFLOW));
        assert!(!ctx.traps().contains(Condition::DIVISION_BY_ZERO));
    }

    #[test]
    fn test_rounding_increment() {
        use Remainder::*;
        use RoundingMode::*;

        let pos = Dpd64::new(1, 0);
        let neg = Dpd64::new(-1, 0);

        // (mode, x, last, rem, want)
        let tests = [
            (ToNearestEven, pos, 4, LessThanHalf, 0),
            (ToNearestEven, pos, 4, Half, 0),
            (ToNearestEven, pos, 5, Half, 1),
            (ToNearestEven, neg, 5, Half, 1),
            (ToNearestEven, pos, 4, GreaterThanHalf, 1),
            (ToNearestAway, pos, 4, Half, 1),
            (ToNearestAway, pos, 4, LessThanHalf, 0),
            (ToNearestTowardZero, pos, 5, Half, 0),
            (ToNearestTowardZero, pos, 5, GreaterThanHalf, 1),
            (ToZero, pos, 9, GreaterThanHalf, 0),
            (AwayFromZero, pos, 0, LessThanHalf, 1),
            (AwayFromZero, neg, 0, LessThanHalf, 1),
            (AwayFromZero, pos, 0, Zero, 0),
            (ToPositiveInf, pos, 0, LessThanHalf, 1),
            (ToPositiveInf, neg, 0, GreaterThanHalf, 0),
            (ToNegativeInf, pos, 0, GreaterThanHalf, 0),
            (ToNegativeInf, neg, 0, LessThanHalf, 1),
        ];
        for (i, (mode, x, last, rem, want)) in tests.into_iter().enumerate() {
            let got = mode.rounding_increment(x, last, rem);
            assert_eq!(got, want, "#{i}: {mode:?} {rem:?}");
            if got != 0 {
                assert!(mode.is_increment_possible(x), "#{i}: {mode:?}");
            }
        }
    }

    #[test]
    fn test_round_overflow() {
        use RoundingMode::*;

        let pos = Dpd64::new(1, 0);
        let neg = Dpd64::new(-1, 0);
        let tests = [
            (ToNearestEven, pos, Dpd64::INFINITY),
            (ToNearestEven, neg, Dpd64::NEG_INFINITY),
            (ToNearestAway, pos, Dpd64::INFINITY),
            (ToNearestTowardZero, neg, Dpd64::NEG_INFINITY),
            (AwayFromZero, neg, Dpd64::NEG_INFINITY),
            (ToZero, pos, Dpd64::MAX),
            (ToZero, neg, Dpd64::MIN),
            (ToPositiveInf, pos, Dpd64::INFINITY),
            (ToPositiveInf, neg, Dpd64::MIN),
            (ToNegativeInf, pos, Dpd64::MAX),
            (ToNegativeInf, neg, Dpd64::NEG_INFINITY),
        ];
        for (i, (mode, x, want)) in tests.into_iter().enumerate() {
            let got = mode.round_overflow(x);
            assert_eq!(got, want, "#{i}: {mode:?}");
        }
    }

    #[test]
    fn test_condition_display() {
        assert_eq!(Condition::INEXACT.to_string(), "INEXACT");
        assert_eq!(
            (Condition::OVERFLOW | Condition::INEXACT).to_string(),
            "INEXACT | OVERFLOW"
        );
    }
}
