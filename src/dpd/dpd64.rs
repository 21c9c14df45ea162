use core::{fmt, mem::size_of};

use super::coeff;
use crate::util::const_assert;

/// A 64-bit decimal floating point number with a densely packed
/// decimal coefficient.
///
/// (–1)^sign * coefficient * 10^exp
///
/// Equality compares bit patterns, so `0E+1` and `0E+2` are not
/// equal, and neither are two encodings of the same value that
/// differ only in declet canonicality.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Dpd64(
    /// # Layout
    ///
    /// ## Bits
    ///
    /// 63: sign
    /// 58-62: combination
    /// 50-57: exponent continuation
    /// 0-49: coefficient continuation (five declets)
    u64,
);
const_assert!(size_of::<Dpd64>() == 64 / 8);

// Internal stuff.
impl Dpd64 {
    /// The bias added to the encoded exponent in order to
    /// convert it to the "actual" exponent.
    const BIAS: i32 = 398;
    /// The maxmimum value of the encoded exponent.
    const LIMIT: u16 = 767;
    /// Maximum adjusted exponent.
    const EMAX: i32 = 384;
    /// Minimum adjusted exponent.
    const EMIN: i32 = -383;

    const SIGN_SHIFT: u32 = 64 - 1;
    const SIGN_MASK: u64 = 1 << Self::SIGN_SHIFT;

    const COMB_BITS: u32 = 5;
    const COMB_SHIFT: u32 = 64 - 1 - 5;
    const COMB_MASK: u64 = 0x1f << Self::COMB_SHIFT;

    const ECON_BITS: u32 = 8;
    const ECON_SHIFT: u32 = 64 - 1 - 5 - 8;
    const ECON_MASK: u64 = 0xff << Self::ECON_SHIFT;

    /// The signaling bit of a NaN: the first exponent
    /// continuation bit.
    const SNAN_MASK: u64 = 0x80 << Self::ECON_SHIFT;

    const COEFF_MASK: u64 = coeff::MASK;

    const fn signbit(self) -> bool {
        (self.0 & Self::SIGN_MASK) != 0
    }

    /// Returns the combination field.
    const fn comb(self) -> Comb {
        let comb = (self.0 & Self::COMB_MASK) >> Self::COMB_SHIFT;
        Comb(comb as u8)
    }

    /// Returns the exponent continuation field.
    const fn econ(self) -> u16 {
        ((self.0 & Self::ECON_MASK) >> Self::ECON_SHIFT) as u16
    }

    /// Returns the biased exponent.
    ///
    /// If the number is finite, the result is in [0,
    /// [`LIMIT`][Self::LIMIT]].
    const fn biased_exp(self) -> u16 {
        // The exponent only has meaning for finite numbers.
        debug_assert!(self.is_finite());

        let msb = self.comb().msb() as u16;
        let exp = (msb << Self::ECON_BITS) | self.econ();
        debug_assert!(exp <= Self::LIMIT);
        exp
    }

    const fn from_fields(sign: bool, comb: u8, econ: u16, coeff: u64) -> Self {
        debug_assert!(comb & !((1 << Self::COMB_BITS) - 1) == 0);
        debug_assert!(econ & !((1 << Self::ECON_BITS) - 1) == 0);
        debug_assert!(coeff & !Self::COEFF_MASK == 0);

        let mut bits = 0;
        bits |= (sign as u64) << Self::SIGN_SHIFT;
        bits |= (comb as u64) << Self::COMB_SHIFT;
        bits |= (econ as u64) << Self::ECON_SHIFT;
        bits |= coeff;
        Self(bits)
    }

    const fn from_parts_dpd(sign: bool, exp: i32, msd: u8, coeff: u64) -> Self {
        debug_assert!(exp >= Self::MIN_EXP);
        debug_assert!(exp <= Self::MAX_EXP);
        debug_assert!(msd <= 9);

        // `exp` is in [MIN_EXP, MAX_EXP], so `biased` is in [0,
        // LIMIT].
        #[allow(clippy::cast_sign_loss)]
        let biased = (exp + Self::BIAS) as u16;

        let msb = (biased >> Self::ECON_BITS) as u8;
        debug_assert!(msb <= 2);

        // [0,7] -> ab0cde
        // [8,9] -> 11ab0e
        let comb = if msd <= 7 {
            (msb << 3) | msd
        } else {
            0x18 | (msb << 1) | (msd & 0x1)
        };
        let econ = biased & 0xff;

        Self::from_fields(sign, comb, econ, coeff & Self::COEFF_MASK)
    }

    /// Creates an infinity.
    pub(crate) const fn inf(sign: bool) -> Self {
        Self::from_fields(sign, 0x1e, 0, 0)
    }

    /// Creates a quiet NaN.
    const fn nan(sign: bool) -> Self {
        Self::from_fields(sign, 0x1f, 0, 0)
    }

    /// Creates a signaling NaN.
    const fn snan(sign: bool) -> Self {
        Self::from_fields(sign, 0x1f, 0x80, 0)
    }

    /// Returns the largest finite magnitude with the given sign.
    pub(crate) const fn max_finite(sign: bool) -> Self {
        let full = coeff::from_bin(coeff::MAX_BIN);
        Self::from_parts_dpd(sign, Self::MAX_EXP, coeff::msd(full), coeff::declets(full))
    }
}

// Public stuff.
impl Dpd64 {
    /// The largest value that can be represented by this type.
    pub const MAX: Self = Self::max_finite(false);

    /// The smallest value that can be represented by this type.
    pub const MIN: Self = Self::max_finite(true);

    /// The smallest positive value that can be represented by
    /// this type.
    pub const MIN_POSITIVE: Self = Self::from_parts(false, Self::MIN_EXP, 1);

    /// The largest allowed coefficient.
    pub const MAX_COEFF: i64 = coeff::MAX_BIN as i64;

    /// The maximum allowed exponent.
    pub const MAX_EXP: i32 = Self::EMAX - Self::DIGITS as i32 + 1;

    /// The smallest allowed exponent.
    pub const MIN_EXP: i32 = Self::EMIN - Self::DIGITS as i32 + 1;

    /// The number of base 10 significant digits.
    pub const DIGITS: u32 = 16;

    /// Not a Number (NaN).
    pub const NAN: Self = Self::nan(false);

    /// Signaling Not a Number (sNaN).
    pub const SNAN: Self = Self::snan(false);

    /// Infinity (∞).
    pub const INFINITY: Self = Self::inf(false);

    /// Negative infinity (−∞).
    pub const NEG_INFINITY: Self = Self::inf(true);

    /// Reports whether the number is neither infinite nor NaN.
    pub const fn is_finite(self) -> bool {
        self.comb().is_finite()
    }

    /// Reports whether the number is either positive or negative
    /// infinity.
    pub const fn is_infinite(self) -> bool {
        self.comb().is_infinite()
    }

    /// Reports whether the number is `-0.0` or `+0.0`.
    pub const fn is_zero(self) -> bool {
        // Covers the coefficient and MSD <= 7.
        const MASK1: u64 = (0x7 << Dpd64::COMB_SHIFT) | Dpd64::COEFF_MASK;
        // Covers MSD > 7 and specials.
        const MASK2: u64 = 0x18 << Dpd64::COMB_SHIFT;
        (self.0 & MASK1) == 0 && (self.0 & MASK2) != MASK2
    }

    /// Reports whether the number is a NaN.
    pub const fn is_nan(self) -> bool {
        self.comb().is_nan()
    }

    /// Reports whether the number is a signaling NaN.
    pub const fn is_snan(self) -> bool {
        self.is_nan() && (self.0 & Self::SNAN_MASK) != 0
    }

    /// Reports whether the number is positive, including `+0.0`.
    pub const fn is_sign_positive(self) -> bool {
        !self.is_sign_negative()
    }

    /// Reports whether the number is negative, including `-0.0`.
    pub const fn is_sign_negative(self) -> bool {
        self.signbit()
    }

    /// Returns the unbiased exponent.
    ///
    /// The number must be finite. The result is in
    /// [[`MIN_EXP`][Self::MIN_EXP], [`MAX_EXP`][Self::MAX_EXP]].
    pub const fn exponent(self) -> i32 {
        self.biased_exp() as i32 - Self::BIAS
    }

    /// Returns the MSD of the coefficient, which is stored in the
    /// combination field.
    ///
    /// The number must be finite. The result is zero if the
    /// leading digit is empty.
    pub const fn msd(self) -> u8 {
        self.comb().msd()
    }

    /// Returns the coefficient, less the MSD, as five declets.
    pub const fn coeff(self) -> u64 {
        self.0 & Self::COEFF_MASK
    }

    /// Returns the coefficient in binary.
    ///
    /// The number must be finite.
    pub const fn coeff_bin(self) -> u64 {
        coeff::to_bin(self.msd(), self.coeff())
    }

    /// Returns the number of significant digits in the number.
    ///
    /// If the number is zero, it returns 1. The number must be
    /// finite.
    pub const fn digits(self) -> u32 {
        debug_assert!(self.is_finite());

        if self.msd() != 0 {
            return Self::DIGITS;
        }
        let nlz = coeff::leading_zeros(self.coeff());
        if nlz == coeff::DIGITS {
            1
        } else {
            coeff::DIGITS - nlz
        }
    }

    /// Encodes a finite number with the sign of `self`.
    ///
    /// `exp` must be in [[`MIN_EXP`][Self::MIN_EXP],
    /// [`MAX_EXP`][Self::MAX_EXP]] and `msd` must be in [0, 9].
    /// Bits of `coeff` above the declets are ignored.
    pub const fn encode(self, exp: i32, msd: u8, coeff: u64) -> Self {
        Self::from_parts_dpd(self.signbit(), exp, msd, coeff)
    }

    /// Returns a zero with the sign of `self` and the exponent
    /// `exp`.
    pub const fn zero(self, exp: i32) -> Self {
        self.encode(exp, 0, 0)
    }

    /// Returns the canonical encoding of the number.
    ///
    /// - Finite numbers have their declets canonicalized.
    /// - Infinities have their exponent continuation and
    ///   coefficient cleared.
    /// - NaNs keep their signaling bit and payload, with the
    ///   payload's declets canonicalized.
    #[must_use = "this returns the result of the operation \
                  without modifying the original"]
    pub const fn canonicalize(self) -> Self {
        if self.is_finite() {
            let coeff = coeff::canonicalize(self.coeff());
            return Self((self.0 & !Self::COEFF_MASK) | coeff);
        }
        if self.is_infinite() {
            return Self::inf(self.signbit());
        }
        let snan = if self.is_snan() { 0x80 } else { 0 };
        let payload = coeff::canonicalize(self.coeff());
        Self::from_fields(self.signbit(), 0x1f, snan, payload)
    }

    /// Reports whether the number is canonically encoded.
    pub const fn is_canonical(self) -> bool {
        self.0 == self.canonicalize().0
    }
}

// To/from reprs.
impl Dpd64 {
    /// Creates a `Dpd64` from its coefficient and exponent.
    ///
    /// # Panics
    ///
    /// Panics if `coeff` has more than 16 digits or `exp` is
    /// outside [[`MIN_EXP`][Self::MIN_EXP],
    /// [`MAX_EXP`][Self::MAX_EXP]].
    #[track_caller]
    pub const fn new(coeff: i64, exp: i32) -> Self {
        Self::from_parts(coeff < 0, exp, coeff.unsigned_abs())
    }

    /// Creates a `Dpd64` from its sign, exponent, and binary
    /// coefficient.
    ///
    /// # Panics
    ///
    /// Panics if `bin` has more than 16 digits or `exp` is
    /// outside [[`MIN_EXP`][Self::MIN_EXP],
    /// [`MAX_EXP`][Self::MAX_EXP]].
    #[track_caller]
    pub const fn from_parts(sign: bool, exp: i32, bin: u64) -> Self {
        assert!(bin <= coeff::MAX_BIN, "coefficient out of range");
        assert!(
            exp >= Self::MIN_EXP && exp <= Self::MAX_EXP,
            "exponent out of range"
        );

        let full = coeff::from_bin(bin);
        Self::from_parts_dpd(sign, exp, coeff::msd(full), coeff::declets(full))
    }

    /// Creates a `Dpd64` from its raw bits.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Raw transmutation to `u64`.
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    /// Creates a `Dpd64` from a little-endian byte array.
    pub const fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Self::from_bits(u64::from_le_bytes(bytes))
    }

    /// Creates a `Dpd64` from a big-endian byte array.
    pub const fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self::from_bits(u64::from_be_bytes(bytes))
    }

    /// Converts the `Dpd64` to a little-endian byte array.
    pub const fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    /// Converts the `Dpd64` to a big-endian byte array.
    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Returns `-self`.
    #[must_use = "this returns the result of the operation \
                  without modifying the original"]
    pub const fn const_neg(self) -> Self {
        Self(self.0 ^ Self::SIGN_MASK)
    }
}

impl fmt::Binary for Dpd64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::Debug for Dpd64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = u8::from(self.signbit());
        write!(f, ">> {:016x} [S:{sign} Cb:{:02x} Ec:{:02x}]", self.0, self.comb().0, self.econ())?;
        if self.is_finite() {
            write!(f, " {}E{}", self.coeff_bin(), self.exponent())?;
        } else if self.is_infinite() {
            write!(f, " Infinity")?;
        } else if self.is_snan() {
            write!(f, " sNaN")?;
        } else {
            write!(f, " NaN")?;
        }
        Ok(())
    }
}

/// The combination field.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Comb(
    /// ```text
    /// | Field     | Type     | Exp | Coeff   |
    /// | --------- | -------- | --- | ------- |
    /// | a b c d e | Finite   | a b | 0 c d e |
    /// | 1 1 c d e | Finite   | c d | 1 0 0 e |
    /// | 1 1 1 1 0 | Infinity | - - | - - - - |
    /// | 1 1 1 1 1 | NaN      | - - | - - - - |
    /// ```
    u8,
);

impl Comb {
    const AB: u8 = 0b11000; // ab...
    const CD: u8 = 0b00110; // ..cd.
    const E_: u8 = 0b00001; // ....e

    const fn is_finite(self) -> bool {
        !self.is_special()
    }

    const fn is_infinite(self) -> bool {
        // When the first (top) four bits of the combination
        // field are set, the number is either an infinity or
        // a NaN. The fifth bit signals NaN.
        self.0 & 0x1f == 0x1e
    }

    const fn is_nan(self) -> bool {
        self.0 & 0x1f == 0x1f
    }

    const fn is_special(self) -> bool {
        self.0 & 0x1e == 0x1e
    }

    /// Returns the encoded MSD.
    ///
    /// If the number is finite, the result is in [0, 9].
    const fn msd(self) -> u8 {
        // The MSD only has meaning for finite numbers.
        debug_assert!(self.is_finite());

        match self.0 & Self::AB {
            Self::AB => 0x8 | (self.0 & Self::E_), // 100e
            _ => self.0 & (Self::CD | Self::E_),   // 0cde
        }
    }

    /// Returns the encoded two MSB for the exponent.
    ///
    /// If the number is finite, the result is always in [0, 2].
    const fn msb(self) -> u8 {
        // The exponent only has meaning for finite numbers.
        debug_assert!(self.is_finite());

        // self = abcde
        match self.0 & Self::AB {
            // If bits `ab` are both set, then the MSBs are
            // encoded in bits `cd`. Otherwise, the MSBs are
            // encoded in `ab`.
            Self::AB => (self.0 & Self::CD) >> 1,
            b => b >> 3,
        }
    }
}
