//! Whole-coefficient operations for decimal64.
//!
//! A decimal64 coefficient has 16 digits: the MSD, which lives
//! in the combination field, followed by five declets. Functions
//! here take the declets as the low 50 bits of a `u64` and, when
//! they need it, the MSD separately.
//!
//! Functions that can produce a 16-digit result return a "full"
//! coefficient: the declets in the low 50 bits and the MSD, in
//! binary, in the bits above them. See [`msd`] and [`declets`].

use super::declet;

/// The number of declets in a decimal64 coefficient.
pub const DECLETS: u32 = 5;

/// The number of bits used by the declets.
pub const BITS: u32 = DECLETS * declet::BITS;

/// Masks off the declets.
pub const MASK: u64 = (1 << BITS) - 1;

/// The number of digits held by the declets.
pub const DIGITS: u32 = DECLETS * declet::DIGITS;

/// The largest binary coefficient, `10^16 - 1`.
pub const MAX_BIN: u64 = 10u64.pow(DIGITS + 1) - 1;

/// Classifies the digits discarded by a right shift.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Remainder {
    /// The discarded digits are all zero.
    Zero,
    /// The discarded digits are greater than zero but less than
    /// half a unit in the last place.
    LessThanHalf,
    /// The discarded digits are exactly half a unit in the last
    /// place.
    Half,
    /// The discarded digits are greater than half a unit in the
    /// last place.
    GreaterThanHalf,
}

/// Returns the MSD of a full coefficient.
pub const fn msd(full: u64) -> u8 {
    (full >> BITS) as u8
}

/// Returns the declets of a full coefficient.
pub const fn declets(full: u64) -> u64 {
    full & MASK
}

/// Returns the `i`th declet, counting from the least
/// significant.
const fn declet_at(coeff: u64, i: u32) -> u16 {
    ((coeff >> (i * declet::BITS)) & (declet::MASK as u64)) as u16
}

/// Returns `10^n`.
const fn pow10(n: u32) -> u64 {
    debug_assert!(n <= 19);

    10u64.pow(n)
}

/// Canonicalizes each declet in `coeff`.
pub const fn canonicalize(coeff: u64) -> u64 {
    let mut out = 0;
    let mut i = 0;
    while i < DECLETS {
        let dpd = declet::canonicalize(declet_at(coeff, i));
        out |= (dpd as u64) << (i * declet::BITS);
        i += 1;
    }
    out
}

/// Reports whether every declet in `coeff` is canonical.
pub const fn is_canonical(coeff: u64) -> bool {
    let mut i = 0;
    while i < DECLETS {
        if !declet::is_canonical(declet_at(coeff, i)) {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns `full + 1` as a full coefficient.
///
/// The result has canonical declets. A carry out of the top
/// declet increments the MSD.
pub const fn inc(full: u64) -> u64 {
    debug_assert!(to_bin(msd(full), declets(full)) < MAX_BIN);

    let mut out = 0;
    let mut carry = true;
    let mut i = 0;
    while i < DECLETS {
        let r = declet::inc(declet_at(full, i), carry as u16);
        out |= (r.dpd as u64) << (i * declet::BITS);
        carry = r.carry;
        i += 1;
    }
    let msd = msd(full) + carry as u8;
    out | ((msd as u64) << BITS)
}

/// Returns the number of leading zero digits in the declets.
///
/// The MSD is not included, so the result is in [0, 15].
pub const fn leading_zeros(coeff: u64) -> u32 {
    let mut n = 0;
    let mut i = DECLETS;
    while i > 0 {
        i -= 1;
        let sig = declet::sig_digits(declet_at(coeff, i));
        n += declet::DIGITS - sig;
        if sig != 0 {
            break;
        }
    }
    n
}

/// Returns the least significant digit of `coeff`.
pub const fn mod10(coeff: u64) -> u8 {
    (declet::dpd_to_int(declet_at(coeff, 0)) % 10) as u8
}

/// Converts a DPD coefficient to binary.
pub const fn to_bin(msd: u8, coeff: u64) -> u64 {
    debug_assert!(msd <= 9);

    let mut bin = msd as u64;
    let mut i = DECLETS;
    while i > 0 {
        i -= 1;
        bin = bin * 1000 + declet::dpd_to_int(declet_at(coeff, i)) as u64;
    }
    bin
}

/// Converts a binary coefficient in [0, 10^16) to a full DPD
/// coefficient.
pub const fn from_bin(mut bin: u64) -> u64 {
    debug_assert!(bin <= MAX_BIN);

    let mut out = 0;
    let mut i = 0;
    while i < DECLETS {
        let dpd = declet::int_to_dpd((bin % 1000) as u16);
        out |= (dpd as u64) << (i * declet::BITS);
        bin /= 1000;
        i += 1;
    }
    out | (bin << BITS)
}

/// Shifts the coefficient right by `n` digits, discarding the
/// digits shifted out.
///
/// The result is a full coefficient.
pub const fn shift_right(msd: u8, coeff: u64, n: u32) -> u64 {
    if n > DIGITS {
        return 0;
    }
    from_bin(to_bin(msd, coeff) / pow10(n))
}

/// Shifts the coefficient left by `n` digits.
///
/// The shifted coefficient must fit in 16 digits. The result is
/// a full coefficient.
pub const fn shift_left(msd: u8, coeff: u64, n: u32) -> u64 {
    debug_assert!(n <= DIGITS);

    let bin = to_bin(msd, coeff);
    debug_assert!(bin <= MAX_BIN / pow10(n));

    from_bin(bin * pow10(n))
}

/// Classifies the digits discarded by shifting the coefficient
/// right by `n` digits.
pub const fn remainder_of_pow10(msd: u8, coeff: u64, n: u32) -> Remainder {
    let bin = to_bin(msd, coeff);
    if n == 0 || bin == 0 {
        return Remainder::Zero;
    }
    if n > DIGITS + 1 {
        // Every digit is discarded and the coefficient is less
        // than 10^16, which is less than half of 10^n.
        return Remainder::LessThanHalf;
    }
    let rem = bin % pow10(n);
    let half = 5 * pow10(n - 1);
    if rem == 0 {
        Remainder::Zero
    } else if rem < half {
        Remainder::LessThanHalf
    } else if rem == half {
        Remainder::Half
    } else {
        Remainder::GreaterThanHalf
    }
}
