//! Single declet operations.
//!
//! A declet is a 10-bit densely packed decimal encoding of three
//! decimal digits. Every 10-bit pattern decodes to a value in [0,
//! 999], but 24 of the 1024 patterns are non-canonical: they
//! decode to a value that also has a canonical pattern.
//!
//! The arithmetic here works on the encoded declets and reports
//! the base-1000 carry (or borrow) explicitly. See [`Carry`].

use super::tables::{BIN_TO_DPD, DPD_TO_BIN};

/// The number of decimal digits in a declet.
pub const DIGITS: u32 = 3;

/// The number of bits in a declet.
pub const BITS: u32 = 10;

/// Masks off the bits of a declet.
pub const MASK: u16 = (1 << BITS) - 1;

/// The result of declet arithmetic: a canonical declet and the
/// base-1000 carry (or borrow) out of it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Carry {
    /// The canonical declet.
    pub dpd: u16,
    /// Set if the result carried out of (or borrowed from) the
    /// next declet.
    pub carry: bool,
}

impl Carry {
    const CARRY_BIT: u16 = 1 << BITS;

    /// Packs the result into 11 bits, with the carry in bit 10.
    pub const fn to_bits(self) -> u16 {
        self.dpd | ((self.carry as u16) << BITS)
    }

    /// Unpacks a result packed with [`to_bits`][Self::to_bits].
    ///
    /// Bits above bit 10 are ignored.
    pub const fn from_bits(bits: u16) -> Self {
        Self {
            dpd: bits & MASK,
            carry: bits & Self::CARRY_BIT != 0,
        }
    }

    const fn new(dpd: u16, carry: bool) -> Self {
        Self { dpd, carry }
    }
}

/// Converts a binary number in [0, 999] to a canonical declet.
///
/// # Panics
///
/// Panics if `bin` is greater than 999.
#[allow(clippy::indexing_slicing)]
#[track_caller]
pub const fn int_to_dpd(bin: u16) -> u16 {
    BIN_TO_DPD[bin as usize]
}

/// Converts a declet to a binary number in [0, 999].
///
/// Non-canonical declets decode to the same value as their
/// canonical counterparts.
///
/// # Panics
///
/// Panics if `dpd` is wider than 10 bits.
#[allow(clippy::indexing_slicing)]
#[track_caller]
pub const fn dpd_to_int(dpd: u16) -> u16 {
    DPD_TO_BIN[dpd as usize]
}

/// Returns the canonical declet for `dpd`.
///
/// # Panics
///
/// Panics if `dpd` is wider than 10 bits.
#[track_caller]
pub const fn canonicalize(dpd: u16) -> u16 {
    int_to_dpd(dpd_to_int(dpd))
}

/// Reports whether `dpd` is a canonical declet.
///
/// Only the low 10 bits are considered.
pub const fn is_canonical(dpd: u16) -> bool {
    // The non-canonical patterns are
    //    01x11x111x
    //    10x11x111x
    //    11x11x111x
    // That is, bits `pq` are not both zero and bits `st` and
    // `vwx` are all set.
    const PQ: u16 = 0b1100000000;
    const STVWX: u16 = 0b0001101110;
    (dpd & PQ) == 0 || (dpd & STVWX) != STVWX
}

/// Returns `dpd + n`.
///
/// If the sum exceeds 999 the result wraps around and the carry
/// is set.
///
/// # Panics
///
/// Panics if `dpd` is wider than 10 bits or `n` is greater than
/// 1000.
#[track_caller]
pub const fn inc(dpd: u16, n: u16) -> Carry {
    assert!(n <= 1000, "increment out of range");

    let sum = dpd_to_int(dpd) + n;
    if sum < 1000 {
        Carry::new(int_to_dpd(sum), false)
    } else {
        Carry::new(int_to_dpd(sum - 1000), true)
    }
}

/// Returns `dpd - n`.
///
/// If the difference is negative the result wraps around and the
/// borrow is set.
///
/// # Panics
///
/// Panics if `dpd` is wider than 10 bits or `n` is greater than
/// 1000.
#[track_caller]
pub const fn dec(dpd: u16, n: u16) -> Carry {
    assert!(n <= 1000, "decrement out of range");

    let bin = dpd_to_int(dpd);
    if bin >= n {
        Carry::new(int_to_dpd(bin - n), false)
    } else {
        // bin < n <= 1000, so this cannot underflow.
        Carry::new(int_to_dpd(bin + 1000 - n), true)
    }
}

/// Returns `lhs + rhs + carry`.
///
/// # Panics
///
/// Panics if either declet is wider than 10 bits.
#[track_caller]
pub const fn add(lhs: u16, rhs: u16, carry: bool) -> Carry {
    inc(lhs, dpd_to_int(rhs) + carry as u16)
}

/// Returns `lhs - rhs - borrow`.
///
/// # Panics
///
/// Panics if either declet is wider than 10 bits.
#[track_caller]
pub const fn sub(lhs: u16, rhs: u16, borrow: bool) -> Carry {
    dec(lhs, dpd_to_int(rhs) + borrow as u16)
}

/// Compares two declets by value.
///
/// The result is negative if `lhs < rhs`, zero if they are
/// equal (even if their encodings differ), and positive if
/// `lhs > rhs`.
///
/// # Panics
///
/// Panics if either declet is wider than 10 bits.
#[allow(clippy::cast_possible_wrap)] // both are in [0, 999]
#[track_caller]
pub const fn compare(lhs: u16, rhs: u16) -> i16 {
    dpd_to_int(lhs) as i16 - dpd_to_int(rhs) as i16
}

/// Returns the number of significant digits in the declet.
///
/// The result is in [0, 3]. Zero has no significant digits.
///
/// # Panics
///
/// Panics if `dpd` is wider than 10 bits.
#[track_caller]
pub const fn sig_digits(dpd: u16) -> u32 {
    match dpd_to_int(dpd) {
        0 => 0,
        1..=9 => 1,
        10..=99 => 2,
        _ => 3,
    }
}
