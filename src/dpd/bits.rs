//! Bit-by-bit DPD packing and unpacking.
//!
//! This is the encoding as written in IEEE 754-2008 tables 3.3
//! and 3.4, one named bit at a time. It is slow and only used to
//! check the lookup tables.

#![cfg(test)]

use core::fmt;

/// Three BCD digits, most significant first.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) struct Bcd([u16; 3]);

impl Bcd {
    /// Creates a BCD from a binary number in [0, 999].
    pub(super) const fn from_bin(bin: u16) -> Self {
        debug_assert!(bin <= 999);

        Self([bin / 100, (bin / 10) % 10, bin % 10])
    }

    /// Converts the BCD to a binary number.
    pub(super) const fn to_bin(self) -> u16 {
        let [d1, d2, d3] = self.0;
        d1 * 100 + d2 * 10 + d3
    }
}

impl fmt::Display for Bcd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [d1, d2, d3] = self.0;
        write!(f, "({d1:04b})({d2:04b})({d3:04b})")
    }
}

/// Splits the low `N` bits of `v`, most significant first.
#[allow(clippy::indexing_slicing)] // i < N
const fn split<const N: usize>(v: u16) -> [u16; N] {
    let mut out = [0; N];
    let mut i = 0;
    while i < N {
        out[i] = (v >> (N - 1 - i)) & 1;
        i += 1;
    }
    out
}

/// The inverse of [`split`].
#[allow(clippy::indexing_slicing)] // i < N
const fn join<const N: usize>(bits: [u16; N]) -> u16 {
    let mut v = 0;
    let mut i = 0;
    while i < N {
        v = (v << 1) | bits[i];
        i += 1;
    }
    v
}

/// Packs a BCD into a DPD.
pub(super) const fn pack(bcd: Bcd) -> u16 {
    let [d1, d2, d3] = bcd.0;
    let [a, b, c, d] = split::<4>(d1);
    let [e, f, g, h] = split::<4>(d2);
    let [i, j, k, m] = split::<4>(d3);

    // `a`, `e`, and `i` are set for the large digits, 8 and 9.
    #[rustfmt::skip]
    let dpd = match (a, e, i) {
        // p  q  r  s  t  u  v  w  x  y
        (0, 0, 0) => [b, c, d, f, g, h, 0, j, k, m],
        (0, 0, 1) => [b, c, d, f, g, h, 1, 0, 0, m],
        (0, 1, 0) => [b, c, d, j, k, h, 1, 0, 1, m],
        (1, 0, 0) => [j, k, d, f, g, h, 1, 1, 0, m],
        (1, 1, 0) => [j, k, d, 0, 0, h, 1, 1, 1, m],
        (1, 0, 1) => [f, g, d, 0, 1, h, 1, 1, 1, m],
        (0, 1, 1) => [b, c, d, 1, 0, h, 1, 1, 1, m],
        _         => [0, 0, d, 1, 1, h, 1, 1, 1, m],
    };
    join(dpd)
}

/// Unpacks a DPD into a BCD.
///
/// Only the low 10 bits are used. Bits that the non-canonical
/// patterns leave unused are ignored.
pub(super) const fn unpack(dpd: u16) -> Bcd {
    let [p, q, r, s, t, u, v, w, x, y] = split::<10>(dpd);

    #[rustfmt::skip]
    let [d1, d2, d3] = match (v, w, x, s, t) {
        (0, ..)          => [[0, p, q, r], [0, s, t, u], [0, w, x, y]],
        (1, 0, 0, ..)    => [[0, p, q, r], [0, s, t, u], [1, 0, 0, y]],
        (1, 0, 1, ..)    => [[0, p, q, r], [1, 0, 0, u], [0, s, t, y]],
        (1, 1, 0, ..)    => [[1, 0, 0, r], [0, s, t, u], [0, p, q, y]],
        (1, 1, 1, 0, 0)  => [[1, 0, 0, r], [1, 0, 0, u], [0, p, q, y]],
        (1, 1, 1, 0, 1)  => [[1, 0, 0, r], [0, p, q, u], [1, 0, 0, y]],
        (1, 1, 1, 1, 0)  => [[0, p, q, r], [1, 0, 0, u], [1, 0, 0, y]],
        _                => [[1, 0, 0, r], [1, 0, 0, u], [1, 0, 0, y]],
    };
    Bcd([join(d1), join(d2), join(d3)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_join() {
        assert_eq!(split::<4>(0b1001), [1, 0, 0, 1]);
        assert_eq!(join([1, 0, 1, 1]), 0b1011);
        for v in 0..(1 << 10) {
            assert_eq!(join(split::<10>(v)), v, "#{v:010b}");
        }
    }

    #[test]
    fn test_pack_unpack() {
        // (bin, dpd)
        let tests = [
            (5, 0b000_000_0_101),
            (9, 0b000_000_1_001),
            (55, 0b000_101_0_101),
            (79, 0b000_111_1_001),
            (80, 0b000_000_1_010),
            (99, 0b000_101_1_111),
            (555, 0b101_101_0_101),
            (812, 0b010_001_1_100),
            (885, 0b100_000_1_111),
            (858, 0b100_011_1_110),
            (999, 0b001_111_1_111),
        ];
        for (i, (bin, dpd)) in tests.into_iter().enumerate() {
            let bcd = Bcd::from_bin(bin);
            assert_eq!(pack(bcd), dpd, "#{i} ({bcd})");
            assert_eq!(unpack(dpd), bcd, "#{i} ({bin})");
        }
    }

    #[test]
    fn test_pack_unpack_exhaustive() {
        for bin in 0..=999 {
            let bcd = Bcd::from_bin(bin);
            let dpd = pack(bcd);
            assert!(dpd < 1 << 10, "#{bin}: {dpd:b}");
            assert_eq!(unpack(dpd), bcd, "#{bin}: dpd={dpd:010b}");
        }
    }

    #[test]
    fn test_unpack_non_canonical() {
        // Every pattern decodes to three digits, but only 1000
        // of them are produced by packing.
        let mut n = 0;
        for dpd in 0..(1 << 10) {
            let bin = unpack(dpd).to_bin();
            assert!(bin <= 999, "#{dpd:010b}");
            if pack(Bcd::from_bin(bin)) != dpd {
                n += 1;
            }
        }
        assert_eq!(n, 24);
    }
}
