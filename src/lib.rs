//! `dpdfp` is a pure Rust, no-std implementation of IEEE 754-2008
//! decimal64 numbers with densely packed decimal (DPD)
//! coefficients.
//!
//! # Features
//!
//! - Conversion between binary values in [0, 999] and 10-bit
//! declets, plus canonicalization, carry/borrow arithmetic, and
//! comparison on raw declets. See [`dpd::declet`].
//! - The `scale10` (scaleB) and `log10` (logB) operators, with
//! exponent clamping, directed rounding, and IEEE 754-2008
//! exceptional conditions. See [`Ctx`].
//!
//! # Cargo Features
//!
//! - `std`: Include [`std`] support. Implements
//! [`std::error::Error`] for [`Exception`].
//!
//! - `slow-tests`: Run exhaustive tests that take a long time.
//!
//! [`std`]: https://doc.rust-lang.org/std/

#![allow(clippy::unusual_byte_groupings)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(feature = "std", test)), deny(clippy::std_instead_of_core))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::cast_precision_loss)]
#![deny(clippy::cast_sign_loss)]
#![deny(clippy::expect_used)]
#![deny(clippy::implicit_saturating_sub)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::panic)]
#![deny(clippy::ptr_as_ptr)]
#![deny(clippy::string_slice)]
#![deny(clippy::transmute_ptr_to_ptr)]
#![deny(clippy::undocumented_unsafe_blocks)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::wildcard_imports)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unused_lifetimes)]
#![deny(unused_qualifications)]

mod ctx;
pub mod dpd;
mod pow;
pub mod signal;
mod util;

pub use ctx::*;
#[doc(inline)]
#[allow(non_camel_case_types)]
pub use dpd::Dpd64 as d64;
pub use dpd::Dpd64;
pub use signal::{Exception, Operation};

/// Simplifies importing common items.
pub mod prelude {
    pub use super::{d64, Condition, Ctx, RoundingMode};
}
