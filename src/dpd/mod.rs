//! IEEE 754-2008 decimal floating point numbers with densely
//! packed decimal significands.
//!
//! [`declet`] converts single declets and does arithmetic on
//! them. [`coeff`] builds whole-coefficient operations for
//! decimal64 on top of it.

mod bits;
pub mod coeff;
pub mod declet;
mod dpd64;
mod tables;

pub use coeff::Remainder;
pub use dpd64::Dpd64;
