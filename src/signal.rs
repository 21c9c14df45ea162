//! Exceptional condition signaling.
//!
//! Operations never decide on their own what to do about an
//! exceptional condition. They compute the default result
//! and hand it to [`raise`], which consults the context's traps.

use core::fmt;

use crate::{
    ctx::{Condition, Ctx},
    dpd::Dpd64,
};

/// The operation that raised a condition.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Operation {
    /// [`Ctx::scale10`].
    Scale10,
    /// [`Ctx::log10`].
    Log10,
}

impl Operation {
    /// Returns the IEEE 754-2008 name of the operation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scale10 => "scale10",
            Self::Log10 => "log10",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A trapped exceptional condition.
///
/// It carries the result the operation would have returned had
/// the condition not been trapped.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Exception<T> {
    condition: Condition,
    op: Operation,
    operand: Dpd64,
    arg: i32,
    result: T,
}

impl<T> Exception<T> {
    /// Returns the condition that was raised.
    pub fn condition(&self) -> Condition {
        self.condition
    }

    /// Returns the operation that raised the condition.
    pub fn operation(&self) -> Operation {
        self.op
    }

    /// Returns the operation's decimal operand.
    pub fn operand(&self) -> Dpd64 {
        self.operand
    }

    /// Returns the operation's integer operand, or zero if it
    /// does not have one.
    pub fn arg(&self) -> i32 {
        self.arg
    }

    /// Returns the default result.
    pub fn result(&self) -> &T {
        &self.result
    }

    /// Converts the exception into the default result.
    pub fn into_result(self) -> T {
        self.result
    }
}

impl<T: fmt::Debug> fmt::Display for Exception<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:?}, {}): {} (default result: {:?})",
            self.op, self.operand, self.arg, self.condition, self.result
        )
    }
}

#[cfg(feature = "std")]
impl<T: fmt::Debug> std::error::Error for Exception<T> {}

/// Raises `condition` for `op` with the default result
/// `result`.
///
/// If the condition is trapped by `ctx` the result is returned
/// as an [`Exception`]; otherwise it is passed through.
pub(crate) fn raise<T: fmt::Debug>(
    ctx: &Ctx,
    condition: Condition,
    op: Operation,
    operand: Dpd64,
    arg: i32,
    result: T,
) -> Result<T, Exception<T>> {
    tracing::debug!(%op, %condition, ?operand, arg, ?result, "raised condition");

    if ctx.traps.intersects(condition) {
        tracing::warn!(%op, %condition, "trapped condition");
        return Err(Exception {
            condition,
            op,
            operand,
            arg,
            result,
        });
    }
    Ok(result)
}
