use std::{
    cell::Cell,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::{config::AngleUnit, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Largest value returned by `rand()`, matching the C library's `RAND_MAX`.
pub const RAND_MAX: i64 = 2_147_483_647;

/// Stores the read-only evaluation context.
///
/// The evaluator has no variables and no user functions; the only settings
/// it consults are the angle unit for trigonometric functions and the state
/// of the `rand()` generator.
///
/// ## Usage
///
/// A `Context` is created for each evaluation. Operator and function methods
/// take `&self`, so nothing the evaluator does can change configuration
/// halfway through an expression.
#[derive(Debug)]
pub struct Context {
    /// Unit used by `sin`, `cos`, `tan` and their inverses.
    pub angle_unit: AngleUnit,
    rand_state:     Cell<u64>,
}

impl Context {
    /// Creates a context with a generator seeded from the system clock.
    ///
    /// # Example
    /// ```
    /// use ccalc::{
    ///     config::AngleUnit,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let context = Context::new(AngleUnit::Degrees);
    /// let result = context.eval_function("cos", &[Value::Integer(180)]).unwrap();
    /// assert_eq!(result, Value::Float(-1.0));
    /// ```
    #[must_use]
    pub fn new(angle_unit: AngleUnit) -> Self {
        let seed = SystemTime::now().duration_since(UNIX_EPOCH)
                                    .map_or(0x2545_F491, |d| u64::from(d.subsec_nanos()) ^ d.as_secs());
        Self::with_seed(angle_unit, seed)
    }

    /// Creates a context whose `rand()` sequence is fully determined by
    /// `seed`.
    #[must_use]
    pub const fn with_seed(angle_unit: AngleUnit, seed: u64) -> Self {
        // xorshift has a fixed point at zero
        let seed = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { angle_unit,
               rand_state: Cell::new(seed) }
    }

    /// Returns the next pseudo-random integer in `0..=RAND_MAX`.
    pub(crate) fn next_random(&self) -> i64 {
        let mut x = self.rand_state.get();
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.rand_state.set(x);

        // the top 31 bits are always within RAND_MAX
        i64::try_from(x >> 33).unwrap_or_default()
    }

    /// Converts a trigonometric argument to radians.
    pub(crate) fn angle_to_radians(&self, angle: f64) -> f64 {
        match self.angle_unit {
            AngleUnit::Radians => angle,
            AngleUnit::Degrees => angle.to_radians(),
        }
    }

    /// Converts an inverse trigonometric result from radians.
    pub(crate) fn angle_from_radians(&self, angle: f64) -> f64 {
        match self.angle_unit {
            AngleUnit::Radians => angle,
            AngleUnit::Degrees => angle.to_degrees(),
        }
    }
}
