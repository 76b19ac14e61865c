use crate::error::FormatError;

/// The unit trigonometric functions take and return angles in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    /// Angles are radians.
    #[default]
    Radians,
    /// Angles are degrees; `sin`, `cos` and `tan` convert their argument and
    /// the inverse functions convert their result.
    Degrees,
}

/// Caller-supplied settings for one evaluation.
///
/// The configuration is read-only while an expression is evaluated. The
/// lexer only looks at [`Config::caret_exp`], the evaluator only at
/// [`Config::angle_unit`]; everything else controls how the result is
/// rendered.
///
/// # Example
/// ```
/// use ccalc::{Config, calculate};
///
/// let config = Config { radix: 16, uppercase: true, ..Config::default() };
/// assert_eq!(calculate("255", &config).unwrap(), "0xFF");
/// ```
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Output radix for integer results. Must be at least 2.
    pub radix:      i32,
    /// Digits printed after the decimal point for float results. Must not be
    /// negative.
    pub precision:  i32,
    /// Digit grouping width. `None` picks the radix default, `Some(0)`
    /// disables grouping.
    pub grouping:   Option<usize>,
    /// Angle unit for trigonometric functions.
    pub angle_unit: AngleUnit,
    /// Whether `^` means exponentiation instead of bitwise XOR.
    pub caret_exp:  bool,
    /// Whether to print the result as `true` or `false`.
    pub boolean:    bool,
    /// Whether digits above 9 and boolean words are printed in upper case.
    pub uppercase:  bool,
    /// Whether float results always use scientific notation.
    pub scientific: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { radix:      10,
               precision:  6,
               grouping:   None,
               angle_unit: AngleUnit::Radians,
               caret_exp:  false,
               boolean:    false,
               uppercase:  false,
               scientific: false, }
    }
}

impl Config {
    /// Checks that the output settings can be honoured.
    ///
    /// # Errors
    /// - `FormatError::RadixTooSmall` if the radix is below 2.
    /// - `FormatError::NegativePrecision` if the precision is negative.
    ///
    /// # Example
    /// ```
    /// use ccalc::{Config, error::FormatError};
    ///
    /// let config = Config { radix: 1, ..Config::default() };
    /// assert_eq!(config.validate(), Err(FormatError::RadixTooSmall { radix: 1 }));
    /// ```
    pub const fn validate(&self) -> Result<(), FormatError> {
        if self.radix < 2 {
            return Err(FormatError::RadixTooSmall { radix: self.radix });
        }
        if self.precision < 0 {
            return Err(FormatError::NegativePrecision { precision: self.precision });
        }
        Ok(())
    }

    /// Returns the effective grouping width for integer output.
    ///
    /// Without an explicit width, binary output is grouped by 8 digits, octal
    /// and hexadecimal by 4, and every other radix is not grouped.
    ///
    /// # Example
    /// ```
    /// use ccalc::Config;
    ///
    /// let binary = Config { radix: 2, ..Config::default() };
    /// assert_eq!(binary.grouping_width(), 8);
    /// assert_eq!(Config::default().grouping_width(), 0);
    ///
    /// let grouped = Config { grouping: Some(3), ..Config::default() };
    /// assert_eq!(grouped.grouping_width(), 3);
    /// ```
    #[must_use]
    pub const fn grouping_width(&self) -> usize {
        match self.grouping {
            Some(width) => width,
            None => match self.radix {
                2 => 8,
                8 | 16 => 4,
                _ => 0,
            },
        }
    }
}
