use rust_decimal::Decimal;

/// Default lower bound used by right-limited ranges such as `..10`.
pub const DEFAULT_LOWER_BOUND: i64 = -32_767;
/// Default upper bound used by left-limited ranges such as `10..`.
pub const DEFAULT_UPPER_BOUND: i64 = 32_767;

/// Bounds substituted for the missing side of an open range.
///
/// A left-limited range `from..` runs up to `upper` and a right-limited range
/// `..to` starts at `lower`, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeLimits {
    lower: Decimal,
    upper: Decimal,
}

impl RangeLimits {
    /// Creates range limits, or `None` when `lower` is greater than `upper`.
    ///
    /// # Example
    /// ```
    /// use lct::config::RangeLimits;
    ///
    /// assert!(RangeLimits::new(-10, 10).is_some());
    /// assert!(RangeLimits::new(5, 1).is_none());
    /// ```
    #[must_use]
    pub fn new(lower: i64, upper: i64) -> Option<Self> {
        (lower <= upper).then(|| Self { lower: lower.into(),
                                        upper: upper.into(), })
    }

    /// Lowest value produced by a right-limited range.
    #[must_use]
    pub const fn lower(&self) -> Decimal {
        self.lower
    }

    /// Highest value produced by a left-limited range.
    #[must_use]
    pub const fn upper(&self) -> Decimal {
        self.upper
    }
}

impl Default for RangeLimits {
    fn default() -> Self {
        Self { lower: DEFAULT_LOWER_BOUND.into(),
               upper: DEFAULT_UPPER_BOUND.into(), }
    }
}

/// Session configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Bounds for open ranges.
    pub range_limits: RangeLimits,
}
