//! Policies for edge cases of model construction.

/// What to do when the window start lies after its end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReversedRange {
    /// Fail with [`ModelError::InvalidRange`](crate::ModelError::InvalidRange).
    #[default]
    Reject,
    /// Build a model containing only the start date.
    SingleDay,
}

/// What to do when calendar arithmetic runs out of representable dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Return the tree built so far and log a warning.
    #[default]
    Truncate,
    /// Fail with the underlying
    /// [`CalendarError::ArithmeticOverflow`](monthgrid_calendar::CalendarError::ArithmeticOverflow).
    Fail,
}

/// Options for [`build_model_with`](crate::build_model_with).
///
/// # Example
///
/// ```
/// use monthgrid_model::{BuildOptions, OverflowPolicy, ReversedRange};
///
/// let options = BuildOptions::new()
///     .with_reversed_range(ReversedRange::SingleDay)
///     .with_overflow(OverflowPolicy::Fail);
/// assert_eq!(options.reversed_range(), ReversedRange::SingleDay);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    reversed_range: ReversedRange,
    overflow: OverflowPolicy,
}

impl BuildOptions {
    /// Defaults: reject reversed ranges, truncate on overflow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reversed-range policy.
    pub fn with_reversed_range(mut self, policy: ReversedRange) -> Self {
        self.reversed_range = policy;
        self
    }

    /// Sets the overflow policy.
    pub fn with_overflow(mut self, policy: OverflowPolicy) -> Self {
        self.overflow = policy;
        self
    }

    pub fn reversed_range(&self) -> ReversedRange {
        self.reversed_range
    }

    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }
}
