//! Error types for the monthgrid-grid crate.

/// Error type for all fallible operations in the monthgrid-grid crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Returned when a grid is configured with zero lanes.
    #[error("invalid grid configuration: lane count must be >= 1, got {lane_count}")]
    InvalidConfiguration {
        /// The lane count that was provided.
        lane_count: usize,
    },

    /// Returned when an extent is recorded for a line the accumulator does
    /// not track.
    #[error("line {line} out of bounds for {line_count} lines")]
    LineOutOfBounds {
        /// The requested line.
        line: usize,
        /// Number of tracked lines.
        line_count: usize,
    },

    /// Returned when a measured extent is NaN, infinite or negative.
    #[error("extent for line {line} must be finite and non-negative, got {extent}")]
    InvalidExtent {
        /// Line the extent was measured for.
        line: usize,
        /// The rejected extent.
        extent: f64,
    },
}
