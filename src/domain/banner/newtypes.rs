// SPDX-License-Identifier: MPL-2.0
//! Banner newtypes.
//!
//! Type-safe wrappers for banner values, always within valid ranges.

// =============================================================================
// Queue Capacity Bounds
// =============================================================================

/// Pending queue capacity bounds (1 to 8 requests).
pub mod queue_capacity_bounds {
    /// Minimum queue capacity.
    pub const MIN: usize = 1;
    /// Maximum queue capacity.
    pub const MAX: usize = 8;
    /// Default queue capacity: only the newest pending request survives.
    pub const DEFAULT: usize = 1;
}

// =============================================================================
// QueueCapacity
// =============================================================================

/// Number of show-requests the coordinator keeps while a banner is on screen.
///
/// Inserting into a full queue evicts the oldest queued request.
///
/// # Example
///
/// ```
/// use iced_banner::domain::banner::QueueCapacity;
///
/// assert_eq!(QueueCapacity::default().value(), 1);
/// assert_eq!(QueueCapacity::new(0).value(), 1);
/// assert_eq!(QueueCapacity::new(100).value(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueCapacity(usize);

impl QueueCapacity {
    /// Creates a new queue capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(queue_capacity_bounds::MIN, queue_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= queue_capacity_bounds::MIN
    }
}

impl Default for QueueCapacity {
    fn default() -> Self {
        Self(queue_capacity_bounds::DEFAULT)
    }
}
