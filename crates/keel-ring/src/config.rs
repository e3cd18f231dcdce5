//! Ring deque configuration and validation.

use std::error::Error;
use std::fmt;

/// Sizing policy for a [`RingDeque`](crate::RingDeque).
///
/// Validated by [`RingDeque::with_config`](crate::RingDeque::with_config).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingConfig {
    /// Physical slots allocated up front. Default: 0.
    pub initial_capacity: usize,
    /// Minimum number of slots added when a full deque grows. Default: 4.
    ///
    /// Growth from capacity `c` goes to `max(2c, c + min_growth)`, so small
    /// deques do not reallocate on every push. Must be non-zero.
    pub min_growth: usize,
}

impl RingConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

    /// Default minimum growth step.
    pub const DEFAULT_MIN_GROWTH: usize = 4;

    /// Config with the given initial capacity and default growth.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            min_growth: Self::DEFAULT_MIN_GROWTH,
        }
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroGrowth`] if `min_growth` is zero, since a
    /// full deque with zero capacity could then never grow.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_growth == 0 {
            return Err(ConfigError::ZeroGrowth);
        }
        Ok(())
    }

    /// Capacity to grow to from a full buffer of `current` slots.
    pub fn grown_capacity(&self, current: usize) -> usize {
        current
            .saturating_mul(2)
            .max(current.saturating_add(self.min_growth.max(1)))
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

/// Errors detected while validating a [`RingConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `min_growth` was zero.
    ZeroGrowth,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroGrowth => write!(f, "min_growth must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = RingConfig::default();
        assert_eq!(config.initial_capacity, 0);
        assert_eq!(config.min_growth, RingConfig::DEFAULT_MIN_GROWTH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_growth_rejected() {
        let config = RingConfig {
            initial_capacity: 8,
            min_growth: 0,
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroGrowth));
    }

    #[test]
    fn small_buffers_grow_by_min_step() {
        let config = RingConfig::default();
        assert_eq!(config.grown_capacity(0), 4);
        assert_eq!(config.grown_capacity(2), 6);
        assert_eq!(config.grown_capacity(4), 8);
    }

    #[test]
    fn large_buffers_double() {
        let config = RingConfig::default();
        assert_eq!(config.grown_capacity(100), 200);
        assert_eq!(config.grown_capacity(usize::MAX), usize::MAX);
    }
}
