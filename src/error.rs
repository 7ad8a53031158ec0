//! Construction-time validation errors.
//!
//! The sorting routines themselves never fail. The only value a caller can
//! get wrong at runtime is the insertion-sort crossover, which is checked
//! when a [`Threshold`](crate::core::Threshold) is built.

/// Errors raised while building sort configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The insertion-sort crossover must be at least 1.
    #[error("partition threshold must be at least 1")]
    ZeroThreshold,
}
