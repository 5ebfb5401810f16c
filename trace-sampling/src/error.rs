use thiserror::Error;

/// A specialized `Result` type for sampler construction.
pub type SamplerResult<T> = Result<T, SamplerError>;

/// Errors returned when building a sampler from configuration.
///
/// Construction is the only fallible surface; once built, a sampler's
/// decision operation always returns a boolean.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SamplerError {
    /// The sampling rate lies outside the strategy's accepted domain.
    ///
    /// The message text is stable, including the six-decimal formatting of
    /// the rejected rate; callers match on it.
    #[error("rate should be 0.0 or between {min_rate} and 1: was {rate:.6}")]
    InvalidRate {
        /// Smallest accepted non-zero rate for the strategy.
        min_rate: &'static str,
        /// The rejected value.
        rate: f64,
    },
}
