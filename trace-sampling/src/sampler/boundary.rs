use std::fmt;

use crate::error::{SamplerError, SamplerResult};
use crate::sampler::ShouldSample;

/// Smallest non-zero rate the boundary comparison can resolve.
const MIN_RATE: f64 = 0.0001;

/// Samples by comparing a deterministic function of `(trace_id, salt)`
/// against a threshold derived from the sampling rate.
///
/// The salted id is compared over the full unsigned 64-bit range, so for
/// uniformly distributed trace ids the sampled fraction converges to the
/// configured rate, while any given `(trace_id, salt, rate)` triple always
/// produces the same decision. Two instances sharing a rate but configured
/// with different salts keep decorrelated subsets of the same id space,
/// which stops every service in a deployment from recording the same traces.
#[derive(Clone)]
pub struct BoundarySampler {
    rate: f64,
    salt: u64,
    boundary: u64,
}

impl fmt::Debug for BoundarySampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundarySampler")
            .field("rate", &self.rate)
            .field("salt", &(self.salt as i64))
            .finish()
    }
}

impl BoundarySampler {
    /// Creates a sampler keeping `rate` of all traces.
    ///
    /// `rate` must be exactly `0.0` or lie within `[0.0001, 1.0]`; any other
    /// value is rejected with [`SamplerError::InvalidRate`]. The salt may be
    /// any value and only shifts which ids fall below the threshold.
    pub fn new(rate: f64, salt: i64) -> SamplerResult<BoundarySampler> {
        if rate != 0.0 && !(MIN_RATE..=1.0).contains(&rate) {
            return Err(SamplerError::InvalidRate {
                min_rate: "0.0001",
                rate,
            });
        }

        // `u64::MAX as f64` rounds up to exactly 2^64, so the product is the
        // ideal threshold before truncation. The cast saturates at rate 1.0
        // instead of wrapping; the decision fast-paths both extremes.
        let boundary = (rate * u64::MAX as f64) as u64;

        #[cfg(feature = "internal-logs")]
        tracing::debug!(name: "BoundarySampler.Created", target: env!("CARGO_PKG_NAME"), rate, salt);

        Ok(BoundarySampler {
            rate,
            salt: salt as u64,
            boundary,
        })
    }

    /// The configured sampling rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// The configured salt.
    pub fn salt(&self) -> i64 {
        self.salt as i64
    }
}

impl ShouldSample for BoundarySampler {
    fn should_sample(&self, trace_id: u64) -> bool {
        if self.rate == 0.0 {
            return false;
        }
        if self.rate >= 1.0 {
            return true;
        }
        trace_id.wrapping_add(self.salt) < self.boundary
    }
}
