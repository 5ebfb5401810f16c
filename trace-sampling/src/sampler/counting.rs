use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::{SamplerError, SamplerResult};
use crate::sampler::ShouldSample;

/// Length of the decision cycle.
const CYCLE: usize = 100;

/// Smallest non-zero rate expressible in a 100-slot cycle.
const MIN_RATE: f64 = 0.01;

/// Samples an exact share of every 100 consecutive decisions.
///
/// A 100-slot decision table is computed up front with `round(rate * 100)`
/// positive slots spread evenly across the cycle, and a shared position is
/// advanced atomically on every call; the trace id plays no part in the
/// decision. Every window of 100 consecutive calls, wherever it starts,
/// contains exactly the configured share of positives, a stronger guarantee
/// than statistical convergence.
///
/// Clones share the position counter, so a sampler handed to several workers
/// keeps the per-window guarantee across all of them.
#[derive(Clone)]
pub struct CountingSampler {
    rate: f64,
    decisions: [bool; CYCLE],
    position: Arc<AtomicUsize>,
}

impl fmt::Debug for CountingSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountingSampler")
            .field("rate", &self.rate)
            .finish()
    }
}

impl CountingSampler {
    /// Creates a sampler keeping exactly `round(rate * 100)` of every 100
    /// consecutive decisions.
    ///
    /// `rate` must be exactly `0.0` or lie within `[0.01, 1.0]`; any other
    /// value is rejected with [`SamplerError::InvalidRate`].
    pub fn new(rate: f64) -> SamplerResult<CountingSampler> {
        if rate != 0.0 && !(MIN_RATE..=1.0).contains(&rate) {
            return Err(SamplerError::InvalidRate {
                min_rate: "0.01",
                rate,
            });
        }

        let hits = (rate * CYCLE as f64).round() as usize;

        // Slot i fires when the running quota (i + 1) * hits / CYCLE crosses
        // an integer, spreading the positives evenly over the cycle instead
        // of clustering them at the start.
        let mut decisions = [false; CYCLE];
        let mut quota = 0;
        for (i, decision) in decisions.iter_mut().enumerate() {
            let next = (i + 1) * hits / CYCLE;
            *decision = next > quota;
            quota = next;
        }

        #[cfg(feature = "internal-logs")]
        tracing::debug!(name: "CountingSampler.Created", target: env!("CARGO_PKG_NAME"), rate, hits);

        Ok(CountingSampler {
            rate,
            decisions,
            position: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// The configured sampling rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl ShouldSample for CountingSampler {
    fn should_sample(&self, _trace_id: u64) -> bool {
        // fetch_add hands every caller a distinct slot; the sequence only
        // drifts off the cycle if the counter wraps after 2^64 calls.
        let position = self.position.fetch_add(1, Ordering::Relaxed);
        self.decisions[position % CYCLE]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_an_exact_count_per_cycle() {
        for n in 0..=100usize {
            let rate = n as f64 / 100.0;
            let sampler = CountingSampler::new(rate).unwrap();

            let sampled = (0..1000).filter(|_| sampler.should_sample(1)).count();
            assert_eq!(n * 10, sampled, "rate {rate}");
        }
    }

    #[test]
    fn rejects_rates_outside_domain() {
        for rate in [0.009, 1.001] {
            let err = CountingSampler::new(rate).unwrap_err();
            assert_eq!(
                format!("rate should be 0.0 or between 0.01 and 1: was {rate:.6}"),
                err.to_string()
            );
        }
    }

    #[test]
    fn every_window_of_100_is_exact() {
        let sampler = CountingSampler::new(0.37).unwrap();

        // Start counting from the middle of a cycle.
        for _ in 0..41 {
            sampler.should_sample(1);
        }

        for window in 0..5 {
            let sampled = (0..100).filter(|_| sampler.should_sample(1)).count();
            assert_eq!(37, sampled, "window {window}");
        }
    }

    #[test]
    fn decision_ignores_the_trace_id() {
        let by_sequence = CountingSampler::new(0.25).unwrap();
        let by_sequence_too = CountingSampler::new(0.25).unwrap();

        for trace_id in (0..200u64).map(|i| i.wrapping_mul(0x9e37_79b9_7f4a_7c15)) {
            assert_eq!(
                by_sequence.should_sample(trace_id),
                by_sequence_too.should_sample(trace_id ^ u64::MAX)
            );
        }
    }

    #[test]
    fn concurrent_callers_keep_the_quota() {
        let sampler = CountingSampler::new(0.5).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let sampler = sampler.clone();
                std::thread::spawn(move || (0..250).filter(|_| sampler.should_sample(7)).count())
            })
            .collect();

        let sampled: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        // 1000 calls across all threads are 10 full cycles.
        assert_eq!(500, sampled);
    }
}
