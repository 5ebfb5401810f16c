use crate::sampler::ShouldSample;

/// Samples every Nth trace id.
///
/// Over any id range `[0, k * modulus)` exactly `k` ids are kept, which
/// suits pre-bucketed or monotonically assigned identifiers; high-entropy
/// trace ids are better served by [`BoundarySampler`].
///
/// [`BoundarySampler`]: crate::BoundarySampler
#[derive(Clone, Debug)]
pub struct ModuloSampler {
    modulus: u64,
}

impl ModuloSampler {
    /// Creates a sampler keeping every `modulus`th trace id.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero; the decision would divide by zero.
    pub fn new(modulus: u64) -> ModuloSampler {
        assert!(modulus >= 1, "modulus must be at least 1");
        ModuloSampler { modulus }
    }

    /// The configured modulus.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }
}

impl ShouldSample for ModuloSampler {
    fn should_sample(&self, trace_id: u64) -> bool {
        trace_id % self.modulus == 0
    }
}
