use crate::error::SamplerResult;

mod boundary;
mod counting;
mod modulo;

pub use boundary::BoundarySampler;
pub use counting::CountingSampler;
pub use modulo::ModuloSampler;

/// The [`ShouldSample`] interface allows implementations to provide samplers
/// which will return a sampling decision based on the trace id available
/// just before a root span is created.
///
/// Sampling is a mechanism to control the noise and overhead introduced by
/// tracing, by reducing the number of traces recorded and exported. The
/// decision is made once per trace, at creation, from the low 64 bits of the
/// trace id; every span of a sampled trace is then recorded.
///
/// Implementations must be cheap enough to sit on the trace-creation path:
/// no blocking, no I/O, an answer on every call.
pub trait ShouldSample: CloneShouldSample + Send + Sync + std::fmt::Debug {
    /// Returns `true` if the trace identified by `trace_id` should be
    /// recorded.
    ///
    /// Never fails; all configuration problems surface when the sampler is
    /// constructed.
    fn should_sample(&self, trace_id: u64) -> bool;
}

/// This trait should not be used directly instead users should use [`ShouldSample`].
pub trait CloneShouldSample {
    /// Clone the sampler into a new boxed trait object.
    fn box_clone(&self) -> Box<dyn ShouldSample>;
}

impl<T> CloneShouldSample for T
where
    T: ShouldSample + Clone + 'static,
{
    fn box_clone(&self) -> Box<dyn ShouldSample> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn ShouldSample> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

/// Built-in sampling strategies.
///
/// These cover the common cases behind one value type; for more complex
/// scenarios implement [`ShouldSample`] directly.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum Sampler {
    /// Always sample the trace.
    AlwaysOn,
    /// Never sample the trace.
    AlwaysOff,
    /// Sample by comparing the salted trace id against a rate-derived
    /// threshold. See [`BoundarySampler`].
    Boundary(BoundarySampler),
    /// Sample an exact share of every 100 consecutive decisions. See
    /// [`CountingSampler`].
    Counting(CountingSampler),
    /// Sample every Nth trace id. See [`ModuloSampler`].
    Modulo(ModuloSampler),
}

impl Sampler {
    /// Boundary strategy keeping `rate` of all traces, decorrelated from
    /// other instances sharing the rate by `salt`.
    pub fn boundary(rate: f64, salt: i64) -> SamplerResult<Sampler> {
        BoundarySampler::new(rate, salt).map(Sampler::Boundary)
    }

    /// Counting strategy keeping exactly `round(rate * 100)` of every 100
    /// consecutive decisions.
    pub fn counting(rate: f64) -> SamplerResult<Sampler> {
        CountingSampler::new(rate).map(Sampler::Counting)
    }

    /// Modulo strategy keeping every `modulus`th trace id.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero.
    pub fn modulo(modulus: u64) -> Sampler {
        Sampler::Modulo(ModuloSampler::new(modulus))
    }
}

impl ShouldSample for Sampler {
    fn should_sample(&self, trace_id: u64) -> bool {
        match self {
            Sampler::AlwaysOn => true,
            Sampler::AlwaysOff => false,
            Sampler::Boundary(sampler) => sampler.should_sample(trace_id),
            Sampler::Counting(sampler) => sampler.should_sample(trace_id),
            Sampler::Modulo(sampler) => sampler.should_sample(trace_id),
        }
    }
}
