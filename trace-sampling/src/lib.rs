//! # Trace Sampling
//!
//! Deterministic sampling strategies for distributed tracing. The tracer
//! that owns span lifecycle asks one of these samplers whether a trace,
//! identified by the low 64 bits of its trace id, should be recorded; the
//! answer gates whether any span of that trace is exported.
//!
//! Three strategies are provided behind the [`ShouldSample`] contract:
//!
//! * [`BoundarySampler`] compares the salted trace id against a threshold
//!   derived from the sampling rate, decorrelated across services that share
//!   a rate.
//! * [`CountingSampler`] keeps an exact number of traces out of every 100
//!   consecutive decisions.
//! * [`ModuloSampler`] keeps every Nth trace id.
//!
//! All fallibility lives in construction; a built sampler always answers
//! with a boolean and never blocks.
//!
//! ```
//! use trace_sampling::{BoundarySampler, ShouldSample};
//!
//! # fn main() -> Result<(), trace_sampling::SamplerError> {
//! let sampler = BoundarySampler::new(0.01, 23)?;
//! if sampler.should_sample(0x028f_5c28_f5c2_8f5f) {
//!     // record the trace
//! }
//! # Ok(())
//! # }
//! ```
#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]
#![cfg_attr(docsrs, feature(doc_cfg), deny(rustdoc::broken_intra_doc_links))]
#![cfg_attr(test, deny(warnings))]

mod error;
mod sampler;

pub use error::{SamplerError, SamplerResult};
pub use sampler::{BoundarySampler, CountingSampler, ModuloSampler, Sampler, ShouldSample};
