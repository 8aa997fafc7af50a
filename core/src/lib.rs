//! Randgen Core - Reproducible Random Numbers
//!
//! Seeded 64-bit generator with typed range sampling and exact replay.
//!
//! # Architecture
//!
//! - **rng**: The generator and per-type range mapping
//! - **config**: JSON-loadable construction recipe
//! - **ffi**: Python bindings (`pyo3` feature)
//!
//! # Critical Invariants
//!
//! 1. Same seed + same draw count → same future stream
//! 2. `generation_time` counts raw draws only, never the construction discard
//! 3. Every ranged draw consumes exactly one raw draw
//! 4. Not a CSPRNG, not synchronized: one generator (or clone) per thread

// Module declarations
pub mod config;
pub mod rng;

// Re-exports for convenience
pub use config::{ConfigError, GeneratorConfig};
pub use rng::{Generator, RangedSample, ENGINE_MAX};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn randgen_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyGenerator>()?;
    Ok(())
}
