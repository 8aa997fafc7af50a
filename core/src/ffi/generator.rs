//! PyO3 wrapper for Generator
//!
//! This module provides the Python interface to the Rust generator.

use pyo3::prelude::*;

use crate::config::GeneratorConfig;
use crate::rng::Generator as RustGenerator;

/// Python wrapper for Rust Generator
///
/// # Example (from Python)
///
/// ```python
/// from randgen_core import Generator
///
/// rng = Generator(seed=42)
/// roll = rng.rand_int(1, 6)
/// replay = rng.copy()
/// assert replay.raw_draw() == rng.raw_draw()
/// ```
#[pyclass(name = "Generator")]
pub struct PyGenerator {
    inner: RustGenerator,
}

#[pymethods]
impl PyGenerator {
    /// Create a generator
    ///
    /// Without `seed` the generator is seeded from OS entropy and
    /// `discard_time` is ignored.
    #[new]
    #[pyo3(signature = (seed=None, discard_time=0))]
    fn new(seed: Option<u64>, discard_time: u64) -> Self {
        let config = GeneratorConfig { seed, discard_time };
        PyGenerator {
            inner: config.build(),
        }
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.inner.seed()
    }

    #[getter]
    fn generation_time(&self) -> u64 {
        self.inner.generation_time()
    }

    fn raw_draw(&mut self) -> u64 {
        self.inner.raw_draw()
    }

    /// Signed 64-bit draw between the bounds
    #[pyo3(signature = (min_value, max_value, include_max_value=true))]
    fn rand_int(&mut self, min_value: i64, max_value: i64, include_max_value: bool) -> i64 {
        self.inner.ranged_draw(min_value, max_value, include_max_value)
    }

    /// Unsigned 64-bit draw between the bounds
    #[pyo3(signature = (min_value, max_value, include_max_value=true))]
    fn rand_uint(&mut self, min_value: u64, max_value: u64, include_max_value: bool) -> u64 {
        self.inner.ranged_draw(min_value, max_value, include_max_value)
    }

    /// Double-precision draw between the bounds
    #[pyo3(signature = (min_value, max_value, include_max_value=true))]
    fn rand_float(&mut self, min_value: f64, max_value: f64, include_max_value: bool) -> f64 {
        self.inner.ranged_draw(min_value, max_value, include_max_value)
    }

    /// Independent generator that continues this one's stream
    fn copy(&self) -> Self {
        PyGenerator {
            inner: self.inner.clone(),
        }
    }
}
