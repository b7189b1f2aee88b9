//! PyO3 wrappers for the ISAAC engines
//!
//! # Example (from Python)
//!
//! ```python
//! from isaac_engine_core_rs import Isaac64
//!
//! rng = Isaac64(12345)
//! first = rng.next()
//! saved = rng.serialize()
//!
//! rng.discard(1000)
//! rng.restore(saved)
//! ```

use pyo3::prelude::*;

use super::types::isaac_error_to_py;
use crate::checkpoint::compute_state_hash;
use crate::isaac::Isaac;

macro_rules! py_engine {
    ($py_ty:ident, $py_name:literal, $word:ty) => {
        #[pyclass(name = $py_name)]
        #[derive(Clone)]
        pub struct $py_ty {
            inner: Isaac<$word, 8>,
        }

        #[pymethods]
        impl $py_ty {
            /// Create an engine from a scalar seed (default 0)
            #[new]
            #[pyo3(signature = (seed = 0))]
            fn new(seed: $word) -> Self {
                Self {
                    inner: Isaac::new(seed),
                }
            }

            /// Create an engine from a list of seed words (cycled to 256)
            ///
            /// Raises ValueError if the list is empty.
            #[staticmethod]
            fn from_words(words: Vec<$word>) -> PyResult<Self> {
                let inner = Isaac::from_words(words).map_err(isaac_error_to_py)?;
                Ok(Self { inner })
            }

            /// Rebuild an engine from a JSON snapshot
            #[staticmethod]
            fn from_json(json: &str) -> PyResult<Self> {
                let inner = Isaac::from_json(json).map_err(isaac_error_to_py)?;
                Ok(Self { inner })
            }

            /// Re-seed in place from a scalar
            fn seed(&mut self, seed: $word) {
                self.inner.seed(seed);
            }

            /// Next output word
            fn next(&mut self) -> $word {
                self.inner.next_word()
            }

            /// Next `count` output words
            fn take(&mut self, count: usize) -> Vec<$word> {
                self.inner.words().take(count).collect()
            }

            /// Advance by `count` words
            fn discard(&mut self, count: u64) {
                self.inner.discard(count);
            }

            /// Textual state
            fn serialize(&self) -> String {
                self.inner.to_string()
            }

            /// Restore textual state; raises ValueError and leaves the engine
            /// unchanged if the text is malformed
            fn restore(&mut self, text: &str) -> PyResult<()> {
                self.inner.restore(text).map_err(isaac_error_to_py)
            }

            /// JSON snapshot
            fn to_json(&self) -> PyResult<String> {
                self.inner.to_json().map_err(isaac_error_to_py)
            }

            /// SHA-256 of the textual state
            fn state_hash(&self) -> String {
                compute_state_hash(&self.inner)
            }

            #[getter]
            fn cursor(&self) -> usize {
                self.inner.cursor()
            }

            #[staticmethod]
            fn min() -> $word {
                Isaac::<$word, 8>::min()
            }

            #[staticmethod]
            fn max() -> $word {
                Isaac::<$word, 8>::max()
            }

            fn __eq__(&self, other: &Self) -> bool {
                self.inner == other.inner
            }

            fn __repr__(&self) -> String {
                format!(
                    "{}(cursor={}, counter={})",
                    $py_name,
                    self.inner.cursor(),
                    self.inner.counter()
                )
            }
        }
    };
}

py_engine!(PyIsaac32, "Isaac32", u32);
py_engine!(PyIsaac64, "Isaac64", u64);
