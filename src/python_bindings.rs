use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::{BoundedConfig, Error, KarpRabin, Search};

fn to_py_err(err: Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

#[pyclass(name = "KarpRabin")]
struct PyKarpRabin {
    inner: KarpRabin,
}

#[pymethods]
impl PyKarpRabin {
    #[new]
    #[pyo3(signature = (alphabet, modulus = None))]
    fn new(alphabet: &str, modulus: Option<u64>) -> PyResult<Self> {
        let config = modulus
            .map(|modulus| BoundedConfig { modulus })
            .unwrap_or_default();
        let inner = KarpRabin::with_config(&config, alphabet).map_err(to_py_err)?;
        Ok(PyKarpRabin { inner })
    }

    #[getter]
    fn base(&self) -> u64 {
        self.inner.base()
    }

    #[getter]
    fn modulus(&self) -> u64 {
        self.inner.modulus()
    }

    fn find_first(&self, pattern: &str, text: &str) -> PyResult<Option<usize>> {
        self.inner.find_first(pattern, text).map_err(to_py_err)
    }

    fn contains(&self, pattern: &str, text: &str) -> PyResult<bool> {
        self.inner.contains(pattern, text).map_err(to_py_err)
    }

    fn find_all(&self, pattern: &str, text: &str) -> PyResult<Vec<usize>> {
        self.inner.find_all(pattern, text).map_err(to_py_err)
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

#[pymodule]
fn karp_rabin_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyKarpRabin>()?;
    Ok(())
}
