//! Utilitários Internos (KLib).

#[cfg(feature = "self_test")]
pub mod test_framework;
