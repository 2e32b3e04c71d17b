//! Framework de testes do kernel
//!
//! Testes executáveis de dentro do kernel (QEMU/hardware), com resultado
//! reportado pela serial. Complementa os testes unitários de host
//! (`cargo test`), que não podem exercitar I/O real.

/// Resultado de teste
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TestResult {
    Passed,
    Failed,
    Skipped,
}

/// Um caso de teste
pub struct TestCase {
    pub name: &'static str,
    pub func: fn() -> TestResult,
}

impl TestCase {
    pub const fn new(name: &'static str, func: fn() -> TestResult) -> Self {
        Self { name, func }
    }
}

/// Executa suite de testes, retornando (passed, failed, skipped).
pub fn run_test_suite(name: &str, tests: &[TestCase]) -> (usize, usize, usize) {
    crate::kinfo!("=== Executando suite ===");
    crate::kinfo!(name);

    let mut passed = 0;
    let mut failed = 0;
    let mut skipped = 0;

    for test in tests {
        match (test.func)() {
            TestResult::Passed => {
                crate::kinfo!(test.name);
                passed += 1;
            }
            TestResult::Failed => {
                crate::kerror!(test.name);
                failed += 1;
            }
            TestResult::Skipped => {
                crate::kwarn!(test.name);
                skipped += 1;
            }
        }
    }

    crate::kinfo!("Resultados: passed=", passed as u64);
    (passed, failed, skipped)
}
