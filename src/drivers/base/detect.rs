//! Detecção de hardware e registro de probes.
//!
//! A lista de probes é construída em tempo de compilação (slice `const`),
//! não como global mutável: o framework consulta cada probe em ordem e o
//! primeiro que reconhecer o hardware publicado no handoff vira o console
//! ativo do sistema.

use alloc::boxed::Box;
use spin::Mutex;

use super::driver::{Driver, DriverError};
use crate::drivers::video::{vga_text, TextConsole};

/// Capability combinada exigida de um driver de console: o ciclo de vida
/// genérico (`Driver`) mais as operações de console (`TextConsole`),
/// implementados por um único tipo concreto.
pub trait ConsoleDriver: Driver + TextConsole {}

impl<T: Driver + TextConsole> ConsoleDriver for T {}

/// Um probe inspeciona o hardware e, se o reconhecer, devolve um driver
/// pronto para uso. Ausência (None) não é erro.
pub type ConsoleProbeFn = fn() -> Option<Box<dyn ConsoleDriver>>;

// Probes conhecidos, em ordem de prioridade.
const PROBES: &[ConsoleProbeFn] = &[vga_text::probe_vga_text];

/// Lista de probes consultada pelo framework de detecção.
pub fn probes() -> &'static [ConsoleProbeFn] {
    PROBES
}

// Console ativo do sistema. A serialização de acesso entre contextos do
// kernel é responsabilidade deste lock, não do driver.
static ACTIVE_CONSOLE: Mutex<Option<Box<dyn ConsoleDriver>>> = Mutex::new(None);

/// Percorre a lista de probes e instala o primeiro console detectado.
///
/// Falha de `init` é propagada como erro tipado: o kernel hospedeiro a
/// trata como fatal (sem console não há saída de diagnóstico).
pub fn detect() -> Result<(), DriverError> {
    for probe in PROBES {
        if let Some(mut console) = probe() {
            console.init()?;

            crate::kinfo!("(Detect) Console instalado:");
            crate::kinfo!(console.name());

            *ACTIVE_CONSOLE.lock() = Some(console);
            return Ok(());
        }
    }

    crate::kwarn!("(Detect) Nenhum console detectado");
    Err(DriverError::NotFound)
}

/// Executa `f` com acesso exclusivo ao console ativo, se houver.
///
/// É por este lock que as camadas superiores (kfmt, panic handler)
/// serializam o acesso ao console.
pub fn with_active_console<R>(f: impl FnOnce(&mut dyn ConsoleDriver) -> R) -> Option<R> {
    let mut slot = ACTIVE_CONSOLE.lock();
    slot.as_mut().map(|console| f(console.as_mut()))
}
