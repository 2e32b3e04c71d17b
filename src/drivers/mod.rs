//! # Driver Layer
//!
//! O módulo `drivers` contém o framework base de drivers e os drivers
//! concretos deste crate.
//!
//! ## Drivers Implementados
//!
//! | Driver   | Arquivo      | Status |
//! |----------|--------------|--------|
//! | Serial   | `serial.rs`  | Minimal - sink de logging de diagnóstico |
//! | Video    | `video/`     | Console de texto VGA (EGA 80x25) |
//!
//! ## Arquitetura
//!
//! O framework de detecção (`base::detect`) consulta a lista de probes;
//! o primeiro probe que reconhece o descritor de hardware publicado em
//! `core::handoff` constrói o driver e o instala como console ativo.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │      Kernel (kfmt, panic handler)           │
//! │  - write/fill/scroll via TextConsole        │
//! └─────────────────────────────────────────────┘
//!                      ↑
//!            with_active_console()
//!                      ↑
//! ┌─────────────────────────────────────────────┐
//! │      Framework de Detecção (base)           │
//! │  - probes() → probe_vga_text()              │
//! └─────────────────────────────────────────────┘
//! ```

pub mod base; // Framework: trait Driver, registro de probes
pub mod serial; // UART 16550 - Logs de diagnóstico
pub mod video; // Console de texto VGA


#[cfg(test)]
mod tests;
