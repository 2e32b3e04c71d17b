//! # Hardware Abstraction Layer (HAL)
//!
//! O módulo `arch` é a única ponte entre o driver (lógica agnóstica) e o
//! hardware real. Toda instrução privilegiada (I/O ports) vive aqui.
//!
//! ## Propósito
//! - **Isolamento:** O resto do crate não sabe em qual CPU está rodando.
//! - **Seleção de Plataforma:** `cfg` attributes compilam apenas o código da
//!   arquitetura alvo.

// Seleção de Arquitetura: x86_64
#[cfg(target_arch = "x86_64")]
pub mod x86_64;

#[cfg(target_arch = "x86_64")]
pub use x86_64 as platform;
