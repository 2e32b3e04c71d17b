//! Vgacon — Driver de Console de Texto VGA.
//!
//! Ponto central de exportação dos módulos do driver.
//! O kernel hospedeiro consome este crate através do framework de
//! detecção (`drivers::base::detect`) e da capability de console
//! (`drivers::video::TextConsole`).

#![no_std]

// Habilitar alocação dinâmica (necessário para Box<dyn ConsoleDriver>)
extern crate alloc;

// --- Módulos de Baixo Nível (Hardware) ---
pub mod arch; // HAL (I/O Ports)
pub mod drivers; // Drivers Específicos (Serial, Video) + Framework Base

// --- Módulos Centrais ---
pub mod core; // Handoff (descritor de vídeo), Logging
pub mod klib; // Utilitários Internos (Test Framework)

// Re-exportar a superfície principal para acesso fácil no kernel
pub use crate::core::handoff::{VideoInfo, VideoKind};
pub use crate::drivers::base::detect::{detect, probes, with_active_console, ConsoleDriver};
pub use crate::drivers::base::driver::{DeviceType, Driver, DriverError};
pub use crate::drivers::video::{ScrollDir, TextConsole, VgaTextConsole};
