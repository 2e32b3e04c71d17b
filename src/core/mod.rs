//! Core Module
//!
//! Contém a lógica central do driver, independente de arquitetura:
//! o contrato de handoff com a camada de plataforma e o sistema de logging.

pub mod handoff;
pub mod logging;
