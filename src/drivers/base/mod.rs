//! Modelo de Drivers Base
//!
//! Contrato genérico de ciclo de vida (`driver`) e o framework de
//! detecção de hardware com registro de probes (`detect`).

pub mod detect;
pub mod driver;

pub use detect::{ConsoleDriver, ConsoleProbeFn};
pub use driver::DeviceType;
pub use driver::Driver;
pub use driver::DriverError;
