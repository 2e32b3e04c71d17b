//! Implementação x86_64 da HAL.

pub mod ports;
