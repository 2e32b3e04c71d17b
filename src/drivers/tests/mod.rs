//! Testes para a camada de drivers
//!
//! Testes unitários de host para o console de texto VGA e o framework
//! de detecção. O hardware é substituído nas costuras previstas: frame
//! buffer apontando para um `Vec<u16>` e escrita de porta gravada em log.
//!
//! # Como Executar os Testes
//!
//! ```bash
//! # Executar todos os testes de drivers
//! cargo test --lib drivers::tests
//!
//! # Executar testes de um módulo específico
//! cargo test --lib drivers::tests::vga_text
//! cargo test --lib drivers::tests::detect
//! ```
//!
//! # Estrutura dos Testes
//!
//! - `cell.rs` - Testes do codec de células
//! - `vga_text.rs` - Testes do console (write, fill, scroll, paleta)
//! - `detect.rs` - Testes do probe e do framework de detecção
//!
//! # Convenções
//!
//! - Prefixo `test_` para testes unitários
//! - Testes que tocam estado global (handoff, console ativo) ficam num
//!   único `#[test]` para não disputar com o harness paralelo

mod vga_text;
