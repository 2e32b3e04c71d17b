//! # Video Driver - Console de Texto
//!
//! Console de texto sobre frame buffer de células (modo EGA/VGA):
//! codec de células (`cell`) e o driver concreto (`vga_text`).

pub mod cell;
pub mod vga_text;

pub use cell::Rgb;
pub use vga_text::VgaTextConsole;

/// Direção de rolagem do conteúdo do console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDir {
    /// Conteúdo sobe; linhas vagas aparecem embaixo.
    Up,
    /// Conteúdo desce; linhas vagas aparecem em cima.
    Down,
}

/// Operações de console expostas às camadas superiores do kernel
/// (saída formatada, panic handler).
///
/// Contrato de tolerância total: coordenada, cor ou índice fora de faixa
/// degrada para no-op ou substituição por default — nunca erro, nunca
/// panic. O console é o canal de diagnóstico de última instância.
pub trait TextConsole: Send {
    /// Dimensões da grade em células (largura, altura).
    fn dimensions(&self) -> (u16, u16);

    /// Cores default (foreground, background), usadas na substituição
    /// de componentes de cor inválidos.
    fn default_colors(&self) -> (u8, u8);

    /// Escreve um caractere na posição `(x, y)`, coordenadas 1-based:
    /// a primeira célula visível é `(1, 1)`. Fora de
    /// `[1,width]×[1,height]` é no-op completo.
    fn write(&mut self, ch: u8, fg: u8, bg: u8, x: u16, y: u16);

    /// Preenche com espaços o retângulo `(x, y, w, h)`, coordenadas
    /// 0-based absolutas, recortado contra a grade (ver `vga_text`).
    fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, fg: u8, bg: u8);

    /// Rola o conteúdo `rows` linhas na direção dada; linhas vagas são
    /// limpas com a célula de limpeza.
    fn scroll(&mut self, dir: ScrollDir, rows: u16);

    /// Reprograma a cor `index` (0-15) da paleta do DAC. Índice fora de
    /// faixa é no-op sem nenhum acesso a hardware.
    fn set_palette_color(&mut self, index: u8, color: Rgb);

    /// Espelho em software da paleta de 16 cores.
    fn palette(&self) -> &[Rgb; 16];
}
