//! Codec de células de texto VGA.
//!
//! Uma célula de 16 bits empacota um caractere e um atributo de cor no
//! layout que o hardware de texto EGA/VGA renderiza diretamente:
//!
//! ```text
//! 15           12 11            8 7                      0
//! ┌──────────────┬───────────────┬────────────────────────┐
//! │  background  │  foreground   │   código do caractere  │
//! └──────────────┴───────────────┴────────────────────────┘
//! ```

/// Maior índice de cor válido (4 bits).
pub const COLOR_MAX: u8 = 15;

/// Foreground default: cinza claro.
pub const DEFAULT_FG: u8 = 7;

/// Background default: preto.
pub const DEFAULT_BG: u8 = 0;

/// Cor RGB com 8 bits por canal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Paleta EGA canônica de 16 cores — o estado de power-on do DAC.
/// O espelho em software do console parte daqui.
pub const DEFAULT_PALETTE: [Rgb; 16] = [
    Rgb::new(0x00, 0x00, 0x00), // 0: preto
    Rgb::new(0x00, 0x00, 0xAA), // 1: azul
    Rgb::new(0x00, 0xAA, 0x00), // 2: verde
    Rgb::new(0x00, 0xAA, 0xAA), // 3: ciano
    Rgb::new(0xAA, 0x00, 0x00), // 4: vermelho
    Rgb::new(0xAA, 0x00, 0xAA), // 5: magenta
    Rgb::new(0xAA, 0x55, 0x00), // 6: marrom
    Rgb::new(0xAA, 0xAA, 0xAA), // 7: cinza claro
    Rgb::new(0x55, 0x55, 0x55), // 8: cinza escuro
    Rgb::new(0x55, 0x55, 0xFF), // 9: azul claro
    Rgb::new(0x55, 0xFF, 0x55), // 10: verde claro
    Rgb::new(0x55, 0xFF, 0xFF), // 11: ciano claro
    Rgb::new(0xFF, 0x55, 0x55), // 12: vermelho claro
    Rgb::new(0xFF, 0x55, 0xFF), // 13: rosa
    Rgb::new(0xFF, 0xFF, 0x55), // 14: amarelo
    Rgb::new(0xFF, 0xFF, 0xFF), // 15: branco
];

/// Codifica caractere + cores em uma célula de 16 bits.
///
/// Validação por componente: `fg` e `bg` fora de `[0, 15]` são
/// substituídos pelos defaults fornecidos, independentemente um do
/// outro — um componente inválido não afeta o outro.
pub fn encode(ch: u8, mut fg: u8, mut bg: u8, default_fg: u8, default_bg: u8) -> u16 {
    if fg > COLOR_MAX {
        fg = default_fg;
    }
    if bg > COLOR_MAX {
        bg = default_bg;
    }

    let attr = ((bg as u16) << 4) | (fg as u16);
    (attr << 8) | (ch as u16)
}

/// Quantiza um canal de cor de 8 bits (0-255) para a faixa de 6 bits
/// do DAC (0-63): `floor(c * 63 / 255)`.
pub fn dac_quantize(component: u8) -> u8 {
    ((component as u16 * 63) / 255) as u8
}
