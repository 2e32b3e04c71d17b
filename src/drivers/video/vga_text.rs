//! Console de texto VGA (modo EGA, tipicamente 80x25).
//!
//! O frame buffer é uma região MMIO com uma célula de 16 bits por posição
//! da grade (ver `cell`). Este driver é o único mutador dessa região:
//! recebe o endereço na construção e nunca o libera (a memória pertence à
//! região de kernel que a mapeou).
//!
//! Programação da paleta: o DAC é reprogramado pelo protocolo de duas
//! portas (índice em 0x3C8, três escritas de dados em 0x3C9), com cada
//! canal quantizado para 6 bits.

use alloc::boxed::Box;

use super::cell::{self, Rgb, DEFAULT_BG, DEFAULT_FG, DEFAULT_PALETTE};
use super::{ScrollDir, TextConsole};
use crate::arch::platform::ports::{outb, PortWriteFn};
use crate::core::handoff::{self, VideoKind};
use crate::drivers::base::detect::ConsoleDriver;
use crate::drivers::base::driver::{DeviceType, Driver, DriverError, DriverVersion};

/// Porta de índice do DAC.
const DAC_INDEX_PORT: u16 = 0x3C8;

/// Porta de dados do DAC (recebe R, G, B em sequência).
const DAC_DATA_PORT: u16 = 0x3C9;

// ============================================================================
// FRAME BUFFER
// ============================================================================

/// Vista sobre a região MMIO de células do display.
///
/// Única abstração do crate com aritmética de ponteiro: possui o par
/// (endereço base, comprimento) e expõe apenas acesso indexado validado.
/// Índice fora de faixa é no-op na escrita e lê zero.
struct FrameBuffer {
    base: *mut u16,
    len: usize,
}

// SAFETY: o endereço aponta para MMIO de posse exclusiva do console
// (a camada de boot entrega o frame buffer a um único dono de escrita)
unsafe impl Send for FrameBuffer {}

impl FrameBuffer {
    fn new(base: usize, len: usize) -> Self {
        Self {
            base: base as *mut u16,
            len,
        }
    }

    fn write_cell(&mut self, index: usize, value: u16) {
        if index >= self.len {
            return;
        }
        // SAFETY: index validado contra len; escrita volátil para MMIO
        unsafe { core::ptr::write_volatile(self.base.add(index), value) }
    }

    fn read_cell(&self, index: usize) -> u16 {
        if index >= self.len {
            return 0;
        }
        // SAFETY: index validado contra len; leitura volátil de MMIO
        unsafe { core::ptr::read_volatile(self.base.add(index)) }
    }
}

// ============================================================================
// CONSOLE
// ============================================================================

/// Console de texto sobre o frame buffer VGA.
pub struct VgaTextConsole {
    width: u16,
    height: u16,
    fb: FrameBuffer,
    default_fg: u8,
    default_bg: u8,
    clear_cell: u16,
    palette: [Rgb; 16],
    port_write: PortWriteFn,
}

impl VgaTextConsole {
    /// Cria um console com as dimensões dadas, escrevendo células a
    /// partir de `fb_addr` e programando o DAC via `outb`.
    pub fn new(width: u16, height: u16, fb_addr: usize) -> Self {
        Self::with_port_writer(width, height, fb_addr, outb)
    }

    /// Como `new`, mas com a capability de escrita em porta injetada.
    /// É a costura de substituição usada pelos testes.
    pub fn with_port_writer(
        width: u16,
        height: u16,
        fb_addr: usize,
        port_write: PortWriteFn,
    ) -> Self {
        Self {
            width,
            height,
            fb: FrameBuffer::new(fb_addr, width as usize * height as usize),
            default_fg: DEFAULT_FG,
            default_bg: DEFAULT_BG,
            clear_cell: cell::encode(b' ', DEFAULT_FG, DEFAULT_BG, DEFAULT_FG, DEFAULT_BG),
            palette: DEFAULT_PALETTE,
            port_write,
        }
    }

    /// Codifica com os defaults deste console.
    fn encode(&self, ch: u8, fg: u8, bg: u8) -> u16 {
        cell::encode(ch, fg, bg, self.default_fg, self.default_bg)
    }

    fn cell_index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Copia a linha `src_y` sobre a linha `dst_y`, célula a célula.
    fn copy_row(&mut self, src_y: u16, dst_y: u16) {
        for x in 0..self.width {
            let value = self.fb.read_cell(self.cell_index(x, src_y));
            self.fb.write_cell(self.cell_index(x, dst_y), value);
        }
    }

    /// Limpa a linha `y` com a célula de limpeza.
    fn clear_row(&mut self, y: u16) {
        for x in 0..self.width {
            self.fb.write_cell(self.cell_index(x, y), self.clear_cell);
        }
    }
}

impl TextConsole for VgaTextConsole {
    fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn default_colors(&self) -> (u8, u8) {
        (self.default_fg, self.default_bg)
    }

    fn write(&mut self, ch: u8, fg: u8, bg: u8, x: u16, y: u16) {
        // Coordenadas 1-based; fora da grade é no-op completo
        if x < 1 || x > self.width || y < 1 || y > self.height {
            return;
        }

        let value = self.encode(ch, fg, bg);
        let index = self.cell_index(x - 1, y - 1);
        self.fb.write_cell(index, value);
    }

    fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, fg: u8, bg: u8) {
        // Origem fora da grade rejeita o pedido inteiro. A origem nunca é
        // deslocada: apenas largura/altura são recortadas ao vão restante.
        if x >= self.width || y >= self.height {
            return;
        }

        let eff_w = w.min(self.width - x);
        let eff_h = h.min(self.height - y);
        let value = self.encode(b' ', fg, bg);

        for row in y..y + eff_h {
            for col in x..x + eff_w {
                let index = self.cell_index(col, row);
                self.fb.write_cell(index, value);
            }
        }
    }

    fn scroll(&mut self, dir: ScrollDir, rows: u16) {
        if rows == 0 {
            return;
        }

        // Caso degenerado: rolar a grade inteira (ou mais) limpa tudo
        if rows >= self.height {
            for y in 0..self.height {
                self.clear_row(y);
            }
            return;
        }

        match dir {
            ScrollDir::Up => {
                // Linha y recebe a antiga linha y+rows. Iterar de cima
                // para baixo lê cada linha fonte antes de sobrescrevê-la.
                for y in 0..self.height - rows {
                    self.copy_row(y + rows, y);
                }
                for y in self.height - rows..self.height {
                    self.clear_row(y);
                }
            }
            ScrollDir::Down => {
                // Linha y recebe a antiga linha y-rows. Iterar de baixo
                // para cima pela mesma razão de aliasing.
                for y in (rows..self.height).rev() {
                    self.copy_row(y - rows, y);
                }
                for y in 0..rows {
                    self.clear_row(y);
                }
            }
        }
    }

    fn set_palette_color(&mut self, index: u8, color: Rgb) {
        // Índice fora da paleta: no-op sem nenhum acesso a hardware
        if index > cell::COLOR_MAX {
            return;
        }

        // Protocolo do DAC: índice em 0x3C8, depois R, G, B quantizados
        // para 6 bits em 0x3C9, nesta ordem exata
        (self.port_write)(DAC_INDEX_PORT, index);
        (self.port_write)(DAC_DATA_PORT, cell::dac_quantize(color.r));
        (self.port_write)(DAC_DATA_PORT, cell::dac_quantize(color.g));
        (self.port_write)(DAC_DATA_PORT, cell::dac_quantize(color.b));

        // Espelho guarda a cor original (não quantizada)
        self.palette[index as usize] = color;
    }

    fn palette(&self) -> &[Rgb; 16] {
        &self.palette
    }
}

impl Driver for VgaTextConsole {
    fn name(&self) -> &'static str {
        "vga_text"
    }

    fn device_type(&self) -> DeviceType {
        DeviceType::Display
    }

    fn version(&self) -> DriverVersion {
        (0, 1, 0)
    }

    fn init(&mut self) -> Result<(), DriverError> {
        // O firmware já programou o modo texto; o probe já ligou o
        // console ao frame buffer. Nada de hardware a fazer aqui.
        crate::ktrace!("(VGA) init: modo texto pré-programado");
        Ok(())
    }
}

// ============================================================================
// PROBE
// ============================================================================

/// Probe consultado pelo framework de detecção.
///
/// Reconhece apenas descritores de modo texto EGA; qualquer outro tipo
/// (ou ausência de descritor) devolve `None` — ausência, não erro.
pub fn probe_vga_text() -> Option<Box<dyn ConsoleDriver>> {
    let info = handoff::video_info()?;

    if info.kind != VideoKind::EgaText {
        return None;
    }

    crate::kinfo!("(VGA) Console de texto detectado, fb=", info.addr);
    crate::kdebug!("(VGA) Grade:", (info.width as u64) << 32 | info.height as u64);

    Some(Box::new(VgaTextConsole::new(
        info.width as u16,
        info.height as u16,
        info.addr as usize,
    )))
}
