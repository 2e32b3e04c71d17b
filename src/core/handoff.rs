//! Interface de Handoff (Plataforma -> Driver de Vídeo).
//! Define o descritor de hardware de vídeo preenchido pela camada de boot
//! (multiboot/loader) e consumido pelo probe do console.
//!
//! # Industrial Standard
//! - Structs `#[repr(C)]` para garantia de layout.
//! - Tipos primitivos (`u64`, `u32`) para portabilidade.

use spin::Mutex;

/// Descritor do hardware de vídeo entregue pelo bootloader.
/// Deve ser mantido em sincronia binária exata com a tag de framebuffer
/// do protocolo de boot.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct VideoInfo {
    /// Endereço físico do primeiro byte do frame buffer.
    pub addr: u64,

    /// Largura em pixels (modo gráfico) ou caracteres (modo texto).
    pub width: u32,

    /// Altura em pixels ou caracteres.
    pub height: u32,

    /// Bytes por linha.
    pub pitch: u32,

    /// Tipo do dispositivo reportado pelo firmware.
    pub kind: VideoKind,
}

/// Tipo de framebuffer, com os valores da tag multiboot.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoKind {
    /// Gráfico com paleta indexada.
    Indexed = 0,

    /// Gráfico RGB direto.
    Rgb = 1,

    /// Texto EGA/VGA (célula = caractere + atributo).
    EgaText = 2,
}

// Slot global preenchido uma vez pela camada de boot e lido pelos probes.
static VIDEO_INFO: Mutex<Option<VideoInfo>> = Mutex::new(None);

/// Publica o descritor de vídeo recebido do bootloader.
///
/// Chamado pela camada de plataforma antes de `drivers::base::detect::detect`.
pub fn set_video_info(info: VideoInfo) {
    *VIDEO_INFO.lock() = Some(info);
    crate::ktrace!("(Handoff) Video addr=", info.addr);
}

/// Consulta o descritor de vídeo publicado, se houver.
pub fn video_info() -> Option<VideoInfo> {
    *VIDEO_INFO.lock()
}
