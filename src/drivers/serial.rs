// =============================================================================
// SERIAL DRIVER - ZERO OVERHEAD
// =============================================================================
//
// Driver de Porta Serial (COM1) para logging de diagnóstico.
//
// ARQUITETURA:
// Este driver foi projetado para ser 100% livre de efeitos colaterais:
// - SEM Mutex/Spinlock - Escrita direta via I/O ports
// - SEM core::fmt - Evita geração de código SSE/AVX
// - SEM alocação - Apenas strings literais e valores imediatos
//
// FUNÇÕES DISPONÍVEIS:
// - emit(byte)       : Envia um byte
// - emit_str(s)      : Envia string
// - emit_hex(v)      : Envia u64 em hexadecimal
// - emit_nl()        : Envia newline (\r\n)
//
// NOTA IMPORTANTE:
// Este driver NÃO garante exclusão mútua entre CPUs. Em ambiente SMP,
// os logs podem se intercalar. Isso é aceitável para debugging.
//
// Em builds de teste (host), `emit` vira no-op: processo em ring 3 não
// tem acesso a portas de I/O.
//
// =============================================================================

#[cfg(not(test))]
use crate::arch::platform::ports::{inb, outb};

// Porta de dados da COM1
#[cfg(not(test))]
const COM1_DATA: u16 = 0x3F8;

// Porta de status da COM1 (Line Status Register)
#[cfg(not(test))]
const COM1_STATUS: u16 = 0x3FD;

// =============================================================================
// INICIALIZAÇÃO
// =============================================================================

/// Inicializa a porta serial COM1 (UART 16550).
///
/// Deve ser chamada uma vez durante o early-boot.
/// Configura: 38400 baud, 8N1, FIFO habilitado.
#[cfg(not(test))]
pub fn init() {
    // Disable interrupts
    outb(COM1_DATA + 1, 0x00);

    // Enable DLAB (set baud rate divisor)
    outb(COM1_DATA + 3, 0x80);

    // Set divisor to 3 (lo byte) = 38400 baud
    outb(COM1_DATA, 0x03);

    // (hi byte)
    outb(COM1_DATA + 1, 0x00);

    // 8 bits, no parity, one stop bit
    outb(COM1_DATA + 3, 0x03);

    // Enable FIFO, clear them, with 14-byte threshold
    outb(COM1_DATA + 2, 0xC7);

    // IRQs enabled, RTS/DSR set
    outb(COM1_DATA + 4, 0x0B);
}

#[cfg(test)]
pub fn init() {}

// =============================================================================
// FUNÇÕES DE ESCRITA - CORE
// =============================================================================

/// Envia um único byte para a porta serial.
///
/// Esta é a função mais baixo nível. Todas as outras funções
/// de escrita usam esta internamente.
///
/// Espera pelo buffer de transmissão estar livre (busy wait no bit 5 do LSR).
#[cfg(not(test))]
#[inline(always)]
pub fn emit(byte: u8) {
    while inb(COM1_STATUS) & 0x20 == 0 {
        core::hint::spin_loop();
    }
    outb(COM1_DATA, byte);
}

#[cfg(test)]
#[inline(always)]
pub fn emit(_byte: u8) {}

/// Envia uma string para a porta serial.
#[inline(never)]
pub fn emit_str(s: &str) {
    for &byte in s.as_bytes() {
        emit(byte);
    }
}

/// Envia uma nova linha (CRLF) para a porta serial.
#[inline(never)]
pub fn emit_nl() {
    emit(b'\r');
    emit(b'\n');
}

// =============================================================================
// FUNÇÕES DE ESCRITA - FORMATAÇÃO NUMÉRICA
// =============================================================================

/// Envia um valor u64 em formato hexadecimal.
///
/// Formato de saída: 0x0123456789ABCDEF (sempre 18 caracteres)
#[inline(never)]
pub fn emit_hex(value: u64) {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

    emit(b'0');
    emit(b'x');

    let mut shift = 60;
    loop {
        emit(DIGITS[((value >> shift) & 0xF) as usize]);
        if shift == 0 {
            break;
        }
        shift -= 4;
    }
}
