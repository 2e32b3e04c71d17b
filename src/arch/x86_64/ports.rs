/// Arquivo: x86_64/ports.rs
///
/// Propósito: Abstração para instruções de entrada/saída (I/O Ports) legadas do x86.
/// Leitura e escrita em portas de I/O (inb, outb), essenciais para programar o
/// DAC do VGA e a UART serial de diagnóstico.
///
/// Detalhes de Implementação:
/// - Usa `core::arch::asm!` para emitir instruções `in` e `out`.
/// - Todas as funções são marcadas como `#[inline]` para evitar overhead.

// IO Ports (legado x86)

/// Assinatura da capability de escrita em porta.
///
/// O controlador de paleta nunca executa a instrução física diretamente:
/// recebe esta função injetada na construção, com `outb` como default de
/// hardware. Isso permite substituição completa em testes.
pub type PortWriteFn = fn(u16, u8);

/// Lê um byte de uma porta IO
#[inline]
pub fn inb(port: u16) -> u8 {
    let value: u8;
    // SAFETY: IO ports são operações privilegiadas mas seguras do ponto de vista de memória
    unsafe {
        core::arch::asm!(
            "in al, dx",
            in("dx") port,
            out("al") value,
            options(nomem, nostack)
        );
    }
    value
}

/// Escreve um byte em uma porta IO
#[inline]
pub fn outb(port: u16, value: u8) {
    // SAFETY: IO ports são operações privilegiadas mas seguras do ponto de vista de memória
    unsafe {
        core::arch::asm!(
            "out dx, al",
            in("dx") port,
            in("al") value,
            options(nomem, nostack)
        );
    }
}
