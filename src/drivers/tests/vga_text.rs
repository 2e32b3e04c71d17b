//! Testes para o console de texto VGA

use alloc::vec;
use alloc::vec::Vec;
use spin::Mutex;

use crate::drivers::video::cell::{encode, Rgb, DEFAULT_BG, DEFAULT_FG};
use crate::drivers::video::{ScrollDir, TextConsole, VgaTextConsole};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 25;

// Padrão de preenchimento que nunca colide com uma célula codificada
const TEST_PATTERN: u16 = 0xDEAD;

// Célula de limpeza: espaço com as cores default
const CLEAR_CELL: u16 = 0x0720;

fn nop_port_write(_port: u16, _value: u8) {}

/// Console apontando para um buffer de host no lugar do MMIO.
fn console_over(buf: &mut Vec<u16>) -> VgaTextConsole {
    VgaTextConsole::with_port_writer(WIDTH, HEIGHT, buf.as_mut_ptr() as usize, nop_port_write)
}

fn grid_buffer() -> Vec<u16> {
    vec![0u16; WIDTH as usize * HEIGHT as usize]
}

/// Preenche o buffer com (linha << 8) | coluna, uma assinatura por célula.
fn paint_position_pattern(buf: &mut [u16]) {
    for y in 0..HEIGHT as usize {
        for x in 0..WIDTH as usize {
            buf[y * WIDTH as usize + x] = ((y as u16) << 8) | x as u16;
        }
    }
}

#[test]
fn test_dimensions() {
    let cons = VgaTextConsole::with_port_writer(WIDTH, HEIGHT, 0, nop_port_write);
    assert_eq!(cons.dimensions(), (80, 25));
}

#[test]
fn test_default_colors() {
    let cons = VgaTextConsole::with_port_writer(WIDTH, HEIGHT, 0, nop_port_write);
    assert_eq!(cons.default_colors(), (7, 0));
}

#[test]
fn test_fill_clips_against_grid() {
    // (retângulo pedido, retângulo efetivamente preenchido), 0-based
    let cases: &[((u16, u16, u16, u16), (u16, u16, u16, u16))] = &[
        // cobre a grade inteira
        ((0, 0, 500, 500), (0, 0, 80, 25)),
        // altura recortada ao vão restante
        ((10, 10, 11, 50), (10, 10, 11, 15)),
        // largura recortada ao vão restante
        ((10, 10, 110, 1), (10, 10, 70, 1)),
        // canto inferior direito, ambos recortados
        ((70, 20, 20, 20), (70, 20, 10, 5)),
        // origem fora da grade: rejeição total
        ((80, 0, 20, 20), (0, 0, 0, 0)),
        ((0, 25, 20, 20), (0, 0, 0, 0)),
        ((90, 30, 20, 20), (0, 0, 0, 0)),
        // totalmente interior: sem recorte
        ((12, 12, 5, 6), (12, 12, 5, 6)),
    ];

    let mut buf = grid_buffer();
    let mut cons = console_over(&mut buf);

    for (index, &((x, y, w, h), (ex, ey, ew, eh))) in cases.iter().enumerate() {
        buf.iter_mut().for_each(|cell| *cell = TEST_PATTERN);

        cons.fill(x, y, w, h, 0, 0);

        let filled = encode(b' ', 0, 0, DEFAULT_FG, DEFAULT_BG);
        for cy in 0..HEIGHT {
            for cx in 0..WIDTH {
                let got = buf[cy as usize * WIDTH as usize + cx as usize];
                let inside = cx >= ex && cx < ex + ew && cy >= ey && cy < ey + eh;

                if inside {
                    assert_eq!(
                        got, filled,
                        "[caso {index}] célula ({cx}, {cy}) deveria ter sido preenchida"
                    );
                } else {
                    assert_eq!(
                        got, TEST_PATTERN,
                        "[caso {index}] célula ({cx}, {cy}) não deveria ter sido tocada"
                    );
                }
            }
        }
    }
}

#[test]
fn test_write_off_screen_is_noop() {
    // Coordenadas 1-based: 0 também é inválido
    let cases: &[(u16, u16)] = &[(81, 26), (90, 24), (79, 30), (100, 100), (0, 1), (1, 0)];

    let mut buf = grid_buffer();
    let mut cons = console_over(&mut buf);

    for (index, &(x, y)) in cases.iter().enumerate() {
        buf.iter_mut().for_each(|cell| *cell = 0);

        cons.write(b'!', 1, 2, x, y);

        assert!(
            buf.iter().all(|&cell| cell == 0),
            "[caso {index}] write fora da tela deveria ser no-op"
        );
    }
}

#[test]
fn test_write_first_cell() {
    let mut buf = grid_buffer();
    let mut cons = console_over(&mut buf);

    cons.write(b'!', 1, 2, 1, 1);

    // atributo = (2 << 4) | 1
    assert_eq!(buf[0], (0x21 << 8) | u16::from(b'!'));
}

#[test]
fn test_write_substitutes_invalid_colors() {
    let mut buf = grid_buffer();
    let mut cons = console_over(&mut buf);
    let (default_fg, default_bg) = cons.default_colors();

    cons.write(b'!', 128, 2, 1, 1);
    let exp_attr = (2u16 << 4) | u16::from(default_fg);
    assert_eq!(buf[0], (exp_attr << 8) | u16::from(b'!'));

    cons.write(b'!', 8, 255, 2, 1);
    let exp_attr = (u16::from(default_bg) << 4) | 8u16;
    assert_eq!(buf[1], (exp_attr << 8) | u16::from(b'!'));
}

#[test]
fn test_write_addresses_one_based_grid() {
    let mut buf = grid_buffer();
    let mut cons = console_over(&mut buf);

    // última célula visível
    cons.write(b'Z', 1, 0, WIDTH, HEIGHT);
    let last = WIDTH as usize * HEIGHT as usize - 1;
    assert_eq!(buf[last] & 0xFF, u16::from(b'Z'));
}

#[test]
fn test_scroll_up_moves_rows_and_clears_bottom() {
    let mut buf = grid_buffer();
    let mut cons = console_over(&mut buf);

    for lines in [0u16, 1, 2, 7] {
        paint_position_pattern(&mut buf);

        cons.scroll(ScrollDir::Up, lines);

        for y in 0..HEIGHT - lines {
            for x in 0..WIDTH {
                let expected = ((y + lines) << 8) | x;
                assert_eq!(
                    buf[y as usize * WIDTH as usize + x as usize],
                    expected,
                    "linhas={lines}: linha {y} deveria conter a antiga linha {}",
                    y + lines
                );
            }
        }

        // linhas vagas no fim viram espaço em branco
        for y in HEIGHT - lines..HEIGHT {
            for x in 0..WIDTH {
                assert_eq!(buf[y as usize * WIDTH as usize + x as usize], CLEAR_CELL);
            }
        }
    }
}

#[test]
fn test_scroll_down_moves_rows_and_clears_top() {
    let mut buf = grid_buffer();
    let mut cons = console_over(&mut buf);

    for lines in [0u16, 1, 2, 7] {
        paint_position_pattern(&mut buf);

        cons.scroll(ScrollDir::Down, lines);

        for y in lines..HEIGHT {
            for x in 0..WIDTH {
                let expected = ((y - lines) << 8) | x;
                assert_eq!(
                    buf[y as usize * WIDTH as usize + x as usize],
                    expected,
                    "linhas={lines}: linha {y} deveria conter a antiga linha {}",
                    y - lines
                );
            }
        }

        // linhas vagas no topo viram espaço em branco
        for y in 0..lines {
            for x in 0..WIDTH {
                assert_eq!(buf[y as usize * WIDTH as usize + x as usize], CLEAR_CELL);
            }
        }
    }
}

#[test]
fn test_scroll_whole_grid_clears_everything() {
    let mut buf = grid_buffer();
    let mut cons = console_over(&mut buf);

    for lines in [HEIGHT, HEIGHT + 5, 1000] {
        paint_position_pattern(&mut buf);
        cons.scroll(ScrollDir::Up, lines);
        assert!(buf.iter().all(|&cell| cell == CLEAR_CELL));

        paint_position_pattern(&mut buf);
        cons.scroll(ScrollDir::Down, lines);
        assert!(buf.iter().all(|&cell| cell == CLEAR_CELL));
    }
}

#[test]
fn test_scroll_roundtrip_restores_interior_rows() {
    let mut buf = grid_buffer();
    let mut cons = console_over(&mut buf);

    for lines in [1u16, 3, 10] {
        paint_position_pattern(&mut buf);

        cons.scroll(ScrollDir::Up, lines);
        cons.scroll(ScrollDir::Down, lines);

        // linhas não vagadas por nenhum dos dois passes voltam ao original
        for y in lines..HEIGHT {
            for x in 0..WIDTH {
                assert_eq!(
                    buf[y as usize * WIDTH as usize + x as usize],
                    (y << 8) | x,
                    "linhas={lines}: linha interior {y} deveria ter sido restaurada"
                );
            }
        }
    }
}

// ============================================================================
// PALETA
// ============================================================================

// Log de escritas de porta gravado pela capability injetada. Os casos de
// paleta compartilham este estado e por isso vivem num único #[test].
static PORT_LOG: Mutex<Vec<(u16, u8)>> = Mutex::new(Vec::new());

fn recording_port_write(port: u16, value: u8) {
    PORT_LOG.lock().push((port, value));
}

#[test]
fn test_set_palette_color_programs_dac() {
    let mut cons = VgaTextConsole::with_port_writer(WIDTH, HEIGHT, 0, recording_port_write);

    // espelho parte da paleta EGA de power-on
    assert_eq!(cons.palette()[1], Rgb::new(0x00, 0x00, 0xAA));

    // caso válido: índice na porta 0x3C8, R, G, B quantizados em 0x3C9
    PORT_LOG.lock().clear();
    let orange = Rgb::new(255, 127, 0);
    cons.set_palette_color(1, orange);

    let expected: [(u16, u8); 4] = [(0x3C8, 1), (0x3C9, 63), (0x3C9, 31), (0x3C9, 0)];
    assert_eq!(PORT_LOG.lock().as_slice(), &expected[..]);

    // espelho guarda a cor original, não a quantizada
    assert_eq!(cons.palette()[1], orange);

    // índice fora da paleta: zero escritas, espelho intacto
    PORT_LOG.lock().clear();
    let before = *cons.palette();
    cons.set_palette_color(50, Rgb::new(1, 2, 3));

    assert!(PORT_LOG.lock().is_empty());
    assert_eq!(*cons.palette(), before);
}
