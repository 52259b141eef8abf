//! Built-in 5x7 bitmap font
//!
//! Enough glyphs for scores and the end-of-game messages. Lowercase letters
//! use the uppercase glyphs; characters without a glyph only advance.

/// Glyph cell size in font pixels
pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character in font pixels (glyph + 1 spacing)
pub const ADVANCE: u32 = 6;

/// Font pixels per unit of font size
const PIXEL_PER_SIZE: f32 = 0.1;

/// A horizontal run of lit pixels, in surface units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Run {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Rows top to bottom, bit 4 is the leftmost column
pub fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c.to_ascii_uppercase() {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        _ => return None,
    };
    Some(rows)
}

/// Lay out `text` as lit pixel runs. `baseline` is the bottom of the glyph
/// cell.
pub fn layout(text: &str, x: f32, baseline: f32, size: f32) -> Vec<Run> {
    let px = size * PIXEL_PER_SIZE;
    let top = baseline - GLYPH_HEIGHT as f32 * px;
    let mut runs = Vec::new();

    for (i, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else {
            continue;
        };
        let cell_x = x + (i as u32 * ADVANCE) as f32 * px;

        for (row, bits) in rows.iter().enumerate() {
            let y = top + row as f32 * px;
            let mut col = 0;
            while col < GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    col += 1;
                    continue;
                }
                let start = col;
                while col < GLYPH_WIDTH && bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                    col += 1;
                }
                runs.push(Run {
                    x: cell_x + start as f32 * px,
                    y,
                    width: (col - start) as f32 * px,
                    height: px,
                });
            }
        }
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_glyphs_fit_cell() {
        for c in ('0'..='9').chain('A'..='Z').chain("!.:-".chars()) {
            let rows = glyph(c).unwrap_or_else(|| panic!("missing glyph {c:?}"));
            assert!(rows.iter().all(|r| *r < 1 << GLYPH_WIDTH), "{c:?}");
            assert!(rows.iter().any(|r| *r != 0), "{c:?} is blank");
        }
    }

    #[test]
    fn test_lowercase_uses_uppercase() {
        assert_eq!(glyph('w'), glyph('W'));
        assert_eq!(glyph(' '), None);
    }

    #[test]
    fn test_layout_merges_runs() {
        // Top row of 'T' is one five-pixel run, the stem one pixel per row
        let runs = layout("T", 0.0, 70.0, 100.0);
        assert_eq!(runs.len(), 7);
        assert_eq!(
            runs[0],
            Run {
                x: 0.0,
                y: 0.0,
                width: 50.0,
                height: 10.0
            }
        );
        assert!(runs[1..].iter().all(|r| r.width == 10.0 && r.x == 20.0));
    }

    #[test]
    fn test_layout_advances_over_spaces() {
        let runs = layout(" 1", 0.0, 7.0, 10.0);
        assert!(runs.iter().all(|r| r.x >= 6.0));
    }
}
