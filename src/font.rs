//! Fixed 8x8 bitmap font used for box labels.
//!
//! Each glyph is eight row bytes. A row is read MSB-first after a one-bit left shift, so
//! column `c` of row `r` is lit when `(GLYPHS[ch][r] << 1) & (0x80 >> c) != 0`. The
//! drawn shapes stay inside columns 1..=5 and rows 0..=6, leaving column 7 and row 7
//! as inter-glyph whitespace.

/// Width and height of one glyph cell in pixels at scale 1.
pub const GLYPH_CELL: i32 = 8;

/// Number of entries in the glyph table (7-bit ASCII).
pub const GLYPH_COUNT: usize = 128;

/// Returns the bitmap rows for `ch`, or `None` when the character has no table entry.
pub fn glyph_rows(ch: char) -> Option<&'static [u8; 8]> {
    let code = ch as u32 as usize;
    GLYPHS.get(code)
}

/// Whether the glyph bit at (`row`, `col`) is lit.
#[inline]
pub fn glyph_bit(rows: &[u8; 8], row: usize, col: usize) -> bool {
    let bits = u16::from(rows[row]) << 1;
    bits & (0x80 >> col) != 0
}

// Control characters (U+0000..U+001F) and DEL render blank.
#[rustfmt::skip]
static GLYPHS: [[u8; 8]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0020 ( )
    [0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x08, 0x00], // U+0021 (!)
    [0x14, 0x14, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0022 (")
    [0x14, 0x14, 0x3E, 0x14, 0x3E, 0x14, 0x14, 0x00], // U+0023 (#)
    [0x08, 0x1E, 0x28, 0x1C, 0x0A, 0x3C, 0x08, 0x00], // U+0024 ($)
    [0x30, 0x32, 0x04, 0x08, 0x10, 0x26, 0x06, 0x00], // U+0025 (%)
    [0x18, 0x24, 0x28, 0x10, 0x2A, 0x24, 0x1A, 0x00], // U+0026 (&)
    [0x08, 0x08, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0027 (quote)
    [0x04, 0x08, 0x10, 0x10, 0x10, 0x08, 0x04, 0x00], // U+0028 (()
    [0x10, 0x08, 0x04, 0x04, 0x04, 0x08, 0x10, 0x00], // U+0029 ())
    [0x00, 0x08, 0x2A, 0x1C, 0x2A, 0x08, 0x00, 0x00], // U+002A (*)
    [0x00, 0x08, 0x08, 0x3E, 0x08, 0x08, 0x00, 0x00], // U+002B (+)
    [0x00, 0x00, 0x00, 0x00, 0x18, 0x08, 0x10, 0x00], // U+002C (,)
    [0x00, 0x00, 0x00, 0x3E, 0x00, 0x00, 0x00, 0x00], // U+002D (-)
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00], // U+002E (.)
    [0x00, 0x02, 0x04, 0x08, 0x10, 0x20, 0x00, 0x00], // U+002F (/)
    [0x1C, 0x22, 0x26, 0x2A, 0x32, 0x22, 0x1C, 0x00], // U+0030 (0)
    [0x08, 0x18, 0x08, 0x08, 0x08, 0x08, 0x1C, 0x00], // U+0031 (1)
    [0x1C, 0x22, 0x02, 0x04, 0x08, 0x10, 0x3E, 0x00], // U+0032 (2)
    [0x3E, 0x04, 0x08, 0x04, 0x02, 0x22, 0x1C, 0x00], // U+0033 (3)
    [0x04, 0x0C, 0x14, 0x24, 0x3E, 0x04, 0x04, 0x00], // U+0034 (4)
    [0x3E, 0x20, 0x3C, 0x02, 0x02, 0x22, 0x1C, 0x00], // U+0035 (5)
    [0x0C, 0x10, 0x20, 0x3C, 0x22, 0x22, 0x1C, 0x00], // U+0036 (6)
    [0x3E, 0x02, 0x04, 0x08, 0x10, 0x10, 0x10, 0x00], // U+0037 (7)
    [0x1C, 0x22, 0x22, 0x1C, 0x22, 0x22, 0x1C, 0x00], // U+0038 (8)
    [0x1C, 0x22, 0x22, 0x1E, 0x02, 0x04, 0x18, 0x00], // U+0039 (9)
    [0x00, 0x18, 0x18, 0x00, 0x18, 0x18, 0x00, 0x00], // U+003A (:)
    [0x00, 0x18, 0x18, 0x00, 0x18, 0x08, 0x10, 0x00], // U+003B (;)
    [0x04, 0x08, 0x10, 0x20, 0x10, 0x08, 0x04, 0x00], // U+003C (<)
    [0x00, 0x00, 0x3E, 0x00, 0x3E, 0x00, 0x00, 0x00], // U+003D (=)
    [0x10, 0x08, 0x04, 0x02, 0x04, 0x08, 0x10, 0x00], // U+003E (>)
    [0x1C, 0x22, 0x02, 0x04, 0x08, 0x00, 0x08, 0x00], // U+003F (?)
    [0x1C, 0x22, 0x02, 0x1A, 0x2A, 0x2A, 0x1C, 0x00], // U+0040 (@)
    [0x1C, 0x22, 0x22, 0x3E, 0x22, 0x22, 0x22, 0x00], // U+0041 (A)
    [0x3C, 0x22, 0x22, 0x3C, 0x22, 0x22, 0x3C, 0x00], // U+0042 (B)
    [0x1C, 0x22, 0x20, 0x20, 0x20, 0x22, 0x1C, 0x00], // U+0043 (C)
    [0x38, 0x24, 0x22, 0x22, 0x22, 0x24, 0x38, 0x00], // U+0044 (D)
    [0x3E, 0x20, 0x20, 0x3C, 0x20, 0x20, 0x3E, 0x00], // U+0045 (E)
    [0x3E, 0x20, 0x20, 0x3C, 0x20, 0x20, 0x20, 0x00], // U+0046 (F)
    [0x1C, 0x22, 0x20, 0x2E, 0x22, 0x22, 0x1E, 0x00], // U+0047 (G)
    [0x22, 0x22, 0x22, 0x3E, 0x22, 0x22, 0x22, 0x00], // U+0048 (H)
    [0x1C, 0x08, 0x08, 0x08, 0x08, 0x08, 0x1C, 0x00], // U+0049 (I)
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x24, 0x18, 0x00], // U+004A (J)
    [0x22, 0x24, 0x28, 0x30, 0x28, 0x24, 0x22, 0x00], // U+004B (K)
    [0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x3E, 0x00], // U+004C (L)
    [0x22, 0x36, 0x2A, 0x2A, 0x22, 0x22, 0x22, 0x00], // U+004D (M)
    [0x22, 0x22, 0x32, 0x2A, 0x26, 0x22, 0x22, 0x00], // U+004E (N)
    [0x1C, 0x22, 0x22, 0x22, 0x22, 0x22, 0x1C, 0x00], // U+004F (O)
    [0x3C, 0x22, 0x22, 0x3C, 0x20, 0x20, 0x20, 0x00], // U+0050 (P)
    [0x1C, 0x22, 0x22, 0x22, 0x2A, 0x24, 0x1A, 0x00], // U+0051 (Q)
    [0x3C, 0x22, 0x22, 0x3C, 0x28, 0x24, 0x22, 0x00], // U+0052 (R)
    [0x1E, 0x20, 0x20, 0x1C, 0x02, 0x02, 0x3C, 0x00], // U+0053 (S)
    [0x3E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00], // U+0054 (T)
    [0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x1C, 0x00], // U+0055 (U)
    [0x22, 0x22, 0x22, 0x22, 0x22, 0x14, 0x08, 0x00], // U+0056 (V)
    [0x22, 0x22, 0x22, 0x2A, 0x2A, 0x2A, 0x14, 0x00], // U+0057 (W)
    [0x22, 0x22, 0x14, 0x08, 0x14, 0x22, 0x22, 0x00], // U+0058 (X)
    [0x22, 0x22, 0x22, 0x14, 0x08, 0x08, 0x08, 0x00], // U+0059 (Y)
    [0x3E, 0x02, 0x04, 0x08, 0x10, 0x20, 0x3E, 0x00], // U+005A (Z)
    [0x1C, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1C, 0x00], // U+005B ([)
    [0x00, 0x20, 0x10, 0x08, 0x04, 0x02, 0x00, 0x00], // U+005C (backslash)
    [0x1C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x1C, 0x00], // U+005D (])
    [0x08, 0x14, 0x22, 0x00, 0x00, 0x00, 0x00, 0x00], // U+005E (^)
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3E, 0x00], // U+005F (_)
    [0x10, 0x08, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0060 (`)
    [0x00, 0x00, 0x1C, 0x02, 0x1E, 0x22, 0x1E, 0x00], // U+0061 (a)
    [0x20, 0x20, 0x2C, 0x32, 0x22, 0x22, 0x3C, 0x00], // U+0062 (b)
    [0x00, 0x00, 0x1C, 0x20, 0x20, 0x22, 0x1C, 0x00], // U+0063 (c)
    [0x02, 0x02, 0x1A, 0x26, 0x22, 0x22, 0x1E, 0x00], // U+0064 (d)
    [0x00, 0x00, 0x1C, 0x22, 0x3E, 0x20, 0x1C, 0x00], // U+0065 (e)
    [0x0C, 0x12, 0x10, 0x38, 0x10, 0x10, 0x10, 0x00], // U+0066 (f)
    [0x00, 0x1E, 0x22, 0x22, 0x1E, 0x02, 0x1C, 0x00], // U+0067 (g)
    [0x20, 0x20, 0x2C, 0x32, 0x22, 0x22, 0x22, 0x00], // U+0068 (h)
    [0x08, 0x00, 0x18, 0x08, 0x08, 0x08, 0x1C, 0x00], // U+0069 (i)
    [0x04, 0x00, 0x0C, 0x04, 0x04, 0x24, 0x18, 0x00], // U+006A (j)
    [0x20, 0x20, 0x24, 0x28, 0x30, 0x28, 0x24, 0x00], // U+006B (k)
    [0x18, 0x08, 0x08, 0x08, 0x08, 0x08, 0x1C, 0x00], // U+006C (l)
    [0x00, 0x00, 0x34, 0x2A, 0x2A, 0x22, 0x22, 0x00], // U+006D (m)
    [0x00, 0x00, 0x2C, 0x32, 0x22, 0x22, 0x22, 0x00], // U+006E (n)
    [0x00, 0x00, 0x1C, 0x22, 0x22, 0x22, 0x1C, 0x00], // U+006F (o)
    [0x00, 0x00, 0x3C, 0x22, 0x3C, 0x20, 0x20, 0x00], // U+0070 (p)
    [0x00, 0x00, 0x1A, 0x26, 0x1E, 0x02, 0x02, 0x00], // U+0071 (q)
    [0x00, 0x00, 0x2C, 0x32, 0x20, 0x20, 0x20, 0x00], // U+0072 (r)
    [0x00, 0x00, 0x1C, 0x20, 0x1C, 0x02, 0x3C, 0x00], // U+0073 (s)
    [0x10, 0x10, 0x38, 0x10, 0x10, 0x12, 0x0C, 0x00], // U+0074 (t)
    [0x00, 0x00, 0x22, 0x22, 0x22, 0x26, 0x1A, 0x00], // U+0075 (u)
    [0x00, 0x00, 0x22, 0x22, 0x22, 0x14, 0x08, 0x00], // U+0076 (v)
    [0x00, 0x00, 0x22, 0x22, 0x2A, 0x2A, 0x14, 0x00], // U+0077 (w)
    [0x00, 0x00, 0x22, 0x14, 0x08, 0x14, 0x22, 0x00], // U+0078 (x)
    [0x00, 0x00, 0x22, 0x22, 0x1E, 0x02, 0x1C, 0x00], // U+0079 (y)
    [0x00, 0x00, 0x3E, 0x04, 0x08, 0x10, 0x3E, 0x00], // U+007A (z)
    [0x04, 0x08, 0x08, 0x10, 0x08, 0x08, 0x04, 0x00], // U+007B ({)
    [0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00], // U+007C (|)
    [0x10, 0x08, 0x08, 0x04, 0x08, 0x08, 0x10, 0x00], // U+007D (})
    [0x00, 0x00, 0x10, 0x2A, 0x04, 0x00, 0x00, 0x00], // U+007E (~)
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_characters_are_blank() {
        for code in 0u8..32 {
            let rows = glyph_rows(char::from(code)).unwrap();
            assert!(rows.iter().all(|row| *row == 0), "U+{code:04X} should be blank");
        }
        assert!(glyph_rows('\u{7f}').unwrap().iter().all(|row| *row == 0));
    }

    #[test]
    fn characters_outside_table_have_no_glyph() {
        assert!(glyph_rows('é').is_none());
        assert!(glyph_rows('\u{80}').is_none());
    }

    #[test]
    fn glyphs_leave_last_column_and_row_empty() {
        for code in 0u8..128 {
            let rows = glyph_rows(char::from(code)).unwrap();
            assert_eq!(rows[7], 0, "row 7 of U+{code:04X}");
            for row in 0..8 {
                assert!(!glyph_bit(rows, row, 7), "column 7 of U+{code:04X}");
                assert!(!glyph_bit(rows, row, 0), "column 0 of U+{code:04X}");
            }
        }
    }

    #[test]
    fn printable_ascii_is_drawn() {
        for ch in '!'..='~' {
            let rows = glyph_rows(ch).unwrap();
            assert!(rows.iter().any(|row| *row != 0), "{ch:?} has no pixels");
        }
    }

    #[test]
    fn letter_i_has_centered_stem() {
        let rows = glyph_rows('I').unwrap();
        for row in 1..6 {
            assert!(glyph_bit(rows, row, 3));
            assert!(!glyph_bit(rows, row, 1));
        }
    }
}
