/// Drop `leading` rows from a glyph. Each step removes the first row if it is
/// blank, otherwise the last one. Returns `None` if the glyph runs out of rows.
pub fn crop_rows(rows: &[u16], leading: usize) -> Option<&[u16]> {
    let mut rows = rows;
    for _ in 0..leading {
        rows = match rows {
            [0, rest @ ..] => rest,
            [rest @ .., _] => rest,
            [] => return None,
        };
    }
    Some(rows)
}

/// Mirror a row so the leftmost pixel ends up in the low bits.
///
/// The accumulator is shifted once more after the last bit, so bit `b` of the
/// input lands on bit `16 - b` of the result: 0x8000 becomes 0x0002 and
/// 0x0001 becomes 0x10000. The firmware renderer reads the data this way.
pub fn reverse_row_bits(row: u16) -> u32 {
    let mut reversed: u32 = 0;
    for bit in 0..16 {
        reversed |= (u32::from(row) >> bit) & 0x01;
        reversed <<= 1;
    }
    reversed
}

/// Row word as stored in the firmware's `uint16_t` table.
///
/// The generated text holds this masked value, so a row with bit 0 set is
/// written as `0x0000` where the old Python generator wrote `0x10000`. Both
/// compile to the same table.
pub fn row_word(row: u16) -> u16 {
    //bit 16 does not fit in the table and is dropped, as the C compiler would
    (reverse_row_bits(row) & 0xffff) as u16
}

/// C identifier for a font: the file stem with every non-word character removed.
pub fn font_identifier(stem: &str) -> Option<String> {
    let name: String = stem
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    match name.chars().next() {
        Some(first) if !first.is_ascii_digit() => Some(name),
        _ => None,
    }
}

/// Parse one BDF bitmap row, right-padding it with '0' to four hex digits.
/// An empty row pads to a blank one.
pub fn parse_row(hex: &str) -> Option<u16> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let padded = format!("{hex:0<4}");
    u16::from_str_radix(&padded, 16).ok()
}
