use crate::bdf::FontSource;
use crate::error::FontError;
use crate::util::{crop_rows, row_word};

/// A font ready to be written out as a C table: `char_height` row words per
/// glyph, for every code from `ascii_min` to `ascii_max`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontTable {
    pub name: String,
    pub file_name: String,
    pub char_width: u8,
    pub char_height: u8,
    pub ascii_min: u8,
    pub ascii_max: u8,
    pub rows: Vec<u16>,
}

fn narrow(font: &str, field: &'static str, value: i64) -> Result<u8, FontError> {
    u8::try_from(value).map_err(|_| FontError::ValueOutOfRange {
        font: font.to_string(),
        field,
        value,
    })
}

impl FontTable {
    pub fn from_source(source: &FontSource) -> Result<Self, FontError> {
        let name = source.name.as_str();
        let char_width = narrow(name, "charWidth", source.char_width)?;
        let char_height = narrow(name, "charHeight", source.char_height)?;

        let glyph_count = (source.ascii_max - source.ascii_min) as usize + 1;
        let mut rows = Vec::with_capacity(glyph_count * char_height as usize);

        for code in source.ascii_min..=source.ascii_max {
            let glyph = source
                .glyphs
                .get(&code)
                .ok_or_else(|| FontError::MissingGlyph {
                    font: name.to_string(),
                    code,
                })?;

            let cropped =
                crop_rows(glyph, source.leading).ok_or_else(|| FontError::CropUnderflow {
                    font: name.to_string(),
                    code,
                })?;

            if cropped.len() != char_height as usize {
                return Err(FontError::RowCountMismatch {
                    font: name.to_string(),
                    code,
                    expected: char_height as usize,
                    found: cropped.len(),
                });
            }

            rows.extend(cropped.iter().map(|row| row_word(*row)));
        }

        Ok(Self {
            name: source.name.clone(),
            file_name: source.file_name.clone(),
            char_width,
            char_height,
            ascii_min: source.ascii_min,
            ascii_max: source.ascii_max,
            rows,
        })
    }

    pub fn glyph_count(&self) -> usize {
        (self.ascii_max - self.ascii_min) as usize + 1
    }

    /// Rows of one glyph, indexed the way the firmware does: `code - ascii_min`.
    pub fn glyph(&self, code: u8) -> Option<&[u16]> {
        if code < self.ascii_min || code > self.ascii_max {
            return None;
        }
        let height = self.char_height as usize;
        let start = (code - self.ascii_min) as usize * height;
        self.rows.get(start..start + height)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::BTreeMap;

    fn source(leading: usize, char_height: i64, glyphs: &[(u8, &[u16])]) -> FontSource {
        let glyphs: BTreeMap<u8, Vec<u16>> =
            glyphs.iter().map(|(c, rows)| (*c, rows.to_vec())).collect();
        FontSource {
            name: "test".to_string(),
            file_name: "test.bdf".to_string(),
            char_width: 8,
            char_height,
            leading,
            ascii_min: *glyphs.keys().next().unwrap(),
            ascii_max: *glyphs.keys().next_back().unwrap(),
            glyphs,
        }
    }

    #[test]
    fn table_is_dense() {
        let font = source(
            1,
            2,
            &[
                (65, &[0x0000, 0x8000, 0x4000]),
                (66, &[0x8000, 0x4000, 0x0000]),
                (67, &[0x0000, 0x0000, 0xc000]),
            ],
        );
        let table = FontTable::from_source(&font).unwrap();
        assert_eq!(table.glyph_count(), 3);
        assert_eq!(
            table.rows.len(),
            (table.ascii_max - table.ascii_min + 1) as usize * table.char_height as usize
        );
    }

    #[test]
    fn rows_are_cropped_then_reversed() {
        let font = source(2, 1, &[(48, &[0x0000, 0x00f0, 0x0000])]);
        let table = FontTable::from_source(&font).unwrap();
        assert_eq!(table.rows, vec![0x0f00 << 1]);
        assert_eq!(table.glyph(48), Some(&[0x1e00][..]));
    }

    #[test]
    fn glyphs_are_ordered_by_code() {
        let font = source(0, 1, &[(34, &[0x4000]), (33, &[0x8000])]);
        let table = FontTable::from_source(&font).unwrap();
        assert_eq!(table.rows, vec![0x0002, 0x0004]);
        assert_eq!(table.glyph(34), Some(&[0x0004][..]));
        assert_eq!(table.glyph(35), None);
    }

    #[test]
    fn gap_in_range_is_an_error() {
        let font = source(0, 1, &[(65, &[0x8000]), (67, &[0x8000])]);
        assert_eq!(
            FontTable::from_source(&font),
            Err(FontError::MissingGlyph {
                font: "test".to_string(),
                code: 66
            })
        );
    }

    #[test]
    fn glyph_shorter_than_leading_is_an_error() {
        let font = source(3, 0, &[(65, &[0x0000, 0x0000])]);
        assert_eq!(
            FontTable::from_source(&font),
            Err(FontError::CropUnderflow {
                font: "test".to_string(),
                code: 65
            })
        );
    }

    #[test]
    fn wrong_row_count_is_an_error() {
        let font = source(0, 2, &[(65, &[0x8000, 0x8000, 0x8000])]);
        assert_eq!(
            FontTable::from_source(&font),
            Err(FontError::RowCountMismatch {
                font: "test".to_string(),
                code: 65,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn negative_height_does_not_fit() {
        let font = source(0, -2, &[(65, &[0x8000])]);
        assert_eq!(
            FontTable::from_source(&font),
            Err(FontError::ValueOutOfRange {
                font: "test".to_string(),
                field: "charHeight",
                value: -2
            })
        );
    }
}
