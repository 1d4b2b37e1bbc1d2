use std::collections::BTreeMap;

use crate::error::FontError;
use crate::util::parse_row;

/// Lowest and highest character codes kept from a BDF file.
pub const ASCII_PRINTABLE: core::ops::RangeInclusive<i64> = 32..=126;

/// One parsed BDF file. Rows are kept as read, before cropping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSource {
    pub name: String,
    /// File name the font came from, written as a comment in the header
    pub file_name: String,
    pub char_width: i64,
    /// Cell height with the leading already taken off
    pub char_height: i64,
    pub leading: usize,
    pub ascii_min: u8,
    pub ascii_max: u8,
    pub glyphs: BTreeMap<u8, Vec<u16>>,
}

struct BoundingBox {
    width: i64,
    /// Cell height minus the leading
    height: i64,
    leading: usize,
}

fn parse_bounding_box(line: &str) -> Option<BoundingBox> {
    //FONTBOUNDINGBOX width height x-offset y-offset
    let mut fields = line.split_whitespace().skip(1);
    let width = fields.next()?.parse().ok()?;
    let height: i64 = fields.next()?.parse().ok()?;
    let _x_offset: i64 = fields.next()?.parse().ok()?;
    let y_offset: i64 = fields.next()?.parse().ok()?;
    let leading = y_offset.checked_abs()?;
    Some(BoundingBox {
        width,
        height: height.checked_sub(leading)?,
        leading: usize::try_from(leading).ok()?,
    })
}

fn parse_encoding(line: &str) -> Option<i64> {
    line.split_whitespace().nth(1)?.parse().ok()
}

impl FontSource {
    /// Parse the text of a BDF file. Glyphs outside 32..=126 are skipped.
    pub fn parse(name: &str, file_name: &str, text: &str) -> Result<Self, FontError> {
        let mut bounding_box = None;
        let mut glyphs: BTreeMap<u8, Vec<u16>> = BTreeMap::new();
        let mut current: Option<u8> = None;
        let mut in_bitmap = false;

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            let line_number = idx + 1;

            if line.starts_with("FONTBOUNDINGBOX") {
                let bbx = parse_bounding_box(line).ok_or_else(|| FontError::BadBoundingBox {
                    font: name.to_string(),
                    line: line_number,
                })?;
                bounding_box = Some(bbx);
            } else if line.starts_with("ENCODING") {
                let code = parse_encoding(line).ok_or_else(|| FontError::BadEncoding {
                    font: name.to_string(),
                    line: line_number,
                })?;
                if ASCII_PRINTABLE.contains(&code) {
                    let code = code as u8;
                    glyphs.insert(code, Vec::new());
                    current = Some(code);
                    in_bitmap = false;
                } else {
                    log::debug!("{name}: skipping glyph with encoding {code}");
                    current = None;
                }
            } else if line.starts_with("BITMAP") {
                in_bitmap = true;
            } else if line.starts_with("ENDCHAR") {
                in_bitmap = false;
            } else if in_bitmap {
                if let Some(rows) = current.and_then(|code| glyphs.get_mut(&code)) {
                    let row = parse_row(line).ok_or_else(|| FontError::BadBitmapRow {
                        font: name.to_string(),
                        line: line_number,
                    })?;
                    rows.push(row);
                }
            }
        }

        let bbx = bounding_box.ok_or_else(|| FontError::MissingBoundingBox {
            font: name.to_string(),
        })?;

        let (ascii_min, ascii_max) = match (glyphs.keys().next(), glyphs.keys().next_back()) {
            (Some(min), Some(max)) => (*min, *max),
            _ => {
                return Err(FontError::NoGlyphs {
                    font: name.to_string(),
                })
            }
        };

        Ok(Self {
            name: name.to_string(),
            file_name: file_name.to_string(),
            char_width: bbx.width,
            char_height: bbx.height,
            leading: bbx.leading,
            ascii_min,
            ascii_max,
            glyphs,
        })
    }
}
