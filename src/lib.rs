pub mod bdf;
pub mod codegen;
pub mod config;
pub mod error;
pub mod font;
pub mod lookup;
pub mod util;

use std::collections::BTreeSet;
use std::path::Path;

use bdf::FontSource;
use error::FontError;
use font::FontTable;
use lookup::{HeightLookup, LookupOrder};

/// Text of one BDF file and the file name it was read from.
pub struct FontFile {
    pub file_name: String,
    pub text: String,
}

/// The two generated C files.
#[derive(Debug, PartialEq, Eq)]
pub struct Generated {
    pub header: String,
    pub source: String,
}

/// Parse and convert every font, in the order given. Stops at the first bad font.
pub fn convert_fonts(files: &[FontFile]) -> Result<Vec<FontTable>, FontError> {
    let mut names = BTreeSet::new();
    let mut fonts = Vec::with_capacity(files.len());

    for file in files {
        let stem = Path::new(&file.file_name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = util::font_identifier(&stem).ok_or_else(|| FontError::BadName {
            path: file.file_name.clone(),
        })?;
        if !names.insert(name.clone()) {
            return Err(FontError::DuplicateName {
                name,
                path: file.file_name.clone(),
            });
        }

        let source = FontSource::parse(&name, &file.file_name, &file.text)?;
        let table = FontTable::from_source(&source)?;
        log::info!(
            "{}: {}x{} glyphs {}..={} ({} rows)",
            table.name,
            table.char_width,
            table.char_height,
            table.ascii_min,
            table.ascii_max,
            table.rows.len()
        );
        fonts.push(table);
    }

    Ok(fonts)
}

/// Convert all fonts and render both files. Nothing is returned unless every font converted.
pub fn generate(
    files: &[FontFile],
    guard: &str,
    header_include: &str,
    order: LookupOrder,
) -> Result<Generated, FontError> {
    let fonts = convert_fonts(files)?;
    let lookup = HeightLookup::new(&fonts, order).ok_or(FontError::NoFonts)?;

    Ok(Generated {
        header: codegen::render_header(guard, &fonts),
        source: codegen::render_source(header_include, &fonts, &lookup),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn bdf(height: u8, glyphs: &[(u8, &[&str])]) -> String {
        let mut text = format!("STARTFONT 2.1\nFONTBOUNDINGBOX 8 {} 0 -1\n", height + 1);
        for (code, rows) in glyphs {
            text.push_str(&format!("STARTCHAR c{code}\nENCODING {code}\nBITMAP\n"));
            for row in rows.iter() {
                text.push_str(row);
                text.push('\n');
            }
            text.push_str("ENDCHAR\n");
        }
        text.push_str("ENDFONT\n");
        text
    }

    fn files() -> Vec<FontFile> {
        vec![
            FontFile {
                file_name: "ter-u08b.bdf".to_string(),
                text: bdf(2, &[(65, &["00", "80", "40"]), (66, &["C0", "20", "00"])]),
            },
            FontFile {
                file_name: "ter-u16b.bdf".to_string(),
                text: bdf(3, &[(33, &["00", "80", "80", "80"]), (200, &["FF", "FF", "FF", "FF"])]),
            },
        ]
    }

    #[test]
    fn converts_in_file_order() {
        let fonts = convert_fonts(&files()).unwrap();
        let names: Vec<&str> = fonts.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["teru08b", "teru16b"]);
        assert_eq!(fonts[0].rows, vec![0x0002, 0x0004, 0x0006, 0x0008]);
        assert_eq!(fonts[1].ascii_min, 33);
        assert_eq!(fonts[1].ascii_max, 33);
        assert_eq!(fonts[1].rows, vec![0x0002, 0x0002, 0x0002]);
    }

    #[test]
    fn generates_both_files() {
        let out = generate(&files(), "_FONTS_H_", "fonts.h", LookupOrder::FileName).unwrap();
        assert!(out.header.contains("// ter-u08b.bdf\nextern const Font teru08b;\n"));
        assert!(out.header.contains("extern const Font teru16b;"));
        assert!(out.source.starts_with("#include \"fonts.h\"\n\n"));
        assert!(out.source.contains("  0x0002, 0x0004, \n  0x0006, 0x0008, \n"));
        assert!(out.source.ends_with(
            "  if (h <= 2) return(&teru08b);\n  if (h <= 3) return(&teru16b);\n  return(&teru16b);\n}\n"
        ));
    }

    #[test]
    fn same_input_same_output() {
        let first = generate(&files(), "G", "fonts.h", LookupOrder::FileName).unwrap();
        let second = generate(&files(), "G", "fonts.h", LookupOrder::FileName).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn one_bad_font_fails_the_run() {
        let mut files = files();
        files.push(FontFile {
            file_name: "broken.bdf".to_string(),
            text: bdf(1, &[(65, &["80", "80"]), (67, &["80", "80"])]),
        });
        assert_eq!(
            generate(&files, "G", "fonts.h", LookupOrder::FileName),
            Err(FontError::MissingGlyph {
                font: "broken".to_string(),
                code: 66
            })
        );
    }

    #[test]
    fn no_fonts_is_an_error() {
        assert_eq!(
            generate(&[], "G", "fonts.h", LookupOrder::FileName),
            Err(FontError::NoFonts)
        );
    }

    #[test]
    fn bad_file_name_is_an_error() {
        let files = [FontFile {
            file_name: "8x13.bdf".to_string(),
            text: bdf(1, &[(65, &["80", "80"])]),
        }];
        assert_eq!(
            convert_fonts(&files),
            Err(FontError::BadName {
                path: "8x13.bdf".to_string()
            })
        );
    }

    #[test]
    fn clashing_font_names_are_an_error() {
        let files = [
            FontFile {
                file_name: "a-b.bdf".to_string(),
                text: bdf(1, &[(65, &["80", "80"])]),
            },
            FontFile {
                file_name: "ab.bdf".to_string(),
                text: bdf(1, &[(65, &["80", "80"])]),
            },
        ];
        assert_eq!(
            convert_fonts(&files),
            Err(FontError::DuplicateName {
                name: "ab".to_string(),
                path: "ab.bdf".to_string()
            })
        );
    }
}
