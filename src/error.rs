use core::fmt;

/// Everything that can go wrong while turning a BDF file into a font table.
/// Each variant names the font it was raised for.
#[derive(Debug, PartialEq, Eq)]
pub enum FontError {
    /// No FONTBOUNDINGBOX line before the end of the file
    MissingBoundingBox { font: String },
    BadBoundingBox { font: String, line: usize },
    BadEncoding { font: String, line: usize },
    /// Bitmap row that is not hex or does not fit in 16 bits
    BadBitmapRow { font: String, line: usize },
    /// No glyph in the printable range 32..=126
    NoGlyphs { font: String },
    /// A code between asciiMin and asciiMax has no glyph
    MissingGlyph { font: String, code: u8 },
    /// The glyph has fewer rows than the leading to crop
    CropUnderflow { font: String, code: u8 },
    RowCountMismatch {
        font: String,
        code: u8,
        expected: usize,
        found: usize,
    },
    /// A record field does not fit in a uint8_t
    ValueOutOfRange {
        font: String,
        field: &'static str,
        value: i64,
    },
    BadName { path: String },
    /// Two files give the same C identifier
    DuplicateName { name: String, path: String },
    NoFonts,
}

impl std::error::Error for FontError {}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBoundingBox { font } => {
                write!(f, "{font}: missing FONTBOUNDINGBOX line")
            }
            Self::BadBoundingBox { font, line } => {
                write!(f, "{font}:{line}: malformed FONTBOUNDINGBOX")
            }
            Self::BadEncoding { font, line } => write!(f, "{font}:{line}: malformed ENCODING"),
            Self::BadBitmapRow { font, line } => {
                write!(f, "{font}:{line}: bitmap row is not a 16 bit hex value")
            }
            Self::NoGlyphs { font } => write!(f, "{font}: no glyphs in the range 32..=126"),
            Self::MissingGlyph { font, code } => {
                write!(f, "{font}: no glyph for code {code} inside the font's range")
            }
            Self::CropUnderflow { font, code } => {
                write!(f, "{font}: glyph {code} has fewer rows than the leading")
            }
            Self::RowCountMismatch {
                font,
                code,
                expected,
                found,
            } => write!(
                f,
                "{font}: glyph {code} has {found} rows after cropping, expected {expected}"
            ),
            Self::ValueOutOfRange { font, field, value } => {
                write!(f, "{font}: {field} = {value} does not fit in a uint8_t")
            }
            Self::BadName { path } => {
                write!(f, "{path}: file name does not give a valid C identifier")
            }
            Self::DuplicateName { name, path } => {
                write!(f, "{path}: font name {name} is already used by another file")
            }
            Self::NoFonts => write!(f, "no fonts to convert"),
        }
    }
}
