use crate::font::FontTable;
use crate::lookup::HeightLookup;

const FONT_TYPEDEF: &str = "typedef struct {
  uint8_t charWidth;
  uint8_t charHeight;
  uint8_t asciiMin;
  uint8_t asciiMax;
  const uint16_t *data;
} Font;
";

const LOOKUP_PROTOTYPE: &str = "const Font *fontWithHeight(uint8_t h)";

/// Write the header: the `Font` record type, one extern per font and the
/// lookup prototype, inside `extern "C"` so C++ code links against it.
pub fn render_header(guard: &str, fonts: &[FontTable]) -> String {
    let mut out = String::new();

    out.push_str(&format!("#ifndef {guard}\n#define {guard}\n\n"));
    out.push_str("#include <stdint.h>\n\n");
    out.push_str(FONT_TYPEDEF);
    out.push_str("\n#ifdef __cplusplus\nextern \"C\" {\n#endif\n\n");

    for font in fonts {
        out.push_str(&format!("// {}\n", font.file_name));
        out.push_str(&format!("extern const Font {};\n\n", font.name));
    }

    out.push_str(&format!("{LOOKUP_PROTOTYPE};\n"));
    out.push_str("\n\n#ifdef __cplusplus\n} // extern \"C\"\n#endif\n\n#endif\n");
    out
}

fn render_font(out: &mut String, font: &FontTable) {
    out.push_str(&format!("static const uint16_t {}_data[] = {{\n", font.name));

    //one glyph per line
    for glyph in font.rows.chunks(font.char_height.max(1) as usize) {
        out.push_str("  ");
        for row in glyph {
            out.push_str(&format!("0x{row:04x}, "));
        }
        out.push('\n');
    }
    if font.char_height == 0 {
        //no rows, but every glyph still gets its line
        for _ in 0..font.glyph_count() {
            out.push_str("  \n");
        }
    }

    out.push_str("};\n\n");
    out.push_str(&format!("const Font {} = {{\n", font.name));
    out.push_str(&format!("  {}, // charWidth\n", font.char_width));
    out.push_str(&format!("  {}, // charHeight\n", font.char_height));
    out.push_str(&format!("  {}, // asciiMin\n", font.ascii_min));
    out.push_str(&format!("  {}, // asciiMax\n", font.ascii_max));
    out.push_str(&format!("  {}_data // data\n", font.name));
    out.push_str("};\n");
}

fn render_lookup(out: &mut String, lookup: &HeightLookup) {
    out.push_str(&format!("{LOOKUP_PROTOTYPE} {{\n"));
    for entry in lookup.entries() {
        out.push_str(&format!(
            "  if (h <= {}) return(&{});\n",
            entry.height, entry.name
        ));
    }
    out.push_str(&format!("  return(&{});\n", lookup.fallback().name));
    out.push_str("}\n");
}

/// Write the definitions: each font's row table and record, then the body of
/// `fontWithHeight`.
pub fn render_source(header_name: &str, fonts: &[FontTable], lookup: &HeightLookup) -> String {
    let mut out = format!("#include \"{header_name}\"\n\n");

    for font in fonts {
        render_font(&mut out, font);
        out.push('\n');
    }

    render_lookup(&mut out, lookup);
    out
}
