use serde::Deserialize;

use crate::font::FontTable;

/// Order of the entries in the generated `fontWithHeight` function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LookupOrder {
    /// Keep the order the fonts were read in (sorted file names)
    #[default]
    FileName,
    /// Sort by glyph height, ties keep file name order
    Height,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightEntry {
    pub height: u8,
    pub name: String,
}

/// The threshold list behind `fontWithHeight`: the first entry whose height
/// is at least the request wins, otherwise the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightLookup {
    entries: Vec<HeightEntry>,
}

impl HeightLookup {
    /// Returns `None` when there are no fonts, since the fallback needs a last entry.
    pub fn new(fonts: &[FontTable], order: LookupOrder) -> Option<Self> {
        if fonts.is_empty() {
            return None;
        }

        let mut entries: Vec<HeightEntry> = fonts
            .iter()
            .map(|font| HeightEntry {
                height: font.char_height,
                name: font.name.clone(),
            })
            .collect();

        match order {
            LookupOrder::Height => entries.sort_by_key(|entry| entry.height),
            LookupOrder::FileName => {
                if !entries.windows(2).all(|pair| pair[0].height <= pair[1].height) {
                    log::warn!(
                        "font heights are not ascending in file name order, \
                         fontWithHeight may pick a font taller than needed"
                    );
                }
            }
        }

        Some(Self { entries })
    }

    pub fn entries(&self) -> &[HeightEntry] {
        &self.entries
    }

    pub fn fallback(&self) -> &HeightEntry {
        //never empty, checked in new
        &self.entries[self.entries.len() - 1]
    }

    /// Same selection the generated C function makes.
    pub fn resolve(&self, height: u8) -> &HeightEntry {
        self.entries
            .iter()
            .find(|entry| height <= entry.height)
            .unwrap_or_else(|| self.fallback())
    }
}
