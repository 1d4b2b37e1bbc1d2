use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lookup::LookupOrder;

/// Where to read fonts from and where to write the generated C files.
/// The defaults are the locations used when the tool runs from the fonts directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub input_dir: PathBuf,
    pub header: PathBuf,
    pub source: PathBuf,
    /// Include guard macro of the header
    pub guard: String,
    pub order: LookupOrder,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("./bdf"),
            header: PathBuf::from("../fonts.h"),
            source: PathBuf::from("../fonts.c"),
            guard: "_HOODWIND_fonts_h_".to_string(),
            order: LookupOrder::FileName,
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Name the source file uses to include the header.
    pub fn header_include(&self) -> String {
        Path::new(&self.header)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.header.display().to_string())
    }
}
