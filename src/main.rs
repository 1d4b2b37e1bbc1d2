use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bdf2font::config::Config;
use bdf2font::lookup::LookupOrder;
use bdf2font::FontFile;
use clap::Parser;
use log::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, help = "TOML file with the tool settings")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Directory scanned for *.bdf files")]
    input_dir: Option<PathBuf>,

    #[arg(long, help = "Generated header path")]
    header: Option<PathBuf>,

    #[arg(long, help = "Generated source path")]
    source: Option<PathBuf>,

    #[arg(long, help = "Include guard macro of the header")]
    guard: Option<String>,

    #[arg(long, value_enum)]
    order: Option<LookupOrder>,
}

fn load_config(cli: Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            Config::from_toml(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(input_dir) = cli.input_dir {
        config.input_dir = input_dir;
    }
    if let Some(header) = cli.header {
        config.header = header;
    }
    if let Some(source) = cli.source {
        config.source = source;
    }
    if let Some(guard) = cli.guard {
        config.guard = guard;
    }
    if let Some(order) = cli.order {
        config.order = order;
    }
    Ok(config)
}

/// *.bdf files, hidden ones excluded like a shell glob would.
fn is_font_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'));
    !hidden && path.extension().is_some_and(|ext| ext == "bdf")
}

/// Every *.bdf file in the directory, sorted by path.
fn read_fonts(dir: &Path) -> Result<Vec<FontFile>> {
    let mut paths = vec![];
    for entry in fs::read_dir(dir).with_context(|| format!("scanning {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() && is_font_file(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    paths
        .iter()
        .map(|path| {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            debug!("read {} ({} bytes)", path.display(), text.len());
            Ok(FontFile { file_name, text })
        })
        .collect()
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write every output next to its destination first, then move them all into
/// place. A failed write leaves the existing files untouched.
fn write_outputs(outputs: &[(&Path, &str)]) -> Result<()> {
    let mut staged: Vec<PathBuf> = vec![];
    for (path, text) in outputs {
        let tmp = staging_path(path);
        if let Err(e) = fs::write(&tmp, text) {
            for done in &staged {
                let _ = fs::remove_file(done);
            }
            return Err(e).with_context(|| format!("writing {}", path.display()));
        }
        staged.push(tmp);
    }

    for (tmp, (path, _)) in staged.iter().zip(outputs) {
        fs::rename(tmp, path).with_context(|| format!("replacing {}", path.display()))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let config = load_config(Cli::parse())?;

    let files = read_fonts(&config.input_dir)?;
    info!("{} fonts in {}", files.len(), config.input_dir.display());

    let generated = bdf2font::generate(
        &files,
        &config.guard,
        &config.header_include(),
        config.order,
    )?;

    write_outputs(&[
        (config.header.as_path(), generated.header.as_str()),
        (config.source.as_path(), generated.source.as_str()),
    ])?;

    info!(
        "wrote {} and {}",
        config.header.display(),
        config.source.display()
    );

    Ok(())
}
