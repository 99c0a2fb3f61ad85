//! Document I/O operations for the overlay

use super::apply_overlay;
use crate::options::EurionOptions;
use crate::stats::calculate_statistics;
use crate::types::*;
use lopdf::Document;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Load a PDF document. The file is only read.
pub fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let doc = Document::load_mem(&bytes)?;
    log::info!("Loaded {} ({} pages)", path.display(), doc.get_pages().len());
    Ok(doc)
}

/// Save a document.
///
/// The bytes go to a temporary file next to `path`, which is then renamed
/// over it, so a failed save never leaves a partial file at `path`.
pub fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = Vec::new();
    doc.save_to(&mut writer)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(&writer)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    log::info!("Saved {} ({} bytes)", path.display(), writer.len());
    Ok(())
}

/// Read `input`, overlay every page, and write the result to `output`.
pub fn overlay_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &EurionOptions,
) -> Result<OverlayStatistics> {
    let source = load_pdf(input)?;
    let stats = calculate_statistics(&source, options)?;
    let result = apply_overlay(&source, options)?;
    save_pdf(result, output)?;
    Ok(stats)
}
