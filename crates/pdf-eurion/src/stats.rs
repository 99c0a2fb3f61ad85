use crate::constants::MOTIF_OFFSETS;
use crate::layout::page_anchors;
use crate::options::EurionOptions;
use crate::render::get_page_geometry;
use crate::types::*;
use lopdf::Document;

/// Calculate statistics for overlaying `source` with `options`
pub fn calculate_statistics(
    source: &Document,
    options: &EurionOptions,
) -> Result<OverlayStatistics> {
    options.validate()?;

    let pages = source.get_pages();
    if pages.is_empty() {
        return Err(EurionError::NoPages);
    }

    let mut motifs_per_page = Vec::with_capacity(pages.len());
    for &page_id in pages.values() {
        let (width, height) = get_page_geometry(source, page_id)?.display_size();
        motifs_per_page.push(page_anchors(width, height, options).count());
    }

    let total_motifs: usize = motifs_per_page.iter().sum();

    Ok(OverlayStatistics {
        source_pages: motifs_per_page.len(),
        motifs_per_page,
        total_motifs,
        total_dots: total_motifs * MOTIF_OFFSETS.len(),
    })
}
