//! Operations over collections of variant calls.

use log::debug;

use crate::alignment::AlignmentRecord;
use crate::models::Variant;

/// Annotation key used by [annotate_variants].
pub const ROWS_ANNOTATION_KEY: &str = "rows";

///
/// Keep the variants with `coverage >= min_coverage` and
/// `confidence >= min_confidence`, in input order.
///
/// Variants missing either score are dropped; see [Variant::passes_filter].
///
pub fn filter_variants(min_coverage: u32, min_confidence: u32, variants: &[Variant]) -> Vec<Variant> {
    let kept: Vec<Variant> = variants
        .iter()
        .filter(|v| v.passes_filter(min_coverage, min_confidence))
        .cloned()
        .collect();

    debug!(
        "Kept {} of {} variants (min coverage {}, min confidence {})",
        kept.len(),
        variants.len(),
        min_coverage,
        min_confidence
    );

    kept
}

///
/// Attach the row numbers of every alignment to every variant, as a
/// `rows=<r1>,<r2>,...` annotation. Works in place.
///
/// Alignments are not matched to individual variants: each variant receives
/// the full, comma-joined list in the order given.
///
pub fn annotate_variants<A: AlignmentRecord>(variants: &mut [Variant], alignments: &[A]) {
    if variants.is_empty() {
        return;
    }

    let rows = alignments
        .iter()
        .map(|a| a.row_number().to_string())
        .collect::<Vec<String>>()
        .join(",");

    debug!(
        "Annotating {} variants with {} alignment rows",
        variants.len(),
        alignments.len()
    );

    for variant in variants.iter_mut() {
        variant.annotate(ROWS_ANNOTATION_KEY, rows.as_str());
    }
}

/// Stable sort by `(ref_id, ref_start, ref_end, read_seq1)`.
pub fn sort_variants(variants: &mut [Variant]) {
    variants.sort_by(|a, b| a.cmp_position(b));
}
