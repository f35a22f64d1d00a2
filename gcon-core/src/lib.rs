//! # gcon-core
//!
//! The variant model shared by the consensus callers: one [Variant] per
//! discrepancy between the reference and the consensus read alleles, plus the
//! small set of collection operations the calling pipeline runs over them.
//!
//! - **Classification**: [Variant::variant_type] labels a call as an
//!   insertion, deletion, substitution or generic variant from allele lengths
//! - **Filtering**: [filter_variants] keeps calls with enough coverage and confidence
//! - **Provenance**: [annotate_variants] records which alignment rows support the calls
//!
//! Reading alignments and writing GFF/VCF happen elsewhere; all coordinates
//! here are 0-based and half-open.
//!
//! ## Example
//!
//! ```rust
//! use gcon_core::{Variant, annotate_variants, filter_variants};
//!
//! let mut variants = vec![
//!     Variant::new("chr1", 10, 11, "A", "T", "C", "C")
//!         .with_read_seq2("G")
//!         .with_coverage(12)
//!         .with_confidence(40),
//!     Variant::new("chr1", 20, 20, "", "GA", "T", "T")
//!         .with_coverage(2)
//!         .with_confidence(40),
//! ];
//!
//! annotate_variants(&mut variants, &[3usize, 7]);
//! let kept = filter_variants(5, 30, &variants);
//!
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].to_string(), "Substitution@chr1:10-11 A -> T/G");
//! assert_eq!(kept[0].annotation("rows"), Some("3,7"));
//! ```
pub mod alignment;
pub mod config;
pub mod errors;
pub mod filtering;
pub mod models;

// re-exports
pub use alignment::AlignmentRecord;
pub use config::FilterConfig;
pub use errors::{FilterConfigError, VariantError};
pub use filtering::{annotate_variants, filter_variants, sort_variants};
pub use models::{Annotation, Variant, VariantBuilder, VariantType};
