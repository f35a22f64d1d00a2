use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};

use crate::errors::VariantError;
use crate::models::{Annotation, VariantType};

///
/// Variant struct, one called discrepancy between the reference and one or
/// two observed read alleles over the half-open reference interval
/// `[ref_start, ref_end)`.
///
/// An insertion has `ref_start == ref_end`, a single-base substitution has
/// `ref_end == ref_start + 1`. Coordinates are never converted here; GFF/VCF
/// writers translate to 1-based conventions themselves.
///
#[derive(Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Variant {
    pub ref_id: String,
    pub ref_start: u32,
    pub ref_end: u32,
    pub ref_seq: String,
    pub read_seq1: String,
    /// Second allele; present only for heterozygous calls
    pub read_seq2: Option<String>,
    pub confidence: Option<u32>,
    pub coverage: Option<u32>,
    pub frequency1: Option<u32>,
    pub frequency2: Option<u32>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Reference base(s) immediately before `ref_start`
    pub ref_prev: String,
    /// Read base(s) immediately before the variant
    pub read_prev: String,
}

impl Variant {
    ///
    /// Create a new homozygous/haploid [Variant] with no scores attached.
    ///
    /// The preceding context (`ref_prev`, `read_prev`) is mandatory; use the
    /// `with_*` setters for the optional fields.
    ///
    pub fn new(
        ref_id: impl Into<String>,
        ref_start: u32,
        ref_end: u32,
        ref_seq: impl Into<String>,
        read_seq1: impl Into<String>,
        ref_prev: impl Into<String>,
        read_prev: impl Into<String>,
    ) -> Self {
        Self {
            ref_id: ref_id.into(),
            ref_start,
            ref_end,
            ref_seq: ref_seq.into(),
            read_seq1: read_seq1.into(),
            read_seq2: None,
            confidence: None,
            coverage: None,
            frequency1: None,
            frequency2: None,
            annotations: Vec::new(),
            ref_prev: ref_prev.into(),
            read_prev: read_prev.into(),
        }
    }

    pub fn builder() -> VariantBuilder {
        VariantBuilder::new()
    }

    pub fn with_read_seq2(mut self, read_seq2: impl Into<String>) -> Self {
        self.read_seq2 = Some(read_seq2.into());
        self
    }

    pub fn with_confidence(mut self, confidence: u32) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_coverage(mut self, coverage: u32) -> Self {
        self.coverage = Some(coverage);
        self
    }

    pub fn with_frequency1(mut self, frequency1: u32) -> Self {
        self.frequency1 = Some(frequency1);
        self
    }

    pub fn with_frequency2(mut self, frequency2: u32) -> Self {
        self.frequency2 = Some(frequency2);
        self
    }

    pub fn with_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn is_heterozygous(&self) -> bool {
        self.read_seq2.is_some()
    }

    pub fn variant_type(&self) -> VariantType {
        VariantType::classify(
            self.ref_seq.len(),
            self.read_seq1.len(),
            self.read_seq2.as_ref().map(String::len),
        )
    }

    ///
    /// Append a `key=value` annotation. Earlier entries, including ones with
    /// the same key, are kept.
    ///
    pub fn annotate(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.annotations.push(Annotation::new(key, value));
    }

    /// First value stored under `key`, if any.
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    pub fn annotations_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.annotations
            .iter()
            .filter(move |a| a.key == key)
            .map(|a| a.value.as_str())
    }

    ///
    /// Sort key: `(ref_id, ref_start, ref_end, read_seq1)`.
    ///
    /// This is coarser than equality (two variants differing only in, say,
    /// confidence share a key), which is why [Variant] does not implement `Ord`.
    ///
    pub fn sort_key(&self) -> (&str, u32, u32, &str) {
        (
            self.ref_id.as_str(),
            self.ref_start,
            self.ref_end,
            self.read_seq1.as_str(),
        )
    }

    pub fn cmp_position(&self, other: &Variant) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }

    ///
    /// Whether both `coverage` and `confidence` reach their thresholds.
    ///
    /// A missing score orders below every threshold, so it always fails.
    ///
    pub fn passes_filter(&self, min_coverage: u32, min_confidence: u32) -> bool {
        self.coverage.is_some_and(|c| c >= min_coverage)
            && self.confidence.is_some_and(|c| c >= min_confidence)
    }

    fn read_alleles(&self) -> String {
        let allele1 = or_dot(&self.read_seq1);
        match &self.read_seq2 {
            Some(seq2) => format!("{}/{}", allele1, or_dot(seq2)),
            None => allele1.to_string(),
        }
    }
}

fn or_dot(seq: &str) -> &str {
    if seq.is_empty() { "." } else { seq }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}:{}-{} {} -> {}",
            self.variant_type(),
            self.ref_id,
            self.ref_start,
            self.ref_end,
            or_dot(&self.ref_seq),
            self.read_alleles()
        )
    }
}

// debug output is the same one-line summary as Display
impl Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

///
/// Field-by-field constructor for [Variant], for callers that assemble a call
/// incrementally. `finish` fails if the preceding context was never supplied.
///
/// ```rust
/// use gcon_core::{Variant, VariantError};
///
/// let variant = Variant::builder()
///     .with_ref_id("chr1")
///     .with_interval(10, 11)
///     .with_ref_seq("A")
///     .with_read_seq1("T")
///     .with_ref_prev("C")
///     .with_read_prev("C")
///     .finish()
///     .unwrap();
/// assert_eq!(variant.to_string(), "Substitution@chr1:10-11 A -> T");
///
/// let missing = Variant::builder()
///     .with_ref_id("chr1")
///     .with_interval(10, 11)
///     .with_ref_seq("A")
///     .with_read_seq1("T")
///     .with_read_prev("C")
///     .finish();
/// assert_eq!(missing, Err(VariantError::MissingRefPrev));
/// ```
#[derive(Default, Debug, Clone)]
pub struct VariantBuilder {
    ref_id: Option<String>,
    ref_start: Option<u32>,
    ref_end: Option<u32>,
    ref_seq: Option<String>,
    read_seq1: Option<String>,
    read_seq2: Option<String>,
    confidence: Option<u32>,
    coverage: Option<u32>,
    frequency1: Option<u32>,
    frequency2: Option<u32>,
    annotations: Vec<Annotation>,
    ref_prev: Option<String>,
    read_prev: Option<String>,
}

impl VariantBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ref_id(mut self, ref_id: impl Into<String>) -> Self {
        self.ref_id = Some(ref_id.into());
        self
    }

    /// Sets the half-open reference interval `[start, end)`.
    pub fn with_interval(mut self, start: u32, end: u32) -> Self {
        self.ref_start = Some(start);
        self.ref_end = Some(end);
        self
    }

    pub fn with_ref_seq(mut self, ref_seq: impl Into<String>) -> Self {
        self.ref_seq = Some(ref_seq.into());
        self
    }

    pub fn with_read_seq1(mut self, read_seq1: impl Into<String>) -> Self {
        self.read_seq1 = Some(read_seq1.into());
        self
    }

    pub fn with_read_seq2(mut self, read_seq2: impl Into<String>) -> Self {
        self.read_seq2 = Some(read_seq2.into());
        self
    }

    pub fn with_confidence(mut self, confidence: u32) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_coverage(mut self, coverage: u32) -> Self {
        self.coverage = Some(coverage);
        self
    }

    pub fn with_frequency1(mut self, frequency1: u32) -> Self {
        self.frequency1 = Some(frequency1);
        self
    }

    pub fn with_frequency2(mut self, frequency2: u32) -> Self {
        self.frequency2 = Some(frequency2);
        self
    }

    pub fn with_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn with_ref_prev(mut self, ref_prev: impl Into<String>) -> Self {
        self.ref_prev = Some(ref_prev.into());
        self
    }

    pub fn with_read_prev(mut self, read_prev: impl Into<String>) -> Self {
        self.read_prev = Some(read_prev.into());
        self
    }

    /// Consumes the builder and creates a [Variant].
    pub fn finish(self) -> Result<Variant, VariantError> {
        let ref_prev = self.ref_prev.ok_or(VariantError::MissingRefPrev)?;
        let read_prev = self.read_prev.ok_or(VariantError::MissingReadPrev)?;

        Ok(Variant {
            ref_id: self.ref_id.ok_or(VariantError::MissingField("ref_id"))?,
            ref_start: self.ref_start.ok_or(VariantError::MissingField("ref_start"))?,
            ref_end: self.ref_end.ok_or(VariantError::MissingField("ref_end"))?,
            ref_seq: self.ref_seq.ok_or(VariantError::MissingField("ref_seq"))?,
            read_seq1: self
                .read_seq1
                .ok_or(VariantError::MissingField("read_seq1"))?,
            read_seq2: self.read_seq2,
            confidence: self.confidence,
            coverage: self.coverage,
            frequency1: self.frequency1,
            frequency2: self.frequency2,
            annotations: self.annotations,
            ref_prev,
            read_prev,
        })
    }
}
