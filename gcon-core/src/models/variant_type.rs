use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Coarse classification of a called variant, derived from allele lengths.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum VariantType {
    /// Empty reference allele; the reference interval has zero width
    Insertion,
    /// At least one read allele is empty
    Deletion,
    /// Every read allele has the same length as the reference allele
    Substitution,
    /// Anything else, e.g. a length-changing multi-base replacement.
    /// Rendered and serialized as `Variant`.
    #[serde(rename = "Variant")]
    Complex,
}

impl VariantType {
    ///
    /// Classify a variant from its allele lengths.
    ///
    /// The checks run in a fixed priority order: an empty reference always
    /// wins, then an empty read allele, then equal lengths.
    ///
    /// # Arguments
    /// - ref_len: length of the reference allele
    /// - read_len1: length of the first read allele
    /// - read_len2: length of the second read allele, if heterozygous
    pub fn classify(ref_len: usize, read_len1: usize, read_len2: Option<usize>) -> Self {
        if ref_len == 0 {
            VariantType::Insertion
        } else if read_len1 == 0 || read_len2 == Some(0) {
            VariantType::Deletion
        } else if read_len1 == ref_len && read_len2.is_none_or(|l2| l2 == ref_len) {
            VariantType::Substitution
        } else {
            VariantType::Complex
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VariantType::Insertion => "Insertion",
            VariantType::Deletion => "Deletion",
            VariantType::Substitution => "Substitution",
            VariantType::Complex => "Variant",
        }
    }
}

impl Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
