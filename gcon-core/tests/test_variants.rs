//! Pipeline-level checks: classify, sort, annotate and filter a batch of calls.

use gcon_core::{
    AlignmentRecord, Annotation, FilterConfig, Variant, VariantError, VariantType,
    annotate_variants, filter_variants, sort_variants,
};
use pretty_assertions::assert_eq;
use rstest::*;

struct AlignmentHit {
    row_number: usize,
}

impl AlignmentRecord for AlignmentHit {
    fn row_number(&self) -> usize {
        self.row_number
    }
}

#[fixture]
fn calls() -> Vec<Variant> {
    vec![
        Variant::new("chr2", 100, 101, "C", "T", "G", "G")
            .with_coverage(10)
            .with_confidence(40),
        Variant::new("chr1", 50, 52, "AT", "", "G", "G")
            .with_coverage(3)
            .with_confidence(50),
        Variant::new("chr1", 7, 7, "", "CC", "A", "A")
            .with_coverage(5)
            .with_confidence(29),
        Variant::new("chr1", 10, 11, "A", "T", "C", "C")
            .with_read_seq2("G")
            .with_coverage(5)
            .with_confidence(30)
            .with_frequency1(3)
            .with_frequency2(2),
    ]
}

#[rstest]
fn test_call_classification(calls: Vec<Variant>) {
    let types: Vec<VariantType> = calls.iter().map(Variant::variant_type).collect();
    assert_eq!(
        types,
        vec![
            VariantType::Substitution,
            VariantType::Deletion,
            VariantType::Insertion,
            VariantType::Substitution,
        ]
    );
    assert_eq!(
        calls.iter().map(Variant::is_heterozygous).collect::<Vec<_>>(),
        vec![false, false, false, true]
    );
}

#[rstest]
fn test_filter_keeps_input_order(calls: Vec<Variant>) {
    let kept = filter_variants(5, 30, &calls);
    assert_eq!(kept, vec![calls[0].clone(), calls[3].clone()]);
}

#[rstest]
fn test_sort_then_render(mut calls: Vec<Variant>) {
    sort_variants(&mut calls);
    let rendered: Vec<String> = calls.iter().map(|v| format!("{:?}", v)).collect();
    assert_eq!(
        rendered,
        vec![
            "Insertion@chr1:7-7 . -> CC",
            "Substitution@chr1:10-11 A -> T/G",
            "Deletion@chr1:50-52 AT -> .",
            "Substitution@chr2:100-101 C -> T",
        ]
    );
}

#[rstest]
fn test_annotate_then_filter(mut calls: Vec<Variant>) {
    let alignments = vec![AlignmentHit { row_number: 3 }, AlignmentHit { row_number: 7 }];
    annotate_variants(&mut calls, &alignments);

    assert!(
        calls
            .iter()
            .all(|v| v.annotations == vec![Annotation::new("rows", "3,7")])
    );

    let kept = FilterConfig::new(5, 30).apply(&calls);
    assert_eq!(kept.len(), 2);
    assert!(kept.iter().all(|v| v.annotation("rows") == Some("3,7")));
}

#[rstest]
fn test_annotate_by_reference() {
    let hits = [AlignmentHit { row_number: 0 }, AlignmentHit { row_number: 12 }];
    let selected: Vec<&AlignmentHit> = hits.iter().rev().collect();
    let mut calls = vec![Variant::new("chr1", 0, 1, "A", "C", "N", "N")];

    annotate_variants(&mut calls, &selected);
    assert_eq!(calls[0].annotation("rows"), Some("12,0"));
}

#[rstest]
fn test_builder_requires_context() {
    let base = || {
        Variant::builder()
            .with_ref_id("chr1")
            .with_interval(10, 11)
            .with_ref_seq("A")
            .with_read_seq1("T")
            .with_read_seq2("G")
            .with_confidence(30)
    };

    assert_eq!(
        base().with_read_prev("C").finish(),
        Err(VariantError::MissingRefPrev)
    );
    assert_eq!(
        base().with_ref_prev("C").finish(),
        Err(VariantError::MissingReadPrev)
    );

    let built = base().with_ref_prev("C").with_read_prev("C").finish().unwrap();
    assert_eq!(built.to_string(), "Substitution@chr1:10-11 A -> T/G");
}

#[rstest]
fn test_error_messages() {
    assert_eq!(
        VariantError::MissingRefPrev.to_string(),
        "missing ref_prev: the reference base preceding the variant is required"
    );
    assert_eq!(
        VariantError::MissingField("ref_seq").to_string(),
        "missing required variant field: ref_seq"
    );
}
