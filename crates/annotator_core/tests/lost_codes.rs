use std::collections::{BTreeMap, BTreeSet};

use annotator_core::{lost_code_fields, Codebook, CodingValue, FieldId, UnitCoding};

fn codebook(codes: &[u64]) -> Codebook {
    Codebook {
        id: 100,
        codes: codes.iter().copied().collect(),
    }
}

fn coding(values: Vec<CodingValue>) -> UnitCoding {
    UnitCoding {
        sentence: Some(1),
        values,
    }
}

fn code_value(field: FieldId, code: u64) -> CodingValue {
    CodingValue {
        field,
        code: Some(code),
        text: None,
    }
}

#[test]
fn empty_codings_yield_empty_set() {
    let codebooks = BTreeMap::from([(10, codebook(&[1, 2, 3]))]);
    assert!(lost_code_fields(&[], &codebooks).is_empty());
}

#[test]
fn code_missing_from_bound_codebook_flags_the_field() {
    // Article coded with code 7, while the codebook bound to field 10 only
    // contains {1, 2, 3}.
    let codebooks = BTreeMap::from([(10, codebook(&[1, 2, 3]))]);
    let codings = vec![coding(vec![code_value(10, 7)])];

    let lost = lost_code_fields(&codings, &codebooks);
    assert_eq!(lost, BTreeSet::from([10]));
}

#[test]
fn valid_codes_are_not_flagged() {
    let codebooks = BTreeMap::from([(10, codebook(&[1, 2, 3]))]);
    let codings = vec![coding(vec![code_value(10, 2)])];

    assert!(lost_code_fields(&codings, &codebooks).is_empty());
}

#[test]
fn text_values_and_unbound_fields_are_ignored() {
    let codebooks = BTreeMap::from([(10, codebook(&[1]))]);
    let codings = vec![coding(vec![
        // Free-text value on a bound field: nothing to look up.
        CodingValue {
            field: 10,
            code: None,
            text: Some("quoted source".to_string()),
        },
        // Code on a field with no bound codebook.
        code_value(99, 7),
    ])];

    assert!(lost_code_fields(&codings, &codebooks).is_empty());
}

#[test]
fn fields_across_units_are_collected_once() {
    let codebooks = BTreeMap::from([
        (10, codebook(&[1, 2])),
        (11, codebook(&[5])),
    ]);
    let codings = vec![
        coding(vec![code_value(10, 9), code_value(11, 5)]),
        coding(vec![code_value(10, 8), code_value(11, 6)]),
    ];

    let lost = lost_code_fields(&codings, &codebooks);
    assert_eq!(lost, BTreeSet::from([10, 11]));
}

#[test]
fn result_is_deterministic() {
    let codebooks = BTreeMap::from([(10, codebook(&[1])), (11, codebook(&[2]))]);
    let codings = vec![coding(vec![code_value(11, 3), code_value(10, 4)])];

    let first = lost_code_fields(&codings, &codebooks);
    let second = lost_code_fields(&codings, &codebooks);
    assert_eq!(first, second);
    assert_eq!(first, BTreeSet::from([10, 11]));
}
