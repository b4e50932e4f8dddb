use std::collections::{BTreeMap, BTreeSet};

use crate::model::{CodeId, FieldId, UnitCoding};

/// A versioned set of valid codes bound to a coding schema field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codebook {
    pub id: u64,
    pub codes: BTreeSet<CodeId>,
}

/// Returns the schema fields whose codings reference a code that is absent
/// from the codebook currently bound to that field.
///
/// Diagnostic only: the result feeds the warning banner and never mutates or
/// blocks anything. Text-only values and fields without a bound codebook are
/// never reported.
pub fn lost_code_fields(
    codings: &[UnitCoding],
    codebooks: &BTreeMap<FieldId, Codebook>,
) -> BTreeSet<FieldId> {
    let mut lost = BTreeSet::new();
    for coding in codings {
        for value in &coding.values {
            let Some(code) = value.code else { continue };
            let Some(codebook) = codebooks.get(&value.field) else { continue };
            if !codebook.codes.contains(&code) {
                lost.insert(value.field);
            }
        }
    }
    lost
}
