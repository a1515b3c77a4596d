//! Raw accession to standardized sample name mapping.
//!
//! Within a group of `n` accessions taken in ascending order, the accession at
//! position `i` is named `<label>_<n - i>`: the lowest accession gets the
//! highest suffix and the highest accession gets `_1`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{AccessionRange, GroupLabel, GroupSpec};

/// Immutable lookup table from raw accession to standardized sample name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameMapping(BTreeMap<String, String>);

impl NameMapping {
    pub fn get(&self, raw: &str) -> Option<&str> {
        self.0.get(raw).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builds the mapping for two accession groups.
///
/// The two ranges must not overlap. If they do, an accession in both gets the
/// name from `group_b`, which is processed second.
pub fn build_name_mapping(
    group_a: &AccessionRange,
    label_a: &GroupLabel,
    group_b: &AccessionRange,
    label_b: &GroupLabel,
) -> NameMapping {
    let mut names = BTreeMap::new();
    insert_group(&mut names, group_a, label_a);
    insert_group(&mut names, group_b, label_b);
    tracing::info!(size = names.len(), "built sample name mapping");
    NameMapping(names)
}

pub fn build_group_mapping(groups: &[GroupSpec; 2]) -> NameMapping {
    let [a, b] = groups;
    build_name_mapping(&a.range, &a.label, &b.range, &b.label)
}

fn insert_group(names: &mut BTreeMap<String, String>, range: &AccessionRange, label: &GroupLabel) {
    let total = range.len();
    tracing::debug!(
        %label,
        range = %range,
        count = total,
        ids = ?range.ids().collect::<Vec<_>>(),
        "mapping accession group"
    );
    for (index, raw) in range.ids().enumerate() {
        names.insert(raw, format!("{label}_{}", total - index));
    }
}
