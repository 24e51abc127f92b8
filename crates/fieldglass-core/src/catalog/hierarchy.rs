use super::{FieldId, FieldRecord};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::collections::HashSet;

/// A field record with its direct children attached.
///
/// Produced by [`build_forest`]; never persisted. A leaf carries an empty
/// `children` vec, not an absent one.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldNode {
    pub record: FieldRecord,
    pub children: Vec<FieldNode>,
}

impl FieldNode {
    pub fn record(&self) -> &FieldRecord {
        &self.record
    }

    pub fn children(&self) -> &[FieldNode] {
        &self.children
    }

    /// All records in this subtree, depth-first, self first.
    pub fn flatten(&self) -> Vec<&FieldRecord> {
        let mut out = vec![&self.record];
        for child in &self.children {
            out.extend(child.flatten());
        }
        out
    }
}

/// Reorganizes a flat snapshot of field records into a forest, attaching each
/// field's children under it.
///
/// Roots are the records with no parent, in input discovery order; sibling
/// order likewise follows the input. Records whose parent id never appears in
/// the input are silently excluded — they are neither roots nor reachable.
///
/// Fails with a duplicate-id error when the input repeats an id, and with a
/// cycle error when a record is its own parent. The input is not mutated;
/// records are cloned into the nodes.
pub fn build_forest(fields: &[FieldRecord]) -> Result<Vec<FieldNode>> {
    build_forest_by(fields, |field| field.parent_id)
}

/// [`build_forest`] with a caller-supplied parent selector, for callers whose
/// nesting key is not `parent_id`.
pub fn build_forest_by(
    fields: &[FieldRecord],
    parent_key: impl Fn(&FieldRecord) -> Option<FieldId>,
) -> Result<Vec<FieldNode>> {
    let mut seen = HashSet::with_capacity(fields.len());
    for field in fields {
        if !seen.insert(field.id) {
            return Err(Error::duplicate_id(field.id.0));
        }
        if parent_key(field) == Some(field.id) {
            return Err(Error::cycle(format!(
                "field {} is its own parent",
                field.id.0
            )));
        }
    }

    // Group by parent id, preserving discovery order within and across
    // groups. The `None` group forms the roots.
    let mut groups: IndexMap<Option<FieldId>, Vec<&FieldRecord>> = IndexMap::new();
    for field in fields {
        groups.entry(parent_key(field)).or_default().push(field);
    }

    let roots = match groups.get(&None) {
        Some(roots) => roots.clone(),
        None => vec![],
    };

    Ok(roots.into_iter().map(|root| attach(root, &groups)).collect())
}

// Each record lives in exactly one group (keyed by its own parent), so the
// walk from the roots visits every reachable record once and terminates.
fn attach(record: &FieldRecord, groups: &IndexMap<Option<FieldId>, Vec<&FieldRecord>>) -> FieldNode {
    let children = groups
        .get(&Some(record.id))
        .map(|children| {
            children
                .iter()
                .map(|child| attach(child, groups))
                .collect()
        })
        .unwrap_or_default();

    FieldNode {
        record: record.clone(),
        children,
    }
}
