//! Rig name derivation from the rig rows

use crate::rig_select::types::NameRow;

/// Collect the rig names of `rows` in row order
///
/// Rows without a name are skipped. Names are taken verbatim: no trimming,
/// no case folding and duplicates are kept.
pub fn derive_rig_names<R: NameRow>(rows: &[R]) -> Vec<&str> {
    rows.iter()
        .map(NameRow::name)
        .filter(|name| !name.is_empty())
        .collect()
}
