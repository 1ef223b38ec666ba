//! Rig selector operations - applies the pure results to the selectors

use crate::rig_select::pure::{build_rig_options, derive_rig_names, resolve_selection};
use crate::rig_select::types::{NameRow, SelectorWidget};

/// Rebuild every selector's options from the rig rows
///
/// Each selector gets `None` followed by the named rows in order. A
/// selector keeps its rig when that name is still present and falls back
/// to `None` otherwise. The rows are only read.
///
/// Call this after every row edit and after rows are populated from a
/// loaded config. Selections restored from config must be set after this
/// runs, or the options they refer to will not exist yet.
pub fn reconcile<'w, R, W, I>(rows: &[R], widgets: I)
where
    R: NameRow,
    W: SelectorWidget + ?Sized + 'w,
    I: IntoIterator<Item = &'w mut W>,
{
    let names = derive_rig_names(rows);
    let options = build_rig_options(&names);

    let mut synced = 0usize;
    let mut cleared = 0usize;
    for widget in widgets {
        let prev = widget.selection().to_string();
        widget.set_options(options.clone());

        let next = resolve_selection(&prev, &names);
        if next != prev {
            cleared += 1;
        }
        widget.set_selection(next);
        synced += 1;
    }

    tracing::debug!(
        rows = rows.len(),
        rigs = names.len(),
        selectors = synced,
        cleared,
        "reconciled rig selectors"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rig_select::types::SelectOption;
    use crate::rig_select::RigSelect;

    #[test]
    fn test_reconcile_through_trait_objects() {
        let mut a = RigSelect::new("ardop_rig");
        let mut b = RigSelect::new("ax25_rig");
        let widgets: Vec<&mut dyn SelectorWidget> = vec![&mut a, &mut b];

        reconcile(&["digirig"], widgets);

        assert_eq!(
            a.options(),
            &[SelectOption::none(), SelectOption::rig("digirig")]
        );
        assert_eq!(b.options().len(), 2);
    }

    #[test]
    fn test_reconcile_empty_source_clears_all() {
        let mut select = RigSelect::new("varahf_rig");
        reconcile(&["ft991"], [&mut select]);
        select.set_selection("ft991");

        let rows: [&str; 0] = [];
        reconcile(&rows, [&mut select]);

        assert_eq!(select.options(), &[SelectOption::none()]);
        assert_eq!(select.selection(), "");
    }
}
