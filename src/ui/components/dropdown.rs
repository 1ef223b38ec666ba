//! Dropdown component for rig selectors
//!
//! Renders a `RigSelect` option list as a combo box. The component only
//! reports what was picked; applying it to the selector is up to the caller.

use eframe::egui;

use crate::rig_select::{RigSelect, SelectorWidget};

/// An item in the dropdown list
pub struct DropdownItem<T> {
    /// The value this item represents
    pub value: T,
    /// Display label for the item
    pub label: String,
    /// Whether this item is the current selection
    pub is_selected: bool,
}

impl<T> DropdownItem<T> {
    pub fn new(value: T, label: impl Into<String>, is_selected: bool) -> Self {
        Self {
            value,
            label: label.into(),
            is_selected,
        }
    }
}

/// Response from rendering a dropdown
pub struct DropdownResponse<T> {
    /// An item was clicked - caller should apply the value
    pub selected: Option<T>,
}

/// Items for a rig selector, one per option
pub fn rig_items(select: &RigSelect) -> Vec<DropdownItem<String>> {
    select
        .options()
        .iter()
        .map(|opt| {
            DropdownItem::new(
                opt.value.clone(),
                opt.label.clone(),
                opt.value == select.selection(),
            )
        })
        .collect()
}

/// Render a dropdown
///
/// # Arguments
/// * `ui` - The egui UI context
/// * `id` - Unique ID for this dropdown
/// * `button_text` - Text shown on the closed dropdown
/// * `width` - Width of the dropdown
/// * `items` - Items to display
pub fn render_dropdown<T: Clone>(
    ui: &mut egui::Ui,
    id: &str,
    button_text: &str,
    width: f32,
    items: &[DropdownItem<T>],
) -> DropdownResponse<T> {
    let mut response = DropdownResponse { selected: None };

    egui::ComboBox::from_id_salt(id)
        .selected_text(button_text)
        .width(width)
        .show_ui(ui, |ui| {
            for item in items {
                if ui.selectable_label(item.is_selected, &item.label).clicked() {
                    response.selected = Some(item.value.clone());
                }
            }
        });

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rig_select::reconcile;

    #[test]
    fn test_rig_items_mark_selection() {
        let mut select = RigSelect::new("ardop_rig");
        reconcile(&["digirig", "ft991"], [&mut select]);
        select.set_selection("ft991");

        let items = rig_items(&select);

        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["None", "digirig", "ft991"]);
        let selected: Vec<bool> = items.iter().map(|i| i.is_selected).collect();
        assert_eq!(selected, vec![false, false, true]);
    }

    #[test]
    fn test_duplicate_rigs_are_all_marked() {
        let mut select = RigSelect::new("ardop_rig");
        reconcile(&["digirig", "digirig"], [&mut select]);
        select.set_selection("digirig");

        let marked = rig_items(&select).iter().filter(|i| i.is_selected).count();
        assert_eq!(marked, 2);
    }
}
