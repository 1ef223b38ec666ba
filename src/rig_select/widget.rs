//! Selector model rendered by the transport dropdowns

use crate::rig_select::types::{SelectOption, SelectorWidget, NONE_VALUE};

/// Rig dropdown state for one transport
///
/// Behaves like an HTML `<select>`: it always holds an option list, the
/// selection is one of the option values, and selecting a value that is
/// not in the list does nothing.
#[derive(Clone, Debug)]
pub struct RigSelect {
    id: String,
    options: Vec<SelectOption>,
    selection: String,
}

impl RigSelect {
    /// New selector holding only the "None" option
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            options: vec![SelectOption::none()],
            selection: NONE_VALUE.to_string(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Selected rig name, `None` for the sentinel
    pub fn selected_rig(&self) -> Option<&str> {
        if self.selection == NONE_VALUE {
            None
        } else {
            Some(&self.selection)
        }
    }

    /// Label of the selected option
    pub fn selected_label(&self) -> &str {
        self.options
            .iter()
            .find(|opt| opt.value == self.selection)
            .map(|opt| opt.label.as_str())
            .unwrap_or(&self.selection)
    }

    fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|opt| opt.value == value)
    }
}

impl SelectorWidget for RigSelect {
    fn selection(&self) -> &str {
        &self.selection
    }

    fn set_selection(&mut self, value: &str) {
        if self.has_option(value) {
            self.selection = value.to_string();
        } else {
            tracing::trace!(id = %self.id, value, "ignoring selection of missing option");
        }
    }

    fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        if !self.has_option(&self.selection) {
            // Fall back to the first option, like a rebuilt <select>
            self.selection = self
                .options
                .first()
                .map(|opt| opt.value.clone())
                .unwrap_or_default();
        }
    }
}
