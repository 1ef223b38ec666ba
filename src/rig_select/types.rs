//! Rig selector type definitions

/// Value of the sentinel option meaning "no rig"
pub const NONE_VALUE: &str = "";

/// Label shown for the sentinel option
pub const NONE_LABEL: &str = "None";

/// One entry of a selector's option list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    /// Value stored as the selection when this option is picked
    pub value: String,
    /// Text displayed in the dropdown
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The `("", "None")` option every selector starts with
    pub fn none() -> Self {
        Self::new(NONE_VALUE, NONE_LABEL)
    }

    /// Option for a rig, labelled with its own name
    pub fn rig(name: &str) -> Self {
        Self::new(name, name)
    }
}

/// A row of the rig list that may carry a rig name
///
/// An empty name means the row has not been filled in yet.
pub trait NameRow {
    fn name(&self) -> &str;
}

impl NameRow for str {
    fn name(&self) -> &str {
        self
    }
}

impl NameRow for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl<T: NameRow + ?Sized> NameRow for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A dropdown whose options track the rig list
pub trait SelectorWidget {
    /// Current selection, `""` when nothing is selected
    fn selection(&self) -> &str;

    /// Select `value`. Values not present in the options are ignored.
    fn set_selection(&mut self, value: &str);

    /// Replace the option list
    fn set_options(&mut self, options: Vec<SelectOption>);
}
