//! Rig selector synchronization
//!
//! Keeps every transport's rig dropdown in step with the editable list of
//! hamlib rig rows. The option list of each selector is rebuilt from the
//! current rig names and its selection is kept when the rig still exists,
//! cleared otherwise.
//!
//! ## Module Structure
//! - `types.rs`: SelectOption, NameRow, SelectorWidget
//! - `widget.rs`: RigSelect, the selector model the UI renders
//! - `pure/`: Pure functions (name derivation, option building, selection resolution)
//! - `operations.rs`: reconcile, applying the pure results to the selectors

mod operations;
mod pure;
mod types;
mod widget;


// Re-export types
pub use types::{NameRow, SelectorWidget};
pub use widget::RigSelect;

// Re-export operations
pub use operations::reconcile;
