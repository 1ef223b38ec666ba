//! Pure functions for rig selector synchronization
//!
//! These functions have no side effects and are deterministic.

mod names;
mod options;

pub use names::derive_rig_names;
pub use options::{build_rig_options, resolve_selection};
