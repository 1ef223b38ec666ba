//! Radio config page state
//!
//! Holds the editable hamlib rig rows and one rig selector per transport,
//! and keeps the selectors in step with the rows.
//!
//! ## Module Structure
//! - `types.rs`: RigRow, TransportSelect, RigPage
//! - `operations.rs`: Row edits, each followed by a selector sync
//! - `pipelines/`: Config load/collect in the required order

mod operations;
mod pipelines;
mod types;

// Re-export types
pub use types::RigPage;

// Re-export pipelines
pub use pipelines::{apply_config, collect_config};
