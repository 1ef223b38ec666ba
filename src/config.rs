pub mod operations;
pub mod types;

// Re-export types
pub use types::{HamlibRig, RigsyncConfig, Transport};

// Re-export operations
pub use operations::{load_config, save_config};
