//! Radio config page pipelines - config in, config out

mod apply_config;
mod collect_config;

pub use apply_config::apply_config;
pub use collect_config::collect_config;
