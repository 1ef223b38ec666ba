mod io;

pub use io::{load_config, save_config};
