mod app;
mod config;
mod error;
mod page;
mod paths;
mod rig_select;
mod ui;

use std::path::PathBuf;

use crate::app::RigsyncApp;
use crate::config::load_config;
use crate::paths::default_config_path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rigsync=info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    let config_path = match args.iter().position(|arg| arg == "--config") {
        Some(idx) => match args.get(idx + 1) {
            Some(path) => PathBuf::from(path),
            None => {
                eprintln!("{}", USAGE_TEXT);
                std::process::exit(1);
            }
        },
        None => match default_config_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::error!("{e}");
                std::process::exit(1);
            }
        },
    };

    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([720.0, 520.0])
            .with_min_inner_size([480.0, 320.0])
            .with_title("rigsync"),
        ..Default::default()
    };

    tracing::info!(path = %config_path.display(), "starting rigsync");

    eframe::run_native(
        "rigsync",
        options,
        Box::new(|cc| {
            crate::ui::theme::apply_theme(&cc.egui_ctx);
            Ok(Box::new(RigsyncApp::new(config_path, config)))
        }),
    )
}

static USAGE_TEXT: &str = r#"
Usage: rigsync [OPTIONS]

Edit the hamlib rigs and per-transport rig selection of a config.json.

Options:
    --config <path>   Config file to edit (default: $XDG_CONFIG_HOME/pat/config.json)
    --help            Show this help
"#;
