mod app;
mod eframe_impl;
mod pages_rigs;
mod pages_transports;
mod top_bar;

pub use app::RigsyncApp;
