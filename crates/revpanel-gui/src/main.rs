//! revpanel GUI - reverb control surface in a native window.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use revpanel_gui::{RevPanelApp, load_catalog};

/// revpanel reverb control surface.
#[derive(Parser, Debug)]
#[command(name = "revpanel-gui")]
#[command(about = "Reverb control surface with preset browser")]
#[command(version)]
struct Args {
    /// Preset catalog to load (default: user, then system catalog, then factory presets)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Preset id selected at startup
    #[arg(long)]
    preset: Option<String>,
}

fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Initialize tracing subscriber; bridge legacy log:: calls from eframe/egui
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();

    tracing::info!("Starting revpanel");
    let catalog = load_catalog(args.catalog.as_deref());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 520.0])
            .with_min_inner_size([680.0, 460.0])
            .with_title("revpanel"),
        ..Default::default()
    };

    let preset = args.preset;
    eframe::run_native(
        "revpanel",
        options,
        Box::new(move |cc| Ok(Box::new(RevPanelApp::new(cc, catalog, preset.as_deref())))),
    )
}
