//! revpanel CLI - inspect preset catalogs and knob value formatting.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "revpanel")]
#[command(author, version, about = "revpanel reverb control surface CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse, validate, and export preset catalogs
    Catalog(commands::catalog::CatalogArgs),

    /// Print the display value for a knob angle
    Format(commands::format::FormatArgs),
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args),
        Commands::Format(args) => commands::format::run(args),
    }
}
