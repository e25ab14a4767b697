//! Preset catalog commands.
//!
//! Provides commands to list, search, validate, and export preset catalogs.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use revpanel_config::{
    Catalog, ConfigError, Preset, factory_catalog, find_catalog, system_catalog_path,
    user_catalog_path,
};

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    command: CatalogCommand,
}

#[derive(Subcommand)]
enum CatalogCommand {
    /// List categories and their presets
    List {
        /// Catalog file (default: installed catalog, else factory presets)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details of a preset
    Show {
        /// Preset id
        id: String,

        /// Catalog file (default: installed catalog, else factory presets)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Search presets by name (case-insensitive)
    Search {
        /// Text to look for
        query: String,

        /// Catalog file (default: installed catalog, else factory presets)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Check a catalog file for errors
    Validate {
        /// Catalog file to check
        path: PathBuf,
    },

    /// Write the factory catalog to a file for customization
    Export {
        /// Destination file
        path: PathBuf,

        /// Overwrite if the file already exists
        #[arg(long)]
        force: bool,
    },

    /// Show catalog locations
    Paths,
}

pub fn run(args: CatalogArgs) -> anyhow::Result<()> {
    match args.command {
        CatalogCommand::List { file, json } => list(file.as_deref(), json),
        CatalogCommand::Show { id, file } => show(&id, file.as_deref()),
        CatalogCommand::Search { query, file } => search(&query, file.as_deref()),
        CatalogCommand::Validate { path } => validate(&path),
        CatalogCommand::Export { path, force } => export(&path, force),
        CatalogCommand::Paths => paths(),
    }
}

/// Load `file`, or the installed catalog, or the factory catalog.
///
/// An explicit file that fails to load is an error.
fn open_catalog(file: Option<&Path>) -> anyhow::Result<Catalog> {
    if let Some(path) = file {
        return Ok(Catalog::load(path)?);
    }
    match find_catalog(None) {
        Some(path) => {
            tracing::info!(path = %path.display(), "using installed catalog");
            Ok(Catalog::load(&path)?)
        }
        None => Ok(factory_catalog()),
    }
}

fn list(file: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let catalog = open_catalog(file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    for category in &catalog.categories {
        println!("{}:", category.name);
        let mut presets = catalog.presets_in(&category.id).peekable();
        if presets.peek().is_none() {
            println!("  (none)");
        }
        for preset in presets {
            println!("  {:16} {}", preset.id, preset.name);
        }
        println!();
    }
    println!(
        "{} categories, {} presets",
        catalog.categories.len(),
        catalog.len()
    );

    Ok(())
}

fn show(id: &str, file: Option<&Path>) -> anyhow::Result<()> {
    let catalog = open_catalog(file)?;
    let preset = catalog.require_preset(id)?;
    let category = catalog
        .category(&preset.category)
        .map_or(preset.category.as_str(), |c| c.name.as_str());

    println!("Preset: {}", preset.name);
    println!("{}", "=".repeat(8 + preset.name.len()));
    println!();
    println!("Id:       {}", preset.id);
    println!("Category: {category}");
    if !preset.tags.is_empty() {
        println!("Tags:     {}", preset.tags.join(", "));
    }
    if !preset.description.is_empty() {
        println!();
        println!("{}", preset.description);
    }

    Ok(())
}

fn search(query: &str, file: Option<&Path>) -> anyhow::Result<()> {
    let catalog = open_catalog(file)?;
    let matches: Vec<&Preset> = catalog.search(query).collect();

    if matches.is_empty() {
        println!("No presets match '{query}'");
        return Ok(());
    }
    for preset in matches {
        println!("  {:16} {:20} [{}]", preset.id, preset.name, preset.category);
    }

    Ok(())
}

fn validate(path: &Path) -> anyhow::Result<()> {
    match Catalog::load(path) {
        Ok(catalog) => {
            println!(
                "{}: OK ({} categories, {} presets)",
                path.display(),
                catalog.categories.len(),
                catalog.len()
            );
            Ok(())
        }
        Err(ConfigError::Validation(err)) => {
            let errors = err.into_vec();
            eprintln!("{}: {} problem(s)", path.display(), errors.len());
            for error in &errors {
                eprintln!("  - {error}");
            }
            anyhow::bail!("catalog '{}' is invalid", path.display())
        }
        Err(err) => Err(err.into()),
    }
}

fn export(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()).into());
    }

    factory_catalog().save(path)?;
    println!("Wrote factory catalog to {}", path.display());

    Ok(())
}

fn paths() -> anyhow::Result<()> {
    let user = user_catalog_path();
    let system = system_catalog_path();
    let active = find_catalog(None);

    println!("User catalog:   {}", user.display());
    println!("System catalog: {}", system.display());
    match active {
        Some(path) => println!("Active:         {}", path.display()),
        None => println!("Active:         (factory presets)"),
    }

    Ok(())
}
