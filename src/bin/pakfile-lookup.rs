//! Command-line lookup of which pakfiles contain a game object.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pakfile_lookup::{PakCatalog, group_matches};

/// Find which pakfiles contain a game object, by exact object name.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the JSON catalog dump of indexed pakfile contents.
    catalog: PathBuf,

    /// Object base name to look up (no wildcards).
    name: String,

    /// Print raw in-pak paths instead of resolved in-game paths.
    #[arg(long)]
    raw: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = PakCatalog::load_from_path(&cli.catalog)
        .with_context(|| format!("failed to load catalog {}", cli.catalog.display()))?;

    let matches = catalog.search(&cli.name);
    if matches.is_empty() {
        println!("No results found for {}", cli.name);
        return Ok(());
    }

    for patch in group_matches(&matches) {
        println!("Data from {} ({})", patch.released, patch.description);
        for pak in &patch.paks {
            println!("  {} (mountpoint {})", pak.pak_name, pak.mountpoint);
            for entry in &pak.entries {
                if cli.raw {
                    println!("    {}", entry.full_path);
                } else {
                    println!("    {}", entry.real_path);
                }
            }
        }
        println!();
    }

    Ok(())
}
