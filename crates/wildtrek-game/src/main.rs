//! Wildtrek terminal front end.
//!
//! Loads the organism catalog, then either lists the biomes it knows about,
//! walks a route of biomes given on the command line, or reads commands from
//! stdin. Session counters span every biome visited in one run.
//!
//! Run with: `cargo run -p wildtrek-game -- --biome Forest --biome Urban --explore 5`

mod card;
mod console;
mod settings;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use wildtrek_catalog::{Catalog, DataError, ParseMode};
use wildtrek_config::{CliArgs, DataConfig};

use crate::console::Console;
use crate::settings::Settings;

const APP_NAME: &str = "wildtrek";

/// CLI arguments for the game binary.
#[derive(Parser, Debug)]
#[command(name = "wildtrek", about = "Explore biomes and see what wildlife turns up")]
struct GameArgs {
    #[command(flatten)]
    overrides: CliArgs,

    /// Biome to explore; repeat to visit several in order. Without it the
    /// game reads commands from stdin.
    #[arg(long = "biome", value_name = "NAME")]
    biomes: Vec<String>,

    /// Number of explorations to make in each `--biome`.
    #[arg(long, default_value_t = 1)]
    explore: u32,

    /// List the biomes in the dataset and exit.
    #[arg(long)]
    list_biomes: bool,
}

fn main() -> ExitCode {
    let args = GameArgs::parse();

    let settings = match Settings::load(args.overrides) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{APP_NAME}: {e}");
            return ExitCode::FAILURE;
        }
    };
    let config = settings.config();

    wildtrek_log::init_logging(
        config.debug.log_dir.as_deref(),
        cfg!(debug_assertions),
        Some(config),
    );
    if let Some(dir) = settings.dir() {
        info!("Using config directory {}", dir.display());
    }
    info!(
        "Encounter scheme {:?}, null chance {}",
        config.encounter.scheme, config.encounter.null_encounter_chance
    );

    let catalog = match load_catalog(&config.data) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("{APP_NAME}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list_biomes {
        return match console::write_biomes(&catalog, &mut out) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{APP_NAME}: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let mut console = match Console::new(&catalog, settings) {
        Ok(console) => console,
        Err(e) => {
            eprintln!("{APP_NAME}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = if args.biomes.is_empty() {
        console.run(io::stdin().lock(), &mut out)
    } else {
        console.run_route(&args.biomes, args.explore, &mut out)
    };

    let stats = console.expedition().stats();
    info!(
        "Session over: {} explorations, {} encounters, {} species",
        stats.explorations(),
        stats.encounters(),
        stats.species_count()
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{APP_NAME}: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Load the dataset named by `data`, falling back to the built-in organisms
/// when allowed.
fn load_catalog(data: &DataConfig) -> Result<Catalog, DataError> {
    let mode = if data.recover_embedded_json {
        ParseMode::Recover
    } else {
        ParseMode::Strict
    };

    match Catalog::from_path(&data.organisms_path, mode) {
        Ok(catalog) => Ok(catalog),
        Err(e) if data.builtin_fallback => {
            warn!("{e}; using built-in organisms");
            Ok(Catalog::builtin())
        }
        Err(e) => Err(e),
    }
}
