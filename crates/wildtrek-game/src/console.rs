//! Line-oriented play session.
//!
//! One [`Console`] owns one [`Expedition`], so counters keep accumulating as
//! the player moves between biomes until the session ends.

use std::io::{self, BufRead, Write};

use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::{info, warn};
use wildtrek_catalog::Catalog;
use wildtrek_encounter::{
    EncounterError, EncounterSelector, Expedition, ExpeditionError, encounter_rng,
};

use crate::card;
use crate::settings::Settings;

const HELP: &str = "\
Commands:
  biome <name>   enter a biome
  explore [n]    explore the current biome n times (default 1)
  camp           return to base camp
  biomes         list the biomes in the dataset
  stats          show session counters
  reload         re-read config.ron
  help           show this list
  quit           end the session";

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// One parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Biome(String),
    Explore(u32),
    Camp,
    Biomes,
    Stats,
    Reload,
    Help,
    Quit,
}

/// Input the console could not understand.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`; type `help` for a list")]
    Unknown(String),
    #[error("`biome` needs a name, e.g. `biome Forest`")]
    MissingBiome,
    #[error("`{0}` is not a number of explorations")]
    BadCount(String),
}

impl Command {
    /// Parses one line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "biome" | "enter" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingBiome);
                }
                Command::Biome(rest.to_string())
            }
            "explore" | "x" => {
                if rest.is_empty() {
                    Command::Explore(1)
                } else {
                    let count = rest
                        .parse()
                        .map_err(|_| CommandError::BadCount(rest.to_string()))?;
                    Command::Explore(count)
                }
            }
            "camp" | "back" => Command::Camp,
            "biomes" | "list" => Command::Biomes,
            "stats" => Command::Stats,
            "reload" => Command::Reload,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

// ---------------------------------------------------------------------------
// Console
// ---------------------------------------------------------------------------

/// Whether the session continues after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A play session bound to one catalog.
pub struct Console<'c> {
    expedition: Expedition<'c>,
    settings: Settings,
    rng: ChaCha8Rng,
}

impl<'c> Console<'c> {
    /// Starts a session at base camp using the encounter settings in force.
    pub fn new(catalog: &'c Catalog, settings: Settings) -> Result<Self, EncounterError> {
        let encounter = &settings.config().encounter;
        let selector = EncounterSelector::from_config(encounter)?;
        let rng = encounter_rng(encounter.seed);
        Ok(Self {
            expedition: Expedition::new(catalog, selector),
            settings,
            rng,
        })
    }

    /// The session state.
    pub fn expedition(&self) -> &Expedition<'c> {
        &self.expedition
    }

    /// Reads commands from `input` until `quit` or end of input, then prints
    /// the session summary.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "At base camp. Type `help` for commands.")?;
        prompt(out)?;
        for line in input.lines() {
            let flow = match Command::parse(&line?) {
                Ok(Some(command)) => self.execute(command, out)?,
                Ok(None) => Flow::Continue,
                Err(e) => {
                    writeln!(out, "{e}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
            prompt(out)?;
        }
        writeln!(out)?;
        self.finish(out)
    }

    /// Visits each biome in turn, exploring it `explorations` times, then
    /// prints the session summary.
    pub fn run_route<W: Write>(
        &mut self,
        biomes: &[String],
        explorations: u32,
        out: &mut W,
    ) -> io::Result<()> {
        for biome in biomes {
            self.execute(Command::Biome(biome.clone()), out)?;
            self.execute(Command::Explore(explorations), out)?;
            self.execute(Command::Camp, out)?;
        }
        self.finish(out)
    }

    /// Runs one command.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        match command {
            Command::Biome(name) => match self.expedition.enter_biome(&name) {
                Ok(()) => writeln!(out, "Entered {} biome. Ready to explore!", name.trim())?,
                Err(e) => writeln!(out, "{e}")?,
            },
            Command::Explore(count) => self.explore(count, out)?,
            Command::Camp => match self.expedition.return_to_camp() {
                Some(_) => writeln!(out, "Returned to base camp.")?,
                None => writeln!(out, "Already at base camp.")?,
            },
            Command::Biomes => write_biomes(self.expedition.catalog(), out)?,
            Command::Stats => writeln!(out, "{}", card::summary(self.expedition.stats()))?,
            Command::Reload => self.reload(out)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn explore<W: Write>(&mut self, count: u32, out: &mut W) -> io::Result<()> {
        for _ in 0..count {
            let encounter = match self.expedition.explore(&mut self.rng) {
                Ok(encounter) => encounter,
                Err(ExpeditionError::NoActiveBiome) => {
                    writeln!(out, "You are at base camp. Enter a biome first.")?;
                    return Ok(());
                }
                Err(e) => {
                    writeln!(out, "{e}")?;
                    return Ok(());
                }
            };
            let biome = self.expedition.current_biome().unwrap_or_default();
            writeln!(out, "{}", card::outcome_line(&encounter, biome))?;
            if let Some(organism) = encounter.organism() {
                write!(out, "{}", card::organism_card(organism))?;
            }
        }
        Ok(())
    }

    fn reload<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.settings.reload() {
            Ok(true) => {
                match EncounterSelector::from_config(&self.settings.config().encounter) {
                    Ok(selector) => {
                        self.expedition.set_selector(selector);
                        info!("Encounter settings reloaded");
                        writeln!(out, "Config reloaded; encounter settings updated.")?;
                    }
                    Err(e) => {
                        warn!("Reloaded encounter settings rejected: {e}");
                        writeln!(out, "Reloaded config rejected: {e}")?;
                    }
                }
            }
            Ok(false) => writeln!(out, "Config unchanged.")?,
            Err(e) => {
                warn!("Config reload failed: {e}");
                writeln!(out, "Config reload failed: {e}")?;
            }
        }
        Ok(())
    }

    fn finish<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.expedition.return_to_camp();
        writeln!(out, "{}", card::summary(self.expedition.stats()))
    }
}

/// Lists every biome with the number of species living there.
pub fn write_biomes<W: Write>(catalog: &Catalog, out: &mut W) -> io::Result<()> {
    writeln!(out, "Biomes ({} organisms):", catalog.len())?;
    for habitat in catalog.distinct_habitats() {
        let count = catalog.query_by_habitat(&habitat).len();
        writeln!(out, "  {habitat:<12} {count} species")?;
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
