//! Plain-text rendering of encounters and session counters.

use std::fmt::Write;

use wildtrek_catalog::{Organism, Stats};
use wildtrek_encounter::{Encounter, SessionStats};

/// Stat value that fills a whole bar.
const MAX_STAT: f64 = 100.0;
const BAR_WIDTH: usize = 20;

/// One-line description of an exploration outcome.
pub fn outcome_line(encounter: &Encounter<'_>, biome: &str) -> String {
    match encounter {
        Encounter::Found(organism) => {
            format!("Found {} ({}) in {biome}!", organism.name(), organism.rarity())
        }
        Encounter::Elusive => format!("Searched {biome} but the animals were too elusive."),
        Encounter::NoWildlife => format!(
            "Searched {biome} but found no wildlife. (No animals in the dataset for this biome)"
        ),
    }
}

/// Multi-line card for an encountered organism.
pub fn organism_card(organism: &Organism) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "== {} [{}] ==", organism.name(), organism.rarity());
    if !organism.scientific_name().is_empty() {
        let _ = writeln!(card, "   {}", organism.scientific_name());
    }
    if !organism.category().is_empty() {
        let _ = writeln!(card, "   Category:  {}", organism.category());
    }
    let _ = writeln!(card, "   Habitats:  {}", organism.habitats().join(", "));
    write_stats(&mut card, organism.stats());
    if !organism.abilities().is_empty() {
        let _ = writeln!(card, "   Abilities: {}", organism.abilities());
    }
    let moves: Vec<&str> = organism.moves().collect();
    if !moves.is_empty() {
        let _ = writeln!(card, "   Moves:     {}", moves.join(" | "));
    }
    if !organism.drops().is_empty() {
        let _ = writeln!(card, "   Drops:     {}", organism.drops());
    }
    if !organism.description().is_empty() {
        let _ = writeln!(card, "   {}", organism.description());
    }
    card
}

/// Session counters as shown at the end of a run.
pub fn summary(stats: &SessionStats) -> String {
    let mut text = format!(
        "Explorations: {}  Encounters: {}  Species found: {}",
        stats.explorations(),
        stats.encounters(),
        stats.species_count()
    );
    if stats.species_count() > 0 {
        let species: Vec<&str> = stats.species_found().iter().map(String::as_str).collect();
        let _ = write!(text, "\n  {}", species.join(", "));
    }
    text
}

fn write_stats(card: &mut String, stats: Stats) {
    for (label, value) in [
        ("ATK", stats.attack),
        ("DEF", stats.defense),
        ("HP ", stats.health),
        ("SPD", stats.speed),
    ] {
        let _ = writeln!(card, "   {label} {} {value}", stat_bar(value));
    }
}

/// Fixed-width bar, full at [`MAX_STAT`]. Values outside `0..=MAX_STAT`
/// (and NaN) are clamped for drawing only.
fn stat_bar(value: f64) -> String {
    let fraction = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, MAX_STAT) / MAX_STAT
    };
    let filled = (fraction * BAR_WIDTH as f64).floor() as usize;
    let empty = BAR_WIDTH - filled;
    format!("{}{}", "#".repeat(filled), ".".repeat(empty))
}
