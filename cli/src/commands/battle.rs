use std::io::Write;
use std::path::Path;

use anyhow::Result;
use clap::Args;
use trainer_coverage::{Pokedex, StatSet};
use trainer_records::DataSource;

use super::{load_tracker, save_roster};
use crate::display;

/// Record battles won by a tracked Pokemon
#[derive(Args, Debug)]
pub struct Battle {
    /// Tracked Pokemon id
    pub pokemon: u32,

    /// Defeated species, pokedex id or name
    pub species: String,

    /// Number of times the species was defeated
    #[arg(short, long, default_value_t = 1)]
    pub count: u32,
}

impl Battle {
    pub fn execute<S: DataSource, W: Write>(
        self,
        dex: &mut Pokedex<S>,
        path: &Path,
        out: &mut W,
    ) -> Result<()> {
        let defeated = dex.species(&self.species.parse()?)?;
        let mut tracker = load_tracker(path, dex)?;

        let gained = tracker.battle(self.pokemon, &defeated, self.count)?;
        save_roster(tracker.roster(), path)?;

        let pokemon = tracker.roster().get_pokemon(self.pokemon)?;
        writeln!(
            out,
            "{} defeated {} x{}: {}",
            pokemon.name(),
            defeated.name(),
            self.count,
            display::stat_gains(&gained)
        )?;
        writeln!(
            out,
            "EVs ({}/{})\n{}",
            pokemon.evs.total(),
            StatSet::MAX_TOTAL,
            display::stat_block(&pokemon.evs)
        )?;
        Ok(())
    }
}
