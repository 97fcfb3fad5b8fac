use std::io::Write;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use trainer_coverage::{Move, MoveSet, Pokedex};
use trainer_records::DataSource;
use trainer_team::HeldItem;

use super::{load_tracker, save_roster};
use crate::display;

#[derive(Subcommand, Debug)]
pub enum PokemonCommand {
    /// Start tracking a Pokemon
    Add(AddPokemon),

    /// Stop tracking a Pokemon; it is taken off every team
    Remove {
        /// Tracked Pokemon id
        id: u32,
    },

    /// List tracked Pokemon
    List,

    /// Show a tracked Pokemon with its effort values and coverage
    Show {
        /// Tracked Pokemon id
        id: u32,
    },
}

#[derive(Args, Debug)]
pub struct AddPokemon {
    /// Species pokedex id or name
    pub species: String,

    #[arg(short, long)]
    pub nickname: Option<String>,

    /// Held item, e.g. "Macho Brace" or power-anklet
    #[arg(short, long)]
    pub item: Option<String>,

    #[arg(long)]
    pub pokerus: bool,

    /// Known move; repeat for up to four
    #[arg(short, long = "move", value_name = "MOVE")]
    pub moves: Vec<String>,
}

impl PokemonCommand {
    pub fn execute<S: DataSource, W: Write>(
        self,
        dex: &mut Pokedex<S>,
        path: &Path,
        out: &mut W,
    ) -> Result<()> {
        match self {
            PokemonCommand::Add(args) => args.execute(dex, path, out),
            PokemonCommand::Remove { id } => {
                let mut tracker = load_tracker(path, dex)?;
                let removed = tracker.untrack(id)?;
                save_roster(tracker.roster(), path)?;
                writeln!(out, "Stopped tracking {}", display::pokemon_line(&removed))?;
                Ok(())
            }
            PokemonCommand::List => {
                let tracker = load_tracker(path, dex)?;
                let mut any = false;
                for pokemon in tracker.roster().pokemon() {
                    any = true;
                    writeln!(out, "{}", display::pokemon_line(pokemon))?;
                }
                if !any {
                    writeln!(out, "No Pokemon tracked")?;
                }
                Ok(())
            }
            PokemonCommand::Show { id } => {
                let tracker = load_tracker(path, dex)?;
                let pokemon = tracker.roster().get_pokemon(id)?;
                writeln!(out, "{}", display::pokemon_details(pokemon))?;
                Ok(())
            }
        }
    }
}

impl AddPokemon {
    fn execute<S: DataSource, W: Write>(
        self,
        dex: &mut Pokedex<S>,
        path: &Path,
        out: &mut W,
    ) -> Result<()> {
        if self.moves.len() > 4 {
            bail!("A Pokemon knows at most four moves, got {}", self.moves.len());
        }

        let species = dex.species(&self.species.parse()?)?;
        let item = self
            .item
            .as_deref()
            .map(str::parse::<HeldItem>)
            .transpose()?;
        let mut moves = Vec::with_capacity(self.moves.len());
        for name in &self.moves {
            moves.push(dex.move_(&name.parse()?)?);
        }

        let mut tracker = load_tracker(path, dex)?;
        let id = tracker.track(species, self.nickname.as_deref());
        let pokemon = tracker.roster_mut().get_pokemon_mut(id)?;
        pokemon.item = item;
        pokemon.pokerus = self.pokerus;
        pokemon.move_set = move_set(moves);
        let line = display::pokemon_line(pokemon);

        save_roster(tracker.roster(), path)?;
        writeln!(out, "Tracking {line}")?;
        Ok(())
    }
}

fn move_set(moves: Vec<Rc<Move>>) -> Option<MoveSet> {
    let mut moves = moves.into_iter();
    let first = moves.next()?;
    Some(MoveSet::with_moves(
        first,
        moves.next(),
        moves.next(),
        moves.next(),
    ))
}
