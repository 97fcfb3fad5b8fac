//! `pokemon-trainer`: look up species, types and moves, and track effort
//! value training for a roster of Pokemon.

mod commands;
mod display;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use commands::Command;
use trainer_client::PokeApiClient;
use trainer_coverage::Pokedex;
use tracing_subscriber::EnvFilter;

const ROSTER_FILENAME: &str = ".pokemon-trainer";

#[derive(Parser, Debug)]
#[command(name = "pokemon-trainer")]
#[command(about = "Pokemon lookups and effort value training", long_about = None)]
#[command(version)]
struct Cli {
    /// Roster file to load and save; created on first save
    #[arg(short, long, env = "POKEMON_TRAINER_FILE", global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let path = match cli.file {
        Some(path) => path,
        None => default_roster_path()?,
    };
    tracing::debug!(path = %path.display(), "using roster file");

    let client = PokeApiClient::from_env()?;
    let mut dex = Pokedex::new(client);
    let mut out = io::stdout().lock();

    cli.command.run(&mut dex, &path, &mut out)
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn default_roster_path() -> Result<PathBuf> {
    let dirs = directories::BaseDirs::new().context("Could not determine the home directory")?;
    Ok(dirs.home_dir().join(ROSTER_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use trainer_records::MemorySource;
    use trainer_records::testing::fixture_source;

    struct Harness {
        _dir: tempfile::TempDir,
        path: PathBuf,
        dex: Pokedex<MemorySource>,
    }

    impl Harness {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("roster");
            Self {
                _dir: dir,
                path,
                dex: Pokedex::new(fixture_source()),
            }
        }

        fn run(&mut self, args: &[&str]) -> (Result<()>, String) {
            let path = self.path.to_str().unwrap().to_string();
            let mut argv = vec!["pokemon-trainer", "-f", path.as_str()];
            argv.extend_from_slice(args);

            let cli = Cli::try_parse_from(argv).unwrap();
            assert_eq!(cli.file.as_deref(), Some(Path::new(&path)));

            let mut out = Vec::new();
            let result = cli.command.run(&mut self.dex, &self.path, &mut out);
            (result, String::from_utf8(out).unwrap())
        }

        fn ok(&mut self, args: &[&str]) -> String {
            let (result, out) = self.run(args);
            result.unwrap();
            out
        }
    }

    #[test]
    fn test_species_batch_continues_after_failure() {
        let mut harness = Harness::new();

        let (result, out) = harness.run(&["species", "pikachu", "nosuchmon", "94"]);

        assert!(result.is_err());
        assert!(out.contains("#025 pikachu"));
        assert!(out.contains("nosuchmon failed"));
        assert!(out.contains("#094 gengar"));
    }

    #[test]
    fn test_type_and_move_lookups() {
        let mut harness = Harness::new();

        let out = harness.ok(&["type", "ghost"]);
        assert!(out.starts_with("ghost"));
        assert!(out.contains("Offensive Type Effectiveness"));

        let out = harness.ok(&["move", "Thunderbolt"]);
        assert!(out.contains("thunderbolt (special, electric, Generation I)"));
        assert!(out.contains("power:    90"));
    }

    #[test]
    fn test_lookup_does_not_create_roster_file() {
        let mut harness = Harness::new();
        harness.ok(&["species", "1"]);
        assert!(!harness.path.exists());
    }

    #[test]
    fn test_add_and_list_pokemon() {
        let mut harness = Harness::new();

        let out = harness.ok(&[
            "pokemon", "add", "pikachu", "-n", "Sparky", "-i", "power anklet", "-m",
            "thunderbolt",
        ]);
        assert!(out.contains("#1  Sparky (pikachu)"));

        let out = harness.ok(&["pokemon", "list"]);
        assert!(out.contains("#1  Sparky (pikachu)"));

        let out = harness.ok(&["pokemon", "show", "1"]);
        assert!(out.contains("Item Held: Power Anklet"));
        assert!(out.contains("1. thunderbolt"));
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let mut harness = Harness::new();

        let (result, _) = harness.run(&["pokemon", "add", "pikachu", "-i", "leftovers"]);
        assert!(result.is_err());

        let (result, _) = harness.run(&[
            "pokemon", "add", "pikachu", "-m", "pound", "-m", "ember", "-m", "psychic", "-m",
            "earthquake", "-m", "vine-whip",
        ]);
        assert!(result.is_err());
        assert!(!harness.path.exists());
    }

    #[test]
    fn test_battle_records_effort_values() {
        let mut harness = Harness::new();
        harness.ok(&["pokemon", "add", "pikachu"]);

        let out = harness.ok(&["battle", "1", "gengar", "--count", "2"]);
        assert!(out.contains("+6 Special Attack"));

        let out = harness.ok(&["pokemon", "show", "1"]);
        assert!(out.contains("EVs (6/510)"));
    }

    #[test]
    fn test_team_flow() {
        let mut harness = Harness::new();
        harness.ok(&["pokemon", "add", "pikachu"]);
        harness.ok(&["pokemon", "add", "gengar"]);
        harness.ok(&["team", "create", "main", "--active"]);
        harness.ok(&["team", "set", "1", "first", "1"]);
        harness.ok(&["team", "set", "1", "3", "2"]);

        let out = harness.ok(&["team", "show"]);
        assert!(out.contains("first   #1 pikachu (pikachu)"));
        assert!(out.contains("third   #2 gengar (gengar)"));

        harness.ok(&["pokemon", "remove", "2"]);
        let out = harness.ok(&["team", "show", "1"]);
        assert!(out.contains("third   -"));

        let out = harness.ok(&["team", "list"]);
        assert!(out.contains("*  1  main (1/6)"));
    }

    #[test]
    fn test_team_errors() {
        let mut harness = Harness::new();
        harness.ok(&["team", "create", "spare"]);

        assert!(harness.run(&["team", "show"]).0.is_err());
        assert!(harness.run(&["team", "set", "1", "seventh", "1"]).0.is_err());
        assert!(harness.run(&["team", "set", "1", "first", "5"]).0.is_err());
        assert!(harness.run(&["team", "active", "9"]).0.is_err());

        let out = harness.ok(&["team", "active", "1"]);
        assert!(out.contains("spare"));
        let out = harness.ok(&["team", "active", "--clear"]);
        assert!(out.contains("No active team"));
    }
}
