//! Reading and writing the roster file

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use trainer_coverage::Pokedex;
use trainer_records::DataSource;

use crate::RosterError;
use crate::document::RosterDocument;
use crate::roster::Roster;

/// Where [`save`] keeps the previous contents of `path`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".bak");
    path.with_file_name(name)
}

/// Load a roster from `path`. A missing or blank file is an empty roster.
pub fn load<S: DataSource>(path: &Path, dex: &mut Pokedex<S>) -> Result<Roster, RosterError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no roster file, starting empty");
            return Ok(Roster::new());
        }
        Err(source) => {
            return Err(RosterError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let document = RosterDocument::from_yaml(&text)?;
    let roster = Roster::from_document(&document, dex)?;
    tracing::debug!(
        path = %path.display(),
        pokemon = document.pokemon.len(),
        teams = document.teams.len(),
        "roster loaded"
    );
    Ok(roster)
}

/// Write `roster` to `path`, first copying any existing file to its backup.
pub fn save(roster: &Roster, path: &Path) -> Result<(), RosterError> {
    let io_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source| RosterError::Io { path, source }
    };

    if path.exists() {
        let backup = backup_path(path);
        fs::copy(path, &backup).map_err(io_error(&backup))?;
        tracing::debug!(backup = %backup.display(), "previous roster backed up");
    }

    let text = roster.to_document().to_yaml()?;
    fs::write(path, text).map_err(io_error(path))?;
    tracing::info!(path = %path.display(), "roster saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trainer_records::MemorySource;
    use trainer_records::testing::fixture_source;

    use crate::team::{Team, TeamPosition};
    use crate::tracker::Tracker;

    fn dex() -> Pokedex<MemorySource> {
        Pokedex::new(fixture_source())
    }

    #[test]
    fn test_backup_path() {
        assert_eq!(
            backup_path(Path::new("/home/ash/.pokemon-trainer")),
            PathBuf::from("/home/ash/.pokemon-trainer.bak")
        );
        assert_eq!(
            backup_path(Path::new("roster.yaml")),
            PathBuf::from("roster.yaml.bak")
        );
    }

    #[test]
    fn test_missing_file_is_empty_roster() {
        let dir = tempfile::tempdir().unwrap();
        let roster = load(&dir.path().join("absent"), &mut dex()).unwrap();
        assert_eq!(roster, Roster::new());
    }

    #[test]
    fn test_blank_file_is_empty_roster() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank");
        fs::write(&path, "\n  \n").unwrap();

        assert_eq!(load(&path, &mut dex()).unwrap(), Roster::new());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster");
        let mut dex = dex();

        let mut tracker = Tracker::default();
        let pikachu = dex.species(&"pikachu".parse().unwrap()).unwrap();
        let gengar = dex.species(&"gengar".parse().unwrap()).unwrap();
        let first = tracker.track(pikachu, Some("Sparky"));
        let second = tracker.track(gengar.clone(), None);
        tracker.battle(first, &gengar, 2).unwrap();

        let team = tracker.create_team("main", true);
        let roster = tracker.roster_mut();
        roster.assign(team, TeamPosition::First, Some(first)).unwrap();
        roster.assign(team, TeamPosition::Third, Some(second)).unwrap();
        roster.add_team(Team::new(9, "spare"), false);

        save(tracker.roster(), &path).unwrap();
        let loaded = load(&path, &mut dex).unwrap();

        assert_eq!(&loaded, tracker.roster());
        assert_eq!(loaded.get_pokemon(first).unwrap().evs.special_attack, 6);
    }

    #[test]
    fn test_save_keeps_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster");

        let mut roster = Roster::new();
        roster.add_team(Team::new(1, "old"), false);
        save(&roster, &path).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        roster.add_team(Team::new(2, "new"), true);
        save(&roster, &path).unwrap();

        assert_eq!(fs::read_to_string(backup_path(&path)).unwrap(), before);
        assert_ne!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_first_save_has_no_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster");

        save(&Roster::new(), &path).unwrap();
        assert!(path.exists());
        assert!(!backup_path(&path).exists());
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster");
        fs::write(&path, "pokemon: [ {id: one} ]").unwrap();

        assert!(matches!(load(&path, &mut dex()), Err(RosterError::Yaml(_))));
    }

    #[test]
    fn test_unreadable_path_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let error = load(dir.path(), &mut dex()).unwrap_err();

        match error {
            RosterError::Io { path, .. } => assert_eq!(path, dir.path()),
            other => panic!("unexpected error: {other}"),
        }
    }
}
