//! Loading and validating match records before a replay starts.
//!
//! The engine assumes a well-formed record. Everything that can be wrong
//! with the input is caught here and reported as a `ReplayError`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::domain::Match;
use crate::error::ReplayError;

pub fn from_json_str(json: &str) -> Result<Match, ReplayError> {
    let record: Match = serde_json::from_str(json)?;
    validate(&record)?;
    Ok(record)
}

pub fn from_reader<R: Read>(reader: R) -> Result<Match, ReplayError> {
    let record: Match = serde_json::from_reader(reader)?;
    validate(&record)?;
    Ok(record)
}

pub fn from_path(path: impl AsRef<Path>) -> Result<Match, ReplayError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| {
        ReplayError::io(format!("Failed to open match record '{}'", path.display()), err)
    })?;
    let record = from_reader(BufReader::new(file))?;
    info!(
        path = %path.display(),
        rounds = record.rounds.len(),
        players = record.player_names.len(),
        "Loaded match record"
    );
    Ok(record)
}

/// Shape checks the type system does not already enforce.
///
/// An empty `rounds` list is valid: the match ended before any round
/// completed.
pub fn validate(record: &Match) -> Result<(), ReplayError> {
    if record.player_teams.len() != record.player_names.len() {
        return Err(ReplayError::malformed(format!(
            "playerTeams has {} entries but playerNames has {}",
            record.player_teams.len(),
            record.player_names.len()
        )));
    }

    for (idx, name) in record.player_names.iter().enumerate() {
        if record.player_names[..idx].contains(name) {
            return Err(ReplayError::malformed(format!(
                "Duplicate player name '{name}' in roster"
            )));
        }
    }

    debug!(
        rounds = record.rounds.len(),
        tricks = record.total_tricks(),
        "Match record validated"
    );
    Ok(())
}
