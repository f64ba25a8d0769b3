use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::session::{Session, Status, MAX_STRIKES, STARTING_PASSES};
use crate::util::{has_duplicates, is_anagram};

/// Persisted form of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub word_pool: Vec<String>,
    pub current_word: String,
    pub scrambled_word: String,
    pub score: u32,
    pub strikes: u8,
    pub passes: u8,
    pub status: Status,
    pub message: String,
}

impl Snapshot {
    /// Parses a stored blob. Missing or mistyped fields are malformed snapshots.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(|e| GameError::MalformedSnapshot(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn malformed(reason: impl Into<String>) -> GameError {
    GameError::MalformedSnapshot(reason.into())
}

impl Session {
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            word_pool: self.word_pool.clone(),
            current_word: self.current_word.clone(),
            scrambled_word: self.scrambled_word.clone(),
            score: self.score,
            strikes: self.strikes,
            passes: self.passes,
            status: self.status,
            message: self.message.clone(),
        }
    }

    /// Rebuilds a session from a snapshot, checking it is one `dictionary` could
    /// have produced.
    pub fn from_snapshot<W: AsRef<str>>(
        snapshot: Snapshot,
        dictionary: &[W],
    ) -> Result<Self, GameError> {
        let dictionary: Vec<String> = dictionary
            .iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        validate(&snapshot, &dictionary)?;

        let Snapshot {
            word_pool,
            current_word,
            scrambled_word,
            score,
            strikes,
            passes,
            status,
            message,
        } = snapshot;

        Ok(Self {
            dictionary,
            word_pool,
            current_word,
            scrambled_word,
            score,
            strikes,
            passes,
            status,
            message,
        })
    }
}

fn validate(snapshot: &Snapshot, dictionary: &[String]) -> Result<(), GameError> {
    if dictionary.is_empty() {
        return Err(GameError::EmptyDictionary);
    }
    if snapshot.strikes > MAX_STRIKES {
        return Err(malformed(format!("strikes out of range: {}", snapshot.strikes)));
    }
    if snapshot.passes > STARTING_PASSES {
        return Err(malformed(format!("passes out of range: {}", snapshot.passes)));
    }

    if let Some(stray) = snapshot
        .word_pool
        .iter()
        .find(|w| !dictionary.contains(*w))
    {
        return Err(malformed(format!("unknown word in pool: {stray}")));
    }
    if has_duplicates(&snapshot.word_pool) {
        return Err(malformed("duplicate words in pool"));
    }
    if !dictionary.contains(&snapshot.current_word) {
        return Err(malformed(format!(
            "unknown current word: {}",
            snapshot.current_word
        )));
    }
    if !is_anagram(&snapshot.current_word, &snapshot.scrambled_word) {
        return Err(malformed("scrambled word is not an anagram of the current word"));
    }

    // every resolved word was either scored or passed
    let resolved = dictionary.len().checked_sub(snapshot.word_pool.len());
    let spent = usize::from(STARTING_PASSES - snapshot.passes);
    if resolved != Some(snapshot.score as usize + spent) {
        return Err(malformed(format!(
            "score {} and {} passes used do not account for the pool",
            snapshot.score, spent
        )));
    }

    match snapshot.status {
        Status::Active if snapshot.strikes >= MAX_STRIKES => {
            Err(malformed("active session with a full set of strikes"))
        }
        Status::Active if snapshot.word_pool.first() != Some(&snapshot.current_word) => {
            Err(malformed("current word is not at the head of the pool"))
        }
        Status::Won if !snapshot.word_pool.is_empty() => {
            Err(malformed("won session with words left"))
        }
        Status::Lost if snapshot.strikes < MAX_STRIKES => {
            Err(malformed("lost session without a full set of strikes"))
        }
        _ => Ok(()),
    }
}
