use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::GameError;
use crate::scramble::{scramble, shuffle_words, SwapSource};

/// Words played in a default game
pub const DEFAULT_DICTIONARY: &[&str] = &[
    "table", "pencil", "guitar", "laptop", "orange", "planet", "camera", "jacket", "rocket",
    "tunnel",
];

/// Wrong guesses that end the session
pub const MAX_STRIKES: u8 = 3;
pub const STARTING_PASSES: u8 = 3;

pub const MSG_WELCOME: &str = "Welcome to Scramble!";
pub const MSG_CORRECT: &str = "Correct! Next word.";
pub const MSG_WRONG: &str = "Wrong, try again.";
pub const MSG_GAME_OVER: &str = "Game Over! Choose \"Play Again\" to restart.";
pub const MSG_PASSED: &str = "You passed! Next word.";
pub const MSG_VICTORY: &str = "You guessed all words! Play again?";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum_macros::Display,
)]
pub enum Status {
    #[default]
    Active,
    Won,
    Lost,
}

/// Result of a guess or pass that was accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Correct guess, next word is up
    Correct,
    /// Wrong guess, strike recorded
    Wrong,
    /// Word skipped, next word is up
    Passed,
    /// Last word resolved
    Won,
    /// Final strike
    Lost,
}

/// Full mutable state of one play-through.
///
/// The pool holds every unresolved word in play order, with the current word at
/// its head while the session is active. Scrambling only happens when a word
/// becomes current, so the scrambled form is stable until the word is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub(crate) dictionary: Vec<String>,
    pub(crate) word_pool: Vec<String>,
    pub(crate) current_word: String,
    pub(crate) scrambled_word: String,
    pub(crate) score: u32,
    pub(crate) strikes: u8,
    pub(crate) passes: u8,
    pub(crate) status: Status,
    pub(crate) message: String,
}

impl Session {
    /// Starts a new session over `dictionary`.
    ///
    /// The pool is shuffled once here and keeps that order for the rest of the
    /// session. Fails only when the dictionary has no words.
    pub fn initialize<W, S>(dictionary: &[W], swaps: &mut S) -> Result<Self, GameError>
    where
        W: AsRef<str>,
        S: SwapSource + ?Sized,
    {
        if dictionary.is_empty() {
            return Err(GameError::EmptyDictionary);
        }

        let dictionary: Vec<String> = dictionary
            .iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        let word_pool = shuffle_words(&dictionary, swaps);
        let current_word = word_pool[0].clone();
        let scrambled_word = scramble(&current_word, swaps);

        info!(words = dictionary.len(), "new session");

        Ok(Self {
            dictionary,
            word_pool,
            current_word,
            scrambled_word,
            score: 0,
            strikes: 0,
            passes: STARTING_PASSES,
            status: Status::Active,
            message: MSG_WELCOME.to_string(),
        })
    }

    /// Restarts with the same dictionary
    pub fn restart<S: SwapSource + ?Sized>(&mut self, swaps: &mut S) -> Result<(), GameError> {
        *self = Self::initialize(&self.dictionary, swaps)?;
        Ok(())
    }

    /// Checks `input` against the current word, ignoring case only.
    pub fn guess<S: SwapSource + ?Sized>(
        &mut self,
        input: &str,
        swaps: &mut S,
    ) -> Result<Outcome, GameError> {
        self.ensure_active("guess")?;

        if input.to_lowercase() == self.current_word.to_lowercase() {
            self.score += 1;
            self.message = MSG_CORRECT.to_string();
            debug!(word = %self.current_word, score = self.score, "correct guess");
            return Ok(self.advance(Outcome::Correct, swaps));
        }

        self.strikes += 1;
        self.message = MSG_WRONG.to_string();
        debug!(strikes = self.strikes, "wrong guess");

        if self.strikes >= MAX_STRIKES {
            self.status = Status::Lost;
            self.message = MSG_GAME_OVER.to_string();
            info!(score = self.score, "session lost");
            return Ok(Outcome::Lost);
        }

        Ok(Outcome::Wrong)
    }

    /// Skips the current word without scoring it.
    pub fn pass<S: SwapSource + ?Sized>(&mut self, swaps: &mut S) -> Result<Outcome, GameError> {
        self.ensure_active("pass")?;
        if self.passes == 0 {
            return Err(GameError::NoPassesLeft);
        }

        self.passes -= 1;
        self.message = MSG_PASSED.to_string();
        debug!(word = %self.current_word, passes = self.passes, "passed");

        Ok(self.advance(Outcome::Passed, swaps))
    }

    fn ensure_active(&self, action: &'static str) -> Result<(), GameError> {
        match self.status {
            Status::Active => Ok(()),
            status => Err(GameError::InvalidTransition { action, status }),
        }
    }

    fn advance<S: SwapSource + ?Sized>(&mut self, resolved: Outcome, swaps: &mut S) -> Outcome {
        let current = &self.current_word;
        self.word_pool.retain(|w| w != current);

        match self.word_pool.first() {
            None => {
                self.status = Status::Won;
                self.message = MSG_VICTORY.to_string();
                info!(score = self.score, "session won");
                Outcome::Won
            }
            Some(next) => {
                self.current_word = next.clone();
                self.scrambled_word = scramble(&self.current_word, swaps);
                resolved
            }
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn strikes(&self) -> u8 {
        self.strikes
    }

    pub fn passes(&self) -> u8 {
        self.passes
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    pub fn scrambled_word(&self) -> &str {
        &self.scrambled_word
    }

    pub fn word_pool(&self) -> &[String] {
        &self.word_pool
    }

    /// Unresolved words, current one included
    pub fn remaining_words(&self) -> usize {
        self.word_pool.len()
    }

    pub fn is_over(&self) -> bool {
        self.status != Status::Active
    }

    pub fn can_pass(&self) -> bool {
        !self.is_over() && self.passes > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scramble::{FixedSwaps, RandomSwaps};
    use crate::util::is_anagram;
    use assert_matches::assert_matches;

    fn fresh() -> Session {
        Session::initialize(DEFAULT_DICTIONARY, &mut FixedSwaps::identity()).unwrap()
    }

    #[test]
    fn test_initialize_resets_counters() {
        let session =
            Session::initialize(DEFAULT_DICTIONARY, &mut RandomSwaps::thread()).unwrap();
        assert_eq!(session.status(), Status::Active);
        assert_eq!(session.score(), 0);
        assert_eq!(session.strikes(), 0);
        assert_eq!(session.passes(), STARTING_PASSES);
        assert_eq!(session.message(), MSG_WELCOME);
        assert!(DEFAULT_DICTIONARY.contains(&session.current_word()));
        assert_eq!(session.word_pool()[0], session.current_word());
        assert_eq!(session.remaining_words(), DEFAULT_DICTIONARY.len());
        assert!(is_anagram(session.current_word(), session.scrambled_word()));
    }

    #[test]
    fn test_initialize_rejects_empty_dictionary() {
        let empty: [&str; 0] = [];
        assert_matches!(
            Session::initialize(&empty, &mut FixedSwaps::identity()),
            Err(GameError::EmptyDictionary)
        );
    }

    #[test]
    fn test_identity_swaps_keep_dictionary_order() {
        let session = fresh();
        assert_eq!(session.current_word(), "table");
        assert_eq!(session.scrambled_word(), "table");
    }

    #[test]
    fn test_correct_guess_is_case_insensitive() {
        let mut session = fresh();
        let mut swaps = FixedSwaps::identity();
        assert_eq!(session.guess("TaBle", &mut swaps), Ok(Outcome::Correct));
        assert_eq!(session.score(), 1);
        assert_eq!(session.message(), MSG_CORRECT);
        assert_eq!(session.current_word(), "pencil");
        assert!(!session.word_pool().contains(&"table".to_string()));
    }

    #[test]
    fn test_padded_guess_is_wrong() {
        let mut session = fresh();
        let mut swaps = FixedSwaps::identity();
        assert_eq!(session.guess(" table ", &mut swaps), Ok(Outcome::Wrong));
        assert_eq!(session.strikes(), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_word(), "table");
    }

    #[test]
    fn test_wrong_guess_keeps_word() {
        let mut session = fresh();
        let mut swaps = FixedSwaps::identity();
        assert_eq!(session.guess("tables", &mut swaps), Ok(Outcome::Wrong));
        assert_eq!(session.strikes(), 1);
        assert_eq!(session.message(), MSG_WRONG);
        assert_eq!(session.current_word(), "table");
        assert_eq!(session.remaining_words(), DEFAULT_DICTIONARY.len());
    }

    #[test]
    fn test_third_strike_loses_without_advancing() {
        let mut session = fresh();
        let mut swaps = FixedSwaps::identity();
        session.guess("zzz", &mut swaps).unwrap();
        session.guess("zzz", &mut swaps).unwrap();
        assert_eq!(session.guess("zzz", &mut swaps), Ok(Outcome::Lost));
        assert_eq!(session.status(), Status::Lost);
        assert_eq!(session.strikes(), MAX_STRIKES);
        assert_eq!(session.message(), MSG_GAME_OVER);
        assert_eq!(session.current_word(), "table");
    }

    #[test]
    fn test_terminal_session_rejects_moves() {
        let mut session = fresh();
        let mut swaps = FixedSwaps::identity();
        for _ in 0..3 {
            session.guess("zzz", &mut swaps).unwrap();
        }
        let before = session.clone();
        assert_matches!(
            session.guess("table", &mut swaps),
            Err(GameError::InvalidTransition { action: "guess", status: Status::Lost })
        );
        assert_matches!(
            session.pass(&mut swaps),
            Err(GameError::InvalidTransition { action: "pass", .. })
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_won_session_rejects_moves() {
        let mut swaps = FixedSwaps::identity();
        let mut session = Session::initialize(&["cat"], &mut swaps).unwrap();
        assert_eq!(session.guess("cat", &mut swaps), Ok(Outcome::Won));
        let before = session.clone();
        assert_matches!(
            session.guess("cat", &mut swaps),
            Err(GameError::InvalidTransition { action: "guess", status: Status::Won })
        );
        assert_matches!(
            session.pass(&mut swaps),
            Err(GameError::InvalidTransition { action: "pass", status: Status::Won })
        );
        assert_eq!(session, before);
        assert_eq!(session.score(), 1);
        assert_eq!(session.passes(), STARTING_PASSES);
    }

    #[test]
    fn test_pass_spends_pass_and_advances() {
        let mut session = fresh();
        let mut swaps = FixedSwaps::identity();
        assert_eq!(session.pass(&mut swaps), Ok(Outcome::Passed));
        assert_eq!(session.passes(), STARTING_PASSES - 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.message(), MSG_PASSED);
        assert_eq!(session.current_word(), "pencil");
    }

    #[test]
    fn test_pass_without_passes_is_rejected() {
        let mut session = fresh();
        let mut swaps = FixedSwaps::identity();
        for _ in 0..STARTING_PASSES {
            session.pass(&mut swaps).unwrap();
        }
        assert!(!session.can_pass());
        let before = session.clone();
        assert_eq!(session.pass(&mut swaps), Err(GameError::NoPassesLeft));
        assert_eq!(session, before);
    }

    #[test]
    fn test_passing_last_word_wins() {
        let mut session = Session::initialize(&["cat"], &mut FixedSwaps::identity()).unwrap();
        assert_eq!(session.pass(&mut FixedSwaps::identity()), Ok(Outcome::Won));
        assert_eq!(session.status(), Status::Won);
        assert_eq!(session.message(), MSG_VICTORY);
        assert!(session.word_pool().is_empty());
        // stale but still reported
        assert_eq!(session.current_word(), "cat");
    }

    #[test]
    fn test_pool_order_is_kept_across_advances() {
        let mut swaps = RandomSwaps::seeded(11);
        let mut session = Session::initialize(DEFAULT_DICTIONARY, &mut swaps).unwrap();
        let order = session.word_pool().to_vec();
        for expected in &order[..order.len() - 1] {
            assert_eq!(session.current_word(), expected);
            let word = session.current_word().to_string();
            session.guess(&word, &mut swaps).unwrap();
        }
        assert_eq!(session.current_word(), order[order.len() - 1]);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut session = fresh();
        let mut swaps = FixedSwaps::identity();
        session.guess("zzz", &mut swaps).unwrap();
        session.pass(&mut swaps).unwrap();
        session.guess("pencil", &mut swaps).unwrap();
        session.restart(&mut swaps).unwrap();
        assert_eq!(session, fresh());
    }

    #[test]
    fn test_dictionary_is_lowercased() {
        let session = Session::initialize(&["Cat"], &mut FixedSwaps::identity()).unwrap();
        assert_eq!(session.current_word(), "cat");
    }
}
