use tracing::{debug, info, warn};

use crate::error::{GameError, StoreError};
use crate::scramble::SwapSource;
use crate::session::{Outcome, Session, Status};
use crate::snapshot::Snapshot;
use crate::store::SessionStore;

/// A session wired to its persistence store.
///
/// Every accepted move that leaves the game active is saved. Terminal states are
/// never written and the stored game is dropped instead, so reopening after a
/// finished game starts fresh. Store failures
/// are logged and otherwise ignored; the in-memory session stays authoritative.
pub struct Game<St: SessionStore, S: SwapSource> {
    session: Session,
    store: St,
    swaps: S,
}

impl<St: SessionStore, S: SwapSource> Game<St, S> {
    /// Resumes the stored game, or starts a new one when nothing valid is stored.
    pub fn load<W: AsRef<str>>(
        store: St,
        mut swaps: S,
        dictionary: &[W],
    ) -> Result<Self, GameError> {
        let restored = store.load().and_then(|blob| {
            match Snapshot::from_json(&blob).and_then(|s| Session::from_snapshot(s, dictionary)) {
                Ok(session) => Some(session),
                Err(e) => {
                    warn!(error = %e, "discarding stored game");
                    None
                }
            }
        });

        let game = match restored {
            Some(session) => {
                info!(
                    score = session.score(),
                    remaining = session.remaining_words(),
                    "resumed game"
                );
                Self {
                    session,
                    store,
                    swaps,
                }
            }
            None => {
                let session = Session::initialize(dictionary, &mut swaps)?;
                let game = Self {
                    session,
                    store,
                    swaps,
                };
                game.persist();
                game
            }
        };
        Ok(game)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    /// Applies a guess. Returns `None` when the session is over.
    pub fn guess(&mut self, input: &str) -> Option<Outcome> {
        let result = self.session.guess(input, &mut self.swaps);
        self.settle(result)
    }

    /// Skips the current word. Returns `None` when no pass is available.
    pub fn pass(&mut self) -> Option<Outcome> {
        let result = self.session.pass(&mut self.swaps);
        self.settle(result)
    }

    /// Drops the stored game and starts over.
    pub fn restart(&mut self) -> Result<(), GameError> {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear stored game");
        }
        self.session.restart(&mut self.swaps)?;
        self.persist();
        Ok(())
    }

    fn settle(&mut self, result: Result<Outcome, GameError>) -> Option<Outcome> {
        match result {
            Ok(outcome) => {
                self.persist();
                Some(outcome)
            }
            Err(e) if e.is_ignorable() => {
                debug!(error = %e, "ignored move");
                None
            }
            Err(e) => {
                warn!(error = %e, "rejected move");
                None
            }
        }
    }

    fn persist(&self) {
        if self.session.status() != Status::Active {
            // finished games are never resumed
            if let Err(e) = self.store.clear() {
                warn!(error = %e, "failed to clear finished game");
            }
            return;
        }
        let saved = self
            .session
            .to_snapshot()
            .to_json()
            .map_err(StoreError::from)
            .and_then(|blob| self.store.save(&blob));
        if let Err(e) = saved {
            warn!(error = %e, "failed to save game");
        }
    }
}
