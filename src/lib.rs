// Library surface for the binary and integration tests.
// The core (scramble, session, snapshot) does no I/O; game/store/runtime wire it up.
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod game;
pub mod runtime;
pub mod scramble;
pub mod session;
pub mod snapshot;
pub mod store;
pub mod util;

pub use error::{GameError, StoreError};
pub use game::Game;
pub use scramble::{scramble, shuffle, shuffle_words, FixedSwaps, RandomSwaps, SwapSource};
pub use session::{Outcome, Session, Status, DEFAULT_DICTIONARY};
pub use snapshot::Snapshot;
