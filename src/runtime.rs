use std::io::BufRead;
use std::sync::mpsc::Receiver;

use tracing::warn;

use crate::error::GameError;
use crate::game::Game;
use crate::scramble::SwapSource;
use crate::session::Outcome;
use crate::store::SessionStore;

/// A player action read from input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Pass,
    Restart,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines carry no command.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "" => None,
            "/pass" => Some(Command::Pass),
            "/restart" | "/new" => Some(Command::Restart),
            "/quit" | "/exit" => Some(Command::Quit),
            _ => Some(Command::Guess(trimmed.to_string())),
        }
    }
}

/// Source of player commands
pub trait CommandSource {
    /// Blocks until the next command. `None` once input is exhausted.
    fn next_command(&mut self) -> Option<Command>;
}

/// Reads commands line by line, skipping blank lines
pub struct LineCommandSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineCommandSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> CommandSource for LineCommandSource<R> {
    fn next_command(&mut self) -> Option<Command> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    if let Some(cmd) = Command::parse(&line) {
                        return Some(cmd);
                    }
                }
                Err(e) => {
                    warn!(error = %e, "failed to read input");
                    return None;
                }
            }
        }
    }
}

/// Test command source fed through a channel
pub struct TestCommandSource {
    rx: Receiver<Command>,
}

impl TestCommandSource {
    pub fn new(rx: Receiver<Command>) -> Self {
        Self { rx }
    }
}

impl CommandSource for TestCommandSource {
    fn next_command(&mut self) -> Option<Command> {
        self.rx.recv().ok()
    }
}

/// What a single step did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// A move was applied; `None` when it was ignored
    Moved(Option<Outcome>),
    Restarted,
    Quit,
    /// Input ran out
    Exhausted,
}

/// Applies commands to a game one at a time
pub struct Runner<C: CommandSource> {
    source: C,
}

impl<C: CommandSource> Runner<C> {
    pub fn new(source: C) -> Self {
        Self { source }
    }

    pub fn step<St: SessionStore, S: SwapSource>(
        &mut self,
        game: &mut Game<St, S>,
    ) -> Result<StepResult, GameError> {
        let result = match self.source.next_command() {
            None => StepResult::Exhausted,
            Some(Command::Quit) => StepResult::Quit,
            Some(Command::Pass) => StepResult::Moved(game.pass()),
            Some(Command::Guess(word)) => StepResult::Moved(game.guess(&word)),
            Some(Command::Restart) => {
                game.restart()?;
                StepResult::Restarted
            }
        };
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::mpsc;

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("  \n"), None);
        assert_eq!(Command::parse("/pass\n"), Some(Command::Pass));
        assert_eq!(Command::parse("/PASS"), Some(Command::Pass));
        assert_eq!(Command::parse("/new"), Some(Command::Restart));
        assert_eq!(Command::parse("/restart"), Some(Command::Restart));
        assert_eq!(Command::parse("/quit"), Some(Command::Quit));
        assert_eq!(
            Command::parse(" Rocket \n"),
            Some(Command::Guess("Rocket".into()))
        );
    }

    #[test]
    fn line_source_skips_blank_lines() {
        let mut source = LineCommandSource::new(Cursor::new("\n\ntable\n\n/pass\n"));
        assert_eq!(source.next_command(), Some(Command::Guess("table".into())));
        assert_eq!(source.next_command(), Some(Command::Pass));
        assert_eq!(source.next_command(), None);
    }

    #[test]
    fn test_source_ends_when_sender_dropped() {
        let (tx, rx) = mpsc::channel();
        tx.send(Command::Quit).unwrap();
        drop(tx);
        let mut source = TestCommandSource::new(rx);
        assert_eq!(source.next_command(), Some(Command::Quit));
        assert_eq!(source.next_command(), None);
    }
}
