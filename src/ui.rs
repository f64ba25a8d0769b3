use std::io::{self, Write};

use scramble::session::{Session, MAX_STRIKES};

pub const HELP: &str = "Type your guess, /pass to skip, /restart for a new game, /quit to leave.";

/// Prints the board: counters, the scrambled word, and the last message
pub fn render<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(
        out,
        "Points: {} | Strikes: {}/{} | Passes: {}",
        session.score(),
        session.strikes(),
        MAX_STRIKES,
        session.passes()
    )?;

    if session.is_over() {
        writeln!(out, "{}", session.message())?;
        writeln!(out, "Type /restart to play again or /quit to leave.")?;
    } else {
        writeln!(out)?;
        writeln!(out, "    {}", session.scrambled_word().to_uppercase())?;
        writeln!(out)?;
        writeln!(out, "{}", session.message())?;
        write!(out, "> ")?;
    }
    out.flush()
}

/// Explains why a move had no effect
pub fn ignored_hint(session: &Session) -> &'static str {
    if session.is_over() {
        "The game is over."
    } else {
        "No passes left."
    }
}
