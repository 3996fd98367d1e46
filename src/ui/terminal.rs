// src/ui/terminal.rs

use crate::state::{AppState, SearchOutcome};
use std::io::{self, BufRead, Write};

pub const BANNER: &str = "🧪 Offline Chemistry Assistant";
pub const PROMPT: &str = "Enter Element Name: ";

/// Prompt loop: one query per line until EOF or `quit`/`exit`.
pub fn run<R: BufRead, W: Write>(state: &AppState, input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "{} ({} elements, type 'quit' to leave)", BANNER, state.repository.len())?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;
        let query = line.trim();

        if query.eq_ignore_ascii_case("quit") || query.eq_ignore_ascii_case("exit") {
            break;
        }

        match state.search(query) {
            SearchOutcome::EmptyInput => {
                log::warn!("Empty input");
                writeln!(output, "⚠️  Empty Input: {}", SearchOutcome::EmptyInput.text())?;
            }
            outcome => writeln!(output, "{}", outcome.text())?,
        }
    }

    Ok(())
}
