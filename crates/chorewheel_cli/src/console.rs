//! Line-based console I/O.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Prompt/response wrapper over any buffered reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one full line.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Shows `prompt` and reads one trimmed line; `None` once input is closed.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::Console;
    use std::io::Cursor;

    #[test]
    fn ask_trims_input_and_reports_closed_stream() {
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new("  dishes \n"), &mut output);

        assert_eq!(
            console.ask("Add a chore: ").unwrap().as_deref(),
            Some("dishes")
        );
        assert_eq!(console.ask("Add a chore: ").unwrap(), None);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Add a chore: Add a chore: "
        );
    }
}
