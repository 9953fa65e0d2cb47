//! Line-oriented operator I/O.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;
use stockroom::{Result, StockroomError, ValidationError};

/// Prompts on `output`, answers from `input`.
///
/// End of input surfaces as [`StockroomError::InputClosed`] from every
/// prompt, so a closed stdin unwinds the whole session instead of looping.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console, returning the output sink.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show `prompt` and read one line, without its line terminator.
    pub fn ask(&mut self, prompt: impl Display) -> Result<String> {
        write!(self.output, "{}", prompt).map_err(console_error)?;
        self.output.flush().map_err(console_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(console_error)?;
        if read == 0 {
            writeln!(self.output).map_err(console_error)?;
            return Err(StockroomError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Yes/no where anything but `y` means no.
    pub fn confirm(&mut self, prompt: impl Display) -> Result<bool> {
        let answer = self.ask(prompt)?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    /// Yes/no that insists on `y` or `n`, re-asking otherwise.
    pub fn confirm_strict(&mut self, prompt: impl Display) -> Result<bool> {
        loop {
            let answer = self.ask(&prompt)?;
            match parse_confirmation(&answer) {
                Ok(yes) => return Ok(yes),
                Err(e) => self.error(e)?,
            }
        }
    }

    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{}", message).map_err(console_error)
    }

    /// Report a rejected input.
    pub fn error(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{} {}", "ERROR:".red().bold(), message).map_err(console_error)
    }

    pub fn success(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{}", message.to_string().green()).map_err(console_error)
    }
}

/// `y` or `n`, case-insensitive and trimmed.
pub fn parse_confirmation(answer: &str) -> std::result::Result<bool, ValidationError> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        other => Err(ValidationError::InvalidConfirmation(other.to_string())),
    }
}

/// The exit signal accepted by every sub-loop.
pub fn is_exit(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("x")
}

fn console_error(source: std::io::Error) -> StockroomError {
    StockroomError::Io {
        path: PathBuf::from("<console>"),
        source,
    }
}
