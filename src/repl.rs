//! Interactive line-by-line converter.

use crate::amount::parse_amount;
use crate::convert::to_baht_text;
use crate::error::Result;
use log::debug;
use std::io::{BufRead, Write};

/// Command that ends the session.
pub const EXIT_COMMAND: &str = "exit";

/// Runs the prompt loop until `exit`, end of input, or a read failure.
///
/// Conversion errors are printed and the loop keeps going. End of input
/// ends the session without a message; a read failure prints
/// `Error reading input: ...` first. Only failures to write to `output` are
/// returned.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    writeln!(output, "Thai Baht Text Converter")?;
    writeln!(output, "Enter a number (or type '{}' to quit)", EXIT_COMMAND)?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => return Ok(()),
            Ok(_) => {}
            Err(e) => {
                writeln!(output, "Error reading input: {}", e)?;
                return Ok(());
            }
        }

        let command = line.trim();
        if command == EXIT_COMMAND {
            writeln!(output, "Goodbye.")?;
            return Ok(());
        }

        writeln!(output, "{}", respond(command))?;
    }
}

/// Produces the reply for a single input line.
pub fn respond(line: &str) -> String {
    let amount = match parse_amount(line) {
        Ok(amount) => amount,
        Err(e) => {
            debug!("Rejected input {:?}: {}", line, e);
            return "Invalid number format".to_string();
        }
    };

    match to_baht_text(&amount) {
        Ok(text) => text,
        Err(e) => format!("Error: {}", e),
    }
}
