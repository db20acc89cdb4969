//! Interactive menu loop.

use crate::{
    chart::{Chart, Viewer},
    menu::{write_menu, Choice, FIRST, LAST},
    report::{write_heading, write_report},
    Error,
};
use colored::Colorize;
use paritybit::{
    compute_parity, validate_binary, validate_integer_range, BitString, Error as InputError, Mode,
    MAX_BITS, MIN_BITS,
};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Drives prompts and menu dispatch over arbitrary input and output streams.
pub struct Session<R, W, V> {
    input: R,
    output: W,
    viewer: V,
}

impl<R: BufRead, W: Write, V: Viewer> Session<R, W, V> {
    pub fn new(input: R, output: W, viewer: V) -> Self {
        Self {
            input,
            output,
            viewer,
        }
    }

    /// Consume the session, returning its streams and viewer.
    pub fn into_parts(self) -> (R, W, V) {
        (self.input, self.output, self.viewer)
    }

    /// Print `prompt` and read one line.
    ///
    /// Returns [Error::Closed] once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<String, Error> {
        write!(self.output, "\n{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::Closed);
        }
        Ok(line)
    }

    fn reject(&mut self, err: &InputError) -> Result<(), Error> {
        writeln!(self.output, "{} {err}", "Error:".red().bold())?;
        Ok(())
    }

    /// Ask for binary data until valid data is entered.
    pub fn prompt_bits(&mut self) -> Result<BitString, Error> {
        let prompt = format!("Enter Binary Data ({MIN_BITS}-{MAX_BITS} bits): ");
        loop {
            let line = self.read_line(&prompt)?;
            match validate_binary(&line) {
                Ok(bits) => return Ok(bits),
                Err(err) => {
                    debug!(?err, "rejected binary data");
                    self.reject(&err)?;
                }
            }
        }
    }

    /// Ask for a menu entry until a valid one is selected.
    pub fn prompt_choice(&mut self) -> Result<Choice, Error> {
        let prompt = format!("Enter your choice ({FIRST}-{LAST}): ");
        loop {
            let line = self.read_line(&prompt)?;
            match validate_integer_range(&line, FIRST, LAST) {
                Ok(value) => return Ok(Choice::from_validated(value)),
                Err(err) => {
                    debug!(?err, "rejected choice");
                    self.reject(&err)?;
                }
            }
        }
    }

    /// Run the session until the user exits.
    ///
    /// If `initial` is provided it is used instead of prompting for data. Invalid initial data is
    /// reported and the user is prompted as usual.
    pub fn run(&mut self, initial: Option<&str>) -> Result<(), Error> {
        write_heading(&mut self.output, "PARITY FINDING SYSTEM")?;
        let data = match initial.map(validate_binary) {
            Some(Ok(data)) => data,
            Some(Err(err)) => {
                warn!(?err, "ignoring invalid initial data");
                self.reject(&err)?;
                self.prompt_bits()?
            }
            None => self.prompt_bits()?,
        };

        // Both reports are computed once and reused for every menu entry
        let even = compute_parity(&data, Mode::Even);
        let odd = compute_parity(&data, Mode::Odd);
        info!(
            %data,
            even = even.parity_bit(),
            odd = odd.parity_bit(),
            "computed parity"
        );

        loop {
            write_menu(&mut self.output)?;
            let choice = self.prompt_choice()?;
            debug!(?choice, "selected");
            match choice {
                Choice::EvenReport => write_report(&mut self.output, &even)?,
                Choice::OddReport => write_report(&mut self.output, &odd)?,
                Choice::EvenChart | Choice::OddChart => {
                    let report = if choice.mode() == Some(Mode::Even) {
                        &even
                    } else {
                        &odd
                    };
                    writeln!(
                        self.output,
                        "\nGenerating {} Parity Graph...",
                        report.mode().label()
                    )?;
                    self.output.flush()?;
                    // Without a usable terminal the chart is skipped, not the session
                    if let Err(err) = self.viewer.show(&Chart::new(report)) {
                        warn!(?err, "failed to show chart");
                        writeln!(
                            self.output,
                            "{} could not display chart: {err}",
                            "Error:".red().bold()
                        )?;
                    }
                }
                Choice::Exit => {
                    write_heading(&mut self.output, "THANK YOU! PROGRAM EXITED SUCCESSFULLY!")?;
                    writeln!(self.output)?;
                    return Ok(());
                }
            }
        }
    }
}
