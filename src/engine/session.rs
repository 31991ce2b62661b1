// ============================================================================
// Interactive Session
// Prompt/read/display loop around a ConversionCalculator
// ============================================================================

use super::calculator::ConversionCalculator;
use super::command::Command;
use crate::domain::CalculatorConfig;
use crate::numeric::{CalcError, Radix};
use std::io::{self, BufRead, Write};

/// Line-oriented calculator session over any reader/writer pair.
///
/// The session owns its calculator, so the active radix is session state.
/// End of input ends the session like `q`.
pub struct Session<R, W> {
    input: R,
    output: W,
    calculator: ConversionCalculator,
    prompt_for_radix: bool,
    show_all_radixes: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        calculator: ConversionCalculator,
        config: &CalculatorConfig,
        input: R,
        output: W,
    ) -> Self {
        Self {
            input,
            output,
            calculator,
            prompt_for_radix: config.prompt_for_radix,
            show_all_radixes: config.show_all_radixes,
        }
    }

    pub fn calculator(&self) -> &ConversionCalculator {
        &self.calculator
    }

    pub fn into_parts(self) -> (ConversionCalculator, W) {
        (self.calculator, self.output)
    }

    /// Run until `q` or end of input.
    ///
    /// # Errors
    /// Only I/O errors of the underlying reader/writer; calculator errors are
    /// reported to the user and the loop continues.
    pub fn run(&mut self) -> io::Result<()> {
        tracing::debug!(session = %self.calculator.session_id(), "session started");
        self.show_menu()?;

        let mut running = !self.prompt_for_radix || self.select_radix()?;

        while running {
            if self.calculator.accumulator().state().is_empty() && !self.read_first_number()? {
                break;
            }

            let Some(line) = self.read_line(
                "\nEnter an operation and a number (e.g. +5, -3, *2) or a command (c/i/q): ",
            )?
            else {
                break;
            };

            match Command::parse(&line) {
                Ok(Command::Quit) => running = false,
                Ok(Command::Reset) => {
                    self.calculator.reset();
                    writeln!(self.output, "Accumulator cleared.")?;
                },
                Ok(Command::SelectRadix) => running = self.select_radix()?,
                Ok(Command::Apply { op, operand }) => match self.calculator.apply(op, &operand) {
                    Ok(result) => self.display_result(result)?,
                    Err(err) => self.report(err)?,
                },
                Err(err) => self.report(err)?,
            }
        }

        writeln!(self.output, "Thank you for using the calculator!")?;
        self.output.flush()?;
        tracing::debug!(session = %self.calculator.session_id(), "session finished");
        Ok(())
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nWelcome to the radix calculator!")?;
        writeln!(self.output, "Enter an operation together with a number, for example:")?;
        writeln!(self.output, "+5  : add 5")?;
        writeln!(self.output, "-3  : subtract 3")?;
        writeln!(self.output, "*2  : multiply by 2")?;
        writeln!(self.output, "/4  : divide by 4")?;
        writeln!(self.output, "Commands:")?;
        writeln!(self.output, "c   : clear the result")?;
        writeln!(self.output, "i   : change the input radix")?;
        writeln!(self.output, "q   : quit")
    }

    /// Returns false on end of input.
    fn select_radix(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\nChoose the input radix:")?;
        for radix in Radix::ALL {
            writeln!(self.output, "{} - {}", radix.base(), radix.name())?;
        }

        loop {
            let Some(line) = self.read_line("Enter the radix: ")? else {
                return Ok(false);
            };

            match line.parse::<Radix>() {
                Ok(radix) => {
                    self.calculator.set_radix(radix);
                    writeln!(self.output, "Input radix set to base {}", radix)?;
                    return Ok(true);
                },
                Err(CalcError::UnsupportedRadix(_)) => {
                    writeln!(self.output, "Error: unsupported radix!")?;
                },
                Err(_) => writeln!(self.output, "Error: enter a number!")?,
            }
        }
    }

    /// Returns false on end of input.
    fn read_first_number(&mut self) -> io::Result<bool> {
        loop {
            let prompt = format!("\nEnter the first number (base {}): ", self.calculator.radix());
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(false);
            };

            match self.calculator.enter(&line) {
                Ok(value) => {
                    writeln!(self.output, "Initial number:")?;
                    self.display_result(value)?;
                    return Ok(true);
                },
                Err(err) => self.report(err)?,
            }
        }
    }

    fn display_result(&mut self, value: f64) -> io::Result<()> {
        let active = self.calculator.radix();
        let renderings = self.calculator.renderings(value);

        writeln!(self.output, "\nResult:")?;
        for (radix, text) in renderings.starting_with(active) {
            if radix != active && !self.show_all_radixes {
                break;
            }
            writeln!(self.output, "{}: {}", radix.name(), text)?;
        }
        Ok(())
    }

    fn report(&mut self, err: CalcError) -> io::Result<()> {
        match err {
            CalcError::InvalidNumeral => writeln!(self.output, "Error: enter a valid number!"),
            CalcError::DivisionByZero => {
                writeln!(self.output, "Error: division by zero is not possible!")
            },
            CalcError::UnsupportedRadix(_) => writeln!(self.output, "Error: {}", err),
        }
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
