//! Report writer.
//!
//! Stdout carries exactly one thing per dependency: the captured version
//! line, or the instruction block. Warnings about probes that could not be
//! carried out go to the error stream so stdout stays byte-for-byte
//! predictable.

use crate::requirements::{Dependency, ProbeOutcome, ProbeResult};
use console::style;
use std::io::{self, Write};

/// Writes probe outcomes to an output and an error stream.
pub struct Reporter<O: Write, E: Write> {
    out: O,
    err: E,
    styled: bool,
}

impl Reporter<io::Stdout, io::Stderr> {
    /// Reporter on the process stdout and stderr.
    pub fn stdio(styled: bool) -> Self {
        Self::new(io::stdout(), io::stderr(), styled)
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    /// Create a reporter; `styled` colors the warning lines.
    pub fn new(out: O, err: E, styled: bool) -> Self {
        Self { out, err, styled }
    }

    /// Report one dependency and flush, so output appears before the next probe runs.
    pub fn report(&mut self, dependency: &Dependency, result: &ProbeResult) -> io::Result<()> {
        match &result.outcome {
            ProbeOutcome::Present { detail } => writeln!(self.out, "{}", detail)?,
            _ => {
                for line in dependency.instruction_block() {
                    writeln!(self.out, "{}", line)?;
                }
            }
        }
        self.out.flush()?;

        if let Some(warning) = result.warning() {
            let line = format!("warning: {}", warning);
            writeln!(
                self.err,
                "{}",
                style(line).yellow().force_styling(self.styled)
            )?;
            self.err.flush()?;
        }

        Ok(())
    }

    /// Consume the reporter, returning both streams.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
