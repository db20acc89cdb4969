//! Text rendering of a parity [Report].

use colored::Colorize;
use paritybit::{Mode, Report};
use std::io::{self, Write};

/// Horizontal rule framing every section (60 columns).
pub const BANNER: &str = "============================================================";

/// Section number shown in a report heading.
fn section(mode: Mode) -> usize {
    match mode {
        Mode::Even => 1,
        Mode::Odd => 2,
    }
}

/// Write a framed heading.
pub fn write_heading<W: Write>(w: &mut W, heading: &str) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{BANNER}")?;
    writeln!(w, "  {}", heading.bold())?;
    writeln!(w, "{BANNER}")
}

/// Write the full calculation for `report`.
pub fn write_report<W: Write>(w: &mut W, report: &Report) -> io::Result<()> {
    let mode = report.mode();
    write_heading(
        w,
        &format!("{}. {} PARITY CALCULATION", section(mode), mode.label()),
    )?;
    writeln!(w)?;
    writeln!(w, "{} {}", "Original Data:".bold(), report.data())?;
    writeln!(w, "   Length: {} bits", report.data().len())?;
    writeln!(w, "   Count of 0's: {}", report.zeros())?;
    writeln!(w, "   Count of 1's: {}", report.ones())?;
    writeln!(w)?;
    writeln!(w, "{}", report.explanation().green())?;
    writeln!(
        w,
        "{} {}",
        "Generated Parity Bit:".bold(),
        report.parity_bit()
    )?;
    writeln!(
        w,
        "{} {}",
        "Transmitted Data:".bold(),
        report.transmitted()
    )
}
