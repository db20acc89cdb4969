//! Menu options presented after the data has been entered.

use crate::report::BANNER;
use colored::Colorize;
use paritybit::Mode;
use std::io::{self, Write};

/// Lowest valid menu number.
pub const FIRST: i64 = 1;

/// Highest valid menu number.
pub const LAST: i64 = 5;

/// A selectable menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    EvenReport = 1,
    OddReport = 2,
    EvenChart = 3,
    OddChart = 4,
    Exit = 5,
}

impl Choice {
    /// All entries, in the order they are listed.
    pub const ALL: [Choice; 5] = [
        Choice::EvenReport,
        Choice::OddReport,
        Choice::EvenChart,
        Choice::OddChart,
        Choice::Exit,
    ];

    /// Text shown next to the entry's number.
    pub fn title(&self) -> &'static str {
        match self {
            Choice::EvenReport => "EVEN PARITY",
            Choice::OddReport => "ODD PARITY",
            Choice::EvenChart => "EVEN PARITY GRAPH",
            Choice::OddChart => "ODD PARITY GRAPH",
            Choice::Exit => "EXIT",
        }
    }

    /// Entry numbered `value`, which must already lie within [FIRST]..=[LAST].
    pub fn from_validated(value: i64) -> Self {
        // Entries are numbered consecutively from FIRST
        Self::ALL[(value - FIRST) as usize]
    }

    /// Parity convention the entry acts on, if any.
    pub fn mode(&self) -> Option<Mode> {
        match self {
            Choice::EvenReport | Choice::EvenChart => Some(Mode::Even),
            Choice::OddReport | Choice::OddChart => Some(Mode::Odd),
            Choice::Exit => None,
        }
    }
}

/// Print the numbered list of options.
pub fn write_menu<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{BANNER}")?;
    writeln!(w, "  {}", "MENU OPTIONS".bold())?;
    writeln!(w, "{BANNER}")?;
    for choice in Choice::ALL {
        writeln!(w, "   {}. {}", choice as i64, choice.title())?;
    }
    writeln!(w, "{BANNER}")
}
