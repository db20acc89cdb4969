//! Bar-chart visualization of a transmitted frame.
//!
//! Every bit of the transmitted string (data followed by the parity bit) becomes one bar whose
//! height is the bit value. Zero-bits and one-bits are colored differently, and the final bar is
//! always highlighted as the parity bit. The [Chart] model is pure; [draw] lays it out on any
//! `ratatui` backend and [TerminalViewer] shows it full-screen until a key is pressed.

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use paritybit::Report;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use tracing::info;

/// Widest bar drawn, in columns.
const MAX_BAR_WIDTH: u16 = 5;

/// Columns between adjacent bars.
const BAR_GAP: u16 = 1;

/// Color class of a bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    Zero,
    One,
    Parity,
}

impl Shade {
    /// RGB components of the shade.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Shade::Zero => (0xFF, 0x6B, 0x6B),
            Shade::One => (0x4E, 0xCD, 0xC4),
            Shade::Parity => (0xFF, 0xD9, 0x3D),
        }
    }

    fn color(&self) -> Color {
        let (r, g, b) = self.rgb();
        Color::Rgb(r, g, b)
    }
}

/// A single bar of the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub position: usize,
    pub value: u8,
    pub shade: Shade,
}

/// Everything needed to draw a chart for one [Report].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chart {
    pub title: String,
    pub caption: String,
    pub annotation: String,
    pub columns: Vec<Column>,
}

impl Chart {
    pub fn new(report: &Report) -> Self {
        let transmitted = report.transmitted();
        let last = transmitted.len() - 1;
        let columns = transmitted
            .bytes()
            .enumerate()
            .map(|(position, b)| {
                let value = (b == b'1') as u8;
                let shade = if position == last {
                    Shade::Parity
                } else if value == 1 {
                    Shade::One
                } else {
                    Shade::Zero
                };
                Column {
                    position,
                    value,
                    shade,
                }
            })
            .collect();

        Self {
            title: format!("{} PARITY VISUALIZATION", report.mode().label()),
            caption: format!(
                "Data: {} | Parity Bit: {} | Transmitted: {}",
                report.data(),
                report.parity_bit(),
                transmitted
            ),
            annotation: format!(
                "0's: {} | 1's: {} | Parity: {} (Yellow)",
                report.zeros(),
                report.ones(),
                report.parity_bit()
            ),
            columns,
        }
    }
}

/// Bar width and gap so that all columns fit in `inner` columns.
///
/// The gap is dropped before bars get narrower than one column. Returns `None` if even
/// gapless, single-column bars do not fit.
fn bar_layout(inner: u16, columns: usize) -> Option<(u16, u16)> {
    let columns = u16::try_from(columns.max(1)).ok()?;
    let per_column = inner / columns;
    if per_column > BAR_GAP {
        return Some(((per_column - BAR_GAP).min(MAX_BAR_WIDTH), BAR_GAP));
    }
    if per_column >= 1 {
        return Some((1, 0));
    }
    None
}

/// Lay out `chart` over the whole frame.
pub fn draw(frame: &mut Frame, chart: &Chart) {
    let [caption, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(2),
    ])
    .areas(frame.size());

    frame.render_widget(
        Paragraph::new(Line::from(chart.caption.as_str()))
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        caption,
    );

    let bars: Vec<Bar> = chart
        .columns
        .iter()
        .map(|column| {
            let color = column.shade.color();
            Bar::default()
                .value(column.value as u64)
                .text_value(column.value.to_string())
                .label(Line::styled(
                    column.position.to_string(),
                    Style::default().fg(color),
                ))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", chart.title))
        .title_alignment(Alignment::Center);
    match bar_layout(body.width.saturating_sub(2), bars.len()) {
        Some((width, gap)) => {
            let widget = BarChart::default()
                .block(block)
                .data(BarGroup::default().bars(&bars))
                .bar_width(width)
                .bar_gap(gap)
                .max(1);
            frame.render_widget(widget, body);
        }
        None => {
            // A partial chart would hide the parity bar
            frame.render_widget(
                Paragraph::new(format!(
                    "terminal too narrow for {} bars",
                    chart.columns.len()
                ))
                .alignment(Alignment::Center)
                .block(block),
                body,
            );
        }
    }

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(chart.annotation.as_str()),
            Line::styled(
                "x: bit position | y: bit value | press any key to close",
                Style::default().add_modifier(Modifier::DIM),
            ),
        ])
        .alignment(Alignment::Center),
        footer,
    );
}

/// Presents a [Chart] to the user.
pub trait Viewer {
    /// Show `chart`, returning once the user has dismissed it.
    fn show(&mut self, chart: &Chart) -> io::Result<()>;
}

/// Shows charts full-screen on the controlling terminal.
#[derive(Default)]
pub struct TerminalViewer;

impl TerminalViewer {
    fn display(chart: &Chart) -> io::Result<()> {
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.hide_cursor()?;
        loop {
            terminal.draw(|frame| draw(frame, chart))?;

            // Redraw on resize, close on the first key press
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    break;
                }
            }
        }
        terminal.show_cursor()
    }
}

impl Viewer for TerminalViewer {
    fn show(&mut self, chart: &Chart) -> io::Result<()> {
        enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        info!(title = %chart.title, "opened chart");

        // Always restore the terminal, even if drawing failed
        let result = Self::display(chart);
        let restored =
            disable_raw_mode().and_then(|_| execute!(io::stdout(), LeaveAlternateScreen));
        info!(title = %chart.title, "closed chart");
        result.and(restored)
    }
}
