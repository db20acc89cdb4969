use std::io;
use terminal::{
    chart::{Chart, Shade, Viewer},
    Error, Session,
};

/// Records every chart it is asked to show.
#[derive(Default)]
struct Recorder {
    shown: Vec<Chart>,
}

impl Viewer for Recorder {
    fn show(&mut self, chart: &Chart) -> io::Result<()> {
        self.shown.push(chart.clone());
        Ok(())
    }
}

/// Run a session over `input`, returning the outcome, printed text and shown charts.
fn run(input: &str, initial: Option<&str>) -> (Result<(), Error>, String, Vec<Chart>) {
    colored::control::set_override(false);
    let mut session = Session::new(input.as_bytes(), Vec::new(), Recorder::default());
    let result = session.run(initial);
    let (_, output, recorder) = session.into_parts();
    (result, String::from_utf8(output).unwrap(), recorder.shown)
}

#[test]
fn reports_then_exit() {
    let (result, output, shown) = run("1011\n1\n2\n5\n", None);
    assert!(result.is_ok());
    assert!(shown.is_empty());
    assert!(output.contains("PARITY FINDING SYSTEM"));
    assert!(output.contains("Enter Binary Data (4-32 bits): "));
    assert!(output.contains("1. EVEN PARITY CALCULATION"));
    assert!(output.contains("Transmitted Data: 10111\n"));
    assert!(output.contains("2. ODD PARITY CALCULATION"));
    assert!(output.contains("Transmitted Data: 10110\n"));
    assert!(output.contains("THANK YOU! PROGRAM EXITED SUCCESSFULLY!"));
}

#[test]
fn invalid_data_is_reprompted() {
    let (result, output, _) = run("\n10a1\n101\n100000000000000000000000000000001\n0000\n1\n5\n", None);
    assert!(result.is_ok());
    assert!(output.contains("Error: input cannot be empty\n"));
    assert!(output.contains("Error: invalid character 'a' at position 2"));
    assert!(output.contains("Error: binary data must be at least 4 bits long"));
    assert!(output.contains("Error: binary data cannot exceed 32 bits"));
    assert_eq!(output.matches("Enter Binary Data").count(), 5);
    assert!(output.contains("Generated Parity Bit: 0\n"));
}

#[test]
fn invalid_choice_is_reprompted() {
    let (result, output, _) = run("1011\n7\nabc\n\n3x\n5\n", None);
    assert!(result.is_ok());
    assert!(output.contains("Error: 7 is out of range: enter a number between 1 and 5"));
    assert!(output.contains("Error: invalid input 'abc': enter an integer only"));
    assert!(output.contains("Error: input cannot be empty: enter a number between 1 and 5"));
    assert!(output.contains("Error: invalid input '3x': enter an integer only"));
    assert_eq!(output.matches("Enter your choice (1-5): ").count(), 5);
    assert!(!output.contains("PARITY CALCULATION"));
}

#[test]
fn charts_are_shown() {
    let (result, output, shown) = run("4\n3\n5\n", Some("0000"));
    assert!(result.is_ok());
    assert!(!output.contains("Enter Binary Data"));
    assert!(output.contains("Generating ODD Parity Graph..."));
    assert!(output.contains("Generating EVEN Parity Graph..."));

    assert_eq!(shown.len(), 2);
    assert_eq!(shown[0].title, "ODD PARITY VISUALIZATION");
    assert_eq!(
        shown[0].caption,
        "Data: 0000 | Parity Bit: 1 | Transmitted: 00001"
    );
    assert_eq!(shown[1].title, "EVEN PARITY VISUALIZATION");
    assert_eq!(shown[1].columns.len(), 5);
    assert!(shown[1].columns[..4].iter().all(|c| c.shade == Shade::Zero));
    assert_eq!(shown[1].columns[4].shade, Shade::Parity);
}

/// Fails every request, like a viewer without a controlling terminal.
struct Unavailable;

impl Viewer for Unavailable {
    fn show(&mut self, _: &Chart) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "not a terminal"))
    }
}

#[test]
fn chart_failure_returns_to_menu() {
    colored::control::set_override(false);
    let mut session = Session::new("3\n1\n5\n".as_bytes(), Vec::new(), Unavailable);
    let result = session.run(Some("1011"));
    let (_, output, _) = session.into_parts();
    let output = String::from_utf8(output).unwrap();
    assert!(result.is_ok());
    assert!(output.contains("Error: could not display chart: not a terminal\n"));
    assert!(output.contains("Transmitted Data: 10111\n"));
    assert_eq!(output.matches("MENU OPTIONS").count(), 3);
}

#[test]
fn invalid_initial_data_falls_back_to_prompt() {
    let (result, output, _) = run("1111\n1\n5\n", Some("12"));
    assert!(result.is_ok());
    assert!(output.contains("Error: invalid character '2' at position 1"));
    assert_eq!(output.matches("Enter Binary Data").count(), 1);
    assert!(output.contains("Transmitted Data: 11110\n"));
}

#[test]
fn closed_input_ends_session() {
    let (result, _, _) = run("1011\n1\n", None);
    assert!(matches!(result, Err(Error::Closed)));

    let (result, output, _) = run("", None);
    assert!(matches!(result, Err(Error::Closed)));
    assert!(output.contains("Enter Binary Data"));
}
