use std::io::{self, Cursor};

use unitcalc::repl::{LineSource, run};

fn transcript(input: &str) -> String {
    let mut out = Vec::new();
    run(&mut Cursor::new(input), &mut out).expect("in-memory I/O never fails");
    String::from_utf8(out).expect("output is UTF-8")
}

#[test]
fn one_output_per_line() {
    assert_eq!(transcript("1 + 1\n2 km -> m\n"), "2\n2000 m\n");
}

#[test]
fn blank_lines_print_nothing() {
    assert_eq!(transcript("\n   \n3\n"), "3\n");
}

#[test]
fn errors_do_not_end_the_session() {
    assert_eq!(transcript("x = 3\n1 / 0\nx\n"), "x = 3\nError: Division by zero.\n3\n");
}

#[test]
fn quit_stops_reading() {
    assert_eq!(transcript("1\nexit\n2\n"), "1\n");
    assert_eq!(transcript("quit"), "");
}

#[test]
fn missing_final_newline_and_crlf() {
    assert_eq!(transcript("1 + 2\r\n4"), "3\n4\n");
}

#[test]
fn help_prints_usage() {
    let out = transcript("help\n");
    assert!(out.contains("Conversion:"));
    assert!(out.contains("->"));
}

#[test]
fn buffered_readers_are_line_sources() {
    let mut source = Cursor::new("a\n\nb");
    assert_eq!(source.next_line().unwrap(), Some("a".to_string()));
    assert_eq!(source.next_line().unwrap(), Some(String::new()));
    assert_eq!(source.next_line().unwrap(), Some("b".to_string()));
    assert_eq!(source.next_line().unwrap(), None);
}

/// A source that fails after handing out its lines.
struct Failing(Vec<&'static str>);

impl LineSource for Failing {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        if self.0.is_empty() {
            return Err(io::Error::other("terminal closed"));
        }
        Ok(Some(self.0.remove(0).to_string()))
    }
}

#[test]
fn source_errors_are_returned() {
    let mut out = Vec::new();
    let error = run(&mut Failing(vec!["1 km"]), &mut out).unwrap_err();

    assert_eq!(error.to_string(), "terminal closed");
    assert_eq!(String::from_utf8(out).unwrap(), "1 km\n");
}
