use std::io::{self, BufRead, Write};

use crate::interpreter::session::{Outcome, Session};

/// Something that hands out committed lines of input, one at a time.
pub trait LineSource {
    /// Returns the next line without its terminator, `Some("")` for a blank
    /// line, or `None` once the input is exhausted.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Feeds every line of `source` to a fresh [`Session`] and writes one output
/// per line to `out`.
///
/// Blank lines produce no output. Stops after `quit`/`exit` or at the end of
/// the input.
///
/// # Errors
/// Returns any I/O error raised by the source or the writer. Errors in the
/// evaluated lines are written to `out` and never stop the loop.
///
/// ## Example
/// ```
/// use unitcalc::repl::run;
///
/// let input = "x = 2 km\nx + 500 m\nquit\n1 + 1\n";
/// let mut out = Vec::new();
/// run(&mut input.as_bytes(), &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "x = 2 km\n2.5 km\n");
/// ```
pub fn run<S, W>(source: &mut S, out: &mut W) -> io::Result<()>
    where S: LineSource + ?Sized,
          W: Write
{
    let mut session = Session::new();

    while let Some(line) = source.next_line()? {
        let outcome = session.execute_line(&line);
        match outcome {
            Outcome::Quit => break,
            Outcome::Empty => {},
            outcome => writeln!(out, "{outcome}")?,
        }
    }

    out.flush()
}
