use std::{
    fs,
    io::{self, IsTerminal},
};

use anyhow::Context;
use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use unitcalc::repl::{LineSource, run};

/// unitcalc is a calculator that keeps track of units, converts between
/// them and checks that expressions make dimensional sense.
///
/// Without CONTENTS it starts an interactive prompt, or reads standard input
/// line by line when that is not a terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells unitcalc to treat CONTENTS as the path of a file to evaluate.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Raises the log level; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Statements to evaluate, one per line.
    contents: Option<String>,
}

/// Interactive line source with in-memory history.
struct Prompt {
    editor: DefaultEditor,
}

impl LineSource for Prompt {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        match self.editor.readline(">>> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(error) = self.editor.add_history_entry(line.as_str()) {
                        tracing::warn!(%error, "could not add line to history");
                    }
                }
                Ok(Some(line))
            },
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::other(e.to_string())),
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = if verbose > 0 {
        EnvFilter::new(default)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };

    tracing_subscriber::registry().with(filter)
                                  .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                                  .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut stdout = io::stdout().lock();

    match args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).with_context(|| {
                                                      format!("Failed to read the input file '{path}'. \
                                                               Perhaps this file does not exist?")
                                                  })?;
            run(&mut script.as_bytes(), &mut stdout)?;
        },
        Some(script) => run(&mut script.as_bytes(), &mut stdout)?,
        None if io::stdin().is_terminal() => {
            let editor = DefaultEditor::new().context("Failed to start the line editor")?;
            run(&mut Prompt { editor }, &mut stdout)?;
        },
        None => run(&mut io::stdin().lock(), &mut stdout)?,
    }

    Ok(())
}
