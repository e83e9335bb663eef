//! `wlc` checks that a source file is a syntactically valid while-language
//! program.
//!
//! ```bash
//! wlc program.wl              # validate a file
//! wlc --tokens program.wl     # print the token stream
//! wlc --interactive           # validate programs typed at a prompt
//! ```
//!
//! Exit status is 0 when the syntax is verified, 1 on a syntax error, 2 when
//! no input file is given and 3 when the file cannot be opened.

use std::{fs::File, io::Write, path::PathBuf, process::ExitCode};

use clap::{CommandFactory, Parser};
use compiler::config::{Limits, DEFAULT_MAX_LEXEME_LEN, DEFAULT_MAX_NESTING_DEPTH};
use error::WlcError;
use repl::Repl;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod error;
mod repl;

#[derive(Debug, Parser)]
#[command(name = "wlc", version, about = "Syntax checker for the while language")]
struct Args {
    /// Source file to validate
    path: Option<PathBuf>,

    /// Print one `lexeme<TAB>kind` line per token instead of validating
    #[arg(long)]
    tokens: bool,

    /// Read programs from an interactive prompt; an empty line submits
    #[arg(short, long, conflicts_with_all = ["path", "tokens"])]
    interactive: bool,

    /// Longest lexeme kept before it is truncated
    #[arg(long, default_value_t = DEFAULT_MAX_LEXEME_LEN)]
    max_lexeme_len: usize,

    /// Deepest allowed nesting of loops and parenthesized expressions
    #[arg(long, default_value_t = DEFAULT_MAX_NESTING_DEPTH)]
    max_depth: usize,
}

impl Args {
    fn limits(&self) -> Limits {
        Limits::default()
            .with_max_lexeme_len(self.max_lexeme_len)
            .with_max_nesting_depth(self.max_depth)
    }
}

fn run(args: &Args, out: &mut dyn Write) -> Result<(), WlcError> {
    let limits = args.limits();

    if args.interactive {
        return Repl::new(limits)?.run();
    }

    let path = match &args.path {
        Some(path) => path,
        None => return Err(WlcError::Usage(Args::command().render_usage().to_string())),
    };

    let file = File::open(path).map_err(|e| {
        debug!(path = %path.display(), error = %e, "failed to open source");
        WlcError::FileNotFound {
            path: path.display().to_string(),
        }
    })?;

    if args.tokens {
        for token in compiler::tokenize(file, limits)? {
            writeln!(out, "{}", token)?;
        }
        return Ok(());
    }

    compiler::validate(file, limits)?;
    writeln!(out, "Syntax verified")?;

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args, &mut std::io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
