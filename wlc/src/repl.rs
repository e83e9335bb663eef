use std::io::Write;

use compiler::config::Limits;
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::debug;

use crate::error::WlcError;

#[derive(Debug, Clone, PartialEq)]
pub enum IterStatus {
    Continue,
    Break,
}

/// Accumulates typed lines into one program. An empty line submits it.
pub struct Session {
    buffer: String,
    limits: Limits,
}

impl Session {
    pub fn new(limits: Limits) -> Self {
        Session {
            buffer: String::new(),
            limits,
        }
    }

    pub fn handle_line(&mut self, line: &str, out: &mut dyn Write) -> Result<IterStatus, WlcError> {
        let trimmed = line.trim();

        if self.buffer.is_empty() && trimmed == "quit" {
            return Ok(IterStatus::Break);
        }

        if trimmed.is_empty() {
            if !self.buffer.is_empty() {
                self.submit(out)?;
            }
        } else {
            self.buffer.push_str(line);
            self.buffer.push('\n');
        }

        Ok(IterStatus::Continue)
    }

    fn submit(&mut self, out: &mut dyn Write) -> Result<(), WlcError> {
        debug!(bytes = self.buffer.len(), "validating buffered program");

        match compiler::validate(self.buffer.as_bytes(), self.limits) {
            Ok(()) => writeln!(out, "Syntax verified")?,
            Err(e) => writeln!(out, "error: {}", e)?,
        }

        self.buffer = String::new();
        Ok(())
    }
}

pub struct Repl {
    prompt: String,
    editor: DefaultEditor,
    out: Box<dyn Write>,
    session: Session,
}

impl Repl {
    pub fn new(limits: Limits) -> Result<Self, WlcError> {
        Ok(Repl {
            prompt: "wlc> ".into(),
            editor: DefaultEditor::new()?,
            out: Box::new(std::io::stdout()),
            session: Session::new(limits),
        })
    }

    fn iter(&mut self) -> Result<IterStatus, WlcError> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.trim())?;
                }
                self.session.handle_line(&line, &mut self.out)
            }
            Err(ReadlineError::Interrupted) => {
                writeln!(&mut self.out, "SIGINT received; exiting...")?;
                Ok(IterStatus::Break)
            }
            Err(ReadlineError::Eof) => Ok(IterStatus::Break),
            Err(err) => {
                writeln!(&mut self.out, "Error: {err:?}")?;
                Ok(IterStatus::Continue)
            }
        }
    }

    pub fn run(&mut self) -> Result<(), WlcError> {
        while self.iter()? == IterStatus::Continue {}
        Ok(())
    }
}
