//! Output formatting for human and JSON modes
//!
//! Human mode streams one line per resolution step, flushing after each so
//! progress shows up while git is still working. JSON mode stays silent until
//! the run finishes and then prints the whole [`ResolutionReport`].

use std::io::{self, Write};

use crate::core::models::ResolutionReport;
use crate::core::ports::{Progress, ResolveEvent};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Writes resolution progress as console lines
#[derive(Debug)]
pub struct HumanPrinter<W: Write> {
    out: W,
}

impl<W: Write> HumanPrinter<W> {
    /// Print to `out`
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Progress for HumanPrinter<W> {
    fn event(&mut self, event: &ResolveEvent<'_>) -> io::Result<()> {
        match event {
            ResolveEvent::Listed { total } => {
                writeln!(self.out, "Total remaining conflicts: {total}")?;
            },
            ResolveEvent::Resolving { count } => {
                writeln!(self.out, "Resolving {count} files with --theirs...")?;
            },
            ResolveEvent::Failed(record) => {
                writeln!(self.out, "  FAIL: {}: {}", record.path, record.message)?;
            },
            ResolveEvent::Resolved { failed } => {
                writeln!(self.out)?;
                writeln!(self.out, "Failed count: {failed}")?;
            },
            ResolveEvent::Remaining(paths) => {
                writeln!(self.out, "Remaining conflicts: {}", paths.len())?;
                for path in *paths {
                    writeln!(self.out, "  {path}")?;
                    self.out.flush()?;
                }
            },
        }
        self.out.flush()
    }
}

impl ResolutionReport {
    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render the final report based on output mode
    ///
    /// Human mode prints nothing here: its lines were already streamed by
    /// [`HumanPrinter`].
    pub fn render(&self, mode: OutputMode) -> anyhow::Result<()> {
        if mode == OutputMode::Json {
            println!("{}", self.to_json()?);
        }
        Ok(())
    }
}
