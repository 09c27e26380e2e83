//! Run session management.

use crate::{DriverError, DriverResult};
use ori_lexer::{scan_tokens, Diagnostic, Scanned};
use std::io::{self, Write};
use std::path::Path;

/// Read a whole script into memory.
pub fn read_source(path: &Path) -> DriverResult<String> {
    std::fs::read_to_string(path).map_err(|source| DriverError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Options for running sources.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Echo each source line to the error stream before scanning.
    pub verbose: bool,

    /// Print every scanned token on its own line.
    pub print_tokens: bool,

    /// Print diagnostics to the error stream.
    pub print_diagnostics: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            print_tokens: true,
            print_diagnostics: true,
        }
    }
}

impl RunOptions {
    /// Create options that print nothing.
    pub fn quiet() -> Self {
        Self {
            print_tokens: false,
            print_diagnostics: false,
            ..Default::default()
        }
    }

    /// Enable verbose output.
    pub fn with_verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    pub fn with_print_tokens(mut self, print_tokens: bool) -> Self {
        self.print_tokens = print_tokens;
        self
    }
}

/// A run session holding diagnostics across multiple runs.
#[derive(Debug, Default)]
pub struct Session {
    options: RunOptions,

    /// Diagnostics from every run since the last reset.
    diagnostics: Vec<Diagnostic>,

    /// Number of sources run since the last reset.
    runs: usize,
}

impl Session {
    /// Create a new session.
    pub fn new(options: RunOptions) -> Self {
        Self {
            options,
            diagnostics: Vec::new(),
            runs: 0,
        }
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Scan a source and record its diagnostics.
    pub fn run(&mut self, source: &str) -> Scanned {
        let scanned = scan_tokens(source);
        self.runs += 1;

        tracing::debug!(
            run = self.runs,
            bytes = source.len(),
            tokens = scanned.tokens.len(),
            "scanned source"
        );
        if scanned.has_errors() {
            tracing::warn!(
                run = self.runs,
                count = scanned.diagnostics.len(),
                "source has lexical errors"
            );
        }

        self.diagnostics.extend(scanned.diagnostics.iter().cloned());
        scanned
    }

    /// Read and scan a whole file.
    pub fn run_file(&mut self, path: &Path) -> DriverResult<Scanned> {
        let source = read_source(path)?;
        Ok(self.run(&source))
    }

    /// Write a run's output according to the session options.
    pub fn emit<W: Write, E: Write>(
        &self,
        source: &str,
        scanned: &Scanned,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<()> {
        if self.options.verbose {
            for (i, line) in source.lines().enumerate() {
                writeln!(err, "  {:3}: {}", i + 1, line)?;
            }
        }
        if self.options.print_tokens {
            for token in &scanned.tokens {
                writeln!(out, "{}", token)?;
            }
        }
        if self.options.print_diagnostics {
            for diagnostic in &scanned.diagnostics {
                writeln!(err, "{}", diagnostic)?;
            }
        }
        Ok(())
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Check if the session has any errors.
    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Forget recorded diagnostics, e.g. between interactive lines.
    pub fn reset(&mut self) {
        self.diagnostics.clear();
        self.runs = 0;
    }

    /// Fails with [`DriverError::Lex`] if any run since the last reset reported diagnostics.
    pub fn finish(&self) -> DriverResult<()> {
        if self.had_error() {
            Err(DriverError::Lex {
                count: self.diagnostics.len(),
            })
        } else {
            Ok(())
        }
    }
}
