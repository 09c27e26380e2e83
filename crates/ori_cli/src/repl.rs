//! Interactive prompt for Ori.

use anyhow::{anyhow, Result};
use ori_driver::{RunOptions, Session};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::io;

/// The Ori prompt. Each line is scanned on its own.
pub struct Repl {
    session: Session,
    editor: DefaultEditor,
    /// Number of lines scanned so far
    line_number: usize,
}

impl Repl {
    /// Create a new REPL instance.
    pub fn new(options: RunOptions) -> RlResult<Self> {
        let editor = DefaultEditor::new()?;

        Ok(Self {
            session: Session::new(options),
            editor,
            line_number: 0,
        })
    }

    /// Run the REPL main loop.
    pub fn run(&mut self) -> Result<()> {
        println!("Ori {}", env!("CARGO_PKG_VERSION"));
        println!("Type :help for available commands, :quit to exit");
        println!();

        loop {
            match self.editor.readline("> ") {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    let _ = self.editor.add_history_entry(line);

                    if line.starts_with(':') {
                        match self.handle_command(line) {
                            Ok(should_continue) => {
                                if !should_continue {
                                    break;
                                }
                            }
                            Err(e) => {
                                eprintln!("error: {}", e);
                            }
                        }
                        continue;
                    }

                    self.scan_line(line)?;
                    self.line_number += 1;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                }
                Err(ReadlineError::Eof) => {
                    break;
                }
                Err(err) => {
                    return Err(anyhow!("failed to read line: {}", err));
                }
            }
        }

        Ok(())
    }

    /// Scan one line and print the result. Errors on a line never end the session.
    fn scan_line(&mut self, line: &str) -> Result<()> {
        tracing::debug!(line = self.line_number, "scanning prompt input");
        let scanned = self.session.run(line);
        self.session
            .emit(line, &scanned, &mut io::stdout(), &mut io::stderr())?;
        self.session.reset();
        Ok(())
    }

    /// Handle a REPL command (lines starting with ':').
    fn handle_command(&mut self, cmd: &str) -> Result<bool> {
        match cmd {
            ":quit" | ":q" | ":exit" => Ok(false),
            ":help" | ":h" | ":?" => {
                self.print_help();
                Ok(true)
            }
            ":count" => {
                println!("{} line(s) scanned", self.line_number);
                Ok(true)
            }
            _ => Err(anyhow!(
                "unknown command: {}. Type :help for available commands.",
                cmd
            )),
        }
    }

    fn print_help(&self) {
        println!("Ori prompt commands:");
        println!();
        println!("  :help, :h, :?    Show this help message");
        println!("  :quit, :q, :exit Exit the prompt");
        println!("  :count           Show how many lines have been scanned");
        println!();
        println!("Any other input is scanned and its tokens are printed.");
        println!();
    }
}
