//! Command-line interface for the Ori front end.

mod repl;

use clap::{Parser, Subcommand};
use ori_ast::Expr;
use ori_driver::{read_source, RunOptions, Session};
use ori_lexer::{Token, TokenKind};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ori")]
#[command(author, version, about = "The Ori scripting language front end", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan an Ori script and print its tokens
    Run {
        /// The script to scan
        #[arg(required = true)]
        input: PathBuf,

        /// Only report diagnostics, do not print tokens
        #[arg(short, long)]
        quiet: bool,
    },

    /// Start the interactive prompt
    Repl,

    /// Print a sample expression tree
    Demo,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut options = RunOptions::default();
    if cli.verbose {
        options = options.with_verbose();
    }

    match cli.command {
        Commands::Run { input, quiet } => run_file(&input, options.with_print_tokens(!quiet)),

        Commands::Repl => match repl::Repl::new(options) {
            Ok(mut repl) => {
                if let Err(e) = repl.run() {
                    eprintln!("error: {}", e);
                    ExitCode::FAILURE
                } else {
                    ExitCode::SUCCESS
                }
            }
            Err(e) => {
                eprintln!("error: failed to initialize REPL: {}", e);
                ExitCode::FAILURE
            }
        },

        Commands::Demo => {
            println!("{}", ori_ast::print(&demo_tree()));
            ExitCode::SUCCESS
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_file(input: &Path, options: RunOptions) -> ExitCode {
    let mut session = Session::new(options);

    let source = match read_source(input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    let scanned = session.run(&source);
    if let Err(e) = session.emit(&source, &scanned, &mut io::stdout(), &mut io::stderr()) {
        eprintln!("error: failed to write output: {}", e);
        return ExitCode::FAILURE;
    }

    match session.finish() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(e.exit_code()),
    }
}

/// `-123 * (45.67)`
fn demo_tree() -> Expr {
    Expr::binary(
        Expr::unary(Token::synthetic(TokenKind::Minus, "-", 1), Expr::literal(123.0)),
        Token::synthetic(TokenKind::Star, "*", 1),
        Expr::grouping(Expr::literal(45.67)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_tree() {
        assert_eq!(ori_ast::print(&demo_tree()), "(* (- 123) (group 45.67))");
    }

    #[test]
    fn test_parse_run() {
        let cli = Cli::try_parse_from(["ori", "run", "script.ori", "--quiet"]).unwrap();

        assert!(!cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Run { ref input, quiet: true } if input == &PathBuf::from("script.ori")
        ));
    }

    #[test]
    fn test_parse_global_verbose() {
        let cli = Cli::try_parse_from(["ori", "repl", "-v"]).unwrap();

        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Repl));
    }

    #[test]
    fn test_run_requires_input() {
        assert!(Cli::try_parse_from(["ori", "run"]).is_err());
    }
}
